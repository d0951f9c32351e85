use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::DatabaseConnection;

use crate::{
    entity,
    error::ProductResult,
    models::{CreateProduct, Product},
    repository::ProductRepository,
};

/// PostgreSQL-backed ProductRepository
#[derive(Clone)]
pub struct PgProductRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn save(&self, input: CreateProduct) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();
        let model = self.base.save(active_model).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let models = self.base.find_all().await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    async fn exists_by_id(&self, id: i64) -> ProductResult<bool> {
        Ok(self.base.exists_by_id(id).await?)
    }

    async fn delete_by_id(&self, id: i64) -> ProductResult<()> {
        let rows_affected = self.base.delete_by_id(id).await?;
        tracing::info!(product_id = id, rows_affected, "Deleted product");
        Ok(())
    }
}
