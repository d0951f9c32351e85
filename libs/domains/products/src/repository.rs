use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product};

/// Key-based store for products, consumed by the HTTP handlers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product; the store assigns its id
    async fn save(&self, input: CreateProduct) -> ProductResult<Product>;

    /// All stored products, in store order
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    async fn exists_by_id(&self, id: i64) -> ProductResult<bool>;

    /// Remove the product stored under `id`, if any
    async fn delete_by_id(&self, id: i64) -> ProductResult<()>;
}

/// In-memory implementation of ProductRepository (for development/testing)
///
/// Ids come from a sequence starting at 1 and are never reused.
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<i64, Product>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let product = Product::new(id, input);
        products.insert(id, product.clone());

        tracing::info!(product_id = id, "Created product");
        Ok(product)
    }

    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> ProductResult<bool> {
        let products = self.products.read().await;
        Ok(products.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i64) -> ProductResult<()> {
        let removed = self.products.write().await.remove(&id).is_some();

        tracing::info!(product_id = id, removed, "Deleted product");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> CreateProduct {
        CreateProduct {
            name: "Widget".to_string(),
            description: None,
            price: 9.99,
        }
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repo = InMemoryProductRepository::new();

        let first = repo.save(widget()).await.unwrap();
        let second = repo.save(widget()).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.name, "Widget");
        assert_eq!(first.price, 9.99);
    }

    #[tokio::test]
    async fn test_find_by_id_and_exists() {
        let repo = InMemoryProductRepository::new();
        let product = repo.save(widget()).await.unwrap();

        assert_eq!(repo.find_by_id(product.id).await.unwrap(), Some(product.clone()));
        assert!(repo.exists_by_id(product.id).await.unwrap());

        assert_eq!(repo.find_by_id(999).await.unwrap(), None);
        assert!(!repo.exists_by_id(999).await.unwrap());
    }

    #[tokio::test]
    async fn test_find_all_in_id_order() {
        let repo = InMemoryProductRepository::new();
        for name in ["a", "b", "c"] {
            repo.save(CreateProduct {
                name: name.to_string(),
                ..widget()
            })
            .await
            .unwrap();
        }

        let ids: Vec<i64> = repo.find_all().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[tokio::test]
    async fn test_delete_removes_and_ids_are_not_reused() {
        let repo = InMemoryProductRepository::new();
        let product = repo.save(widget()).await.unwrap();

        repo.delete_by_id(product.id).await.unwrap();
        assert!(!repo.exists_by_id(product.id).await.unwrap());

        let next = repo.save(widget()).await.unwrap();
        assert_eq!(next.id, product.id + 1);
    }

    #[tokio::test]
    async fn test_delete_missing_is_silent() {
        let repo = InMemoryProductRepository::new();
        repo.save(widget()).await.unwrap();

        repo.delete_by_id(42).await.unwrap();
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemoryProductRepository::new();
        let clone = repo.clone();

        let product = repo.save(widget()).await.unwrap();
        assert!(clone.exists_by_id(product.id).await.unwrap());
    }
}
