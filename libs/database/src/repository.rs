//! Generic key-based repository over a SeaORM entity.
//!
//! Domain repositories wrap a [`BaseRepository`] and convert between their
//! domain types and the entity's `Model` / `ActiveModel`.

use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, Iterable, PrimaryKeyToColumn, PrimaryKeyTrait, QueryFilter,
    QueryOrder,
};

/// Primary key value type of entity `E`.
pub type PrimaryKeyOf<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// CRUD operations shared by every SeaORM-backed repository.
pub struct BaseRepository<E: EntityTrait> {
    db: DatabaseConnection,
    _entity: PhantomData<fn() -> E>,
}

impl<E: EntityTrait> Clone for BaseRepository<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E> BaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelBehavior + Send,
{
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Insert `model`, or update it when its primary key names an existing row.
    ///
    /// An unset primary key is left to the database (sequence / default).
    pub async fn save(&self, model: E::ActiveModel) -> Result<E::Model, DbErr> {
        if self.row_exists(&model).await? {
            model.update(&self.db).await
        } else {
            model.insert(&self.db).await
        }
    }

    /// All rows, ordered by primary key.
    pub async fn find_all(&self) -> Result<Vec<E::Model>, DbErr> {
        let mut query = E::find();
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }
        query.all(&self.db).await
    }

    pub async fn find_by_id(&self, id: PrimaryKeyOf<E>) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(&self.db).await
    }

    pub async fn exists_by_id(&self, id: PrimaryKeyOf<E>) -> Result<bool, DbErr> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    /// Delete by primary key, returning the number of rows removed.
    pub async fn delete_by_id(&self, id: PrimaryKeyOf<E>) -> Result<u64, DbErr> {
        let result = E::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }

    /// Whether every primary key column of `model` is set and matches a stored row.
    async fn row_exists(&self, model: &E::ActiveModel) -> Result<bool, DbErr> {
        let mut condition = Condition::all();
        for key in E::PrimaryKey::iter() {
            let column = key.into_column();
            match model.get(column).into_value() {
                Some(value) => condition = condition.add(column.eq(value)),
                None => return Ok(false),
            }
        }

        Ok(E::find().filter(condition).one(&self.db).await?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveValue::{NotSet, Set};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    mod widget {
        use sea_orm::entity::prelude::*;

        #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
        #[sea_orm(table_name = "widgets")]
        pub struct Model {
            #[sea_orm(primary_key)]
            pub id: i64,
            pub name: String,
        }

        #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
        pub enum Relation {}

        impl ActiveModelBehavior for ActiveModel {}
    }

    fn widget(id: i64, name: &str) -> widget::Model {
        widget::Model {
            id,
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_inserts_when_id_unset() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![widget(1, "sprocket")]])
            .into_connection();
        let repo = BaseRepository::<widget::Entity>::new(db);

        let saved = repo
            .save(widget::ActiveModel {
                id: NotSet,
                name: Set("sprocket".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(saved, widget(1, "sprocket"));
    }

    #[tokio::test]
    async fn test_save_updates_existing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![widget(7, "old")], vec![widget(7, "new")]])
            .into_connection();
        let repo = BaseRepository::<widget::Entity>::new(db);

        let saved = repo
            .save(widget::ActiveModel {
                id: Set(7),
                name: Set("new".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(saved, widget(7, "new"));
    }

    #[tokio::test]
    async fn test_find_all_and_find_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                vec![widget(1, "a"), widget(2, "b")],
                vec![widget(2, "b")],
                Vec::new(),
            ])
            .into_connection();
        let repo = BaseRepository::<widget::Entity>::new(db);

        assert_eq!(repo.find_all().await.unwrap().len(), 2);
        assert_eq!(repo.find_by_id(2).await.unwrap(), Some(widget(2, "b")));
        assert_eq!(repo.find_by_id(3).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_exists_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![widget(4, "gear")], Vec::new()])
            .into_connection();
        let repo = BaseRepository::<widget::Entity>::new(db);

        assert!(repo.exists_by_id(4).await.unwrap());
        assert!(!repo.exists_by_id(5).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_by_id_reports_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let repo = BaseRepository::<widget::Entity>::new(db);

        assert_eq!(repo.delete_by_id(9).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_query_errors_propagate() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".into())])
            .into_connection();
        let repo = BaseRepository::<widget::Entity>::new(db);

        assert!(repo.find_all().await.is_err());
    }
}
