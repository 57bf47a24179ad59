use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::modules::item::adapter::outgoing::sea_orm_entity::items::{Column, Entity};
use crate::modules::item::application::ports::outgoing::{ItemQuery, ItemQueryError, ItemResult};

#[derive(Clone)]
pub struct ItemQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ItemQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemQuery for ItemQueryPostgres {
    async fn find_by_id(
        &self,
        bucketlist_id: i32,
        item_id: i32,
    ) -> Result<ItemResult, ItemQueryError> {
        Entity::find_by_id(item_id)
            .filter(Column::BucketlistId.eq(bucketlist_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(ItemResult::from)
            .ok_or(ItemQueryError::NotFound)
    }

    async fn find_all_by_bucketlist(
        &self,
        bucketlist_id: i32,
    ) -> Result<Vec<ItemResult>, ItemQueryError> {
        let rows = Entity::find()
            .filter(Column::BucketlistId.eq(bucketlist_id))
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(ItemResult::from).collect())
    }
}

fn map_db_err(e: DbErr) -> ItemQueryError {
    ItemQueryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::item::adapter::outgoing::sea_orm_entity::items;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn model(id: i32, bucketlist_id: i32, name: &str, done: bool) -> items::Model {
        let now = Utc::now().fixed_offset();
        items::Model {
            id,
            name: name.to_string(),
            bucketlist_id,
            done,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn find_by_id_maps_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(7, 3, "Visit Lamu", true)]])
            .into_connection();

        let query = ItemQueryPostgres::new(Arc::new(db));
        let item = query.find_by_id(3, 7).await.unwrap();

        assert_eq!(item.id, 7);
        assert_eq!(item.bucketlist_id, 3);
        assert!(item.done);
    }

    #[tokio::test]
    async fn find_by_id_is_scoped_to_bucketlist() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<items::Model>::new()])
                .into_connection(),
        );

        let query = ItemQueryPostgres::new(db.clone());
        let result = query.find_by_id(4, 7).await;
        assert!(matches!(result, Err(ItemQueryError::NotFound)));

        drop(query);
        let log = Arc::try_unwrap(db)
            .expect("query dropped its handle")
            .into_transaction_log();
        let sql = format!("{:?}", log);
        assert!(sql.contains("bucketlist_id"));
        assert!(sql.contains("Int(Some(4))"));
    }

    #[tokio::test]
    async fn find_all_by_bucketlist_returns_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                model(1, 3, "Visit Lamu", false),
                model(2, 3, "Climb Kilimanjaro", true),
            ]])
            .into_connection();

        let query = ItemQueryPostgres::new(Arc::new(db));
        let items = query.find_all_by_bucketlist(3).await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name, "Climb Kilimanjaro");
    }

    #[tokio::test]
    async fn find_all_maps_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("db down".to_string())])
            .into_connection();

        let query = ItemQueryPostgres::new(Arc::new(db));
        let result = query.find_all_by_bucketlist(3).await;

        assert!(matches!(result, Err(ItemQueryError::DatabaseError(_))));
    }
}
