use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::modules::bucketlist::adapter::outgoing::sea_orm_entity::bucketlists::{
    Column, Entity,
};
use crate::modules::bucketlist::application::ports::outgoing::{
    BucketlistQuery, BucketlistQueryError, BucketlistResult,
};

#[derive(Clone)]
pub struct BucketlistQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BucketlistQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BucketlistQuery for BucketlistQueryPostgres {
    async fn find_by_id(
        &self,
        owner: UserId,
        bucketlist_id: i32,
    ) -> Result<BucketlistResult, BucketlistQueryError> {
        Entity::find_by_id(bucketlist_id)
            .filter(Column::UserId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(BucketlistResult::from)
            .ok_or(BucketlistQueryError::NotFound)
    }

    async fn find_all_by_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<BucketlistResult>, BucketlistQueryError> {
        let rows = Entity::find()
            .filter(Column::UserId.eq(owner.value()))
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(BucketlistResult::from).collect())
    }
}

fn map_db_err(e: DbErr) -> BucketlistQueryError {
    BucketlistQueryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::bucketlist::adapter::outgoing::sea_orm_entity::bucketlists;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn model(id: i32, user_id: i32, name: &str) -> bucketlists::Model {
        let now = Utc::now().fixed_offset();
        bucketlists::Model {
            id,
            name: name.to_string(),
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn find_by_id_maps_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(3, 1, "Travel")]])
            .into_connection();

        let query = BucketlistQueryPostgres::new(Arc::new(db));
        let result = query.find_by_id(UserId::from(1), 3).await.unwrap();

        assert_eq!(result.id, 3);
        assert_eq!(result.name, "Travel");
        assert_eq!(result.created_by, UserId::from(1));
    }

    #[tokio::test]
    async fn find_by_id_filters_on_owner() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<bucketlists::Model>::new()])
                .into_connection(),
        );

        let query = BucketlistQueryPostgres::new(db.clone());
        let result = query.find_by_id(UserId::from(2), 3).await;

        assert!(matches!(result, Err(BucketlistQueryError::NotFound)));

        drop(query);
        let log = Arc::try_unwrap(db)
            .expect("query dropped its handle")
            .into_transaction_log();
        let sql = format!("{:?}", log);
        assert!(sql.contains("user_id"));
        assert!(sql.contains("Int(Some(2))"));
    }

    #[tokio::test]
    async fn find_all_by_owner_returns_rows_in_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, 5, "First"), model(2, 5, "Second")]])
            .into_connection();

        let query = BucketlistQueryPostgres::new(Arc::new(db));
        let result = query.find_all_by_owner(UserId::from(5)).await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "First");
        assert_eq!(result[1].name, "Second");
    }

    #[tokio::test]
    async fn find_all_by_owner_maps_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("db down".to_string())])
            .into_connection();

        let query = BucketlistQueryPostgres::new(Arc::new(db));
        let result = query.find_all_by_owner(UserId::from(5)).await;

        assert!(matches!(result, Err(BucketlistQueryError::DatabaseError(_))));
    }
}
