use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity};
use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(User::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::users::Model as UserModel;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn create_mock_user_model(id: i32, is_active: bool) -> UserModel {
        let now = Utc::now();
        UserModel {
            id,
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "hashed_password".to_string(),
            is_active,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_email_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![create_mock_user_model(5, true)]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let user = query
            .find_by_email("test@example.com")
            .await
            .unwrap()
            .expect("user should be found");

        assert_eq!(user.id.value(), 5);
        assert_eq!(user.email, "test@example.com");
        assert_eq!(user.first_name, "Test");
        assert!(user.is_active);
    }

    #[tokio::test]
    async fn test_find_by_email_returns_inactive_accounts() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![create_mock_user_model(6, false)]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let user = query.find_by_email("test@example.com").await.unwrap();

        assert!(matches!(user, Some(u) if !u.is_active));
    }

    #[tokio::test]
    async fn test_find_by_email_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let result = query.find_by_email("nobody@example.com").await;

        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn test_find_by_email_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let result = query.find_by_email("test@example.com").await;

        match result {
            Err(UserQueryError::DatabaseError(msg)) => assert!(msg.contains("connection reset")),
            other => panic!("Expected DatabaseError, got {:?}", other),
        }
    }
}
