use async_trait::async_trait;
use std::fmt;

use crate::auth::application::domain::entities::{User, UserId};

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}

/// Fresh profile data written over a deactivated account when its owner
/// registers again.
#[derive(Debug, Clone)]
pub struct ReactivateUserData {
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: CreateUserData) -> Result<User, UserRepositoryError>;

    async fn reactivate_user(
        &self,
        user_id: UserId,
        data: ReactivateUserData,
    ) -> Result<User, UserRepositoryError>;

    /// Flags an active account as inactive
    async fn soft_delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError>;

    /// Removes the row. Bucketlists and items go with it through the FK cascade.
    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError>;
}

#[derive(Debug)]
pub enum UserRepositoryError {
    UserAlreadyExists,
    UserNotFound,
    DatabaseError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for UserRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRepositoryError::UserNotFound => write!(f, "User not found"),
            UserRepositoryError::UserAlreadyExists => write!(f, "User already exists"),
            UserRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}
