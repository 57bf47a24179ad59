// application/ports/outgoing/user_query.rs
use async_trait::async_trait;

use crate::auth::application::domain::entities::User;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    /// Looks up active and deactivated accounts alike; callers decide
    /// what an inactive match means. `email` must already be normalized.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;
}
