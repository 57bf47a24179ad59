use async_trait::async_trait;

use super::bucketlist_repository::BucketlistResult;
use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum BucketlistQueryError {
    #[error("Bucketlist not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of the bucketlists table. Every lookup is scoped by owner, so a
/// bucketlist that belongs to someone else reads exactly like a missing one.
#[async_trait]
pub trait BucketlistQuery: Send + Sync {
    async fn find_by_id(
        &self,
        owner: UserId,
        bucketlist_id: i32,
    ) -> Result<BucketlistResult, BucketlistQueryError>;

    /// Oldest first
    async fn find_all_by_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<BucketlistResult>, BucketlistQueryError>;
}
