// src/modules/bucketlist/application/ports/outgoing/bucketlist_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserId;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateBucketlistData {
    pub owner: UserId,
    /// Already trimmed and length checked
    pub name: String,
}

/// `None` leaves the stored value as it is
#[derive(Debug, Clone, Default)]
pub struct UpdateBucketlistData {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BucketlistResult {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Before I turn 40")]
    pub name: String,
    pub date_created: DateTime<Utc>,
    pub date_modified: DateTime<Utc>,
    #[schema(value_type = i32, example = 1)]
    pub created_by: UserId,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum BucketlistRepositoryError {
    /// Missing, or owned by someone else
    #[error("Bucketlist not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait BucketlistRepository: Send + Sync {
    async fn create(
        &self,
        data: CreateBucketlistData,
    ) -> Result<BucketlistResult, BucketlistRepositoryError>;

    async fn update(
        &self,
        owner: UserId,
        bucketlist_id: i32,
        data: UpdateBucketlistData,
    ) -> Result<BucketlistResult, BucketlistRepositoryError>;

    /// Removes the bucketlist together with all of its items, atomically.
    async fn delete(&self, owner: UserId, bucketlist_id: i32)
        -> Result<(), BucketlistRepositoryError>;
}
