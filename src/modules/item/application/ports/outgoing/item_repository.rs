use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone)]
pub struct CreateItemData {
    pub bucketlist_id: i32,
    pub name: String,
}

/// Only the fields that are `Some` get written
#[derive(Debug, Clone, Default)]
pub struct UpdateItemData {
    pub name: Option<String>,
    pub done: Option<bool>,
}

impl UpdateItemData {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.done.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ItemResult {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Visit Lamu")]
    pub name: String,
    pub date_created: DateTime<Utc>,
    pub date_modified: DateTime<Utc>,
    #[schema(example = 1)]
    pub bucketlist_id: i32,
    #[schema(example = false)]
    pub done: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ItemRepositoryError {
    #[error("Item not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Write side of the items table. Callers have already checked that the
/// parent bucketlist belongs to them; every call is still scoped by
/// `bucketlist_id` so an item id from another list never matches.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn create(&self, data: CreateItemData) -> Result<ItemResult, ItemRepositoryError>;

    async fn update(
        &self,
        bucketlist_id: i32,
        item_id: i32,
        data: UpdateItemData,
    ) -> Result<ItemResult, ItemRepositoryError>;

    async fn delete(&self, bucketlist_id: i32, item_id: i32) -> Result<(), ItemRepositoryError>;
}
