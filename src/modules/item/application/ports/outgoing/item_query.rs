use async_trait::async_trait;

use super::item_repository::ItemResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ItemQueryError {
    #[error("Item not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ItemQuery: Send + Sync {
    async fn find_by_id(&self, bucketlist_id: i32, item_id: i32)
        -> Result<ItemResult, ItemQueryError>;

    async fn find_all_by_bucketlist(
        &self,
        bucketlist_id: i32,
    ) -> Result<Vec<ItemResult>, ItemQueryError>;
}
