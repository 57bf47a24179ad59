use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::bucketlist::application::ports::outgoing::{
    BucketlistQuery, BucketlistQueryError,
};
use crate::modules::item::application::ports::incoming::use_cases::{
    GetSingleItemError, GetSingleItemUseCase,
};
use crate::modules::item::application::ports::outgoing::{ItemQuery, ItemQueryError, ItemResult};

pub struct GetSingleItemService<B, Q>
where
    B: BucketlistQuery,
    Q: ItemQuery,
{
    bucketlists: B,
    query: Q,
}

impl<B, Q> GetSingleItemService<B, Q>
where
    B: BucketlistQuery,
    Q: ItemQuery,
{
    pub fn new(bucketlists: B, query: Q) -> Self {
        Self { bucketlists, query }
    }
}

#[async_trait]
impl<B, Q> GetSingleItemUseCase for GetSingleItemService<B, Q>
where
    B: BucketlistQuery + Send + Sync,
    Q: ItemQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        bucketlist_id: i32,
        item_id: i32,
    ) -> Result<ItemResult, GetSingleItemError> {
        self.bucketlists
            .find_by_id(owner, bucketlist_id)
            .await
            .map_err(|e| match e {
                BucketlistQueryError::NotFound => GetSingleItemError::BucketlistNotFound,
                BucketlistQueryError::DatabaseError(msg) => {
                    GetSingleItemError::RepositoryError(msg)
                }
            })?;

        self.query
            .find_by_id(bucketlist_id, item_id)
            .await
            .map_err(|e| match e {
                ItemQueryError::NotFound => GetSingleItemError::NotFound,
                ItemQueryError::DatabaseError(msg) => GetSingleItemError::RepositoryError(msg),
            })
    }
}
