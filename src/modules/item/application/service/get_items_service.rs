use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::bucketlist::application::ports::outgoing::{
    BucketlistQuery, BucketlistQueryError,
};
use crate::modules::item::application::ports::incoming::use_cases::{
    GetItemsError, GetItemsUseCase,
};
use crate::modules::item::application::ports::outgoing::{ItemQuery, ItemResult};

pub struct GetItemsService<B, Q>
where
    B: BucketlistQuery,
    Q: ItemQuery,
{
    bucketlists: B,
    query: Q,
}

impl<B, Q> GetItemsService<B, Q>
where
    B: BucketlistQuery,
    Q: ItemQuery,
{
    pub fn new(bucketlists: B, query: Q) -> Self {
        Self { bucketlists, query }
    }
}

#[async_trait]
impl<B, Q> GetItemsUseCase for GetItemsService<B, Q>
where
    B: BucketlistQuery + Send + Sync,
    Q: ItemQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        bucketlist_id: i32,
    ) -> Result<Vec<ItemResult>, GetItemsError> {
        self.bucketlists
            .find_by_id(owner, bucketlist_id)
            .await
            .map_err(|e| match e {
                BucketlistQueryError::NotFound => GetItemsError::BucketlistNotFound,
                BucketlistQueryError::DatabaseError(msg) => GetItemsError::RepositoryError(msg),
            })?;

        self.query
            .find_all_by_bucketlist(bucketlist_id)
            .await
            .map_err(|e| GetItemsError::RepositoryError(e.to_string()))
    }
}
