use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::bucketlist::application::ports::outgoing::{
    BucketlistQuery, BucketlistQueryError,
};
use crate::modules::item::application::ports::incoming::use_cases::{
    DeleteItemError, DeleteItemUseCase,
};
use crate::modules::item::application::ports::outgoing::{ItemRepository, ItemRepositoryError};

pub struct DeleteItemService<B, R>
where
    B: BucketlistQuery,
    R: ItemRepository,
{
    bucketlists: B,
    repository: R,
}

impl<B, R> DeleteItemService<B, R>
where
    B: BucketlistQuery,
    R: ItemRepository,
{
    pub fn new(bucketlists: B, repository: R) -> Self {
        Self {
            bucketlists,
            repository,
        }
    }
}

#[async_trait]
impl<B, R> DeleteItemUseCase for DeleteItemService<B, R>
where
    B: BucketlistQuery + Send + Sync,
    R: ItemRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        bucketlist_id: i32,
        item_id: i32,
    ) -> Result<(), DeleteItemError> {
        self.bucketlists
            .find_by_id(owner, bucketlist_id)
            .await
            .map_err(|e| match e {
                BucketlistQueryError::NotFound => DeleteItemError::BucketlistNotFound,
                BucketlistQueryError::DatabaseError(msg) => DeleteItemError::RepositoryError(msg),
            })?;

        self.repository
            .delete(bucketlist_id, item_id)
            .await
            .map_err(|e| match e {
                ItemRepositoryError::NotFound => DeleteItemError::NotFound,
                ItemRepositoryError::DatabaseError(msg) => DeleteItemError::RepositoryError(msg),
            })
    }
}
