use std::sync::Arc;

use crate::modules::bucketlist::application::ports::incoming::use_cases::{
    CreateBucketlistUseCase, DeleteBucketlistUseCase, GetBucketlistsUseCase,
    GetSingleBucketlistUseCase, UpdateBucketlistUseCase,
};

#[derive(Clone)]
pub struct BucketlistUseCases {
    pub create: Arc<dyn CreateBucketlistUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetBucketlistsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleBucketlistUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateBucketlistUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteBucketlistUseCase + Send + Sync>,
}
