pub mod bucketlist_query;
pub mod bucketlist_repository;

pub use bucketlist_query::{BucketlistQuery, BucketlistQueryError};
pub use bucketlist_repository::{
    BucketlistRepository, BucketlistRepositoryError, BucketlistResult, CreateBucketlistData,
    UpdateBucketlistData,
};
