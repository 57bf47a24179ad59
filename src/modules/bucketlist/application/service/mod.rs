mod create_bucketlist_service;
mod delete_bucketlist_service;
mod get_bucketlists_service;
mod get_single_bucketlist_service;
mod update_bucketlist_service;

pub use create_bucketlist_service::CreateBucketlistService;
pub use delete_bucketlist_service::DeleteBucketlistService;
pub use get_bucketlists_service::GetBucketlistsService;
pub use get_single_bucketlist_service::GetSingleBucketlistService;
pub use update_bucketlist_service::UpdateBucketlistService;
