mod create_bucketlist;
mod delete_bucketlist;
mod get_bucketlists;
mod get_single_bucketlist;
mod update_bucketlist;

pub use create_bucketlist::{CreateBucketlistError, CreateBucketlistUseCase};
pub use delete_bucketlist::{DeleteBucketlistError, DeleteBucketlistUseCase};
pub use get_bucketlists::{GetBucketlistsError, GetBucketlistsUseCase};
pub use get_single_bucketlist::{GetSingleBucketlistError, GetSingleBucketlistUseCase};
pub use update_bucketlist::{UpdateBucketlistError, UpdateBucketlistUseCase};
