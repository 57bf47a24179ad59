mod create_bucketlist;
mod delete_bucketlist;
mod get_bucketlists;
mod get_single_bucketlist;
mod update_bucketlist;

use actix_web::HttpResponse;

use crate::shared::api::ApiResponse;

pub use create_bucketlist::{
    __path_create_bucketlist_handler, create_bucketlist_handler, CreateBucketlistRequest,
};
pub use delete_bucketlist::{__path_delete_bucketlist_handler, delete_bucketlist_handler};
pub use get_bucketlists::{__path_get_bucketlists_handler, get_bucketlists_handler};
pub use get_single_bucketlist::{
    __path_get_single_bucketlist_handler, get_single_bucketlist_handler,
};
pub use update_bucketlist::{
    __path_update_bucketlist_handler, update_bucketlist_handler, UpdateBucketlistRequest,
};

/// Missing and not-owned bucketlists get the same answer
pub fn bucketlist_not_found(bucketlist_id: i32) -> HttpResponse {
    ApiResponse::bad_request(
        "BUCKETLIST_NOT_FOUND",
        &format!(
            "Bucketlist with id {} not found or does not belong to you.",
            bucketlist_id
        ),
    )
}
