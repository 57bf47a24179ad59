use actix_web::{get, web, Responder};
use tracing::error;

use super::bucketlist_not_found;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::bucketlist::application::ports::incoming::use_cases::GetSingleBucketlistError;
use crate::modules::bucketlist::application::ports::outgoing::BucketlistResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/bucketlists/{bucketlist_id}",
    tag = "bucketlists",
    params(("bucketlist_id" = i32, Path, description = "Bucketlist id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The bucketlist", body = inline(SuccessResponse<BucketlistResult>)),
        (status = 400, description = "Not found or not owned by the caller", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/bucketlists/{bucketlist_id}")]
pub async fn get_single_bucketlist_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let bucketlist_id = path.into_inner();

    match data
        .bucketlist
        .get_single
        .execute(user.user_id, bucketlist_id)
        .await
    {
        Ok(bucketlist) => ApiResponse::success(bucketlist),

        Err(GetSingleBucketlistError::NotFound) => bucketlist_not_found(bucketlist_id),

        Err(GetSingleBucketlistError::RepositoryError(e)) => {
            error!("Repository error fetching bucketlist {}: {}", bucketlist_id, e);
            ApiResponse::internal_error()
        }
    }
}
