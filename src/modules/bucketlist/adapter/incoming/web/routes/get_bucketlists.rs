use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::bucketlist::application::ports::incoming::use_cases::GetBucketlistsError;
use crate::modules::bucketlist::application::ports::outgoing::BucketlistResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List the caller's bucketlists
#[utoipa::path(
    get,
    path = "/bucketlists",
    tag = "bucketlists",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Bucketlists owned by the caller", body = inline(SuccessResponse<Vec<BucketlistResult>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/bucketlists")]
pub async fn get_bucketlists_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.bucketlist.get_list.execute(user.user_id).await {
        Ok(bucketlists) => ApiResponse::success(bucketlists),

        Err(GetBucketlistsError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to list bucketlists");
            ApiResponse::internal_error()
        }
    }
}
