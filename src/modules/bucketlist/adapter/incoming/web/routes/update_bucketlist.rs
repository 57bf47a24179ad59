use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use super::bucketlist_not_found;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::bucketlist::application::ports::incoming::use_cases::UpdateBucketlistError;
use crate::modules::bucketlist::application::ports::outgoing::{
    BucketlistResult, UpdateBucketlistData,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateBucketlistRequest {
    /// Left unchanged when omitted
    #[serde(default)]
    #[schema(example = "Travel 2025")]
    pub name: Option<String>,
}

impl From<UpdateBucketlistRequest> for UpdateBucketlistData {
    fn from(req: UpdateBucketlistRequest) -> Self {
        UpdateBucketlistData { name: req.name }
    }
}

#[utoipa::path(
    put,
    path = "/bucketlists/{bucketlist_id}",
    tag = "bucketlists",
    params(("bucketlist_id" = i32, Path, description = "Bucketlist id")),
    request_body = UpdateBucketlistRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Bucketlist updated", body = inline(SuccessResponse<BucketlistResult>)),
        (status = 400, description = "Invalid name, or not found / not owned", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/bucketlists/{bucketlist_id}")]
pub async fn update_bucketlist_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    req: web::Json<UpdateBucketlistRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let bucketlist_id = path.into_inner();

    match data
        .bucketlist
        .update
        .execute(user.user_id, bucketlist_id, req.into_inner().into())
        .await
    {
        Ok(updated) => {
            info!(bucketlist_id, "Bucketlist updated");
            ApiResponse::success(updated)
        }

        Err(UpdateBucketlistError::InvalidName(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(UpdateBucketlistError::NotFound) => bucketlist_not_found(bucketlist_id),

        Err(UpdateBucketlistError::RepositoryError(e)) => {
            error!("Repository error updating bucketlist {}: {}", bucketlist_id, e);
            ApiResponse::internal_error()
        }
    }
}
