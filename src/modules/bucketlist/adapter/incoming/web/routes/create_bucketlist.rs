use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::bucketlist::application::ports::incoming::use_cases::CreateBucketlistError;
use crate::modules::bucketlist::application::ports::outgoing::BucketlistResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateBucketlistRequest {
    #[schema(example = "Travel")]
    pub name: String,
}

/// Create a bucketlist owned by the caller
#[utoipa::path(
    post,
    path = "/bucketlists",
    tag = "bucketlists",
    request_body = CreateBucketlistRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Bucketlist created", body = inline(SuccessResponse<BucketlistResult>)),
        (status = 400, description = "Invalid name", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/bucketlists")]
pub async fn create_bucketlist_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateBucketlistRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.bucketlist.create.execute(user.user_id, &req.name).await {
        Ok(created) => {
            info!(user_id = %user.user_id, bucketlist_id = created.id, "Bucketlist created");
            ApiResponse::created(created)
        }

        Err(CreateBucketlistError::InvalidName(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(CreateBucketlistError::RepositoryError(e)) => {
            error!(error = %e, "Failed to create bucketlist");
            ApiResponse::internal_error()
        }
    }
}
