use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::bucketlist::adapter::incoming::web::routes::bucketlist_not_found;
use crate::modules::item::application::ports::incoming::use_cases::CreateItemError;
use crate::modules::item::application::ports::outgoing::ItemResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateItemRequest {
    #[schema(example = "Visit Lamu")]
    pub name: String,
}

/// Add an item to one of the caller's bucketlists
#[utoipa::path(
    post,
    path = "/bucketlists/{bucketlist_id}/items",
    tag = "items",
    params(("bucketlist_id" = i32, Path, description = "Parent bucketlist id")),
    request_body = CreateItemRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Item created", body = inline(SuccessResponse<ItemResult>)),
        (status = 400, description = "Invalid name, or bucketlist not found / not owned", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/bucketlists/{bucketlist_id}/items")]
pub async fn create_item_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    req: web::Json<CreateItemRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let bucketlist_id = path.into_inner();

    match data
        .item
        .create
        .execute(user.user_id, bucketlist_id, &req.name)
        .await
    {
        Ok(created) => {
            info!(bucketlist_id, item_id = created.id, "Item created");
            ApiResponse::created(created)
        }

        Err(CreateItemError::BucketlistNotFound) => bucketlist_not_found(bucketlist_id),

        Err(CreateItemError::InvalidName(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(CreateItemError::RepositoryError(e)) => {
            error!("Repository error creating item in bucketlist {}: {}", bucketlist_id, e);
            ApiResponse::internal_error()
        }
    }
}
