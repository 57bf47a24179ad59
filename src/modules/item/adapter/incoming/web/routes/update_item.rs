use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use super::item_not_found;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::bucketlist::adapter::incoming::web::routes::bucketlist_not_found;
use crate::modules::item::application::ports::incoming::use_cases::UpdateItemError;
use crate::modules::item::application::ports::outgoing::{ItemResult, UpdateItemData};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Omitted fields are left as they are
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateItemRequest {
    #[serde(default)]
    #[schema(example = "Visit Lamu again")]
    pub name: Option<String>,

    #[serde(default)]
    #[schema(example = true)]
    pub done: Option<bool>,
}

impl From<UpdateItemRequest> for UpdateItemData {
    fn from(req: UpdateItemRequest) -> Self {
        UpdateItemData {
            name: req.name,
            done: req.done,
        }
    }
}

#[utoipa::path(
    put,
    path = "/bucketlists/{bucketlist_id}/items/{item_id}",
    tag = "items",
    params(
        ("bucketlist_id" = i32, Path, description = "Parent bucketlist id"),
        ("item_id" = i32, Path, description = "Item id"),
    ),
    request_body = UpdateItemRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Item updated", body = inline(SuccessResponse<ItemResult>)),
        (status = 400, description = "Invalid name, or bucketlist / item not found", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/bucketlists/{bucketlist_id}/items/{item_id}")]
pub async fn update_item_handler(
    user: AuthenticatedUser,
    path: web::Path<(i32, i32)>,
    req: web::Json<UpdateItemRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (bucketlist_id, item_id) = path.into_inner();

    match data
        .item
        .update
        .execute(user.user_id, bucketlist_id, item_id, req.into_inner().into())
        .await
    {
        Ok(updated) => {
            info!(bucketlist_id, item_id, done = updated.done, "Item updated");
            ApiResponse::success(updated)
        }

        Err(UpdateItemError::BucketlistNotFound) => bucketlist_not_found(bucketlist_id),

        Err(UpdateItemError::NotFound) => item_not_found(item_id),

        Err(UpdateItemError::InvalidName(msg)) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),

        Err(UpdateItemError::RepositoryError(e)) => {
            error!("Repository error updating item {}: {}", item_id, e);
            ApiResponse::internal_error()
        }
    }
}
