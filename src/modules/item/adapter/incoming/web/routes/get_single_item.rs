use actix_web::{get, web, Responder};
use tracing::error;

use super::item_not_found;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::bucketlist::adapter::incoming::web::routes::bucketlist_not_found;
use crate::modules::item::application::ports::incoming::use_cases::GetSingleItemError;
use crate::modules::item::application::ports::outgoing::ItemResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/bucketlists/{bucketlist_id}/items/{item_id}",
    tag = "items",
    params(
        ("bucketlist_id" = i32, Path, description = "Parent bucketlist id"),
        ("item_id" = i32, Path, description = "Item id"),
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The item", body = inline(SuccessResponse<ItemResult>)),
        (status = 400, description = "Bucketlist or item not found", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/bucketlists/{bucketlist_id}/items/{item_id}")]
pub async fn get_single_item_handler(
    user: AuthenticatedUser,
    path: web::Path<(i32, i32)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (bucketlist_id, item_id) = path.into_inner();

    match data
        .item
        .get_single
        .execute(user.user_id, bucketlist_id, item_id)
        .await
    {
        Ok(item) => ApiResponse::success(item),
        Err(GetSingleItemError::BucketlistNotFound) => bucketlist_not_found(bucketlist_id),
        Err(GetSingleItemError::NotFound) => item_not_found(item_id),
        Err(GetSingleItemError::RepositoryError(e)) => {
            error!("Repository error fetching item {}: {}", item_id, e);
            ApiResponse::internal_error()
        }
    }
}
