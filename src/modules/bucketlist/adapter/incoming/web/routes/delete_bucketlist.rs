use actix_web::{delete, web, Responder};
use tracing::{error, info};

use super::bucketlist_not_found;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::bucketlist::application::ports::incoming::use_cases::DeleteBucketlistError;
use crate::shared::api::{ApiResponse, MessageBody};
use crate::AppState;

/// Delete a bucketlist together with all of its items
#[utoipa::path(
    delete,
    path = "/bucketlists/{bucketlist_id}",
    tag = "bucketlists",
    params(("bucketlist_id" = i32, Path, description = "Bucketlist id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Bucketlist deleted", body = inline(SuccessResponse<MessageBody>)),
        (status = 400, description = "Not found or not owned by the caller", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/bucketlists/{bucketlist_id}")]
pub async fn delete_bucketlist_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let bucketlist_id = path.into_inner();

    match data
        .bucketlist
        .delete
        .execute(user.user_id, bucketlist_id)
        .await
    {
        Ok(()) => {
            info!(user_id = %user.user_id, bucketlist_id, "Bucketlist deleted");
            ApiResponse::success(MessageBody::new(format!(
                "Bucketlist with ID#{} successfully deleted.",
                bucketlist_id
            )))
        }

        Err(DeleteBucketlistError::NotFound) => bucketlist_not_found(bucketlist_id),

        Err(DeleteBucketlistError::RepositoryError(e)) => {
            error!("Repository error deleting bucketlist {}: {}", bucketlist_id, e);
            ApiResponse::internal_error()
        }
    }
}
