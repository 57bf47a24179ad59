use actix_web::{delete, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::use_cases::delete_user::{DeleteUserError, DeleteUserRequest};
use crate::shared::api::{ApiResponse, MessageBody};
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct DeleteUserQuery {
    /// Remove the account row and everything it owns instead of deactivating it
    #[serde(default)]
    pub deep_delete: bool,
}

/// Delete the caller's account
#[utoipa::path(
    delete,
    path = "/auth/account",
    tag = "auth",
    params(DeleteUserQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Account deleted", body = inline(SuccessResponse<MessageBody>)),
        (status = 400, description = "Account not found or already inactive", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/auth/account")]
pub async fn delete_user_handler(
    user: AuthenticatedUser,
    query: web::Query<DeleteUserQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = DeleteUserRequest {
        user_id: user.user_id,
        deep_delete: query.deep_delete,
    };

    match data.delete_user_use_case.execute(request).await {
        Ok(()) => {
            info!(user_id = %user.user_id, deep_delete = request.deep_delete, "Account deleted");
            ApiResponse::success(MessageBody::new(format!(
                "User with id {} deleted successfully.",
                user.user_id
            )))
        }

        Err(DeleteUserError::UserNotFound) => ApiResponse::bad_request(
            "USER_NOT_FOUND",
            &format!("User with id {} not found.", user.user_id),
        ),

        Err(DeleteUserError::RepositoryError(e)) => {
            error!(error = %e, "Failed to delete account");
            ApiResponse::internal_error()
        }
    }
}
