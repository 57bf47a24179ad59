//! OpenAPI shapes of the `ApiResponse` envelope.
//!
//! `ApiResponse` itself keeps both `data` and `error` optional, which renders
//! poorly in the document, so each outcome gets its own schema here.
use serde::Serialize;
use utoipa::ToSchema;

/// Body of every 2xx answer
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Body of every 4xx/5xx answer
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable, upper-snake-case code clients can branch on
    #[schema(example = "BUCKETLIST_NOT_FOUND")]
    pub code: String,
    #[schema(example = "Bucketlist with id 1 not found or does not belong to you.")]
    pub message: String,
}
