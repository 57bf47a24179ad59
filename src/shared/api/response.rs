use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

/// JSON envelope shared by every endpoint.
///
/// Successful calls carry `data`, failed ones carry `error`; the other key is
/// left out of the body entirely.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

/// Plain confirmation payload, e.g. `{"message": "ok"}`
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageBody {
    #[schema(example = "Bucketlist with ID#1 successfully deleted.")]
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

fn respond<T: Serialize>(status: StatusCode, body: ApiResponse<T>) -> HttpResponse {
    HttpResponse::build(status).json(body)
}

impl<T: Serialize> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn success(data: T) -> HttpResponse {
        respond(StatusCode::OK, Self::ok(data))
    }

    pub fn created(data: T) -> HttpResponse {
        respond(StatusCode::CREATED, Self::ok(data))
    }
}

impl ApiResponse<()> {
    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        let body = ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_owned(),
                message: message.to_owned(),
            }),
        };

        respond(status, body)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn unauthorized(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, code, message)
    }

    pub fn conflict(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::CONFLICT, code, message)
    }

    /// 500 with a fixed message; the cause belongs in the logs, not the body.
    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}
