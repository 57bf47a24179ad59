// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Request bodies here are a handful of short strings.
const MAX_JSON_PAYLOAD: usize = 16 * 1024;

/// Turns body deserialization failures into the standard 400 envelope
/// instead of actix's plain-text error.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(MAX_JSON_PAYLOAD)
        .error_handler(|err, req| {
            let message = err.to_string();
            tracing::debug!(path = %req.path(), "Rejected JSON body: {}", message);
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}
