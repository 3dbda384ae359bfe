//! HTTP error response conversion
//!
//! Handlers return `Result<Response, HttpAppError>`. Any [`RelayError`] becomes
//! `{"success": false, "error": "<message>"}` with the status the error describes.

use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use formrelay_core::{LogLevel, RelayError};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Wrapper type for RelayError to implement IntoResponse
#[derive(Debug)]
pub struct HttpAppError(pub RelayError);

impl From<RelayError> for HttpAppError {
    fn from(err: RelayError) -> Self {
        HttpAppError(err)
    }
}

fn multipart_failure(status: StatusCode, body_text: String) -> RelayError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        RelayError::PayloadTooLarge(body_text)
    } else {
        RelayError::InvalidInput(format!("Failed to read multipart: {}", body_text))
    }
}

/// Missing or malformed multipart content type.
impl From<MultipartRejection> for HttpAppError {
    fn from(rejection: MultipartRejection) -> Self {
        HttpAppError(multipart_failure(rejection.status(), rejection.body_text()))
    }
}

/// Errors while streaming fields, including the body size limit.
impl From<MultipartError> for HttpAppError {
    fn from(err: MultipartError) -> Self {
        HttpAppError(multipart_failure(err.status(), err.body_text()))
    }
}

fn log_error(error: &RelayError) {
    let code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, code, "Request rejected");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, code, "Request rejected");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, code, "Failed to relay submission");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let error = &self.0;

        let status = StatusCode::from_u16(error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(error);

        (status, Json(ErrorResponse::new(error.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_shape() {
        let json = serde_json::to_value(ErrorResponse::new("boom")).expect("serialize");
        assert_eq!(json, serde_json::json!({"success": false, "error": "boom"}));
    }

    #[test]
    fn multipart_limit_becomes_payload_too_large() {
        let err = multipart_failure(StatusCode::PAYLOAD_TOO_LARGE, "length limit".to_string());
        assert!(matches!(err, RelayError::PayloadTooLarge(_)));
        let err = multipart_failure(StatusCode::BAD_REQUEST, "bad boundary".to_string());
        assert!(matches!(err, RelayError::InvalidInput(msg) if msg.contains("bad boundary")));
    }

    #[test]
    fn internal_error_renders_500() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let response = HttpAppError(RelayError::from(io_err)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn too_many_files_renders_400() {
        let response = HttpAppError(RelayError::TooManyFiles { max: 3 }).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
