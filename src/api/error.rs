//! JSON error responses.
//!
//! Every failed request answers `{"error": "..."}`. Validation errors carry their
//! own message with status 400; everything else is a 500 whose message is either
//! a known configuration problem or the operation's generic failure text. The full
//! error is always logged.

use crate::errors::Error;
use crate::models::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

/// An error ready to be sent to the HTTP client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Response status
    pub status: StatusCode,
    /// Message placed in the `error` field
    pub message: String,
}

impl ApiError {
    /// Converts `error` into a response, using `fallback` for failures whose
    /// details must not reach the client.
    #[must_use]
    pub fn from_error(error: &Error, fallback: &str) -> Self {
        if error.is_client_error() {
            warn!("Rejected request: {}", error);
            return Self {
                status: StatusCode::BAD_REQUEST,
                message: error.to_string(),
            };
        }

        error!("Request failed: {}", error);
        let message = if error.is_user_facing() {
            error.to_string()
        } else {
            fallback.to_string()
        };
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

/// Attaches the operation's generic failure message to a fallible result.
pub trait OrApiError<T> {
    /// Maps the error with [`ApiError::from_error`].
    fn or_api_error(self, fallback: &str) -> Result<T, ApiError>;
}

impl<T> OrApiError<T> for crate::errors::Result<T> {
    fn or_api_error(self, fallback: &str) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::from_error(&e, fallback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_keeps_message() {
        let api_error = ApiError::from_error(&Error::EmptyInput, "번역 실패");
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.message, "한국어 텍스트를 입력해주세요.");
    }

    #[test]
    fn test_upstream_error_is_hidden() {
        let upstream = Error::Upstream {
            status: 429,
            body: "quota exceeded for project 1234".to_string(),
        };
        let api_error = ApiError::from_error(&upstream, "번역 실패");
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.message, "번역 실패");
    }

    #[test]
    fn test_configuration_error_is_reported() {
        let api_error = ApiError::from_error(&Error::StoreUnavailable, "삭제 실패");
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.message, "데이터베이스가 연결되지 않았습니다.");
    }
}
