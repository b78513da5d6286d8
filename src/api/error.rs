//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses with appropriate status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::dashboard::DashboardError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rendering a section failed
    #[error("Dashboard error: {0}")]
    Dashboard(#[from] DashboardError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Dashboard(DashboardError::UnknownSection(_)) => {
                (StatusCode::NOT_FOUND, "SECTION_NOT_FOUND")
            }
            ApiError::Dashboard(_) => (StatusCode::INTERNAL_SERVER_ERROR, "RENDER_ERROR"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let request_id = uuid::Uuid::new_v4().to_string();

        if status.is_server_error() {
            tracing::error!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "API error occurred"
            );
        } else {
            tracing::warn!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "Request rejected"
            );
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let unknown = ApiError::from(DashboardError::UnknownSection("x".to_string()));
        assert_eq!(
            unknown.status_and_code(),
            (StatusCode::NOT_FOUND, "SECTION_NOT_FOUND")
        );

        let render = ApiError::from(DashboardError::EmptyChart("c".to_string()));
        assert_eq!(
            render.status_and_code(),
            (StatusCode::INTERNAL_SERVER_ERROR, "RENDER_ERROR")
        );

        let missing = ApiError::NotFound("chart 9".to_string());
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);
    }
}
