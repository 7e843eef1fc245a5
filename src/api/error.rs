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

use crate::render::ChartError;
use crate::sales::SalesError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Sales data layer error
    #[error("Sales data error: {0}")]
    Sales(#[from] SalesError),

    /// Chart rendering failed
    #[error("Render error: {0}")]
    Render(#[from] ChartError),

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
    /// HTTP status and machine-readable code
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Sales(SalesError::UnknownRegion(_)) => {
                (StatusCode::BAD_REQUEST, "UNKNOWN_REGION")
            }
            ApiError::Sales(SalesError::InvalidParams(_)) => {
                (StatusCode::BAD_REQUEST, "INVALID_PARAMS")
            }
            ApiError::Sales(_) => (StatusCode::INTERNAL_SERVER_ERROR, "SALES_DATA_ERROR"),
            ApiError::Render(_) => (StatusCode::INTERNAL_SERVER_ERROR, "RENDER_ERROR"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "API error occurred"
        );

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
        let err: ApiError = SalesError::UnknownRegion("Central".to_string()).into();
        assert_eq!(err.status_and_code(), (StatusCode::BAD_REQUEST, "UNKNOWN_REGION"));

        let err = ApiError::NotFound("export".to_string());
        assert_eq!(err.status_and_code().0, StatusCode::NOT_FOUND);

        let err: ApiError = std::io::Error::new(std::io::ErrorKind::Other, "disk").into();
        assert_eq!(err.status_and_code().0, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_render_error_is_server_error() {
        let err: ApiError = ChartError::from(plotters::prelude::DrawingAreaErrorKind::LayoutError).into();
        assert_eq!(
            err.status_and_code(),
            (StatusCode::INTERNAL_SERVER_ERROR, "RENDER_ERROR")
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::from(SalesError::InvalidParams("periods".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::NotFound("export".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
