use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::models::MapError;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Upstream API returned status {status}: {message}")]
    Upstream { status: StatusCode, message: String },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid upstream payload: {0}")]
    Mapping(#[from] MapError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Classifies a non-2xx upstream status
    pub fn from_upstream_status(status: StatusCode) -> Self {
        match status {
            StatusCode::NOT_FOUND => {
                AppError::NotFound("The requested resource was not found".to_string())
            }
            StatusCode::TOO_MANY_REQUESTS => AppError::RateLimited(
                "Too many requests. Please try again later.".to_string(),
            ),
            status => AppError::Upstream {
                status,
                message: format!("HTTP {}", status.as_u16()),
            },
        }
    }

    /// Status code and machine-readable tag sent to the client
    pub fn status_and_tag(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Configuration(_) => (StatusCode::INTERNAL_SERVER_ERROR, "configuration_error"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::RateLimited(_) => (StatusCode::TOO_MANY_REQUESTS, "rate_limited"),
            AppError::Upstream { status, .. } => (*status, "upstream_error"),
            AppError::HttpClient(_) | AppError::Mapping(_) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, tag) = self.status_and_tag();

        let message = match self {
            AppError::Configuration(msg)
            | AppError::Validation(msg)
            | AppError::NotFound(msg)
            | AppError::RateLimited(msg)
            | AppError::Upstream { message: msg, .. } => msg,
            other => {
                tracing::error!(error = %other, "Request failed");
                "Failed to fetch data from the movie service".to_string()
            }
        };

        let body = Json(json!({
            "error": tag,
            "message": message
        }));

        (status, body).into_response()
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::NotFound(rejection.body_text())
    }
}

pub type AppResult<T> = Result<T, AppError>;
