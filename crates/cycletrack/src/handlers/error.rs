use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use cycletrack_core::storage::{repository_error_to_status_code, RepositoryError};

/// Error type returned by API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Unauthenticated(&'static str),
    #[error("Cache unavailable: {0}")]
    CacheUnavailable(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::CacheUnavailable(_) => StatusCode::BAD_GATEWAY,
            ApiError::Repository(repo_error) => {
                let code = repository_error_to_status_code(repo_error);
                StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
        };

        tracing::warn!(status = %status_code, error = %self, "API error");
        (status_code, self.to_string()).into_response()
    }
}
