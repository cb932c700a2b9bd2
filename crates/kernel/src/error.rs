//! Application error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("menu not found: {0}")]
    MenuNotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MenuNotFound(_) => StatusCode::NOT_FOUND,
        };

        // Store failures are logged in full but never echoed to the client
        let body = match &self {
            AppError::Internal(e) => {
                tracing::error!(error = %e, "internal server error");
                "internal server error".to_string()
            }
            AppError::MenuNotFound(_) => self.to_string(),
        };

        (status, body).into_response()
    }
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        let cases = [
            (AppError::MenuNotFound("main".into()), StatusCode::NOT_FOUND),
            (
                AppError::Internal(anyhow::anyhow!("boom")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn internal_error_hides_details() {
        let error = AppError::Internal(anyhow::anyhow!("connection refused"));
        assert_eq!(error.to_string(), "internal server error");
    }

    #[test]
    fn not_found_message_names_slug() {
        assert_eq!(
            AppError::MenuNotFound("footer".into()).to_string(),
            "menu not found: footer"
        );
    }
}
