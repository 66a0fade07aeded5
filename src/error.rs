//! Error types for the book service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Author with id {0} not found")]
    AuthorNotFound(i64),

    #[error("Book with id {0} not found")]
    BookNotFound(i64),

    #[error("Book with title {title} and author with id {author_id} already exists")]
    BookAlreadyExists { title: String, author_id: i64 },

    #[error("Author with id {0} still has associated books")]
    AuthorHasBooks(i64),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Authorization failed: {0}")]
    Authorization(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable machine-readable name for the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::AuthorNotFound(_) => "AuthorNotFound",
            AppError::BookNotFound(_) => "BookNotFound",
            AppError::BookAlreadyExists { .. } => "BookAlreadyExists",
            AppError::AuthorHasBooks(_) => "AuthorHasBooks",
            AppError::Validation(_) => "ValidationFailure",
            AppError::Authentication(_) => "AuthenticationFailure",
            AppError::Authorization(_) => "AuthorizationFailure",
            AppError::Database(_) | AppError::Internal(_) => "UnexpectedFailure",
        }
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::AuthorNotFound(_) | AppError::BookNotFound(_) => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::BookAlreadyExists { .. } | AppError::AuthorHasBooks(_) => {
                (StatusCode::CONFLICT, self.to_string())
            }
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Authentication(_) => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::Authorization(_) => (StatusCode::FORBIDDEN, self.to_string()),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: self.kind().to_string(),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
