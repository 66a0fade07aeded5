//! API handlers for the REST endpoints

pub mod authors;
pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use base64::{engine::general_purpose, Engine as _};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    AppState,
};

/// Extractor gating the privileged (delete) endpoints behind HTTP Basic
/// credentials for the single configured admin account
pub struct AdminUser;

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))?;

        let encoded = auth_header.strip_prefix("Basic ").ok_or_else(|| {
            AppError::Authentication("Invalid authorization header format".to_string())
        })?;

        let decoded = general_purpose::STANDARD
            .decode(encoded)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .ok_or_else(|| {
                AppError::Authentication("Invalid authorization header format".to_string())
            })?;

        let (username, password) = decoded.split_once(':').ok_or_else(|| {
            AppError::Authentication("Invalid authorization header format".to_string())
        })?;

        let admin = &state.config.admin;
        if username != admin.username || password != admin.password {
            return Err(AppError::Authorization(
                "Admin privileges required".to_string(),
            ));
        }

        Ok(AdminUser)
    }
}

/// Run `validator` checks on a request body, folding field messages into a
/// single validation failure
pub fn validate_request<T: Validate>(data: &T) -> AppResult<()> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))
}
