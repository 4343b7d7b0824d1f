use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::store::StoreError;
use crate::utils::response::error as error_response;

/// Outcome taxonomy of the resource layer. Everything is translated to a
/// response here; nothing propagates as an unhandled fault.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    /// Missing, malformed, or expired bearer token, or a bad password.
    #[error("{0}")]
    Unauthenticated(String),

    /// Authenticated, but not the owner of the resource.
    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    /// Duplicate registration.
    #[error("{0}")]
    Conflict(String),

    #[error("store error")]
    Store(#[from] StoreError),

    #[error("token issuance failed")]
    TokenIssuance(#[from] jsonwebtoken::errors::Error),

    #[error("credential hashing failed")]
    Hashing(#[from] argon2::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            // The wire contract answers foreign-owner access with 401.
            AppError::Forbidden(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Store(StoreError::Conflict) => StatusCode::CONFLICT,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::TokenIssuance(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Hashing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn log(&self) {
        match self {
            AppError::Store(e) => error!(error = ?e, "store failure"),
            AppError::TokenIssuance(e) => error!(error = ?e, "token issuance failure"),
            AppError::Hashing(e) => error!(error = ?e, "credential hashing failure"),
            other => warn!(error = ?other, "request rejected"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Full detail goes to the log only.
        self.log();

        let public_message = match &self {
            AppError::Validation(msg)
            | AppError::Unauthenticated(msg)
            | AppError::Forbidden(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg) => msg.clone(),
            AppError::Store(StoreError::Conflict) => "Conflicto de datos".to_string(),
            AppError::Store(_) | AppError::TokenIssuance(_) | AppError::Hashing(_) => {
                "Ha ocurrido un error".to_string()
            }
        };

        error_response(public_message, status)
    }
}
