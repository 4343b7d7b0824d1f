//! Bearer-token extractor. Every `/eventos*` handler takes an [`AuthUser`],
//! so a missing or invalid token is rejected before any resource is looked
//! up.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use crate::state::AppState;
use crate::utils::error::AppError;

/// The identity asserted by the request's bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub email: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Unauthenticated("Falta el token de acceso".to_string()))?;

        let token = header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Unauthenticated("Cabecera de autorización inválida".to_string())
        })?;

        let email = state
            .tokens
            .verify(token)
            .map_err(|_| AppError::Unauthenticated("Token inválido o expirado".to_string()))?;

        Ok(AuthUser { email })
    }
}
