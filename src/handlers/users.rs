//! Registration and login. Both issue a fresh bearer token on success; no
//! session state is kept server-side.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use super::required;
use crate::auth::password;
use crate::models::User;
use crate::state::AppState;
use crate::store::StoreError;
use crate::utils::error::AppError;
use crate::utils::response::token_grant;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    email: Option<String>,
    pw: Option<String>,
}

/// POST /usuarios
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> Result<impl IntoResponse, AppError> {
    let email = required("email", body.email)?;
    let pw = required("pw", body.pw)?;

    if state.credentials.find(&email).await?.is_some() {
        return Err(AppError::Conflict(format!(
            "El correo {} ya está registrado",
            email
        )));
    }

    let password_hash = password::hash_password(&pw)?;
    state
        .credentials
        .insert(User {
            email: email.clone(),
            password_hash,
        })
        .await
        .map_err(|e| match e {
            // Lost an insert race: same outcome as the pre-check.
            StoreError::Conflict => {
                AppError::Conflict(format!("El correo {} ya está registrado", email))
            }
            other => AppError::from(other),
        })?;

    let access_token = state.tokens.issue(&email)?;
    Ok(token_grant(
        format!("El correo {} ha sido registrado", email),
        access_token,
    ))
}

/// GET /usuarios — credentials travel in the request body.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> Result<impl IntoResponse, AppError> {
    let email = required("email", body.email)?;
    let pw = required("pw", body.pw)?;

    let user = state
        .credentials
        .find(&email)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("El correo {} no está registrado", email)))?;

    if !password::verify_password(&user.password_hash, &pw) {
        return Err(AppError::Unauthenticated("Contraseña incorrecta".to_string()));
    }

    let access_token = state.tokens.issue(&email)?;
    Ok(token_grant("Sesión iniciada", access_token))
}
