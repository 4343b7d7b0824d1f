use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Plain `{message}` body, used for failures and informational replies.
#[derive(Serialize)]
pub struct ApiMessage {
    pub message: String,
}

/// `{message, access_token}` body returned by registration and login.
#[derive(Serialize)]
pub struct TokenGrant {
    pub message: String,
    pub access_token: String,
}

pub fn token_grant(message: impl Into<String>, access_token: String) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(TokenGrant {
            message: message.into(),
            access_token,
        }),
    )
}

pub fn error(message: impl Into<String>, status: StatusCode) -> Response {
    (
        status,
        Json(ApiMessage {
            message: message.into(),
        }),
    )
        .into_response()
}
