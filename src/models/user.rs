use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered account, keyed by email.
///
/// The stored credential is an argon2-encoded hash and is never written
/// into responses.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}
