use std::env;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::with_security_headers;

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub token_ttl_secs: i64,
    pub port: u16,
}

impl Config {
    /// Read the configuration once at startup. `DATABASE_URL` and
    /// `JWT_SECRET` must be set; the rest has defaults.
    pub fn from_env() -> Result<Self, env::VarError> {
        let port = env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let token_ttl_secs = env::var("TOKEN_TTL_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_TOKEN_TTL_SECS);

        Ok(Self {
            database_url: env::var("DATABASE_URL")?,
            jwt_secret: env::var("JWT_SECRET")?,
            token_ttl_secs,
            port,
        })
    }
}
