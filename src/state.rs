use std::sync::Arc;

use crate::auth::TokenService;
use crate::store::{CredentialStore, EventStore};

/// Application context, built once at startup and handed to the router.
/// Handlers reach storage and the token service only through this.
#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<dyn CredentialStore>,
    pub events: Arc<dyn EventStore>,
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        events: Arc<dyn EventStore>,
        tokens: TokenService,
    ) -> Self {
        Self {
            credentials,
            events,
            tokens,
        }
    }
}
