use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Event, EventPatch, NewEvent, User};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Failures at the storage seam. `Conflict` is a key collision (unique
/// violation) and must not be masked as an infrastructure failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate key")]
    Conflict,

    #[error("corrupt record: {0}")]
    Decode(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Persistent table of account credentials, keyed uniquely by email.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Persist a new account. Fails with `Conflict` if the email is taken.
    async fn insert(&self, user: User) -> Result<(), StoreError>;

    async fn find(&self, email: &str) -> Result<Option<User>, StoreError>;
}

/// Persistent table of events, each owned by exactly one account.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Persist a new event under a fresh id and return it.
    async fn insert(&self, event: NewEvent) -> Result<Event, StoreError>;

    /// All events owned by `owner`, most recent `start_time` first
    /// (ties broken by descending id).
    async fn list_by_owner(&self, owner: &str) -> Result<Vec<Event>, StoreError>;

    async fn find(&self, id: i64) -> Result<Option<Event>, StoreError>;

    /// Apply a merge patch as a single row operation. `None` if the id is
    /// gone.
    async fn update(&self, id: i64, patch: EventPatch) -> Result<Option<Event>, StoreError>;

    /// Remove the event. `false` if the id is gone.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
}
