//! Postgres-backed store. Every operation is a single statement, so the
//! resource layer needs no extra locking.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::{CredentialStore, EventStore, StoreError};
use crate::models::{Event, EventPatch, NewEvent, User};

const EVENT_COLUMNS: &str =
    "id, name, category, venue, address, start_time, end_time, modality, owner_email";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Raw row shape; enum columns are TEXT and parsed through the label
/// mapping so an out-of-range value surfaces as `Decode`, never as a bogus
/// domain value.
#[derive(FromRow)]
struct EventRow {
    id: i64,
    name: String,
    category: String,
    venue: String,
    address: String,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    modality: String,
    owner_email: String,
}

impl TryFrom<EventRow> for Event {
    type Error = StoreError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        Ok(Event {
            id: row.id,
            name: row.name,
            category: row.category.parse().map_err(StoreError::Decode)?,
            venue: row.venue,
            address: row.address,
            start_time: row.start_time,
            end_time: row.end_time,
            modality: row.modality.parse().map_err(StoreError::Decode)?,
            owner_email: row.owner_email,
        })
    }
}

fn map_db_err(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::Conflict,
        _ => StoreError::Database(err),
    }
}

#[async_trait]
impl CredentialStore for PgStore {
    async fn insert(&self, user: User) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO users (email, password_hash) VALUES ($1, $2)")
            .bind(&user.email)
            .bind(&user.password_hash)
            .execute(&self.pool)
            .await
            .map_err(map_db_err)?;
        Ok(())
    }

    async fn find(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user =
            sqlx::query_as::<_, User>("SELECT email, password_hash FROM users WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;
        Ok(user)
    }
}

#[async_trait]
impl EventStore for PgStore {
    async fn insert(&self, event: NewEvent) -> Result<Event, StoreError> {
        let row = sqlx::query_as::<_, EventRow>(&format!(
            "INSERT INTO events \
                 (name, category, venue, address, start_time, end_time, modality, owner_email) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {EVENT_COLUMNS}"
        ))
        .bind(&event.name)
        .bind(event.category.as_str())
        .bind(&event.venue)
        .bind(&event.address)
        .bind(event.start_time)
        .bind(event.end_time)
        .bind(event.modality.as_str())
        .bind(&event.owner_email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_err)?;
        row.try_into()
    }

    async fn list_by_owner(&self, owner: &str) -> Result<Vec<Event>, StoreError> {
        let rows = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events \
             WHERE owner_email = $1 \
             ORDER BY start_time DESC, id DESC"
        ))
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Event::try_from).collect()
    }

    async fn find(&self, id: i64) -> Result<Option<Event>, StoreError> {
        let row = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Event::try_from).transpose()
    }

    async fn update(&self, id: i64, patch: EventPatch) -> Result<Option<Event>, StoreError> {
        // Merge patch as one atomic row update: absent fields keep their
        // stored value via COALESCE.
        let row = sqlx::query_as::<_, EventRow>(&format!(
            "UPDATE events SET \
                 name       = COALESCE($2, name), \
                 category   = COALESCE($3, category), \
                 venue      = COALESCE($4, venue), \
                 address    = COALESCE($5, address), \
                 start_time = COALESCE($6, start_time), \
                 end_time   = COALESCE($7, end_time), \
                 modality   = COALESCE($8, modality) \
             WHERE id = $1 \
             RETURNING {EVENT_COLUMNS}"
        ))
        .bind(id)
        .bind(patch.name)
        .bind(patch.category.map(|c| c.as_str()))
        .bind(patch.venue)
        .bind(patch.address)
        .bind(patch.start_time)
        .bind(patch.end_time)
        .bind(patch.modality.map(|m| m.as_str()))
        .fetch_optional(&self.pool)
        .await?;
        row.map(Event::try_from).transpose()
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
