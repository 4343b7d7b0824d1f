//! In-memory store; the test suite runs the full router over this.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{CredentialStore, EventStore, StoreError};
use crate::models::{Event, EventPatch, NewEvent, User};

pub struct MemoryStore {
    users: RwLock<HashMap<String, User>>,
    events: RwLock<BTreeMap<i64, Event>>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            events: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn insert(&self, user: User) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(StoreError::Conflict);
        }
        users.insert(user.email.clone(), user);
        Ok(())
    }

    async fn find(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(email).cloned())
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn insert(&self, event: NewEvent) -> Result<Event, StoreError> {
        // Ids are handed out monotonically and never reused, even after a
        // delete.
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let event = Event {
            id,
            name: event.name,
            category: event.category,
            venue: event.venue,
            address: event.address,
            start_time: event.start_time,
            end_time: event.end_time,
            modality: event.modality,
            owner_email: event.owner_email,
        };
        self.events.write().await.insert(id, event.clone());
        Ok(event)
    }

    async fn list_by_owner(&self, owner: &str) -> Result<Vec<Event>, StoreError> {
        let events = self.events.read().await;
        let mut owned: Vec<Event> = events
            .values()
            .filter(|e| e.owner_email == owner)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.start_time.cmp(&a.start_time).then(b.id.cmp(&a.id)));
        Ok(owned)
    }

    async fn find(&self, id: i64) -> Result<Option<Event>, StoreError> {
        Ok(self.events.read().await.get(&id).cloned())
    }

    async fn update(&self, id: i64, patch: EventPatch) -> Result<Option<Event>, StoreError> {
        let mut events = self.events.write().await;
        match events.get_mut(&id) {
            Some(event) => {
                event.apply(patch);
                Ok(Some(event.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.events.write().await.remove(&id).is_some())
    }
}
