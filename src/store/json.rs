use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use super::{EventStore, StoreError, UserStore};
use crate::models::{Event, User};

/// On-disk document: two maps keyed by id. Event values are deserialized
/// through the model's alias handling, so legacy ownership field names in an
/// existing file normalize on load.
#[derive(Debug, Default, Serialize, Deserialize)]
struct DataFile {
    #[serde(default)]
    users: HashMap<Uuid, User>,
    #[serde(default)]
    events: HashMap<Uuid, Event>,
}

/// Whole-file JSON persistence. Mutations run under the write lock and the
/// file is rewritten before the lock is released, so concurrent requests
/// serialize on writes and last writer wins.
pub struct JsonStore {
    path: PathBuf,
    data: RwLock<DataFile>,
}

impl JsonStore {
    /// Load the data file, or start empty when it does not exist yet. A file
    /// that exists but fails to parse is an error; resetting to empty here
    /// would overwrite the collection on the next save.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let data = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            DataFile::default()
        };

        info!(
            "Data file {} loaded ({} users, {} events)",
            path.display(),
            data.users.len(),
            data.events.len()
        );

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    async fn persist(&self, data: &DataFile) -> Result<(), StoreError> {
        let serialized = serde_json::to_string_pretty(data)?;
        tokio::fs::write(&self.path, serialized).await?;
        Ok(())
    }
}

#[async_trait]
impl EventStore for JsonStore {
    async fn create(&self, event: &Event) -> Result<(), StoreError> {
        let mut data = self.data.write().await;
        data.events.insert(event.id, event.clone());
        self.persist(&data).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, StoreError> {
        let data = self.data.read().await;
        Ok(data.events.get(&id).cloned())
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Event>, StoreError> {
        let data = self.data.read().await;
        let mut events: Vec<Event> = data
            .events
            .values()
            .filter(|event| event.owner_id == owner_id)
            .cloned()
            .collect();
        events.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(events)
    }

    async fn name_exists(
        &self,
        owner_id: Uuid,
        name: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, StoreError> {
        let needle = name.to_lowercase();
        let data = self.data.read().await;
        Ok(data.events.values().any(|event| {
            event.owner_id == owner_id
                && Some(event.id) != exclude
                && event.name.to_lowercase() == needle
        }))
    }

    async fn update(&self, event: &Event) -> Result<(), StoreError> {
        let mut data = self.data.write().await;
        data.events.insert(event.id, event.clone());
        self.persist(&data).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut data = self.data.write().await;
        if data.events.remove(&id).is_none() {
            return Ok(false);
        }
        self.persist(&data).await?;
        Ok(true)
    }
}

#[async_trait]
impl UserStore for JsonStore {
    async fn create(&self, user: &User) -> Result<(), StoreError> {
        let mut data = self.data.write().await;
        data.users.insert(user.id, user.clone());
        self.persist(&data).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let data = self.data.read().await;
        Ok(data.users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let data = self.data.read().await;
        Ok(data
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let data = self.data.read().await;
        Ok(data.users.values().find(|user| user.email == email).cloned())
    }
}
