pub mod json;
pub mod postgres;

pub use json::JsonStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Event, User};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("data file error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence contract for events. Backed by either the whole-file JSON
/// store or Postgres; handlers only ever see the trait. Errors always
/// propagate; an empty list is a real answer, never an error fallback.
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn create(&self, event: &Event) -> Result<(), StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, StoreError>;

    /// All events owned by `owner_id`, ordered by creation time then id so
    /// repeated calls feed the pipeline identical input.
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Event>, StoreError>;

    /// Case-insensitive name collision check within one owner's events.
    /// `exclude` skips the event being updated.
    async fn name_exists(
        &self,
        owner_id: Uuid,
        name: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, StoreError>;

    async fn update(&self, event: &Event) -> Result<(), StoreError>;

    /// Returns false when no event with that id existed.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create(&self, user: &User) -> Result<(), StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
}
