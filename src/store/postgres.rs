use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use super::{EventStore, StoreError, UserStore};
use crate::models::{Event, User};

/// Postgres-backed store. Schema lives in `migrations/` and is applied at
/// connect time.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        sqlx::migrate!()
            .run(&pool)
            .await
            .map_err(|err| StoreError::Database(err.into()))?;

        info!("Database connected, migrations applied");

        Ok(Self { pool })
    }
}

#[async_trait]
impl EventStore for PgStore {
    async fn create(&self, event: &Event) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO eventory_events (id, owner_id, name, date, location, description, tags, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(event.id)
        .bind(event.owner_id)
        .bind(&event.name)
        .bind(&event.date)
        .bind(&event.location)
        .bind(&event.description)
        .bind(Json(&event.tags))
        .bind(event.created_at)
        .bind(event.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, StoreError> {
        let event = sqlx::query_as::<_, Event>("SELECT * FROM eventory_events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(event)
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Event>, StoreError> {
        let events = sqlx::query_as::<_, Event>(
            "SELECT * FROM eventory_events WHERE owner_id = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    async fn name_exists(
        &self,
        owner_id: Uuid,
        name: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, StoreError> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(
                SELECT 1 FROM eventory_events
                WHERE owner_id = $1 AND LOWER(name) = LOWER($2)
                  AND ($3::uuid IS NULL OR id <> $3)
             )",
        )
        .bind(owner_id)
        .bind(name)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn update(&self, event: &Event) -> Result<(), StoreError> {
        sqlx::query(
            "UPDATE eventory_events
             SET name = $1, date = $2, location = $3, description = $4, tags = $5, updated_at = $6
             WHERE id = $7",
        )
        .bind(&event.name)
        .bind(&event.date)
        .bind(&event.location)
        .bind(&event.description)
        .bind(Json(&event.tags))
        .bind(event.updated_at)
        .bind(event.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM eventory_events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn create(&self, user: &User) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO eventory_users (id, username, email, password_hash, created_at)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM eventory_users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM eventory_users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM eventory_users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }
}
