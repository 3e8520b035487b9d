//! Store trait for the users table
//!
//! Handlers depend on `dyn UserStore` so the router can run against
//! PostgreSQL or the in-memory store.

use async_trait::async_trait;

use crate::models::{seed_users, User};

/// Store failure, surfaced to callers unmodified
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("duplicate key: user {0} already exists")]
    DuplicateId(i32),
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// All rows, in whatever order the store returns them.
    async fn find_all(&self) -> Result<Vec<User>, StoreError>;

    /// The row with `id`, or `None` when nothing matches.
    async fn find_one(&self, id: i32) -> Result<Option<User>, StoreError>;

    /// Remove every row.
    async fn delete_all(&self) -> Result<(), StoreError>;

    /// Insert one row. A missing id is assigned by the store.
    async fn save(&self, user: User) -> Result<(), StoreError>;

    /// Create the `users` table if it does not exist.
    async fn create_schema(&self) -> Result<(), StoreError>;

    /// Create the schema, clear the table, then insert the seed rows.
    ///
    /// Each step runs only after the previous one completed; the first
    /// failure stops the sequence.
    async fn init(&self) -> Result<(), StoreError> {
        self.create_schema().await?;
        self.delete_all().await?;
        for user in seed_users() {
            tracing::debug!(id = ?user.id, "inserting seed user");
            self.save(user).await?;
        }
        tracing::info!("users table initialized with seed rows");
        Ok(())
    }
}
