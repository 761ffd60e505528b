//! Storage for chat log entries.
//!
//! Handlers depend on the [`ChatLogStore`] trait only. `main` injects a
//! [`PgChatLogStore`]; tests inject [`InMemoryChatLogStore`] or their own stub.

pub mod chat;
pub mod memory;

use crate::models::{ChatLogEntry, NewChatLogEntry};
use async_trait::async_trait;

pub use chat::PgChatLogStore;
pub use memory::InMemoryChatLogStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    // connectivity problems are kept apart from query/constraint failures
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                StoreError::Unavailable(err.to_string())
            }
            err => StoreError::Database(err),
        }
    }
}

#[async_trait]
pub trait ChatLogStore: Send + Sync {
    /// Appends one entry and returns the stored row with its `id` and `timestamp`.
    async fn insert(&self, entry: NewChatLogEntry) -> Result<ChatLogEntry, StoreError>;

    /// All entries of a session, oldest first. Unknown sessions yield an empty list.
    async fn list_by_session(&self, session_id: &str) -> Result<Vec<ChatLogEntry>, StoreError>;

    /// Cheap reachability probe used by the health check.
    async fn ping(&self) -> Result<(), StoreError>;
}
