use super::{ChatLogStore, StoreError};
use crate::models::{ChatLogEntry, NewChatLogEntry};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::Instrument;

#[derive(Clone)]
pub struct PgChatLogStore {
    pool: PgPool,
}

impl PgChatLogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatLogStore for PgChatLogStore {
    async fn insert(&self, entry: NewChatLogEntry) -> Result<ChatLogEntry, StoreError> {
        let query_span = tracing::info_span!("Saving chat log into the database");
        sqlx::query_as::<_, ChatLogEntry>(
            r#"INSERT INTO chat_logs (user_id, message, is_user, session_id)
               VALUES ($1, $2, $3, $4)
               RETURNING id, user_id, message, is_user, session_id, "timestamp""#,
        )
        .bind(&entry.user_id)
        .bind(&entry.message)
        .bind(entry.is_user)
        .bind(&entry.session_id)
        .fetch_one(&self.pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to execute insert query: {:?}", err);
            StoreError::from(err)
        })
    }

    async fn list_by_session(&self, session_id: &str) -> Result<Vec<ChatLogEntry>, StoreError> {
        let query_span = tracing::info_span!("Fetch chat logs by session.", session_id);
        sqlx::query_as::<_, ChatLogEntry>(
            r#"SELECT id, user_id, message, is_user, session_id, "timestamp"
               FROM chat_logs
               WHERE session_id = $1
               ORDER BY "timestamp" ASC, id ASC"#,
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to execute fetch query: {:?}", err);
            StoreError::from(err)
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(StoreError::from)
    }
}
