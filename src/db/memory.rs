use super::{ChatLogStore, StoreError};
use crate::models::{ChatLogEntry, NewChatLogEntry};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

/// Process-local store with the same ordering contract as the Postgres one.
#[derive(Default)]
pub struct InMemoryChatLogStore {
    state: RwLock<State>,
}

#[derive(Default)]
struct State {
    rows: Vec<ChatLogEntry>,
    last_id: i64,
    last_timestamp: Option<DateTime<Utc>>,
}

impl InMemoryChatLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ChatLogStore for InMemoryChatLogStore {
    async fn insert(&self, entry: NewChatLogEntry) -> Result<ChatLogEntry, StoreError> {
        let mut state = self.state.write().await;

        state.last_id += 1;
        // the wall clock may step backwards; timestamps must not
        let now = Utc::now();
        let timestamp = match state.last_timestamp {
            Some(last) if last > now => last,
            _ => now,
        };
        state.last_timestamp = Some(timestamp);

        let row = ChatLogEntry {
            id: state.last_id,
            user_id: entry.user_id,
            message: entry.message,
            is_user: entry.is_user,
            session_id: entry.session_id,
            timestamp,
        };
        state.rows.push(row.clone());

        Ok(row)
    }

    async fn list_by_session(&self, session_id: &str) -> Result<Vec<ChatLogEntry>, StoreError> {
        let state = self.state.read().await;
        let mut rows: Vec<ChatLogEntry> = state
            .rows
            .iter()
            .filter(|row| row.session_id == session_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then(a.id.cmp(&b.id)));

        Ok(rows)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
