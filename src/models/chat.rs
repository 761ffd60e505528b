use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One persisted chat message. Rows are append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ChatLogEntry {
    pub id: i64,
    pub user_id: String,
    pub message: String,
    pub is_user: bool,
    pub session_id: String,
    pub timestamp: DateTime<Utc>,
}

/// Values supplied by the caller; `id` and `timestamp` are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewChatLogEntry {
    pub user_id: String,
    pub message: String,
    pub is_user: bool,
    pub session_id: String,
}
