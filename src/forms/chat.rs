use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Body of `POST /api/chat/logs`.
#[derive(Serialize, Deserialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChatLogForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 10000)]
    pub message: String,
    pub is_user: bool,
    #[validate(min_length = 1)]
    #[validate(max_length = 255)]
    pub session_id: String,
    #[validate(min_length = 1)]
    #[validate(max_length = 255)]
    pub user_id: String,
}

impl From<ChatLogForm> for models::NewChatLogEntry {
    fn from(form: ChatLogForm) -> Self {
        models::NewChatLogEntry {
            user_id: form.user_id,
            message: form.message,
            is_user: form.is_user,
            session_id: form.session_id,
        }
    }
}
