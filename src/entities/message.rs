//! ChatMessage entity - immutable once created

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::Role;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChatMessage {
    pub message_id: String,
    pub thread_id: String,
    pub sender_id: String,
    pub sender_role: Role,
    pub text: String,
    /// Server-assigned at append time; ordering key within the thread.
    pub sent_at: DateTime<Utc>,
    pub read_flag: bool,
}
