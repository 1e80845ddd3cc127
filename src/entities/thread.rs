//! ChatThread entity - conversation pairing one member with the staff pool

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChatThread {
    pub thread_id: String,
    pub member_id: String,
    pub member_display_name: String,
    pub member_avatar_tag: String,
    /// Text of the most recent message, member or staff.
    pub last_message_preview: String,
    pub updated_at: DateTime<Utc>,
    /// Member-sent messages not yet acknowledged by staff opening the
    /// thread. Staff replies never touch it.
    pub unread_count: u32,
}
