//! Article entity - staff-authored content feed item

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Article {
    pub article_id: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub category: String,
    /// External video reference (e.g. a YouTube id), when the article
    /// embeds one.
    pub video_ref: Option<String>,
    pub created_at: DateTime<Utc>,
}
