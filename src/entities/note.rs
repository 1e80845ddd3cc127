//! Note entity - personal note owned by exactly one user

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed palette the color tag is drawn from at creation.
pub const NOTE_COLOR_PALETTE: [&str; 5] =
    ["#fce4ec", "#f3e5f5", "#e8f5e9", "#fff3e0", "#e3f2fd"];

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Note {
    pub note_id: String,
    pub owner_id: String,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    /// Assigned at creation from [`NOTE_COLOR_PALETTE`], never changed.
    pub color_tag: String,
}
