//! Services module - the operations the UI layer calls
//!
//! Plain async functions over [`AppState`](crate::core::AppState):
//! validate input, talk to the repositories, map errors. Only the
//! resources service is an HTTP surface; everything else is consumed
//! as direct function calls and live subscriptions.

pub mod auth;
pub mod chat;
pub mod content;
pub mod notes;
pub mod resources;
pub mod users;

// Re-exports to keep imports short
pub use auth::{authorize, login, register};
pub use chat::{
    get_or_create_thread, list_threads, mark_thread_read, member_thread, send_message,
    subscribe_messages, subscribe_threads, thread_messages,
};
pub use content::{create_article, delete_article, get_article, list_articles, update_article};
pub use notes::{create_note, delete_note, list_all_notes, list_notes, update_note};
pub use resources::{list_resources, upload_resource};
pub use users::{cycle_status, get_profile, list_profiles, set_cycle_settings};

use axum::{http::StatusCode, response::IntoResponse};

/// Root endpoint - health check
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
