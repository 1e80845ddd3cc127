//! Chat services - thread lifecycle, messages, read state, live feeds
//!
//! The most stateful part of the crate. A thread pairs one member with
//! the staff pool; any staff account may answer. Threads are created
//! lazily on first contact and never closed.

use tracing::{debug, info, instrument};
use validator::Validate;

use crate::core::{AppError, AppState};
use crate::dtos::SendMessageDTO;
use crate::entities::{ChatMessage, ChatThread, Role};
use crate::repositories::Read;
use crate::store::Subscription;

/// The member's thread, created on first contact. Safe against
/// concurrent first messages: lookup and create run under the thread
/// collection's creation lock, so both callers get the same thread.
#[instrument(skip(state, display_name, avatar_tag), fields(member_id = %member_id))]
pub async fn get_or_create_thread(
    state: &AppState,
    member_id: &str,
    display_name: &str,
    avatar_tag: &str,
) -> ChatThread {
    let thread = state
        .threads
        .get_or_create(member_id, display_name, avatar_tag)
        .await;
    debug!(thread_id = %thread.thread_id, "Thread resolved");
    thread
}

/// Member-side lookup without creating anything.
#[instrument(skip(state), fields(member_id = %member_id))]
pub async fn member_thread(state: &AppState, member_id: &str) -> Option<ChatThread> {
    state.threads.find_by_member(member_id).await
}

/// Append a message and fold it into the thread header: preview,
/// activity timestamp, and the unread counter when (and only when) the
/// sender is the member. Staff replies never increment unread.
#[instrument(skip(state, text), fields(thread_id = %thread_id, sender_id = %sender_id, sender_role = ?sender_role))]
pub async fn send_message(
    state: &AppState,
    thread_id: &str,
    sender_id: &str,
    sender_role: Role,
    text: &str,
) -> Result<ChatMessage, AppError> {
    let body = SendMessageDTO {
        text: text.to_string(),
    };
    body.validate()?;

    // Fail before appending anything to a thread that does not exist.
    state
        .threads
        .read(&thread_id.to_string())
        .await?
        .ok_or_else(|| AppError::not_found("Chat thread not found"))?;

    let message = state
        .messages
        .append(thread_id, sender_id, sender_role, text)
        .await;

    state
        .threads
        .apply_message(thread_id, text, !sender_role.is_staff())
        .await?;

    info!(message_id = %message.message_id, "Message sent");
    Ok(message)
}

/// Staff opened the thread: acknowledge everything the member sent.
/// Resets the counter whatever its value; message read flags and
/// ordering are untouched.
#[instrument(skip(state), fields(thread_id = %thread_id))]
pub async fn mark_thread_read(state: &AppState, thread_id: &str) -> Result<ChatThread, AppError> {
    let thread = state.threads.mark_read(thread_id).await?;
    debug!("Thread marked read");
    Ok(thread)
}

/// One-shot staff listing: newest activity first, one thread per
/// member even when the store still holds duplicates.
#[instrument(skip(state))]
pub async fn list_threads(state: &AppState) -> Vec<ChatThread> {
    state.threads.list_deduped().await
}

/// One-shot message history of a thread, oldest first.
#[instrument(skip(state), fields(thread_id = %thread_id))]
pub async fn thread_messages(state: &AppState, thread_id: &str) -> Vec<ChatMessage> {
    state.messages.list_for_thread(thread_id).await
}

/// Live staff view over all threads. Fires immediately with the current
/// snapshot, then on every change; a slow consumer only ever sees the
/// latest snapshot.
pub fn subscribe_threads(state: &AppState) -> Subscription<Vec<ChatThread>> {
    state.threads.watch_deduped()
}

/// Live message feed of one thread, oldest first, non-decreasing
/// `sent_at` within every snapshot.
pub fn subscribe_messages(state: &AppState, thread_id: &str) -> Subscription<Vec<ChatMessage>> {
    state.messages.watch_thread(thread_id)
}
