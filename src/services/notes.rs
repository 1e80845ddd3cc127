//! Note services - personal notes CRUD
//!
//! No ownership checks here: owner-only access is enforced by the
//! storage layer's access rules at the caller boundary.

use tracing::{info, instrument};
use validator::Validate;

use crate::core::{AppError, AppState};
use crate::dtos::{CreateNoteDTO, UpdateNoteDTO};
use crate::entities::Note;
use crate::repositories::{Delete, Update};

#[instrument(skip(state), fields(owner_id = %owner_id))]
pub async fn list_notes(state: &AppState, owner_id: &str) -> Vec<Note> {
    state.notes.list_for_owner(owner_id).await
}

/// Admin overview across all owners.
#[instrument(skip(state))]
pub async fn list_all_notes(state: &AppState) -> Vec<Note> {
    state.notes.list_all().await
}

#[instrument(skip(state, body), fields(owner_id = %owner_id))]
pub async fn create_note(
    state: &AppState,
    owner_id: &str,
    body: CreateNoteDTO,
) -> Result<Note, AppError> {
    body.validate()?;
    let note = state.notes.create(owner_id, &body).await;
    info!(note_id = %note.note_id, "Note created");
    Ok(note)
}

#[instrument(skip(state, body), fields(note_id = %note_id))]
pub async fn update_note(
    state: &AppState,
    note_id: &str,
    body: UpdateNoteDTO,
) -> Result<Note, AppError> {
    body.validate()?;
    Ok(state.notes.update(&note_id.to_string(), &body).await?)
}

#[instrument(skip(state), fields(note_id = %note_id))]
pub async fn delete_note(state: &AppState, note_id: &str) -> Result<(), AppError> {
    state.notes.delete(&note_id.to_string()).await?;
    info!("Note deleted");
    Ok(())
}
