//! NoteRepository - personal notes

use rand::seq::SliceRandom;

use super::traits::{Delete, Update};
use crate::dtos::{CreateNoteDTO, UpdateNoteDTO};
use crate::entities::note::NOTE_COLOR_PALETTE;
use crate::entities::Note;
use crate::store::{Collection, StoreError};

pub struct NoteRepository {
    collection: Collection<Note>,
}

impl NoteRepository {
    pub fn new() -> Self {
        Self {
            collection: Collection::new("notes"),
        }
    }

    /// Notes of one owner, newest first.
    pub async fn list_for_owner(&self, owner_id: &str) -> Vec<Note> {
        let owner_id = owner_id.to_string();
        self.collection.query(
            move |note| note.owner_id == owner_id,
            |a, b| b.created_at.cmp(&a.created_at),
        )
    }

    /// Every note regardless of owner, newest first (admin overview).
    pub async fn list_all(&self) -> Vec<Note> {
        self.collection
            .query(|_| true, |a, b| b.created_at.cmp(&a.created_at))
    }

    /// Create a note for `owner_id`. The color tag is drawn uniformly
    /// from the fixed palette here and never changes afterwards.
    pub async fn create(&self, owner_id: &str, data: &CreateNoteDTO) -> Note {
        let color_tag = NOTE_COLOR_PALETTE
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(NOTE_COLOR_PALETTE[0])
            .to_string();

        self.collection.insert_with(|id, now| Note {
            note_id: id,
            owner_id: owner_id.to_string(),
            title: data.title.clone(),
            body: data.body.clone(),
            created_at: now,
            color_tag,
        })
    }
}

impl Default for NoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Update<Note, UpdateNoteDTO, String> for NoteRepository {
    async fn update(&self, id: &String, data: &UpdateNoteDTO) -> Result<Note, StoreError> {
        self.collection.update(id, |note| {
            if let Some(ref title) = data.title {
                note.title = title.clone();
            }
            if let Some(ref body) = data.body {
                note.body = body.clone();
            }
        })
    }
}

impl Delete<String> for NoteRepository {
    async fn delete(&self, id: &String) -> Result<(), StoreError> {
        self.collection.remove(id)
    }
}
