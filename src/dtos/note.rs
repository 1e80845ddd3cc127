//! Note DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateNoteDTO {
    #[validate(length(min = 1, max = 120, message = "Title must be between 1 and 120 characters"))]
    pub title: String,

    #[validate(length(max = 10000, message = "Body must be at most 10000 characters"))]
    pub body: String,
}

/// Partial update; only `Some(_)` fields are applied. The color tag is
/// deliberately absent: it is fixed at creation.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateNoteDTO {
    #[validate(length(min = 1, max = 120, message = "Title must be between 1 and 120 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 10000, message = "Body must be at most 10000 characters"))]
    pub body: Option<String>,
}
