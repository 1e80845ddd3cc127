//! Article DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateArticleDTO {
    #[validate(length(min = 1, max = 160, message = "Title must be between 1 and 160 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,

    #[validate(length(max = 300, message = "Excerpt must be at most 300 characters"))]
    pub excerpt: String,

    #[validate(length(min = 1, max = 40, message = "Category must be between 1 and 40 characters"))]
    pub category: String,

    pub video_ref: Option<String>,
}

/// Partial update; only `Some(_)` fields are applied.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateArticleDTO {
    #[validate(length(min = 1, max = 160, message = "Title must be between 1 and 160 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: Option<String>,

    #[validate(length(max = 300, message = "Excerpt must be at most 300 characters"))]
    pub excerpt: Option<String>,

    #[validate(length(min = 1, max = 40, message = "Category must be between 1 and 40 characters"))]
    pub category: Option<String>,

    /// `Some(None)` clears the video reference, `None` leaves it alone.
    pub video_ref: Option<Option<String>>,
}
