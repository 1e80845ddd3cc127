//! DTOs module - Data Transfer Objects
//!
//! Input and output shapes at the service boundary. Partial updates are
//! explicit structs listing exactly the mutable fields; only `Some(_)`
//! fields are applied.

pub mod article;
pub mod message;
pub mod note;
pub mod resource;
pub mod user;

// Re-exports to keep imports short
pub use article::{CreateArticleDTO, UpdateArticleDTO};
pub use message::SendMessageDTO;
pub use note::{CreateNoteDTO, UpdateNoteDTO};
pub use resource::ResourceFileDTO;
pub use user::{CycleSettingsDTO, RegisterDTO, UserDTO};
