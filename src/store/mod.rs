//! Store module - the two backend collaborators
//!
//! Everything durable lives behind this module: typed document
//! collections with live snapshot queries, and a filesystem-backed
//! object store for binary resources. The rest of the crate only ever
//! talks to these two seams.

pub mod collection;
pub mod error;
pub mod objects;
pub mod subscription;

pub use collection::Collection;
pub use error::StoreError;
pub use objects::{ObjectEntry, ObjectStore};
pub use subscription::Subscription;
