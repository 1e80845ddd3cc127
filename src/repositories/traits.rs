//! Common repository traits
//!
//! Generic interfaces for the store operations repositories share.
//! Implemented where they fit the entity; entity-specific queries stay
//! inherent methods on the concrete repository.

use crate::store::StoreError;

/// Creating new entities. `CreateInput` carries the caller-provided
/// fields; id and creation timestamp are assigned by the store.
pub trait Create<Entity, CreateInput> {
    async fn create(&self, data: &CreateInput) -> Result<Entity, StoreError>;
}

/// Reading a single entity by id.
///
/// Returns `Ok(None)` when no entity has that id; `Err` is reserved for
/// store failures.
pub trait Read<Entity, Id> {
    async fn read(&self, id: &Id) -> Result<Option<Entity>, StoreError>;
}

/// Updating an existing entity from a partial-update input: only
/// `Some(_)` fields are applied.
pub trait Update<Entity, UpdateInput, Id> {
    async fn update(&self, id: &Id, data: &UpdateInput) -> Result<Entity, StoreError>;
}

/// Deleting an entity by id.
pub trait Delete<Id> {
    async fn delete(&self, id: &Id) -> Result<(), StoreError>;
}
