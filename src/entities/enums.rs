//! Enumerations shared across entities

use serde::{Deserialize, Serialize};

/// Who an account (and therefore a message sender) is.
/// Immutable after registration.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Member,
    Staff,
}

impl Role {
    pub fn is_staff(self) -> bool {
        matches!(self, Role::Staff)
    }
}
