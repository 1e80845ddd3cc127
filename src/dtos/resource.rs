//! Resource DTOs - shapes of the `/resources` HTTP surface

use serde::{Deserialize, Serialize};

/// One uploaded or listed file. `name` is the display name derived from
/// the storage key; `key` is the raw storage key.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ResourceFileDTO {
    pub name: String,
    pub url: String,
    pub key: String,
}
