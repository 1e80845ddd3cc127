//! User entity - profile record with embedded cycle settings

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::enums::Role;

/// Avatar tag assigned to every new profile.
pub const DEFAULT_AVATAR_TAG: &str = "👩";

/// Cycle configuration owned by one user. Replaced wholesale on update,
/// never merged field by field; used transiently to derive the phase.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CycleSettings {
    pub last_period_start: NaiveDate,
    #[serde(default = "CycleSettings::default_cycle_length")]
    pub cycle_length_days: u32,
    #[serde(default = "CycleSettings::default_period_length")]
    pub period_length_days: u32,
}

impl CycleSettings {
    pub fn default_cycle_length() -> u32 {
        28
    }

    pub fn default_period_length() -> u32 {
        5
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct User {
    pub user_id: String,
    pub email: String,
    pub display_name: String,
    pub role: Role,
    pub avatar_tag: String,
    pub last_login_at: DateTime<Utc>,
    pub cycle_settings: Option<CycleSettings>,
}
