//! User DTOs - registration input, cycle settings input, public profile

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::{CycleSettings, Role, User};

/// Public profile shape handed to the UI layer.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserDTO {
    pub user_id: String,
    pub email: String,
    pub display_name: String,
    pub role: Role,
    pub avatar_tag: String,
    pub last_login_at: DateTime<Utc>,
    pub cycle_settings: Option<CycleSettings>,
}

impl From<User> for UserDTO {
    fn from(value: User) -> Self {
        Self {
            user_id: value.user_id,
            email: value.email,
            display_name: value.display_name,
            role: value.role,
            avatar_tag: value.avatar_tag,
            last_login_at: value.last_login_at,
            cycle_settings: value.cycle_settings,
        }
    }
}

/// Registration input. The password never appears in any output DTO.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct RegisterDTO {
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    #[validate(length(min = 1, max = 60, message = "Display name must be between 1 and 60 characters"))]
    pub display_name: String,

    // bcrypt truncates past 72 bytes, so cap there
    #[validate(length(min = 8, max = 72, message = "Password must be between 8 and 72 characters"))]
    pub password: String,
}

/// Full-replacement cycle settings input; there is no partial form.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CycleSettingsDTO {
    pub last_period_start: NaiveDate,

    #[validate(range(min = 20, max = 40, message = "Cycle length must be between 20 and 40 days"))]
    pub cycle_length_days: u32,

    #[validate(range(min = 2, max = 9, message = "Period length must be between 2 and 9 days"))]
    pub period_length_days: u32,
}

impl From<CycleSettingsDTO> for CycleSettings {
    fn from(value: CycleSettingsDTO) -> Self {
        Self {
            last_period_start: value.last_period_start,
            cycle_length_days: value.cycle_length_days,
            period_length_days: value.period_length_days,
        }
    }
}
