//! User services - profiles and cycle settings

use chrono::NaiveDate;
use tracing::{info, instrument};
use validator::Validate;

use crate::core::{AppError, AppState};
use crate::cycle::{self, CycleStatus};
use crate::dtos::{CycleSettingsDTO, UserDTO};
use crate::repositories::Read;

#[instrument(skip(state), fields(user_id = %user_id))]
pub async fn get_profile(state: &AppState, user_id: &str) -> Result<UserDTO, AppError> {
    let user = state
        .users
        .read(&user_id.to_string())
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    Ok(UserDTO::from(user))
}

/// Admin overview: every profile, most recently logged in first.
#[instrument(skip(state))]
pub async fn list_profiles(state: &AppState) -> Vec<UserDTO> {
    state
        .users
        .list_by_last_login()
        .await
        .into_iter()
        .map(UserDTO::from)
        .collect()
}

/// Replace the user's cycle settings wholesale. There is no field-level
/// merge; the DTO is the complete new configuration.
#[instrument(skip(state, settings), fields(user_id = %user_id))]
pub async fn set_cycle_settings(
    state: &AppState,
    user_id: &str,
    settings: CycleSettingsDTO,
) -> Result<UserDTO, AppError> {
    settings.validate()?;
    let user = state
        .users
        .set_cycle_settings(user_id, settings.into())
        .await?;
    info!("Cycle settings updated");
    Ok(UserDTO::from(user))
}

/// Where the user stands in their cycle on `date`: day, position and
/// phase, derived from the stored settings.
#[instrument(skip(state), fields(user_id = %user_id, date = %date))]
pub async fn cycle_status(
    state: &AppState,
    user_id: &str,
    date: NaiveDate,
) -> Result<CycleStatus, AppError> {
    let user = state
        .users
        .read(&user_id.to_string())
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    let settings = user
        .cycle_settings
        .ok_or_else(|| AppError::not_found("Cycle settings not configured"))?;

    Ok(cycle::status_for_date(date, &settings)?)
}
