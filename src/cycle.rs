//! Cycle model - pure calendar math
//!
//! Maps a calendar date to a day of cycle, a position inside the
//! configured cycle, and a phase. No state, no side effects; safe to
//! call from anywhere.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::CycleSettings;

/// Phase of the cycle a given position falls into.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Period,
    Fertile,
    Ovulation,
    Normal,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CycleError {
    /// Cycle length of zero days cannot be wrapped into.
    #[error("Invalid cycle configuration: cycle length must be at least 1 day")]
    InvalidConfiguration,
}

/// 1-based day count since the most recent recorded period start.
/// Unbounded: not wrapped to the cycle length, and ≤ 0 for dates before
/// the period start.
pub fn day_of_cycle(date: NaiveDate, last_period_start: NaiveDate) -> i64 {
    (date - last_period_start).num_days() + 1
}

/// Wrap a day of cycle into `[1, cycle_length_days]`.
///
/// Euclidean remainder, so the wrap is periodic over all integers:
/// `cycle_position(d + k * len, len) == cycle_position(d, len)` for any
/// `k`, including non-positive days.
pub fn cycle_position(day_of_cycle: i64, cycle_length_days: u32) -> Result<u32, CycleError> {
    if cycle_length_days == 0 {
        return Err(CycleError::InvalidConfiguration);
    }
    let len = i64::from(cycle_length_days);
    Ok(((day_of_cycle - 1).rem_euclid(len) + 1) as u32)
}

/// Phase for a position in `[1, cycle_length_days]`.
///
/// The ovulation day is `cycle_length_days - 14`, checked before the
/// fertile window so the two never overlap. The period test runs first,
/// so for short cycles where the computed ovulation day collides with
/// the period window, Period wins; an ovulation day below 1 never
/// matches any position, leaving such cycles with no ovulation or
/// fertile marking at all. No wrap into the next cycle.
pub fn phase_of(position: u32, cycle_length_days: u32, period_length_days: u32) -> Phase {
    let pos = i64::from(position);

    if pos >= 1 && pos <= i64::from(period_length_days) {
        return Phase::Period;
    }

    let ovulation_day = i64::from(cycle_length_days) - 14;
    if pos == ovulation_day {
        return Phase::Ovulation;
    }
    if pos >= ovulation_day - 5 && pos <= ovulation_day + 1 {
        return Phase::Fertile;
    }

    Phase::Normal
}

/// Phase on `date` under `settings`; composition of the three steps.
pub fn phase_for_date(date: NaiveDate, settings: &CycleSettings) -> Result<Phase, CycleError> {
    Ok(status_for_date(date, settings)?.phase)
}

/// Everything the dashboard shows for one date.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleStatus {
    pub day_of_cycle: i64,
    pub position: u32,
    pub phase: Phase,
}

pub fn status_for_date(
    date: NaiveDate,
    settings: &CycleSettings,
) -> Result<CycleStatus, CycleError> {
    let day = day_of_cycle(date, settings.last_period_start);
    let position = cycle_position(day, settings.cycle_length_days)?;
    Ok(CycleStatus {
        day_of_cycle: day,
        position,
        phase: phase_of(
            position,
            settings.cycle_length_days,
            settings.period_length_days,
        ),
    })
}
