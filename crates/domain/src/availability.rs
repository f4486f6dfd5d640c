// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Day availability resolution.
//!
//! A caddie's weekly availability is a set of at most one entry per day
//! of week. Resolution answers, for a given caddie and day: is the
//! caddie available at all, and under what time-window constraint.

use crate::error::DomainError;
use crate::types::{Caddie, DayOfWeek};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The kind of time-window constraint on an availability entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WindowKind {
    /// Available the whole day.
    #[default]
    Full,
    /// Available only before `time`.
    Before,
    /// Available only from `time` onward.
    After,
    /// Available only between `time` and `end_time`.
    Between,
}

impl FromStr for WindowKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Full" => Ok(Self::Full),
            "Before" => Ok(Self::Before),
            "After" => Ok(Self::After),
            "Between" => Ok(Self::Between),
            _ => Err(DomainError::InvalidWindowKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for WindowKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl WindowKind {
    /// Converts this window kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "Full",
            Self::Before => "Before",
            Self::After => "After",
            Self::Between => "Between",
        }
    }
}

/// One weekly availability entry for a caddie.
///
/// Times are stored as strings in either supported form (`HH:mm` or
/// `h:mm AM/PM`); the shared conversion in [`crate::clock`] makes both
/// forms compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    /// The day of week this entry applies to.
    pub day: DayOfWeek,
    /// Whether the caddie is available at all on this day.
    pub is_available: bool,
    /// The time-window constraint kind.
    pub window_kind: WindowKind,
    /// Window boundary time. Unused for `Full`.
    pub time: Option<String>,
    /// Window end time. Used only for `Between`.
    pub end_time: Option<String>,
}

impl DayAvailability {
    /// Creates a full-day availability entry.
    ///
    /// # Arguments
    ///
    /// * `day` - The day of week
    #[must_use]
    pub const fn full_day(day: DayOfWeek) -> Self {
        Self {
            day,
            is_available: true,
            window_kind: WindowKind::Full,
            time: None,
            end_time: None,
        }
    }

    /// Creates an unavailable entry for a day.
    ///
    /// # Arguments
    ///
    /// * `day` - The day of week
    #[must_use]
    pub const fn unavailable(day: DayOfWeek) -> Self {
        Self {
            day,
            is_available: false,
            window_kind: WindowKind::Full,
            time: None,
            end_time: None,
        }
    }

    /// Creates an entry constrained by a time window.
    ///
    /// # Arguments
    ///
    /// * `day` - The day of week
    /// * `window_kind` - The constraint kind
    /// * `time` - Window boundary time
    /// * `end_time` - Window end time (for `Between` only)
    #[must_use]
    pub const fn windowed(
        day: DayOfWeek,
        window_kind: WindowKind,
        time: Option<String>,
        end_time: Option<String>,
    ) -> Self {
        Self {
            day,
            is_available: true,
            window_kind,
            time,
            end_time,
        }
    }
}

/// The outcome of resolving a caddie's availability for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Whether the caddie is available on the day at all.
    pub available: bool,
    /// The constraint kind when available.
    pub window_kind: WindowKind,
    /// Window boundary time, carried through from the entry.
    pub time: Option<String>,
    /// Window end time, carried through from the entry.
    pub end_time: Option<String>,
}

impl Resolution {
    /// The resolution for a day with no entry or an unavailable entry.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            available: false,
            window_kind: WindowKind::Full,
            time: None,
            end_time: None,
        }
    }
}

/// Resolves a caddie's availability for a day of week.
///
/// If the caddie has no entry for the day, or the entry's
/// `is_available` is false, the result is unavailable. Otherwise the
/// entry's window constraint is carried through unchanged. No side
/// effects.
///
/// # Arguments
///
/// * `caddie` - The caddie to resolve
/// * `day` - The day of week
#[must_use]
pub fn resolve_availability(caddie: &Caddie, day: DayOfWeek) -> Resolution {
    let entry: Option<&DayAvailability> = caddie.availability.iter().find(|a| a.day == day);

    match entry {
        Some(a) if a.is_available => Resolution {
            available: true,
            window_kind: a.window_kind,
            time: a.time.clone(),
            end_time: a.end_time.clone(),
        },
        _ => Resolution::unavailable(),
    }
}
