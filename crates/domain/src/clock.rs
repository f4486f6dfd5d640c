// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared time-of-day conversion.
//!
//! Shift times and availability window times arrive as strings in either
//! 24-hour (`HH:mm`) or 12-hour (`h:mm AM/PM`) form. All comparisons in
//! the engine happen on minutes-since-midnight, so both forms of the
//! same wall-clock time compare equal.

use chrono::{NaiveTime, Timelike};

/// Converts a time-of-day string to minutes since midnight.
///
/// Accepts `HH:mm` (24-hour) and `h:mm AM/PM` (12-hour, case-insensitive
/// meridiem). Surrounding whitespace is ignored.
///
/// Inputs are expected to arrive pre-validated; a string that parses as
/// neither form resolves to 0 rather than failing the caller.
///
/// # Arguments
///
/// * `time` - The time-of-day string
///
/// # Returns
///
/// Minutes since midnight, in `0..1440`.
#[must_use]
pub fn time_to_minutes(time: &str) -> u16 {
    let trimmed: &str = time.trim();

    let parsed: Option<NaiveTime> = NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(&trimmed.to_uppercase(), "%I:%M %p"))
        .ok();

    parsed.map_or(0, |t| {
        let minutes: u32 = t.hour() * 60 + t.minute();
        u16::try_from(minutes).unwrap_or(0)
    })
}
