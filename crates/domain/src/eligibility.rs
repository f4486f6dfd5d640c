// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Slot eligibility predicate.
//!
//! Composes availability resolution with category matching and
//! shift-time comparison to decide whether one caddie may fill one
//! shift-requirement slot. Pure predicate, no side effects.

use crate::availability::{Resolution, WindowKind, resolve_availability};
use crate::clock::time_to_minutes;
use crate::types::{Caddie, Category, DayOfWeek};

/// Decides whether a caddie may fill a slot of `category` on a shift at
/// `shift_minutes` (minutes since midnight) on `day`.
///
/// Rules, in order:
///
/// 1. The caddie's category must equal the target category.
/// 2. The caddie must be available on the day.
/// 3. A `Full` window accepts any shift time.
/// 4. An `After T` window accepts only `shift_minutes >= T`.
/// 5. A `Before T` window accepts only `shift_minutes < T`.
/// 6. A `Between` window accepts any shift time. The kind exists in the
///    data model but carries no constraint here; tightening it is a
///    product decision (see DESIGN.md).
///
/// # Arguments
///
/// * `caddie` - The candidate caddie
/// * `category` - The slot's category
/// * `shift_minutes` - The shift's time of day, minutes since midnight
/// * `day` - The day being drawn
#[must_use]
pub fn is_eligible(
    caddie: &Caddie,
    category: Category,
    shift_minutes: u16,
    day: DayOfWeek,
) -> bool {
    if caddie.category != category {
        return false;
    }

    let resolution: Resolution = resolve_availability(caddie, day);
    if !resolution.available {
        return false;
    }

    match resolution.window_kind {
        WindowKind::Full | WindowKind::Between => true,
        WindowKind::After => {
            let boundary: u16 = time_to_minutes(resolution.time.as_deref().unwrap_or(""));
            shift_minutes >= boundary
        }
        WindowKind::Before => {
            let boundary: u16 = time_to_minutes(resolution.time.as_deref().unwrap_or(""));
            shift_minutes < boundary
        }
    }
}
