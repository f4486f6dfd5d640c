// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Weekly draw pool construction and ordering.
//!
//! The weekly draw pool is the day's initially-eligible set: active
//! caddies with the day marked available, regardless of any time-window
//! constraint. The pool is ordered once per draw invocation and consumed
//! left-to-right by the allocator.
//!
//! ## Ordering Rules (Authoritative)
//!
//! 1. `is_skipped_next_week` descending (skipped-last-time sorts first)
//! 2. `weekend_priority` ascending (lower goes first)
//! 3. Tie breaker 1: `number` ascending
//! 4. Tie breaker 2: `caddie_id` ascending
//!
//! The final two stages exist only to make equal priorities
//! deterministic; callers observe a stable order across runs.

use crate::availability::resolve_availability;
use crate::types::{Caddie, DayOfWeek};
use std::cmp::Ordering;

/// Builds the ordered weekly draw pool for a day.
///
/// Filters the roster to active caddies whose availability entry marks
/// the day available (time windows are not consulted here; they are
/// applied per-slot by the eligibility predicate), then sorts by the
/// ordering rules above. Returns owned copies; the caller's roster is
/// untouched.
///
/// # Arguments
///
/// * `caddies` - The full roster snapshot
/// * `day` - The day being drawn
#[must_use]
pub fn build_draw_pool(caddies: &[Caddie], day: DayOfWeek) -> Vec<Caddie> {
    let mut pool: Vec<Caddie> = caddies
        .iter()
        .filter(|c| c.is_active && resolve_availability(c, day).available)
        .cloned()
        .collect();

    pool.sort_by(compare_draw_priority);
    pool
}

/// Compares two caddies by weekly draw priority.
///
/// Returns:
/// - `Ordering::Less` if `a` should be offered work first
/// - `Ordering::Greater` if `b` should be offered work first
#[must_use]
pub fn compare_draw_priority(a: &Caddie, b: &Caddie) -> Ordering {
    // 1. Skipped-last-time caddies sort first
    match b.is_skipped_next_week.cmp(&a.is_skipped_next_week) {
        Ordering::Less => return Ordering::Less,
        Ordering::Greater => return Ordering::Greater,
        Ordering::Equal => {}
    }

    // 2. Lower weekend priority goes first
    match a.weekend_priority.cmp(&b.weekend_priority) {
        Ordering::Less => return Ordering::Less,
        Ordering::Greater => return Ordering::Greater,
        Ordering::Equal => {}
    }

    // 3. Deterministic tie-break: number, then canonical id
    match a.number.cmp(&b.number) {
        Ordering::Less => Ordering::Less,
        Ordering::Greater => Ordering::Greater,
        Ordering::Equal => a.caddie_id.cmp(&b.caddie_id),
    }
}
