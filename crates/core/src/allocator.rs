// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Weekly draw allocation.
//!
//! One consolidated implementation of the draw algorithm: shifts for the
//! day are processed in ascending time order, and each category quota is
//! filled greedily by the first eligible candidate remaining in the
//! ordered pool. Assigned candidates are removed from the pool, so no
//! caddie fills two slots within one draw.
//!
//! The allocator is a pure transformation over its input snapshot. It
//! holds no ambient state and contains no randomness; any randomness was
//! baked into `weekend_priority` by a prior randomize operation, so a
//! fixed input reproduces the output exactly.

use crate::outcome::DrawOutcome;
use crate::rotation::apply_skip_flags;
use fairway_domain::{
    Caddie, DayOfWeek, WeeklyAssignment, WeeklyShift, build_draw_pool, is_eligible,
    time_to_minutes,
};
use tracing::debug;

/// Generates the weekly draw for one day.
///
/// The caller replaces all stored assignments for shifts on `day` with
/// the returned set (idempotent by replacement). Shifts whose `day`
/// differs from the requested day are ignored, so the snapshot need not
/// be pre-filtered.
///
/// Under-supply is not an error: an unfillable requirement is simply
/// left short, and allocation continues with the next requirement. An
/// empty shift list produces a no-op outcome distinguishable via
/// [`DrawOutcome::is_noop`]: the roster is returned unchanged and no
/// fairness flags are written.
///
/// Concurrency precondition: at most one draw per day may run at a time;
/// serialization is the caller's responsibility.
///
/// # Arguments
///
/// * `day` - The day being drawn
/// * `shifts` - The weekly shift snapshot (any order, any days)
/// * `caddies` - The full roster snapshot
#[must_use]
pub fn generate_weekly_draw(
    day: DayOfWeek,
    shifts: &[WeeklyShift],
    caddies: &[Caddie],
) -> DrawOutcome {
    let mut day_shifts: Vec<&WeeklyShift> =
        shifts.iter().filter(|s| s.day == day).collect();
    day_shifts.sort_by_key(|s| (time_to_minutes(&s.time), s.shift_id));

    if day_shifts.is_empty() {
        // No shifts on this day: nothing ran, so nobody is flagged and
        // the roster comes back unchanged.
        debug!(day = %day, "No shifts to draw");
        return DrawOutcome {
            assignments: Vec::new(),
            updated_caddies: caddies.to_vec(),
            assigned_count: 0,
            skipped_count: 0,
            shift_count: 0,
        };
    }

    let mut pool: Vec<Caddie> = build_draw_pool(caddies, day);
    let pool_ids: Vec<i64> = pool.iter().map(|c| c.caddie_id).collect();

    debug!(
        day = %day,
        shift_count = day_shifts.len(),
        pool_size = pool.len(),
        "Generating weekly draw"
    );

    let mut assignments: Vec<WeeklyAssignment> = Vec::new();

    for shift in &day_shifts {
        let shift_minutes: u16 = time_to_minutes(&shift.time);

        for requirement in &shift.requirements {
            for _ in 0..requirement.count {
                let found: Option<usize> = pool
                    .iter()
                    .position(|c| is_eligible(c, requirement.category, shift_minutes, day));

                let Some(index) = found else {
                    // Under-filled requirement; move on without error.
                    break;
                };

                let candidate: Caddie = pool.remove(index);
                debug!(
                    shift_id = shift.shift_id,
                    caddie_id = candidate.caddie_id,
                    category = %requirement.category,
                    "Filled shift slot"
                );
                assignments.push(WeeklyAssignment::for_slot(shift, &candidate));
            }
        }
    }

    let updated_caddies: Vec<Caddie> = apply_skip_flags(&pool_ids, &assignments, caddies);

    let assigned_count: usize = assignments.len();
    let skipped_count: usize = pool_ids.len() - assigned_count;

    debug!(
        day = %day,
        assigned_count,
        skipped_count,
        "Weekly draw complete"
    );

    DrawOutcome {
        assignments,
        updated_caddies,
        assigned_count,
        skipped_count,
        shift_count: day_shifts.len(),
    }
}
