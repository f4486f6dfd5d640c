// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fairness rotation.
//!
//! After a draw, every member of the day's initial pool who did not
//! receive an assignment is flagged `is_skipped_next_week`, which sorts
//! them to the front of the next pool ordering. Whether the member was
//! passed over by a quota or by a time window is deliberately not
//! distinguished; both float the caddie forward next time.

use fairway_domain::{Caddie, WeeklyAssignment};
use std::collections::HashSet;

/// Applies fairness flags to the roster after a draw.
///
/// For every caddie whose id appears in `pool_ids` (the day's initial
/// pool, captured before allocation): sets `is_skipped_next_week` to
/// true if the caddie is absent from `assignments`, false otherwise.
/// Caddies never in the pool are returned untouched. The input roster
/// is not mutated; a fresh roster is returned.
///
/// # Arguments
///
/// * `pool_ids` - Ids of the day's initial pool members
/// * `assignments` - The draw's final assignment list
/// * `roster` - The full caddie roster snapshot
#[must_use]
pub fn apply_skip_flags(
    pool_ids: &[i64],
    assignments: &[WeeklyAssignment],
    roster: &[Caddie],
) -> Vec<Caddie> {
    let assigned: HashSet<i64> = assignments.iter().map(|a| a.caddie_id).collect();
    let pool: HashSet<i64> = pool_ids.iter().copied().collect();

    roster
        .iter()
        .cloned()
        .map(|mut caddie| {
            if pool.contains(&caddie.caddie_id) {
                caddie.is_skipped_next_week = !assigned.contains(&caddie.caddie_id);
            }
            caddie
        })
        .collect()
}
