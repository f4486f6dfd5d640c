// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fairway_domain::{Caddie, OrderMode, WeeklyAssignment};

/// The result of a weekly draw invocation.
///
/// The caller (persistence layer) replaces all stored assignments for
/// the drawn day with `assignments` and commits the roster fairness
/// flags from `updated_caddies` atomically. An unfillable requirement is
/// a silent partial result; callers compare `assigned_count` against the
/// requested quotas to detect shortfall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOutcome {
    /// Assignments produced for the day, in allocation order.
    pub assignments: Vec<WeeklyAssignment>,
    /// The full roster with fairness flags updated.
    pub updated_caddies: Vec<Caddie>,
    /// How many slots were filled.
    pub assigned_count: usize,
    /// How many pool members went unassigned (and were flagged).
    pub skipped_count: usize,
    /// How many shifts on the drawn day were processed.
    pub shift_count: usize,
}

impl DrawOutcome {
    /// Whether the draw was a no-op because no shifts existed for the
    /// day, as opposed to running and assigning zero.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.shift_count == 0
    }
}

/// The result of a dispatch-queue reorder or randomize operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueOutcome {
    /// The full roster with lane priorities rewritten.
    pub updated_caddies: Vec<Caddie>,
    /// The order mode the lane flips to (`Manual` or `Random`).
    pub order: OrderMode,
}
