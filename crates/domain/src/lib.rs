// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod availability;
mod clock;
mod draw_order;
mod eligibility;
mod error;
mod queue_order;
mod types;

#[cfg(test)]
mod tests;

pub use availability::{DayAvailability, Resolution, WindowKind, resolve_availability};
pub use clock::time_to_minutes;
pub use draw_order::{build_draw_pool, compare_draw_priority};
pub use eligibility::is_eligible;
pub use queue_order::{build_dispatch_queue, build_reorder_pool, compare_dispatch, status_rank};

// Re-export public types
pub use error::DomainError;
pub use types::{
    Caddie, CaddieStatus, Category, DayOfWeek, ListConfig, OrderMode, ShiftRequirement,
    WeeklyAssignment, WeeklyShift,
};
