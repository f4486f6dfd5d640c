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

mod allocator;
mod error;
mod outcome;
mod queue;
mod rotation;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use allocator::generate_weekly_draw;
pub use error::CoreError;
pub use outcome::{DrawOutcome, QueueOutcome};
pub use queue::{randomize_dispatch_queue, reorder_dispatch_queue};
pub use rotation::apply_skip_flags;
