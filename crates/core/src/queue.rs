// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dispatch-queue ordering operations.
//!
//! Manual reorder and one-shot randomize both rewrite `weekend_priority`
//! for every member of a lane's category pool, then flip the lane's
//! order mode so subsequent reads sort by the written ranks. The weekly
//! draw pool reads the same field, which is what makes a dispatch
//! reorder influence the next draw.
//!
//! Concurrency precondition: at most one reorder operation per lane may
//! run at a time; serialization is the caller's responsibility.

use crate::error::CoreError;
use crate::outcome::QueueOutcome;
use fairway_domain::{Caddie, DomainError, ListConfig, OrderMode, build_reorder_pool};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashMap;
use tracing::debug;

/// Moves one caddie to a target position within a lane's pool.
///
/// The lane's pool is materialized in reorder reading order
/// (`weekend_priority` ascending), the caddie is removed and reinserted
/// at `target_index` (0-based), and every pool member's
/// `weekend_priority` is rewritten to its new 1-based position. The
/// renumbering is dense: afterwards the lane's priorities are exactly
/// `1..=N` with no gaps or duplicates. The lane flips to `Manual`.
///
/// # Arguments
///
/// * `config` - The lane configuration (already resolved by the caller)
/// * `caddie_id` - The caddie to move
/// * `target_index` - The destination position, in `0..pool_size`
/// * `caddies` - The full roster snapshot
///
/// # Errors
///
/// Returns an error if:
/// - `target_index` is outside `[0, pool_size)`
/// - `caddie_id` is not a member of the lane's pool
pub fn reorder_dispatch_queue(
    config: &ListConfig,
    caddie_id: i64,
    target_index: usize,
    caddies: &[Caddie],
) -> Result<QueueOutcome, CoreError> {
    let mut pool: Vec<Caddie> = build_reorder_pool(caddies, config);

    if target_index >= pool.len() {
        return Err(CoreError::DomainViolation(
            DomainError::ReorderIndexOutOfRange {
                index: target_index,
                pool_size: pool.len(),
            },
        ));
    }

    let position: usize = pool
        .iter()
        .position(|c| c.caddie_id == caddie_id)
        .ok_or_else(|| {
            CoreError::DomainViolation(DomainError::CaddieNotInPool {
                caddie_id,
                category: config.category.as_str().to_string(),
            })
        })?;

    let moved: Caddie = pool.remove(position);
    pool.insert(target_index, moved);

    debug!(
        caddie_id,
        target_index,
        category = %config.category,
        pool_size = pool.len(),
        "Reordered dispatch queue"
    );

    Ok(QueueOutcome {
        updated_caddies: write_ranks(&pool, caddies, |index| {
            u32::try_from(index + 1).unwrap_or(u32::MAX)
        }),
        order: OrderMode::Manual,
    })
}

/// Assigns every member of a lane's pool a freshly shuffled rank.
///
/// Ranks are a Fisher–Yates permutation of `1..=N` drawn from the
/// injected random source, written into `weekend_priority`. The lane
/// flips to `Random` so subsequent reads sort by the now-fixed ranks.
/// Tests pass a seeded generator for reproducibility.
///
/// # Arguments
///
/// * `config` - The lane configuration (already resolved by the caller)
/// * `caddies` - The full roster snapshot
/// * `rng` - The random source
#[must_use]
pub fn randomize_dispatch_queue<R: Rng + ?Sized>(
    config: &ListConfig,
    caddies: &[Caddie],
    rng: &mut R,
) -> QueueOutcome {
    let pool: Vec<Caddie> = build_reorder_pool(caddies, config);

    let mut ranks: Vec<u32> = (1..=pool.len())
        .map(|rank| u32::try_from(rank).unwrap_or(u32::MAX))
        .collect();
    ranks.shuffle(rng);

    debug!(
        category = %config.category,
        pool_size = pool.len(),
        "Randomized dispatch queue"
    );

    QueueOutcome {
        updated_caddies: write_ranks(&pool, caddies, |index| ranks[index]),
        order: OrderMode::Random,
    }
}

/// Merges new lane ranks back into a fresh copy of the full roster.
///
/// `rank_of` maps a pool index to the priority written for the member at
/// that index. Caddies outside the pool are returned unchanged.
fn write_ranks<F>(pool: &[Caddie], roster: &[Caddie], rank_of: F) -> Vec<Caddie>
where
    F: Fn(usize) -> u32,
{
    let new_ranks: HashMap<i64, u32> = pool
        .iter()
        .enumerate()
        .map(|(index, c)| (c.caddie_id, rank_of(index)))
        .collect();

    roster
        .iter()
        .cloned()
        .map(|mut caddie| {
            if let Some(rank) = new_ranks.get(&caddie.caddie_id) {
                caddie.weekend_priority = *rank;
            }
            caddie
        })
        .collect()
}
