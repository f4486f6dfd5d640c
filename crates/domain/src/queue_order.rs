// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Daily dispatch queue ordering.
//!
//! Each dispatch lane is scoped by a [`ListConfig`]: one category, an
//! inclusive caddie-number range, and an order mode. Status has a
//! secondary precedence over order within the visible queue: caddies
//! with status `Available` always list before caddies with status
//! `Late`, regardless of order mode; the order mode only decides ties
//! within the same status bucket.

use crate::types::{Caddie, CaddieStatus, ListConfig, OrderMode};
use std::cmp::Ordering;

/// Ranks a status into its queue bucket.
///
/// `Available` lists before `Late`; every other status trails both.
/// Only the Available-before-Late precedence is required; the trailing
/// bucket keeps the comparator total.
#[must_use]
pub const fn status_rank(status: CaddieStatus) -> u8 {
    match status {
        CaddieStatus::Available => 0,
        CaddieStatus::Late => 1,
        _ => 2,
    }
}

/// Compares two caddies within a dispatch lane under an order mode.
///
/// Status bucket first, then the order mode: `Ascending`/`Descending`
/// sort strictly by caddie number; `Random` and `Manual` sort by the
/// `weekend_priority` ranks a prior shuffle or move operation wrote.
#[must_use]
pub fn compare_dispatch(a: &Caddie, b: &Caddie, mode: OrderMode) -> Ordering {
    match status_rank(a.status).cmp(&status_rank(b.status)) {
        Ordering::Less => return Ordering::Less,
        Ordering::Greater => return Ordering::Greater,
        Ordering::Equal => {}
    }

    match mode {
        OrderMode::Ascending => a.number.cmp(&b.number),
        OrderMode::Descending => b.number.cmp(&a.number),
        OrderMode::Random | OrderMode::Manual => match a.weekend_priority.cmp(&b.weekend_priority)
        {
            Ordering::Less => Ordering::Less,
            Ordering::Greater => Ordering::Greater,
            Ordering::Equal => a.number.cmp(&b.number),
        },
    }
}

/// Builds the visible dispatch queue for a lane.
///
/// Filters the roster to active caddies of the lane's category whose
/// numbers fall in the lane's range, then orders by status bucket and
/// the lane's order mode. Returns owned copies.
///
/// # Arguments
///
/// * `caddies` - The full roster snapshot
/// * `config` - The lane configuration
#[must_use]
pub fn build_dispatch_queue(caddies: &[Caddie], config: &ListConfig) -> Vec<Caddie> {
    let mut queue: Vec<Caddie> = scope_to_lane(caddies, config);
    queue.sort_by(|a, b| compare_dispatch(a, b, config.order));
    queue
}

/// Builds the lane's pool in reorder reading order.
///
/// Manual moves and randomize operate on the category-scoped pool read
/// by `weekend_priority` ascending, not on the status-bucketed visible
/// queue. Ties break by `(number, caddie_id)` ascending.
///
/// # Arguments
///
/// * `caddies` - The full roster snapshot
/// * `config` - The lane configuration
#[must_use]
pub fn build_reorder_pool(caddies: &[Caddie], config: &ListConfig) -> Vec<Caddie> {
    let mut pool: Vec<Caddie> = scope_to_lane(caddies, config);
    pool.sort_by(|a, b| match a.weekend_priority.cmp(&b.weekend_priority) {
        Ordering::Less => Ordering::Less,
        Ordering::Greater => Ordering::Greater,
        Ordering::Equal => match a.number.cmp(&b.number) {
            Ordering::Less => Ordering::Less,
            Ordering::Greater => Ordering::Greater,
            Ordering::Equal => a.caddie_id.cmp(&b.caddie_id),
        },
    });
    pool
}

/// Filters the roster to the lane's members: active, category match,
/// number inside the inclusive range.
fn scope_to_lane(caddies: &[Caddie], config: &ListConfig) -> Vec<Caddie> {
    caddies
        .iter()
        .filter(|c| {
            c.is_active && c.category == config.category && config.contains_number(c.number)
        })
        .cloned()
        .collect()
}
