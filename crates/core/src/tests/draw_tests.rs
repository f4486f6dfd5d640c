// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    after, before, create_scenario_roster, create_test_caddie, create_test_shift, full_day,
};
use crate::{DrawOutcome, generate_weekly_draw};
use fairway_domain::{Caddie, Category, DayAvailability, DayOfWeek, WeeklyShift, WindowKind};
use std::collections::HashSet;

#[test]
fn test_scenario_morning_shift_respects_after_window() {
    // One Friday 08:00 shift needing 1xA. a1 (full day) is assigned;
    // a2 fails the after-09:30 window at 08:00; a3 was never in the pool.
    let roster: Vec<Caddie> = create_scenario_roster();
    let shifts: Vec<WeeklyShift> =
        vec![create_test_shift(10, DayOfWeek::Friday, "08:00", vec![(Category::A, 1)])];

    let outcome: DrawOutcome = generate_weekly_draw(DayOfWeek::Friday, &shifts, &roster);

    assert_eq!(outcome.assignments.len(), 1);
    assert_eq!(outcome.assignments[0].caddie_id, 1);

    let a1: &Caddie = &outcome.updated_caddies[0];
    let a2: &Caddie = &outcome.updated_caddies[1];
    let a3: &Caddie = &outcome.updated_caddies[2];
    assert!(!a1.is_skipped_next_week);
    assert!(a2.is_skipped_next_week);
    assert!(!a3.is_skipped_next_week); // never in the pool, untouched
}

#[test]
fn test_scenario_late_shift_skips_by_quota() {
    // Same roster, shift moved to 10:00. a1 is first in priority and
    // eligible; a2 also passes the window but the quota is 1, so a2 is
    // flagged. Quota-skip and window-skip produce the same flag.
    let roster: Vec<Caddie> = create_scenario_roster();
    let shifts: Vec<WeeklyShift> =
        vec![create_test_shift(10, DayOfWeek::Friday, "10:00", vec![(Category::A, 1)])];

    let outcome: DrawOutcome = generate_weekly_draw(DayOfWeek::Friday, &shifts, &roster);

    assert_eq!(outcome.assignments.len(), 1);
    assert_eq!(outcome.assignments[0].caddie_id, 1);
    assert!(outcome.updated_caddies[1].is_skipped_next_week);
    assert_eq!(outcome.skipped_count, 1);
}

#[test]
fn test_category_invariant_holds() {
    let roster: Vec<Caddie> = vec![
        create_test_caddie(1, 101, Category::A, 1, full_day(DayOfWeek::Saturday)),
        create_test_caddie(2, 201, Category::B, 1, full_day(DayOfWeek::Saturday)),
        create_test_caddie(3, 301, Category::C, 1, full_day(DayOfWeek::Saturday)),
    ];
    let shifts: Vec<WeeklyShift> = vec![create_test_shift(
        10,
        DayOfWeek::Saturday,
        "07:00",
        vec![(Category::A, 1), (Category::B, 1), (Category::C, 1)],
    )];

    let outcome: DrawOutcome = generate_weekly_draw(DayOfWeek::Saturday, &shifts, &roster);

    assert_eq!(outcome.assignments.len(), 3);
    for assignment in &outcome.assignments {
        let caddie: &Caddie = roster
            .iter()
            .find(|c| c.caddie_id == assignment.caddie_id)
            .unwrap();
        assert_eq!(caddie.category, assignment.category);
    }
}

#[test]
fn test_no_caddie_assigned_twice_in_one_draw() {
    let roster: Vec<Caddie> = vec![
        create_test_caddie(1, 101, Category::A, 1, full_day(DayOfWeek::Friday)),
        create_test_caddie(2, 102, Category::A, 2, full_day(DayOfWeek::Friday)),
    ];
    // Three shifts, each wanting 2xA: demand far exceeds supply.
    let shifts: Vec<WeeklyShift> = vec![
        create_test_shift(10, DayOfWeek::Friday, "07:00", vec![(Category::A, 2)]),
        create_test_shift(11, DayOfWeek::Friday, "09:00", vec![(Category::A, 2)]),
        create_test_shift(12, DayOfWeek::Friday, "11:00", vec![(Category::A, 2)]),
    ];

    let outcome: DrawOutcome = generate_weekly_draw(DayOfWeek::Friday, &shifts, &roster);

    let ids: Vec<i64> = outcome.assignments.iter().map(|a| a.caddie_id).collect();
    let unique: HashSet<i64> = ids.iter().copied().collect();
    assert_eq!(ids.len(), unique.len());
    assert_eq!(outcome.assignments.len(), 2);
}

#[test]
fn test_quota_upper_bound_respected() {
    let roster: Vec<Caddie> = (1..=5)
        .map(|i| {
            create_test_caddie(
                i,
                100 + u32::try_from(i).unwrap(),
                Category::A,
                u32::try_from(i).unwrap(),
                full_day(DayOfWeek::Friday),
            )
        })
        .collect();
    let shifts: Vec<WeeklyShift> =
        vec![create_test_shift(10, DayOfWeek::Friday, "08:00", vec![(Category::A, 2)])];

    let outcome: DrawOutcome = generate_weekly_draw(DayOfWeek::Friday, &shifts, &roster);

    assert_eq!(outcome.assignments.len(), 2);
    assert_eq!(outcome.skipped_count, 3);
}

#[test]
fn test_shifts_processed_in_ascending_time_order() {
    // Shift list arrives out of order; the 07:00 shift must draw first
    // and therefore get the highest-priority caddie.
    let roster: Vec<Caddie> = vec![
        create_test_caddie(1, 101, Category::A, 1, full_day(DayOfWeek::Friday)),
        create_test_caddie(2, 102, Category::A, 2, full_day(DayOfWeek::Friday)),
    ];
    let shifts: Vec<WeeklyShift> = vec![
        create_test_shift(20, DayOfWeek::Friday, "1:00 PM", vec![(Category::A, 1)]),
        create_test_shift(10, DayOfWeek::Friday, "07:00", vec![(Category::A, 1)]),
    ];

    let outcome: DrawOutcome = generate_weekly_draw(DayOfWeek::Friday, &shifts, &roster);

    assert_eq!(outcome.assignments[0].shift_id, 10);
    assert_eq!(outcome.assignments[0].caddie_id, 1);
    assert_eq!(outcome.assignments[1].shift_id, 20);
    assert_eq!(outcome.assignments[1].caddie_id, 2);
}

#[test]
fn test_before_window_respected() {
    let roster: Vec<Caddie> = vec![create_test_caddie(
        1,
        101,
        Category::A,
        1,
        before(DayOfWeek::Friday, "12:00"),
    )];
    let shifts: Vec<WeeklyShift> = vec![
        create_test_shift(10, DayOfWeek::Friday, "11:59", vec![(Category::A, 1)]),
        create_test_shift(11, DayOfWeek::Friday, "12:00", vec![(Category::A, 1)]),
    ];

    let outcome: DrawOutcome = generate_weekly_draw(DayOfWeek::Friday, &shifts, &roster);

    assert_eq!(outcome.assignments.len(), 1);
    assert_eq!(outcome.assignments[0].shift_id, 10);
}

#[test]
fn test_under_supply_is_silent_partial_result() {
    let roster: Vec<Caddie> = vec![create_test_caddie(
        1,
        101,
        Category::A,
        1,
        full_day(DayOfWeek::Friday),
    )];
    let shifts: Vec<WeeklyShift> = vec![create_test_shift(
        10,
        DayOfWeek::Friday,
        "08:00",
        vec![(Category::A, 3), (Category::B, 2)],
    )];

    let outcome: DrawOutcome = generate_weekly_draw(DayOfWeek::Friday, &shifts, &roster);

    // 5 slots requested, 1 filled; callers detect shortfall from counts.
    assert_eq!(outcome.assigned_count, 1);
    assert!(!outcome.is_noop());
}

#[test]
fn test_pool_exhaustion_does_not_block_other_requirements() {
    let roster: Vec<Caddie> = vec![
        create_test_caddie(1, 201, Category::B, 1, full_day(DayOfWeek::Friday)),
    ];
    // The A requirement cannot be filled; the B requirement after it
    // still must be.
    let shifts: Vec<WeeklyShift> = vec![create_test_shift(
        10,
        DayOfWeek::Friday,
        "08:00",
        vec![(Category::A, 2), (Category::B, 1)],
    )];

    let outcome: DrawOutcome = generate_weekly_draw(DayOfWeek::Friday, &shifts, &roster);

    assert_eq!(outcome.assignments.len(), 1);
    assert_eq!(outcome.assignments[0].category, Category::B);
}

#[test]
fn test_empty_shift_list_is_distinguishable_noop() {
    let roster: Vec<Caddie> = create_scenario_roster();

    let outcome: DrawOutcome = generate_weekly_draw(DayOfWeek::Friday, &[], &roster);

    assert!(outcome.is_noop());
    assert_eq!(outcome.assigned_count, 0);
    assert_eq!(outcome.skipped_count, 0);
}

#[test]
fn test_noop_draw_leaves_fairness_flags_untouched() {
    // Nothing ran, so nobody is flagged: an eligible caddie must not be
    // marked skipped by a draw over a shift-less day.
    let roster: Vec<Caddie> = create_scenario_roster();

    let outcome: DrawOutcome = generate_weekly_draw(DayOfWeek::Friday, &[], &roster);

    assert!(!outcome.updated_caddies[0].is_skipped_next_week);
    assert!(!outcome.updated_caddies[1].is_skipped_next_week);
    assert_eq!(outcome.updated_caddies, roster);
}

#[test]
fn test_noop_draw_preserves_prior_fairness_state() {
    // Flags written by an earlier real draw survive a later no-op draw.
    let mut roster: Vec<Caddie> = create_scenario_roster();
    roster[1].is_skipped_next_week = true;

    let outcome: DrawOutcome = generate_weekly_draw(DayOfWeek::Friday, &[], &roster);

    assert!(outcome.is_noop());
    assert!(outcome.updated_caddies[1].is_skipped_next_week);
    assert_eq!(outcome.updated_caddies, roster);
}

#[test]
fn test_ran_and_assigned_zero_is_not_noop() {
    let roster: Vec<Caddie> = vec![create_test_caddie(
        1,
        201,
        Category::B,
        1,
        full_day(DayOfWeek::Friday),
    )];
    let shifts: Vec<WeeklyShift> =
        vec![create_test_shift(10, DayOfWeek::Friday, "08:00", vec![(Category::A, 1)])];

    let outcome: DrawOutcome = generate_weekly_draw(DayOfWeek::Friday, &shifts, &roster);

    assert!(!outcome.is_noop());
    assert_eq!(outcome.assigned_count, 0);
    assert_eq!(outcome.shift_count, 1);
}

#[test]
fn test_other_days_shifts_are_ignored() {
    let roster: Vec<Caddie> = create_scenario_roster();
    let shifts: Vec<WeeklyShift> = vec![
        create_test_shift(10, DayOfWeek::Saturday, "08:00", vec![(Category::A, 1)]),
    ];

    let outcome: DrawOutcome = generate_weekly_draw(DayOfWeek::Friday, &shifts, &roster);

    assert!(outcome.is_noop());
    assert!(outcome.assignments.is_empty());
    assert_eq!(outcome.updated_caddies, roster);
}

#[test]
fn test_skipped_caddie_floats_to_front_of_next_draw() {
    // Draw twice: the caddie skipped in round one must be assigned in
    // round two despite a worse priority.
    let roster: Vec<Caddie> = vec![
        create_test_caddie(1, 101, Category::A, 1, full_day(DayOfWeek::Friday)),
        create_test_caddie(2, 102, Category::A, 2, full_day(DayOfWeek::Friday)),
    ];
    let shifts: Vec<WeeklyShift> =
        vec![create_test_shift(10, DayOfWeek::Friday, "08:00", vec![(Category::A, 1)])];

    let first: DrawOutcome = generate_weekly_draw(DayOfWeek::Friday, &shifts, &roster);
    assert_eq!(first.assignments[0].caddie_id, 1);

    let second: DrawOutcome =
        generate_weekly_draw(DayOfWeek::Friday, &shifts, &first.updated_caddies);
    assert_eq!(second.assignments[0].caddie_id, 2);
}

#[test]
fn test_between_window_accepts_any_shift_time() {
    let roster: Vec<Caddie> = vec![create_test_caddie(
        1,
        101,
        Category::A,
        1,
        vec![DayAvailability::windowed(
            DayOfWeek::Friday,
            WindowKind::Between,
            Some(String::from("10:00")),
            Some(String::from("14:00")),
        )],
    )];
    let shifts: Vec<WeeklyShift> =
        vec![create_test_shift(10, DayOfWeek::Friday, "08:00", vec![(Category::A, 1)])];

    let outcome: DrawOutcome = generate_weekly_draw(DayOfWeek::Friday, &shifts, &roster);

    assert_eq!(outcome.assignments.len(), 1);
}

#[test]
fn test_inactive_caddies_never_allocated() {
    let mut inactive: Caddie =
        create_test_caddie(1, 101, Category::A, 1, full_day(DayOfWeek::Friday));
    inactive.is_active = false;
    let roster: Vec<Caddie> = vec![inactive];
    let shifts: Vec<WeeklyShift> =
        vec![create_test_shift(10, DayOfWeek::Friday, "08:00", vec![(Category::A, 1)])];

    let outcome: DrawOutcome = generate_weekly_draw(DayOfWeek::Friday, &shifts, &roster);

    assert!(outcome.assignments.is_empty());
    assert!(!outcome.updated_caddies[0].is_skipped_next_week);
}

#[test]
fn test_assignments_denormalize_caddie_and_shift_fields() {
    let roster: Vec<Caddie> = create_scenario_roster();
    let shifts: Vec<WeeklyShift> =
        vec![create_test_shift(10, DayOfWeek::Friday, "08:00", vec![(Category::A, 1)])];

    let outcome: DrawOutcome = generate_weekly_draw(DayOfWeek::Friday, &shifts, &roster);

    let assignment = &outcome.assignments[0];
    assert_eq!(assignment.caddie_name, "Caddie 101");
    assert_eq!(assignment.caddie_number, 101);
    assert_eq!(assignment.category, Category::A);
    assert_eq!(assignment.shift_time, "08:00");
}

#[test]
fn test_draw_is_deterministic_for_fixed_input() {
    let roster: Vec<Caddie> = vec![
        create_test_caddie(1, 101, Category::A, 2, full_day(DayOfWeek::Friday)),
        create_test_caddie(2, 102, Category::A, 2, after(DayOfWeek::Friday, "9:00 AM")),
        create_test_caddie(3, 103, Category::A, 1, full_day(DayOfWeek::Friday)),
    ];
    let shifts: Vec<WeeklyShift> = vec![
        create_test_shift(10, DayOfWeek::Friday, "08:00", vec![(Category::A, 2)]),
        create_test_shift(11, DayOfWeek::Friday, "10:00", vec![(Category::A, 1)]),
    ];

    let first: DrawOutcome = generate_weekly_draw(DayOfWeek::Friday, &shifts, &roster);
    let second: DrawOutcome = generate_weekly_draw(DayOfWeek::Friday, &shifts, &roster);

    assert_eq!(first, second);
}

#[test]
fn test_input_roster_is_not_mutated() {
    let roster: Vec<Caddie> = create_scenario_roster();
    let roster_before: Vec<Caddie> = roster.clone();
    let shifts: Vec<WeeklyShift> =
        vec![create_test_shift(10, DayOfWeek::Friday, "08:00", vec![(Category::A, 1)])];

    let _outcome: DrawOutcome = generate_weekly_draw(DayOfWeek::Friday, &shifts, &roster);

    assert_eq!(roster, roster_before);
}
