// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fairway_domain::{
    Caddie, Category, DayAvailability, DayOfWeek, ListConfig, OrderMode, ShiftRequirement,
    WeeklyShift, WindowKind,
};

pub fn create_test_caddie(
    caddie_id: i64,
    number: u32,
    category: Category,
    priority: u32,
    availability: Vec<DayAvailability>,
) -> Caddie {
    let mut caddie: Caddie = Caddie::new(
        caddie_id,
        number,
        format!("Caddie {number}"),
        category,
        String::from("North Course"),
        String::from("Caddie"),
        availability,
    );
    caddie.weekend_priority = priority;
    caddie
}

pub fn full_day(day: DayOfWeek) -> Vec<DayAvailability> {
    vec![DayAvailability::full_day(day)]
}

pub fn after(day: DayOfWeek, time: &str) -> Vec<DayAvailability> {
    vec![DayAvailability::windowed(
        day,
        WindowKind::After,
        Some(time.to_string()),
        None,
    )]
}

pub fn before(day: DayOfWeek, time: &str) -> Vec<DayAvailability> {
    vec![DayAvailability::windowed(
        day,
        WindowKind::Before,
        Some(time.to_string()),
        None,
    )]
}

pub fn unavailable(day: DayOfWeek) -> Vec<DayAvailability> {
    vec![DayAvailability::unavailable(day)]
}

pub fn create_test_shift(
    shift_id: i64,
    day: DayOfWeek,
    time: &str,
    requirements: Vec<(Category, u32)>,
) -> WeeklyShift {
    WeeklyShift::new(
        shift_id,
        day,
        time.to_string(),
        requirements
            .into_iter()
            .map(|(category, count)| ShiftRequirement::new(category, count))
            .collect(),
    )
}

/// The three-caddie category-A roster used by the concrete draw
/// scenarios: a1 full-day Friday, a2 after 09:30 Friday, a3 unavailable
/// Friday, priorities 1/2/3.
pub fn create_scenario_roster() -> Vec<Caddie> {
    vec![
        create_test_caddie(1, 101, Category::A, 1, full_day(DayOfWeek::Friday)),
        create_test_caddie(2, 102, Category::A, 2, after(DayOfWeek::Friday, "09:30")),
        create_test_caddie(3, 103, Category::A, 3, unavailable(DayOfWeek::Friday)),
    ]
}

pub fn create_test_lane(category: Category, order: OrderMode) -> ListConfig {
    ListConfig::new(category, 100, 199, order)
}
