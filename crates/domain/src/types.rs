// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::availability::DayAvailability;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents a caddie staffing category.
///
/// Categories are the three fixed, ordered staffing tiers. A shift
/// requirement names exactly one category and may only be filled by
/// caddies of that category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Top tier.
    A,
    /// Middle tier.
    B,
    /// Bottom tier.
    C,
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            _ => Err(DomainError::InvalidCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Category {
    /// Converts this category to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

/// Represents a day of the week.
///
/// Days are compared by name only; the engine carries no calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl FromStr for DayOfWeek {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Monday" => Ok(Self::Monday),
            "Tuesday" => Ok(Self::Tuesday),
            "Wednesday" => Ok(Self::Wednesday),
            "Thursday" => Ok(Self::Thursday),
            "Friday" => Ok(Self::Friday),
            "Saturday" => Ok(Self::Saturday),
            "Sunday" => Ok(Self::Sunday),
            _ => Err(DomainError::InvalidDayOfWeek(s.to_string())),
        }
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl DayOfWeek {
    /// Converts this day to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

/// Represents a caddie's operational status in the daily dispatch queue.
///
/// Status is distinct from weekly rotation state: it describes where the
/// caddie is right now, not whether they may be drawn for a weekly shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CaddieStatus {
    /// Waiting in the dispatch queue.
    #[default]
    Available,
    /// Preparing equipment before going out.
    InPrep,
    /// Out on the course.
    InField,
    /// Expected but not yet checked in.
    Late,
    /// Absent without leave.
    Absent,
    /// On approved leave.
    OnLeave,
}

impl FromStr for CaddieStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(Self::Available),
            "InPrep" => Ok(Self::InPrep),
            "InField" => Ok(Self::InField),
            "Late" => Ok(Self::Late),
            "Absent" => Ok(Self::Absent),
            "OnLeave" => Ok(Self::OnLeave),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for CaddieStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl CaddieStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::InPrep => "InPrep",
            Self::InField => "InField",
            Self::Late => "Late",
            Self::Absent => "Absent",
            Self::OnLeave => "OnLeave",
        }
    }
}

/// Represents the ordering policy of a dispatch-queue list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderMode {
    /// Sort by caddie number, ascending.
    #[default]
    Ascending,
    /// Sort by caddie number, descending.
    Descending,
    /// Ranks were assigned by a one-shot shuffle; sort by `weekend_priority`.
    Random,
    /// Ranks were assigned by explicit moves; sort by `weekend_priority`.
    Manual,
}

impl FromStr for OrderMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ascending" => Ok(Self::Ascending),
            "Descending" => Ok(Self::Descending),
            "Random" => Ok(Self::Random),
            "Manual" => Ok(Self::Manual),
            _ => Err(DomainError::InvalidOrderMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for OrderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl OrderMode {
    /// Converts this order mode to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
            Self::Random => "Random",
            Self::Manual => "Manual",
        }
    }
}

/// Represents a caddie eligible for work.
///
/// The engine receives caddies as an immutable snapshot per invocation
/// and only ever writes two fields back: `weekend_priority` (dispatch
/// reorder / randomize) and `is_skipped_next_week` (weekly draw
/// fairness). Identity and classification fields are never mutated.
///
/// `number` is unique among active caddies of the same category, not
/// globally. Uniqueness is enforced by the surrounding CRUD layer, not
/// re-validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caddie {
    /// Canonical internal identifier (stable, never reused).
    pub caddie_id: i64,
    /// Business-facing number, unique within the caddie's category.
    pub number: u32,
    /// The caddie's name (informational, not unique).
    pub name: String,
    /// The staffing tier this caddie belongs to.
    pub category: Category,
    /// Home location (informational).
    pub location: String,
    /// Role label (informational).
    pub role: String,
    /// Weekly availability, at most one entry per day of week.
    pub availability: Vec<DayAvailability>,
    /// Rotation rank shared by the dispatch queue and the weekly draw
    /// pool. Lower goes first. No uniqueness requirement; ties break
    /// deterministically by `(number, caddie_id)`.
    pub weekend_priority: u32,
    /// Fairness flag: the caddie was eligible but unassigned in the last
    /// draw and sorts to the front of the next pool.
    pub is_skipped_next_week: bool,
    /// Operational status in the daily dispatch queue.
    pub status: CaddieStatus,
    /// Master flag. Inactive caddies are excluded from all allocation.
    pub is_active: bool,
}

impl Caddie {
    /// Creates a new `Caddie`.
    ///
    /// # Arguments
    ///
    /// * `caddie_id` - Canonical identifier
    /// * `number` - Business-facing number (unique within category)
    /// * `name` - The caddie's name
    /// * `category` - Staffing tier
    /// * `location` - Home location
    /// * `role` - Role label
    /// * `availability` - Weekly availability entries
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        caddie_id: i64,
        number: u32,
        name: String,
        category: Category,
        location: String,
        role: String,
        availability: Vec<DayAvailability>,
    ) -> Self {
        Self {
            caddie_id,
            number,
            name,
            category,
            location,
            role,
            availability,
            weekend_priority: 1,
            is_skipped_next_week: false,
            status: CaddieStatus::Available,
            is_active: true,
        }
    }
}

/// Represents one category quota on a weekly shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRequirement {
    /// The category this quota draws from.
    pub category: Category,
    /// How many caddies of that category the shift needs.
    pub count: u32,
}

impl ShiftRequirement {
    /// Creates a new `ShiftRequirement`.
    ///
    /// # Arguments
    ///
    /// * `category` - The category this quota draws from
    /// * `count` - How many caddies the shift needs
    #[must_use]
    pub const fn new(category: Category, count: u32) -> Self {
        Self { category, count }
    }
}

/// Represents a scheduled tee-off group with per-category staffing
/// requirements.
///
/// Multiple shifts may share a day; the allocator processes them in
/// ascending time order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyShift {
    /// Canonical identifier.
    pub shift_id: i64,
    /// The day of week this shift occurs on.
    pub day: DayOfWeek,
    /// Tee-off time of day, in `HH:mm` or `h:mm AM/PM` form.
    pub time: String,
    /// Per-category staffing quotas.
    pub requirements: Vec<ShiftRequirement>,
}

impl WeeklyShift {
    /// Creates a new `WeeklyShift`.
    ///
    /// # Arguments
    ///
    /// * `shift_id` - Canonical identifier
    /// * `day` - The day of week
    /// * `time` - Tee-off time of day
    /// * `requirements` - Per-category staffing quotas
    #[must_use]
    pub const fn new(
        shift_id: i64,
        day: DayOfWeek,
        time: String,
        requirements: Vec<ShiftRequirement>,
    ) -> Self {
        Self {
            shift_id,
            day,
            time,
            requirements,
        }
    }
}

/// Represents one caddie filling one shift slot.
///
/// Assignments are result records, immutable once created. A day's
/// assignments are wholly replaced when the draw for that day is
/// regenerated. Caddie name, number, and category are denormalized for
/// display so the record stands alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyAssignment {
    /// The shift being filled.
    pub shift_id: i64,
    /// The assigned caddie's canonical identifier.
    pub caddie_id: i64,
    /// Denormalized caddie name.
    pub caddie_name: String,
    /// Denormalized caddie number.
    pub caddie_number: u32,
    /// Denormalized caddie category.
    pub category: Category,
    /// The shift's tee-off time, as given on the shift.
    pub shift_time: String,
}

impl WeeklyAssignment {
    /// Creates a `WeeklyAssignment` for a caddie filling a shift slot.
    ///
    /// # Arguments
    ///
    /// * `shift` - The shift being filled
    /// * `caddie` - The assigned caddie
    #[must_use]
    pub fn for_slot(shift: &WeeklyShift, caddie: &Caddie) -> Self {
        Self {
            shift_id: shift.shift_id,
            caddie_id: caddie.caddie_id,
            caddie_name: caddie.name.clone(),
            caddie_number: caddie.number,
            category: caddie.category,
            shift_time: shift.time.clone(),
        }
    }
}

/// Represents the configuration of one daily dispatch lane.
///
/// A list feeds from caddies of one category whose numbers fall in an
/// inclusive range, ordered by `order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListConfig {
    /// The category this lane draws from.
    pub category: Category,
    /// Inclusive lower bound of the caddie-number range.
    pub range_start: u32,
    /// Inclusive upper bound of the caddie-number range.
    pub range_end: u32,
    /// Ordering policy within the lane.
    pub order: OrderMode,
}

impl ListConfig {
    /// Creates a new `ListConfig`.
    ///
    /// # Arguments
    ///
    /// * `category` - The category this lane draws from
    /// * `range_start` - Inclusive lower bound of the number range
    /// * `range_end` - Inclusive upper bound of the number range
    /// * `order` - Ordering policy
    #[must_use]
    pub const fn new(category: Category, range_start: u32, range_end: u32, order: OrderMode) -> Self {
        Self {
            category,
            range_start,
            range_end,
            order,
        }
    }

    /// Checks whether a caddie number falls inside this lane's range.
    #[must_use]
    pub const fn contains_number(&self, number: u32) -> bool {
        number >= self.range_start && number <= self.range_end
    }

    /// Returns a copy of this config with a different order mode.
    #[must_use]
    pub fn with_order(&self, order: OrderMode) -> Self {
        Self {
            order,
            ..self.clone()
        }
    }
}
