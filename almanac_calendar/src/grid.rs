// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Month grids and per-day descriptors.
//!
//! A grid is the sequence of day numbers a month view renders, row by row:
//! the current month's days, preceded by the tail of the previous month and
//! followed by the head of the next month so that every row has seven cells.
//! Borrowed cells are _padding_ and are always disabled.

use alloc::vec::Vec;

use chrono::{Datelike, NaiveDate, Weekday};
use smallvec::SmallVec;

use crate::date_key::DateKey;
use crate::month::YearMonth;

/// Length of a grid rendered with fixed weeks (six rows of seven days).
pub const FIXED_GRID_LEN: usize = 42;

/// Day numbers of one month grid, in display order.
pub type Grid = SmallVec<[u32; FIXED_GRID_LEN]>;

/// Returns how many padding days precede the first of `month` when weeks start
/// on `start_of_week` (Sunday = `0`).
#[must_use]
pub fn leading_days(month: YearMonth, start_of_week: u32) -> u32 {
    (month.first_weekday() + 7 - start_of_week % 7) % 7
}

/// Generates the day numbers displayed for `month`.
///
/// The result starts with `leading_days` numbers counting up to the previous
/// month's last day, continues with `1..=days`, and is padded with `1, 2, ...`
/// until its length is a multiple of seven, or exactly [`FIXED_GRID_LEN`] when
/// `fixed_weeks` is set.
#[must_use]
pub fn generate_grid(month: YearMonth, start_of_week: u32, fixed_weeks: bool) -> Grid {
    let days = month.days();
    let previous_days = month.offset(-1).days();
    let leading = leading_days(month, start_of_week);

    let mut grid = Grid::new();
    grid.extend((0..leading).map(|i| previous_days - leading + 1 + i));
    grid.extend(1..=days);

    let trailing = if fixed_weeks {
        FIXED_GRID_LEN.saturating_sub(grid.len())
    } else {
        (7 - grid.len() % 7) % 7
    };
    grid.extend((1..).take(trailing));
    grid
}

/// Returns `true` if the cell at `index` holding `day` is borrowed from an adjacent month.
///
/// A current-month day sits at most six cells away from its own number, while
/// padding days are always much further away, so a distance above seven marks
/// padding.
#[must_use]
pub fn is_padding(index: usize, day: u32) -> bool {
    index.abs_diff(day as usize) > 7
}

/// Inclusive `[min, max]` bounds on selectable days.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DateBounds {
    /// Earliest selectable day, if bounded.
    pub min: Option<NaiveDate>,
    /// Latest selectable day, if bounded.
    pub max: Option<NaiveDate>,
}

impl DateBounds {
    /// Creates bounds from optional endpoints.
    #[must_use]
    pub const fn new(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `date` falls before `min` or after `max`.
    #[must_use]
    pub fn excludes(&self, date: NaiveDate) -> bool {
        self.min.is_some_and(|min| date < min) || self.max.is_some_and(|max| date > max)
    }
}

/// Everything a view needs to render one grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DayDescriptor {
    /// The day this cell represents (padding cells name their real, adjacent-month date).
    pub key: DateKey,
    /// Day-of-month number shown in the cell.
    pub day: u32,
    /// `true` for padding cells and for days outside the [`DateBounds`].
    pub disabled: bool,
    /// `false` for padding cells.
    pub is_current_month: bool,
    /// `true` if this is the host's "today".
    pub is_today: bool,
    /// `true` on Saturdays and Sundays.
    pub is_weekend: bool,
}

/// Describes the grid cell at `index` holding `day` in a grid generated for `month`.
///
/// Returns `None` only if the cell does not name a real date, which cannot happen
/// for cells produced by [`generate_grid`].
#[must_use]
pub fn describe_day(
    month: YearMonth,
    day: u32,
    index: usize,
    bounds: &DateBounds,
    today: Option<NaiveDate>,
) -> Option<DayDescriptor> {
    let padding = is_padding(index, day);
    let owner = match (padding, day > 15) {
        (false, _) => month,
        (true, true) => month.offset(-1),
        (true, false) => month.offset(1),
    };
    let date = owner.day(day)?;

    Some(DayDescriptor {
        key: DateKey::new(date),
        day,
        disabled: padding || bounds.excludes(date),
        is_current_month: !padding,
        is_today: today == Some(date),
        is_weekend: matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
    })
}

/// Generates and describes every cell of `month`'s grid.
#[must_use]
pub fn describe_month(
    month: YearMonth,
    start_of_week: u32,
    fixed_weeks: bool,
    bounds: &DateBounds,
    today: Option<NaiveDate>,
) -> Vec<DayDescriptor> {
    generate_grid(month, start_of_week, fixed_weeks)
        .iter()
        .enumerate()
        .filter_map(|(index, &day)| describe_day(month, day, index, bounds, today))
        .collect()
}
