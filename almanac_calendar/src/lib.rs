// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=almanac_calendar --heading-base-level=0

//! Almanac Calendar: calendar math for date pickers.
//!
//! This crate holds the pure, stateless half of a date picker: everything that
//! can be computed from a month and a handful of options without knowing what
//! is focused or selected.
//!
//! - [`YearMonth`]: a month within a year, with Euclidean month offsets
//!   (`January 2024 - 1 = December 2023`).
//! - [`DateKey`]: the canonical identity of a calendar day. Equality, hashing
//!   and ordering all go through the key; its text form is `DD/MM/YYYY`.
//! - [`generate_grid`]: the day numbers a month view renders, including
//!   padding days borrowed from adjacent months.
//! - [`describe_month`] / [`DayDescriptor`]: per-cell data (key, disabled,
//!   current month, today, weekend) for a grid.
//! - [`HeadingFormat`], [`weekday_labels`], [`month_name`]: labels from a fixed
//!   English table.
//!
//! ## Minimal example
//!
//! ```rust
//! use almanac_calendar::{DateBounds, YearMonth, describe_month, generate_grid};
//!
//! // January 2024 starts on a Monday, so a Monday-first grid has no leading padding.
//! let january = YearMonth::new(2024, 0);
//! let grid = generate_grid(january, 1, false);
//! assert_eq!(grid.len(), 35);
//! assert_eq!(grid[0], 1);
//!
//! // Describe the cells; the four trailing cells belong to February and are disabled.
//! let days = describe_month(january, 1, false, &DateBounds::default(), None);
//! assert_eq!(days.iter().filter(|d| d.disabled).count(), 4);
//! assert_eq!(days[31].key.to_string(), "01/02/2024");
//! ```
//!
//! ## Headings
//!
//! ```rust
//! use almanac_calendar::{HeadingFormat, YearMonth};
//!
//! let format: HeadingFormat = "MMM YY".parse().unwrap();
//! assert_eq!(format.format(YearMonth::new(2024, 8)), "Sep 24");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod date_key;
mod grid;
mod labels;
mod month;

pub use date_key::{DateKey, DateKeyError};
pub use grid::{
    DateBounds, DayDescriptor, FIXED_GRID_LEN, Grid, describe_day, describe_month,
    generate_grid, is_padding, leading_days,
};
pub use labels::{
    HeadingFormat, HeadingFormatError, MONTH_NAMES, MonthToken, Separator, WEEKDAY_NAMES,
    WeekdayFormat, YearToken, format_month_year, month_name, weekday_labels,
};
pub use month::{YearMonth, day_of_week, days_in_month, is_leap_year};

/// Returns today's date in the local time zone.
#[cfg(feature = "std")]
#[must_use]
pub fn today_local() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
