// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Month arithmetic: leap years, month lengths, and [`YearMonth`] offsets.

use chrono::{Datelike, NaiveDate};

/// Number of days in each month of a common year, indexed by month (`0` = January).
const MONTH_LENGTHS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns `true` if `year` is a Gregorian leap year.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `month` (`0` = January) of `year`.
///
/// Month indices past `11` wrap around.
#[must_use]
pub const fn days_in_month(month: u32, year: i32) -> u32 {
    let month = month % 12;
    if month == 1 && is_leap_year(year) {
        29
    } else {
        MONTH_LENGTHS[month as usize]
    }
}

/// Returns the weekday of the given calendar date, with Sunday as `0` and Saturday as `6`.
///
/// `month` is zero-based. Dates chrono cannot represent report `0`.
#[must_use]
pub fn day_of_week(year: i32, month: u32, day: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month + 1, day)
        .map_or(0, |date| date.weekday().num_days_from_sunday())
}

/// A calendar month within a specific year.
///
/// Months are zero-based (`0` = January, `11` = December), matching the month
/// index used by the picker state. Ordering is chronological.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a `YearMonth`, normalizing month indices past `11` into later years.
    #[must_use]
    pub const fn new(year: i32, month: u32) -> Self {
        Self {
            year: year.saturating_add((month / 12) as i32),
            month: month % 12,
        }
    }

    /// Returns the month containing `date`.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the zero-based month index.
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// Returns the month `delta` months away, carrying into adjacent years.
    ///
    /// Uses Euclidean division so negative offsets borrow from earlier years:
    /// January 2024 offset by `-1` is December 2023. Offsets past the range of
    /// `i32` saturate.
    #[must_use]
    pub fn offset(self, delta: i32) -> Self {
        let shifted = i64::from(self.month) + i64::from(delta);
        let years = i32::try_from(shifted.div_euclid(12)).unwrap_or(i32::MAX);
        Self {
            year: self.year.saturating_add(years),
            month: u32::try_from(shifted.rem_euclid(12)).unwrap_or(0),
        }
    }

    /// Returns the signed number of months from `self` to `other`, saturating
    /// at the range of `i32`.
    #[must_use]
    pub fn months_until(self, other: Self) -> i32 {
        let months = (i64::from(other.year) - i64::from(self.year)) * 12
            + i64::from(other.month)
            - i64::from(self.month);
        i32::try_from(months).unwrap_or(if months < 0 { i32::MIN } else { i32::MAX })
    }

    /// Returns the number of days in this month.
    #[must_use]
    pub const fn days(self) -> u32 {
        days_in_month(self.month, self.year)
    }

    /// Returns the date for day-of-month `day` (`1`-based), if it exists.
    #[must_use]
    pub fn day(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, day)
    }

    /// Returns the weekday of the first day of the month (Sunday = `0`).
    #[must_use]
    pub fn first_weekday(self) -> u32 {
        day_of_week(self.year, self.month, 1)
    }

    /// Returns `true` if `date` falls within this month.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self::of(date)
    }
}
