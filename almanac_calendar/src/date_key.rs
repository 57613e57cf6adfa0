// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical identity for calendar days.
//!
//! A [`DateKey`] names one calendar day. Two dates are "the same day" exactly
//! when their keys are equal, and keys order chronologically. The textual form
//! is `DD/MM/YYYY`, which is stable across locales and round-trips through
//! [`DateKey::parse`].

use core::fmt;
use core::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::month::YearMonth;

/// Canonical key for a calendar day.
///
/// Keys compare and hash by calendar date only, so they can be used directly as
/// set and map keys for selection and focus bookkeeping.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Creates the key for `date`.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Creates the key for day `day` of `month` (`1`-based day), if that day exists.
    #[must_use]
    pub fn from_parts(month: YearMonth, day: u32) -> Option<Self> {
        month.day(day).map(Self)
    }

    /// Parses a `DD/MM/YYYY` key.
    pub fn parse(text: &str) -> Result<Self, DateKeyError> {
        let mut parts = text.split('/');
        let (Some(day), Some(month), Some(year), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(DateKeyError::Malformed);
        };

        if day.len() != 2 || month.len() != 2 || year.len() < 4 {
            return Err(DateKeyError::Malformed);
        }
        if ![day, month, year]
            .iter()
            .all(|part| part.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(DateKeyError::Malformed);
        }

        let day: u32 = day.parse().map_err(|_| DateKeyError::Malformed)?;
        let month: u32 = month.parse().map_err(|_| DateKeyError::Malformed)?;
        let year: i32 = year.parse().map_err(|_| DateKeyError::Malformed)?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(DateKeyError::InvalidDate)
    }

    /// Returns the calendar date this key names.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// Returns the `1`-based day of the month.
    #[must_use]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Returns the month containing this day.
    #[must_use]
    pub fn year_month(self) -> YearMonth {
        YearMonth::of(self.0)
    }

    /// Returns the key `days` days later (or earlier, when negative), if representable.
    #[must_use]
    pub fn add_days(self, days: i64) -> Option<Self> {
        self.0
            .checked_add_signed(chrono::TimeDelta::try_days(days)?)
            .map(Self)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<DateKey> for NaiveDate {
    fn from(key: DateKey) -> Self {
        key.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}/{:02}/{:04}",
            self.0.day(),
            self.0.month(),
            self.0.year()
        )
    }
}

impl fmt::Debug for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DateKey({self})")
    }
}

impl FromStr for DateKey {
    type Err = DateKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error returned when parsing a [`DateKey`] fails.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DateKeyError {
    /// The text is not of the form `DD/MM/YYYY`.
    Malformed,
    /// The text is well formed but names a day that does not exist.
    InvalidDate,
}

impl fmt::Display for DateKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => f.write_str("date key must have the form DD/MM/YYYY"),
            Self::InvalidDate => f.write_str("date key names a day that does not exist"),
        }
    }
}

impl core::error::Error for DateKeyError {}
