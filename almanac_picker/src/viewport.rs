// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The months currently on screen, and the valid days within them.
//!
//! A [`Viewport`] is derived entirely from the first visible month and the
//! picker configuration. Keyboard navigation walks its [`ValidDays`]: every
//! enabled, current-month day of every visible month, in display order.
//! Views render from [`Viewport::months`] but the picker never reads anything
//! back from them.

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use almanac_calendar::{DateKey, DayDescriptor, YearMonth, describe_month};
use chrono::NaiveDate;
use hashbrown::HashMap;

use crate::config::PickerConfig;

/// One month of the viewport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthView {
    /// The month shown.
    pub month: YearMonth,
    /// Every grid cell, padding included.
    pub days: Vec<DayDescriptor>,
    /// Heading text, when a heading format is configured.
    pub heading: Option<String>,
    /// `true` on the month that carries the paging controls.
    pub show_controls: bool,
}

/// Enabled days of the viewport in display order.
#[derive(Clone, Debug, Default)]
pub struct ValidDays {
    keys: Vec<DateKey>,
    month_ranges: Vec<Range<usize>>,
    positions: HashMap<DateKey, usize>,
}

impl ValidDays {
    fn from_months(months: &[MonthView]) -> Self {
        let mut valid = Self::default();
        for month in months {
            let start = valid.keys.len();
            for day in month.days.iter().filter(|day| !day.disabled) {
                valid.positions.insert(day.key, valid.keys.len());
                valid.keys.push(day.key);
            }
            valid.month_ranges.push(start..valid.keys.len());
        }
        valid
    }

    /// Returns the number of valid days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if no day in the viewport is enabled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns all valid days in display order.
    #[must_use]
    pub fn keys(&self) -> &[DateKey] {
        &self.keys
    }

    /// Returns the valid day at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<DateKey> {
        self.keys.get(index).copied()
    }

    /// Returns the first valid day.
    #[must_use]
    pub fn first(&self) -> Option<DateKey> {
        self.keys.first().copied()
    }

    /// Returns the last valid day.
    #[must_use]
    pub fn last(&self) -> Option<DateKey> {
        self.keys.last().copied()
    }

    /// Returns the display position of `key`, if it is a valid day.
    #[must_use]
    pub fn position(&self, key: DateKey) -> Option<usize> {
        self.positions.get(&key).copied()
    }

    /// Returns `true` if `key` is a valid day of the viewport.
    #[must_use]
    pub fn contains(&self, key: DateKey) -> bool {
        self.positions.contains_key(&key)
    }

    /// Returns the valid day `delta` positions away from `key`.
    ///
    /// A key that is not a valid day counts as sitting just before the first
    /// one, so stepping forward by one from an off-screen focus lands on the
    /// first valid day.
    #[must_use]
    pub fn step(&self, key: DateKey, delta: isize) -> Option<DateKey> {
        let from = match self.position(key) {
            Some(position) => isize::try_from(position).ok()?,
            None => -1,
        };
        let target = usize::try_from(from.checked_add(delta)?).ok()?;
        self.get(target)
    }

    /// Returns the viewport month index (`0` = first visible) holding `key`.
    #[must_use]
    pub fn month_of(&self, key: DateKey) -> Option<usize> {
        let position = self.position(key)?;
        self.month_ranges
            .iter()
            .position(|range| range.contains(&position))
    }

    /// Returns the valid days of the viewport month at `month_index`.
    #[must_use]
    pub fn in_month(&self, month_index: usize) -> &[DateKey] {
        match self.month_ranges.get(month_index) {
            Some(range) => &self.keys[range.clone()],
            None => &[],
        }
    }
}

/// The visible months plus their derived valid-day sequence.
#[derive(Clone, Debug)]
pub struct Viewport {
    months: Vec<MonthView>,
    valid: ValidDays,
}

impl Viewport {
    /// Builds the viewport whose first month is `first`.
    #[must_use]
    pub fn build(first: YearMonth, config: &PickerConfig, today: Option<NaiveDate>) -> Self {
        let bounds = config.bounds();
        let count = config.month_count.max(1);
        let months: Vec<MonthView> = (0..count)
            .map(|i| {
                let month = first.offset(i32::try_from(i).unwrap_or(i32::MAX));
                MonthView {
                    month,
                    days: describe_month(
                        month,
                        config.start_of_week,
                        config.fixed_weeks,
                        &bounds,
                        today,
                    ),
                    heading: config.heading_format.map(|format| format.format(month)),
                    show_controls: config.last_month_control && i + 1 == count,
                }
            })
            .collect();
        let valid = ValidDays::from_months(&months);
        Self { months, valid }
    }

    /// Returns the month views in display order.
    #[must_use]
    pub fn months(&self) -> &[MonthView] {
        &self.months
    }

    /// Returns the first visible month.
    #[must_use]
    pub fn first_month(&self) -> YearMonth {
        self.months[0].month
    }

    /// Returns the last visible month.
    #[must_use]
    pub fn last_month(&self) -> YearMonth {
        self.months[self.months.len() - 1].month
    }

    /// Returns the enabled days in display order.
    #[must_use]
    pub fn valid_days(&self) -> &ValidDays {
        &self.valid
    }

    /// Returns `true` if the month containing `date` is one of the visible months.
    ///
    /// Padding cells do not count: a date shown only as padding belongs to a
    /// month that is not visible.
    #[must_use]
    pub fn shows_month_of(&self, date: NaiveDate) -> bool {
        self.months.iter().any(|month| month.month.contains(date))
    }

    /// Returns the descriptor for `key`, preferring its current-month cell over padding.
    #[must_use]
    pub fn descriptor(&self, key: DateKey) -> Option<&DayDescriptor> {
        let mut cells = self
            .months
            .iter()
            .flat_map(|month| month.days.iter())
            .filter(|day| day.key == key);
        let first = cells.next()?;
        if first.is_current_month {
            return Some(first);
        }
        cells.find(|day| day.is_current_month).or(Some(first))
    }
}
