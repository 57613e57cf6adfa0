// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picker configuration.
//!
//! A [`PickerConfig`] is built once per picker instance and shared, immutably,
//! with every view binding through [`PickerStore::config`](crate::PickerStore::config).

use core::fmt;

use almanac_calendar::{DateBounds, HeadingFormat, WeekdayFormat};
use chrono::NaiveDate;

/// How picking a day changes the selection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    /// At most one selected day.
    #[default]
    Single,
    /// Any number of independently toggled days.
    Multiple,
    /// Two endpoints; every day between them counts as selected.
    Range,
}

/// What keyboard navigation does when it runs off the edge of the visible valid days.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MoveFocusBehavior {
    /// Page the viewport and continue in the newly visible months.
    #[default]
    Change,
    /// Wrap to the opposite end of the current viewport (day steps only).
    Loop,
    /// Stay put.
    None,
}

/// Options recognized by a picker instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickerConfig {
    /// Selection semantics.
    pub mode: SelectionMode,
    /// First column of each week, `0` (Sunday) through `6` (Saturday).
    pub start_of_week: u32,
    /// Number of consecutive months in the viewport.
    pub month_count: u32,
    /// Boundary policy for keyboard navigation.
    pub move_focus_behavior: MoveFocusBehavior,
    /// Earliest enabled day.
    pub min_date: Option<NaiveDate>,
    /// Latest enabled day.
    pub max_date: Option<NaiveDate>,
    /// Weekday column labels, if shown.
    pub weekdays: Option<WeekdayFormat>,
    /// Month heading format, if shown.
    pub heading_format: Option<HeadingFormat>,
    /// Always render six weeks per month.
    pub fixed_weeks: bool,
    /// Day focused when the picker is created (defaults to today).
    pub initial_focus: Option<NaiveDate>,
    /// Show paging controls on the last viewport month only.
    pub last_month_control: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            mode: SelectionMode::Single,
            start_of_week: 1,
            month_count: 1,
            move_focus_behavior: MoveFocusBehavior::Change,
            min_date: None,
            max_date: None,
            weekdays: None,
            heading_format: None,
            fixed_weeks: false,
            initial_focus: None,
            last_month_control: false,
        }
    }
}

impl PickerConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the selection mode.
    #[must_use]
    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the first weekday column (`0` = Sunday).
    #[must_use]
    pub fn with_start_of_week(mut self, start_of_week: u32) -> Self {
        self.start_of_week = start_of_week;
        self
    }

    /// Sets the number of months in the viewport.
    #[must_use]
    pub fn with_month_count(mut self, month_count: u32) -> Self {
        self.month_count = month_count;
        self
    }

    /// Sets the keyboard boundary policy.
    #[must_use]
    pub fn with_move_focus_behavior(mut self, behavior: MoveFocusBehavior) -> Self {
        self.move_focus_behavior = behavior;
        self
    }

    /// Sets the earliest enabled day.
    #[must_use]
    pub fn with_min_date(mut self, min_date: NaiveDate) -> Self {
        self.min_date = Some(min_date);
        self
    }

    /// Sets the latest enabled day.
    #[must_use]
    pub fn with_max_date(mut self, max_date: NaiveDate) -> Self {
        self.max_date = Some(max_date);
        self
    }

    /// Shows weekday labels in the given format.
    #[must_use]
    pub fn with_weekdays(mut self, format: WeekdayFormat) -> Self {
        self.weekdays = Some(format);
        self
    }

    /// Shows month headings in the given format.
    #[must_use]
    pub fn with_heading_format(mut self, format: HeadingFormat) -> Self {
        self.heading_format = Some(format);
        self
    }

    /// Renders six weeks for every month.
    #[must_use]
    pub fn with_fixed_weeks(mut self, fixed_weeks: bool) -> Self {
        self.fixed_weeks = fixed_weeks;
        self
    }

    /// Sets the day focused at creation.
    #[must_use]
    pub fn with_initial_focus(mut self, date: NaiveDate) -> Self {
        self.initial_focus = Some(date);
        self
    }

    /// Shows paging controls on the last viewport month.
    #[must_use]
    pub fn with_last_month_control(mut self, last_month_control: bool) -> Self {
        self.last_month_control = last_month_control;
        self
    }

    /// Returns the `[min_date, max_date]` bounds.
    #[must_use]
    pub fn bounds(&self) -> DateBounds {
        DateBounds::new(self.min_date, self.max_date)
    }

    /// Returns the viewport size as a signed month delta.
    #[must_use]
    pub fn month_span(&self) -> i32 {
        i32::try_from(self.month_count).unwrap_or(i32::MAX)
    }

    /// Checks the options that have a restricted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_of_week > 6 {
            return Err(ConfigError::StartOfWeek(self.start_of_week));
        }
        if self.month_count == 0 {
            return Err(ConfigError::NoMonths);
        }
        if let (Some(min), Some(max)) = (self.min_date, self.max_date)
            && min > max
        {
            return Err(ConfigError::InvertedBounds { min, max });
        }
        Ok(())
    }
}

/// Error returned when a [`PickerConfig`] is out of range.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `start_of_week` was not in `0..=6`.
    StartOfWeek(u32),
    /// `month_count` was zero.
    NoMonths,
    /// `min_date` was after `max_date`.
    InvertedBounds {
        /// The configured minimum.
        min: NaiveDate,
        /// The configured maximum.
        max: NaiveDate,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOfWeek(day) => {
                write!(f, "start_of_week must be in 0..=6, got {day}")
            }
            Self::NoMonths => f.write_str("month_count must be at least 1"),
            Self::InvertedBounds { min, max } => {
                write!(f, "min_date {min} is after max_date {max}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
