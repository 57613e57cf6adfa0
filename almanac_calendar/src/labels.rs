// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Month and weekday names, and month-year heading formatting.
//!
//! Names come from a fixed English table; there is no locale support.

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::month::YearMonth;

/// English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English weekday names, Sunday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Returns the name of `month` (`0` = January); `short` keeps the first three letters.
#[must_use]
pub fn month_name(month: u32, short: bool) -> &'static str {
    let name = MONTH_NAMES[(month % 12) as usize];
    if short { &name[..3] } else { name }
}

/// How weekday column labels are rendered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WeekdayFormat {
    /// Two-letter abbreviations (`Mo`, `Tu`, ...).
    #[default]
    Short,
    /// Full names.
    Long,
}

/// Returns the seven weekday labels in column order for weeks starting on
/// `start_of_week` (Sunday = `0`).
#[must_use]
pub fn weekday_labels(start_of_week: u32, format: WeekdayFormat) -> [&'static str; 7] {
    core::array::from_fn(|column| {
        let name = WEEKDAY_NAMES[(column + start_of_week as usize) % 7];
        match format {
            WeekdayFormat::Short => &name[..2],
            WeekdayFormat::Long => name,
        }
    })
}

/// Month part of a heading format.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MonthToken {
    /// `M`: `1` through `12`.
    Numeric,
    /// `MM`: `01` through `12`.
    Padded,
    /// `MMM`: `Jan` through `Dec`.
    Short,
    /// `MMMM`: `January` through `December`.
    Long,
}

/// Separator between the month and year parts of a heading format.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Separator {
    /// `-`
    Dash,
    /// `/`
    Slash,
    /// ` | `
    Pipe,
    /// A single space.
    Space,
}

impl Separator {
    /// Returns the separator text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dash => "-",
            Self::Slash => "/",
            Self::Pipe => " | ",
            Self::Space => " ",
        }
    }
}

/// Year part of a heading format.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum YearToken {
    /// `YY`: the year's digits after the first two (`2024` becomes `24`).
    TwoDigit,
    /// `YYYY`: the full year.
    FourDigit,
}

/// A month-year heading format such as `MMMM YYYY` or `MM/YY`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HeadingFormat {
    /// Month rendering.
    pub month: MonthToken,
    /// Text between month and year.
    pub separator: Separator,
    /// Year rendering.
    pub year: YearToken,
}

impl HeadingFormat {
    /// Creates a heading format from its parts.
    #[must_use]
    pub const fn new(month: MonthToken, separator: Separator, year: YearToken) -> Self {
        Self {
            month,
            separator,
            year,
        }
    }

    /// Formats the heading for `month`.
    #[must_use]
    pub fn format(&self, month: YearMonth) -> String {
        let month_part = match self.month {
            MonthToken::Numeric => (month.month() + 1).to_string(),
            MonthToken::Padded => format!("{:02}", month.month() + 1),
            MonthToken::Short => month_name(month.month(), true).to_string(),
            MonthToken::Long => month_name(month.month(), false).to_string(),
        };
        let year_text = month.year().to_string();
        let year_part = match self.year {
            YearToken::TwoDigit => year_text.get(2..).unwrap_or_default(),
            YearToken::FourDigit => year_text.as_str(),
        };
        format!("{month_part}{}{year_part}", self.separator.as_str())
    }
}

impl Default for HeadingFormat {
    fn default() -> Self {
        Self::new(MonthToken::Long, Separator::Space, YearToken::FourDigit)
    }
}

/// Formats the heading for `month` with `format`.
#[must_use]
pub fn format_month_year(month: YearMonth, format: &HeadingFormat) -> String {
    format.format(month)
}

impl FromStr for HeadingFormat {
    type Err = HeadingFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let month_len = s.bytes().take_while(|&b| b == b'M').count();
        let year_len = s.bytes().rev().take_while(|&b| b == b'Y').count();
        if month_len + year_len > s.len() {
            return Err(HeadingFormatError);
        }

        let month = match month_len {
            1 => MonthToken::Numeric,
            2 => MonthToken::Padded,
            3 => MonthToken::Short,
            4 => MonthToken::Long,
            _ => return Err(HeadingFormatError),
        };
        let year = match year_len {
            2 => YearToken::TwoDigit,
            4 => YearToken::FourDigit,
            _ => return Err(HeadingFormatError),
        };
        let separator = match &s[month_len..s.len() - year_len] {
            "-" => Separator::Dash,
            "/" => Separator::Slash,
            " | " => Separator::Pipe,
            " " => Separator::Space,
            _ => return Err(HeadingFormatError),
        };

        Ok(Self::new(month, separator, year))
    }
}

impl fmt::Display for HeadingFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = match self.month {
            MonthToken::Numeric => "M",
            MonthToken::Padded => "MM",
            MonthToken::Short => "MMM",
            MonthToken::Long => "MMMM",
        };
        let year = match self.year {
            YearToken::TwoDigit => "YY",
            YearToken::FourDigit => "YYYY",
        };
        write!(f, "{month}{}{year}", self.separator.as_str())
    }
}

/// Error returned when a heading format string is not recognized.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HeadingFormatError;

impl fmt::Display for HeadingFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(
            "heading format must be M|MM|MMM|MMMM, one of \"-\", \"/\", \" | \", \" \", then YY|YYYY",
        )
    }
}

impl core::error::Error for HeadingFormatError {}
