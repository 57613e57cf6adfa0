// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard focus movement over the valid-day sequence.
//!
//! ## Usage
//! 1) Map an input event to a [`Navigation`].
//! 2) Call [`navigate`] with the focused day and the current [`Viewport`].
//! 3) Apply the [`NavigationOutcome`]: move focus right away, page the
//!    viewport, or do nothing.
//!
//! When paging is needed the final focus target depends on days that only
//! exist in the *next* viewport. [`follow_up_resolution`] turns the
//! [`PageFollowUp`] into a [`FocusResolution`] at paging time, and
//! [`FocusResolution::resolve`] picks the concrete day once the new viewport
//! is in place.
//!
//! ```
//! use almanac_calendar::{DateKey, YearMonth};
//! use almanac_picker::focus::{Navigation, NavigationOutcome, navigate};
//! use almanac_picker::{MoveFocusBehavior, PickerConfig, Viewport};
//! use chrono::NaiveDate;
//!
//! let config = PickerConfig::new();
//! let viewport = Viewport::build(YearMonth::new(2024, 0), &config, None);
//! let focused = DateKey::new(NaiveDate::from_ymd_opt(2024, 1, 30).unwrap());
//!
//! let outcome = navigate(Navigation::NextWeek, focused, &viewport, MoveFocusBehavior::Change);
//! assert!(matches!(outcome, NavigationOutcome::Page { .. }));
//! ```

use almanac_calendar::{DateBounds, DateKey, YearMonth};

use crate::config::MoveFocusBehavior;
use crate::viewport::{ValidDays, Viewport};

/// How far the month-jump search strays from the focused day-of-month.
const MONTH_PROBE_LIMIT: i64 = 27;

/// A paging direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards earlier months.
    Backward,
    /// Towards later months.
    Forward,
}

impl Direction {
    /// Returns `-1` or `1`.
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }

    /// Returns `steps` signed for this direction.
    #[must_use]
    pub const fn steps(self, steps: isize) -> isize {
        match self {
            Self::Backward => -steps,
            Self::Forward => steps,
        }
    }

    /// Returns the direction that moves from `from` to `to`, if they differ.
    #[must_use]
    pub fn between(from: YearMonth, to: YearMonth) -> Option<Self> {
        match from.cmp(&to) {
            core::cmp::Ordering::Less => Some(Self::Forward),
            core::cmp::Ordering::Greater => Some(Self::Backward),
            core::cmp::Ordering::Equal => None,
        }
    }
}

/// A keyboard navigation intent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Navigation {
    /// One valid day back.
    PrevDay,
    /// One valid day forward.
    NextDay,
    /// Seven valid days back.
    PrevWeek,
    /// Seven valid days forward.
    NextWeek,
    /// Same day-of-month in the previous calendar month.
    PrevMonth,
    /// Same day-of-month in the next calendar month.
    NextMonth,
}

/// A requested focus target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// A specific day, applied immediately.
    Day(DateKey),
    /// The first valid day of the viewport, resolved after the view updates.
    First,
    /// The last valid day of the viewport, resolved after the view updates.
    Last,
}

/// A focus target that is picked against whichever viewport is current when it runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FocusResolution {
    /// The first valid day.
    First,
    /// The last valid day.
    Last,
    /// The last valid day of the first viewport month.
    LastInFirstMonth,
    /// A specific day, if it is valid.
    Day(DateKey),
}

impl FocusResolution {
    /// Picks the concrete day in `valid`, or `None` if there is nothing to focus.
    #[must_use]
    pub fn resolve(self, valid: &ValidDays) -> Option<DateKey> {
        match self {
            Self::First => valid.first(),
            Self::Last => valid.last(),
            Self::LastInFirstMonth => valid.in_month(0).last().copied(),
            Self::Day(key) => valid.contains(key).then_some(key),
        }
    }
}

/// Focus work to do once a paged viewport is in place.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PageFollowUp {
    /// Leave focus alone.
    #[default]
    None,
    /// Focus the first valid day.
    First,
    /// Focus the last valid day.
    Last,
    /// Focus the day seven days away in `Direction`.
    SameWeekday(Direction),
    /// Focus the same day-of-month in the adjacent month in `Direction`.
    SameDayOfMonth(Direction),
}

/// What a [`Navigation`] does to the picker.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavigationOutcome {
    /// Move focus to this day now.
    Focus(DateKey),
    /// Page the viewport by one month group, then run the follow-up.
    Page {
        /// Paging direction.
        direction: Direction,
        /// Focus work for after the page.
        follow_up: PageFollowUp,
    },
    /// Nothing to do.
    Stay,
}

/// Resolves a keyboard navigation against the current viewport.
#[must_use]
pub fn navigate(
    nav: Navigation,
    focused: DateKey,
    viewport: &Viewport,
    behavior: MoveFocusBehavior,
) -> NavigationOutcome {
    let valid = viewport.valid_days();
    match nav {
        Navigation::PrevDay => step_day(valid, focused, Direction::Backward, behavior),
        Navigation::NextDay => step_day(valid, focused, Direction::Forward, behavior),
        Navigation::PrevWeek => step_week(valid, focused, Direction::Backward, behavior),
        Navigation::NextWeek => step_week(valid, focused, Direction::Forward, behavior),
        Navigation::PrevMonth => jump_month(viewport, focused, Direction::Backward, behavior),
        Navigation::NextMonth => jump_month(viewport, focused, Direction::Forward, behavior),
    }
}

fn step_day(
    valid: &ValidDays,
    focused: DateKey,
    direction: Direction,
    behavior: MoveFocusBehavior,
) -> NavigationOutcome {
    if let Some(key) = valid.step(focused, direction.steps(1)) {
        return NavigationOutcome::Focus(key);
    }
    match behavior {
        MoveFocusBehavior::None => NavigationOutcome::Stay,
        MoveFocusBehavior::Loop => {
            let wrapped = match direction {
                Direction::Backward => valid.last(),
                Direction::Forward => valid.first(),
            };
            wrapped.map_or(NavigationOutcome::Stay, NavigationOutcome::Focus)
        }
        MoveFocusBehavior::Change => NavigationOutcome::Page {
            direction,
            follow_up: match direction {
                Direction::Backward => PageFollowUp::Last,
                Direction::Forward => PageFollowUp::First,
            },
        },
    }
}

fn step_week(
    valid: &ValidDays,
    focused: DateKey,
    direction: Direction,
    behavior: MoveFocusBehavior,
) -> NavigationOutcome {
    if let Some(key) = valid.step(focused, direction.steps(7)) {
        return NavigationOutcome::Focus(key);
    }
    match behavior {
        MoveFocusBehavior::Change => NavigationOutcome::Page {
            direction,
            follow_up: PageFollowUp::SameWeekday(direction),
        },
        MoveFocusBehavior::Loop | MoveFocusBehavior::None => NavigationOutcome::Stay,
    }
}

fn jump_month(
    viewport: &Viewport,
    focused: DateKey,
    direction: Direction,
    behavior: MoveFocusBehavior,
) -> NavigationOutcome {
    let valid = viewport.valid_days();
    let adjacent = valid
        .month_of(focused)
        .and_then(|index| match direction {
            Direction::Backward => index.checked_sub(1),
            Direction::Forward => Some(index + 1),
        })
        .filter(|index| *index < viewport.months().len());

    let Some(adjacent) = adjacent else {
        return match behavior {
            MoveFocusBehavior::Change => NavigationOutcome::Page {
                direction,
                follow_up: PageFollowUp::SameDayOfMonth(direction),
            },
            MoveFocusBehavior::Loop | MoveFocusBehavior::None => NavigationOutcome::Stay,
        };
    };

    let month = viewport.months()[adjacent].month;
    if let Some(key) = nearest_valid_day(valid, month, focused.day()) {
        return NavigationOutcome::Focus(key);
    }
    let fallback = match direction {
        Direction::Backward => valid.first(),
        Direction::Forward => valid.last(),
    };
    fallback.map_or(NavigationOutcome::Stay, NavigationOutcome::Focus)
}

/// Searches `month` for the valid day closest to `day`, earlier days winning ties.
fn nearest_valid_day(valid: &ValidDays, month: YearMonth, day: u32) -> Option<DateKey> {
    let day = i64::from(day);
    let last = i64::from(month.days());
    (0..=MONTH_PROBE_LIMIT)
        .flat_map(|distance| [day - distance, day + distance])
        .filter(|candidate| (1..=last).contains(candidate))
        .filter_map(|candidate| DateKey::from_parts(month, u32::try_from(candidate).ok()?))
        .find(|key| valid.contains(*key))
}

/// Computes where focus should land after paging to the viewport spanning
/// `first_month..=last_month`.
///
/// Targets are computed from the focus at paging time. A target that falls on
/// a day excluded by `bounds` falls back to the viewport edge in the paging
/// direction's opposite sense: the last valid day when moving forward, the
/// first when moving backward.
#[must_use]
pub fn follow_up_resolution(
    follow_up: PageFollowUp,
    focused: DateKey,
    first_month: YearMonth,
    last_month: YearMonth,
    bounds: &DateBounds,
) -> Option<FocusResolution> {
    let edge = |direction: Direction| match direction {
        Direction::Backward => FocusResolution::First,
        Direction::Forward => FocusResolution::Last,
    };
    match follow_up {
        PageFollowUp::None => None,
        PageFollowUp::First => Some(FocusResolution::First),
        PageFollowUp::Last => Some(FocusResolution::Last),
        PageFollowUp::SameWeekday(direction) => {
            let target = focused.add_days(7 * i64::from(direction.sign()));
            Some(match target {
                Some(key) if !bounds.excludes(key.date()) => FocusResolution::Day(key),
                _ => edge(direction),
            })
        }
        PageFollowUp::SameDayOfMonth(direction) => {
            let month = focused.year_month().offset(direction.sign());
            let expected = match direction {
                Direction::Backward => last_month,
                Direction::Forward => first_month,
            };
            let target = DateKey::from_parts(month, focused.day()).filter(|_| month == expected);
            Some(match (target, direction) {
                (None, Direction::Forward) => FocusResolution::LastInFirstMonth,
                (None, Direction::Backward) => FocusResolution::Last,
                (Some(key), _) if bounds.excludes(key.date()) => edge(direction),
                (Some(key), _) => FocusResolution::Day(key),
            })
        }
    }
}
