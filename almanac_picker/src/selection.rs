// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection model shared by the single, multiple, and range modes.
//!
//! All three modes store their selection as one [`SelectedDates`]: an
//! insertion-ordered set of [`DateKey`]s. The mode decides how picks change it
//! and how membership is read back:
//!
//! | mode       | entries | a day is selected when                          |
//! |------------|---------|--------------------------------------------------|
//! | `Single`   | 0..=1   | it is the entry                                  |
//! | `Multiple` | any     | it is one of the entries                         |
//! | `Range`    | 0..=2   | it is an endpoint, or lies between the two       |
//!
//! Hosts that prefer a typed value per mode convert through [`Selection`].

use alloc::vec::Vec;

use almanac_calendar::DateKey;
use chrono::NaiveDate;
use smallvec::SmallVec;

use crate::config::SelectionMode;

/// Insertion-ordered set of selected days.
///
/// In range mode the first entry is the range start and the second the end.
/// Uniqueness is enforced by equality, like a map keyed by [`DateKey`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectedDates {
    keys: SmallVec<[DateKey; 2]>,
}

impl SelectedDates {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            keys: SmallVec::new(),
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the number of selected days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns the selected keys in insertion order.
    #[must_use]
    pub fn keys(&self) -> &[DateKey] {
        &self.keys
    }

    /// Returns an iterator over the selected keys in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, DateKey> {
        self.keys.iter()
    }

    /// Returns an iterator over the selected dates in insertion order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.keys.iter().map(|key| key.date())
    }

    /// Returns the first-inserted key.
    #[must_use]
    pub fn first(&self) -> Option<DateKey> {
        self.keys.first().copied()
    }

    /// Returns `true` if `key` is one of the entries.
    #[must_use]
    pub fn contains(&self, key: DateKey) -> bool {
        self.keys.contains(&key)
    }

    /// Appends `key` if absent. Returns `true` if it was added.
    pub fn insert(&mut self, key: DateKey) -> bool {
        if self.contains(key) {
            return false;
        }
        self.keys.push(key);
        true
    }

    /// Removes `key` if present. Returns `true` if it was removed.
    pub fn remove(&mut self, key: DateKey) -> bool {
        match self.keys.iter().position(|k| *k == key) {
            Some(idx) => {
                self.keys.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Returns the two range endpoints in chronological order, if there are exactly two.
    #[must_use]
    pub fn range_endpoints(&self) -> Option<(DateKey, DateKey)> {
        match self.keys.as_slice() {
            &[a, b] => Some(if a <= b { (a, b) } else { (b, a) }),
            _ => None,
        }
    }

    /// Converts to the typed value for `mode`.
    ///
    /// Entries that do not fit the mode (a second entry in single mode, a third
    /// in range mode) are dropped.
    #[must_use]
    pub fn to_selection(&self, mode: SelectionMode) -> Selection {
        let mut dates = self.dates();
        match mode {
            SelectionMode::Single => Selection::Single(dates.next()),
            SelectionMode::Multiple => Selection::Multiple(dates.collect()),
            SelectionMode::Range => Selection::Range(dates.next(), dates.next()),
        }
    }
}

impl FromIterator<DateKey> for SelectedDates {
    /// Collects keys, keeping the first occurrence of duplicates.
    fn from_iter<I: IntoIterator<Item = DateKey>>(iter: I) -> Self {
        let mut selected = Self::new();
        for key in iter {
            selected.insert(key);
        }
        selected
    }
}

impl<'a> IntoIterator for &'a SelectedDates {
    type Item = &'a DateKey;
    type IntoIter = core::slice::Iter<'a, DateKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

/// A selection value shaped by its mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// The selected day, if any.
    Single(Option<NaiveDate>),
    /// Every selected day, in selection order.
    Multiple(Vec<NaiveDate>),
    /// Range start and end, if chosen.
    Range(Option<NaiveDate>, Option<NaiveDate>),
}

impl Selection {
    /// Returns the empty selection for `mode`.
    #[must_use]
    pub fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Self::Single(None),
            SelectionMode::Multiple => Self::Multiple(Vec::new()),
            SelectionMode::Range => Self::Range(None, None),
        }
    }

    /// Returns the mode this value is shaped for.
    #[must_use]
    pub fn mode(&self) -> SelectionMode {
        match self {
            Self::Single(_) => SelectionMode::Single,
            Self::Multiple(_) => SelectionMode::Multiple,
            Self::Range(..) => SelectionMode::Range,
        }
    }

    /// Converts to the shared keyed representation, preserving order.
    #[must_use]
    pub fn to_selected(&self) -> SelectedDates {
        match self {
            Self::Single(date) => date.iter().copied().map(DateKey::new).collect(),
            Self::Multiple(dates) => dates.iter().copied().map(DateKey::new).collect(),
            Self::Range(start, end) => start
                .iter()
                .chain(end.iter())
                .copied()
                .map(DateKey::new)
                .collect(),
        }
    }
}

impl From<&Selection> for SelectedDates {
    fn from(selection: &Selection) -> Self {
        selection.to_selected()
    }
}

/// Returns the selection that results from picking `key`.
///
/// - `Single`: picking the selected day clears the selection; any other day replaces it.
/// - `Multiple`: picking a selected day removes it; any other day is appended.
/// - `Range`: with nothing selected the day becomes the start; with a start, picking
///   the same day clears it and any other day completes the range, stored in
///   chronological order; with a full range, the day starts a new one.
#[must_use]
pub fn toggle(selected: &SelectedDates, mode: SelectionMode, key: DateKey) -> SelectedDates {
    match mode {
        SelectionMode::Single => {
            if selected.first() == Some(key) {
                SelectedDates::new()
            } else {
                SelectedDates::from_iter([key])
            }
        }
        SelectionMode::Multiple => {
            let mut next = selected.clone();
            if !next.remove(key) {
                next.insert(key);
            }
            next
        }
        SelectionMode::Range => match selected.keys() {
            [] => SelectedDates::from_iter([key]),
            &[start] if start == key => SelectedDates::new(),
            &[start] => {
                let (a, b) = if start <= key { (start, key) } else { (key, start) };
                SelectedDates::from_iter([a, b])
            }
            _ => SelectedDates::from_iter([key]),
        },
    }
}

/// Returns `true` if `key` reads as selected under `mode`.
///
/// In range mode with two entries, every day between the endpoints (inclusive)
/// is selected regardless of which endpoint was picked first.
#[must_use]
pub fn is_selected(selected: &SelectedDates, mode: SelectionMode, key: DateKey) -> bool {
    match mode {
        SelectionMode::Single => selected.first() == Some(key),
        SelectionMode::Multiple => selected.contains(key),
        SelectionMode::Range => match selected.len() {
            1 => selected.contains(key),
            2 => selected
                .range_endpoints()
                .is_some_and(|(start, end)| start <= key && key <= end),
            _ => false,
        },
    }
}

/// Returns `true` if `key` lies in the range being previewed between the
/// chosen start and the focused day.
///
/// Only range mode with exactly one entry previews; the preview is empty while
/// focus rests on the start itself.
#[must_use]
pub fn is_in_range_preview(
    selected: &SelectedDates,
    mode: SelectionMode,
    focused: DateKey,
    key: DateKey,
) -> bool {
    if mode != SelectionMode::Range || selected.len() != 1 {
        return false;
    }
    let Some(start) = selected.first() else {
        return false;
    };
    if focused == start {
        return false;
    }
    let (low, high) = if focused < start {
        (focused, start)
    } else {
        (start, focused)
    };
    low <= key && key <= high
}
