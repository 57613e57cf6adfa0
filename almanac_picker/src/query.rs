// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selector-based reads for view bindings.
//!
//! The store notifies on every state change; it does not know which views
//! care. Each binding keeps a [`Query`] over the slice it renders and calls
//! [`Query::refresh`] when notified. Only bindings whose value changed need
//! to re-render.
//!
//! ```
//! use almanac_picker::{Intent, PickerConfig, PickerStore, Query};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! let mut store = PickerStore::new(PickerConfig::new(), today).unwrap();
//! let mut month = Query::new(store.snapshot(), |state| state.month);
//!
//! store.dispatch(Intent::PageForward);
//! assert!(month.refresh(store.snapshot()));
//! assert!(!month.refresh(store.snapshot()));
//! ```

use core::fmt;

use almanac_calendar::DayDescriptor;

use crate::config::PickerConfig;
use crate::selection::{is_in_range_preview, is_selected};
use crate::store::PickerState;

/// A cached selector output.
pub struct Query<T, F> {
    selector: F,
    value: T,
}

impl<T, F> Query<T, F>
where
    T: PartialEq,
    F: Fn(&PickerState) -> T,
{
    /// Runs `selector` once over `state` and caches the result.
    pub fn new(state: &PickerState, selector: F) -> Self {
        let value = selector(state);
        Self { selector, value }
    }

    /// Returns the cached value.
    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Re-runs the selector. Returns `true` if the value differs from the cached one.
    pub fn refresh(&mut self, state: &PickerState) -> bool {
        let value = (self.selector)(state);
        if value == self.value {
            return false;
        }
        self.value = value;
        true
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Query<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// Everything a day cell renders that depends on picker state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DayState {
    /// The day holds keyboard focus.
    pub focused: bool,
    /// The day is selected.
    pub selected: bool,
    /// The day lies in the range being previewed.
    pub in_range: bool,
    /// The day is today.
    pub today: bool,
    /// The day is a Saturday or Sunday.
    pub weekend: bool,
    /// The day cannot be focused or picked.
    pub disabled: bool,
}

/// Derives the [`DayState`] of `day`.
///
/// Disabled cells never report focus, selection or range preview, so a
/// selected day does not also light up where it appears as padding.
#[must_use]
pub fn day_state(state: &PickerState, config: &PickerConfig, day: &DayDescriptor) -> DayState {
    let enabled = !day.disabled;
    DayState {
        focused: enabled && state.focused == day.key,
        selected: enabled && is_selected(&state.selected, config.mode, day.key),
        in_range: enabled
            && is_in_range_preview(&state.selected, config.mode, state.focused, day.key),
        today: day.is_today,
        weekend: day.is_weekend,
        disabled: day.disabled,
    }
}
