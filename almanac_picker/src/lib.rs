// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=almanac_picker --heading-base-level=0

//! Almanac Picker: the focus and selection state machine behind a date picker.
//!
//! This crate owns everything a date picker has to *remember*: which day holds
//! keyboard focus, which month the viewport starts at, and what is selected.
//! It does not render anything. A view layer renders from
//! [`PickerStore::viewport`], forwards input as [`Intent`]s, and re-renders the
//! cells whose [`Query`] output changed.
//!
//! - [`PickerConfig`]: options fixed for the lifetime of a picker, shared
//!   through an `Rc` handle.
//! - [`SelectedDates`] / [`Selection`]: one ordered key set for all three
//!   [`SelectionMode`]s, plus a typed value per mode for hosts.
//! - [`Viewport`] / [`ValidDays`]: the visible months and the enabled days
//!   in display order. Keyboard navigation walks this sequence.
//! - [`focus`]: how arrows move focus and when the viewport must page.
//! - [`PickerStore`]: transitions, boundary guards, listeners, and the
//!   deferred focus correction that runs after the view shows a new viewport.
//! - [`keys`] (`keyboard` feature): `ui-events` key bindings.
//!
//! ## Minimal example
//!
//! ```rust
//! use almanac_calendar::DateKey;
//! use almanac_picker::{Intent, Navigation, PickerConfig, PickerStore, SelectionMode};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
//! let config = PickerConfig::new().with_mode(SelectionMode::Range);
//! let mut store = PickerStore::new(config, today).unwrap();
//!
//! // Stepping past the last day pages to February and leaves a focus
//! // correction for after the view has re-rendered.
//! let outcome = store.dispatch(Intent::Navigate(Navigation::NextDay));
//! assert!(outcome.changed && outcome.deferred);
//! assert!(store.flush_deferred());
//! assert_eq!(store.snapshot().focused.to_string(), "01/02/2024");
//!
//! // Build a range with two picks, in either order.
//! let feb = |d: u32| DateKey::new(NaiveDate::from_ymd_opt(2024, 2, d).unwrap());
//! store.dispatch(Intent::Pick(feb(9)));
//! store.dispatch(Intent::Pick(feb(3)));
//! assert_eq!(store.snapshot().selected.keys(), &[feb(3), feb(9)]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod deferred;
pub mod focus;
#[cfg(feature = "keyboard")]
pub mod keys;
mod listeners;
mod query;
mod selection;
mod store;
mod viewport;

pub use config::{ConfigError, MoveFocusBehavior, PickerConfig, SelectionMode};
pub use deferred::{DeferredId, DeferredQueue};
pub use focus::{Direction, FocusTarget, Navigation, PageFollowUp};
pub use listeners::{Listeners, Subscription};
pub use query::{DayState, Query, day_state};
pub use selection::{SelectedDates, Selection, is_in_range_preview, is_selected, toggle};
pub use store::{DispatchOutcome, Intent, PickerState, PickerStore};
pub use viewport::{MonthView, ValidDays, Viewport};
