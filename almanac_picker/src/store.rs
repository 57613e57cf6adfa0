// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The picker store: state, transitions and notification.
//!
//! ## Two-phase updates
//!
//! [`PickerStore::dispatch`] applies an [`Intent`] synchronously. Most intents
//! finish right there. Intents that page the viewport, and
//! [`FocusTarget::First`] / [`FocusTarget::Last`], also leave a focus
//! correction pending because the target is only meaningful once the view
//! shows the new months. The host's loop is:
//!
//! 1. `dispatch(intent)`; listeners are notified if state changed.
//! 2. Re-render from [`PickerStore::viewport`].
//! 3. If [`DispatchOutcome::deferred`] was set, call
//!    [`PickerStore::flush_deferred`] exactly once.
//!
//! Pending corrections share one slot, so only the latest one runs.
//!
//! ## Guards
//!
//! Paging forward while `max_date`'s month is visible, or backward while
//! `min_date`'s month is visible, is dropped without notification. So are
//! pointer intents on days that are not valid in the current viewport, and
//! submits on days outside the date bounds.
//!
//! Listeners run while the store is mutably borrowed. They should record that
//! a refresh is due rather than read the store re-entrantly.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::fmt;

use almanac_calendar::{DateKey, YearMonth, weekday_labels};
use chrono::NaiveDate;
use log::{debug, trace};

use crate::config::{ConfigError, PickerConfig, SelectionMode};
use crate::deferred::{DeferredId, DeferredQueue};
use crate::focus::{
    Direction, FocusResolution, FocusTarget, Navigation, NavigationOutcome, PageFollowUp,
    follow_up_resolution, navigate,
};
use crate::listeners::{Listeners, Subscription};
use crate::selection::{SelectedDates, Selection, toggle};
use crate::viewport::Viewport;

/// The single pending-focus slot.
const FOCUS: DeferredId = DeferredId(1);

/// The mutable picker record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickerState {
    /// The day eligible to receive keyboard focus.
    pub focused: DateKey,
    /// The first month of the viewport.
    pub month: YearMonth,
    /// The selection, in insertion order.
    pub selected: SelectedDates,
}

impl PickerState {
    /// Returns the zero-based month index of the first viewport month.
    #[must_use]
    pub fn visible_month(&self) -> u32 {
        self.month.month()
    }

    /// Returns the year of the first viewport month.
    #[must_use]
    pub fn visible_year(&self) -> i32 {
        self.month.year()
    }
}

/// A request to change picker state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Move focus; `First`/`Last` resolve on the next flush.
    SetFocus(FocusTarget),
    /// Pointer entered a day.
    Hover(DateKey),
    /// Pointer picked a day.
    Pick(DateKey),
    /// Keyboard navigation.
    Navigate(Navigation),
    /// Select the focused day.
    Submit,
    /// Move the viewport by `delta` months, then run `follow_up`.
    ShiftMonth {
        /// Signed month offset.
        delta: i32,
        /// Focus work for after the page.
        follow_up: PageFollowUp,
    },
    /// The "previous month" control.
    PageBackward,
    /// The "next month" control.
    PageForward,
    /// Show this month first.
    SetMonth(YearMonth),
}

/// The result of [`PickerStore::dispatch`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// State changed and listeners were notified.
    pub changed: bool,
    /// A focus correction awaits [`PickerStore::flush_deferred`].
    pub deferred: bool,
}

type SelectedCallback = Box<dyn FnMut(NaiveDate)>;

/// Owns picker state and applies transitions to it.
pub struct PickerStore {
    config: Rc<PickerConfig>,
    today: NaiveDate,
    state: PickerState,
    viewport: Viewport,
    listeners: Listeners,
    deferred: DeferredQueue<FocusResolution>,
    on_selected_change: Option<SelectedCallback>,
}

impl fmt::Debug for PickerStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerStore")
            .field("config", &self.config)
            .field("today", &self.today)
            .field("state", &self.state)
            .field("listeners", &self.listeners)
            .field("deferred", &self.deferred)
            .finish_non_exhaustive()
    }
}

impl PickerStore {
    /// Creates a store for `config`, with `today` as the host's current date.
    ///
    /// Focus starts on `config.initial_focus`, or `today`, and the viewport
    /// starts at that day's month.
    pub fn new(config: PickerConfig, today: NaiveDate) -> Result<Self, ConfigError> {
        config.validate()?;
        let focused = DateKey::new(config.initial_focus.unwrap_or(today));
        let month = focused.year_month();
        let viewport = Viewport::build(month, &config, Some(today));
        Ok(Self {
            config: Rc::new(config),
            today,
            state: PickerState {
                focused,
                month,
                selected: SelectedDates::new(),
            },
            viewport,
            listeners: Listeners::new(),
            deferred: DeferredQueue::new(),
            on_selected_change: None,
        })
    }

    /// Creates a store using the local calendar date as today.
    #[cfg(feature = "std")]
    pub fn new_local(config: PickerConfig) -> Result<Self, ConfigError> {
        Self::new(config, almanac_calendar::today_local())
    }

    /// Starts with `selection` selected.
    #[must_use]
    pub fn with_selection(mut self, selection: &Selection) -> Self {
        self.state.selected = selection.to_selected();
        self
    }

    /// Returns the shared configuration handle.
    #[must_use]
    pub fn config(&self) -> &Rc<PickerConfig> {
        &self.config
    }

    /// Returns the date treated as today.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Returns the current state.
    #[must_use]
    pub fn snapshot(&self) -> &PickerState {
        &self.state
    }

    /// Runs `selector` over the current state.
    pub fn select<T>(&self, selector: impl FnOnce(&PickerState) -> T) -> T {
        selector(&self.state)
    }

    /// Returns the visible months and their valid days.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Returns the selection shaped for the configured mode.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.state.selected.to_selection(self.config.mode)
    }

    /// Returns the weekday column labels, if the configuration shows them.
    #[must_use]
    pub fn weekday_labels(&self) -> Option<[&'static str; 7]> {
        self.config
            .weekdays
            .map(|format| weekday_labels(self.config.start_of_week, format))
    }

    /// Registers a change listener.
    #[must_use = "dropping the subscription leaves no way to unsubscribe"]
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> Subscription {
        self.listeners.subscribe(listener)
    }

    /// Sets the callback run with the day chosen by [`Intent::Pick`] or [`Intent::Submit`].
    pub fn set_on_selected_change(&mut self, callback: impl FnMut(NaiveDate) + 'static) {
        self.on_selected_change = Some(Box::new(callback));
    }

    /// Returns `true` if a focus correction is waiting for [`flush_deferred`](Self::flush_deferred).
    #[must_use]
    pub fn has_deferred(&self) -> bool {
        !self.deferred.is_empty()
    }

    /// Returns `true` if paging in `direction` would not be dropped by the boundary guard.
    #[must_use]
    pub fn can_page(&self, direction: Direction) -> bool {
        let bound = match direction {
            Direction::Backward => self.config.min_date,
            Direction::Forward => self.config.max_date,
        };
        bound.is_none_or(|date| !self.viewport.shows_month_of(date))
    }

    /// Applies `intent`, notifying listeners once if state changed.
    pub fn dispatch(&mut self, intent: Intent) -> DispatchOutcome {
        let changed = self.apply(intent);
        if changed {
            self.listeners.notify();
        }
        DispatchOutcome {
            changed,
            deferred: self.has_deferred(),
        }
    }

    /// Runs the pending focus correction against the current viewport.
    ///
    /// Returns `true`, after notifying listeners, if focus moved.
    pub fn flush_deferred(&mut self) -> bool {
        let pending = self.deferred.take();
        if pending.is_empty() {
            return false;
        }
        let mut changed = false;
        for (_, resolution) in pending {
            match resolution.resolve(self.viewport.valid_days()) {
                Some(key) => changed |= self.set_focus(key),
                None => trace!("deferred focus {resolution:?} found no valid day"),
            }
        }
        debug!("flushed deferred focus, now on {}", self.state.focused);
        if changed {
            self.listeners.notify();
        }
        changed
    }

    /// Replaces the selection with `selection`. Focus is untouched.
    ///
    /// Returns `true`, after notifying listeners, if the selection changed.
    pub fn sync_selected(&mut self, selection: &Selection) -> bool {
        let selected = selection.to_selected();
        if selected == self.state.selected {
            return false;
        }
        self.state.selected = selected;
        self.listeners.notify();
        true
    }

    /// Switches the selection mode and clears the selection.
    ///
    /// The configuration handle is replaced; views holding the previous
    /// handle should re-read [`config`](Self::config).
    pub fn reset_mode(&mut self, mode: SelectionMode) -> bool {
        if self.config.mode == mode {
            return false;
        }
        let mut config = PickerConfig::clone(&self.config);
        config.mode = mode;
        self.config = Rc::new(config);
        self.state.selected.clear();
        self.listeners.notify();
        true
    }

    fn apply(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::SetFocus(FocusTarget::Day(key)) => self.set_focus(key),
            Intent::SetFocus(FocusTarget::First) => {
                self.deferred.schedule(FOCUS, FocusResolution::First);
                false
            }
            Intent::SetFocus(FocusTarget::Last) => {
                self.deferred.schedule(FOCUS, FocusResolution::Last);
                false
            }
            Intent::Hover(key) => {
                if !self.is_pickable(key) {
                    trace!("ignored hover on disabled day {key}");
                    return false;
                }
                self.set_focus(key)
            }
            Intent::Pick(key) => {
                if !self.is_pickable(key) {
                    trace!("ignored pick on disabled day {key}");
                    return false;
                }
                let selected = self.pick(key);
                self.set_focus(key) | selected
            }
            Intent::Submit => {
                let key = self.state.focused;
                if self.is_excluded(key) {
                    trace!("ignored submit on out-of-bounds day {key}");
                    return false;
                }
                self.pick(key)
            }
            Intent::Navigate(nav) => self.navigate(nav),
            Intent::ShiftMonth { delta, follow_up } => self.shift_month(delta, follow_up),
            Intent::PageBackward => self.shift_month(-1, PageFollowUp::None),
            Intent::PageForward => self.shift_month(1, PageFollowUp::None),
            Intent::SetMonth(month) => {
                let delta = self.state.month.months_until(month);
                self.shift_month(delta, PageFollowUp::None)
            }
        }
    }

    fn navigate(&mut self, nav: Navigation) -> bool {
        let outcome = navigate(
            nav,
            self.state.focused,
            &self.viewport,
            self.config.move_focus_behavior,
        );
        match outcome {
            NavigationOutcome::Focus(key) => self.set_focus(key),
            NavigationOutcome::Page {
                direction,
                follow_up,
            } => {
                let delta = direction.sign() * self.config.month_span();
                self.shift_month(delta, follow_up)
            }
            NavigationOutcome::Stay => {
                trace!("{nav:?} from {} has no target", self.state.focused);
                false
            }
        }
    }

    fn shift_month(&mut self, delta: i32, follow_up: PageFollowUp) -> bool {
        let direction = match delta.signum() {
            1 => Direction::Forward,
            -1 => Direction::Backward,
            _ => return false,
        };
        if !self.can_page(direction) {
            trace!("paging {direction:?} blocked by a visible date bound");
            return false;
        }

        let focused = self.state.focused;
        self.state.month = self.state.month.offset(delta);
        self.viewport = Viewport::build(self.state.month, &self.config, Some(self.today));
        debug!(
            "paged viewport by {delta} to {}-{:02}",
            self.state.visible_year(),
            self.state.visible_month() + 1
        );

        let resolution = follow_up_resolution(
            follow_up,
            focused,
            self.viewport.first_month(),
            self.viewport.last_month(),
            &self.config.bounds(),
        );
        if let Some(resolution) = resolution {
            self.deferred.schedule(FOCUS, resolution);
        }
        true
    }

    /// Toggles `key` into the selection and reports it to the callback.
    fn pick(&mut self, key: DateKey) -> bool {
        let selected = toggle(&self.state.selected, self.config.mode, key);
        let changed = selected != self.state.selected;
        self.state.selected = selected;
        if let Some(callback) = self.on_selected_change.as_mut() {
            callback(key.date());
        }
        changed
    }

    fn set_focus(&mut self, key: DateKey) -> bool {
        if self.state.focused == key {
            return false;
        }
        self.state.focused = key;
        true
    }

    fn is_excluded(&self, key: DateKey) -> bool {
        self.config.bounds().excludes(key.date())
    }

    /// Padding and out-of-bounds cells are disabled, so only valid days qualify.
    fn is_pickable(&self, key: DateKey) -> bool {
        self.viewport.valid_days().contains(key)
    }
}
