// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end transitions through `PickerStore::dispatch`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use almanac_calendar::{DateKey, YearMonth};
use almanac_picker::{
    Direction, FocusTarget, Intent, MoveFocusBehavior, Navigation, PageFollowUp, PickerConfig,
    PickerStore, Selection, SelectionMode,
};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn key(y: i32, m: u32, d: u32) -> DateKey {
    DateKey::new(date(y, m, d))
}

fn store_at(config: PickerConfig, focus: NaiveDate) -> PickerStore {
    PickerStore::new(config.with_initial_focus(focus), date(2024, 1, 15)).unwrap()
}

fn counter(store: &PickerStore) -> (Rc<Cell<u32>>, almanac_picker::Subscription) {
    let calls = Rc::new(Cell::new(0));
    let c = Rc::clone(&calls);
    let sub = store.subscribe(move || c.set(c.get() + 1));
    (calls, sub)
}

#[test]
fn boundary_guard_blocks_paging_while_bound_is_visible() {
    let today = date(2024, 1, 15);
    let config = PickerConfig::new().with_min_date(today).with_max_date(today);
    let mut store = PickerStore::new(config, today).unwrap();
    let (calls, _sub) = counter(&store);
    let before = store.snapshot().clone();

    for intent in [
        Intent::PageForward,
        Intent::PageBackward,
        Intent::ShiftMonth {
            delta: 3,
            follow_up: PageFollowUp::First,
        },
        Intent::ShiftMonth {
            delta: -12,
            follow_up: PageFollowUp::None,
        },
        Intent::SetMonth(YearMonth::new(2025, 0)),
    ] {
        let outcome = store.dispatch(intent);
        assert!(!outcome.changed, "{intent:?} should be dropped");
        assert!(!outcome.deferred, "{intent:?} should not defer");
    }
    assert_eq!(*store.snapshot(), before);
    assert_eq!(calls.get(), 0);
    assert!(!store.can_page(Direction::Forward));
    assert!(!store.can_page(Direction::Backward));
}

#[test]
fn guard_only_applies_in_the_bound_direction() {
    let config = PickerConfig::new().with_max_date(date(2024, 1, 20));
    let mut store = store_at(config, date(2024, 1, 10));

    assert!(!store.can_page(Direction::Forward));
    assert!(store.can_page(Direction::Backward));
    assert!(store.dispatch(Intent::PageBackward).changed);
    assert_eq!(store.snapshot().month, YearMonth::new(2023, 11));
}

#[test]
fn guard_ignores_bounds_shown_only_as_padding() {
    // February 2024 (Monday start) shows 29..31 January as padding, but
    // January itself is not visible, so its enabled days must stay reachable.
    let config = PickerConfig::new().with_min_date(date(2024, 1, 30));
    let mut store = store_at(config, date(2024, 2, 1));
    assert!(store.can_page(Direction::Backward));

    let outcome = store.dispatch(Intent::Navigate(Navigation::PrevDay));
    assert!(outcome.changed && outcome.deferred);
    assert_eq!(store.snapshot().month, YearMonth::new(2024, 0));
    store.flush_deferred();
    assert_eq!(store.snapshot().focused, key(2024, 1, 31));

    store.dispatch(Intent::Pick(key(2024, 1, 30)));
    assert_eq!(store.selection(), Selection::Single(Some(date(2024, 1, 30))));

    // Now January is visible and paging further back is blocked.
    assert!(!store.can_page(Direction::Backward));
    assert!(!store.dispatch(Intent::PageBackward).changed);
}

#[test]
fn loop_wraps_without_paging() {
    let config = PickerConfig::new().with_move_focus_behavior(MoveFocusBehavior::Loop);
    let mut store = store_at(config, date(2024, 1, 31));

    let outcome = store.dispatch(Intent::Navigate(Navigation::NextDay));
    assert!(outcome.changed);
    assert!(!outcome.deferred);
    assert_eq!(store.snapshot().focused, key(2024, 1, 1));
    assert_eq!(store.snapshot().month, YearMonth::new(2024, 0));

    store.dispatch(Intent::Navigate(Navigation::PrevDay));
    assert_eq!(store.snapshot().focused, key(2024, 1, 31));
}

#[test]
fn none_policy_stays_put() {
    let config = PickerConfig::new().with_move_focus_behavior(MoveFocusBehavior::None);
    let mut store = store_at(config, date(2024, 1, 1));
    let (calls, _sub) = counter(&store);

    assert!(!store.dispatch(Intent::Navigate(Navigation::PrevDay)).changed);
    assert!(!store.dispatch(Intent::Navigate(Navigation::PrevWeek)).changed);
    assert!(!store.dispatch(Intent::Navigate(Navigation::PrevMonth)).changed);
    assert_eq!(calls.get(), 0);
}

#[test]
fn change_policy_pages_by_whole_viewport() {
    let config = PickerConfig::new().with_month_count(2);
    let mut store = store_at(config, date(2024, 1, 31));
    store.dispatch(Intent::SetFocus(FocusTarget::Day(key(2024, 2, 29))));

    let outcome = store.dispatch(Intent::Navigate(Navigation::NextDay));
    assert!(outcome.changed && outcome.deferred);
    assert_eq!(store.snapshot().month, YearMonth::new(2024, 2));
    // Focus is only corrected once the host flushes.
    assert_eq!(store.snapshot().focused, key(2024, 2, 29));

    assert!(store.flush_deferred());
    assert_eq!(store.snapshot().focused, key(2024, 3, 1));

    store.dispatch(Intent::Navigate(Navigation::PrevDay));
    store.flush_deferred();
    assert_eq!(store.snapshot().month, YearMonth::new(2024, 0));
    assert_eq!(store.snapshot().focused, key(2024, 2, 29));
}

#[test]
fn week_paging_lands_on_same_weekday() {
    let mut store = store_at(PickerConfig::new(), date(2024, 1, 29));

    store.dispatch(Intent::Navigate(Navigation::NextWeek));
    assert!(store.flush_deferred());
    assert_eq!(store.snapshot().month, YearMonth::new(2024, 1));
    assert_eq!(store.snapshot().focused, key(2024, 2, 5));

    store.dispatch(Intent::Navigate(Navigation::PrevWeek));
    assert!(store.flush_deferred());
    assert_eq!(store.snapshot().month, YearMonth::new(2024, 0));
    assert_eq!(store.snapshot().focused, key(2024, 1, 29));
}

#[test]
fn week_paging_falls_back_when_target_is_out_of_bounds() {
    // February 2024 renders through 3 March, so a 4 March bound is off screen.
    let config = PickerConfig::new().with_max_date(date(2024, 3, 4));
    let mut store = store_at(config, date(2024, 2, 27));

    assert!(store.dispatch(Intent::Navigate(Navigation::NextWeek)).changed);
    store.flush_deferred();
    // 5 March is past the bound; the last valid day is taken instead.
    assert_eq!(store.snapshot().month, YearMonth::new(2024, 2));
    assert_eq!(store.snapshot().focused, key(2024, 3, 4));
}

#[test]
fn month_jump_pages_and_clamps_to_short_month() {
    let mut store = store_at(PickerConfig::new(), date(2024, 1, 31));

    let outcome = store.dispatch(Intent::Navigate(Navigation::NextMonth));
    assert!(outcome.deferred);
    store.flush_deferred();
    assert_eq!(store.snapshot().month, YearMonth::new(2024, 1));
    assert_eq!(store.snapshot().focused, key(2024, 2, 29));

    store.dispatch(Intent::Navigate(Navigation::PrevMonth));
    store.flush_deferred();
    assert_eq!(store.snapshot().month, YearMonth::new(2024, 0));
    assert_eq!(store.snapshot().focused, key(2024, 1, 29));
}

#[test]
fn month_jump_within_viewport_is_immediate() {
    let config = PickerConfig::new().with_month_count(3);
    let mut store = store_at(config, date(2024, 1, 31));

    let outcome = store.dispatch(Intent::Navigate(Navigation::NextMonth));
    assert!(!outcome.deferred);
    assert_eq!(store.snapshot().focused, key(2024, 2, 29));

    store.dispatch(Intent::Navigate(Navigation::NextMonth));
    assert_eq!(store.snapshot().focused, key(2024, 3, 29));
}

#[test]
fn deferred_focus_coalesces_to_latest() {
    let mut store = store_at(PickerConfig::new(), date(2024, 1, 15));
    let (calls, _sub) = counter(&store);

    store.dispatch(Intent::SetFocus(FocusTarget::First));
    store.dispatch(Intent::SetFocus(FocusTarget::Last));
    assert_eq!(calls.get(), 0);

    assert!(store.flush_deferred());
    assert_eq!(store.snapshot().focused, key(2024, 1, 31));
    assert_eq!(calls.get(), 1);
    assert!(!store.flush_deferred());
}

#[test]
fn paging_replaces_an_earlier_pending_focus() {
    let mut store = store_at(PickerConfig::new(), date(2024, 1, 15));

    store.dispatch(Intent::SetFocus(FocusTarget::First));
    store.dispatch(Intent::ShiftMonth {
        delta: 1,
        follow_up: PageFollowUp::Last,
    });
    store.flush_deferred();
    assert_eq!(store.snapshot().focused, key(2024, 2, 29));
}

#[test]
fn pointer_intents_ignore_out_of_bounds_days() {
    let config = PickerConfig::new().with_min_date(date(2024, 1, 10));
    let mut store = store_at(config, date(2024, 1, 15));
    let (calls, _sub) = counter(&store);

    assert!(!store.dispatch(Intent::Hover(key(2024, 1, 5))).changed);
    assert!(!store.dispatch(Intent::Pick(key(2024, 1, 5))).changed);
    assert!(store.snapshot().selected.is_empty());
    assert_eq!(calls.get(), 0);

    assert!(store.dispatch(Intent::Hover(key(2024, 1, 12))).changed);
    assert_eq!(store.snapshot().focused, key(2024, 1, 12));
}

#[test]
fn pointer_intents_ignore_padding_days() {
    // 1 February is in bounds but only shows as padding in January's grid.
    let mut store = store_at(PickerConfig::new(), date(2024, 1, 15));
    let (calls, _sub) = counter(&store);

    assert!(!store.dispatch(Intent::Hover(key(2024, 2, 1))).changed);
    assert!(!store.dispatch(Intent::Pick(key(2024, 2, 1))).changed);
    assert!(store.snapshot().selected.is_empty());
    assert_eq!(store.snapshot().focused, key(2024, 1, 15));
    assert_eq!(calls.get(), 0);
}

#[test]
fn extreme_month_shifts_do_not_overflow() {
    let mut store = store_at(PickerConfig::new(), date(2024, 1, 15));

    assert!(
        store
            .dispatch(Intent::ShiftMonth {
                delta: i32::MAX,
                follow_up: PageFollowUp::None,
            })
            .changed
    );
    assert!(store.snapshot().visible_year() > 2024);

    assert!(store.dispatch(Intent::SetMonth(YearMonth::new(2024, 0))).changed);
    assert_eq!(store.snapshot().month, YearMonth::new(2024, 0));

    assert!(
        store
            .dispatch(Intent::ShiftMonth {
                delta: i32::MIN,
                follow_up: PageFollowUp::None,
            })
            .changed
    );
    assert!(store.snapshot().visible_year() < 2024);
}

#[test]
fn pick_selects_focuses_and_reports() {
    let mut store = store_at(PickerConfig::new(), date(2024, 1, 15));
    let picked = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&picked);
    store.set_on_selected_change(move |day| sink.borrow_mut().push(day));

    store.dispatch(Intent::Pick(key(2024, 1, 20)));
    assert_eq!(store.snapshot().focused, key(2024, 1, 20));
    assert_eq!(store.selection(), Selection::Single(Some(date(2024, 1, 20))));

    store.dispatch(Intent::Submit);
    assert_eq!(store.selection(), Selection::Single(None));
    assert_eq!(store.snapshot().focused, key(2024, 1, 20));
    assert_eq!(*picked.borrow(), vec![date(2024, 1, 20), date(2024, 1, 20)]);
}

#[test]
fn multiple_picks_toggle_membership() {
    let config = PickerConfig::new().with_mode(SelectionMode::Multiple);
    let mut store = store_at(config, date(2024, 1, 15));

    for day in [5, 10, 5] {
        store.dispatch(Intent::Pick(key(2024, 1, day)));
    }
    assert_eq!(store.snapshot().selected.keys(), &[key(2024, 1, 10)]);
}

#[test]
fn sync_replaces_selection_without_moving_focus() {
    let config = PickerConfig::new().with_mode(SelectionMode::Range);
    let mut store = store_at(config, date(2024, 1, 15));
    let (calls, _sub) = counter(&store);

    let range = Selection::Range(Some(date(2024, 1, 3)), Some(date(2024, 1, 8)));
    assert!(store.sync_selected(&range));
    assert!(!store.sync_selected(&range));
    assert_eq!(calls.get(), 1);
    assert_eq!(store.selection(), range);
    assert_eq!(store.snapshot().focused, key(2024, 1, 15));

    assert!(store.sync_selected(&Selection::Range(None, None)));
    assert!(store.snapshot().selected.is_empty());
}

#[test]
fn listeners_run_once_per_dispatch_in_order() {
    let mut store = store_at(PickerConfig::new(), date(2024, 1, 15));
    let order = Rc::new(RefCell::new(Vec::new()));

    let first = Rc::clone(&order);
    let _a = store.subscribe(move || first.borrow_mut().push("a"));
    let second = Rc::clone(&order);
    let b = store.subscribe(move || second.borrow_mut().push("b"));

    store.dispatch(Intent::Navigate(Navigation::NextDay));
    assert_eq!(*order.borrow(), vec!["a", "b"]);

    b.unsubscribe();
    store.dispatch(Intent::Navigate(Navigation::NextDay));
    assert_eq!(*order.borrow(), vec!["a", "b", "a"]);
}

#[test]
fn controls_and_headings_follow_config() {
    let config = PickerConfig::new()
        .with_month_count(2)
        .with_last_month_control(true)
        .with_heading_format("MMMM YYYY".parse().unwrap())
        .with_weekdays(almanac_calendar::WeekdayFormat::Short);
    let store = store_at(config, date(2024, 12, 24));

    let months = store.viewport().months();
    assert_eq!(months[0].heading.as_deref(), Some("December 2024"));
    assert_eq!(months[1].heading.as_deref(), Some("January 2025"));
    assert!(!months[0].show_controls);
    assert!(months[1].show_controls);
    assert_eq!(store.weekday_labels().map(|labels| labels[0]), Some("Mo"));
}
