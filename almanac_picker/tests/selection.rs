// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection rules across every day of a year.

use almanac_calendar::DateKey;
use almanac_picker::{SelectedDates, SelectionMode, is_in_range_preview, is_selected, toggle};
use chrono::NaiveDate;

fn days_of_2024() -> impl Iterator<Item = DateKey> {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .iter_days()
        .take_while(|d| *d < NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
        .map(DateKey::new)
}

fn key(y: i32, m: u32, d: u32) -> DateKey {
    DateKey::new(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

#[test]
fn single_pick_twice_clears_and_different_pick_replaces() {
    let a = key(2024, 3, 1);
    let b = key(2024, 3, 2);
    let once = toggle(&SelectedDates::new(), SelectionMode::Single, a);
    assert!(toggle(&once, SelectionMode::Single, a).is_empty());

    let replaced = toggle(&once, SelectionMode::Single, b);
    assert_eq!(replaced.keys(), &[b]);
}

#[test]
fn range_endpoints_are_stored_ascending() {
    let pairs = [
        (key(2024, 5, 20), key(2024, 5, 2)),
        (key(2024, 5, 2), key(2024, 5, 20)),
        (key(2024, 12, 31), key(2023, 1, 1)),
    ];
    for (first, second) in pairs {
        let start = toggle(&SelectedDates::new(), SelectionMode::Range, first);
        let range = toggle(&start, SelectionMode::Range, second);
        let keys = range.keys();
        assert_eq!(keys.len(), 2);
        assert!(keys[0] < keys[1], "{first} then {second} stored out of order");
    }
}

#[test]
fn range_membership_is_inclusive() {
    let start = key(2024, 2, 27);
    let end = key(2024, 3, 3);
    // Stored end first: membership does not depend on insertion order.
    let range = SelectedDates::from_iter([end, start]);

    for day in days_of_2024() {
        let inside = start <= day && day <= end;
        assert_eq!(
            is_selected(&range, SelectionMode::Range, day),
            inside,
            "{day}"
        );
    }
}

#[test]
fn full_range_restarts_on_next_pick() {
    let range = SelectedDates::from_iter([key(2024, 1, 1), key(2024, 1, 9)]);
    let restarted = toggle(&range, SelectionMode::Range, key(2024, 1, 5));
    assert_eq!(restarted.keys(), &[key(2024, 1, 5)]);
}

#[test]
fn multiple_mode_keeps_insertion_order() {
    let mut selected = SelectedDates::new();
    for day in [9, 3, 6, 3] {
        selected = toggle(&selected, SelectionMode::Multiple, key(2024, 1, day));
    }
    assert_eq!(selected.keys(), &[key(2024, 1, 9), key(2024, 1, 6)]);
}

#[test]
fn preview_spans_either_direction_from_start() {
    let start = key(2024, 6, 15);
    let selected = SelectedDates::from_iter([start]);
    let focus = key(2024, 6, 10);

    let preview: Vec<DateKey> = days_of_2024()
        .filter(|day| is_in_range_preview(&selected, SelectionMode::Range, focus, *day))
        .collect();
    assert_eq!(preview.first(), Some(&focus));
    assert_eq!(preview.last(), Some(&start));
    assert_eq!(preview.len(), 6);

    // Other modes never preview.
    assert!(!is_in_range_preview(
        &selected,
        SelectionMode::Multiple,
        focus,
        key(2024, 6, 12)
    ));
}
