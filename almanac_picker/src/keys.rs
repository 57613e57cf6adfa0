// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard bindings from `ui-events` to picker intents.
//!
//! | key                 | intent                   |
//! |---------------------|--------------------------|
//! | `ArrowLeft`         | previous day             |
//! | `ArrowRight`        | next day                 |
//! | `ArrowUp`           | previous week            |
//! | `ArrowDown`         | next week                |
//! | Meta + `ArrowLeft`  | same day, previous month |
//! | Meta + `ArrowRight` | same day, next month     |
//! | `Enter`, `Space`    | submit                   |
//!
//! Key releases produce nothing.

use ui_events::keyboard::{Key, KeyState, KeyboardEvent, Modifiers, NamedKey};

use crate::focus::Navigation;
use crate::store::Intent;

/// Maps a key press to an intent, if the key is bound.
#[must_use]
pub fn intent_for_key(key: &Key, modifiers: Modifiers, state: KeyState) -> Option<Intent> {
    if !state.is_down() {
        return None;
    }
    let jump = modifiers.contains(Modifiers::META);
    let nav = match key {
        Key::Named(NamedKey::ArrowLeft) if jump => Navigation::PrevMonth,
        Key::Named(NamedKey::ArrowRight) if jump => Navigation::NextMonth,
        Key::Named(NamedKey::ArrowLeft) => Navigation::PrevDay,
        Key::Named(NamedKey::ArrowRight) => Navigation::NextDay,
        Key::Named(NamedKey::ArrowUp) => Navigation::PrevWeek,
        Key::Named(NamedKey::ArrowDown) => Navigation::NextWeek,
        Key::Named(NamedKey::Enter) => return Some(Intent::Submit),
        Key::Character(text) if text == " " => return Some(Intent::Submit),
        _ => return None,
    };
    Some(Intent::Navigate(nav))
}

/// Maps a keyboard event to an intent, if its key is bound.
#[must_use]
pub fn intent_for_event(event: &KeyboardEvent) -> Option<Intent> {
    intent_for_key(&event.key, event.modifiers, event.state)
}
