// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Work that must wait until the view has shown a new viewport.
//!
//! Scheduling under an id that is already pending replaces the pending item in
//! place: it keeps its position in the queue but carries the newer
//! payload. Items under different ids all survive, in first-scheduled order.
//! [`DeferredQueue::take`] hands everything over exactly once and leaves the
//! queue empty. There is no way to cancel an item other than superseding it.

use alloc::vec::Vec;

/// Identifies a coalescing slot in a [`DeferredQueue`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeferredId(pub u32);

/// An ordered queue of deferred items, at most one per [`DeferredId`].
#[derive(Clone, Debug)]
pub struct DeferredQueue<T> {
    entries: Vec<(DeferredId, T)>,
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DeferredQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of pending items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Schedules `item` under `id`, replacing any item already pending under `id`.
    pub fn schedule(&mut self, id: DeferredId, item: T) {
        match self.entries.iter_mut().find(|(pending, _)| *pending == id) {
            Some(slot) => slot.1 = item,
            None => self.entries.push((id, item)),
        }
    }

    /// Returns the item pending under `id`, if any.
    #[must_use]
    pub fn pending(&self, id: DeferredId) -> Option<&T> {
        self.entries
            .iter()
            .find(|(pending, _)| *pending == id)
            .map(|(_, item)| item)
    }

    /// Removes and returns every pending item in scheduling order.
    pub fn take(&mut self) -> Vec<(DeferredId, T)> {
        core::mem::take(&mut self.entries)
    }
}
