// Copyright 2025 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change listeners.
//!
//! [`Listeners::notify`] calls every registered callback synchronously, in
//! registration order. It iterates a snapshot of the list, so a callback may
//! subscribe or unsubscribe (itself or others) while being notified; such
//! changes take effect from the next notification.

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

type Callback = Rc<dyn Fn()>;

#[derive(Default)]
struct ListenerList {
    next_id: u64,
    entries: Vec<(u64, Callback)>,
}

/// A set of zero-argument callbacks.
#[derive(Default)]
pub struct Listeners {
    inner: Rc<RefCell<ListenerList>>,
}

impl Listeners {
    /// Creates an empty listener set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` and returns the handle that removes it.
    #[must_use = "dropping the subscription leaves no way to unsubscribe"]
    pub fn subscribe(&self, callback: impl Fn() + 'static) -> Subscription {
        let mut list = self.inner.borrow_mut();
        let id = list.next_id;
        list.next_id += 1;
        list.entries.push((id, Rc::new(callback)));
        Subscription {
            id,
            list: Rc::downgrade(&self.inner),
        }
    }

    /// Returns the number of registered callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Returns `true` if no callback is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls every registered callback in registration order.
    pub fn notify(&self) {
        let snapshot: Vec<Callback> = self
            .inner
            .borrow()
            .entries
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in snapshot {
            callback();
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

/// Handle returned by [`Listeners::subscribe`].
pub struct Subscription {
    id: u64,
    list: Weak<RefCell<ListenerList>>,
}

impl Subscription {
    /// Removes the callback. Later calls, and calls after the listener set is gone, do nothing.
    pub fn unsubscribe(&self) {
        if let Some(list) = self.list.upgrade() {
            list.borrow_mut().entries.retain(|(id, _)| *id != self.id);
        }
    }

    /// Returns `true` while the callback is still registered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.list
            .upgrade()
            .is_some_and(|list| list.borrow().entries.iter().any(|(id, _)| *id == self.id))
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish_non_exhaustive()
    }
}
