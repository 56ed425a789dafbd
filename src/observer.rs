// This file is part of perf-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Change notification for [`PerfList`](crate::PerfList).
//!
//! Observers are plain callbacks attached to one list instance. After every
//! committed structural change the list fires the specific event (`Added` or
//! `Removed`) followed by `Changed`, synchronously and in registration order.
//!
//! A callback only ever sees shared references to event data and cannot
//! reach the list mutably while it runs, so an observer can't re-enter the
//! list it observes.

// Crate imports
use crate::list::PerfList;

// External imports - alloc
use alloc::{boxed::Box, vec::Vec};

/// A structural change reported to observers.
#[derive(Debug, PartialEq)]
pub enum ListEvent<'a, T> {
    /// An element was inserted; `len` is the length right after it.
    Added {
        /// The inserted element, in place.
        item: &'a T,
        /// The list length after this insertion.
        len: usize,
    },
    /// An element was removed from `index`.
    Removed {
        /// The removed element, before it is handed back to the caller.
        item: &'a T,
        /// The position it was removed from.
        index: usize,
    },
    /// The contents changed. Always fired last, once per mutating call.
    Changed,
}

/// Handle returned by [`PerfList::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Callback<T> = Box<dyn FnMut(&ListEvent<'_, T>)>;

/// The registry attached to each list.
pub(crate) struct Observers<T> {
    next_id: u64,
    slots: Vec<(SubscriptionId, Callback<T>)>,
}

impl<T> Observers<T> {
    pub(crate) const fn new() -> Self {
        Self {
            next_id: 0,
            slots: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn emit(&mut self, event: &ListEvent<'_, T>) {
        for (_, callback) in &mut self.slots {
            callback(event);
        }
    }
}

impl<T> PerfList<T> {
    /// Registers `callback` and returns a handle for [`unsubscribe`](Self::unsubscribe).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perf_list::{ListEvent, PerfList};
    /// use std::{cell::RefCell, rc::Rc};
    ///
    /// let log = Rc::new(RefCell::new(Vec::new()));
    /// let sink = log.clone();
    ///
    /// let mut list = PerfList::new();
    /// list.subscribe(move |event: &ListEvent<'_, i32>| {
    ///     sink.borrow_mut().push(match event {
    ///         ListEvent::Added { item, len } => format!("added {item} -> {len}"),
    ///         ListEvent::Removed { item, index } => format!("removed {item} @ {index}"),
    ///         ListEvent::Changed => "changed".to_string(),
    ///     });
    /// });
    ///
    /// list.add(9);
    /// assert_eq!(*log.borrow(), ["added 9 -> 1", "changed"]);
    /// ```
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&ListEvent<'_, T>) + 'static,
    {
        let id = SubscriptionId(self.observers.next_id);
        self.observers.next_id += 1;
        self.observers.slots.push((id, Box::new(callback)));
        id
    }

    /// Detaches the observer registered under `id`.
    ///
    /// Returns `false` if it was already detached.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.slots.len();
        self.observers.slots.retain(|(slot, _)| *slot != id);
        self.observers.slots.len() != before
    }

    /// Returns the number of attached observers.
    #[inline]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Fires `Added` for the element now at `index`, then `Changed`.
    pub(crate) fn notify_added(&mut self, index: usize) {
        if self.observers.is_empty() {
            return;
        }
        debug_assert!(index < self.len);
        // SAFETY: `index < len`, so the slot is initialized. Callbacks can't
        // reach the buffer, so the reference stays valid while they run.
        let item = unsafe { &*self.buf.ptr().add(index) };
        let len = self.len;
        self.observers.emit(&ListEvent::Added { item, len });
        self.observers.emit(&ListEvent::Changed);
    }

    /// Fires `Added` for the `count` elements now at `[index, index + count)`
    /// as if inserted one by one into a list of `prior_len`, then `Changed`.
    pub(crate) fn notify_added_run(&mut self, index: usize, count: usize, prior_len: usize) {
        if self.observers.is_empty() {
            return;
        }
        debug_assert!(index + count <= self.len);
        for k in 0..count {
            // SAFETY: `index + k < len`, see `notify_added`.
            let item = unsafe { &*self.buf.ptr().add(index + k) };
            self.observers.emit(&ListEvent::Added {
                item,
                len: prior_len + k + 1,
            });
        }
        self.observers.emit(&ListEvent::Changed);
    }

    /// Fires `Removed`, then `Changed`.
    pub(crate) fn notify_removed(&mut self, item: &T, index: usize) {
        if self.observers.is_empty() {
            return;
        }
        self.observers.emit(&ListEvent::Removed { item, index });
        self.observers.emit(&ListEvent::Changed);
    }

    /// Fires `Changed` alone.
    pub(crate) fn notify_changed(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        self.observers.emit(&ListEvent::Changed);
    }
}
