// This file is part of perf-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::list::PerfList;

// Core imports
use core::cmp::Ordering;

impl<T> PerfList<T> {
    /// Sorts `[0, len)` by the element type's natural order and fires `Changed`.
    ///
    /// The sort is not stable; equal elements may be reordered.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.as_mut_slice().sort_unstable();
        self.notify_changed();
    }

    /// Sorts `[0, len)` with a custom comparator and fires `Changed`.
    ///
    /// For floats, `list.sort_by(f64::total_cmp)` gives a total order.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.as_mut_slice().sort_unstable_by(compare);
        self.notify_changed();
    }

    /// Sorts `[0, len)` by a key extracted from each element and fires `Changed`.
    pub fn sort_by_key<K, F>(&mut self, key: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.as_mut_slice().sort_unstable_by_key(key);
        self.notify_changed();
    }
}
