// This file is part of perf-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::list::{fast, PerfList};

impl<T> PerfList<T> {
    /// Appends `value` at position `len`, growing the buffer if it is full.
    ///
    /// Amortized `O(1)`. Fires `Added { item, len }` with the new length,
    /// then `Changed`.
    ///
    /// # Panics
    ///
    /// Panics with "capacity overflow" if the grown buffer can't be sized.
    #[inline]
    pub fn add(&mut self, value: T) {
        self.reserve_one();
        let index = self.len;

        if fast::enabled::<T>() {
            // SAFETY: `reserve_one` guarantees `index < capacity`, so the
            // destination slot is in bounds and uninitialized.
            unsafe { self.buf.ptr().add(index).write(value) };
        } else {
            self.write_slot(index, value);
        }

        self.len = index + 1;
        self.notify_added(index);
    }

    /// Writes `value` into the uninitialized slot `index` (`len <= index < capacity`).
    #[inline]
    pub(crate) fn write_slot(&mut self, index: usize, value: T) {
        assert!(index < self.buf.capacity(), "slot {index} outside buffer");
        // SAFETY: bounds checked above; the slot is past `len` so nothing is
        // overwritten without being dropped.
        unsafe { core::ptr::write(self.buf.ptr().add(index), value) };
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::list::PerfList;
    use proptest::prelude::*;

    #[test]
    fn test_add_appends_in_order() {
        let mut list = PerfList::new();
        for i in 0..10 {
            list.add(i * 2);
        }
        assert_eq!(list.len(), 10);
        assert_eq!(list.as_slice(), &[0, 2, 4, 6, 8, 10, 12, 14, 16, 18]);
    }

    #[test]
    fn test_add_owned_values() {
        let mut list = PerfList::new();
        list.add(String::from("a"));
        list.add(String::from("b"));
        assert_eq!(list.as_slice(), &["a", "b"]);
    }

    proptest! {
        #[test]
        fn n_adds_give_len_n_in_order(values in proptest::collection::vec(any::<i64>(), 0..300)) {
            let mut list = PerfList::new();
            for v in &values {
                list.add(*v);
            }
            prop_assert_eq!(list.len(), values.len());
            for (i, v) in values.iter().enumerate() {
                prop_assert_eq!(list.get(i), Some(v));
            }
        }
    }
}
