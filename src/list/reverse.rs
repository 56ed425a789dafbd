// This file is part of perf-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::list::{fast, PerfList};

impl<T> PerfList<T> {
    /// Reverses the order of the elements in place.
    ///
    /// Swaps symmetric pairs across the midpoint, `O(len)`. Fires `Changed`
    /// once at the end, not per swap.
    pub fn reverse(&mut self) {
        let len = self.len;
        if fast::enabled::<T>() {
            let p = self.buf.ptr();
            for i in 0..len / 2 {
                // SAFETY: `i < len / 2` so `i` and `len - 1 - i` are distinct
                // initialized slots.
                unsafe { core::ptr::swap_nonoverlapping(p.add(i), p.add(len - 1 - i), 1) };
            }
        } else {
            self.as_mut_slice().reverse();
        }
        self.notify_changed();
    }
}

#[cfg(test)]
mod tests {
    use crate::list::PerfList;

    #[test]
    fn test_reverse_even_odd_and_trivial() {
        let mut even = PerfList::from([1, 2, 3, 4]);
        even.reverse();
        assert_eq!(even.as_slice(), &[4, 3, 2, 1]);

        let mut odd = PerfList::from([1, 2, 3]);
        odd.reverse();
        assert_eq!(odd.as_slice(), &[3, 2, 1]);

        let mut one = PerfList::from([9]);
        one.reverse();
        assert_eq!(one.as_slice(), &[9]);

        let mut empty: PerfList<u8> = PerfList::new();
        empty.reverse();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_reverse_owned_values() {
        let mut list: PerfList<String> = ["a", "b", "c"].into_iter().map(String::from).collect();
        list.reverse();
        assert_eq!(list.as_slice(), &["c", "b", "a"]);
    }

    #[test]
    fn test_reverse_twice_is_identity() {
        let mut list: PerfList<u32> = (0..37).collect();
        list.reverse();
        list.reverse();
        assert!(list.iter().copied().eq(0..37));
    }
}
