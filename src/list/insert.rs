// This file is part of perf-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::PerfList};

// Core imports
use core::ptr;

impl<T> PerfList<T> {
    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// - Returns [`Error::OutOfRange`] if `index > len`; nothing changes and
    ///   `value` is dropped.
    /// - `index == len` is equivalent to [`add`](Self::add).
    ///
    /// Grows the buffer first if it is full. Fires `Added { item, len }`,
    /// then `Changed`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        let len = self.len;
        if index > len {
            return Err(Error::out_of_range(index, len));
        }
        self.reserve_one();

        // SAFETY: `index <= len < capacity` after `reserve_one`.
        // Shift right: [index..len) -> [index+1..len+1), overlap-safe.
        unsafe {
            let p = self.buf.ptr().add(index);
            ptr::copy(p, p.add(1), len - index);
            ptr::write(p, value);
        }

        self.len = len + 1;
        self.notify_added(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{list::PerfList, Error};
    use proptest::prelude::*;

    #[test]
    fn test_insert_front_middle_end() {
        let mut list = PerfList::from([10, 20, 30]);
        list.insert(1, 15).unwrap();
        assert_eq!(list.as_slice(), &[10, 15, 20, 30]);
        list.insert(0, 5).unwrap();
        assert_eq!(list.as_slice(), &[5, 10, 15, 20, 30]);
        list.insert(5, 35).unwrap();
        assert_eq!(list.as_slice(), &[5, 10, 15, 20, 30, 35]);
    }

    #[test]
    fn test_insert_into_empty() {
        let mut list = PerfList::new();
        list.insert(0, 'a').unwrap();
        assert_eq!(list.as_slice(), &['a']);
        assert_eq!(list.capacity(), 4);
    }

    #[test]
    fn test_insert_err_is_noop() {
        let mut list = PerfList::from([10, 20]);
        let cap = list.capacity();
        assert!(matches!(
            list.insert(3, 99),
            Err(Error::OutOfRange { index: 3, len: 2 })
        ));
        assert_eq!(list.as_slice(), &[10, 20]);
        assert_eq!(list.capacity(), cap);
    }

    proptest! {
        #[test]
        fn insert_then_get_and_tail_shifts(
            values in proptest::collection::vec(any::<u16>(), 0..64),
            pick in any::<prop::sample::Index>(),
            v in any::<u16>(),
        ) {
            let index = pick.index(values.len() + 1);
            let mut list: PerfList<u16> = values.iter().copied().collect();
            list.insert(index, v).unwrap();

            prop_assert_eq!(list.len(), values.len() + 1);
            prop_assert_eq!(list[index], v);
            prop_assert_eq!(&list[..index], &values[..index]);
            prop_assert_eq!(&list[index + 1..], &values[index..]);
        }
    }
}
