// This file is part of perf-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Linear search.
//!
//! `contains*` and `index_of*` are both answered by one scan per branch, so
//! for any range `contains_in(v, r)` is `true` exactly when
//! `index_of_in(v, r)` is `Some`. Positions are absolute, not relative to the
//! range start.

// Crate imports
use crate::{
    error::Error,
    list::{fast, PerfList},
};

// Core imports
use core::ops::RangeBounds;

impl<T: PartialEq> PerfList<T> {
    /// Returns `true` if any live element equals `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.scan_eq(value, 0, self.len).is_some()
    }

    /// Returns `true` if any element in `range` equals `value`.
    ///
    /// Returns [`Error::OutOfRange`] unless `start <= end <= len`.
    pub fn contains_in<R: RangeBounds<usize>>(&self, value: &T, range: R) -> Result<bool, Error> {
        Ok(self.index_of_in(value, range)?.is_some())
    }

    /// Returns the position of the first element equal to `value`.
    #[inline]
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.scan_eq(value, 0, self.len)
    }

    /// Returns the absolute position of the first element in `range` equal to
    /// `value`.
    ///
    /// Returns [`Error::OutOfRange`] unless `start <= end <= len`.
    pub fn index_of_in<R: RangeBounds<usize>>(
        &self,
        value: &T,
        range: R,
    ) -> Result<Option<usize>, Error> {
        let (start, end) = self.resolve_range(range)?;
        Ok(self.scan_eq(value, start, end))
    }

    /// Equality branch.
    fn scan_eq(&self, value: &T, start: usize, end: usize) -> Option<usize> {
        debug_assert!(start <= end && end <= self.len);
        if fast::enabled::<T>() {
            let p = self.buf.ptr();
            // SAFETY: `[start, end)` lies within the initialized prefix.
            (start..end).find(|&i| unsafe { &*p.add(i) } == value)
        } else {
            self.as_slice()[start..end]
                .iter()
                .position(|x| x == value)
                .map(|i| start + i)
        }
    }
}

/// Null-aware branch: an empty slot is found by its vacancy, without
/// comparing payloads (so `U` needs no `PartialEq`).
impl<U> PerfList<Option<U>> {
    /// Returns `true` if any live slot is `None`.
    #[inline]
    pub fn contains_vacant(&self) -> bool {
        self.scan_vacant(0, self.len).is_some()
    }

    /// Returns `true` if any slot in `range` is `None`.
    pub fn contains_vacant_in<R: RangeBounds<usize>>(&self, range: R) -> Result<bool, Error> {
        Ok(self.index_of_vacant_in(range)?.is_some())
    }

    /// Returns the position of the first `None` slot.
    #[inline]
    pub fn index_of_vacant(&self) -> Option<usize> {
        self.scan_vacant(0, self.len)
    }

    /// Returns the absolute position of the first `None` slot in `range`.
    pub fn index_of_vacant_in<R: RangeBounds<usize>>(
        &self,
        range: R,
    ) -> Result<Option<usize>, Error> {
        let (start, end) = self.resolve_range(range)?;
        Ok(self.scan_vacant(start, end))
    }

    fn scan_vacant(&self, start: usize, end: usize) -> Option<usize> {
        self.as_slice()[start..end]
            .iter()
            .position(Option::is_none)
            .map(|i| start + i)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{list::PerfList, Error};
    use proptest::prelude::*;

    #[test]
    fn test_contains_and_index_of_whole_list() {
        let list = PerfList::from([7, 8, 9, 8]);
        assert!(list.contains(&8));
        assert!(!list.contains(&10));
        assert_eq!(list.index_of(&8), Some(1));
        assert_eq!(list.index_of(&10), None);
    }

    #[test]
    fn test_ranged_search_reports_absolute_positions() {
        let list = PerfList::from([1, 2, 3, 1, 2, 3]);
        assert_eq!(list.index_of_in(&1, 1..).unwrap(), Some(3));
        assert_eq!(list.index_of_in(&3, 3..5).unwrap(), None);
        assert!(list.contains_in(&3, 3..=5).unwrap());
        assert!(!list.contains_in(&1, 1..3).unwrap());
        assert!(!list.contains_in(&1, 2..2).unwrap());
    }

    #[test]
    fn test_ranged_search_rejects_bad_ranges() {
        let list = PerfList::from([1, 2, 3]);
        assert!(matches!(
            list.index_of_in(&1, 0..4),
            Err(Error::OutOfRange { index: 4, len: 3 })
        ));
        assert!(list.contains_in(&1, 2..=3).is_err());
    }

    #[test]
    fn test_search_never_sees_slack() {
        let mut list = PerfList::with_capacity(8);
        list.add_range([0u8, 1]);
        assert!(!list.contains(&2));
        list.clear();
        assert!(!list.contains(&0));
        assert_eq!(list.index_of(&0), None);
    }

    #[test]
    fn test_vacant_branch_matches_none_without_payload_eq() {
        struct Opaque;
        let list = PerfList::from([Some(Opaque), None, Some(Opaque), None]);
        assert!(list.contains_vacant());
        assert_eq!(list.index_of_vacant(), Some(1));
        assert_eq!(list.index_of_vacant_in(2..).unwrap(), Some(3));
        assert!(!list.contains_vacant_in(2..3).unwrap());
        assert!(list.contains_vacant_in(..9).is_err());

        let full = PerfList::from([Some(1), Some(2)]);
        assert!(!full.contains_vacant());
    }

    #[test]
    fn test_equality_branch_on_options() {
        let list = PerfList::from([Some(1), None]);
        assert!(list.contains(&None));
        assert_eq!(list.index_of(&Some(1)), Some(0));
    }

    proptest! {
        #[test]
        fn contains_agrees_with_index_of(
            values in proptest::collection::vec(0u8..8, 0..40),
            probe in 0u8..8,
            a in any::<prop::sample::Index>(),
            b in any::<prop::sample::Index>(),
        ) {
            let list: PerfList<u8> = values.iter().copied().collect();
            prop_assert_eq!(list.contains(&probe), list.index_of(&probe).is_some());

            let (x, y) = (a.index(values.len() + 1), b.index(values.len() + 1));
            let (start, end) = (x.min(y), x.max(y));
            let found = list.index_of_in(&probe, start..end).unwrap();
            prop_assert_eq!(list.contains_in(&probe, start..end).unwrap(), found.is_some());
            if let Some(i) = found {
                prop_assert!(start <= i && i < end);
                prop_assert_eq!(list[i], probe);
            }
        }
    }
}
