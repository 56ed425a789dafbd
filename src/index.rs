// This file is part of perf-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`PerfList`](crate::PerfList).
//!
//! This module provides `Index` and `IndexMut` impls that mirror slice behavior:
//! - panics on out-of-bounds;
//! - supports all standard range forms, including inclusive ranges;
//! - views are restricted to the live prefix `[0..len)`.
//!
//! Writes through `IndexMut` are not observed; use
//! [`PerfList::set`](crate::PerfList::set) for a notifying, checked write.

// Crate imports
use crate::list::PerfList;

// Core imports
use core::ops::{
    Index, IndexMut, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

impl<T> Index<usize> for PerfList<T> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.as_slice()[i]
    }
}
impl<T> IndexMut<usize> for PerfList<T> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[i]
    }
}

macro_rules! impl_range_index {
    ($($range:ty),* $(,)?) => {$(
        impl<T> Index<$range> for PerfList<T> {
            type Output = [T];
            fn index(&self, r: $range) -> &Self::Output {
                &self.as_slice()[r]
            }
        }
        impl<T> IndexMut<$range> for PerfList<T> {
            fn index_mut(&mut self, r: $range) -> &mut Self::Output {
                &mut self.as_mut_slice()[r]
            }
        }
    )*};
}

impl_range_index!(
    Range<usize>,
    RangeFrom<usize>,
    RangeTo<usize>,
    RangeToInclusive<usize>,
    RangeInclusive<usize>,
    RangeFull,
);
