// This file is part of perf-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::PerfList};

impl<T> PerfList<T> {
    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`. Not observed.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Checked read, returning [`Error::OutOfRange`] when `i >= len`.
    #[inline]
    pub fn try_get(&self, i: usize) -> Result<&T, Error> {
        let len = self.len;
        self.get(i).ok_or(Error::out_of_range(i, len))
    }

    /// Replaces the element at `i` with `value` and fires `Changed`.
    ///
    /// Returns [`Error::OutOfRange`] when `i >= len`; the list is unchanged
    /// and `value` is dropped.
    pub fn set(&mut self, i: usize, value: T) -> Result<(), Error> {
        let len = self.len;
        let slot = self.get_mut(i).ok_or(Error::out_of_range(i, len))?;
        *slot = value;
        self.notify_changed();
        Ok(())
    }
}
