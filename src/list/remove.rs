// This file is part of perf-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::PerfList};

// Core imports
use core::ptr;

impl<T> PerfList<T> {
    /// Removes and returns the element at `index`, shifting `(index, len)`
    /// one slot left.
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len`.
    ///
    /// After the shift the buffer is reallocated to an exact fit
    /// (`capacity() == len()`, or no allocation when the list becomes empty).
    /// This gives up amortization in exchange for a tight long-run footprint
    /// and is part of the observable contract.
    ///
    /// Fires `Removed { item, index }`, then `Changed`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, Error> {
        let len = self.len;
        if index >= len {
            return Err(Error::out_of_range(index, len));
        }

        // SAFETY: `index < len`, so the slot is initialized. Its value is
        // moved out, then [index+1..len) is shifted over it (overlap-safe)
        // and `len` shrinks so the stale last slot is never read again.
        let item = unsafe {
            let p = self.buf.ptr().add(index);
            let item = ptr::read(p);
            ptr::copy(p.add(1), p, len - index - 1);
            item
        };
        self.len = len - 1;

        self.shrink_exact();
        self.notify_removed(&item, index);
        Ok(item)
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns `true` if a match was found and removed; `false` (and no
    /// change, no event) otherwise.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Drops every element, releases the buffer to the empty sentinel and
    /// fires `Changed`.
    pub fn clear(&mut self) {
        let len = self.len;
        self.len = 0;
        // SAFETY: `[0, len)` was initialized; `len` is zeroed first so a
        // panicking destructor leaves the list empty rather than double-dropping.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr(), len));
        }
        self.release();
        self.notify_changed();
    }
}
