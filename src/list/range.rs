// This file is part of perf-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use super::buffer::capacity_overflow;
use crate::{error::Error, list::PerfList};

// Core imports
use core::{mem, ptr};

/// Rolls back a partially appended tail if the source iterator panics.
///
/// Slots `[start, len)` are the items appended so far; on drop they are
/// dropped and `len` goes back to `start`.
struct TailGuard<'a, T> {
    list: &'a mut PerfList<T>,
    start: usize,
}

impl<T> Drop for TailGuard<'_, T> {
    fn drop(&mut self) {
        let appended = self.list.len - self.start;
        self.list.len = self.start;
        // SAFETY: `[start, start + appended)` was written by the append loop
        // and is now past `len`, so it is dropped exactly once here.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.list.buf.ptr().add(self.start),
                appended,
            ));
        }
    }
}

impl<T> PerfList<T> {
    /// Inserts every item of `values` starting at `index`, keeping their order.
    ///
    /// Semantics match inserting each item in turn at `index`, `index + 1`, …:
    /// the elements previously at `[index, len)` end up after the inserted
    /// run, unchanged in relative order.
    ///
    /// - Returns [`Error::OutOfRange`] if `index > len`, before `values` is
    ///   touched.
    /// - Returns [`Error::InvalidArgument`] if the iterator's lower size bound
    ///   can't be allocated; nothing changes in that case either.
    ///
    /// Fires one `Added` per inserted item (with the length sequential inserts
    /// would have produced), then a single `Changed`.
    pub fn insert_range<I>(&mut self, index: usize, values: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
    {
        let start = self.len;
        if index > start {
            return Err(Error::out_of_range(index, start));
        }

        let iter = values.into_iter();
        let (lower, _) = iter.size_hint();
        self.ensure_capacity(start.saturating_add(lower))?;

        // Append at the tail first, then rotate the run into place. A panic
        // from `iter` unwinds through the guard and leaves the list as it was.
        let mut guard = TailGuard { list: self, start };
        for item in iter {
            guard.list.reserve_one();
            let at = guard.list.len;
            guard.list.write_slot(at, item);
            guard.list.len = at + 1;
        }
        mem::forget(guard);

        let count = self.len - start;
        if count == 0 {
            return Ok(());
        }
        if index < start {
            self.as_mut_slice()[index..].rotate_right(count);
        }

        self.notify_added_run(index, count, start);
        Ok(())
    }

    /// Appends every item of `values`, keeping their order.
    ///
    /// Equivalent to `insert_range(len, values)`, which can't fail on bounds.
    ///
    /// # Panics
    ///
    /// Panics with "capacity overflow" if the grown buffer can't be sized.
    pub fn add_range<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        if let Err(err) = self.insert_range(self.len, values) {
            capacity_overflow(err);
        }
    }

    /// Appends clones of every element of `src`.
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T])
    where
        T: Clone,
    {
        self.add_range(src.iter().cloned());
    }
}

impl<T> Extend<T> for PerfList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_range(iter);
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for PerfList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.add_range(iter.into_iter().copied());
    }
}
