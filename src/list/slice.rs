// This file is part of perf-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::list::PerfList;

impl<T> PerfList<T> {
    /// Returns the live prefix `[0, len)` as a shared slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: By invariant, all elements in `buf[..self.len]` are initialized,
        // and the pointer is valid (or dangling for an empty/zero-sized view).
        unsafe { core::slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    /// Returns the live prefix `[0, len)` as a mutable slice.
    ///
    /// Writes through this view are not reported to observers.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: By invariant, all elements in `buf[..self.len]` are initialized.
        // We have exclusive access via `&mut self`.
        unsafe { core::slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// Returns a raw pointer to the start of the buffer.
    ///
    /// Only the first `len` elements are initialized. The pointer is
    /// invalidated by any call that reallocates: growth, `remove_at`,
    /// `clear`. Holding it across such a call is the caller's responsibility.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.ptr()
    }

    /// Returns a mutable raw pointer to the start of the buffer.
    ///
    /// Same validity rules as [`as_ptr`](Self::as_ptr). Writing past `len`
    /// does not update `len`.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr()
    }
}
