// This file is part of perf-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use super::buffer::capacity_overflow;
use crate::{
    error::Error,
    list::{PerfList, RawBuf},
    observer::Observers,
};

impl<T> PerfList<T> {
    /// Constructs an empty list on the empty sentinel. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::dangling(),
            len: 0,
            observers: Observers::new(),
        }
    }

    /// Constructs an empty list with room for exactly `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics with "capacity overflow" if the byte size overflows `isize`.
    /// See [`try_with_capacity`](Self::try_with_capacity) for the fallible form.
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(list) => list,
            Err(err) => capacity_overflow(err),
        }
    }

    /// Fallible variant of [`with_capacity`](Self::with_capacity), returning
    /// [`Error::InvalidArgument`] when the request overflows.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, Error> {
        Ok(Self {
            buf: RawBuf::allocate(capacity)?,
            len: 0,
            observers: Observers::new(),
        })
    }

    /// Constructs a pre-sized list holding `len` clones of `value`.
    ///
    /// The buffer is sized exactly (`capacity() == len`).
    pub fn filled(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut list = Self::with_capacity(len);
        list.add_range(core::iter::repeat_n(value, len));
        list
    }
}

impl<T> Default for PerfList<T> {
    fn default() -> Self {
        Self::new()
    }
}
