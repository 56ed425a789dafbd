// This file is part of perf-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Invariants for the buffer:
// - `cap == 0` or `size_of::<T>() == 0` means `ptr` is dangling and nothing
//   is allocated (the empty sentinel).
// - Otherwise `ptr` came from `alloc(Layout::array::<T>(cap))`.
// - `RawBuf` never reads, writes or drops elements; `PerfList` tracks which
//   slots are initialized.

// Crate imports
use crate::{error::Error, list::PerfList};

// Core imports
use core::{
    alloc::Layout,
    marker::PhantomData,
    mem,
    ptr::{self, NonNull},
};

// External imports - alloc
use alloc::alloc::{alloc, dealloc, handle_alloc_error};

/// An owned, uninitialized allocation of `cap` slots of `T`.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

impl<T> RawBuf<T> {
    /// The empty sentinel: no allocation, capacity `0`.
    #[inline]
    pub(crate) const fn dangling() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates room for exactly `cap` elements.
    ///
    /// Returns [`Error::InvalidArgument`] if `cap` elements of `T` don't fit
    /// in `isize::MAX` bytes. Allocation failure is fatal.
    pub(crate) fn allocate(cap: usize) -> Result<Self, Error> {
        let layout = Layout::array::<T>(cap)
            .map_err(|_| Error::InvalidArgument("capacity overflow"))?;

        if layout.size() == 0 {
            // Zero capacity or zero-sized `T`: keep counting, never allocate.
            return Ok(Self {
                ptr: NonNull::dangling(),
                cap,
                _marker: PhantomData,
            });
        }

        // SAFETY: `layout` has a non-zero size.
        let raw = unsafe { alloc(layout) };
        let Some(ptr) = NonNull::new(raw.cast::<T>()) else {
            handle_alloc_error(layout);
        };

        Ok(Self {
            ptr,
            cap,
            _marker: PhantomData,
        })
    }

    #[inline]
    pub(crate) const fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) const fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        let size = mem::size_of::<T>() * self.cap;
        if size == 0 {
            return;
        }
        // SAFETY: a non-zero size means `ptr` was allocated by `allocate`
        // with exactly this layout, which was validated at the time.
        unsafe {
            let layout = Layout::from_size_align_unchecked(size, mem::align_of::<T>());
            dealloc(self.ptr.as_ptr().cast::<u8>(), layout);
        }
    }
}

impl<T> PerfList<T> {
    /// The capacity of the first allocation made by growth.
    pub const MIN_CAPACITY: usize = 4;

    /// Guarantees `capacity() >= min` on success.
    ///
    /// When growth is needed the capacity doubles (starting from
    /// [`MIN_CAPACITY`](Self::MIN_CAPACITY)), or jumps straight to `min` if
    /// doubling is not enough. The live elements are moved into the new
    /// buffer in order and the old one is released.
    ///
    /// Returns [`Error::InvalidArgument`] if the request overflows; the list
    /// is left unchanged in that case.
    pub fn ensure_capacity(&mut self, min: usize) -> Result<(), Error> {
        let cap = self.buf.capacity();
        if min <= cap {
            return Ok(());
        }
        let doubled = if cap == 0 {
            Self::MIN_CAPACITY
        } else {
            cap.saturating_mul(2)
        };
        self.reallocate(doubled.max(min))
    }

    /// Makes room for one more element, treating overflow as fatal.
    #[inline]
    pub(crate) fn reserve_one(&mut self) {
        if self.len == self.buf.capacity() {
            self.grow_for(self.len.saturating_add(1));
        }
    }

    /// Infallible growth used by `add` and friends; overflow panics like `Vec`.
    #[cold]
    pub(crate) fn grow_for(&mut self, min: usize) {
        if let Err(err) = self.ensure_capacity(min) {
            capacity_overflow(err);
        }
    }

    /// Reallocates to `capacity == len`, or to the sentinel when empty.
    pub(crate) fn shrink_exact(&mut self) {
        if self.len == self.buf.capacity() {
            return;
        }
        if self.len == 0 {
            self.release();
            return;
        }
        // A smaller layout than the live one always fits.
        if let Err(err) = self.reallocate(self.len) {
            capacity_overflow(err);
        }
    }

    /// Swaps in the empty sentinel. Callers drop the elements first.
    pub(crate) fn release(&mut self) {
        debug_assert_eq!(self.len, 0);
        let old = mem::replace(&mut self.buf, RawBuf::dangling());
        if old.capacity() != 0 {
            tracing::trace!(old = old.capacity(), "released buffer to empty sentinel");
        }
    }

    fn reallocate(&mut self, new_cap: usize) -> Result<(), Error> {
        debug_assert!(new_cap >= self.len);
        let new_buf = RawBuf::allocate(new_cap)?;

        // SAFETY: both buffers hold at least `len` slots and are distinct
        // allocations (or dangling for zero-sized moves). The values are
        // moved bitwise; the old buffer is freed without dropping them.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.ptr(), new_buf.ptr(), self.len);
        }
        let old = mem::replace(&mut self.buf, new_buf);

        tracing::trace!(
            old = old.capacity(),
            new = new_cap,
            len = self.len,
            "reallocated buffer"
        );
        Ok(())
    }
}

#[cold]
#[inline(never)]
pub(super) fn capacity_overflow(err: Error) -> ! {
    panic!("capacity overflow: {err}")
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{list::PerfList, Error};
    use proptest::prelude::*;

    #[test]
    fn test_growth_starts_at_min_then_doubles() {
        let mut list = PerfList::new();
        let mut seen = alloc::vec::Vec::new();
        for i in 0..33 {
            list.add(i);
            if seen.last() != Some(&list.capacity()) {
                seen.push(list.capacity());
            }
        }
        assert_eq!(seen, [4, 8, 16, 32, 64]);
    }

    #[test]
    fn test_ensure_capacity_jumps_to_request_when_doubling_is_short() {
        let mut list: PerfList<u8> = PerfList::new();
        list.ensure_capacity(2).unwrap();
        assert_eq!(list.capacity(), 4);
        list.ensure_capacity(100).unwrap();
        assert_eq!(list.capacity(), 100);
        list.ensure_capacity(50).unwrap();
        assert_eq!(list.capacity(), 100);
    }

    #[test]
    fn test_ensure_capacity_preserves_contents() {
        let mut list = PerfList::from([1, 2, 3]);
        list.ensure_capacity(1000).unwrap();
        assert_eq!(list.as_slice(), &[1, 2, 3]);
        assert_eq!(list.capacity(), 1000);
    }

    #[test]
    fn test_ensure_capacity_overflow_is_invalid_argument_and_noop() {
        let mut list = PerfList::from([1u64, 2]);
        let err = list.ensure_capacity(usize::MAX).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(list.as_slice(), &[1, 2]);
        assert_eq!(list.capacity(), 2);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_with_capacity_overflow_panics() {
        let _ = PerfList::<u64>::with_capacity(usize::MAX);
    }

    #[test]
    fn test_shrink_exact_and_release() {
        let mut list = PerfList::with_capacity(10);
        list.add_range([1, 2, 3]);
        list.shrink_exact();
        assert_eq!(list.capacity(), 3);
        assert_eq!(list.as_slice(), &[1, 2, 3]);

        list.clear();
        assert_eq!(list.capacity(), 0);
        list.shrink_exact();
        assert_eq!(list.capacity(), 0);
    }

    proptest! {
        #[test]
        fn capacity_covers_len_and_grows_by_at_least_doubling(
            values in proptest::collection::vec(any::<i32>(), 0..200)
        ) {
            let mut list = PerfList::new();
            let mut cap = list.capacity();
            for v in values {
                list.add(v);
                prop_assert!(list.capacity() >= list.len());
                if list.capacity() != cap {
                    prop_assert!(list.capacity() >= (cap * 2).max(PerfList::<i32>::MIN_CAPACITY));
                    cap = list.capacity();
                }
            }
        }
    }
}
