// This file is part of perf-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `PerfList` type and its inherent API.
//!
//! `PerfList<T>` is a growable vector over an exclusively owned raw buffer.
//! The inherent API is split by concern across the submodules of this one:
//! buffer management, positional mutation, search, aggregation, sorting and
//! conversions each live in their own file.

mod access;
mod add;
mod aggregate;
mod buffer;
mod fast;
mod from;
mod insert;
mod new;
mod range;
mod remove;
mod reverse;
mod search;
mod slice;
mod sort;

pub use aggregate::Summable;
pub(crate) use buffer::RawBuf;

// Crate imports
use crate::{error::Error, observer::Observers};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Bound, Deref, DerefMut, RangeBounds},
    ptr,
};

/// A growable, contiguous list with a documented buffer policy.
///
/// `PerfList<T>` owns a buffer of `capacity` slots and tracks a logical
/// length `len ∈ 0..=capacity`. Conceptually, it is a `Vec` whose growth and
/// shrink points are fixed rather than left to the implementation:
///
/// - appends grow the buffer by doubling (minimum [`MIN_CAPACITY`]);
/// - [`remove_at`] shrinks it to an exact fit;
/// - [`clear`] releases it completely;
/// - every structural change can be observed through [`subscribe`].
///
/// # Layout and invariants
///
/// - `0 <= len <= capacity` at all times.
/// - Slots `[0, len)` hold initialized values, in positional order, with no
///   gaps. Slots `[len, capacity)` are uninitialized and never read.
/// - `capacity == 0` means no allocation is held (the empty sentinel).
/// - Every mutating method restores these invariants before it returns and
///   before any observer runs.
///
/// # Complexity characteristics
///
/// - [`add`] is amortized `O(1)`.
/// - [`insert`], [`insert_range`], [`remove_at`] and [`remove`] are `O(len)`.
///   [`remove_at`] also reallocates, trading amortization for footprint.
/// - [`contains`], [`index_of`], [`sum`] and [`reverse`] are `O(len)`.
///
/// # Examples
///
/// ```rust
/// use perf_list::PerfList;
///
/// let mut list: PerfList<u32> = PerfList::new();
/// assert_eq!(list.capacity(), 0);
///
/// list.add(1);
/// assert_eq!(list.capacity(), PerfList::<u32>::MIN_CAPACITY);
///
/// list.add_range([2, 3, 4, 5]);
/// assert_eq!(list.capacity(), 8);
///
/// list.remove_at(0).unwrap();
/// assert_eq!(list.capacity(), list.len());
///
/// list.clear();
/// assert_eq!(list.capacity(), 0);
/// ```
///
/// # Thread safety
///
/// `PerfList` is neither `Send` nor `Sync`: it owns a raw buffer and boxed
/// observer callbacks and performs no internal locking.
///
/// [`MIN_CAPACITY`]: PerfList::MIN_CAPACITY
/// [`add`]: PerfList::add
/// [`insert`]: PerfList::insert
/// [`insert_range`]: PerfList::insert_range
/// [`remove_at`]: PerfList::remove_at
/// [`remove`]: PerfList::remove
/// [`clear`]: PerfList::clear
/// [`contains`]: PerfList::contains
/// [`index_of`]: PerfList::index_of
/// [`sum`]: PerfList::sum
/// [`reverse`]: PerfList::reverse
/// [`subscribe`]: PerfList::subscribe
pub struct PerfList<T> {
    pub(crate) buf: RawBuf<T>,
    pub(crate) len: usize,
    pub(crate) observers: Observers<T>,
}

impl<T> PerfList<T> {
    /// Returns the number of allocated slots.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the current logical length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `capacity - len`, the number of appends possible without growth.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        self.buf.capacity() - self.len
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`. Not observed.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Resolves `range` against `[0, len]`.
    ///
    /// Unlike slice indexing this never panics: an inverted range or an end
    /// past `len` is reported as [`Error::OutOfRange`].
    pub(crate) fn resolve_range<R: RangeBounds<usize>>(
        &self,
        range: R,
    ) -> Result<(usize, usize), Error> {
        let len = self.len;

        let start = match range.start_bound() {
            Bound::Included(&i) => i,
            Bound::Excluded(&i) => i.checked_add(1).ok_or(Error::out_of_range(i, len))?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&i) => i.checked_add(1).ok_or(Error::out_of_range(i, len))?,
            Bound::Excluded(&i) => i,
            Bound::Unbounded => len,
        };

        if end > len {
            return Err(Error::out_of_range(end, len));
        }
        if start > end {
            return Err(Error::out_of_range(start, len));
        }
        Ok((start, end))
    }
}

impl<T> Drop for PerfList<T> {
    fn drop(&mut self) {
        let len = self.len;
        self.len = 0;
        // SAFETY: `[0, len)` holds initialized values that are dropped exactly
        // once here; `len` was zeroed first so a panicking destructor can't
        // cause a second drop. `RawBuf` frees the allocation afterwards.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr(), len));
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PerfList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PerfList")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for PerfList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for PerfList<T> {}
impl<T: Ord> Ord for PerfList<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for PerfList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for PerfList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

/// Clones the elements into an exactly-sized buffer. Observers stay behind.
impl<T: Clone> Clone for PerfList<T> {
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.len);
        out.add_range(self.as_slice().iter().cloned());
        out
    }
}

impl<T> Deref for PerfList<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for PerfList<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for PerfList<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for PerfList<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for PerfList<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for PerfList<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
