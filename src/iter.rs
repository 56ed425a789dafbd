// This file is part of perf-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`PerfList`](crate::PerfList).
//!
//! - `Iter<'a, T>` borrows the list and walks `[0, len)` by reference. It can
//!   be restarted with [`Iter::reset`].
//! - `IntoIter<T>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`.
//! - `&mut PerfList` iterates as a mutable slice.
//!
//! The higher-order helpers (`for_each`, `map`, `filter` and their indexed
//! forms, plus `find_last_by`) are built on `Iter` and visit exactly `len`
//! elements in order.

// Crate imports
use crate::list::{PerfList, RawBuf};

// Core imports
use core::{fmt, iter::FusedIterator, mem, ptr};

/// Borrowing iterator returned by [`PerfList::iter`].
///
/// The iterator captures `len` when it is built and holds a shared borrow of
/// the list, so the list cannot be mutated while it is alive:
///
/// ```compile_fail
/// use perf_list::PerfList;
///
/// let mut list = PerfList::from([1, 2, 3]);
/// let mut it = list.iter();
/// list.add(4); // cannot borrow `list` as mutable
/// it.next();
/// ```
pub struct Iter<'a, T> {
    list: &'a PerfList<T>,
    index: usize,
    end: usize,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    fn new(list: &'a PerfList<T>) -> Self {
        Self {
            list,
            index: 0,
            end: list.len(),
        }
    }

    /// Restarts the traversal from the first element.
    #[inline]
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Returns the index of the element the next call to `next` yields.
    #[inline]
    pub fn position(&self) -> usize {
        self.index
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.index >= self.end {
            return None;
        }
        let item = &self.list.as_slice()[self.index];
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.end.saturating_sub(self.index);
        (rem, Some(rem))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            index: self.index,
            end: self.end,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("position", &self.index)
            .field("remaining", &&self.list.as_slice()[self.index.min(self.end)..self.end])
            .finish()
    }
}

/// Owned iterator returned by `PerfList::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`]. Elements not yielded are dropped
/// with the iterator. Observers are not carried over.
pub struct IntoIter<T> {
    buf: RawBuf<T>,
    front: usize,
    back: usize, // exclusive
}

impl<T> IntoIter<T> {
    /// Returns the elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front, back)` is initialized and not yet moved out.
        unsafe { core::slice::from_raw_parts(self.buf.ptr().add(self.front), self.back - self.front) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let i = self.front;
        self.front += 1;
        // SAFETY: `i` was in `[front, back)`, so it is initialized; advancing
        // `front` first makes this the only read of that slot.
        Some(unsafe { ptr::read(self.buf.ptr().add(i)) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }

    fn nth(&mut self, n: usize) -> Option<T> {
        let skip = n.min(self.back - self.front);
        let start = self.front;
        self.front += skip;
        // SAFETY: the skipped slots are initialized and now outside
        // `[front, back)`, so they are dropped exactly once.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr().add(start), skip));
        }
        self.next()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: see `next`.
        Some(unsafe { ptr::read(self.buf.ptr().add(self.back)) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let (front, back) = (self.front, self.back);
        self.front = back;
        // SAFETY: `[front, back)` still holds the elements never yielded.
        // `RawBuf` frees the allocation afterwards.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.ptr().add(front),
                back - front,
            ));
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T> IntoIterator for &'a PerfList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}
impl<'a, T> IntoIterator for &'a mut PerfList<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T> IntoIterator for PerfList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(mut self) -> Self::IntoIter {
        let back = mem::replace(&mut self.len, 0);
        let buf = mem::replace(&mut self.buf, RawBuf::dangling());
        IntoIter { buf, front: 0, back }
    }
}

impl<T> PerfList<T> {
    /// Returns a restartable iterator over `&T` in positional order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Calls `f` on every element in order.
    pub fn for_each<F: FnMut(&T)>(&self, f: F) {
        self.iter().for_each(f);
    }

    /// Calls `f` with each position and element in order.
    pub fn for_each_indexed<F: FnMut(usize, &T)>(&self, mut f: F) {
        self.iter().enumerate().for_each(|(i, item)| f(i, item));
    }

    /// Builds a new list from `f` applied to every element.
    ///
    /// ```rust
    /// use perf_list::PerfList;
    ///
    /// let list = PerfList::from([1, 2, 3]);
    /// assert_eq!(list.map(|x| x * 10).as_slice(), &[10, 20, 30]);
    /// ```
    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> PerfList<U> {
        let mut out = PerfList::with_capacity(self.len);
        out.add_range(self.iter().map(f));
        out
    }

    /// Like [`map`](Self::map), with the element's position as well.
    pub fn map_indexed<U, F: FnMut(usize, &T) -> U>(&self, mut f: F) -> PerfList<U> {
        let mut out = PerfList::with_capacity(self.len);
        out.add_range(self.iter().enumerate().map(|(i, item)| f(i, item)));
        out
    }

    /// Builds a new list holding clones of the elements matching `pred`.
    pub fn filter<F: FnMut(&T) -> bool>(&self, mut pred: F) -> PerfList<T>
    where
        T: Clone,
    {
        self.iter().filter(|item| pred(item)).cloned().collect()
    }

    /// Like [`filter`](Self::filter), with the element's position as well.
    pub fn filter_indexed<F: FnMut(usize, &T) -> bool>(&self, mut pred: F) -> PerfList<T>
    where
        T: Clone,
    {
        self.iter()
            .enumerate()
            .filter(|(i, item)| pred(*i, item))
            .map(|(_, item)| item.clone())
            .collect()
    }

    /// Reduces the list to the element `prefer` favors, scanning in order.
    ///
    /// The first element is the initial candidate. For each later element,
    /// `prefer(candidate, element)` returning `true` makes that element the
    /// new candidate. When `prefer` accepts ties, the last of several equal
    /// elements wins. Returns `None` for an empty list; a single element is
    /// returned without calling `prefer`.
    ///
    /// ```rust
    /// use perf_list::PerfList;
    ///
    /// let list = PerfList::from([(3, 'a'), (7, 'b'), (7, 'c'), (1, 'd')]);
    /// assert_eq!(list.find_last_by(|best, x| x.0 >= best.0), Some(&(7, 'c')));
    /// ```
    pub fn find_last_by<F: FnMut(&T, &T) -> bool>(&self, mut prefer: F) -> Option<&T> {
        let mut iter = self.iter();
        let first = iter.next()?;
        Some(iter.fold(first, |candidate, item| {
            if prefer(candidate, item) {
                item
            } else {
                candidate
            }
        }))
    }
}
