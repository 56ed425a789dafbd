// This file is part of perf-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::PerfList};

// External imports - alloc
use alloc::vec::Vec;

impl<T: Clone> PerfList<T> {
    /// Clones the live elements into `target[at..at + len]`.
    ///
    /// Returns [`Error::InvalidArgument`] if `target` is too short; `target` is
    /// left untouched in that case.
    pub fn copy_to(&self, target: &mut [T], at: usize) -> Result<(), Error> {
        let end = at
            .checked_add(self.len)
            .filter(|&end| end <= target.len())
            .ok_or(Error::InvalidArgument("copy target is too short"))?;
        target[at..end].clone_from_slice(self.as_slice());
        Ok(())
    }

    /// Clones the live elements into a `Vec`. Slack capacity is never included.
    pub fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }
}

/// Reserves the iterator's lower size bound up front, then appends.
impl<T> FromIterator<T> for PerfList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.add_range(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for PerfList<T> {
    fn from(src: [T; N]) -> Self {
        let mut list = Self::with_capacity(N);
        list.add_range(src);
        list
    }
}

impl<T: Clone> From<&[T]> for PerfList<T> {
    fn from(src: &[T]) -> Self {
        let mut list = Self::with_capacity(src.len());
        list.extend_from_slice(src);
        list
    }
}

impl<T> From<Vec<T>> for PerfList<T> {
    fn from(src: Vec<T>) -> Self {
        let mut list = Self::with_capacity(src.len());
        list.add_range(src);
        list
    }
}

impl<T> From<PerfList<T>> for Vec<T> {
    fn from(list: PerfList<T>) -> Self {
        list.into_iter().collect()
    }
}
