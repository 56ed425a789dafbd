// This file is part of perf-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gate for the raw-pointer hot paths.
//!
//! With the `unsafe-fast-path` feature, `add`, the search scan and `reverse`
//! walk the buffer with pointer arithmetic instead of going through slices.
//! Only element types without drop glue take that route; everything else
//! uses the slice path. Results are identical either way.

/// Returns `true` if the hot paths may use raw pointer loops for `T`.
#[inline(always)]
pub(crate) const fn enabled<T>() -> bool {
    cfg!(feature = "unsafe-fast-path") && !core::mem::needs_drop::<T>()
}
