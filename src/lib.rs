// This file is part of perf-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `perf-list`
//!
//! A growable, contiguous, heap-backed list with a fixed and documented
//! buffer policy, optional change notification, numeric aggregation and a
//! versioned binary snapshot format.
//!
//! The core type, [`PerfList<T>`], owns a raw buffer of `capacity` slots and
//! tracks a logical length `len ∈ 0..=capacity`. Only the prefix `[0, len)` is
//! ever initialized or visible.
//!
//! ## Buffer policy
//!
//! - Growth doubles the capacity, starting at [`PerfList::MIN_CAPACITY`], so
//!   appends are amortized `O(1)`.
//! - [`PerfList::remove_at`] reallocates to an exact fit afterwards. The
//!   capacity after a removal is always equal to the length.
//! - [`PerfList::clear`] releases the buffer entirely. An empty list with
//!   capacity `0` holds no allocation.
//! - Nothing else ever shrinks the buffer.
//!
//! Allocation failure is fatal (the global allocation error handler runs).
//! A size request whose byte size does not fit in `isize` is reported as
//! [`Error::InvalidArgument`] by [`PerfList::ensure_capacity`] and panics with
//! "capacity overflow" from the infallible growth paths, like `Vec`.
//!
//! ## Errors and indexing
//!
//! Fallible operations return [`Error`] and leave the list untouched on
//! failure; no event is fired for a failed call. Index operators
//! (`list[i]`, `list[a..b]`) follow slice semantics and **panic** when out of
//! bounds; use [`PerfList::try_get`] / [`PerfList::set`] for the checked forms.
//!
//! ## Observers
//!
//! [`PerfList::subscribe`] registers a callback receiving [`ListEvent`]s. Every
//! structural change fires its specific event (`Added`, `Removed`) and then
//! `Changed`, synchronously, after the change is committed. Mutation through
//! `&mut [T]` views (`IndexMut`, `DerefMut`, `iter_mut`) is not observed.
//!
//! ## Features
//!
//! - `std` (default): snapshot files and `Read`/`Write` handles. Without it
//!   the crate is `no_std` and only needs `alloc`.
//! - `serde` (default): `Serialize` / `Deserialize` for `PerfList<T>` and the
//!   binary snapshot format (see [`persist`]).
//! - `unsafe-fast-path`: raw-pointer loops for `add`, `contains`/`index_of`
//!   and `reverse` when the element type has no drop glue. The public API and
//!   its results are identical either way.
//!
//! ## Example
//!
//! ```rust
//! use perf_list::PerfList;
//!
//! let mut list = PerfList::new();
//! list.add(5);
//! list.add(7);
//! list.insert(1, 6).unwrap();
//! assert_eq!(list.as_slice(), &[5, 6, 7]);
//!
//! assert!(list.remove(&6));
//! assert!(!list.remove(&99));
//! assert_eq!(list.as_slice(), &[5, 7]);
//! assert_eq!(list.sum(), 12);
//! ```
//!
//! See [`PerfList`] for detailed behavior.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
mod list;
mod observer;
#[cfg(feature = "serde")]
pub mod persist;
#[cfg(feature = "serde")]
mod serde;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::{IntoIter, Iter};
pub use list::{PerfList, Summable};
pub use observer::{ListEvent, SubscriptionId};
