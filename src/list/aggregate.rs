// This file is part of perf-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Numeric aggregation.
//!
//! [`Summable`] is the capability "has an additive identity and `+`". It is
//! implemented for every primitive integer and float and for `Wrapping` of
//! the integers. Additions use the type's own `+`, so overflow behaves
//! exactly as it would in a hand-written loop (a panic in debug builds and
//! wraparound in release builds for plain integers, always wraparound for
//! `Wrapping`).

// Crate imports
use crate::{error::Error, list::PerfList};

// Core imports
use core::{any::Any, num::Wrapping, ops::Add};

/// Element types that can be summed.
pub trait Summable: Copy + Add<Output = Self> {
    /// The additive identity.
    const ZERO: Self;
}

macro_rules! impl_summable {
    ($($t:ty),* $(,)?) => {
        $(
            impl Summable for $t {
                const ZERO: Self = 0 as $t;
            }
        )*
    };
}

macro_rules! impl_summable_wrapping {
    ($($t:ty),* $(,)?) => {
        $(
            impl Summable for Wrapping<$t> {
                const ZERO: Self = Wrapping(0);
            }
        )*
    };
}

impl_summable!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
impl_summable_wrapping!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: Summable> PerfList<T> {
    /// Folds all live elements left to right with `+`, starting at
    /// [`Summable::ZERO`]. An empty list sums to `ZERO`.
    pub fn sum(&self) -> T {
        self.as_slice().iter().fold(T::ZERO, |acc, &x| acc + x)
    }
}

impl<T: 'static> PerfList<T> {
    /// Sums the list when `T` turns out to be numeric at runtime.
    ///
    /// For code that is generic over `T` without a [`Summable`] bound.
    /// Covers every type with a built-in [`Summable`] impl: the primitive
    /// integers and floats and `Wrapping` of the integers. Returns
    /// [`Error::UnsupportedType`] for anything else.
    pub fn try_sum(&self) -> Result<T, Error> {
        let mut out: Option<T> = None;

        macro_rules! dispatch {
            ($($t:ty),*) => {
                $(
                    if let Some(list) = (self as &dyn Any).downcast_ref::<PerfList<$t>>() {
                        if let Some(slot) = (&mut out as &mut dyn Any).downcast_mut::<Option<$t>>() {
                            *slot = Some(list.sum());
                        }
                    }
                )*
            };
        }
        dispatch!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
        dispatch!(
            Wrapping<i8>, Wrapping<i16>, Wrapping<i32>, Wrapping<i64>, Wrapping<i128>,
            Wrapping<isize>, Wrapping<u8>, Wrapping<u16>, Wrapping<u32>, Wrapping<u64>,
            Wrapping<u128>, Wrapping<usize>
        );

        out.ok_or(Error::UnsupportedType {
            type_name: core::any::type_name::<T>(),
        })
    }
}
