// This file is part of perf-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`PerfList`](crate::PerfList).
//!
//! - **Serialize**: as a sequence of the `len` live elements.
//! - **Deserialize**: from any sequence, growing by the usual policy.
//!
//! Capacity and observers are not part of the serialized form. A
//! deserialized list starts with no observers and, when the format reports
//! its length up front, with an exactly-sized buffer.

// Crate imports
use crate::list::PerfList;

// Core imports
use core::{fmt, marker::PhantomData, mem};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

/// Upper bound on the bytes preallocated from an untrusted length hint.
const MAX_PREALLOC_BYTES: usize = 1024 * 1024;

impl<T: Serialize> Serialize for PerfList<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct ListVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for ListVisitor<T> {
    type Value = PerfList<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of list elements")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let cap = cautious_capacity::<T>(a.size_hint());
        let mut out = PerfList::try_with_capacity(cap).map_err(de::Error::custom)?;
        while let Some(elem) = a.next_element::<T>()? {
            out.add(elem);
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PerfList<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(ListVisitor(PhantomData))
    }
}

/// Caps a length hint so a lying input can't force a huge allocation.
fn cautious_capacity<T>(hint: Option<usize>) -> usize {
    let per_item = mem::size_of::<T>().max(1);
    hint.unwrap_or(0).min(MAX_PREALLOC_BYTES / per_item)
}
