// This file is part of perf-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `PerfList`.
//!
//! These errors represent bounds, argument, capability and persistence
//! conditions. Allocation failure is not represented: it is fatal.

#[cfg(feature = "std")]
use std::{io, path::PathBuf};

// External imports - thiserror
use thiserror::Error as ThisError;

/// Errors returned by operations on [`PerfList`](crate::PerfList).
#[derive(Debug, ThisError)]
#[non_exhaustive]
pub enum Error {
    /// An index or range bound was outside the current logical bounds.
    ///
    /// Element positions must satisfy `index < len`; insertion points and
    /// range bounds must satisfy `index <= len`.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The offending index or range bound.
        index: usize,
        /// The length of the list at the time of the call.
        len: usize,
    },

    /// A required argument was unusable (e.g. a size request that overflows).
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// An aggregate was requested for a non-numeric element type.
    #[error("aggregation is not supported for element type `{type_name}`")]
    UnsupportedType {
        /// The element type's name, as reported by `core::any::type_name`.
        type_name: &'static str,
    },

    /// The snapshot destination already exists; snapshots never overwrite.
    #[cfg(feature = "std")]
    #[error("snapshot destination already exists: {}", path.display())]
    AlreadyExists {
        /// The destination that was refused.
        path: PathBuf,
    },

    /// The snapshot source does not exist.
    #[cfg(feature = "std")]
    #[error("snapshot source not found: {}", path.display())]
    NotFound {
        /// The source that was looked up.
        path: PathBuf,
    },

    /// Any other I/O failure while reading or writing a snapshot.
    #[cfg(feature = "std")]
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The snapshot does not start with the expected magic bytes.
    #[cfg(feature = "serde")]
    #[error("invalid snapshot magic (expected b\"PLST\")")]
    InvalidMagic,

    /// The snapshot was written with a format version this build can't read.
    #[cfg(feature = "serde")]
    #[error("unsupported snapshot format version {found}")]
    UnsupportedVersion {
        /// The version byte found in the snapshot.
        found: u8,
    },

    /// The snapshot payload decoded but was followed by extra bytes.
    #[cfg(feature = "serde")]
    #[error("trailing bytes after snapshot payload")]
    TrailingBytes,

    /// The snapshot payload could not be encoded or decoded.
    #[cfg(feature = "serde")]
    #[error("snapshot codec error: {0}")]
    Codec(postcard::Error),
}

impl Error {
    #[inline]
    pub(crate) const fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::out_of_range(3, 2));
        assert_eq!(s, "index 3 out of range for length 2");
    }

    #[test]
    fn test_unsupported_type_names_the_type() {
        let e = Error::UnsupportedType {
            type_name: core::any::type_name::<&str>(),
        };
        assert!(e.to_string().contains("&str"));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_io_error_converts_and_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let e: Error = io.into();
        assert!(matches!(e, Error::Io(_)));
        assert!(e.source().is_some());
    }
}
