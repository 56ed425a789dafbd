// This file is part of perf-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Versioned binary snapshots of a [`PerfList`].
//!
//! # Format
//!
//! ```text
//! +-------------+---------+------------------------------+
//! | magic (4 B) | ver (1) | postcard sequence of T       |
//! | "PLST"      | 0x01    | varint len, then each item   |
//! +-------------+---------+------------------------------+
//! ```
//!
//! A snapshot holds the length and the elements, nothing else: capacity
//! and observers are not persisted. A restored list is exactly sized.
//!
//! Files are written with create-new semantics. Saving over an existing
//! path fails with [`Error::AlreadyExists`] and leaves the file untouched.

// Crate imports
use crate::{error::Error, list::PerfList};

// External imports - alloc
use alloc::vec::Vec;

// External imports - serde
use serde::{de::DeserializeOwned, Serialize};

#[cfg(feature = "std")]
use std::{
    fs::{self, OpenOptions},
    io::{self, Read, Write},
    path::Path,
};

/// Magic bytes at the start of every snapshot.
pub const MAGIC: [u8; 4] = *b"PLST";

/// The snapshot format version written by this build.
pub const FORMAT_VERSION: u8 = 1;

const HEADER_LEN: usize = MAGIC.len() + 1;

impl<T: Serialize> PerfList<T> {
    /// Encodes the list as a snapshot.
    pub fn to_snapshot(&self) -> Result<Vec<u8>, Error> {
        let payload = postcard::to_allocvec(self).map_err(Error::Codec)?;
        let mut out = Vec::with_capacity(HEADER_LEN + payload.len());
        out.extend_from_slice(&MAGIC);
        out.push(FORMAT_VERSION);
        out.extend_from_slice(&payload);
        Ok(out)
    }

    /// Writes a snapshot to a new file at `path`.
    ///
    /// Returns [`Error::AlreadyExists`] if anything is already at `path`.
    #[cfg(feature = "std")]
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let bytes = self.to_snapshot()?;
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => Error::AlreadyExists {
                    path: path.to_path_buf(),
                },
                _ => Error::Io(e),
            })?;
        file.write_all(&bytes)?;
        file.flush()?;
        tracing::debug!(
            path = %path.display(),
            len = self.len(),
            bytes = bytes.len(),
            "saved snapshot"
        );
        Ok(())
    }

    /// Writes a snapshot to a caller-supplied handle.
    #[cfg(feature = "std")]
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        writer.write_all(&self.to_snapshot()?)?;
        Ok(())
    }
}

impl<T: DeserializeOwned> PerfList<T> {
    /// Decodes a snapshot produced by [`to_snapshot`](Self::to_snapshot).
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidMagic`] if `bytes` doesn't start with [`MAGIC`].
    /// - [`Error::UnsupportedVersion`] for any version but [`FORMAT_VERSION`].
    /// - [`Error::Codec`] if the payload is truncated or malformed.
    /// - [`Error::TrailingBytes`] if bytes remain after the payload.
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self, Error> {
        let Some((magic, rest)) = bytes.split_first_chunk::<4>() else {
            tracing::warn!(bytes = bytes.len(), "snapshot shorter than its magic");
            return Err(Error::InvalidMagic);
        };
        if *magic != MAGIC {
            tracing::warn!(?magic, "rejected snapshot with foreign magic");
            return Err(Error::InvalidMagic);
        }
        let Some((&version, payload)) = rest.split_first() else {
            tracing::warn!("snapshot truncated before its version byte");
            return Err(Error::Codec(postcard::Error::DeserializeUnexpectedEnd));
        };
        if version != FORMAT_VERSION {
            tracing::warn!(found = version, "rejected snapshot with unsupported version");
            return Err(Error::UnsupportedVersion { found: version });
        }

        let (list, rest) = postcard::take_from_bytes::<Self>(payload).map_err(|e| {
            tracing::warn!(error = %e, "failed to decode snapshot payload");
            Error::Codec(e)
        })?;
        if !rest.is_empty() {
            tracing::warn!(trailing = rest.len(), "rejected snapshot with trailing bytes");
            return Err(Error::TrailingBytes);
        }
        Ok(list)
    }

    /// Reads a snapshot from the file at `path`.
    ///
    /// Returns [`Error::NotFound`] if there is no such file.
    #[cfg(feature = "std")]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::NotFound {
                path: path.to_path_buf(),
            },
            _ => Error::Io(e),
        })?;
        let list = Self::from_snapshot(&bytes)?;
        tracing::debug!(
            path = %path.display(),
            len = list.len(),
            bytes = bytes.len(),
            "loaded snapshot"
        );
        Ok(list)
    }

    /// Reads a snapshot from a caller-supplied handle, to its end.
    #[cfg(feature = "std")]
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self, Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_snapshot(&bytes)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::{FORMAT_VERSION, MAGIC};
    use crate::{list::PerfList, Error};
    use alloc::{string::String, vec::Vec};
    use proptest::prelude::*;

    #[test]
    fn test_snapshot_layout() {
        let list = PerfList::from([1u8, 2, 3]);
        let bytes = list.to_snapshot().unwrap();
        assert_eq!(bytes, [b'P', b'L', b'S', b'T', FORMAT_VERSION, 3, 1, 2, 3]);
    }

    #[test]
    fn test_roundtrip_restores_exact_fit_without_observers() {
        let mut list = PerfList::with_capacity(32);
        list.add_range([String::from("a"), String::from("bc")]);
        list.subscribe(|_| {});

        let back: PerfList<String> = PerfList::from_snapshot(&list.to_snapshot().unwrap()).unwrap();
        assert_eq!(back, list);
        assert_eq!(back.capacity(), 2);
        assert_eq!(back.observer_count(), 0);
    }

    #[test]
    fn test_empty_list_roundtrip() {
        let list: PerfList<u32> = PerfList::new();
        let bytes = list.to_snapshot().unwrap();
        let back = PerfList::<u32>::from_snapshot(&bytes).unwrap();
        assert!(back.is_empty());
        assert_eq!(back.capacity(), 0);
    }

    #[test]
    fn test_rejects_bad_magic() {
        let mut bytes = PerfList::from([1u8]).to_snapshot().unwrap();
        bytes[0] = b'X';
        assert!(matches!(
            PerfList::<u8>::from_snapshot(&bytes),
            Err(Error::InvalidMagic)
        ));
        assert!(matches!(
            PerfList::<u8>::from_snapshot(b"PL"),
            Err(Error::InvalidMagic)
        ));
        assert!(matches!(
            PerfList::<u8>::from_snapshot(&[]),
            Err(Error::InvalidMagic)
        ));
    }

    #[test]
    fn test_rejects_unsupported_version() {
        let mut bytes = PerfList::from([1u8]).to_snapshot().unwrap();
        bytes[MAGIC.len()] = FORMAT_VERSION + 1;
        assert!(matches!(
            PerfList::<u8>::from_snapshot(&bytes),
            Err(Error::UnsupportedVersion { found }) if found == FORMAT_VERSION + 1
        ));
    }

    #[test]
    fn test_rejects_truncated_payload() {
        let bytes = PerfList::from([10u32, 20, 30]).to_snapshot().unwrap();
        assert!(matches!(
            PerfList::<u32>::from_snapshot(&bytes[..bytes.len() - 1]),
            Err(Error::Codec(_))
        ));
        assert!(matches!(
            PerfList::<u32>::from_snapshot(&MAGIC),
            Err(Error::Codec(_))
        ));
    }

    #[test]
    fn test_rejects_trailing_bytes() {
        let mut bytes = PerfList::from([1u8, 2]).to_snapshot().unwrap();
        bytes.push(0);
        assert!(matches!(
            PerfList::<u8>::from_snapshot(&bytes),
            Err(Error::TrailingBytes)
        ));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.plst");

        let list = PerfList::from([5i64, -6, 7]);
        list.save(&path).unwrap();
        let back: PerfList<i64> = PerfList::load(&path).unwrap();
        assert_eq!(back.as_slice(), &[5, -6, 7]);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_save_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.plst");

        PerfList::from([1u8]).save(&path).unwrap();
        let err = PerfList::from([2u8, 3]).save(&path).unwrap_err();
        assert!(matches!(err, Error::AlreadyExists { path: ref p } if *p == path));

        let kept: PerfList<u8> = PerfList::load(&path).unwrap();
        assert_eq!(kept.as_slice(), &[1]);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_load_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.plst");
        let err = PerfList::<u8>::load(&path).unwrap_err();
        assert!(matches!(err, Error::NotFound { path: p } if p == path));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_write_to_and_read_from_handles() {
        let list = PerfList::from([0.5f64, 1.5]);
        let mut sink = Vec::new();
        list.write_to(&mut sink).unwrap();
        assert_eq!(&sink[..4], &MAGIC);

        let back: PerfList<f64> = PerfList::read_from(sink.as_slice()).unwrap();
        assert_eq!(back, list);
    }

    proptest! {
        #[test]
        fn snapshot_roundtrip_preserves_order_and_len(
            values in proptest::collection::vec(any::<i64>(), 0..64)
        ) {
            let list: PerfList<i64> = values.iter().copied().collect();
            let back = PerfList::<i64>::from_snapshot(&list.to_snapshot().unwrap()).unwrap();
            prop_assert_eq!(back.as_slice(), values.as_slice());
            prop_assert_eq!(back.capacity(), back.len());
        }
    }
}
