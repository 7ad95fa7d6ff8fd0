//! Durable storage helpers shared by every index artifact
//!
//! All writes go through a temp-file-then-rename sequence:
//! 1. Write `<name>.tmp` → fsync
//! 2. Atomic rename to `<name>`
//!
//! Reads distinguish three outcomes instead of collapsing them into one
//! error path: a missing file is normal (sparse barrel directories, first
//! builds), a corrupt file is tolerated but logged, and only the caller
//! decides which policy applies.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::Result;

/// Outcome of reading an index artifact from disk
#[derive(Debug)]
pub enum ReadOutcome<T> {
    /// File existed and deserialized cleanly
    Found(T),
    /// File does not exist
    Missing,
    /// File exists but could not be read or decoded
    Corrupt(io::Error),
}

impl<T: Default> ReadOutcome<T> {
    /// Apply the tolerant read policy: missing data is silently empty,
    /// corrupt data is empty with a warning, found data is returned.
    pub fn or_default_logged(self, what: &str) -> T {
        match self {
            ReadOutcome::Found(value) => value,
            ReadOutcome::Missing => T::default(),
            ReadOutcome::Corrupt(err) => {
                warn!("unreadable {} file, treating as empty: {}", what, err);
                T::default()
            }
        }
    }
}

impl<T> ReadOutcome<T> {
    /// Map the found value, preserving the other outcomes
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ReadOutcome<U> {
        match self {
            ReadOutcome::Found(value) => ReadOutcome::Found(f(value)),
            ReadOutcome::Missing => ReadOutcome::Missing,
            ReadOutcome::Corrupt(err) => ReadOutcome::Corrupt(err),
        }
    }
}

/// Read a file's full contents, classifying the failure mode
pub fn read_bytes(path: &Path) -> ReadOutcome<Vec<u8>> {
    match fs::read(path) {
        Ok(bytes) => ReadOutcome::Found(bytes),
        Err(err) if err.kind() == io::ErrorKind::NotFound => ReadOutcome::Missing,
        Err(err) => ReadOutcome::Corrupt(err),
    }
}

/// Write bytes to `path` via a fsynced temp file and atomic rename
pub fn write_bytes_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);

    let mut file = File::create(&tmp)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    drop(file);

    fs::rename(&tmp, path)
}

/// Read and bincode-decode a file, classifying the failure mode
pub fn read_bincode<T: DeserializeOwned>(path: &Path) -> ReadOutcome<T> {
    match read_bytes(path) {
        ReadOutcome::Found(bytes) => match bincode::deserialize(&bytes) {
            Ok(value) => ReadOutcome::Found(value),
            Err(err) => {
                ReadOutcome::Corrupt(io::Error::new(io::ErrorKind::InvalidData, err))
            }
        },
        ReadOutcome::Missing => ReadOutcome::Missing,
        ReadOutcome::Corrupt(err) => ReadOutcome::Corrupt(err),
    }
}

/// Bincode-encode a value and write it atomically
pub fn write_bincode_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let bytes = bincode::serialize(value)?;
    write_bytes_atomic(path, &bytes)?;
    Ok(())
}
