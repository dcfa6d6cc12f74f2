//! Fixture error definitions.
//!
//! This module defines the error handling for the corpus builder. It provides:
//! 1. **Data Errors:** Register mappings that violate the register file invariants.
//! 2. **Corpus Errors:** Test case names that collide or cannot name a file.
//! 3. **Dump Errors:** Register dumps that do not follow the canonical format.
//! 4. **System Errors:** Filesystem and configuration failures with their source.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building, rendering, or writing the fixture corpus.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// A register mapping referenced an index outside `x0`-`x31`.
    #[error("register index {index} is out of range (expected 0..32)")]
    RegisterOutOfRange {
        /// The offending register index.
        index: usize,
    },

    /// A register mapping assigned a non-zero value to the hardwired `x0`.
    #[error("register x0 is hardwired to zero but was given {value:#x}")]
    HardwiredZero {
        /// The value that was supplied for `x0`.
        value: u32,
    },

    /// Two test cases in the same corpus share a name.
    #[error("duplicate test case name `{name}`")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },

    /// A test case name cannot be used as a fixture file-name stem.
    #[error("test case name `{name}` is not a valid fixture file stem")]
    InvalidName {
        /// The rejected name.
        name: String,
    },

    /// A register dump did not match the canonical 32-line format.
    #[error("malformed register dump at line {line}: {reason}")]
    MalformedDump {
        /// One-based line number where parsing stopped.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// A filesystem operation failed.
    #[error("I/O error on `{}`", path.display())]
    Io {
        /// The path being created, written, or read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A configuration document could not be deserialized.
    #[error("invalid fixture configuration")]
    Config(#[from] serde_json::Error),
}

impl FixtureError {
    /// Wraps an I/O error together with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedDump {
            line,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FixtureError>;
