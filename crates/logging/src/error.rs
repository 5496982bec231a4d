//! crates/logging/src/error.rs
//! Error types for logger configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// An ordinal that does not name one of the four severities.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("invalid log level {0}")]
pub struct InvalidSeverity(pub i32);

/// A severity name that could not be parsed.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognised log level '{input}'; expected error, warning, status or debug")]
pub struct ParseSeverityError {
    input: String,
}

impl ParseSeverityError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Failure to redirect the logger to a file.
#[derive(Debug, Error)]
pub enum LogFileError {
    /// The path could not be made absolute.
    #[error("log file '{}' does not resolve: {source}", path.display())]
    Unresolvable {
        /// Path as supplied by the caller.
        path: PathBuf,
        /// Underlying resolution failure.
        #[source]
        source: io::Error,
    },
    /// An entry exists at the path and it is a directory.
    #[error("log file '{}' is a directory", path.display())]
    IsDirectory {
        /// Absolute path that was checked.
        path: PathBuf,
    },
    /// Inspecting the path failed for a reason other than absence.
    #[error("log file '{}' does not stat: {source}", path.display())]
    Stat {
        /// Absolute path that was checked.
        path: PathBuf,
        /// Underlying stat failure.
        #[source]
        source: io::Error,
    },
    /// The path passed validation but could not be opened for appending.
    #[error("failed to open log file '{}': {source}", path.display())]
    Open {
        /// Absolute path that was opened.
        path: PathBuf,
        /// Underlying open failure.
        #[source]
        source: io::Error,
    },
}

impl LogFileError {
    /// Reports whether the failure makes the requested destination unusable.
    ///
    /// Only [`LogFileError::Open`] is recoverable; the logger keeps its
    /// previous sink in that case.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::Open { .. })
    }
}
