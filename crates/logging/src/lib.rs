#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `levellog` provides severity-filtered, component-tagged logging. Calls
//! name a component and pass a list of message [`Part`]s; lines at or above
//! the configured [`Severity`] threshold are rendered and written to standard
//! output or, after [`LevelLogger::set_log_file`], appended to a file.
//!
//! # Design
//!
//! [`LevelLogger`] owns its threshold, quiet flag and sink behind a single
//! mutex. The process-wide instance returned by [`global`] backs the free
//! functions ([`status()`], [`warn()`], …) and the [`status!`], [`warn!`],
//! [`error!`] and [`debug!`] macros; tests and embedders can build private
//! loggers with [`LevelLogger::with_console`].
//!
//! Line layout lives in [`format_line`]. Output plumbing (timestamps, the
//! append-mode file) lives in the `levellog-sink` crate.
//!
//! # Invariants
//!
//! - A call at severity `S` is emitted iff `S.ordinal() <= threshold.ordinal()`;
//!   [`Severity::Error`] is always emitted.
//! - Each emitted line is written with one `write_all` under the logger's
//!   lock, so concurrent lines never interleave.
//! - Quiet mode removes timestamps from standard output only; a log file is
//!   always timestamped.
//! - The logger's own warnings use a fixed valid severity and are emitted
//!   under the lock already held, so they cannot recurse or deadlock.
//!
//! # Errors
//!
//! Logging calls never fail. [`LevelLogger::try_set_log_file`] returns
//! [`LogFileError`]; [`LevelLogger::set_log_file`] panics on the fatal
//! variants after logging them.
//!
//! # Examples
//!
//! ```
//! use levellog::{LevelLogger, Part, Severity};
//!
//! let logger = LevelLogger::with_console(Vec::<u8>::new());
//! logger.set_quiet(true);
//! logger.set_log_level(Severity::Warning);
//!
//! logger.warn("Net", &[Part::from("conn lost"), Part::from(42)]);
//! levellog::warn!(logger: logger, "Net", "conn lost", 42);
//! levellog::debug!(logger: logger, "Net", "dropped");
//! ```

mod config;
mod error;
mod format;
mod global;
mod levels;
mod logger;
mod macros;
mod part;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::LoggerConfig;
pub use error::{InvalidSeverity, LogFileError, ParseSeverityError};
pub use format::format_line;
pub use global::{
    debug, error, global, global_handle, set_log_file, set_log_level, set_log_level_ordinal,
    set_quiet, status, try_set_log_file, warn,
};
pub use levels::Severity;
pub use logger::{LOGGER_COMPONENT, LevelLogger, SET_LOG_FILE_COMPONENT};
pub use part::Part;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LevelLoggerLayer, init_tracing, init_tracing_with_filter};
