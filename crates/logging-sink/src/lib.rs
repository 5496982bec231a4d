#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `levellog-sink` provides the output side of the `levellog` workspace: a
//! line-oriented [`MessageSink`] that prefixes each line with a wall-clock
//! timestamp when asked to, and the append-mode [`LogFile`] writer used when
//! diagnostics are redirected away from standard output.
//!
//! # Design
//!
//! [`MessageSink`] is a lightweight wrapper around an [`std::io::Write`]
//! implementor. Each sink stores a scratch [`String`] that is reused whenever
//! a line is rendered, so the timestamp, the message and the newline reach
//! the writer through a single `write_all` call. Callers control the prefix
//! with a [`TimestampMode`].
//!
//! # Invariants
//!
//! - One call to [`MessageSink::write_line`] issues exactly one `write_all`
//!   followed by a flush. Serialising access to the sink (for example behind a
//!   mutex) is therefore enough to keep concurrent lines from interleaving.
//! - Timestamps use the `YYYY/MM/DD HH:MM:SS` layout in the host's local time
//!   zone, falling back to UTC when the offset cannot be determined.
//! - [`LogFile`] never truncates: existing content is preserved and new lines
//!   are appended.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! underlying writer or from opening the log file.
//!
//! # Examples
//!
//! ```
//! use levellog_sink::{MessageSink, TimestampMode};
//!
//! let mut sink = MessageSink::new(Vec::new());
//! sink.set_timestamp_mode(TimestampMode::Plain);
//! sink.write_line("[STATUS] (Net) ready").unwrap();
//!
//! assert_eq!(sink.into_inner(), b"[STATUS] (Net) ready\n".to_vec());
//! ```

mod log_file;
mod sink;
mod timestamp;

pub use log_file::LogFile;
pub use sink::MessageSink;
pub use timestamp::{TimestampMode, format_timestamp, local_now};
