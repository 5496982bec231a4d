//! crates/logging/src/config.rs
//! Snapshot of a logger's configuration.

use std::path::PathBuf;

use crate::levels::Severity;

/// Threshold, quiet flag and destination of a [`LevelLogger`](crate::LevelLogger).
///
/// The struct is a plain value: build one to configure a logger through
/// [`LevelLogger::from_config`](crate::LevelLogger::from_config), or read the
/// current state back with [`LevelLogger::config`](crate::LevelLogger::config).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Most verbose severity that is emitted.
    pub threshold: Severity,
    /// Suppress component tags, and timestamps on standard output.
    pub quiet: bool,
    /// Absolute path of the log file, or `None` for standard output.
    pub log_file: Option<PathBuf>,
}

impl LoggerConfig {
    /// Returns the configuration with `threshold` replaced.
    pub fn with_threshold(mut self, threshold: Severity) -> Self {
        self.threshold = threshold;
        self
    }

    /// Returns the configuration with the quiet flag replaced.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Returns the configuration redirected to `path`.
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }
}
