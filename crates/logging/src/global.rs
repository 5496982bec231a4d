//! crates/logging/src/global.rs
//! Process-wide logger shared by the free functions and macros.

use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

use crate::error::LogFileError;
use crate::levels::Severity;
use crate::logger::LevelLogger;
use crate::part::Part;

static GLOBAL: LazyLock<Arc<LevelLogger>> = LazyLock::new(|| Arc::new(LevelLogger::new()));

/// Returns the process-wide logger, created on first use with default settings.
pub fn global() -> &'static LevelLogger {
    &GLOBAL
}

/// Returns a shared handle to the process-wide logger.
pub fn global_handle() -> Arc<LevelLogger> {
    Arc::clone(&GLOBAL)
}

/// Logs at [`Severity::Debug`] through the process-wide logger.
pub fn debug(component: &str, parts: &[Part]) {
    global().debug(component, parts);
}

/// Logs at [`Severity::Warning`] through the process-wide logger.
pub fn warn(component: &str, parts: &[Part]) {
    global().warn(component, parts);
}

/// Logs at [`Severity::Error`] through the process-wide logger.
pub fn error(component: &str, parts: &[Part]) {
    global().error(component, parts);
}

/// Logs at [`Severity::Status`] through the process-wide logger.
pub fn status(component: &str, parts: &[Part]) {
    global().status(component, parts);
}

/// Sets the process-wide threshold.
pub fn set_log_level(threshold: Severity) {
    global().set_log_level(threshold);
}

/// Sets the process-wide threshold from a raw ordinal, warning on unknown values.
pub fn set_log_level_ordinal(ordinal: i32) {
    global().set_log_level_ordinal(ordinal);
}

/// Toggles quiet mode on the process-wide logger.
pub fn set_quiet(quiet: bool) {
    global().set_quiet(quiet);
}

/// Redirects the process-wide logger to `path`, aborting on an unusable path.
///
/// # Panics
///
/// See [`LevelLogger::set_log_file`].
pub fn set_log_file(path: impl AsRef<Path>) {
    global().set_log_file(path);
}

/// Redirects the process-wide logger to `path`, returning failures instead of aborting.
pub fn try_set_log_file(path: impl AsRef<Path>) -> Result<PathBuf, LogFileError> {
    global().try_set_log_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_and_handle_share_one_logger() {
        let handle = global_handle();
        assert!(std::ptr::eq(global(), Arc::as_ptr(&handle)));
    }
}
