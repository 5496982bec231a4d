//! crates/logging/src/logger.rs
//! The severity-filtered logger and its sink selection.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use levellog_sink::{LogFile, MessageSink, TimestampMode};

use crate::config::LoggerConfig;
use crate::error::LogFileError;
use crate::format::format_line;
use crate::levels::Severity;
use crate::part::Part;

/// Component used for the logger's own diagnostics.
pub const LOGGER_COMPONENT: &str = "Logger";

/// Component used when a log file path is rejected.
pub const SET_LOG_FILE_COMPONENT: &str = "log.SetLogFile";

type Console = Box<dyn Write + Send>;

/// Severity-filtered logger writing to standard output or a log file.
///
/// All state lives behind one mutex. Each logging call takes the lock, reads
/// the threshold and quiet flag, renders its line and writes it before
/// releasing, so concurrent lines never interleave and a call never observes
/// a half-applied configuration.
///
/// Logging calls cannot fail: write errors are dropped.
///
/// # Examples
///
/// ```
/// use levellog::{LevelLogger, Part, Severity};
///
/// let logger = LevelLogger::with_console(Vec::<u8>::new());
/// logger.set_log_level(Severity::Debug);
/// logger.debug("Net", &[Part::from("handshake"), Part::from(3)]);
/// assert_eq!(logger.threshold(), Severity::Debug);
/// ```
pub struct LevelLogger {
    state: Mutex<LoggerState>,
}

struct LoggerState {
    threshold: Severity,
    quiet: bool,
    console: MessageSink<Console>,
    file: Option<MessageSink<LogFile>>,
}

impl LoggerState {
    fn emit(&mut self, severity: Severity, component: &str, parts: &[Part]) {
        if !self.threshold.allows(severity) {
            return;
        }
        let line = format_line(severity, self.quiet, component, parts);
        let _ = self.write_line(&line);
    }

    fn emit_ordinal(&mut self, ordinal: i32, component: &str, parts: &[Part]) {
        if ordinal > self.threshold.ordinal() {
            return;
        }
        let severity = Severity::from_ordinal(ordinal).unwrap_or_else(|| {
            self.emit(
                Severity::Warning,
                LOGGER_COMPONENT,
                &[Part::text("called with invalid level"), Part::from(ordinal)],
            );
            Severity::Error
        });
        self.emit(severity, component, parts);
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.write_line(line),
            None => self.console.write_line(line),
        }
    }
}

impl LevelLogger {
    /// Creates a logger writing timestamped lines to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_console(io::stdout())
    }

    /// Creates a logger that treats `console` as its standard output.
    ///
    /// The console receives log lines until a log file is configured, and
    /// always receives the confirmation printed when a log file is selected.
    #[must_use]
    pub fn with_console<W>(console: W) -> Self
    where
        W: Write + Send + 'static,
    {
        let console: Console = Box::new(console);
        Self {
            state: Mutex::new(LoggerState {
                threshold: Severity::default(),
                quiet: false,
                console: MessageSink::new(console),
                file: None,
            }),
        }
    }

    /// Creates a standard-output logger and applies `config` to it.
    pub fn from_config(config: &LoggerConfig) -> Result<Self, LogFileError> {
        let logger = Self::new();
        logger.apply_config(config)?;
        Ok(logger)
    }

    /// Applies every field of `config`.
    ///
    /// The log file, when present, is validated and opened like
    /// [`try_set_log_file`](Self::try_set_log_file); its error is returned
    /// instead of aborting.
    pub fn apply_config(&self, config: &LoggerConfig) -> Result<(), LogFileError> {
        self.set_log_level(config.threshold);
        self.set_quiet(config.quiet);
        if let Some(path) = &config.log_file {
            self.try_set_log_file(path)?;
        }
        Ok(())
    }

    /// Returns a snapshot of the current configuration.
    #[must_use]
    pub fn config(&self) -> LoggerConfig {
        let state = self.lock();
        LoggerConfig {
            threshold: state.threshold,
            quiet: state.quiet,
            log_file: state
                .file
                .as_ref()
                .map(|file| file.get_ref().path().to_path_buf()),
        }
    }

    /// Returns the current threshold.
    #[must_use]
    pub fn threshold(&self) -> Severity {
        self.lock().threshold
    }

    /// Reports whether quiet mode is active.
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.lock().quiet
    }

    /// Returns the active log file, if any.
    #[must_use]
    pub fn log_file(&self) -> Option<PathBuf> {
        self.config().log_file
    }

    /// Reports whether a call at `severity` would be emitted.
    #[must_use]
    pub fn enabled(&self, severity: Severity) -> bool {
        self.lock().threshold.allows(severity)
    }

    /// Sets the threshold.
    pub fn set_log_level(&self, threshold: Severity) {
        self.lock().threshold = threshold;
    }

    /// Sets the threshold from a raw ordinal.
    ///
    /// Unknown ordinals leave the threshold unchanged and emit one warning
    /// through the current configuration.
    pub fn set_log_level_ordinal(&self, ordinal: i32) {
        let mut state = self.lock();
        match Severity::from_ordinal(ordinal) {
            Some(threshold) => state.threshold = threshold,
            None => state.emit(
                Severity::Warning,
                LOGGER_COMPONENT,
                &[
                    Part::text("someone tried to set invalid log level"),
                    Part::from(ordinal),
                ],
            ),
        }
    }

    /// Toggles quiet mode.
    ///
    /// Standard output follows the flag: quiet lines carry no timestamp. A log
    /// file keeps its timestamps either way.
    pub fn set_quiet(&self, quiet: bool) {
        let mut state = self.lock();
        state.quiet = quiet;
        state.console.set_timestamp_mode(TimestampMode::from(!quiet));
    }

    /// Redirects output to `path`, returning the resolved absolute path.
    ///
    /// Fatal failures ([`LogFileError::is_fatal`]) are logged at
    /// [`Severity::Error`] before they are returned. An open failure is logged
    /// as a warning; in every failure case the previous destination stays
    /// active. On success `Directing log to <path>.` is written to the console
    /// before the switch.
    pub fn try_set_log_file(&self, path: impl AsRef<Path>) -> Result<PathBuf, LogFileError> {
        let requested = path.as_ref();
        let resolved = match std::path::absolute(requested) {
            Ok(resolved) => resolved,
            Err(source) => {
                return Err(self.reject_log_file(LogFileError::Unresolvable {
                    path: requested.to_path_buf(),
                    source,
                }));
            }
        };

        match fs::metadata(&resolved) {
            Ok(metadata) if metadata.is_dir() => {
                return Err(self.reject_log_file(LogFileError::IsDirectory { path: resolved }));
            }
            Ok(_) => {}
            Err(error) if error.kind() == io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(self.reject_log_file(LogFileError::Stat {
                    path: resolved,
                    source,
                }));
            }
        }

        match LogFile::open_append(&resolved) {
            Ok(file) => {
                let mut state = self.lock();
                let notice = format!("Directing log to {}.", resolved.display());
                let _ = state.console.write_plain_line(&notice);
                state.file = Some(MessageSink::new(file));
                Ok(resolved)
            }
            Err(source) => {
                self.warn(
                    LOGGER_COMPONENT,
                    &[Part::text("failed to open log file"), Part::from(&resolved)],
                );
                Err(LogFileError::Open {
                    path: resolved,
                    source,
                })
            }
        }
    }

    /// Redirects output to `path`, aborting on an unusable path.
    ///
    /// # Panics
    ///
    /// Panics when the path cannot be resolved, names a directory, or cannot
    /// be inspected. The failure is logged at [`Severity::Error`] first. An
    /// open failure only logs a warning and keeps the previous destination.
    pub fn set_log_file(&self, path: impl AsRef<Path>) {
        if let Err(error) = self.try_set_log_file(path)
            && error.is_fatal()
        {
            panic!("{error}");
        }
    }

    /// Logs at [`Severity::Debug`].
    pub fn debug(&self, component: &str, parts: &[Part]) {
        self.log(Severity::Debug, component, parts);
    }

    /// Logs at [`Severity::Warning`].
    pub fn warn(&self, component: &str, parts: &[Part]) {
        self.log(Severity::Warning, component, parts);
    }

    /// Logs at [`Severity::Error`].
    pub fn error(&self, component: &str, parts: &[Part]) {
        self.log(Severity::Error, component, parts);
    }

    /// Logs at [`Severity::Status`].
    pub fn status(&self, component: &str, parts: &[Part]) {
        self.log(Severity::Status, component, parts);
    }

    /// Logs at `severity`.
    pub fn log(&self, severity: Severity, component: &str, parts: &[Part]) {
        self.lock().emit(severity, component, parts);
    }

    /// Logs at a raw ordinal.
    ///
    /// Ordinals more verbose than the threshold are dropped. Any other
    /// ordinal that does not name a severity is rendered as
    /// [`Severity::Error`], preceded by a warning about the invalid level.
    pub fn log_ordinal(&self, ordinal: i32, component: &str, parts: &[Part]) {
        self.lock().emit_ordinal(ordinal, component, parts);
    }

    fn reject_log_file(&self, error: LogFileError) -> LogFileError {
        self.error(SET_LOG_FILE_COMPONENT, &[Part::text(error.to_string())]);
        error
    }

    fn lock(&self) -> MutexGuard<'_, LoggerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LevelLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LevelLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config();
        f.debug_struct("LevelLogger")
            .field("threshold", &config.threshold)
            .field("quiet", &config.quiet)
            .field("log_file", &config.log_file)
            .finish()
    }
}
