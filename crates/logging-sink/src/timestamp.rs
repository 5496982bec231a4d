//! crates/logging-sink/src/timestamp.rs
//! Wall-clock prefixes for rendered lines.

use time::OffsetDateTime;
use time::macros::format_description;

/// Placeholder written when a timestamp cannot be formatted.
const FALLBACK_TIMESTAMP: &str = "1970/01/01 00:00:00";

/// Controls whether a [`MessageSink`](crate::MessageSink) prefixes lines with a timestamp.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TimestampMode {
    /// Prefix each line with `YYYY/MM/DD HH:MM:SS ` in local time.
    #[default]
    Timestamped,
    /// Write lines verbatim.
    Plain,
}

impl TimestampMode {
    /// Reports whether the mode prefixes lines with a timestamp.
    #[must_use]
    pub const fn is_timestamped(self) -> bool {
        matches!(self, Self::Timestamped)
    }
}

impl From<bool> for TimestampMode {
    fn from(timestamped: bool) -> Self {
        if timestamped {
            Self::Timestamped
        } else {
            Self::Plain
        }
    }
}

/// Returns the current wall-clock time in the host's local time zone.
///
/// The local offset is unavailable on some platforms once the process has
/// spawned threads; UTC is used in that case.
#[must_use]
pub fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Formats `at` as `YYYY/MM/DD HH:MM:SS`.
///
/// # Examples
///
/// ```
/// use levellog_sink::format_timestamp;
/// use time::macros::datetime;
///
/// assert_eq!(
///     format_timestamp(datetime!(2009-01-23 01:23:23 UTC)),
///     "2009/01/23 01:23:23"
/// );
/// ```
#[must_use]
pub fn format_timestamp(at: OffsetDateTime) -> String {
    at.format(format_description!(
        "[year]/[month padding:zero]/[day padding:zero] [hour padding:zero]:[minute padding:zero]:[second padding:zero]"
    ))
    .unwrap_or_else(|_| FALLBACK_TIMESTAMP.to_string())
}
