//! crates/logging/src/levels.rs
//! Severity levels and threshold comparisons.

use std::fmt;
use std::str::FromStr;

use crate::error::{InvalidSeverity, ParseSeverityError};

/// Severity of a log call, ordered from most urgent to most verbose.
///
/// The ordinal doubles as the threshold scale: a threshold admits every
/// severity whose ordinal is less than or equal to its own.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[repr(i32)]
pub enum Severity {
    /// Failures; always emitted.
    Error = 0,
    /// Recoverable problems.
    Warning = 1,
    /// Progress and state changes. The default threshold.
    #[default]
    Status = 2,
    /// Developer diagnostics.
    Debug = 3,
}

impl Severity {
    /// Every valid severity in ordinal order.
    pub const ALL: [Self; 4] = [Self::Error, Self::Warning, Self::Status, Self::Debug];

    /// Returns the numeric ordinal (`ERROR` = 0 … `DEBUG` = 3).
    #[must_use]
    pub const fn ordinal(self) -> i32 {
        self as i32
    }

    /// Maps an ordinal back to a severity, returning `None` for unknown values.
    #[must_use]
    pub const fn from_ordinal(ordinal: i32) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Error),
            1 => Some(Self::Warning),
            2 => Some(Self::Status),
            3 => Some(Self::Debug),
            _ => None,
        }
    }

    /// Upper-case name used in rendered lines.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Status => "STATUS",
            Self::Debug => "DEBUG",
        }
    }

    /// Reports whether a call at `severity` passes when `self` is the threshold.
    ///
    /// ```
    /// use levellog::Severity;
    ///
    /// assert!(Severity::Warning.allows(Severity::Error));
    /// assert!(!Severity::Warning.allows(Severity::Debug));
    /// ```
    #[must_use]
    pub const fn allows(self, severity: Self) -> bool {
        severity.ordinal() <= self.ordinal()
    }

    /// Severities more urgent than [`Severity::Status`] keep their name in quiet mode.
    #[must_use]
    pub const fn is_urgent(self) -> bool {
        self.ordinal() < Self::Status.ordinal()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("warn") {
            return Ok(Self::Warning);
        }
        Self::ALL
            .into_iter()
            .find(|severity| trimmed.eq_ignore_ascii_case(severity.name()))
            .ok_or_else(|| ParseSeverityError::new(s))
    }
}

impl TryFrom<i32> for Severity {
    type Error = InvalidSeverity;

    fn try_from(ordinal: i32) -> Result<Self, InvalidSeverity> {
        Self::from_ordinal(ordinal).ok_or(InvalidSeverity(ordinal))
    }
}

impl From<Severity> for i32 {
    fn from(severity: Severity) -> Self {
        severity.ordinal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_follow_verbosity() {
        assert_eq!(Severity::Error.ordinal(), 0);
        assert_eq!(Severity::Warning.ordinal(), 1);
        assert_eq!(Severity::Status.ordinal(), 2);
        assert_eq!(Severity::Debug.ordinal(), 3);
        assert!(Severity::Error < Severity::Debug);
    }

    #[test]
    fn from_ordinal_rejects_unknown_values() {
        for severity in Severity::ALL {
            assert_eq!(Severity::from_ordinal(severity.ordinal()), Some(severity));
        }
        assert_eq!(Severity::from_ordinal(-1), None);
        assert_eq!(Severity::from_ordinal(4), None);
        assert_eq!(Severity::try_from(9), Err(InvalidSeverity(9)));
    }

    #[test]
    fn try_from_agrees_with_from_ordinal() {
        for severity in Severity::ALL {
            assert_eq!(Severity::try_from(severity.ordinal()), Ok(severity));
            assert_eq!(i32::from(severity), severity.ordinal());
        }
        let parsed: Result<Severity, _> = (-1_i32).try_into();
        assert_eq!(parsed, Err(InvalidSeverity(-1)));
    }

    #[test]
    fn threshold_admits_equal_or_more_urgent() {
        for threshold in Severity::ALL {
            for call in Severity::ALL {
                assert_eq!(
                    threshold.allows(call),
                    call.ordinal() <= threshold.ordinal(),
                    "threshold {threshold} call {call}"
                );
            }
            assert!(threshold.allows(Severity::Error));
        }
    }

    #[test]
    fn urgency_splits_at_status() {
        assert!(Severity::Error.is_urgent());
        assert!(Severity::Warning.is_urgent());
        assert!(!Severity::Status.is_urgent());
        assert!(!Severity::Debug.is_urgent());
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("error".parse::<Severity>(), Ok(Severity::Error));
        assert_eq!("WARNING".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!(" warn ".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("Status".parse::<Severity>(), Ok(Severity::Status));
        assert_eq!("debug".parse::<Severity>(), Ok(Severity::Debug));
        assert!("verbose".parse::<Severity>().is_err());
    }

    #[test]
    fn default_is_status() {
        assert_eq!(Severity::default(), Severity::Status);
    }
}
