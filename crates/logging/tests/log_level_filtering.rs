//! Integration tests for severity threshold filtering.
//!
//! These tests verify that a call is emitted exactly when its severity is no
//! more verbose than the logger's threshold, through every entry point.

use levellog::{LevelLogger, Part, Severity};
use test_support::SharedBuffer;

fn quiet_capture(threshold: Severity) -> (LevelLogger, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let logger = LevelLogger::with_console(buffer.clone());
    logger.set_quiet(true);
    logger.set_log_level(threshold);
    (logger, buffer)
}

// ============================================================================
// Threshold Matrix
// ============================================================================

/// Verifies emission for every threshold and call severity pair.
#[test]
fn emits_iff_ordinal_within_threshold() {
    for threshold in Severity::ALL {
        for call in Severity::ALL {
            let (logger, buffer) = quiet_capture(threshold);
            logger.log(call, "Matrix", &[Part::from("probe")]);

            let emitted = !buffer.contents().is_empty();
            assert_eq!(
                emitted,
                call.ordinal() <= threshold.ordinal(),
                "threshold {threshold}, call {call}"
            );
        }
    }
}

/// Verifies the per-severity methods agree with the generic entry point.
#[test]
fn named_methods_follow_threshold() {
    let (logger, buffer) = quiet_capture(Severity::Warning);

    logger.debug("Net", &[Part::from("debug")]);
    logger.status("Net", &[Part::from("status")]);
    logger.warn("Net", &[Part::from("warn")]);
    logger.error("Net", &[Part::from("error")]);

    assert_eq!(buffer.lines(), vec!["WARNING warn", "ERROR error"]);
}

/// Verifies debug calls need a debug threshold.
#[test]
fn debug_requires_debug_threshold() {
    let (logger, buffer) = quiet_capture(Severity::Status);
    levellog::debug!(logger: logger, "Net", "hidden");
    assert!(buffer.contents().is_empty());

    logger.set_log_level(Severity::Debug);
    levellog::debug!(logger: logger, "Net", "shown");
    assert_eq!(buffer.lines(), vec!["shown"]);
}

/// Verifies errors are emitted at the strictest threshold.
#[test]
fn error_always_emits() {
    let (logger, buffer) = quiet_capture(Severity::Error);
    levellog::warn!(logger: logger, "Net", "hidden");
    levellog::status!(logger: logger, "Net", "hidden");
    levellog::error!(logger: logger, "Net", "shown");
    assert_eq!(buffer.lines(), vec!["ERROR shown"]);
}

// ============================================================================
// Threshold Changes
// ============================================================================

/// Verifies a lowered threshold applies to the next call.
#[test]
fn threshold_change_applies_immediately() {
    let (logger, buffer) = quiet_capture(Severity::Debug);
    levellog::debug!(logger: logger, "Net", "one");
    logger.set_log_level(Severity::Error);
    levellog::debug!(logger: logger, "Net", "two");
    assert_eq!(buffer.lines(), vec!["one"]);
}

/// Verifies an invalid ordinal never changes the threshold and warns exactly once.
#[test]
fn invalid_ordinal_is_rejected_with_one_warning() {
    for invalid in [-1, 4, 100, i32::MIN, i32::MAX] {
        let (logger, buffer) = quiet_capture(Severity::Debug);
        logger.set_log_level_ordinal(invalid);

        assert_eq!(logger.threshold(), Severity::Debug);
        let lines = buffer.lines();
        assert_eq!(lines.len(), 1, "ordinal {invalid}");
        assert_eq!(
            lines[0],
            format!("WARNING someone tried to set invalid log level {invalid}")
        );
    }
}

/// Verifies every valid ordinal is accepted silently.
#[test]
fn valid_ordinals_are_accepted() {
    for severity in Severity::ALL {
        let (logger, buffer) = quiet_capture(Severity::Status);
        logger.set_log_level_ordinal(severity.ordinal());
        assert_eq!(logger.threshold(), severity);
        assert!(buffer.contents().is_empty());
    }
}
