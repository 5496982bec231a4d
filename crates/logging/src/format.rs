//! crates/logging/src/format.rs
//! Line layout for verbose and quiet output.

use crate::levels::Severity;
use crate::part::Part;

/// Renders the text of one log line, without timestamp or terminator.
///
/// Verbose layout (`quiet == false`):
///
/// - leading text part: `[LEVEL] (component) <label> <rest...>`
/// - otherwise: `[LEVEL] (component) <parts...>`
///
/// Quiet layout drops the component. [`Severity::Error`] and
/// [`Severity::Warning`] keep their bare name (`LEVEL <parts...>`); status and
/// debug lines carry the parts alone.
///
/// Parts are separated by single spaces. The label keeps its slot even when it
/// is empty, so `("", 42)` renders with two spaces before `42`.
///
/// # Examples
///
/// ```
/// use levellog::{Part, Severity, format_line};
///
/// let parts = [Part::from("conn lost"), Part::from(42)];
/// assert_eq!(
///     format_line(Severity::Warning, false, "Net", &parts),
///     "[WARNING] (Net) conn lost 42"
/// );
/// assert_eq!(
///     format_line(Severity::Warning, true, "Net", &parts),
///     "WARNING conn lost 42"
/// );
/// ```
#[must_use]
pub fn format_line(severity: Severity, quiet: bool, component: &str, parts: &[Part]) -> String {
    let (label, body) = match parts.split_first() {
        Some((first, rest)) if first.is_text() => (Some(first), rest),
        _ => (None, parts),
    };

    let mut line = String::new();
    let mut separate = if quiet {
        if severity.is_urgent() {
            line.push_str(severity.name());
            true
        } else {
            false
        }
    } else {
        line.push('[');
        line.push_str(severity.name());
        line.push_str("] (");
        line.push_str(component);
        line.push(')');
        true
    };

    if let Some(label) = label {
        if separate {
            line.push(' ');
        }
        line.push_str(label.as_str());
        separate = true;
    }

    for part in body {
        if separate {
            line.push(' ');
        }
        line.push_str(part.as_str());
        separate = true;
    }

    line
}
