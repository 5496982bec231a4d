//! crates/logging/src/macros.rs
//! Variadic logging macros.
//!
//! Each macro takes a component followed by any number of parts convertible
//! into [`Part`](crate::Part). Without a `logger:` argument the process-wide
//! logger is used.

/// Log at [`Severity::Debug`](crate::Severity::Debug).
///
/// # Example
/// ```
/// let attempts = 3;
/// levellog::debug!("Net", "handshake", attempts);
/// ```
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $component:expr $(, $part:expr)* $(,)?) => {
        $logger.debug($component, &[$($crate::Part::from($part)),*])
    };
    ($component:expr $(, $part:expr)* $(,)?) => {
        $crate::global().debug($component, &[$($crate::Part::from($part)),*])
    };
}

/// Log at [`Severity::Warning`](crate::Severity::Warning).
///
/// # Example
/// ```
/// levellog::warn!("Net", "conn lost", 42);
/// ```
#[macro_export]
macro_rules! warn {
    (logger: $logger:expr, $component:expr $(, $part:expr)* $(,)?) => {
        $logger.warn($component, &[$($crate::Part::from($part)),*])
    };
    ($component:expr $(, $part:expr)* $(,)?) => {
        $crate::global().warn($component, &[$($crate::Part::from($part)),*])
    };
}

/// Log at [`Severity::Error`](crate::Severity::Error).
///
/// # Example
/// ```
/// levellog::error!("Disk", "write failed", std::io::Error::other("full"));
/// ```
#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $component:expr $(, $part:expr)* $(,)?) => {
        $logger.error($component, &[$($crate::Part::from($part)),*])
    };
    ($component:expr $(, $part:expr)* $(,)?) => {
        $crate::global().error($component, &[$($crate::Part::from($part)),*])
    };
}

/// Log at [`Severity::Status`](crate::Severity::Status).
///
/// # Example
/// ```
/// levellog::status!("Main", "ready");
/// ```
#[macro_export]
macro_rules! status {
    (logger: $logger:expr, $component:expr $(, $part:expr)* $(,)?) => {
        $logger.status($component, &[$($crate::Part::from($part)),*])
    };
    ($component:expr $(, $part:expr)* $(,)?) => {
        $crate::global().status($component, &[$($crate::Part::from($part)),*])
    };
}
