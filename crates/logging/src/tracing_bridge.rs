//! crates/logging/src/tracing_bridge.rs
//! Bridge from the tracing crate into a [`LevelLogger`].
//!
//! [`LevelLoggerLayer`] is a tracing-subscriber layer that renders each event
//! through a [`LevelLogger`], so code instrumented with the standard tracing
//! macros shares the logger's threshold, quiet mode and destination.
//!
//! # Mapping
//!
//! - `ERROR` → [`Severity::Error`], `WARN` → [`Severity::Warning`],
//!   `INFO` → [`Severity::Status`], `DEBUG`/`TRACE` → [`Severity::Debug`]
//! - the event target becomes the component
//! - the `message` field becomes the leading text part
//! - every other field becomes a `name=value` part
//!
//! # Usage
//!
//! ```rust,ignore
//! use levellog::init_tracing;
//!
//! init_tracing(levellog::global_handle());
//! tracing::warn!(target: "Net", retries = 3, "conn lost");
//! ```

use std::fmt::{self, Write as _};
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::levels::Severity;
use crate::logger::LevelLogger;
use crate::part::Part;

/// A tracing layer that writes events through a [`LevelLogger`].
pub struct LevelLoggerLayer {
    logger: Arc<LevelLogger>,
}

impl LevelLoggerLayer {
    /// Creates a layer forwarding into `logger`.
    #[must_use]
    pub const fn new(logger: Arc<LevelLogger>) -> Self {
        Self { logger }
    }

    /// Map a tracing level to a severity.
    const fn severity_for(level: &Level) -> Severity {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warning,
            Level::INFO => Severity::Status,
            Level::DEBUG | Level::TRACE => Severity::Debug,
        }
    }
}

impl<S> Layer<S> for LevelLoggerLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let severity = Self::severity_for(metadata.level());
        if !self.logger.enabled(severity) {
            return;
        }

        let mut visitor = PartVisitor::default();
        event.record(&mut visitor);
        self.logger
            .log(severity, metadata.target(), &visitor.into_parts());
    }
}

/// Collects event fields into message parts.
#[derive(Default)]
struct PartVisitor {
    message: Option<String>,
    fields: Vec<Part>,
}

impl PartVisitor {
    fn into_parts(self) -> Vec<Part> {
        let mut parts = Vec::with_capacity(self.fields.len() + 1);
        if let Some(message) = self.message {
            parts.push(Part::Text(message));
        }
        parts.extend(self.fields);
        parts
    }

    fn push_field(&mut self, field: &Field, value: fmt::Arguments<'_>) {
        let mut rendered = String::new();
        let _ = write!(rendered, "{}={value}", field.name());
        self.fields.push(Part::Value(rendered));
    }
}

impl Visit for PartVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            self.push_field(field, format_args!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        } else {
            self.push_field(field, format_args!("{value}"));
        }
    }
}

/// Installs a global tracing subscriber that forwards into `logger`.
pub fn init_tracing(logger: Arc<LevelLogger>) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LevelLoggerLayer::new(logger))
        .init();
}

/// Installs a global tracing subscriber combining `filter` with the logger bridge.
///
/// # Example
///
/// ```rust,ignore
/// use levellog::init_tracing_with_filter;
/// use tracing_subscriber::filter::LevelFilter;
///
/// init_tracing_with_filter(levellog::global_handle(), LevelFilter::WARN);
/// ```
pub fn init_tracing_with_filter<F>(logger: Arc<LevelLogger>, filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(LevelLoggerLayer::new(logger))
        .init();
}
