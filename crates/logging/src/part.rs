//! crates/logging/src/part.rs
//! Message parts passed to the logging calls.

use std::borrow::Cow;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::levels::Severity;

/// One element of a log call's message.
///
/// Text parts and non-text values render identically, but the kind of the
/// first part decides the line layout: a leading [`Part::Text`] becomes the
/// line's label, while a leading [`Part::Value`] leaves the line unlabelled.
/// See [`format_line`](crate::format_line).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Part {
    /// Text supplied by the caller.
    Text(String),
    /// Any other value, captured through its [`Display`](fmt::Display) rendering.
    Value(String),
}

impl Part {
    /// Creates a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Captures a non-text value through its [`Display`](fmt::Display) rendering.
    pub fn value(value: impl fmt::Display) -> Self {
        Self::Value(value.to_string())
    }

    /// Reports whether the part was supplied as text.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Returns the rendered form of the part.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) | Self::Value(text) => text,
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Part {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Part {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for Part {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<Cow<'_, str>> for Part {
    fn from(text: Cow<'_, str>) -> Self {
        Self::Text(text.into_owned())
    }
}

impl From<fmt::Arguments<'_>> for Part {
    fn from(args: fmt::Arguments<'_>) -> Self {
        Self::Text(args.to_string())
    }
}

macro_rules! value_parts {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Part {
                fn from(value: $ty) -> Self {
                    Self::value(value)
                }
            }
        )*
    };
}

value_parts!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
    Severity,
);

impl From<&Path> for Part {
    fn from(path: &Path) -> Self {
        Self::value(path.display())
    }
}

impl From<&PathBuf> for Part {
    fn from(path: &PathBuf) -> Self {
        Self::value(path.display())
    }
}

impl From<PathBuf> for Part {
    fn from(path: PathBuf) -> Self {
        Self::value(path.display())
    }
}

impl From<&io::Error> for Part {
    fn from(error: &io::Error) -> Self {
        Self::value(error)
    }
}

impl From<io::Error> for Part {
    fn from(error: io::Error) -> Self {
        Self::value(error)
    }
}
