//! Styled Span Model
//!
//! The ordered output unit handed to a rendering layer: a run of text
//! paired with the format that was in effect when it was emitted.

use serde::{Deserialize, Serialize};

use super::style::Format;

/// A run of text with the formatting active at that point of the stream.
///
/// Spans are produced fresh per parse call and carry no identity of their
/// own; rendering each `(format, text)` pair in order reproduces the
/// styled output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledSpan {
    /// Formatting for the text
    pub format: Format,

    /// The literal text content
    pub text: String,
}

impl StyledSpan {
    /// Create a new span
    pub fn new(format: Format, text: String) -> Self {
        Self { format, text }
    }

    /// Create a span carrying the all-default format
    pub fn plain(text: String) -> Self {
        Self::new(Format::default(), text)
    }

    /// Whether the span carries any non-default formatting
    pub fn is_plain(&self) -> bool {
        self.format == Format::default()
    }
}

impl From<String> for StyledSpan {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}

impl From<&str> for StyledSpan {
    fn from(text: &str) -> Self {
        Self::plain(text.to_string())
    }
}
