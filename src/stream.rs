//! Streaming Span Processing
//!
//! Stateful convenience wrapper over the pure chunk parser. Owns the
//! trailing format between chunks so hosts feeding incremental terminal
//! output do not have to thread it by hand.

use crate::error::Result;
use crate::models::{Format, StyledSpan};
use crate::parser::{parse_chunk, parse_chunk_lossy};

/// Incremental processor for a single logical stream of terminal output.
///
/// Each call consumes one chunk and carries the trailing format into the
/// next call, so formatting opened in one chunk styles content in the
/// following ones. Escape sequences must not be split across chunk
/// boundaries; a split sequence parses as malformed.
///
/// A processor serializes the chunks of one stream. Independent processors
/// share no state, so separate streams can be handled concurrently.
#[derive(Debug, Clone)]
pub struct SpanProcessor {
    /// Trailing format carried between chunks; `None` disables tracking
    format: Option<Format>,

    /// Style applied to content while tracking is disabled
    fallback: Format,
}

impl SpanProcessor {
    /// Create a processor with format tracking enabled, starting from the
    /// all-default format.
    pub fn new() -> Self {
        Self {
            format: Some(Format::default()),
            fallback: Format::default(),
        }
    }

    /// Create a processor with format tracking disabled.
    ///
    /// SGR commands are ignored entirely and every content run is emitted
    /// with the fallback format.
    pub fn untracked() -> Self {
        Self {
            format: None,
            fallback: Format::default(),
        }
    }

    /// Replace the fallback format used for untracked content.
    pub fn with_fallback(mut self, fallback: Format) -> Self {
        self.fallback = fallback;
        self
    }

    /// Process one chunk strictly.
    ///
    /// On a malformed escape sequence the error is returned and the
    /// trailing format is left untouched, so the caller may buffer the
    /// chunk and retry once more data has arrived.
    pub fn process(&mut self, chunk: &str) -> Result<Vec<StyledSpan>> {
        let (format, spans) = parse_chunk(self.format, chunk, &self.fallback)?;
        debug!("processed {} bytes into {} spans", chunk.len(), spans.len());
        self.format = format;
        Ok(spans)
    }

    /// Process one chunk, converting a parse failure into a diagnostic
    /// span instead of an error.
    ///
    /// A failed chunk contributes one span holding the error description
    /// and leaves the trailing format unchanged.
    pub fn process_lossy(&mut self, chunk: &str) -> Vec<StyledSpan> {
        let (format, spans) = parse_chunk_lossy(self.format, chunk, &self.fallback);
        self.format = format;
        spans
    }

    /// The trailing format currently carried by the processor.
    pub fn trailing_format(&self) -> Option<&Format> {
        self.format.as_ref()
    }

    /// Seed the processor with an explicit trailing format, or `None` to
    /// disable tracking from here on.
    pub fn set_format(&mut self, format: Option<Format>) {
        self.format = format;
    }

    /// Drop accumulated formatting, keeping the tracking mode.
    ///
    /// A tracking processor returns to the all-default format; an
    /// untracked one stays untracked.
    pub fn reset(&mut self) {
        self.format = self.format.map(|_| Format::default());
    }
}

impl Default for SpanProcessor {
    fn default() -> Self {
        Self::new()
    }
}
