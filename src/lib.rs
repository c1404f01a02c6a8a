//! TermSpan - streaming ANSI SGR parser producing styled text spans
//!
//! This library converts terminal output containing ANSI SGR (Select
//! Graphic Rendition) escape sequences into an ordered list of styled
//! spans, ready for a presentation layer to render as markup.
//!
//! ## Features
//!
//! - **SGR Parsing:** The `ESC [ params m` grammar, with positioned errors
//!   for malformed sequences
//! - **Format Tracking:** Colors, bold, italic, underline, strikethrough,
//!   blink and reverse accumulated across spans and across chunks
//! - **Streaming:** The trailing format of each chunk seeds the next, so
//!   incrementally arriving output styles correctly
//! - **Strict and Lossy Modes:** Surface a parse error, or convert it into
//!   a displayable diagnostic span and keep going
//! - **Plain-Text Extraction:** Strip SGR sequences when only the literal
//!   text is wanted
//!
//! ## Module Organization
//!
//! - [`models`] - Data structures (Color, Format, StyledSpan)
//! - [`parser`] - Tokenizer and the SGR format interpreter
//! - [`stream`] - Stateful per-stream processing
//! - [`strip`] - Plain-text extraction utilities
//! - [`mod@error`] - Error types and Result alias
//!
//! ## Quick Start
//!
//! ```
//! use termspan::SpanProcessor;
//!
//! let mut processor = SpanProcessor::new();
//! let spans = processor.process("\x1b[31mwarning:\x1b[0m disk is full")?;
//!
//! assert_eq!(spans.len(), 2);
//! assert_eq!(spans[0].text, "warning:");
//! assert_eq!(spans[1].text, " disk is full");
//! # Ok::<(), termspan::Error>(())
//! ```
//!
//! Chunked input threads the format automatically:
//!
//! ```
//! use termspan::{Color, SpanProcessor};
//!
//! let mut processor = SpanProcessor::new();
//! processor.process("\x1b[32m")?;
//! let spans = processor.process("still green")?;
//!
//! assert_eq!(spans[0].format.foreground, Color::Green);
//! # Ok::<(), termspan::Error>(())
//! ```
//!
//! ## Scope
//!
//! Only SGR sequences are interpreted. Other ANSI commands (cursor
//! movement, screen clearing, OSC titles) are not recognized by the
//! grammar; the extended-color introducers 38 and 48 are accepted but
//! their sub-parameters are not interpreted. Splitting an escape sequence
//! across two chunks is unsupported and parses as malformed.

#[macro_use]
extern crate tracing;

pub mod error;
pub mod models;
pub mod parser;
pub mod stream;
pub mod strip;

// Re-exports for core functionality
pub use error::{Error, Result};
pub use models::{Color, Format, StyledSpan};
pub use parser::{apply_tokens, parse_chunk, parse_chunk_lossy, tokenize, AnsiToken};
pub use stream::SpanProcessor;
pub use strip::{plain_text, strip_sgr};

// Version information
/// The current version of TermSpan from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The crate name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");
