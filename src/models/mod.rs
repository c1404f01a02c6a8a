//! Core data models for TermSpan
//!
//! This module contains the data structures that represent styled
//! terminal output: colors, the format value that SGR codes fold into,
//! and the styled span handed to a rendering layer.

pub mod span;
pub mod style;

// Re-exports for convenience
pub use span::StyledSpan;
pub use style::{Color, Format};
