//! ANSI Escape Sequence Parsing
//!
//! Tokenization of raw terminal text and the fold that pairs content runs
//! with the format in effect when they appeared.

pub mod interpreter;
pub mod tokenizer;

pub use interpreter::{apply_tokens, parse_chunk, parse_chunk_lossy};
pub use tokenizer::{tokenize, AnsiToken};
