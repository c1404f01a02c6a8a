//! SGR Format Interpreter
//!
//! Folds token streams into styled spans, threading the current format
//! through so chunked input can be processed incrementally.

use crate::error::Result;
use crate::models::{Format, StyledSpan};

use super::tokenizer::{tokenize, AnsiToken};

/// Fold `tokens` left to right against the current format.
///
/// `format` is the trailing format of the previous chunk, or `None` when
/// format tracking is disabled for this call. While tracking, SGR tokens
/// update the current format (each code seeing the result of the previous)
/// and content runs are paired with the format active at that point. With
/// tracking disabled, SGR tokens are ignored entirely and content runs are
/// paired with `fallback`.
///
/// Returns the trailing format to seed the next call with, plus the spans
/// in input order. Processing chunk N+1 with the format returned from
/// chunk N is equivalent to processing the concatenation in one call, as
/// long as no escape sequence was split across the boundary.
pub fn apply_tokens(
    format: Option<Format>,
    tokens: Vec<AnsiToken>,
    fallback: &Format,
) -> (Option<Format>, Vec<StyledSpan>) {
    let mut current = format;
    let mut spans = Vec::new();

    for token in tokens {
        match token {
            AnsiToken::Sgr(codes) => {
                if let Some(active) = current {
                    current = Some(active.apply_all(codes));
                }
            }
            AnsiToken::Content(text) => {
                let style = current.unwrap_or(*fallback);
                spans.push(StyledSpan::new(style, text));
            }
        }
    }

    (current, spans)
}

/// Tokenize `input` and fold it in one call.
///
/// Strict mode: a malformed escape sequence surfaces the parse error and
/// contributes no spans.
pub fn parse_chunk(
    format: Option<Format>,
    input: &str,
    fallback: &Format,
) -> Result<(Option<Format>, Vec<StyledSpan>)> {
    let tokens = tokenize(input)?;
    Ok(apply_tokens(format, tokens, fallback))
}

/// Like [`parse_chunk`], but a malformed chunk never fails the call.
///
/// On a parse error the chunk contributes a single span holding the error
/// description, styled with `fallback`, and the trailing format comes back
/// unchanged so the stream can continue.
pub fn parse_chunk_lossy(
    format: Option<Format>,
    input: &str,
    fallback: &Format,
) -> (Option<Format>, Vec<StyledSpan>) {
    match parse_chunk(format, input, fallback) {
        Ok(outcome) => outcome,
        Err(err) => {
            warn!("replacing malformed chunk with diagnostic: {}", err);
            (format, vec![StyledSpan::new(*fallback, err.to_string())])
        }
    }
}
