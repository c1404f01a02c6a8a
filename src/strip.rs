//! Plain Text Extraction
//!
//! Helpers for removing SGR escape sequences from terminal output when
//! only the literal text is wanted.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;
use crate::parser::{tokenize, AnsiToken};

/// Matches one `ESC [ ... m` shaped substring, including the
/// empty-parameter form
static SGR_SEQUENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("SGR pattern compiles"));

/// Extract the literal text of `input`, validating the escape grammar.
///
/// Concatenates the content runs of a successful parse; a malformed escape
/// sequence surfaces the positioned parse error instead.
pub fn plain_text(input: &str) -> Result<String> {
    let mut text = String::with_capacity(input.len());
    for token in tokenize(input)? {
        if let AnsiToken::Content(run) = token {
            text.push_str(&run);
        }
    }
    Ok(text)
}

/// Remove every `ESC [ ... m` shaped substring from `input` without
/// validating the rest.
///
/// Malformed escapes and non-SGR control sequences are left in place, so
/// this never fails. Use [`plain_text`] when the input must conform to the
/// grammar.
pub fn strip_sgr(input: &str) -> String {
    SGR_SEQUENCE.replace_all(input, "").into_owned()
}
