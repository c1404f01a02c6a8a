//! Error types and Result alias for TermSpan

/// Result type alias for TermSpan operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while scanning ANSI escape sequences.
///
/// Unrecognized SGR codes are never an error; they fold as no-ops. The only
/// failure mode is an escape byte that does not open a well-formed
/// `[ INT (';' INT)* m` body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An escape byte was not followed by a valid SGR sequence
    #[error("malformed escape sequence at byte {offset} (line {line}, column {column}): expected {expected}, found {found}")]
    MalformedEscape {
        /// Byte offset into the input where scanning failed
        offset: usize,
        /// 1-based line of the failure
        line: usize,
        /// 1-based column, counted in characters since the last newline
        column: usize,
        /// Token shape the scanner was looking for
        expected: &'static str,
        /// Rendered description of what was found instead
        found: String,
    },
}

impl Error {
    /// Build a malformed-escape error for a failure at `offset` in `input`.
    ///
    /// `offset` must lie on a character boundary; the scanner only fails
    /// immediately after single-byte ASCII.
    pub(crate) fn malformed_escape(input: &str, offset: usize, expected: &'static str) -> Self {
        let prefix = &input[..offset];
        let line = prefix.matches('\n').count() + 1;
        let column = prefix.chars().rev().take_while(|&c| c != '\n').count() + 1;
        let found = match input[offset..].chars().next() {
            Some(ch) => format!("{:?}", ch),
            None => "end of input".to_string(),
        };

        Error::MalformedEscape {
            offset,
            line,
            column,
            expected,
            found,
        }
    }

    /// Byte offset into the input where the parse failed.
    pub fn offset(&self) -> usize {
        match self {
            Error::MalformedEscape { offset, .. } => *offset,
        }
    }
}
