//! Lexical analysis error types.
//!
//! This module defines [`LexError`], which represents errors that can occur
//! during tokenization.

use crate::token::Span;

/// The kind of a lexical error, for structured matching in tests and
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A string literal was opened but its closing quote never appeared.
    UnterminatedString,
}

/// An error that occurred during lexical analysis.
///
/// `LexError` contains a human-readable message and the source location
/// where the error occurred, enabling rich error reporting with tools
/// like [`ariadne`].
///
/// Unrecognized characters do not produce a `LexError`: the lexer emits an
/// [`Invalid`](crate::token::TokenKind::Invalid) token and the parser
/// rejects it.
///
/// [`ariadne`]: https://docs.rs/ariadne
#[derive(Debug)]
pub struct LexError {
    kind: LexErrorKind,
    message: String,
    span: Span,
}

impl LexError {
    /// Creates an unterminated-string error spanning from the opening
    /// quote to the end of the scanned text.
    pub(super) fn unterminated_string(span: Span) -> Self {
        LexError {
            kind: LexErrorKind::UnterminatedString,
            message: "Unterminated string literal".to_string(),
            span,
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> LexErrorKind {
        self.kind
    }

    /// Returns the detailed error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns a short title for this error, used in report headers.
    pub fn short_message(&self) -> &'static str {
        match self.kind {
            LexErrorKind::UnterminatedString => "Unterminated string",
        }
    }

    /// Returns the source location where the error occurred.
    pub fn span(&self) -> Span {
        self.span
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for LexError {}
