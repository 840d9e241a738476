//! Parse error types.

use crate::token::Span;

/// The kind of a parse error, for structured matching in tests and
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The parser expected one token kind/value and found another.
    UnexpectedToken,
    /// The lexer produced an `Invalid` token for an unrecognized character.
    InvalidToken,
    /// A struct field was declared without a type annotation.
    MissingFieldType,
    /// An integer literal did not fit in the 64-bit signed range.
    IntLiteralOutOfRange,
}

/// An error that occurred during parsing.
///
/// `ParseError` contains a human-readable message describing the expected
/// and observed tokens, and the source location where the error occurred.
///
/// # See Also
///
/// * [`crate::lexer::LexError`] - Similar error type for lexical errors
#[derive(Debug)]
pub struct ParseError {
    kind: ParseErrorKind,
    message: String,
    span: Span,
}

impl ParseError {
    /// Creates an expected-vs-found error.
    pub(super) fn unexpected(expected: &str, found: &str, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::UnexpectedToken,
            message: format!("Expected {}, found {}", expected, found),
            span,
        }
    }

    /// Creates an error for an `Invalid` token produced by the lexer.
    pub(super) fn invalid_token(c: char, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::InvalidToken,
            message: format!("Invalid character '{}' in input", c),
            span,
        }
    }

    /// Creates an error for a struct field without a type annotation.
    pub(super) fn missing_field_type(field: &str, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::MissingFieldType,
            message: format!("Struct field '{}' is missing a type annotation", field),
            span,
        }
    }

    /// Creates an error for an integer literal outside the `i64` range.
    pub(super) fn int_literal_out_of_range(text: &str, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::IntLiteralOutOfRange,
            message: format!("Integer literal out of range: {}", text),
            span,
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Returns the detailed error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns a short title for this error, used in report headers.
    pub fn short_message(&self) -> &'static str {
        match self.kind {
            ParseErrorKind::UnexpectedToken => "Unexpected token",
            ParseErrorKind::InvalidToken => "Invalid character",
            ParseErrorKind::MissingFieldType => "Missing field type",
            ParseErrorKind::IntLiteralOutOfRange => "Integer literal out of range",
        }
    }

    /// Returns the source location where the error occurred.
    pub fn span(&self) -> Span {
        self.span
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}
