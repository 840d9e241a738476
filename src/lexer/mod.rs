//! Lexical analyzer for the Aiko programming language.
//!
//! This module provides the [`Lexer`] struct which converts source code
//! text into a stream of [`Token`]s for parsing.
//!
//! # Supported Tokens
//!
//! - **Keywords**: `var`, `print`, `if`, `elif`, `else`, `for`, `fun`,
//!   `return`, `typeof`, `input`, `break`, `continue`, `struct`
//! - **Type names**: `i32`, `i64`, `f32`, `f64`, `bool`, `str`
//! - **Identifiers**: an ASCII letter followed by ASCII alphanumerics
//! - **Numeric literals**: `123` (integer) and `1.25` (double); a `-`
//!   immediately followed by a digit folds into a signed literal
//! - **String literals**: text between matching `'` or `"` quotes, with no
//!   escape processing
//! - **Boolean literals**: the exact words `true` and `false`
//! - **Operators**: `+ - * / %` with optional `=` suffix, `> < = !` with
//!   optional `=` suffix, and the range operator `..`
//! - **Punctuation**: `; ( ) { } , . : [ ]`
//! - **Comments**: line comments starting with `#`
//!
//! Unrecognized characters become [`TokenKind::Invalid`] tokens that the
//! parser rejects; the only hard lexer error is an unterminated string.
//!
//! # Examples
//!
//! ```
//! use aiko::lexer::Lexer;
//! use aiko::token::TokenKind;
//!
//! let mut lexer = Lexer::new("print(x);");
//! let tokens = lexer.tokenize().unwrap();
//!
//! assert!(matches!(tokens[0].kind, TokenKind::Print));
//! assert!(matches!(tokens[1].kind, TokenKind::LParen));
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Error types for lexical analysis
//! - [`cursor`] - Position tracking and character navigation
//! - [`skip`] - Whitespace and comment handling
//! - [`tokens`] - Token recognition and reading
//! - `tests` - Unit tests (test-only)

mod cursor;
mod error;
mod skip;
mod tokens;

#[cfg(test)]
mod tests;

pub use error::{LexError, LexErrorKind};

use crate::token::{Span, Token, TokenKind};

/// A lexical analyzer that tokenizes Aiko source code.
///
/// The `Lexer` maintains its position within the input and tracks
/// line/column numbers for error reporting. It is designed to be used once
/// per source file.
///
/// # Lifetime
///
/// The `'a` lifetime parameter ties the lexer to the input string slice,
/// ensuring the input remains valid while the lexer is in use.
pub struct Lexer<'a> {
    /// The input source code being tokenized.
    pub(super) input: &'a str,
    /// Current byte position in the input.
    pub(super) pos: usize,
    /// Current line number (1-indexed).
    pub(super) line: usize,
    /// Current column number (1-indexed).
    pub(super) column: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` for the given input string.
    ///
    /// The lexer starts at the beginning of the input with line and column
    /// numbers initialized to 1.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenizes the entire input and returns a vector of tokens.
    ///
    /// This method consumes the input from start to end, producing tokens
    /// until the end of input is reached. The returned vector always ends
    /// with an [`TokenKind::Eof`] token.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if a string literal is not terminated before
    /// the end of the input.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments();

            if self.is_eof() {
                let span = Span::new(self.pos, self.pos, self.line, self.column);
                tokens.push(Token::new(TokenKind::Eof, span));
                break;
            }

            let token = self.next_token()?;
            tokens.push(token);
        }

        Ok(tokens)
    }
}
