//! Parser helper methods for token navigation and basic operations.

use super::Parser;
use super::error::ParseError;
use crate::token::{Span, Token, TokenKind};

impl Parser {
    /// Returns a user-friendly display string for a token kind.
    pub(super) fn token_kind_display(kind: &TokenKind) -> String {
        match kind {
            TokenKind::IntLiteral(n) => format!("integer '{}'", n),
            TokenKind::DoubleLiteral(n) => format!("number '{}'", n),
            TokenKind::StringLiteral(s) => {
                if s.len() > 20 {
                    format!("string \"{}...\"", &s[..20])
                } else {
                    format!("string \"{}\"", s)
                }
            }
            TokenKind::BoolLiteral(b) => format!("'{}'", b),
            TokenKind::Type(t) => format!("type '{}'", t),
            TokenKind::Var => "'var' keyword".to_string(),
            TokenKind::Print => "'print' keyword".to_string(),
            TokenKind::If => "'if' keyword".to_string(),
            TokenKind::Elif => "'elif' keyword".to_string(),
            TokenKind::Else => "'else' keyword".to_string(),
            TokenKind::For => "'for' keyword".to_string(),
            TokenKind::Fun => "'fun' keyword".to_string(),
            TokenKind::Return => "'return' keyword".to_string(),
            TokenKind::Range => "'..'".to_string(),
            TokenKind::Typeof => "'typeof' keyword".to_string(),
            TokenKind::Input => "'input' keyword".to_string(),
            TokenKind::Break => "'break' keyword".to_string(),
            TokenKind::Continue => "'continue' keyword".to_string(),
            TokenKind::Struct => "'struct' keyword".to_string(),
            TokenKind::Identifier(s) => format!("identifier '{}'", s),
            TokenKind::Operator(op) => format!("operator '{}'", op),
            TokenKind::Assign => "'='".to_string(),
            TokenKind::Comparison(op) => format!("comparison '{}'", op),
            TokenKind::Semicolon => "';'".to_string(),
            TokenKind::LParen => "'('".to_string(),
            TokenKind::RParen => "')'".to_string(),
            TokenKind::LBrace => "'{'".to_string(),
            TokenKind::RBrace => "'}'".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::Colon => "':'".to_string(),
            TokenKind::LBracket => "'['".to_string(),
            TokenKind::RBracket => "']'".to_string(),
            TokenKind::Dot => "'.'".to_string(),
            TokenKind::Invalid(c) => format!("invalid character '{}'", c),
            TokenKind::Eof => "end of file".to_string(),
        }
    }

    /// Returns a reference to the current token.
    ///
    /// This method is safe to call at any time - if the position is past
    /// the end, it returns the last token (which should be `Eof`).
    pub(super) fn current(&self) -> &Token {
        // new() ensures tokens is non-empty and advance() does not move
        // past Eof, so the index is always valid.
        let idx = self.pos.min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Returns the kind of the current token.
    pub(super) fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    /// Returns the span of the current token.
    pub(super) fn current_span(&self) -> Span {
        self.current().span
    }

    /// Returns the kind of the token `offset` positions ahead, if any.
    pub(super) fn peek_kind(&self, offset: usize) -> Option<&TokenKind> {
        self.tokens.get(self.pos + offset).map(|t| &t.kind)
    }

    /// Returns `true` if the current token is `Eof`.
    pub(super) fn is_eof(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Advances to the next token.
    ///
    /// Does nothing if already at `Eof`.
    pub(super) fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Consumes the current token if it matches `expected`.
    ///
    /// # Returns
    ///
    /// `true` if the token matched and was consumed, `false` otherwise.
    pub(super) fn eat(&mut self, expected: &TokenKind) -> bool {
        if self.current_kind() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expects the current token to match `expected` and advances.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] naming the expected and observed tokens if
    /// the current token does not match.
    pub(super) fn expect(&mut self, expected: &TokenKind) -> Result<(), ParseError> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.unexpected_here(&Self::token_kind_display(expected)))
        }
    }

    /// Expects an identifier token and returns its name.
    pub(super) fn expect_identifier(&mut self) -> Result<String, ParseError> {
        if let TokenKind::Identifier(name) = self.current_kind() {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(self.unexpected_here("identifier"))
        }
    }

    /// Builds an expected-vs-found error at the current token.
    ///
    /// An `Invalid` token yields an invalid-character error instead, so
    /// unrecognized input characters are reported as such.
    pub(super) fn unexpected_here(&self, expected: &str) -> ParseError {
        if let TokenKind::Invalid(c) = self.current_kind() {
            return ParseError::invalid_token(*c, self.current_span());
        }
        ParseError::unexpected(
            expected,
            &Self::token_kind_display(self.current_kind()),
            self.current_span(),
        )
    }
}
