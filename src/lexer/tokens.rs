//! Token reading and recognition for the lexer.
//!
//! This module provides methods for reading the individual token types from
//! the input: numeric, string and boolean literals, identifiers and
//! keywords, operators, and punctuation.

use super::Lexer;
use super::error::LexError;
use crate::token::{Span, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Creates a single-character token and advances the lexer.
    fn single_char_token(
        &mut self,
        kind: TokenKind,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        self.advance();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(kind, span)
    }

    /// Reads and returns the next token from the input.
    ///
    /// This method is called repeatedly by
    /// [`tokenize`](super::Lexer::tokenize) to produce the token stream. It
    /// assumes that whitespace and comments have already been skipped.
    ///
    /// Unrecognized characters produce an [`TokenKind::Invalid`] token
    /// rather than an error; the parser rejects those.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if a string literal is not terminated.
    pub(super) fn next_token(&mut self) -> Result<Token, LexError> {
        let start_pos = self.pos;
        let start_line = self.line;
        let start_column = self.column;

        // tokenize() guarantees we are not at EOF here.
        let Some(c) = self.current_char() else {
            let span = Span::new(self.pos, self.pos, self.line, self.column);
            return Ok(Token::new(TokenKind::Eof, span));
        };

        // The range operator `..` wins over a bare dot.
        if c == '.' && self.peek_next() == Some('.') {
            self.advance();
            self.advance();
            let span = Span::new(start_pos, self.pos, start_line, start_column);
            return Ok(Token::new(TokenKind::Range, span));
        }

        // A `-` immediately followed by a digit folds into a signed
        // numeric literal; the operator form resurfaces as unary minus in
        // the parser.
        if c == '-' && self.peek_next().is_some_and(|n| n.is_ascii_digit()) {
            self.advance();
            return Ok(self.read_number(start_pos, start_line, start_column));
        }

        if c == '"' || c == '\'' {
            return self.read_string(c, start_pos, start_line, start_column);
        }

        if c.is_ascii_digit() {
            return Ok(self.read_number(start_pos, start_line, start_column));
        }

        if c.is_ascii_alphabetic() {
            return Ok(self.read_identifier(start_pos, start_line, start_column));
        }

        if let Some(token) = self.next_operator(c, start_pos, start_line, start_column) {
            return Ok(token);
        }

        if let Some(token) = self.next_punctuation(c, start_pos, start_line, start_column) {
            return Ok(token);
        }

        // Anything else is an Invalid token for the parser to reject.
        self.advance();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Ok(Token::new(TokenKind::Invalid(c), span))
    }

    /// Reads an arithmetic, comparison, assignment or not operator.
    fn next_operator(
        &mut self,
        c: char,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Option<Token> {
        match c {
            '+' | '-' | '*' | '/' | '%' => {
                self.advance();
                // An immediate `=` forms a compound assignment (`+=`, ...).
                let spelling = if self.current_char() == Some('=') {
                    self.advance();
                    format!("{}=", c)
                } else {
                    c.to_string()
                };
                let span = Span::new(start_pos, self.pos, start_line, start_column);
                Some(Token::new(TokenKind::Operator(spelling), span))
            }
            '>' | '<' | '=' | '!' => {
                self.advance();
                if self.current_char() == Some('=') {
                    self.advance();
                    let span = Span::new(start_pos, self.pos, start_line, start_column);
                    return Some(Token::new(TokenKind::Comparison(format!("{}=", c)), span));
                }
                let span = Span::new(start_pos, self.pos, start_line, start_column);
                let kind = match c {
                    '=' => TokenKind::Assign,
                    '!' => TokenKind::Operator("!".to_string()),
                    _ => TokenKind::Comparison(c.to_string()),
                };
                Some(Token::new(kind, span))
            }
            _ => None,
        }
    }

    /// Reads a single-character punctuation token.
    fn next_punctuation(
        &mut self,
        c: char,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Option<Token> {
        let kind = match c {
            ';' => TokenKind::Semicolon,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            ':' => TokenKind::Colon,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            _ => return None,
        };
        Some(self.single_char_token(kind, start_pos, start_line, start_column))
    }

    /// Reads a numeric literal from the input.
    ///
    /// An optional leading `-` has already been consumed by the caller.
    /// One or more digits form an integer literal; a `.` immediately
    /// followed by more digits turns it into a double literal. There is no
    /// scientific notation and no digit separators. The lexeme text is kept
    /// as the token payload; the parser performs the numeric conversion and
    /// the `i32`/`i64` classification.
    fn read_number(&mut self, start_pos: usize, start_line: usize, start_column: usize) -> Token {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        // A fraction only starts when the dot is followed by a digit, so
        // `0..3` stays an integer followed by a range operator.
        let has_fraction = self.current_char() == Some('.')
            && self.peek_next().is_some_and(|c| c.is_ascii_digit());

        if has_fraction {
            self.advance(); // consume '.'
            while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
            let span = Span::new(start_pos, self.pos, start_line, start_column);
            let text = self.input[start_pos..self.pos].to_string();
            return Token::new(TokenKind::DoubleLiteral(text), span);
        }

        let span = Span::new(start_pos, self.pos, start_line, start_column);
        let text = self.input[start_pos..self.pos].to_string();
        Token::new(TokenKind::IntLiteral(text), span)
    }

    /// Reads a string literal delimited by the given quote character.
    ///
    /// The opening quote is at the current position. Both `'` and `"` are
    /// accepted; the literal ends at the matching quote. No escape
    /// sequences are processed.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if the input ends before the closing quote.
    fn read_string(
        &mut self,
        quote: char,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Result<Token, LexError> {
        self.advance(); // skip opening quote
        let mut value = String::new();

        loop {
            match self.current_char() {
                Some(c) if c == quote => {
                    self.advance(); // skip closing quote
                    let span = Span::new(start_pos, self.pos, start_line, start_column);
                    return Ok(Token::new(TokenKind::StringLiteral(value), span));
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
                None => {
                    return Err(LexError::unterminated_string(Span::new(
                        start_pos,
                        self.pos,
                        start_line,
                        start_column,
                    )));
                }
            }
        }
    }

    /// Reads an identifier, keyword, type name or boolean literal.
    ///
    /// Identifiers start with an ASCII letter followed by ASCII
    /// alphanumerics. The spelling is checked against the keyword table,
    /// the primitive type names (which become [`TokenKind::Type`] tokens)
    /// and the boolean literals; matching the full word means `truex`
    /// stays an identifier.
    fn read_identifier(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        while self.current_char().is_some_and(|c| c.is_ascii_alphanumeric()) {
            self.advance();
        }

        let value = self.input[start_pos..self.pos].to_string();
        let span = Span::new(start_pos, self.pos, start_line, start_column);

        let kind = match value.as_str() {
            "var" => TokenKind::Var,
            "print" => TokenKind::Print,
            "if" => TokenKind::If,
            "elif" => TokenKind::Elif,
            "else" => TokenKind::Else,
            "for" => TokenKind::For,
            "fun" => TokenKind::Fun,
            "return" => TokenKind::Return,
            "typeof" => TokenKind::Typeof,
            "input" => TokenKind::Input,
            "break" => TokenKind::Break,
            "continue" => TokenKind::Continue,
            "struct" => TokenKind::Struct,
            "true" => TokenKind::BoolLiteral(true),
            "false" => TokenKind::BoolLiteral(false),
            "i32" | "i64" | "f32" | "f64" | "bool" | "str" => TokenKind::Type(value),
            _ => TokenKind::Identifier(value),
        };

        Token::new(kind, span)
    }
}
