//! Expression parsing.
//!
//! This module implements the operator-precedence cascade
//! `equality → comparison → additive → multiplicative → unary → primary`,
//! plus the buffering sub-parser used for block-terminated expressions.

use super::Parser;
use super::error::ParseError;
use crate::ast::{BinaryOperator, Expr, ExprKind, LiteralValue, UnaryOperator};
use crate::token::{Span, Token, TokenKind};

impl Parser {
    /// Parses an expression.
    ///
    /// This is the entry point of the precedence cascade.
    pub(super) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_equality()
    }

    /// Parses an expression by buffering tokens up to (but not including)
    /// `terminator` and running a nested sub-parser over the captured
    /// slice plus a synthetic `Eof`.
    ///
    /// Used for the conditions of `if`/`elif` and the upper bound of
    /// `for`, where the following `{` must not be consumed as a
    /// struct-initializer brace.
    pub(super) fn parse_expr_until(
        &mut self,
        terminator: &TokenKind,
    ) -> Result<Expr, ParseError> {
        let mut captured = Vec::new();
        while !self.is_eof() && self.current_kind() != terminator {
            captured.push(self.current().clone());
            self.advance();
        }

        let eof_span = captured
            .last()
            .map(|t| Span::new(t.span.end, t.span.end, t.span.line, t.span.column))
            .unwrap_or_else(|| self.current_span());
        captured.push(Token::new(TokenKind::Eof, eof_span));

        let mut sub_parser = Parser::new(captured);
        sub_parser.parse_expr()
    }

    /// Parses `==` / `!=` chains.
    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_comparison()?;
        loop {
            let op = match self.current_kind() {
                TokenKind::Comparison(s) if s == "==" => BinaryOperator::Equal,
                TokenKind::Comparison(s) if s == "!=" => BinaryOperator::NotEqual,
                _ => break,
            };
            self.advance();
            let right = self.parse_comparison()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    /// Parses `<` / `>` / `<=` / `>=` chains.
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_term()?;
        loop {
            let op = match self.current_kind() {
                TokenKind::Comparison(s) if s == "<" => BinaryOperator::LessThan,
                TokenKind::Comparison(s) if s == ">" => BinaryOperator::GreaterThan,
                TokenKind::Comparison(s) if s == "<=" => BinaryOperator::LessEqual,
                TokenKind::Comparison(s) if s == ">=" => BinaryOperator::GreaterEqual,
                _ => break,
            };
            self.advance();
            let right = self.parse_term()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    /// Parses `+` / `-` chains.
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_factor()?;
        loop {
            let op = match self.current_kind() {
                TokenKind::Operator(s) if s == "+" => BinaryOperator::Add,
                TokenKind::Operator(s) if s == "-" => BinaryOperator::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_factor()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    /// Parses `*` / `/` / `%` chains.
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.current_kind() {
                TokenKind::Operator(s) if s == "*" => BinaryOperator::Mul,
                TokenKind::Operator(s) if s == "/" => BinaryOperator::Div,
                TokenKind::Operator(s) if s == "%" => BinaryOperator::Mod,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    /// Parses unary `-` / `!`, right-associatively.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let start_span = self.current_span();
        let op = match self.current_kind() {
            TokenKind::Operator(s) if s == "-" => UnaryOperator::Neg,
            TokenKind::Operator(s) if s == "!" => UnaryOperator::Not,
            _ => return self.parse_primary(),
        };
        self.advance();
        let operand = self.parse_unary()?;
        let span = start_span.to(operand.span);
        Ok(Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    /// Parses a primary expression: literals, `input`, `typeof`,
    /// identifiers with member/call/index suffixes, struct initializers,
    /// array literals and parenthesized expressions.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let start_span = self.current_span();

        match self.current_kind().clone() {
            TokenKind::IntLiteral(text) => {
                self.advance();
                let value: i64 = text
                    .parse()
                    .map_err(|_| ParseError::int_literal_out_of_range(&text, start_span))?;
                // A 64-bit value that fits the 32-bit signed range is
                // tagged i32, otherwise i64.
                let literal = if value >= i32::MIN as i64 && value <= i32::MAX as i64 {
                    LiteralValue::I32(value as i32)
                } else {
                    LiteralValue::I64(value)
                };
                Ok(Expr::new(ExprKind::Literal(literal), start_span))
            }
            TokenKind::DoubleLiteral(text) => {
                self.advance();
                let value: f64 = text
                    .parse()
                    .map_err(|_| ParseError::int_literal_out_of_range(&text, start_span))?;
                Ok(Expr::new(
                    ExprKind::Literal(LiteralValue::F64(value)),
                    start_span,
                ))
            }
            TokenKind::StringLiteral(s) => {
                self.advance();
                Ok(Expr::new(
                    ExprKind::Literal(LiteralValue::Str(s)),
                    start_span,
                ))
            }
            TokenKind::BoolLiteral(b) => {
                self.advance();
                Ok(Expr::new(
                    ExprKind::Literal(LiteralValue::Bool(b)),
                    start_span,
                ))
            }
            TokenKind::Input => {
                self.advance();
                self.parse_input(start_span)
            }
            TokenKind::Typeof => {
                self.advance();
                let expr = self.parse_primary()?;
                let span = start_span.to(expr.span);
                Ok(Expr::new(ExprKind::Typeof(Box::new(expr)), span))
            }
            TokenKind::Identifier(name) => {
                // One-token lookahead: `Name {` starts a struct initializer.
                if matches!(self.peek_kind(1), Some(TokenKind::LBrace)) {
                    return self.parse_struct_init();
                }
                self.advance();

                let mut expr = Expr::new(ExprKind::Identifier(name.clone()), start_span);

                // `.field` chains build nested member accesses.
                while self.eat(&TokenKind::Dot) {
                    let field_span = self.current_span();
                    let field = self.expect_identifier()?;
                    let span = start_span.to(field_span);
                    expr = Expr::new(
                        ExprKind::MemberAccess {
                            object: Box::new(expr),
                            field,
                        },
                        span,
                    );
                }

                if self.eat(&TokenKind::LParen) {
                    // A call must begin with a plain identifier.
                    if !matches!(expr.kind, ExprKind::Identifier(_)) {
                        return Err(self.unexpected_here("function name before '('"));
                    }
                    let args = self.parse_call_args()?;
                    let span = start_span.to(self.current_span());
                    return Ok(Expr::new(ExprKind::Call { callee: name, args }, span));
                }

                if self.eat(&TokenKind::LBracket) {
                    if !matches!(expr.kind, ExprKind::Identifier(_)) {
                        return Err(self.unexpected_here("array name before '['"));
                    }
                    let index = self.parse_expr()?;
                    let end_span = self.current_span();
                    self.expect(&TokenKind::RBracket)?;
                    return Ok(Expr::new(
                        ExprKind::ArrayAccess {
                            array: name,
                            index: Box::new(index),
                        },
                        start_span.to(end_span),
                    ));
                }

                Ok(expr)
            }
            TokenKind::LBracket => {
                self.advance();
                let mut elements = Vec::new();
                if !matches!(self.current_kind(), TokenKind::RBracket) {
                    elements.push(self.parse_expr()?);
                    while self.eat(&TokenKind::Comma) {
                        elements.push(self.parse_expr()?);
                    }
                }
                let end_span = self.current_span();
                self.expect(&TokenKind::RBracket)?;
                Ok(Expr::new(
                    ExprKind::ArrayLiteral(elements),
                    start_span.to(end_span),
                ))
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                let end_span = self.current_span();
                self.expect(&TokenKind::RParen)?;
                Ok(Expr::new(inner.kind, start_span.to(end_span)))
            }
            _ => Err(self.unexpected_here("expression")),
        }
    }

    /// Parses the argument list of a call; the opening `(` has been
    /// consumed. Consumes the closing `)`.
    pub(super) fn parse_call_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();
        if !matches!(self.current_kind(), TokenKind::RParen) {
            args.push(self.parse_expr()?);
            while self.eat(&TokenKind::Comma) {
                args.push(self.parse_expr()?);
            }
        }
        self.expect(&TokenKind::RParen)?;
        Ok(args)
    }

    /// Parses a struct initializer `Name { field: value, ... }`.
    fn parse_struct_init(&mut self) -> Result<Expr, ParseError> {
        let start_span = self.current_span();
        let name = self.expect_identifier()?;
        self.expect(&TokenKind::LBrace)?;

        let mut fields = Vec::new();
        while !matches!(self.current_kind(), TokenKind::RBrace) {
            let field_name = self.expect_identifier()?;
            self.expect(&TokenKind::Colon)?;
            let value = self.parse_expr()?;
            fields.push((field_name, value));

            if !matches!(self.current_kind(), TokenKind::RBrace) {
                self.expect(&TokenKind::Comma)?;
            }
        }

        let end_span = self.current_span();
        self.expect(&TokenKind::RBrace)?;

        Ok(Expr::new(
            ExprKind::StructInit { name, fields },
            start_span.to(end_span),
        ))
    }

    /// Parses `input(prompt, type)`; the `input` keyword has been
    /// consumed.
    ///
    /// The target type may be spelled as a type token (`i32`), an
    /// identifier (`double`) or a string literal (`"i64"`); the spelling
    /// is kept as a string and interpreted by the code generator.
    fn parse_input(&mut self, start_span: Span) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LParen)?;

        let prompt = if matches!(self.current_kind(), TokenKind::Comma) {
            None
        } else {
            Some(Box::new(self.parse_expr()?))
        };

        self.expect(&TokenKind::Comma)?;

        let target = match self.current_kind() {
            TokenKind::Type(name) | TokenKind::Identifier(name) | TokenKind::StringLiteral(name) => {
                let name = name.clone();
                self.advance();
                name
            }
            _ => return Err(self.unexpected_here("input target type")),
        };

        let end_span = self.current_span();
        self.expect(&TokenKind::RParen)?;

        Ok(Expr::new(
            ExprKind::Input { prompt, target },
            start_span.to(end_span),
        ))
    }
}

/// Builds a binary expression node spanning both operands.
fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    let span = left.span.to(right.span);
    Expr::new(
        ExprKind::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        },
        span,
    )
}
