//! Statement parsing.

use super::Parser;
use super::error::ParseError;
use crate::ast::{
    BinaryOperator, ElifArm, Expr, ExprKind, LiteralValue, Param, Stmt, StmtKind, StructField,
    Type,
};
use crate::token::TokenKind;

/// Maps a compound-assignment operator spelling to its base operator.
fn compound_base_operator(op: &str) -> Option<BinaryOperator> {
    match op {
        "+=" => Some(BinaryOperator::Add),
        "-=" => Some(BinaryOperator::Sub),
        "*=" => Some(BinaryOperator::Mul),
        "/=" => Some(BinaryOperator::Div),
        "%=" => Some(BinaryOperator::Mod),
        _ => None,
    }
}

impl Parser {
    /// Parses a single statement.
    pub(super) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        match self.current_kind() {
            TokenKind::Var => self.parse_var_decl(),
            TokenKind::Print => self.parse_print_stmt(),
            TokenKind::If => self.parse_if_stmt(),
            TokenKind::For => self.parse_for_stmt(),
            TokenKind::Return => self.parse_return_stmt(),
            TokenKind::Fun => self.parse_fun_decl(),
            TokenKind::Struct => self.parse_struct_decl(),
            TokenKind::Break => {
                let span = self.current_span();
                self.advance();
                self.expect(&TokenKind::Semicolon)?;
                Ok(Stmt::new(StmtKind::Break, span))
            }
            TokenKind::Continue => {
                let span = self.current_span();
                self.advance();
                self.expect(&TokenKind::Semicolon)?;
                Ok(Stmt::new(StmtKind::Continue, span))
            }
            TokenKind::Identifier(_) => self.parse_identifier_stmt(),
            _ => Err(self.unexpected_here("statement")),
        }
    }

    /// Parses a variable declaration.
    ///
    /// # Grammar
    ///
    /// ```text
    /// var_decl → "var" IDENT (":" TYPE)? ("=" expr)? ";"
    /// ```
    ///
    /// `static_type` is set iff the `: TYPE` annotation is present; both
    /// the annotation and the initializer are optional.
    fn parse_var_decl(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::Var)?;
        let name = self.expect_identifier()?;

        let mut ty = Type::Unknown;
        let static_type = self.eat(&TokenKind::Colon);
        if static_type {
            ty = self.parse_type()?;
        }

        let init = if self.eat(&TokenKind::Assign) {
            Some(self.parse_expr()?)
        } else {
            None
        };

        let end_span = self.current_span();
        self.expect(&TokenKind::Semicolon)?;

        Ok(Stmt::new(
            StmtKind::VarDecl {
                name,
                ty,
                static_type,
                init,
            },
            start_span.to(end_span),
        ))
    }

    /// Parses a print statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// print_stmt → "print" "(" expr ")" ";"
    /// ```
    fn parse_print_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::Print)?;
        self.expect(&TokenKind::LParen)?;
        let expr = self.parse_expr()?;
        self.expect(&TokenKind::RParen)?;
        let end_span = self.current_span();
        self.expect(&TokenKind::Semicolon)?;
        Ok(Stmt::new(StmtKind::Print(expr), start_span.to(end_span)))
    }

    /// Parses an if statement with optional `elif` arms and `else` block.
    ///
    /// # Grammar
    ///
    /// ```text
    /// if_stmt → "if" expr block ("elif" expr block)* ("else" block)?
    /// ```
    ///
    /// Conditions are parsed by the buffering sub-parser so that a
    /// condition ending in an identifier is not mistaken for a struct
    /// initializer when the block's `{` follows.
    fn parse_if_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::If)?;

        let condition = self.parse_expr_until(&TokenKind::LBrace)?;
        let then_block = self.parse_block()?;

        let mut elifs = Vec::new();
        while self.eat(&TokenKind::Elif) {
            let elif_condition = self.parse_expr_until(&TokenKind::LBrace)?;
            let block = self.parse_block()?;
            elifs.push(ElifArm {
                condition: elif_condition,
                block,
            });
        }

        let else_block = if self.eat(&TokenKind::Else) {
            self.parse_block()?
        } else {
            Vec::new()
        };

        Ok(Stmt::new(
            StmtKind::If {
                condition,
                then_block,
                elifs,
                else_block,
            },
            start_span,
        ))
    }

    /// Parses a for statement over a half-open range.
    ///
    /// # Grammar
    ///
    /// ```text
    /// for_stmt → "for" IDENT "=" expr ".." expr block
    /// ```
    ///
    /// The step is inferred at parse time only when both bounds are
    /// integer literals: `+1` when `start <= end`, `-1` otherwise. With
    /// non-literal bounds the step is assumed `+1`, so a range that turns
    /// out descending at run time terminates without iterating.
    fn parse_for_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::For)?;
        let var = self.expect_identifier()?;
        self.expect(&TokenKind::Assign)?;
        let start = self.parse_expr()?;
        self.expect(&TokenKind::Range)?;
        let end = self.parse_expr_until(&TokenKind::LBrace)?;
        let body = self.parse_block()?;

        let step = match (integer_literal_value(&start), integer_literal_value(&end)) {
            (Some(start_val), Some(end_val)) if start_val > end_val => -1,
            _ => 1,
        };
        let step = Expr::new(ExprKind::Literal(LiteralValue::I32(step)), start_span);

        Ok(Stmt::new(
            StmtKind::For {
                var,
                start,
                end,
                step,
                body,
            },
            start_span,
        ))
    }

    /// Parses a return statement with an optional value.
    fn parse_return_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::Return)?;

        if self.eat(&TokenKind::Semicolon) {
            return Ok(Stmt::new(StmtKind::Return(None), start_span));
        }

        let value = self.parse_expr()?;
        let end_span = self.current_span();
        self.expect(&TokenKind::Semicolon)?;
        Ok(Stmt::new(
            StmtKind::Return(Some(value)),
            start_span.to(end_span),
        ))
    }

    /// Parses a function declaration.
    ///
    /// # Grammar
    ///
    /// ```text
    /// fun_decl → "fun" IDENT "(" (param ("," param)*)? ")" block
    /// param    → IDENT (":" TYPE)?
    /// ```
    fn parse_fun_decl(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::Fun)?;
        let name = self.expect_identifier()?;
        self.expect(&TokenKind::LParen)?;

        let mut params = Vec::new();
        while matches!(self.current_kind(), TokenKind::Identifier(_)) {
            let param_span = self.current_span();
            let param_name = self.expect_identifier()?;

            let mut ty = Type::Unknown;
            let static_type = self.eat(&TokenKind::Colon);
            if static_type {
                ty = self.parse_type()?;
            }

            params.push(Param {
                name: param_name,
                ty,
                static_type,
                span: param_span,
            });

            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }

        self.expect(&TokenKind::RParen)?;
        let body = self.parse_block()?;

        Ok(Stmt::new(
            StmtKind::FunctionDecl { name, params, body },
            start_span,
        ))
    }

    /// Parses a struct declaration.
    ///
    /// # Grammar
    ///
    /// ```text
    /// struct_decl → "struct" IDENT "{" field ("," field)* "}" ";"
    /// field       → IDENT ":" TYPE
    /// ```
    ///
    /// Every field must carry an explicit primitive type; a field without
    /// one is a [`ParseError`].
    fn parse_struct_decl(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::Struct)?;
        let name = self.expect_identifier()?;
        self.expect(&TokenKind::LBrace)?;

        let mut fields = Vec::new();
        while matches!(self.current_kind(), TokenKind::Identifier(_)) {
            let field_span = self.current_span();
            let field_name = self.expect_identifier()?;

            if !self.eat(&TokenKind::Colon) {
                return Err(ParseError::missing_field_type(&field_name, field_span));
            }
            let ty = self.parse_type()?;

            fields.push(StructField {
                name: field_name,
                ty,
                span: field_span,
            });

            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }

        self.expect(&TokenKind::RBrace)?;
        let end_span = self.current_span();
        self.expect(&TokenKind::Semicolon)?;

        Ok(Stmt::new(
            StmtKind::StructDecl { name, fields },
            start_span.to(end_span),
        ))
    }

    /// Parses an identifier-led statement: plain or indexed assignment,
    /// compound assignment, or a statement-level function call.
    ///
    /// Compound assignments desugar at parse time:
    /// `x += e` becomes `x = x + e`.
    fn parse_identifier_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        let name = self.expect_identifier()?;

        let index = if self.eat(&TokenKind::LBracket) {
            let index = self.parse_expr()?;
            self.expect(&TokenKind::RBracket)?;
            Some(index)
        } else {
            None
        };

        if self.eat(&TokenKind::Assign) {
            let value = self.parse_expr()?;
            let end_span = self.current_span();
            self.expect(&TokenKind::Semicolon)?;
            return Ok(Stmt::new(
                StmtKind::Assign { name, index, value },
                start_span.to(end_span),
            ));
        }

        let compound = match self.current_kind() {
            TokenKind::Operator(op) => compound_base_operator(op),
            _ => None,
        };
        if let Some(base_op) = compound {
            self.advance();
            let rhs = self.parse_expr()?;
            let end_span = self.current_span();
            self.expect(&TokenKind::Semicolon)?;

            let target = Expr::new(ExprKind::Identifier(name.clone()), start_span);
            let value_span = start_span.to(end_span);
            let value = Expr::new(
                ExprKind::Binary {
                    left: Box::new(target),
                    op: base_op,
                    right: Box::new(rhs),
                },
                value_span,
            );
            return Ok(Stmt::new(
                StmtKind::Assign { name, index, value },
                value_span,
            ));
        }

        if index.is_none() && self.eat(&TokenKind::LParen) {
            let args = self.parse_call_args()?;
            let end_span = self.current_span();
            self.expect(&TokenKind::Semicolon)?;
            let span = start_span.to(end_span);
            let call = Expr::new(ExprKind::Call { callee: name, args }, span);
            return Ok(Stmt::new(StmtKind::Expr(call), span));
        }

        Err(self.unexpected_here("'=', compound assignment or '(' after identifier"))
    }

    /// Parses a braced statement block.
    pub(super) fn parse_block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.expect(&TokenKind::LBrace)?;
        let mut statements = Vec::new();
        while !matches!(self.current_kind(), TokenKind::RBrace) && !self.is_eof() {
            statements.push(self.parse_stmt()?);
        }
        self.expect(&TokenKind::RBrace)?;
        Ok(statements)
    }
}

/// Returns the value of an integer literal expression, if it is one.
fn integer_literal_value(expr: &Expr) -> Option<i64> {
    match &expr.kind {
        ExprKind::Literal(LiteralValue::I32(v)) => Some(*v as i64),
        ExprKind::Literal(LiteralValue::I64(v)) => Some(*v),
        _ => None,
    }
}
