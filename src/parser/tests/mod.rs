//! Unit tests for the parser module.

use super::*;
use crate::ast::{ExprKind, LiteralValue, Program, StmtKind};
use crate::lexer::Lexer;

/// Helper to lex and parse a source string.
pub(super) fn parse_source(source: &str) -> Program {
    let mut lexer = Lexer::new(source);
    let tokens = lexer
        .tokenize()
        .unwrap_or_else(|e| panic!("Lexing failed for {:?}: {}", source, e));
    let mut parser = Parser::new(tokens);
    parser
        .parse()
        .unwrap_or_else(|e| panic!("Parsing failed for {:?}: {}", source, e))
}

/// Helper to lex and parse a source string, returning the error.
pub(super) fn parse_error(source: &str) -> ParseError {
    let mut lexer = Lexer::new(source);
    let tokens = lexer
        .tokenize()
        .unwrap_or_else(|e| panic!("Lexing failed for {:?}: {}", source, e));
    let mut parser = Parser::new(tokens);
    match parser.parse() {
        Ok(program) => panic!(
            "Expected parsing to fail for {:?}, but got {} statements",
            source,
            program.statements.len()
        ),
        Err(e) => e,
    }
}

/// Helper to parse a source string consisting of a single statement.
pub(super) fn parse_single_stmt(source: &str) -> StmtKind {
    let mut program = parse_source(source);
    assert_eq!(
        program.statements.len(),
        1,
        "expected exactly one statement in {:?}",
        source
    );
    program.statements.remove(0).kind
}

mod expr;
mod stmt;

#[test]
fn test_empty_program() {
    let program = parse_source("");
    assert!(program.statements.is_empty());
}

#[test]
fn test_statement_sequence_in_order() {
    let program = parse_source("var a = 1; var b = 2; print(a);");
    assert_eq!(program.statements.len(), 3);
    assert!(matches!(
        &program.statements[0].kind,
        StmtKind::VarDecl { name, .. } if name == "a"
    ));
    assert!(matches!(
        &program.statements[2].kind,
        StmtKind::Print(_)
    ));
}

#[test]
fn test_literal_classification_small_int_is_i32() {
    let kind = parse_single_stmt("var x = 42;");
    let StmtKind::VarDecl { init: Some(init), .. } = kind else {
        panic!("expected var decl with initializer");
    };
    assert!(matches!(
        init.kind,
        ExprKind::Literal(LiteralValue::I32(42))
    ));
}

#[test]
fn test_literal_classification_boundary_values() {
    let kind = parse_single_stmt("var x = 2147483647;");
    let StmtKind::VarDecl { init: Some(init), .. } = kind else {
        panic!("expected var decl with initializer");
    };
    assert!(matches!(
        init.kind,
        ExprKind::Literal(LiteralValue::I32(i32::MAX))
    ));

    let kind = parse_single_stmt("var x = 2147483648;");
    let StmtKind::VarDecl { init: Some(init), .. } = kind else {
        panic!("expected var decl with initializer");
    };
    assert!(matches!(
        init.kind,
        ExprKind::Literal(LiteralValue::I64(2147483648))
    ));
}

#[test]
fn test_negative_literal_classification() {
    let kind = parse_single_stmt("var x = -2147483648;");
    let StmtKind::VarDecl { init: Some(init), .. } = kind else {
        panic!("expected var decl with initializer");
    };
    assert!(matches!(
        init.kind,
        ExprKind::Literal(LiteralValue::I32(i32::MIN))
    ));
}

#[test]
fn test_double_literal_is_f64() {
    let kind = parse_single_stmt("var x = 2.5;");
    let StmtKind::VarDecl { init: Some(init), .. } = kind else {
        panic!("expected var decl with initializer");
    };
    assert!(matches!(
        init.kind,
        ExprKind::Literal(LiteralValue::F64(v)) if v == 2.5
    ));
}
