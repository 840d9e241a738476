//! Tests for operator and comparison recognition.

use super::*;

fn op(spelling: &str) -> TokenKind {
    TokenKind::Operator(spelling.to_string())
}

fn cmp(spelling: &str) -> TokenKind {
    TokenKind::Comparison(spelling.to_string())
}

#[test]
fn test_arithmetic_operators() {
    assert_eq!(
        tokenize_kinds("+ - * / %"),
        vec![op("+"), op("-"), op("*"), op("/"), op("%"), TokenKind::Eof]
    );
}

#[test]
fn test_compound_assignment_operators() {
    assert_eq!(
        tokenize_kinds("+= -= *= /= %="),
        vec![op("+="), op("-="), op("*="), op("/="), op("%="), TokenKind::Eof]
    );
}

#[test]
fn test_comparison_operators() {
    assert_eq!(
        tokenize_kinds("== != < > <= >="),
        vec![
            cmp("=="),
            cmp("!="),
            cmp("<"),
            cmp(">"),
            cmp("<="),
            cmp(">="),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_bare_assign_and_not() {
    assert_eq!(
        tokenize_kinds("= !"),
        vec![TokenKind::Assign, op("!"), TokenKind::Eof]
    );
}

#[test]
fn test_double_equals_is_not_two_assigns() {
    assert_eq!(tokenize_kinds("=="), vec![cmp("=="), TokenKind::Eof]);
}

#[test]
fn test_compound_assignment_statement() {
    let kinds = tokenize_kinds("x += 2;");
    assert_eq!(
        kinds,
        vec![
            ident("x"),
            op("+="),
            int("2"),
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}
