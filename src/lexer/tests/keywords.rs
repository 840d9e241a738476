//! Tests for keyword, type name and boolean recognition.

use super::*;

#[test]
fn test_all_keywords() {
    let kinds = tokenize_kinds(
        "var print if elif else for fun return typeof input break continue struct",
    );
    assert_eq!(
        kinds,
        vec![
            TokenKind::Var,
            TokenKind::Print,
            TokenKind::If,
            TokenKind::Elif,
            TokenKind::Else,
            TokenKind::For,
            TokenKind::Fun,
            TokenKind::Return,
            TokenKind::Typeof,
            TokenKind::Input,
            TokenKind::Break,
            TokenKind::Continue,
            TokenKind::Struct,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_type_names() {
    let kinds = tokenize_kinds("i32 i64 f32 f64 bool str");
    let expected: Vec<TokenKind> = ["i32", "i64", "f32", "f64", "bool", "str"]
        .iter()
        .map(|t| TokenKind::Type(t.to_string()))
        .chain(std::iter::once(TokenKind::Eof))
        .collect();
    assert_eq!(kinds, expected);
}

#[test]
fn test_boolean_literals() {
    assert_eq!(
        tokenize_kinds("true false"),
        vec![
            TokenKind::BoolLiteral(true),
            TokenKind::BoolLiteral(false),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_boolean_requires_word_boundary() {
    // `truex` is an identifier, not `true` followed by `x`.
    assert_eq!(tokenize_kinds("truex"), vec![ident("truex"), TokenKind::Eof]);
    assert_eq!(tokenize_kinds("falsey"), vec![ident("falsey"), TokenKind::Eof]);
}

#[test]
fn test_keyword_prefix_is_identifier() {
    assert_eq!(tokenize_kinds("variable"), vec![ident("variable"), TokenKind::Eof]);
    assert_eq!(tokenize_kinds("iffy"), vec![ident("iffy"), TokenKind::Eof]);
}

#[test]
fn test_identifier_with_digits() {
    assert_eq!(tokenize_kinds("row2col3"), vec![ident("row2col3"), TokenKind::Eof]);
}
