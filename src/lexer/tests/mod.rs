//! Unit tests for the lexer module.

use super::*;
use crate::token::TokenKind;

/// Helper function to tokenize input and return only the kinds.
pub(super) fn tokenize_kinds(input: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(input);
    lexer
        .tokenize()
        .unwrap_or_else(|e| panic!("Tokenization failed for input {:?}: {}", input, e))
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

/// Helper function to tokenize input and return the error.
pub(super) fn tokenize_error(input: &str) -> LexError {
    let mut lexer = Lexer::new(input);
    match lexer.tokenize() {
        Ok(tokens) => panic!(
            "Expected tokenization to fail for input {:?}, but it succeeded with {} tokens",
            input,
            tokens.len()
        ),
        Err(e) => e,
    }
}

fn ident(name: &str) -> TokenKind {
    TokenKind::Identifier(name.to_string())
}

fn int(text: &str) -> TokenKind {
    TokenKind::IntLiteral(text.to_string())
}

mod comments;
mod keywords;
mod operators;

#[test]
fn test_empty_input_is_just_eof() {
    assert_eq!(tokenize_kinds(""), vec![TokenKind::Eof]);
}

#[test]
fn test_whitespace_only_input() {
    assert_eq!(tokenize_kinds("  \n\t  "), vec![TokenKind::Eof]);
}

#[test]
fn test_var_declaration_tokens() {
    let kinds = tokenize_kinds("var x: i32 = 41;");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Var,
            ident("x"),
            TokenKind::Colon,
            TokenKind::Type("i32".to_string()),
            TokenKind::Assign,
            int("41"),
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_for_range_tokens() {
    let kinds = tokenize_kinds("for i = 0 .. 3 {");
    assert_eq!(
        kinds,
        vec![
            TokenKind::For,
            ident("i"),
            TokenKind::Assign,
            int("0"),
            TokenKind::Range,
            int("3"),
            TokenKind::LBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_invalid_character_becomes_invalid_token() {
    let kinds = tokenize_kinds("var @;");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Var,
            TokenKind::Invalid('@'),
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_array_and_index_punctuation() {
    let kinds = tokenize_kinds("a[0]");
    assert_eq!(
        kinds,
        vec![
            ident("a"),
            TokenKind::LBracket,
            int("0"),
            TokenKind::RBracket,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_member_access_dot() {
    let kinds = tokenize_kinds("p.x");
    assert_eq!(
        kinds,
        vec![ident("p"), TokenKind::Dot, ident("x"), TokenKind::Eof]
    );
}
