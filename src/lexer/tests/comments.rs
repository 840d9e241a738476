//! Tests for comment and whitespace handling.

use super::*;

#[test]
fn test_line_comment_is_skipped() {
    assert_eq!(
        tokenize_kinds("# a comment\nprint"),
        vec![TokenKind::Print, TokenKind::Eof]
    );
}

#[test]
fn test_trailing_comment() {
    assert_eq!(
        tokenize_kinds("var x; # trailing"),
        vec![
            TokenKind::Var,
            ident("x"),
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_consecutive_comment_lines() {
    assert_eq!(
        tokenize_kinds("# one\n# two\n# three\nbreak"),
        vec![TokenKind::Break, TokenKind::Eof]
    );
}

#[test]
fn test_comment_at_end_of_input() {
    assert_eq!(tokenize_kinds("# only a comment"), vec![TokenKind::Eof]);
}

#[test]
fn test_hash_inside_string_is_not_a_comment() {
    assert_eq!(
        tokenize_kinds("'#not a comment'"),
        vec![
            TokenKind::StringLiteral("#not a comment".to_string()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_line_and_column_tracking() {
    let mut lexer = Lexer::new("var\n  x");
    let tokens = lexer.tokenize().unwrap();
    assert_eq!(tokens[0].span.line, 1);
    assert_eq!(tokens[0].span.column, 1);
    assert_eq!(tokens[1].span.line, 2);
    assert_eq!(tokens[1].span.column, 3);
}
