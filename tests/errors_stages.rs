//! Error reporting tests across the compilation stages.
//!
//! These tests verify that each failure is detected at the right stage
//! with the right error kind, and that messages identify the offending
//! token or name.

mod common;

use common::{CompileErrorKind, assert_compile_error};

use aiko::codegen::CodegenErrorKind;
use aiko::lexer::LexErrorKind;
use aiko::parser::ParseErrorKind;

#[test]
fn test_unterminated_string_fails_at_lex() {
    let message = assert_compile_error(
        "print('oops);",
        CompileErrorKind::Lex(LexErrorKind::UnterminatedString),
    );
    assert!(message.contains("Unterminated"), "{}", message);
}

#[test]
fn test_invalid_character_fails_at_parse() {
    let message = assert_compile_error(
        "var x = 1 @ 2;",
        CompileErrorKind::Parse(ParseErrorKind::InvalidToken),
    );
    assert!(message.contains('@'), "{}", message);
}

#[test]
fn test_missing_semicolon_fails_at_parse() {
    let message = assert_compile_error(
        "print(1)",
        CompileErrorKind::Parse(ParseErrorKind::UnexpectedToken),
    );
    assert!(message.contains("';'"), "{}", message);
}

#[test]
fn test_struct_field_without_type_fails_at_parse() {
    assert_compile_error(
        "struct P { x };",
        CompileErrorKind::Parse(ParseErrorKind::MissingFieldType),
    );
}

#[test]
fn test_static_type_reassignment_fails_at_codegen() {
    let message = assert_compile_error(
        "var x: i32 = 41; x = 's';",
        CompileErrorKind::Codegen(CodegenErrorKind::TypeMismatch),
    );
    assert!(message.contains("'x'"), "{}", message);
}

#[test]
fn test_dynamic_reassignment_is_allowed() {
    assert!(common::compile_error("var x = 41; x = 's';").is_none());
}

#[test]
fn test_unknown_variable_fails_at_codegen() {
    let message = assert_compile_error(
        "print(ghost);",
        CompileErrorKind::Codegen(CodegenErrorKind::UnknownName),
    );
    assert!(message.contains("ghost"), "{}", message);
}

#[test]
fn test_unknown_function_fails_at_codegen() {
    assert_compile_error(
        "ghost(1, 2);",
        CompileErrorKind::Codegen(CodegenErrorKind::UnknownName),
    );
}

#[test]
fn test_unknown_struct_type_fails_at_codegen() {
    assert_compile_error(
        "var p = Ghost { x: 1 };",
        CompileErrorKind::Codegen(CodegenErrorKind::UnknownName),
    );
}

#[test]
fn test_struct_redefinition_fails_at_codegen() {
    let message = assert_compile_error(
        "struct P { x: i32 }; struct P { x: i32 };",
        CompileErrorKind::Codegen(CodegenErrorKind::Redefinition),
    );
    assert!(message.contains("'P'"), "{}", message);
}

#[test]
fn test_heterogeneous_array_fails_at_codegen() {
    assert_compile_error(
        "var a = [1, 2.5];",
        CompileErrorKind::Codegen(CodegenErrorKind::TypeMismatch),
    );
}

#[test]
fn test_array_element_store_type_fails_at_codegen() {
    assert_compile_error(
        "var a = [1, 2]; a[0] = 1.5;",
        CompileErrorKind::Codegen(CodegenErrorKind::TypeMismatch),
    );
}

#[test]
fn test_break_outside_loop_fails_at_codegen() {
    assert_compile_error(
        "break;",
        CompileErrorKind::Codegen(CodegenErrorKind::InvalidOperation),
    );
}

#[test]
fn test_continue_outside_loop_fails_at_codegen() {
    assert_compile_error(
        "continue;",
        CompileErrorKind::Codegen(CodegenErrorKind::InvalidOperation),
    );
}

#[test]
fn test_member_access_on_non_struct_fails_at_codegen() {
    assert_compile_error(
        "var x = 1; print(x.y);",
        CompileErrorKind::Codegen(CodegenErrorKind::InvalidOperation),
    );
}

#[test]
fn test_unknown_member_fails_at_codegen() {
    assert_compile_error(
        "struct P { x: i32 }; var p = P { x: 1 }; print(p.z);",
        CompileErrorKind::Codegen(CodegenErrorKind::UnknownName),
    );
}
