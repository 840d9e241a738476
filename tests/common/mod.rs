//! Common test utilities for Aiko integration tests.
//!
//! This module provides shared helper functions and types used across
//! all integration test files.

// Each test file is compiled as a separate crate, so not all functions
// are used in every test file. This is expected behavior.
#![allow(dead_code)]

use aiko::codegen::{Codegen, CodegenErrorKind};
use aiko::lexer::{LexErrorKind, Lexer};
use aiko::parser::{ParseErrorKind, Parser};

use inkwell::context::Context;

/// Represents the stage at which compilation failed.
#[derive(Debug)]
pub enum CompileStage {
    Lex,
    Parse,
    Codegen,
}

/// Represents the error kind for each compilation stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileErrorKind {
    Lex(LexErrorKind),
    Parse(ParseErrorKind),
    Codegen(CodegenErrorKind),
}

/// Compiles a single-file Aiko program and returns the verified textual
/// IR.
///
/// This helper performs the complete pipeline: lexing -> parsing ->
/// codegen -> LLVM verification -> IR printing.
pub fn compile_to_ir(source: &str) -> Result<String, String> {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize().map_err(|e| e.to_string())?;

    let mut parser = Parser::new(tokens);
    let program = parser.parse().map_err(|e| e.to_string())?;

    let context = Context::create();
    let mut codegen = Codegen::new(&context, "integration_test");
    codegen.compile(&program).map_err(|e| e.to_string())?;
    codegen.verify().map_err(|e| e.to_string())?;

    Ok(codegen.print_to_string())
}

/// Compiles a program and panics with context if any stage fails.
pub fn compile_ok(source: &str) -> String {
    compile_to_ir(source)
        .unwrap_or_else(|e| panic!("Expected {:?} to compile, but it failed: {}", source, e))
}

/// Attempts to lex, parse, and compile a program.
/// Returns the stage, error message and error kind if any stage fails.
pub fn compile_error(source: &str) -> Option<(CompileStage, String, CompileErrorKind)> {
    let mut lexer = Lexer::new(source);
    let tokens = match lexer.tokenize() {
        Ok(t) => t,
        Err(e) => {
            return Some((
                CompileStage::Lex,
                e.message().to_string(),
                CompileErrorKind::Lex(e.kind()),
            ));
        }
    };

    let mut parser = Parser::new(tokens);
    let program = match parser.parse() {
        Ok(p) => p,
        Err(e) => {
            return Some((
                CompileStage::Parse,
                e.message().to_string(),
                CompileErrorKind::Parse(e.kind()),
            ));
        }
    };

    let context = Context::create();
    let mut codegen = Codegen::new(&context, "integration_test");
    match codegen.compile(&program) {
        Ok(()) => None,
        Err(e) => Some((
            CompileStage::Codegen,
            e.message().to_string(),
            CompileErrorKind::Codegen(e.kind()),
        )),
    }
}

/// Asserts that compilation fails at the expected stage with the
/// expected kind.
pub fn assert_compile_error(source: &str, expected: CompileErrorKind) -> String {
    let (stage, message, kind) = compile_error(source)
        .unwrap_or_else(|| panic!("Expected compilation of {:?} to fail", source));
    assert_eq!(
        kind, expected,
        "wrong error kind at stage {:?} for {:?}: {}",
        stage, source, message
    );
    message
}
