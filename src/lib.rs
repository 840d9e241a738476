//! The Aiko programming language compiler library.
//!
//! This library provides the core components of the Aiko compiler:
//! lexical analysis, parsing, and code generation.
//!
//! # Modules
//!
//! - [`token`] - Token types and source location tracking
//! - [`lexer`] - Lexical analysis (tokenization)
//! - [`parser`] - Recursive descent parser
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`codegen`] - LLVM code generation and textual IR output
//!
//! # Example
//!
//! ```no_run
//! use aiko::codegen::Codegen;
//! use aiko::lexer::Lexer;
//! use aiko::parser::Parser;
//! use inkwell::context::Context;
//! use std::path::Path;
//!
//! // Source code to compile
//! let source = "print('Hello, World!');";
//!
//! // Lexical analysis
//! let mut lexer = Lexer::new(source);
//! let tokens = lexer.tokenize().expect("Lexer error");
//!
//! // Parsing
//! let mut parser = Parser::new(tokens);
//! let program = parser.parse().expect("Parse error");
//!
//! // Code generation
//! let context = Context::create();
//! let mut codegen = Codegen::new(&context, "my_program");
//! codegen.compile(&program).expect("Codegen error");
//!
//! // Write the textual IR for the external back-end
//! codegen.write_ir_file(Path::new("out/main.ll")).expect("Write error");
//! ```

pub mod ast;
pub mod codegen;
pub mod lexer;
pub mod parser;
pub mod token;
