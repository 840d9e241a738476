//! Compilation driver.
//!
//! Orchestrates the pipeline for a single source file: read → lex →
//! parse → codegen → verify → write IR. Each stage's error is unified
//! into [`CompileError`] and carried together with the source context so
//! the diagnostics module can render labeled reports.

use aiko::codegen::{Codegen, CodegenError};
use aiko::lexer::{LexError, Lexer};
use aiko::parser::{ParseError, Parser};
use inkwell::context::Context;
use std::path::Path;

/// A compilation error from any phase of the pipeline.
pub(crate) enum CompileError {
    /// An error during lexical analysis.
    Lex(LexError),
    /// An error during parsing.
    Parse(ParseError),
    /// An error during code generation.
    Codegen(CodegenError),
    /// Failed to read the source file.
    FileRead {
        path: String,
        source: std::io::Error,
    },
    /// Failed to create the output directory.
    OutputDir {
        path: String,
        source: std::io::Error,
    },
}

impl CompileError {
    /// Returns whether this error is an unexpected internal failure
    /// rather than a problem with the compiled program.
    ///
    /// The CLI maps internal failures to exit code `-1` and ordinary
    /// compile errors to `1`.
    pub(crate) fn is_internal(&self) -> bool {
        match self {
            CompileError::Lex(_) | CompileError::Parse(_) => false,
            CompileError::Codegen(error) => {
                error.kind() == aiko::codegen::CodegenErrorKind::Internal
            }
            CompileError::FileRead { .. } | CompileError::OutputDir { .. } => true,
        }
    }
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::Lex(error) => write!(f, "{}", error),
            CompileError::Parse(error) => write!(f, "{}", error),
            CompileError::Codegen(error) => write!(f, "{}", error),
            CompileError::FileRead { path, source } => {
                write!(f, "Failed to read '{}': {}", path, source)
            }
            CompileError::OutputDir { path, source } => {
                write!(f, "Failed to create output directory '{}': {}", path, source)
            }
        }
    }
}

/// A compile error together with the filename and source text it
/// occurred in, for diagnostics rendering.
pub(crate) struct CompileErrorWithContext {
    filename: String,
    source: String,
    error: CompileError,
}

impl CompileErrorWithContext {
    /// Returns the name of the file that failed to compile.
    pub(crate) fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns the source text of the failing file.
    pub(crate) fn source(&self) -> &str {
        &self.source
    }

    /// Returns the underlying error.
    pub(crate) fn error(&self) -> &CompileError {
        &self.error
    }

    /// See [`CompileError::is_internal`].
    pub(crate) fn is_internal(&self) -> bool {
        self.error.is_internal()
    }
}

/// Compiles `file` and writes the textual IR to `output`.
///
/// Runs the full pipeline; with `print_ir` the module is also printed to
/// stdout. The output directory is created if it does not exist.
pub(crate) fn build(
    file: &str,
    output: &str,
    print_ir: bool,
) -> Result<(), Box<CompileErrorWithContext>> {
    let source = std::fs::read_to_string(file).map_err(|e| {
        Box::new(CompileErrorWithContext {
            filename: file.to_string(),
            source: String::new(),
            error: CompileError::FileRead {
                path: file.to_string(),
                source: e,
            },
        })
    })?;

    let with_context = |error: CompileError| {
        Box::new(CompileErrorWithContext {
            filename: file.to_string(),
            source: source.clone(),
            error,
        })
    };

    let mut lexer = Lexer::new(&source);
    let tokens = lexer
        .tokenize()
        .map_err(|e| with_context(CompileError::Lex(e)))?;

    let mut parser = Parser::new(tokens);
    let program = parser
        .parse()
        .map_err(|e| with_context(CompileError::Parse(e)))?;

    let context = Context::create();
    let module_name = Path::new(file)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("aiko");
    let mut codegen = Codegen::new(&context, module_name);
    codegen
        .compile(&program)
        .map_err(|e| with_context(CompileError::Codegen(e)))?;
    codegen
        .verify()
        .map_err(|e| with_context(CompileError::Codegen(e)))?;

    if print_ir {
        print!("{}", codegen.print_to_string());
    }

    let output_path = Path::new(output);
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            with_context(CompileError::OutputDir {
                path: parent.display().to_string(),
                source: e,
            })
        })?;
    }

    codegen
        .write_ir_file(output_path)
        .map_err(|e| with_context(CompileError::Codegen(e)))?;

    Ok(())
}
