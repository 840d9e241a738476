//! Code generation error types.
//!
//! This module defines [`CodegenError`], which represents errors that can
//! occur during LLVM code generation. Type checking is interleaved with IR
//! emission, so type errors surface here rather than in a separate pass.

use crate::token::Span;

/// The kind of a code generation error, for structured matching in tests
/// and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodegenErrorKind {
    /// A value's type does not match what the context requires
    /// (heterogeneous array literal, static-type reassignment, wrong
    /// element type in an array store).
    TypeMismatch,
    /// A reference to an undeclared variable, function, struct type or
    /// struct field.
    UnknownName,
    /// An operator or construct applied to an unsupported operand
    /// (unary on the wrong type, `typeof` on an uninferable expression,
    /// `break` outside a loop).
    InvalidOperation,
    /// A struct name was declared more than once.
    Redefinition,
    /// An LLVM-level failure. These indicate compiler bugs or environment
    /// problems, not user errors.
    Internal,
}

/// An error that occurred during code generation.
///
/// Contains a human-readable message and optionally the source location
/// where the error occurred, enabling rich error reporting. Every error is
/// fatal to the compilation; nothing is recovered locally.
#[derive(Debug)]
pub struct CodegenError {
    kind: CodegenErrorKind,
    message: String,
    span: Option<Span>,
}

impl CodegenError {
    /// Creates a type-mismatch error.
    pub(crate) fn type_mismatch(message: impl Into<String>, span: Span) -> Self {
        CodegenError {
            kind: CodegenErrorKind::TypeMismatch,
            message: message.into(),
            span: Some(span),
        }
    }

    /// Creates an unknown-name error.
    pub(crate) fn unknown_name(message: impl Into<String>, span: Span) -> Self {
        CodegenError {
            kind: CodegenErrorKind::UnknownName,
            message: message.into(),
            span: Some(span),
        }
    }

    /// Creates an invalid-operation error.
    pub(crate) fn invalid_operation(message: impl Into<String>, span: Span) -> Self {
        CodegenError {
            kind: CodegenErrorKind::InvalidOperation,
            message: message.into(),
            span: Some(span),
        }
    }

    /// Creates a redefinition error.
    pub(crate) fn redefinition(message: impl Into<String>, span: Span) -> Self {
        CodegenError {
            kind: CodegenErrorKind::Redefinition,
            message: message.into(),
            span: Some(span),
        }
    }

    /// Creates an internal error without a source location.
    pub(crate) fn internal(message: impl Into<String>) -> Self {
        CodegenError {
            kind: CodegenErrorKind::Internal,
            message: message.into(),
            span: None,
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> CodegenErrorKind {
        self.kind
    }

    /// Returns the detailed error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns a short title for this error, used in report headers.
    pub fn short_message(&self) -> &'static str {
        match self.kind {
            CodegenErrorKind::TypeMismatch => "Type mismatch",
            CodegenErrorKind::UnknownName => "Unknown name",
            CodegenErrorKind::InvalidOperation => "Invalid operation",
            CodegenErrorKind::Redefinition => "Redefinition",
            CodegenErrorKind::Internal => "Internal compiler error",
        }
    }

    /// Returns the source location where the error occurred, if known.
    pub fn span(&self) -> Option<Span> {
        self.span
    }
}

impl std::fmt::Display for CodegenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(span) = &self.span {
            write!(f, "{}:{}: {}", span.line, span.column, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for CodegenError {}
