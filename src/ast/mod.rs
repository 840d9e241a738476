//! Abstract Syntax Tree definitions for the Aiko programming language.
//!
//! This module defines the data structures that represent parsed Aiko
//! programs. The AST is produced by the [`crate::parser`] and consumed by
//! the [`crate::codegen`].
//!
//! # Structure
//!
//! The AST is a tree with single-owner ownership; child nodes are owned by
//! their parents:
//! - [`Program`] - The root node containing all top-level statements
//! - [`Stmt`] / [`StmtKind`] - Statements (declarations, control flow, ...)
//! - [`Expr`] / [`ExprKind`] - Expressions embedded as statement subtrees
//! - [`Type`] - Primitive type tags
//!
//! Each AST node includes source location information
//! ([`Span`](crate::token::Span)) for error reporting.
//!
//! # Module Structure
//!
//! - [`types`] - Primitive type tags
//! - [`expr`] - Expression nodes, operators and literal values
//! - [`stmt`] - Statement nodes
//! - [`program`] - Top-level program structure

mod expr;
mod program;
mod stmt;
mod types;

pub use expr::{BinaryOperator, Expr, ExprKind, LiteralValue, UnaryOperator};
pub use program::Program;
pub use stmt::{ElifArm, Param, Stmt, StmtKind, StructField};
pub use types::Type;
