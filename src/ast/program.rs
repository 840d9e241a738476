//! Top-level program structure for the Aiko AST.

use super::stmt::Stmt;

/// The root node of an Aiko program's AST.
///
/// A `Program` is an ordered sequence of top-level statements. The code
/// generator wraps them in an implicit `main` function; `fun` and `struct`
/// declarations become siblings of it.
#[derive(Debug)]
pub struct Program {
    /// The top-level statements, in source order.
    pub statements: Vec<Stmt>,
}
