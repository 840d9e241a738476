//! Statement nodes for the Aiko AST.

use crate::token::Span;

use super::expr::Expr;
use super::types::Type;

/// A function parameter.
///
/// Parameters without an explicit `: type` annotation default to `i32`
/// during code generation; `static_type` records whether the annotation
/// was present.
#[derive(Debug, Clone)]
pub struct Param {
    /// The parameter name.
    pub name: String,
    /// The annotated type, or [`Type::Unknown`] without an annotation.
    pub ty: Type,
    /// Whether an explicit type annotation was given.
    pub static_type: bool,
    /// The source location of the parameter.
    pub span: Span,
}

/// One `elif` arm of an `if` statement.
#[derive(Debug, Clone)]
pub struct ElifArm {
    /// The arm's condition.
    pub condition: Expr,
    /// The arm's body.
    pub block: Vec<Stmt>,
}

/// A field of a struct declaration. Every field carries an explicit
/// primitive type; nested structs are not allowed.
#[derive(Debug, Clone)]
pub struct StructField {
    /// The field name.
    pub name: String,
    /// The field's primitive type.
    pub ty: Type,
    /// The source location of the field.
    pub span: Span,
}

/// The kind of a statement in the Aiko language.
#[derive(Debug, Clone)]
pub enum StmtKind {
    /// A variable declaration with `var`.
    VarDecl {
        /// The name of the variable being declared.
        name: String,
        /// The annotated type, or [`Type::Unknown`] without an annotation.
        ty: Type,
        /// Whether an explicit `: type` annotation was present. A static
        /// type locks the variable's type for its lifetime.
        static_type: bool,
        /// The optional initializer expression.
        init: Option<Expr>,
    },

    /// An assignment `name = value`, or an array element store
    /// `name[index] = value` when `index` is present.
    Assign {
        /// The target variable name.
        name: String,
        /// The element index for array element stores.
        index: Option<Expr>,
        /// The value expression.
        value: Expr,
    },

    /// A `print(expr);` statement.
    Print(Expr),

    /// A conditional with zero or more `elif` arms and an optional
    /// `else` block (empty when absent).
    If {
        /// The primary condition.
        condition: Expr,
        /// Statements executed when the condition holds.
        then_block: Vec<Stmt>,
        /// The ordered `elif` arms.
        elifs: Vec<ElifArm>,
        /// The `else` block; empty when no `else` was written.
        else_block: Vec<Stmt>,
    },

    /// A `for name = start .. end { ... }` loop over the half-open range
    /// `[start, end)`.
    For {
        /// The loop variable name.
        var: String,
        /// The start expression (inclusive).
        start: Expr,
        /// The end expression (exclusive).
        end: Expr,
        /// The step expression. The parser synthesizes a `±1` literal.
        step: Expr,
        /// The loop body.
        body: Vec<Stmt>,
    },

    /// Exits the innermost enclosing loop.
    Break,

    /// Skips to the next iteration of the innermost enclosing loop.
    Continue,

    /// A function declaration with `fun`.
    FunctionDecl {
        /// The function name.
        name: String,
        /// The ordered parameter list.
        params: Vec<Param>,
        /// The function body.
        body: Vec<Stmt>,
    },

    /// A return statement; `return;` carries no value.
    Return(Option<Expr>),

    /// A struct type declaration.
    StructDecl {
        /// The struct type name.
        name: String,
        /// The ordered fields.
        fields: Vec<StructField>,
    },

    /// An expression evaluated for its side effects — a statement-level
    /// function call.
    Expr(Expr),
}

/// A statement in the Aiko language with source location.
#[derive(Debug, Clone)]
pub struct Stmt {
    /// The kind of statement.
    pub kind: StmtKind,
    /// The source location of this statement.
    pub span: Span,
}

impl Stmt {
    /// Creates a new statement with the given kind and span.
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}
