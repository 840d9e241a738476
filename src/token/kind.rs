//! Token kinds for the Aiko lexer.
//!
//! This module defines the [`TokenKind`] enum representing all possible
//! token types in the Aiko language.

/// The kind of token recognized by the lexer.
///
/// Each variant may carry associated data: the lexeme for numeric literals
/// (classification into `i32`/`i64` happens in the parser), the literal
/// value for strings and booleans, and the spelling for identifiers, type
/// names, operators and comparisons.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// An integer literal lexeme (e.g. `42`, or `-7` after the lexer folds
    /// a `-` that immediately precedes a digit).
    IntLiteral(String),

    /// A floating-point literal lexeme (`digits '.' digits`).
    DoubleLiteral(String),

    /// A string literal enclosed in matching `'` or `"` quotes.
    ///
    /// No escape processing is performed; the payload is the raw text
    /// between the quotes.
    StringLiteral(String),

    /// A boolean literal, the exact word `true` or `false`.
    BoolLiteral(bool),

    /// A primitive type name: `i32`, `i64`, `f32`, `f64`, `bool` or `str`.
    Type(String),

    /// The `var` keyword for variable declarations.
    Var,

    /// The `print` keyword.
    Print,

    /// The `if` keyword.
    If,

    /// The `elif` keyword.
    Elif,

    /// The `else` keyword.
    Else,

    /// The `for` keyword.
    For,

    /// The `fun` keyword for function declarations.
    Fun,

    /// The `return` keyword.
    Return,

    /// The two-character range operator `..`.
    Range,

    /// The `typeof` keyword.
    Typeof,

    /// The `input` keyword.
    Input,

    /// The `break` keyword.
    Break,

    /// The `continue` keyword.
    Continue,

    /// The `struct` keyword.
    Struct,

    /// An identifier: `[A-Za-z][A-Za-z0-9]*`, not matching any keyword.
    Identifier(String),

    /// An arithmetic or compound-assignment operator
    /// (`+ - * / % += -= *= /= %=`), or unary `!`.
    Operator(String),

    /// The bare assignment operator `=`.
    Assign,

    /// A comparison operator: `== != < > <= >=`.
    Comparison(String),

    /// A semicolon `;`.
    Semicolon,

    /// A left parenthesis `(`.
    LParen,

    /// A right parenthesis `)`.
    RParen,

    /// A left brace `{`.
    LBrace,

    /// A right brace `}`.
    RBrace,

    /// A comma `,`.
    Comma,

    /// A colon `:`.
    Colon,

    /// A left bracket `[`.
    LBracket,

    /// A right bracket `]`.
    RBracket,

    /// A dot `.` for struct member access.
    Dot,

    /// An unrecognized character. The parser rejects these.
    Invalid(char),

    /// End of file marker.
    ///
    /// The lexer always appends this as the final token, ensuring
    /// the token vector is never empty.
    Eof,
}
