//! Type annotation parsing.

use super::Parser;
use super::error::ParseError;
use crate::ast::Type;
use crate::token::TokenKind;

impl Parser {
    /// Parses a type annotation from a `Type` token.
    ///
    /// The lexer only produces `Type` tokens for the six primitive type
    /// names, so the mapping cannot yield [`Type::Unknown`]. `f32` folds
    /// to [`Type::F64`].
    pub(super) fn parse_type(&mut self) -> Result<Type, ParseError> {
        if let TokenKind::Type(name) = self.current_kind() {
            let ty = Type::from_name(name);
            self.advance();
            Ok(ty)
        } else {
            Err(self.unexpected_here("type name"))
        }
    }
}
