//! Primitive type tags for the Aiko AST.

use std::fmt;

/// A primitive type in the Aiko language.
///
/// This is the type vocabulary shared by declarations, literals, struct
/// fields and the code generator. The surface syntax also accepts `f32`,
/// which the parser folds to [`Type::F64`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// 32-bit signed integer (`i32` in Aiko source code).
    I32,
    /// 64-bit signed integer (`i64` in Aiko source code).
    I64,
    /// Double-precision float (`f64`, and folded `f32`).
    F64,
    /// Boolean (`bool`).
    Bool,
    /// String (`str`), represented as a byte pointer in the IR.
    Str,
    /// A struct instance; the concrete layout name lives in the binding.
    Struct,
    /// No type information. Used for declarations without an annotation
    /// until an initializer fixes the type.
    Unknown,
}

impl Type {
    /// Maps a type name from the source (`i32`, `f32`, ...) to its tag.
    ///
    /// `f32` folds to [`Type::F64`]; unknown names map to [`Type::Unknown`].
    pub fn from_name(name: &str) -> Type {
        match name {
            "i32" => Type::I32,
            "i64" => Type::I64,
            "f32" | "f64" => Type::F64,
            "bool" => Type::Bool,
            "str" => Type::Str,
            _ => Type::Unknown,
        }
    }
}

/// Displays the type the way `typeof` spells it.
impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::I32 => write!(f, "i32"),
            Type::I64 => write!(f, "i64"),
            Type::F64 => write!(f, "double"),
            Type::Bool => write!(f, "bool"),
            Type::Str => write!(f, "str"),
            Type::Struct => write!(f, "struct"),
            Type::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_folds_f32() {
        assert_eq!(Type::from_name("f32"), Type::F64);
        assert_eq!(Type::from_name("f64"), Type::F64);
    }

    #[test]
    fn test_from_name_primitives() {
        assert_eq!(Type::from_name("i32"), Type::I32);
        assert_eq!(Type::from_name("i64"), Type::I64);
        assert_eq!(Type::from_name("bool"), Type::Bool);
        assert_eq!(Type::from_name("str"), Type::Str);
        assert_eq!(Type::from_name("banana"), Type::Unknown);
    }

    #[test]
    fn test_display_matches_typeof_spelling() {
        assert_eq!(Type::F64.to_string(), "double");
        assert_eq!(Type::Str.to_string(), "str");
        assert_eq!(Type::I32.to_string(), "i32");
    }
}
