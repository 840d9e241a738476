//! Struct layout registry for code generation.
//!
//! Struct declarations register a named LLVM record type together with a
//! field-name → index map; struct initializers and member accesses look
//! the layout up by name.

use inkwell::types::StructType;
use std::collections::HashMap;

/// A registered struct layout.
///
/// Names are unique within a compilation; re-declaring a struct is a
/// fatal [`Redefinition`](super::CodegenErrorKind::Redefinition) error.
#[derive(Clone, Debug)]
pub(super) struct StructLayout<'ctx> {
    /// The named LLVM record type.
    ty: StructType<'ctx>,
    /// Zero-based field indices keyed by field name.
    field_indices: HashMap<String, u32>,
}

impl<'ctx> StructLayout<'ctx> {
    /// Creates a layout from the LLVM type and the ordered field names.
    pub(super) fn new(ty: StructType<'ctx>, field_names: &[String]) -> Self {
        let field_indices = field_names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i as u32))
            .collect();
        StructLayout { ty, field_indices }
    }

    /// Returns the LLVM record type.
    pub(super) fn ty(&self) -> StructType<'ctx> {
        self.ty
    }

    /// Returns the zero-based index of a field, if it exists.
    pub(super) fn field_index(&self, name: &str) -> Option<u32> {
        self.field_indices.get(name).copied()
    }
}
