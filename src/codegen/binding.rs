//! Variable binding management for code generation.
//!
//! This module defines [`VarBinding`], which records a variable's stack
//! allocation and type information during code generation.

use crate::ast::Type;
use inkwell::values::PointerValue;

/// A variable binding in the symbol table.
///
/// Stores the stack allocation pointer and declared type for a variable,
/// plus the array and struct metadata the code generator needs for
/// bounds checks, element typing and member access.
///
/// # Invariants
///
/// - The pointee type of `alloca` corresponds to `ty` (the element type
///   for arrays, the named layout for structs).
/// - `is_array` implies `size >= 1`.
/// - `struct_name` is `Some` iff `ty` is [`Type::Struct`].
#[derive(Clone, Debug)]
pub(super) struct VarBinding<'ctx> {
    /// The stack allocation for this variable, emitted in the entry block
    /// of its enclosing function.
    alloca: PointerValue<'ctx>,
    /// The declared primitive type (the element type for arrays).
    ty: Type,
    /// Whether this binding is a fixed-size array slab.
    is_array: bool,
    /// The compile-time element count; 1 for scalars.
    size: u32,
    /// Whether the declaration carried an explicit type annotation,
    /// locking the type against reassignment with a different one.
    static_type: bool,
    /// The struct layout name for struct instances.
    struct_name: Option<String>,
}

impl<'ctx> VarBinding<'ctx> {
    /// Creates a scalar binding.
    pub(super) fn scalar(alloca: PointerValue<'ctx>, ty: Type, static_type: bool) -> Self {
        VarBinding {
            alloca,
            ty,
            is_array: false,
            size: 1,
            static_type,
            struct_name: None,
        }
    }

    /// Creates an array binding with the given element type and size.
    pub(super) fn array(
        alloca: PointerValue<'ctx>,
        element_ty: Type,
        size: u32,
        static_type: bool,
    ) -> Self {
        VarBinding {
            alloca,
            ty: element_ty,
            is_array: true,
            size,
            static_type,
            struct_name: None,
        }
    }

    /// Creates a struct-instance binding for the named layout.
    pub(super) fn struct_instance(
        alloca: PointerValue<'ctx>,
        struct_name: impl Into<String>,
        static_type: bool,
    ) -> Self {
        VarBinding {
            alloca,
            ty: Type::Struct,
            is_array: false,
            size: 1,
            static_type,
            struct_name: Some(struct_name.into()),
        }
    }

    /// Returns the stack allocation pointer for this variable.
    pub(super) fn alloca(&self) -> PointerValue<'ctx> {
        self.alloca
    }

    /// Returns the declared type of this variable (the element type for
    /// arrays).
    pub(super) fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns whether this binding is an array.
    pub(super) fn is_array(&self) -> bool {
        self.is_array
    }

    /// Returns the compile-time element count.
    pub(super) fn size(&self) -> u32 {
        self.size
    }

    /// Returns whether the declared type is locked.
    pub(super) fn static_type(&self) -> bool {
        self.static_type
    }

    /// Returns the struct layout name for struct instances.
    pub(super) fn struct_name(&self) -> Option<&str> {
        self.struct_name.as_deref()
    }
}
