//! LLVM code generation for the Aiko programming language.
//!
//! This module provides the [`Codegen`] struct which transforms an Aiko
//! AST into an LLVM module and prints it as textual IR for an external
//! back-end.
//!
//! # Overview
//!
//! The code generator uses [Inkwell](https://github.com/TheDan64/inkwell),
//! a safe Rust wrapper around the LLVM C API. It performs the following
//! tasks:
//!
//! - Declares the external runtime symbols (`printf`, `puts`, `exit`,
//!   `atoi`, `atof`, `strcmp`, `fmod`, `runtime_input`)
//! - Generates an implicit `i32 @main` wrapping every top-level statement;
//!   user functions become sibling IR functions
//! - Interleaves type checking with emission: inference for implicit
//!   declarations, `f64` promotion across binary operators, static-type
//!   reassignment checks, array element typing
//! - Materializes every local (loop counters, parameters, input buffers,
//!   struct instances, array literals) as a stack slot in the entry block
//!   of its enclosing function, so slot addresses dominate all uses
//! - Synthesizes control-flow blocks for `if`/`elif`/`else` and `for`,
//!   with break/continue target stacking and bounds-checked array access
//! - Verifies the finished module and writes it to a `.ll` file
//!
//! # Example
//!
//! ```no_run
//! use aiko::codegen::Codegen;
//! use aiko::lexer::Lexer;
//! use aiko::parser::Parser;
//! use inkwell::context::Context;
//! use std::path::Path;
//!
//! let source = "var x: i32 = 41; print(x + 1);";
//! let tokens = Lexer::new(source).tokenize().expect("lex error");
//! let program = Parser::new(tokens).parse().expect("parse error");
//!
//! let context = Context::create();
//! let mut codegen = Codegen::new(&context, "example");
//! codegen.compile(&program).expect("codegen error");
//! codegen.write_ir_file(Path::new("out/main.ll")).expect("write error");
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Error types for code generation
//! - `binding` - Variable binding management
//! - `structs` - Struct layout registry
//! - `runtime` - External runtime declarations
//! - `stmt` - Statement code generation
//! - `expr` - Expression code generation
//! - `output` - Module verification and textual IR output
//! - `tests` - Unit tests (test-only)

mod binding;
mod error;
mod expr;
mod output;
mod runtime;
mod stmt;
mod structs;


pub use error::{CodegenError, CodegenErrorKind};

use crate::ast::{Program, Stmt, Type};
use crate::token::Span;
use binding::VarBinding;
use inkwell::AddressSpace;
use inkwell::basic_block::BasicBlock;
use inkwell::context::Context;
use inkwell::types::{BasicType, BasicTypeEnum};
use inkwell::values::{BasicValueEnum, FunctionValue, PointerValue};
use std::collections::HashMap;
use structs::StructLayout;

/// LLVM code generator for Aiko programs.
///
/// `Codegen` holds the LLVM context, module, and builder required for
/// generating IR, together with the scoped symbol table, the struct
/// registry and the break/continue target stacks.
///
/// # Lifetime
///
/// The `'ctx` lifetime parameter ties this struct to an LLVM [`Context`].
/// The context must outlive the code generator.
///
/// # Thread Safety
///
/// LLVM contexts are not thread-safe; a single compilation owns all of
/// this state exclusively.
pub struct Codegen<'ctx> {
    /// Reference to the LLVM context.
    context: &'ctx Context,
    /// The LLVM module being built.
    module: inkwell::module::Module<'ctx>,
    /// The IR builder for creating instructions.
    builder: inkwell::builder::Builder<'ctx>,
    /// Stack of variable scopes (innermost scope is at the end).
    ///
    /// Pushed on entering a block, loop body or function; popped on exit.
    /// Lookup walks the stack newest-first, so inner scopes shadow outer
    /// ones.
    variables: Vec<HashMap<String, VarBinding<'ctx>>>,
    /// Registered struct layouts keyed by struct name.
    structs: HashMap<String, StructLayout<'ctx>>,
    /// Stack of `break` branch targets (innermost loop at the end).
    break_targets: Vec<BasicBlock<'ctx>>,
    /// Stack of `continue` branch targets (innermost loop at the end).
    continue_targets: Vec<BasicBlock<'ctx>>,
}

impl<'ctx> Codegen<'ctx> {
    /// Creates a new code generator with the given LLVM context and
    /// module name.
    pub fn new(context: &'ctx Context, module_name: &str) -> Self {
        let module = context.create_module(module_name);
        let builder = context.create_builder();

        Codegen {
            context,
            module,
            builder,
            variables: Vec::new(),
            structs: HashMap::new(),
            break_targets: Vec::new(),
            continue_targets: Vec::new(),
        }
    }

    /// Compiles an Aiko program into the LLVM module.
    ///
    /// Declares the runtime symbols, then builds an implicit `i32 @main`
    /// containing every top-level statement in source order. `fun` and
    /// `struct` declarations encountered along the way register sibling
    /// functions and named record types. If the final block of `main` has
    /// no terminator, an implicit `return 0` is appended.
    ///
    /// After calling this method, use
    /// [`write_ir_file`](Self::write_ir_file) to emit the textual IR.
    ///
    /// # Errors
    ///
    /// Returns a [`CodegenError`] on the first type error, unknown name,
    /// invalid operation, struct redefinition or LLVM failure. Every
    /// error is fatal to the compilation.
    pub fn compile(&mut self, program: &Program) -> Result<(), CodegenError> {
        self.declare_runtime();

        let i32_type = self.context.i32_type();
        let main_type = i32_type.fn_type(&[], false);
        let main_fn = self.module.add_function("main", main_type, None);
        let entry = self.context.append_basic_block(main_fn, "entry");
        self.builder.position_at_end(entry);

        self.enter_scope();
        let result = self.generate_block(&program.statements);
        self.exit_scope();
        result?;

        if !self.current_block_terminated() {
            let zero = i32_type.const_int(0, false);
            self.builder
                .build_return(Some(&zero))
                .map_err(|e| CodegenError::internal(format!("failed to emit main return: {}", e)))?;
        }

        Ok(())
    }

    /// Returns the LLVM type corresponding to an Aiko primitive type.
    ///
    /// # Type Mapping
    ///
    /// - `i32` → LLVM `i32`
    /// - `i64` → LLVM `i64`
    /// - `f64` → LLVM `double`
    /// - `bool` → LLVM `i1`
    /// - `str` → LLVM `ptr`
    ///
    /// Struct slots carry their own layout type and never go through this
    /// mapping; `unknown` falls back to `i32`.
    fn llvm_type(&self, ty: &Type) -> BasicTypeEnum<'ctx> {
        match ty {
            Type::I32 => self.context.i32_type().into(),
            Type::I64 => self.context.i64_type().into(),
            Type::F64 => self.context.f64_type().into(),
            Type::Bool => self.context.bool_type().into(),
            Type::Str => self.context.i8_type().ptr_type(AddressSpace::default()).into(),
            Type::Struct | Type::Unknown => self.context.i32_type().into(),
        }
    }

    /// Returns the zero value used to default-initialize a declaration
    /// without an initializer.
    fn zero_value(&self, ty: &Type) -> BasicValueEnum<'ctx> {
        match ty {
            Type::I64 => self.context.i64_type().const_int(0, false).into(),
            Type::F64 => self.context.f64_type().const_float(0.0).into(),
            Type::Bool => self.context.bool_type().const_int(0, false).into(),
            Type::Str => self
                .context
                .i8_type()
                .ptr_type(AddressSpace::default())
                .const_null()
                .into(),
            Type::I32 | Type::Struct | Type::Unknown => {
                self.context.i32_type().const_int(0, false).into()
            }
        }
    }

    /// Infers the primitive type tag of a generated value from its LLVM
    /// type.
    fn infer_type_from_value(&self, value: BasicValueEnum<'ctx>) -> Type {
        match value {
            BasicValueEnum::IntValue(v) => match v.get_type().get_bit_width() {
                1 => Type::Bool,
                32 => Type::I32,
                64 => Type::I64,
                _ => Type::Unknown,
            },
            BasicValueEnum::FloatValue(_) => Type::F64,
            BasicValueEnum::PointerValue(_) => Type::Str,
            _ => Type::Unknown,
        }
    }

    /// Returns the function containing the current insertion point.
    fn current_function(&self, span: Span) -> Result<FunctionValue<'ctx>, CodegenError> {
        self.builder
            .get_insert_block()
            .and_then(|bb| bb.get_parent())
            .ok_or_else(|| {
                CodegenError::invalid_operation("no current function at this point", span)
            })
    }

    /// Emits a stack slot in the entry block of the current function.
    ///
    /// Every local is allocated here regardless of where the source-level
    /// declaration appears, so slot addresses dominate all uses. A
    /// temporary builder is positioned before the entry block's first
    /// instruction (or at its end when the block is still empty).
    fn create_entry_block_alloca(
        &self,
        name: &str,
        ty: impl BasicType<'ctx>,
        span: Span,
    ) -> Result<PointerValue<'ctx>, CodegenError> {
        let function = self.current_function(span)?;
        let entry = function.get_first_basic_block().ok_or_else(|| {
            CodegenError::internal(format!(
                "function '{}' has no entry block",
                function.get_name().to_string_lossy()
            ))
        })?;

        let entry_builder = self.context.create_builder();
        match entry.get_first_instruction() {
            Some(first) => entry_builder.position_before(&first),
            None => entry_builder.position_at_end(entry),
        }

        entry_builder.build_alloca(ty, name).map_err(|e| {
            CodegenError::internal(format!("failed to allocate stack slot '{}': {}", name, e))
        })
    }

    /// Returns whether the block at the insertion point already ends in a
    /// terminator.
    fn current_block_terminated(&self) -> bool {
        self.builder
            .get_insert_block()
            .and_then(|bb| bb.get_terminator())
            .is_some()
    }

    /// Generates a sequence of statements, stopping once the current
    /// block has been terminated (statements after a `return` are dead
    /// and skipped; `break`/`continue` open fresh successor blocks, so
    /// emission continues into dead IR there).
    fn generate_block(&mut self, stmts: &[Stmt]) -> Result<(), CodegenError> {
        for stmt in stmts {
            if self.current_block_terminated() {
                break;
            }
            self.generate_stmt(stmt)?;
        }
        Ok(())
    }

    /// Pushes a fresh variable scope.
    fn enter_scope(&mut self) {
        self.variables.push(HashMap::new());
    }

    /// Pops the innermost variable scope.
    fn exit_scope(&mut self) {
        self.variables.pop();
    }

    /// Defines a variable in the innermost scope, shadowing any outer
    /// binding of the same name.
    fn define_variable(&mut self, name: &str, binding: VarBinding<'ctx>) {
        if let Some(scope) = self.variables.last_mut() {
            scope.insert(name.to_string(), binding);
        }
    }

    /// Looks up a variable, walking scopes from innermost to outermost.
    fn lookup_variable(&self, name: &str) -> Option<&VarBinding<'ctx>> {
        self.variables
            .iter()
            .rev()
            .find_map(|scope| scope.get(name))
    }

    /// Replaces the innermost binding of `name` with a new one.
    ///
    /// Used when an untyped variable is reassigned with a value of a new
    /// type; the binding in the frame where the name resolves is swapped
    /// for one holding the fresh slot.
    fn rebind_variable(&mut self, name: &str, binding: VarBinding<'ctx>) {
        for scope in self.variables.iter_mut().rev() {
            if scope.contains_key(name) {
                scope.insert(name.to_string(), binding);
                return;
            }
        }
    }

    /// Pushes the break/continue targets for a loop being entered.
    fn push_loop_targets(
        &mut self,
        break_target: BasicBlock<'ctx>,
        continue_target: BasicBlock<'ctx>,
    ) {
        self.break_targets.push(break_target);
        self.continue_targets.push(continue_target);
    }

    /// Pops the break/continue targets when a loop is exited.
    fn pop_loop_targets(&mut self) {
        self.break_targets.pop();
        self.continue_targets.pop();
    }
}
