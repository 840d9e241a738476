//! Statement code generation.
//!
//! This module emits IR for every statement kind: declarations,
//! assignments, `print`, the `if`/`elif`/`else` and `for` control-flow
//! synthesis, `break`/`continue`, function declarations, `return` and
//! struct declarations.

use super::Codegen;
use super::binding::VarBinding;
use super::error::CodegenError;
use super::structs::StructLayout;
use crate::ast::{ElifArm, Expr, ExprKind, Param, Stmt, StmtKind, StructField, Type};
use crate::token::Span;
use inkwell::types::{BasicMetadataTypeEnum, BasicType};
use inkwell::values::{BasicValueEnum, FloatValue, IntValue, PointerValue};
use inkwell::{FloatPredicate, IntPredicate};

impl<'ctx> Codegen<'ctx> {
    /// Generates IR for a single statement.
    pub(super) fn generate_stmt(&mut self, stmt: &Stmt) -> Result<(), CodegenError> {
        match &stmt.kind {
            StmtKind::VarDecl {
                name,
                ty,
                static_type,
                init,
            } => self.generate_var_decl(name, ty, *static_type, init.as_ref(), stmt.span),
            StmtKind::Assign { name, index, value } => {
                self.generate_assign(name, index.as_ref(), value, stmt.span)
            }
            StmtKind::Print(expr) => self.generate_print(expr, true),
            StmtKind::If {
                condition,
                then_block,
                elifs,
                else_block,
            } => self.generate_if(condition, then_block, elifs, else_block, stmt.span),
            StmtKind::For {
                var,
                start,
                end,
                step,
                body,
            } => self.generate_for(var, start, end, step, body, stmt.span),
            StmtKind::Break => self.generate_break(stmt.span),
            StmtKind::Continue => self.generate_continue(stmt.span),
            StmtKind::FunctionDecl { name, params, body } => {
                self.generate_function_decl(name, params, body)
            }
            StmtKind::Return(value) => self.generate_return(value.as_ref(), stmt.span),
            StmtKind::StructDecl { name, fields } => {
                self.generate_struct_decl(name, fields, stmt.span)
            }
            StmtKind::Expr(expr) => match &expr.kind {
                ExprKind::Call { callee, args } => {
                    self.generate_call(callee, args, expr.span)?;
                    Ok(())
                }
                _ => {
                    self.generate_expr(expr)?;
                    Ok(())
                }
            },
        }
    }

    /// Generates a variable declaration.
    ///
    /// The slot is emitted in the entry block of the enclosing function.
    /// Without an initializer the slot takes the declared type (or `i32`
    /// when no annotation was given) and is zero-initialized. With one,
    /// the slot type follows the initializer: array literals bind the
    /// aggregate slab directly, struct initializers bind the instance
    /// slot, and every other expression is stored into a slot of the
    /// value's own type.
    fn generate_var_decl(
        &mut self,
        name: &str,
        declared_ty: &Type,
        static_type: bool,
        init: Option<&Expr>,
        span: Span,
    ) -> Result<(), CodegenError> {
        let Some(init) = init else {
            let var_ty = if static_type {
                declared_ty.clone()
            } else {
                Type::I32
            };
            let slot = self.create_entry_block_alloca(name, self.llvm_type(&var_ty), span)?;
            self.builder
                .build_store(slot, self.zero_value(&var_ty))
                .map_err(|e| {
                    CodegenError::internal(format!("failed to store default for '{}': {}", name, e))
                })?;
            self.define_variable(name, VarBinding::scalar(slot, var_ty, static_type));
            return Ok(());
        };

        match &init.kind {
            ExprKind::StructInit {
                name: struct_name,
                fields,
            } => {
                let instance = self.generate_struct_init(struct_name, fields, init.span)?;
                self.define_variable(
                    name,
                    VarBinding::struct_instance(instance, struct_name.clone(), static_type),
                );
                Ok(())
            }
            ExprKind::ArrayLiteral(elements) => {
                let (slab, element_ty, size) = self.generate_array_literal(elements, init.span)?;
                self.define_variable(
                    name,
                    VarBinding::array(slab, element_ty, size, static_type),
                );
                Ok(())
            }
            _ => {
                let value = self.generate_expr(init)?;
                let slot = self.create_entry_block_alloca(name, value.get_type(), span)?;
                self.builder.build_store(slot, value).map_err(|e| {
                    CodegenError::internal(format!("failed to store initializer for '{}': {}", name, e))
                })?;
                let var_ty = self.infer_type_from_value(value);
                self.define_variable(name, VarBinding::scalar(slot, var_ty, static_type));
                Ok(())
            }
        }
    }

    /// Generates an assignment.
    ///
    /// For `a[i] = v` the target must be an array, the value's type must
    /// equal the element type, and the store goes through the
    /// bounds-checked element pointer. For a plain `x = v` on a variable
    /// whose type differs from the value's: a static-typed variable is a
    /// fatal type mismatch, while an untyped one is rebound to a fresh
    /// slot of the new type.
    fn generate_assign(
        &mut self,
        name: &str,
        index: Option<&Expr>,
        value_expr: &Expr,
        span: Span,
    ) -> Result<(), CodegenError> {
        let value = self.generate_expr(value_expr)?;
        let binding = self.lookup_variable(name).cloned().ok_or_else(|| {
            CodegenError::unknown_name(format!("Unknown variable '{}'", name), span)
        })?;
        let value_ty = self.infer_type_from_value(value);

        if let Some(index_expr) = index {
            if !binding.is_array() {
                return Err(CodegenError::invalid_operation(
                    format!("variable '{}' is not an array", name),
                    span,
                ));
            }
            if value_ty != *binding.ty() {
                return Err(CodegenError::type_mismatch(
                    format!(
                        "cannot store a '{}' value in an array of '{}'",
                        value_ty,
                        binding.ty()
                    ),
                    value_expr.span,
                ));
            }
            let index_value = self.generate_expr(index_expr)?;
            let index_value = self.coerce_index(index_value, index_expr.span)?;
            let element_ptr = self.array_element_ptr(&binding, index_value, span)?;
            self.builder.build_store(element_ptr, value).map_err(|e| {
                CodegenError::internal(format!("failed to store array element: {}", e))
            })?;
            return Ok(());
        }

        if binding.is_array() {
            return Err(CodegenError::invalid_operation(
                format!("cannot assign directly to array '{}'; use an index", name),
                span,
            ));
        }

        if value_ty != *binding.ty() {
            if binding.static_type() {
                return Err(CodegenError::type_mismatch(
                    format!(
                        "cannot assign a '{}' value to '{}' of static type '{}'",
                        value_ty,
                        name,
                        binding.ty()
                    ),
                    span,
                ));
            }
            // Untyped variables take a fresh slot of the new type.
            let slot = self.create_entry_block_alloca(name, value.get_type(), span)?;
            self.builder.build_store(slot, value).map_err(|e| {
                CodegenError::internal(format!("failed to store variable '{}': {}", name, e))
            })?;
            self.rebind_variable(name, VarBinding::scalar(slot, value_ty, false));
            return Ok(());
        }

        self.builder.build_store(binding.alloca(), value).map_err(|e| {
            CodegenError::internal(format!("failed to store variable '{}': {}", name, e))
        })?;
        Ok(())
    }

    /// Generates a `print` statement.
    ///
    /// The `printf` format is selected by the value's primitive type:
    /// `%d` for `i32` and `bool`, `%ld` for `i64`, `%f` for `f64`, `%s`
    /// for strings. Arrays render as `[a, b, c]`. The `enter` flag
    /// appends the trailing newline; it is `false` when a print is used
    /// as an `input` prompt.
    pub(super) fn generate_print(&mut self, expr: &Expr, enter: bool) -> Result<(), CodegenError> {
        let (value, ty) = match &expr.kind {
            ExprKind::Identifier(name) => {
                let binding = self.lookup_variable(name).cloned().ok_or_else(|| {
                    CodegenError::unknown_name(format!("Unknown variable '{}'", name), expr.span)
                })?;
                if binding.is_array() {
                    return self.generate_print_array(&binding, expr.span);
                }
                (self.generate_expr(expr)?, binding.ty().clone())
            }
            ExprKind::Literal(literal) => (self.generate_expr(expr)?, literal.ty()),
            ExprKind::ArrayAccess { array, .. } => {
                let element_ty = self
                    .lookup_variable(array)
                    .map(|b| b.ty().clone())
                    .ok_or_else(|| {
                        CodegenError::unknown_name(
                            format!("Unknown variable '{}'", array),
                            expr.span,
                        )
                    })?;
                (self.generate_expr(expr)?, element_ty)
            }
            _ => {
                let value = self.generate_expr(expr)?;
                (value, self.infer_type_from_value(value))
            }
        };

        match ty {
            Type::I32 | Type::I64 | Type::Bool => {
                self.print_int(value.into_int_value(), enter)
            }
            Type::F64 => self.print_double(value.into_float_value(), enter),
            Type::Str => self.print_string(value.into_pointer_value(), enter),
            Type::Struct | Type::Unknown => Err(CodegenError::invalid_operation(
                format!("unsupported type '{}' for print", ty),
                expr.span,
            )),
        }
    }

    /// Prints an integer value; `%ld` for 64-bit, `%d` otherwise.
    fn print_int(&mut self, value: IntValue<'ctx>, enter: bool) -> Result<(), CodegenError> {
        let format = if value.get_type().get_bit_width() == 64 {
            if enter { "%ld\n" } else { "%ld" }
        } else if enter {
            "%d\n"
        } else {
            "%d"
        };
        self.call_printf(format, value.into())
    }

    /// Prints a double value with `%f`.
    fn print_double(&mut self, value: FloatValue<'ctx>, enter: bool) -> Result<(), CodegenError> {
        let format = if enter { "%f\n" } else { "%f" };
        self.call_printf(format, value.into())
    }

    /// Prints a string value with `%s`.
    fn print_string(
        &mut self,
        value: PointerValue<'ctx>,
        enter: bool,
    ) -> Result<(), CodegenError> {
        let format = if enter { "%s\n" } else { "%s" };
        self.call_printf(format, value.into())
    }

    /// Prints a literal piece of text through `%s`.
    fn print_literal_text(&mut self, text: &str, enter: bool) -> Result<(), CodegenError> {
        let global = self
            .builder
            .build_global_string_ptr(text, "str")
            .map_err(|e| CodegenError::internal(format!("failed to create string: {}", e)))?;
        self.print_string(global.as_pointer_value(), enter)
    }

    /// Emits a `printf` call with the given format string and one value.
    fn call_printf(
        &mut self,
        format: &str,
        value: BasicValueEnum<'ctx>,
    ) -> Result<(), CodegenError> {
        let printf = self.runtime_function("printf")?;
        let format_ptr = self
            .builder
            .build_global_string_ptr(format, "fmt")
            .map_err(|e| CodegenError::internal(format!("failed to create format string: {}", e)))?;
        self.builder
            .build_call(
                printf,
                &[format_ptr.as_pointer_value().into(), value.into()],
                "",
            )
            .map_err(|e| CodegenError::internal(format!("failed to call printf: {}", e)))?;
        Ok(())
    }

    /// Prints a whole array as `[a, b, c]` with a trailing newline.
    ///
    /// Elements are loaded by constant index (all in range, so no bounds
    /// checks) and printed with the element format, separated by `", "`.
    fn generate_print_array(
        &mut self,
        binding: &VarBinding<'ctx>,
        span: Span,
    ) -> Result<(), CodegenError> {
        let element_ty = binding.ty().clone();
        let i32_type = self.context.i32_type();
        let zero = i32_type.const_int(0, false);

        self.print_literal_text("[", false)?;
        for i in 0..binding.size() {
            let index = i32_type.const_int(i as u64, false);
            let element_ptr = unsafe {
                self.builder
                    .build_in_bounds_gep(binding.alloca(), &[zero, index], "elem_ptr")
            }
            .map_err(|e| {
                CodegenError::internal(format!("failed to address array element: {}", e))
            })?;
            let element = self
                .builder
                .build_load(element_ptr, "elem")
                .map_err(|e| {
                    CodegenError::internal(format!("failed to load array element: {}", e))
                })?;

            match element_ty {
                Type::I32 | Type::I64 | Type::Bool => {
                    self.print_int(element.into_int_value(), false)?
                }
                Type::F64 => self.print_double(element.into_float_value(), false)?,
                Type::Str => self.print_string(element.into_pointer_value(), false)?,
                Type::Struct | Type::Unknown => {
                    return Err(CodegenError::invalid_operation(
                        format!("unsupported element type '{}' for print", element_ty),
                        span,
                    ));
                }
            }

            if i != binding.size() - 1 {
                self.print_literal_text(", ", false)?;
            }
        }
        self.print_literal_text("]", true)
    }

    /// Generates an `if`/`elif`/`else` chain.
    ///
    /// A shared merge block is created first. The primary condition
    /// branches to the then-block or to the next arm's condition block
    /// (the first `elif` condition, the `else` block, or the merge block
    /// when neither exists). Each arm's body runs in its own scope and
    /// falls through to the merge block unless already terminated.
    fn generate_if(
        &mut self,
        condition: &Expr,
        then_block: &[Stmt],
        elifs: &[ElifArm],
        else_block: &[Stmt],
        span: Span,
    ) -> Result<(), CodegenError> {
        let function = self.current_function(span)?;

        let merge_bb = self.context.append_basic_block(function, "if_merge");
        let then_bb = self.context.append_basic_block(function, "then");
        let next_bb = if !elifs.is_empty() {
            self.context.append_basic_block(function, "elif0_cond")
        } else if !else_block.is_empty() {
            self.context.append_basic_block(function, "else_block")
        } else {
            merge_bb
        };

        let condition_value = self.generate_expr(condition)?;
        let condition_value = self.coerce_condition(condition_value, condition.span)?;
        self.builder
            .build_conditional_branch(condition_value, then_bb, next_bb)
            .map_err(|e| CodegenError::internal(format!("failed to emit branch: {}", e)))?;

        self.builder.position_at_end(then_bb);
        self.enter_scope();
        let then_result = self.generate_block(then_block);
        self.exit_scope();
        then_result?;
        if !self.current_block_terminated() {
            self.builder
                .build_unconditional_branch(merge_bb)
                .map_err(|e| CodegenError::internal(format!("failed to emit branch: {}", e)))?;
        }

        let mut cond_bb = next_bb;
        for (i, elif) in elifs.iter().enumerate() {
            let body_bb = self
                .context
                .append_basic_block(function, &format!("elif_body_{}", i));
            let next_bb = if i + 1 < elifs.len() {
                self.context
                    .append_basic_block(function, &format!("elif{}_cond", i + 1))
            } else if !else_block.is_empty() {
                self.context.append_basic_block(function, "else_block")
            } else {
                merge_bb
            };

            self.builder.position_at_end(cond_bb);
            let elif_value = self.generate_expr(&elif.condition)?;
            let elif_value = self.coerce_condition(elif_value, elif.condition.span)?;
            self.builder
                .build_conditional_branch(elif_value, body_bb, next_bb)
                .map_err(|e| CodegenError::internal(format!("failed to emit branch: {}", e)))?;

            self.builder.position_at_end(body_bb);
            self.enter_scope();
            let body_result = self.generate_block(&elif.block);
            self.exit_scope();
            body_result?;
            if !self.current_block_terminated() {
                self.builder
                    .build_unconditional_branch(merge_bb)
                    .map_err(|e| CodegenError::internal(format!("failed to emit branch: {}", e)))?;
            }

            cond_bb = next_bb;
        }

        if !else_block.is_empty() {
            self.builder.position_at_end(cond_bb);
            self.enter_scope();
            let else_result = self.generate_block(else_block);
            self.exit_scope();
            else_result?;
            if !self.current_block_terminated() {
                self.builder
                    .build_unconditional_branch(merge_bb)
                    .map_err(|e| CodegenError::internal(format!("failed to emit branch: {}", e)))?;
            }
        }

        self.builder.position_at_end(merge_bb);
        Ok(())
    }

    /// Coerces a condition value to `i1` by comparing non-boolean values
    /// against zero of their own type.
    fn coerce_condition(
        &mut self,
        value: BasicValueEnum<'ctx>,
        span: Span,
    ) -> Result<IntValue<'ctx>, CodegenError> {
        match value {
            BasicValueEnum::IntValue(v) => {
                if v.get_type().get_bit_width() == 1 {
                    return Ok(v);
                }
                let zero = v.get_type().const_int(0, false);
                self.builder
                    .build_int_compare(IntPredicate::NE, v, zero, "condtmp")
                    .map_err(|e| {
                        CodegenError::internal(format!("failed to coerce condition: {}", e))
                    })
            }
            BasicValueEnum::FloatValue(v) => {
                let zero = self.context.f64_type().const_float(0.0);
                self.builder
                    .build_float_compare(FloatPredicate::ONE, v, zero, "condtmp")
                    .map_err(|e| {
                        CodegenError::internal(format!("failed to coerce condition: {}", e))
                    })
            }
            _ => Err(CodegenError::type_mismatch(
                "condition must be a boolean or numeric value",
                span,
            )),
        }
    }

    /// Generates a `for` loop over the half-open range `[start, end)`.
    ///
    /// An `i32` counter slot is allocated in the entry block and set to
    /// the start value. Four blocks realize the loop: `loop_cond` loads
    /// the counter and compares `counter <= end - 1` (signed),
    /// `loop_body` runs the body in a fresh scope with the counter bound,
    /// `loop_inc` adds the parsed step and stores back, `loop_end`
    /// receives the exit. `loop_end`/`loop_inc` are pushed as the
    /// break/continue targets around the body.
    fn generate_for(
        &mut self,
        var: &str,
        start: &Expr,
        end: &Expr,
        step: &Expr,
        body: &[Stmt],
        span: Span,
    ) -> Result<(), CodegenError> {
        let i32_type = self.context.i32_type();

        let start_value = self.generate_expr(start)?;
        let start_value = self.coerce_loop_bound(start_value, start.span)?;
        let end_value = self.generate_expr(end)?;
        let end_value = self.coerce_loop_bound(end_value, end.span)?;
        let one = i32_type.const_int(1, false);
        let end_minus_one = self
            .builder
            .build_int_sub(end_value, one, "end_minus_1")
            .map_err(|e| CodegenError::internal(format!("failed to emit bound: {}", e)))?;
        let step_value = self.generate_expr(step)?.into_int_value();

        let counter = self.create_entry_block_alloca(var, i32_type, span)?;
        self.builder.build_store(counter, start_value).map_err(|e| {
            CodegenError::internal(format!("failed to store loop counter: {}", e))
        })?;

        let function = self.current_function(span)?;
        let cond_bb = self.context.append_basic_block(function, "loop_cond");
        let body_bb = self.context.append_basic_block(function, "loop_body");
        let inc_bb = self.context.append_basic_block(function, "loop_inc");
        let end_bb = self.context.append_basic_block(function, "loop_end");

        self.push_loop_targets(end_bb, inc_bb);
        let result = (|| -> Result<(), CodegenError> {
            self.builder
                .build_unconditional_branch(cond_bb)
                .map_err(|e| CodegenError::internal(format!("failed to emit branch: {}", e)))?;

            self.builder.position_at_end(cond_bb);
            let current = self
                .builder
                .build_load(counter, var)
                .map_err(|e| CodegenError::internal(format!("failed to load counter: {}", e)))?
                .into_int_value();
            let keep_going = self
                .builder
                .build_int_compare(IntPredicate::SLE, current, end_minus_one, "loopcond")
                .map_err(|e| CodegenError::internal(format!("failed to emit compare: {}", e)))?;
            self.builder
                .build_conditional_branch(keep_going, body_bb, end_bb)
                .map_err(|e| CodegenError::internal(format!("failed to emit branch: {}", e)))?;

            self.builder.position_at_end(body_bb);
            self.enter_scope();
            self.define_variable(var, VarBinding::scalar(counter, Type::I32, false));
            let body_result = self.generate_block(body);
            self.exit_scope();
            body_result?;
            if !self.current_block_terminated() {
                self.builder
                    .build_unconditional_branch(inc_bb)
                    .map_err(|e| CodegenError::internal(format!("failed to emit branch: {}", e)))?;
            }

            self.builder.position_at_end(inc_bb);
            let current = self
                .builder
                .build_load(counter, var)
                .map_err(|e| CodegenError::internal(format!("failed to load counter: {}", e)))?
                .into_int_value();
            let next = self
                .builder
                .build_int_add(current, step_value, "nexti")
                .map_err(|e| CodegenError::internal(format!("failed to emit increment: {}", e)))?;
            self.builder.build_store(counter, next).map_err(|e| {
                CodegenError::internal(format!("failed to store loop counter: {}", e))
            })?;
            self.builder
                .build_unconditional_branch(cond_bb)
                .map_err(|e| CodegenError::internal(format!("failed to emit branch: {}", e)))?;

            Ok(())
        })();
        self.pop_loop_targets();
        result?;

        self.builder.position_at_end(end_bb);
        Ok(())
    }

    /// Coerces a loop bound to `i32`.
    fn coerce_loop_bound(
        &mut self,
        value: BasicValueEnum<'ctx>,
        span: Span,
    ) -> Result<IntValue<'ctx>, CodegenError> {
        match value {
            BasicValueEnum::IntValue(_) => self.coerce_index(value, span),
            _ => Err(CodegenError::type_mismatch(
                "for loop bounds must be integers",
                span,
            )),
        }
    }

    /// Generates a `break`: an unconditional branch to the innermost
    /// break target, then a fresh successor block to keep an insertion
    /// point for any statements the parser still produced after the jump
    /// (dead code in the IR).
    fn generate_break(&mut self, span: Span) -> Result<(), CodegenError> {
        let target = *self.break_targets.last().ok_or_else(|| {
            CodegenError::invalid_operation("'break' outside of a loop", span)
        })?;
        self.builder
            .build_unconditional_branch(target)
            .map_err(|e| CodegenError::internal(format!("failed to emit break: {}", e)))?;

        let function = self.current_function(span)?;
        let after = self.context.append_basic_block(function, "after_break");
        self.builder.position_at_end(after);
        Ok(())
    }

    /// Generates a `continue`, mirroring [`generate_break`] with the
    /// innermost continue target.
    ///
    /// [`generate_break`]: Self::generate_break
    fn generate_continue(&mut self, span: Span) -> Result<(), CodegenError> {
        let target = *self.continue_targets.last().ok_or_else(|| {
            CodegenError::invalid_operation("'continue' outside of a loop", span)
        })?;
        self.builder
            .build_unconditional_branch(target)
            .map_err(|e| CodegenError::internal(format!("failed to emit continue: {}", e)))?;

        let function = self.current_function(span)?;
        let after = self.context.append_basic_block(function, "after_continue");
        self.builder.position_at_end(after);
        Ok(())
    }

    /// Generates a function declaration.
    ///
    /// Parameters materialize stack slots in the entry block; an
    /// unannotated parameter defaults to `i32`. The return type is fixed
    /// to `i32`; a body that falls off the end gets an implicit
    /// `return 0`. The caller's insertion point is saved before emission
    /// and restored afterwards, so a declaration can appear between any
    /// two statements.
    fn generate_function_decl(
        &mut self,
        name: &str,
        params: &[Param],
        body: &[Stmt],
    ) -> Result<(), CodegenError> {
        let param_tys: Vec<Type> = params
            .iter()
            .map(|p| if p.static_type { p.ty.clone() } else { Type::I32 })
            .collect();
        let llvm_params: Vec<BasicMetadataTypeEnum> = param_tys
            .iter()
            .map(|ty| self.llvm_type(ty).into())
            .collect();

        let i32_type = self.context.i32_type();
        let fn_type = i32_type.fn_type(&llvm_params, false);
        let function = self.module.add_function(name, fn_type, None);

        let saved_block = self.builder.get_insert_block();

        let entry = self.context.append_basic_block(function, "entry");
        self.builder.position_at_end(entry);

        self.enter_scope();
        let result = (|| -> Result<(), CodegenError> {
            for (i, (param, ty)) in params.iter().zip(&param_tys).enumerate() {
                let value = function.get_nth_param(i as u32).ok_or_else(|| {
                    CodegenError::internal(format!(
                        "function '{}' is missing parameter {}",
                        name, i
                    ))
                })?;
                let slot =
                    self.create_entry_block_alloca(&param.name, self.llvm_type(ty), param.span)?;
                self.builder.build_store(slot, value).map_err(|e| {
                    CodegenError::internal(format!(
                        "failed to store parameter '{}': {}",
                        param.name, e
                    ))
                })?;
                self.define_variable(
                    &param.name,
                    VarBinding::scalar(slot, ty.clone(), param.static_type),
                );
            }

            self.generate_block(body)?;

            if !self.current_block_terminated() {
                let zero = i32_type.const_int(0, false);
                self.builder.build_return(Some(&zero)).map_err(|e| {
                    CodegenError::internal(format!(
                        "failed to emit implicit return in '{}': {}",
                        name, e
                    ))
                })?;
            }
            Ok(())
        })();
        self.exit_scope();
        result?;

        if let Some(block) = saved_block {
            self.builder.position_at_end(block);
        }
        Ok(())
    }

    /// Generates a `return` statement.
    ///
    /// A bare `return;` yields `ret void` in a void function and
    /// `ret i32 0` otherwise (every Aiko function returns `i32`).
    fn generate_return(&mut self, value: Option<&Expr>, span: Span) -> Result<(), CodegenError> {
        match value {
            Some(expr) => {
                let v = self.generate_expr(expr)?;
                self.builder.build_return(Some(&v)).map_err(|e| {
                    CodegenError::internal(format!("failed to emit return: {}", e))
                })?;
            }
            None => {
                let function = self.current_function(span)?;
                if function.get_type().get_return_type().is_none() {
                    self.builder.build_return(None).map_err(|e| {
                        CodegenError::internal(format!("failed to emit return: {}", e))
                    })?;
                } else {
                    let zero = self.context.i32_type().const_int(0, false);
                    self.builder.build_return(Some(&zero)).map_err(|e| {
                        CodegenError::internal(format!("failed to emit return: {}", e))
                    })?;
                }
            }
        }
        Ok(())
    }

    /// Registers a struct declaration as a named record layout.
    ///
    /// Re-declaring a struct name is a fatal redefinition error.
    fn generate_struct_decl(
        &mut self,
        name: &str,
        fields: &[StructField],
        span: Span,
    ) -> Result<(), CodegenError> {
        if self.structs.contains_key(name) {
            return Err(CodegenError::redefinition(
                format!("Struct '{}' is already defined", name),
                span,
            ));
        }

        let field_types: Vec<_> = fields.iter().map(|f| self.llvm_type(&f.ty)).collect();
        let field_names: Vec<String> = fields.iter().map(|f| f.name.clone()).collect();

        let struct_type = self.context.opaque_struct_type(name);
        struct_type.set_body(&field_types, false);

        self.structs
            .insert(name.to_string(), StructLayout::new(struct_type, &field_names));
        Ok(())
    }
}
