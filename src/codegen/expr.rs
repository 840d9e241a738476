//! Expression code generation.
//!
//! This module emits IR for every expression kind: literals, identifier
//! loads, promoted binary/unary operations, function calls, array
//! literals and bounds-checked accesses, struct initializers and member
//! reads, `typeof` and `input`.

use super::Codegen;
use super::binding::VarBinding;
use super::error::CodegenError;
use crate::ast::{BinaryOperator, Expr, ExprKind, LiteralValue, Type, UnaryOperator};
use crate::token::Span;
use inkwell::types::BasicType;
use inkwell::values::{
    BasicMetadataValueEnum, BasicValueEnum, CallSiteValue, FloatValue, IntValue, PointerValue,
    ValueKind,
};
use inkwell::{FloatPredicate, IntPredicate};

/// Extracts the basic value produced by a call, if the callee returns one.
fn call_result<'ctx>(call: CallSiteValue<'ctx>) -> Option<BasicValueEnum<'ctx>> {
    match call.try_as_basic_value() {
        ValueKind::Basic(value) => Some(value),
        ValueKind::Instruction(_) => None,
    }
}

impl<'ctx> Codegen<'ctx> {
    /// Generates IR for an expression and returns its value.
    ///
    /// Sub-expressions are emitted left to right, so side effects (nested
    /// `input` calls, function calls) observe source order.
    pub(super) fn generate_expr(
        &mut self,
        expr: &Expr,
    ) -> Result<BasicValueEnum<'ctx>, CodegenError> {
        match &expr.kind {
            ExprKind::Literal(literal) => self.generate_literal(literal),
            ExprKind::Identifier(name) => self.generate_identifier(name, expr.span),
            ExprKind::Binary { left, op, right } => {
                self.generate_binary(left, *op, right, expr.span)
            }
            ExprKind::Unary { op, operand } => self.generate_unary(*op, operand, expr.span),
            ExprKind::Call { callee, args } => self
                .generate_call(callee, args, expr.span)?
                .ok_or_else(|| {
                    CodegenError::invalid_operation(
                        format!("void function '{}' used as a value", callee),
                        expr.span,
                    )
                }),
            ExprKind::ArrayLiteral(elements) => self
                .generate_array_literal(elements, expr.span)
                .map(|(ptr, _, _)| ptr.into()),
            ExprKind::ArrayAccess { array, index } => {
                self.generate_array_access(array, index, expr.span)
            }
            ExprKind::StructInit { name, fields } => self
                .generate_struct_init(name, fields, expr.span)
                .map(Into::into),
            ExprKind::MemberAccess { object, field } => {
                self.generate_member_access(object, field, expr.span)
            }
            ExprKind::Typeof(inner) => self.generate_typeof(inner, expr.span),
            ExprKind::Input { prompt, target } => {
                self.generate_input(prompt.as_deref(), target, expr.span)
            }
        }
    }

    /// Generates a constant for a literal value.
    fn generate_literal(
        &mut self,
        literal: &LiteralValue,
    ) -> Result<BasicValueEnum<'ctx>, CodegenError> {
        match literal {
            LiteralValue::I32(value) => Ok(self
                .context
                .i32_type()
                .const_int(*value as u64, true)
                .into()),
            LiteralValue::I64(value) => Ok(self
                .context
                .i64_type()
                .const_int(*value as u64, true)
                .into()),
            LiteralValue::F64(value) => Ok(self.context.f64_type().const_float(*value).into()),
            LiteralValue::Bool(value) => Ok(self
                .context
                .bool_type()
                .const_int(*value as u64, false)
                .into()),
            LiteralValue::Str(value) => {
                let global = self
                    .builder
                    .build_global_string_ptr(value, "str")
                    .map_err(|e| {
                        CodegenError::internal(format!("failed to create string literal: {}", e))
                    })?;
                Ok(global.as_pointer_value().into())
            }
        }
    }

    /// Generates a load of a variable.
    ///
    /// Struct instances evaluate to their slot pointer (member access and
    /// field stores go through it); arrays cannot be used as bare values
    /// and must be indexed.
    fn generate_identifier(
        &mut self,
        name: &str,
        span: Span,
    ) -> Result<BasicValueEnum<'ctx>, CodegenError> {
        let binding = self
            .lookup_variable(name)
            .cloned()
            .ok_or_else(|| {
                CodegenError::unknown_name(format!("Unknown variable '{}'", name), span)
            })?;

        if binding.struct_name().is_some() {
            return Ok(binding.alloca().into());
        }

        if binding.is_array() {
            return Err(CodegenError::invalid_operation(
                format!("array '{}' cannot be used as a value; index it", name),
                span,
            ));
        }

        self.builder
            .build_load(binding.alloca(), &format!("{}_load", name))
            .map_err(|e| {
                CodegenError::internal(format!("failed to load variable '{}': {}", name, e))
            })
    }

    /// Generates a binary operation with type promotion.
    ///
    /// If either operand is floating, the other is converted to `f64` and
    /// the floating form is emitted (`fmod` via the runtime for `%`,
    /// ordered comparisons). String operands support only `==`/`!=`,
    /// lowered through `strcmp`. Otherwise both operands must be integers;
    /// differing widths are unified by sign extension and the signed
    /// integer forms are emitted.
    fn generate_binary(
        &mut self,
        left_expr: &Expr,
        op: BinaryOperator,
        right_expr: &Expr,
        span: Span,
    ) -> Result<BasicValueEnum<'ctx>, CodegenError> {
        let left = self.generate_expr(left_expr)?;
        let right = self.generate_expr(right_expr)?;

        if let (BasicValueEnum::PointerValue(l), BasicValueEnum::PointerValue(r)) = (left, right) {
            return match op {
                BinaryOperator::Equal => self.string_equality(l, r).map(Into::into),
                BinaryOperator::NotEqual => {
                    let eq = self.string_equality(l, r)?;
                    self.builder
                        .build_not(eq, "strne")
                        .map(Into::into)
                        .map_err(|e| {
                            CodegenError::internal(format!("failed to negate strcmp: {}", e))
                        })
                }
                _ => Err(CodegenError::invalid_operation(
                    format!("operator '{}' is not supported for strings", op),
                    span,
                )),
            };
        }

        let is_float = left.is_float_value() || right.is_float_value();
        if is_float {
            let l = self.to_double(left, span)?;
            let r = self.to_double(right, span)?;
            return self.generate_float_binary(l, op, r);
        }

        let (l, r) = self.unify_int_operands(left, right, span)?;
        self.generate_int_binary(l, op, r)
    }

    /// Emits the floating-point form of a binary operator.
    fn generate_float_binary(
        &mut self,
        l: FloatValue<'ctx>,
        op: BinaryOperator,
        r: FloatValue<'ctx>,
    ) -> Result<BasicValueEnum<'ctx>, CodegenError> {
        let err = |e| CodegenError::internal(format!("failed to emit float operation: {}", e));
        let value: BasicValueEnum = match op {
            BinaryOperator::Add => self.builder.build_float_add(l, r, "faddtmp").map_err(err)?.into(),
            BinaryOperator::Sub => self.builder.build_float_sub(l, r, "fsubtmp").map_err(err)?.into(),
            BinaryOperator::Mul => self.builder.build_float_mul(l, r, "fmultmp").map_err(err)?.into(),
            BinaryOperator::Div => self.builder.build_float_div(l, r, "fdivtmp").map_err(err)?.into(),
            BinaryOperator::Mod => {
                let fmod = self.runtime_function("fmod")?;
                let call = self
                    .builder
                    .build_call(fmod, &[l.into(), r.into()], "fmodtmp")
                    .map_err(|e| {
                        CodegenError::internal(format!("failed to call fmod: {}", e))
                    })?;
                call_result(call).ok_or_else(|| {
                    CodegenError::internal("fmod call produced no value".to_string())
                })?
            }
            BinaryOperator::Equal => self
                .builder
                .build_float_compare(FloatPredicate::OEQ, l, r, "feqtmp")
                .map_err(err)?
                .into(),
            BinaryOperator::NotEqual => self
                .builder
                .build_float_compare(FloatPredicate::ONE, l, r, "fnetmp")
                .map_err(err)?
                .into(),
            BinaryOperator::LessThan => self
                .builder
                .build_float_compare(FloatPredicate::OLT, l, r, "flttmp")
                .map_err(err)?
                .into(),
            BinaryOperator::LessEqual => self
                .builder
                .build_float_compare(FloatPredicate::OLE, l, r, "fletmp")
                .map_err(err)?
                .into(),
            BinaryOperator::GreaterThan => self
                .builder
                .build_float_compare(FloatPredicate::OGT, l, r, "fgttmp")
                .map_err(err)?
                .into(),
            BinaryOperator::GreaterEqual => self
                .builder
                .build_float_compare(FloatPredicate::OGE, l, r, "fgetmp")
                .map_err(err)?
                .into(),
        };
        Ok(value)
    }

    /// Emits the signed-integer form of a binary operator.
    fn generate_int_binary(
        &mut self,
        l: IntValue<'ctx>,
        op: BinaryOperator,
        r: IntValue<'ctx>,
    ) -> Result<BasicValueEnum<'ctx>, CodegenError> {
        let err = |e| CodegenError::internal(format!("failed to emit integer operation: {}", e));
        let value: BasicValueEnum = match op {
            BinaryOperator::Add => self.builder.build_int_add(l, r, "addtmp").map_err(err)?.into(),
            BinaryOperator::Sub => self.builder.build_int_sub(l, r, "subtmp").map_err(err)?.into(),
            BinaryOperator::Mul => self.builder.build_int_mul(l, r, "multmp").map_err(err)?.into(),
            BinaryOperator::Div => self
                .builder
                .build_int_signed_div(l, r, "divtmp")
                .map_err(err)?
                .into(),
            BinaryOperator::Mod => self
                .builder
                .build_int_signed_rem(l, r, "modtmp")
                .map_err(err)?
                .into(),
            BinaryOperator::Equal => self
                .builder
                .build_int_compare(IntPredicate::EQ, l, r, "eqtmp")
                .map_err(err)?
                .into(),
            BinaryOperator::NotEqual => self
                .builder
                .build_int_compare(IntPredicate::NE, l, r, "netmp")
                .map_err(err)?
                .into(),
            BinaryOperator::LessThan => self
                .builder
                .build_int_compare(IntPredicate::SLT, l, r, "lttmp")
                .map_err(err)?
                .into(),
            BinaryOperator::LessEqual => self
                .builder
                .build_int_compare(IntPredicate::SLE, l, r, "letmp")
                .map_err(err)?
                .into(),
            BinaryOperator::GreaterThan => self
                .builder
                .build_int_compare(IntPredicate::SGT, l, r, "gttmp")
                .map_err(err)?
                .into(),
            BinaryOperator::GreaterEqual => self
                .builder
                .build_int_compare(IntPredicate::SGE, l, r, "getmp")
                .map_err(err)?
                .into(),
        };
        Ok(value)
    }

    /// Converts a numeric value to `f64`, sign-extending integers.
    fn to_double(
        &mut self,
        value: BasicValueEnum<'ctx>,
        span: Span,
    ) -> Result<FloatValue<'ctx>, CodegenError> {
        match value {
            BasicValueEnum::FloatValue(v) => Ok(v),
            BasicValueEnum::IntValue(v) => self
                .builder
                .build_signed_int_to_float(v, self.context.f64_type(), "castfp")
                .map_err(|e| {
                    CodegenError::internal(format!("failed to convert integer to double: {}", e))
                }),
            _ => Err(CodegenError::type_mismatch(
                "binary operator requires numeric operands",
                span,
            )),
        }
    }

    /// Requires both operands to be integers and unifies their widths by
    /// sign extension, so `i32` meets `i64` as `i64`.
    fn unify_int_operands(
        &mut self,
        left: BasicValueEnum<'ctx>,
        right: BasicValueEnum<'ctx>,
        span: Span,
    ) -> Result<(IntValue<'ctx>, IntValue<'ctx>), CodegenError> {
        let (BasicValueEnum::IntValue(l), BasicValueEnum::IntValue(r)) = (left, right) else {
            return Err(CodegenError::type_mismatch(
                "binary operator requires numeric operands",
                span,
            ));
        };

        let lw = l.get_type().get_bit_width();
        let rw = r.get_type().get_bit_width();
        if lw == rw {
            return Ok((l, r));
        }

        let err = |e| CodegenError::internal(format!("failed to extend integer operand: {}", e));
        if lw < rw {
            let widened = self
                .builder
                .build_int_s_extend(l, r.get_type(), "sexttmp")
                .map_err(err)?;
            Ok((widened, r))
        } else {
            let widened = self
                .builder
                .build_int_s_extend(r, l.get_type(), "sexttmp")
                .map_err(err)?;
            Ok((l, widened))
        }
    }

    /// Emits `strcmp(l, r) == 0` for string equality.
    fn string_equality(
        &mut self,
        l: PointerValue<'ctx>,
        r: PointerValue<'ctx>,
    ) -> Result<IntValue<'ctx>, CodegenError> {
        let strcmp = self.runtime_function("strcmp")?;
        let call = self
            .builder
            .build_call(strcmp, &[l.into(), r.into()], "strcmptmp")
            .map_err(|e| CodegenError::internal(format!("failed to call strcmp: {}", e)))?;
        let result = call_result(call)
            .ok_or_else(|| CodegenError::internal("strcmp call produced no value".to_string()))?
            .into_int_value();

        let zero = self.context.i32_type().const_int(0, false);
        self.builder
            .build_int_compare(IntPredicate::EQ, result, zero, "streqtmp")
            .map_err(|e| CodegenError::internal(format!("failed to compare strcmp result: {}", e)))
    }

    /// Generates a unary operation.
    ///
    /// `-` negates integers and floats; `!` is valid only on `i1`.
    fn generate_unary(
        &mut self,
        op: UnaryOperator,
        operand_expr: &Expr,
        span: Span,
    ) -> Result<BasicValueEnum<'ctx>, CodegenError> {
        let operand = self.generate_expr(operand_expr)?;
        match op {
            UnaryOperator::Neg => match operand {
                BasicValueEnum::IntValue(v) => self
                    .builder
                    .build_int_neg(v, "negtmp")
                    .map(Into::into)
                    .map_err(|e| {
                        CodegenError::internal(format!("failed to emit negation: {}", e))
                    }),
                BasicValueEnum::FloatValue(v) => self
                    .builder
                    .build_float_neg(v, "fnegtmp")
                    .map(Into::into)
                    .map_err(|e| {
                        CodegenError::internal(format!("failed to emit float negation: {}", e))
                    }),
                _ => Err(CodegenError::invalid_operation(
                    "unary '-' requires a numeric operand",
                    span,
                )),
            },
            UnaryOperator::Not => match operand {
                BasicValueEnum::IntValue(v) if v.get_type().get_bit_width() == 1 => self
                    .builder
                    .build_not(v, "nottmp")
                    .map(Into::into)
                    .map_err(|e| CodegenError::internal(format!("failed to emit not: {}", e))),
                _ => Err(CodegenError::invalid_operation(
                    "unary '!' requires a boolean operand",
                    span,
                )),
            },
        }
    }

    /// Generates a call to a user-defined function.
    ///
    /// Arguments are emitted in source order. Returns `None` for calls to
    /// functions with a `void` return type, which is only reachable when
    /// the call is used as a statement.
    pub(super) fn generate_call(
        &mut self,
        callee: &str,
        args: &[Expr],
        span: Span,
    ) -> Result<Option<BasicValueEnum<'ctx>>, CodegenError> {
        let function = self.module.get_function(callee).ok_or_else(|| {
            CodegenError::unknown_name(format!("Unknown function '{}'", callee), span)
        })?;

        let mut arg_values: Vec<BasicMetadataValueEnum> = Vec::with_capacity(args.len());
        for arg in args {
            arg_values.push(self.generate_expr(arg)?.into());
        }

        let result_name = if function.get_type().get_return_type().is_none() {
            ""
        } else {
            "calltmp"
        };
        let call = self
            .builder
            .build_call(function, &arg_values, result_name)
            .map_err(|e| {
                CodegenError::internal(format!("failed to call function '{}': {}", callee, e))
            })?;

        Ok(call_result(call))
    }

    /// Generates an array literal.
    ///
    /// Elements are evaluated left to right and must all share one
    /// primitive type. The aggregate slab is allocated in the entry block
    /// and each element stored at its index; the slab pointer is the
    /// expression's value.
    ///
    /// # Returns
    ///
    /// The slab pointer, the element type tag and the element count.
    pub(super) fn generate_array_literal(
        &mut self,
        elements: &[Expr],
        span: Span,
    ) -> Result<(PointerValue<'ctx>, Type, u32), CodegenError> {
        if elements.is_empty() {
            return Err(CodegenError::invalid_operation(
                "array literal cannot be empty",
                span,
            ));
        }

        let mut values = Vec::with_capacity(elements.len());
        for element in elements {
            values.push(self.generate_expr(element)?);
        }

        let element_llvm_type = values[0].get_type();
        for (element, value) in elements.iter().zip(&values) {
            if value.get_type() != element_llvm_type {
                return Err(CodegenError::type_mismatch(
                    "array literal elements must all have the same type",
                    element.span,
                ));
            }
        }

        let element_ty = self.infer_type_from_value(values[0]);
        let array_type = element_llvm_type.array_type(elements.len() as u32);
        let slab = self.create_entry_block_alloca("array_literal", array_type, span)?;

        let i32_type = self.context.i32_type();
        let zero = i32_type.const_int(0, false);
        for (i, value) in values.iter().enumerate() {
            let index = i32_type.const_int(i as u64, false);
            let element_ptr = unsafe {
                self.builder
                    .build_in_bounds_gep(slab, &[zero, index], "elem_ptr")
            }
            .map_err(|e| {
                CodegenError::internal(format!("failed to address array element: {}", e))
            })?;
            self.builder.build_store(element_ptr, *value).map_err(|e| {
                CodegenError::internal(format!("failed to store array element: {}", e))
            })?;
        }

        Ok((slab, element_ty, elements.len() as u32))
    }

    /// Generates a bounds-checked array element read.
    fn generate_array_access(
        &mut self,
        array: &str,
        index: &Expr,
        span: Span,
    ) -> Result<BasicValueEnum<'ctx>, CodegenError> {
        let binding = self
            .lookup_variable(array)
            .cloned()
            .ok_or_else(|| {
                CodegenError::unknown_name(format!("Unknown variable '{}'", array), span)
            })?;
        if !binding.is_array() {
            return Err(CodegenError::invalid_operation(
                format!("variable '{}' is not an array", array),
                span,
            ));
        }

        let index_value = self.generate_expr(index)?;
        let index_value = self.coerce_index(index_value, index.span)?;
        let element_ptr = self.array_element_ptr(&binding, index_value, span)?;

        self.builder
            .build_load(element_ptr, "array_load")
            .map_err(|e| CodegenError::internal(format!("failed to load array element: {}", e)))
    }

    /// Coerces an index value to `i32`.
    pub(super) fn coerce_index(
        &mut self,
        value: BasicValueEnum<'ctx>,
        span: Span,
    ) -> Result<IntValue<'ctx>, CodegenError> {
        let BasicValueEnum::IntValue(v) = value else {
            return Err(CodegenError::type_mismatch(
                "array index must be an integer",
                span,
            ));
        };
        let width = v.get_type().get_bit_width();
        if width == 32 {
            return Ok(v);
        }
        let i32_type = self.context.i32_type();
        let result = if width > 32 {
            self.builder.build_int_truncate(v, i32_type, "idxtrunc")
        } else {
            self.builder.build_int_s_extend(v, i32_type, "idxext")
        };
        result.map_err(|e| CodegenError::internal(format!("failed to convert index: {}", e)))
    }

    /// Computes a pointer to `array[index]` with a runtime bounds check.
    ///
    /// The index is compared unsigned against the compile-time size; an
    /// out-of-range index branches to an error block that prints
    /// `Runtime Error: Array index out of bounds` via `puts` and calls
    /// `exit(1)` before an `unreachable` terminator. The element pointer
    /// is computed in the continuation block with a two-index GEP.
    pub(super) fn array_element_ptr(
        &mut self,
        binding: &VarBinding<'ctx>,
        index: IntValue<'ctx>,
        span: Span,
    ) -> Result<PointerValue<'ctx>, CodegenError> {
        let i32_type = self.context.i32_type();
        let size = i32_type.const_int(binding.size() as u64, false);
        let out_of_bounds = self
            .builder
            .build_int_compare(IntPredicate::UGE, index, size, "oobcheck")
            .map_err(|e| CodegenError::internal(format!("failed to emit bounds check: {}", e)))?;

        let function = self.current_function(span)?;
        let error_block = self.context.append_basic_block(function, "oob_error");
        let continue_block = self.context.append_basic_block(function, "oob_continue");

        self.builder
            .build_conditional_branch(out_of_bounds, error_block, continue_block)
            .map_err(|e| CodegenError::internal(format!("failed to emit branch: {}", e)))?;

        self.builder.position_at_end(error_block);
        let message = self
            .builder
            .build_global_string_ptr("Runtime Error: Array index out of bounds", "oob_msg")
            .map_err(|e| CodegenError::internal(format!("failed to create message: {}", e)))?;
        let puts = self.runtime_function("puts")?;
        self.builder
            .build_call(puts, &[message.as_pointer_value().into()], "")
            .map_err(|e| CodegenError::internal(format!("failed to call puts: {}", e)))?;
        let exit = self.runtime_function("exit")?;
        let one = i32_type.const_int(1, false);
        self.builder
            .build_call(exit, &[one.into()], "")
            .map_err(|e| CodegenError::internal(format!("failed to call exit: {}", e)))?;
        self.builder
            .build_unreachable()
            .map_err(|e| CodegenError::internal(format!("failed to emit unreachable: {}", e)))?;

        self.builder.position_at_end(continue_block);
        let zero = i32_type.const_int(0, false);
        unsafe {
            self.builder
                .build_in_bounds_gep(binding.alloca(), &[zero, index], "elem_ptr")
        }
        .map_err(|e| CodegenError::internal(format!("failed to address array element: {}", e)))
    }

    /// Generates a struct initializer.
    ///
    /// The instance slot is allocated in the entry block and each provided
    /// field is written through an indexed field pointer, in source order.
    /// Fields not named in the initializer are left unwritten.
    pub(super) fn generate_struct_init(
        &mut self,
        name: &str,
        fields: &[(String, Expr)],
        span: Span,
    ) -> Result<PointerValue<'ctx>, CodegenError> {
        let layout = self.structs.get(name).cloned().ok_or_else(|| {
            CodegenError::unknown_name(format!("Unknown struct type '{}'", name), span)
        })?;

        let instance = self.create_entry_block_alloca(&format!("{}_inst", name), layout.ty(), span)?;

        for (field_name, value_expr) in fields {
            let field_index = layout.field_index(field_name).ok_or_else(|| {
                CodegenError::unknown_name(
                    format!("Unknown field '{}' in struct '{}'", field_name, name),
                    value_expr.span,
                )
            })?;
            let field_ptr = self
                .builder
                .build_struct_gep(
                    instance,
                    field_index,
                    &format!("{}_ptr", field_name),
                )
                .map_err(|e| {
                    CodegenError::internal(format!(
                        "failed to address field '{}': {}",
                        field_name, e
                    ))
                })?;
            let value = self.generate_expr(value_expr)?;
            self.builder.build_store(field_ptr, value).map_err(|e| {
                CodegenError::internal(format!("failed to store field '{}': {}", field_name, e))
            })?;
        }

        Ok(instance)
    }

    /// Generates a struct member read.
    ///
    /// Computes a pointer to the selected field; a struct-typed field
    /// yields the pointer itself, any other field is loaded.
    fn generate_member_access(
        &mut self,
        object: &Expr,
        field: &str,
        span: Span,
    ) -> Result<BasicValueEnum<'ctx>, CodegenError> {
        let ExprKind::Identifier(name) = &object.kind else {
            return Err(CodegenError::invalid_operation(
                "member access requires a struct variable",
                span,
            ));
        };

        let binding = self
            .lookup_variable(name)
            .cloned()
            .ok_or_else(|| {
                CodegenError::unknown_name(format!("Unknown variable '{}'", name), object.span)
            })?;
        let Some(struct_name) = binding.struct_name().map(str::to_string) else {
            return Err(CodegenError::invalid_operation(
                format!("variable '{}' is not a struct", name),
                object.span,
            ));
        };

        let layout = self.structs.get(&struct_name).cloned().ok_or_else(|| {
            CodegenError::unknown_name(format!("Unknown struct type '{}'", struct_name), span)
        })?;
        let field_index = layout.field_index(field).ok_or_else(|| {
            CodegenError::unknown_name(
                format!("Unknown field '{}' in struct '{}'", field, struct_name),
                span,
            )
        })?;

        let field_ptr = self
            .builder
            .build_struct_gep(
                binding.alloca(),
                field_index,
                &format!("{}_ptr", field),
            )
            .map_err(|e| {
                CodegenError::internal(format!("failed to address field '{}': {}", field, e))
            })?;

        let field_type = layout.ty().get_field_type_at_index(field_index).ok_or_else(|| {
            CodegenError::internal(format!("struct '{}' has no field {}", struct_name, field_index))
        })?;

        if field_type.is_struct_type() {
            return Ok(field_ptr.into());
        }

        self.builder
            .build_load(field_ptr, field)
            .map_err(|e| {
                CodegenError::internal(format!("failed to load field '{}': {}", field, e))
            })
    }

    /// Generates a `typeof` query.
    ///
    /// Identifiers read the type from the symbol table and literals from
    /// their tag; any other expression is evaluated and its type inferred
    /// from the resulting IR value. The result is a global string naming
    /// the type (`i32`, `i64`, `double`, `bool`, `str`).
    fn generate_typeof(
        &mut self,
        inner: &Expr,
        span: Span,
    ) -> Result<BasicValueEnum<'ctx>, CodegenError> {
        let ty = match &inner.kind {
            ExprKind::Identifier(name) => self
                .lookup_variable(name)
                .map(|b| b.ty().clone())
                .ok_or_else(|| {
                    CodegenError::unknown_name(format!("Unknown variable '{}'", name), inner.span)
                })?,
            ExprKind::Literal(literal) => literal.ty(),
            _ => {
                let value = self.generate_expr(inner)?;
                self.infer_type_from_value(value)
            }
        };

        if matches!(ty, Type::Struct | Type::Unknown) {
            return Err(CodegenError::invalid_operation(
                "typeof: unable to infer a type",
                span,
            ));
        }

        let global = self
            .builder
            .build_global_string_ptr(&ty.to_string(), "typeof_str")
            .map_err(|e| {
                CodegenError::internal(format!("failed to create typeof string: {}", e))
            })?;
        Ok(global.as_pointer_value().into())
    }

    /// Generates an `input(prompt, type)` read.
    ///
    /// The prompt, if present, is printed without a trailing newline. A
    /// 256-byte buffer is allocated in the entry block and filled by
    /// `runtime_input`; the raw text is then converted to the target
    /// type: `atoi` for `i32`, `atoi` plus sign extension for `i64`,
    /// `atof` for the float spellings, `strcmp` against `"0"` for `bool`.
    /// Any other target name yields the raw buffer pointer.
    fn generate_input(
        &mut self,
        prompt: Option<&Expr>,
        target: &str,
        span: Span,
    ) -> Result<BasicValueEnum<'ctx>, CodegenError> {
        if let Some(prompt) = prompt {
            self.generate_print(prompt, false)?;
        }

        let buffer_type = self.context.i8_type().array_type(256);
        let buffer = self.create_entry_block_alloca("input_buffer", buffer_type, span)?;

        let runtime_input = self.runtime_function("runtime_input")?;
        self.builder
            .build_call(runtime_input, &[buffer.into()], "")
            .map_err(|e| CodegenError::internal(format!("failed to call runtime_input: {}", e)))?;

        match target {
            "i32" => {
                let atoi = self.runtime_function("atoi")?;
                let call = self
                    .builder
                    .build_call(atoi, &[buffer.into()], "input_i32")
                    .map_err(|e| CodegenError::internal(format!("failed to call atoi: {}", e)))?;
                call_result(call).ok_or_else(|| {
                    CodegenError::internal("atoi call produced no value".to_string())
                })
            }
            "i64" => {
                let atoi = self.runtime_function("atoi")?;
                let call = self
                    .builder
                    .build_call(atoi, &[buffer.into()], "input_i32")
                    .map_err(|e| CodegenError::internal(format!("failed to call atoi: {}", e)))?;
                let narrow = call_result(call)
                    .ok_or_else(|| {
                        CodegenError::internal("atoi call produced no value".to_string())
                    })?
                    .into_int_value();
                self.builder
                    .build_int_s_extend(narrow, self.context.i64_type(), "input_i64")
                    .map(Into::into)
                    .map_err(|e| {
                        CodegenError::internal(format!("failed to extend input value: {}", e))
                    })
            }
            "f32" | "f64" | "float" | "double" => {
                let atof = self.runtime_function("atof")?;
                let call = self
                    .builder
                    .build_call(atof, &[buffer.into()], "input_f64")
                    .map_err(|e| CodegenError::internal(format!("failed to call atof: {}", e)))?;
                call_result(call).ok_or_else(|| {
                    CodegenError::internal("atof call produced no value".to_string())
                })
            }
            "bool" => {
                let strcmp = self.runtime_function("strcmp")?;
                let zero_str = self
                    .builder
                    .build_global_string_ptr("0", "input_zero")
                    .map_err(|e| {
                        CodegenError::internal(format!("failed to create string: {}", e))
                    })?;
                let call = self
                    .builder
                    .build_call(
                        strcmp,
                        &[buffer.into(), zero_str.as_pointer_value().into()],
                        "input_cmp",
                    )
                    .map_err(|e| CodegenError::internal(format!("failed to call strcmp: {}", e)))?;
                let cmp = call_result(call)
                    .ok_or_else(|| {
                        CodegenError::internal("strcmp call produced no value".to_string())
                    })?
                    .into_int_value();
                let zero = self.context.i32_type().const_int(0, false);
                self.builder
                    .build_int_compare(IntPredicate::NE, cmp, zero, "input_bool")
                    .map(Into::into)
                    .map_err(|e| {
                        CodegenError::internal(format!("failed to compare input value: {}", e))
                    })
            }
            _ => Ok(buffer.into()),
        }
    }
}
