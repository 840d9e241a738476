//! External runtime declarations.
//!
//! The emitted IR calls a small set of C-style runtime symbols; this
//! module declares them in the LLVM module up front. `printf`, `puts`,
//! `exit`, `atoi`, `atof`, `strcmp` and `fmod` come from libc;
//! `runtime_input` is provided by the host runtime and fills a character
//! buffer from stdin.

use super::Codegen;
use super::error::CodegenError;
use inkwell::AddressSpace;
use inkwell::module::Linkage;
use inkwell::values::FunctionValue;

impl<'ctx> Codegen<'ctx> {
    /// Declares all external runtime functions used by generated code.
    pub(super) fn declare_runtime(&self) {
        let i32_type = self.context.i32_type();
        let f64_type = self.context.f64_type();
        let void_type = self.context.void_type();
        let ptr_type = self.context.i8_type().ptr_type(AddressSpace::default());

        // i32 printf(i8*, ...)
        let printf_type = i32_type.fn_type(&[ptr_type.into()], true);
        self.module
            .add_function("printf", printf_type, Some(Linkage::External));

        // i32 puts(i8*)
        let puts_type = i32_type.fn_type(&[ptr_type.into()], false);
        self.module
            .add_function("puts", puts_type, Some(Linkage::External));

        // void exit(i32)
        let exit_type = void_type.fn_type(&[i32_type.into()], false);
        self.module
            .add_function("exit", exit_type, Some(Linkage::External));

        // i32 atoi(i8*)
        let atoi_type = i32_type.fn_type(&[ptr_type.into()], false);
        self.module
            .add_function("atoi", atoi_type, Some(Linkage::External));

        // f64 atof(i8*)
        let atof_type = f64_type.fn_type(&[ptr_type.into()], false);
        self.module
            .add_function("atof", atof_type, Some(Linkage::External));

        // i32 strcmp(i8*, i8*)
        let strcmp_type = i32_type.fn_type(&[ptr_type.into(), ptr_type.into()], false);
        self.module
            .add_function("strcmp", strcmp_type, Some(Linkage::External));

        // f64 fmod(f64, f64)
        let fmod_type = f64_type.fn_type(&[f64_type.into(), f64_type.into()], false);
        self.module
            .add_function("fmod", fmod_type, Some(Linkage::External));

        // void runtime_input(i8*) - fills a buffer from stdin
        let input_type = void_type.fn_type(&[ptr_type.into()], false);
        self.module
            .add_function("runtime_input", input_type, Some(Linkage::External));
    }

    /// Looks up a declared runtime function by name.
    ///
    /// Returns an internal error if the function is missing, which would
    /// mean `declare_runtime` was not called.
    pub(super) fn runtime_function(&self, name: &str) -> Result<FunctionValue<'ctx>, CodegenError> {
        self.module.get_function(name).ok_or_else(|| {
            CodegenError::internal(format!("runtime function '{}' is not declared", name))
        })
    }
}
