//! Module verification and textual IR output.
//!
//! The compiled module is verified by the LLVM verifier and printed as
//! textual IR; an external back-end consumes the `.ll` file and performs
//! machine-code generation and linking.

use super::Codegen;
use super::error::CodegenError;
use std::path::Path;

impl<'ctx> Codegen<'ctx> {
    /// Runs the LLVM verifier over the compiled module.
    ///
    /// Verification failures indicate a compiler bug (a block without a
    /// terminator, a mistyped instruction) and surface as internal
    /// errors.
    pub fn verify(&self) -> Result<(), CodegenError> {
        self.module.verify().map_err(|e| {
            CodegenError::internal(format!("module verification failed: {}", e.to_string()))
        })
    }

    /// Returns the module as textual IR.
    pub fn print_to_string(&self) -> String {
        self.module.print_to_string().to_string()
    }

    /// Writes the module as textual IR to the given path.
    ///
    /// The parent directory must already exist; the driver creates the
    /// default `./out` directory before calling this.
    ///
    /// # Errors
    ///
    /// Returns an internal error if LLVM fails to write the file.
    pub fn write_ir_file(&self, path: &Path) -> Result<(), CodegenError> {
        self.module.print_to_file(path).map_err(|e| {
            CodegenError::internal(format!(
                "failed to write IR to '{}': {}",
                path.display(),
                e.to_string()
            ))
        })
    }
}
