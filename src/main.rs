//! The Aiko compiler CLI.
//!
//! This binary reads a source file, runs the compilation pipeline and
//! writes the textual IR for the external back-end. Compilation errors
//! are rendered by the diagnostics module.

use clap::Parser;

mod diagnostics;
mod driver;

/// Command-line interface for the Aiko compiler.
#[derive(Parser)]
#[command(name = "aiko")]
#[command(about = "The Aiko programming language compiler", long_about = None)]
struct Cli {
    /// The source file to compile (e.g., `program.aiko`).
    file: String,

    /// Output path for the textual IR.
    #[arg(short = 'o', long = "output", default_value = "./out/main.ll")]
    output: String,

    /// Also print the generated IR to stdout.
    #[arg(long = "print-ir")]
    print_ir: bool,
}

/// Entry point for the Aiko compiler.
///
/// Exit codes: `0` on success, `1` on any lex/parse/codegen error, `-1`
/// on unexpected internal failures (I/O, LLVM verification or write
/// failures).
fn main() {
    let cli = Cli::parse();

    if let Err(error) = driver::build(&cli.file, &cli.output, cli.print_ir) {
        let exit_code = if error.is_internal() { -1 } else { 1 };
        diagnostics::report_error(error.filename(), error.source(), error.error());
        std::process::exit(exit_code);
    }
}
