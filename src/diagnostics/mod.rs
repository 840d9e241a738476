//! Ariadne-based error reporting for the CLI.
//!
//! Renders compile errors as labeled source reports. Errors without a
//! source location (I/O failures, internal errors) fall back to plain
//! stderr lines, as does report rendering itself if it fails.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use crate::driver::CompileError;

fn print_range_report(
    filename: &str,
    source: &str,
    span_range: Range<usize>,
    short_message: &str,
    label_message: &str,
) -> std::io::Result<()> {
    Report::build(ReportKind::Error, (filename, span_range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(short_message)
        .with_label(
            Label::new((filename, span_range))
                .with_message(label_message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)))
}

fn report_spanned(
    filename: &str,
    source: &str,
    span: aiko::token::Span,
    short_message: &str,
    message: &str,
) {
    if let Err(report_err) =
        print_range_report(filename, source, span.start..span.end, short_message, message)
    {
        eprintln!(
            "Error: {}: {} (at {}:{})",
            short_message, message, span.line, span.column
        );
        eprintln!("(Failed to display detailed error report: {})", report_err);
    }
}

/// Reports a compile error to stderr.
pub(crate) fn report_error(filename: &str, source: &str, error: &CompileError) {
    match error {
        CompileError::Lex(error) => {
            report_spanned(
                filename,
                source,
                error.span(),
                error.short_message(),
                error.message(),
            );
        }
        CompileError::Parse(error) => {
            report_spanned(
                filename,
                source,
                error.span(),
                error.short_message(),
                error.message(),
            );
        }
        CompileError::Codegen(error) => {
            if let Some(span) = error.span() {
                report_spanned(filename, source, span, error.short_message(), error.message());
            } else {
                eprintln!("Error in {}: {}", filename, error.message());
            }
        }
        CompileError::FileRead { .. } | CompileError::OutputDir { .. } => {
            eprintln!("Error: {}", error);
        }
    }
}
