//! CLI command implementation.
//!
//! Reads the source document, runs the transformer, and writes the
//! result next to the input (or wherever `--output` points).

use crate::cli::output::{ConversionSummary, OutputFormat, format_summary};
use crate::cli::parser::Cli;
use crate::error::{CommandError, Result};
use crate::io::{derive_output_path, read_file, resolve_path, write_file};
use crate::transform::transform_with_report;
use std::path::{Path, PathBuf};
use tracing::info;

/// Executes the CLI command.
///
/// Returns the text to print on stdout: the conversion summary, or the
/// transformed document itself with `--stdout`.
///
/// # Errors
///
/// Returns an error if the arguments are invalid, the input is missing
/// or unreadable, or the output cannot be written.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::try_parse(&cli.format)?;
    let input = std::path::absolute(&cli.input)?;
    let output = if cli.stdout {
        None
    } else {
        Some(resolve_output_path(&input, cli)?)
    };

    info!(path = %input.display(), "reading source document");
    let content = read_file(&input)?;
    let transformed = transform_with_report(&content);

    let Some(output) = output else {
        info!(report = ?transformed.report, "converted document to stdout");
        return Ok(transformed.text);
    };

    write_file(&output, &transformed.text)?;
    info!(path = %output.display(), "wrote converted document");

    let summary = ConversionSummary {
        input,
        output,
        report: transformed.report,
    };
    format_summary(&summary, format)
}

/// Picks the output path and refuses to overwrite the input.
fn resolve_output_path(input: &Path, cli: &Cli) -> Result<PathBuf> {
    let output = match &cli.output {
        Some(path) => std::path::absolute(path)?,
        None => {
            if cli.suffix.is_empty() {
                return Err(
                    CommandError::InvalidArgument("--suffix must not be empty".to_string()).into(),
                );
            }
            derive_output_path(input, &cli.suffix)?
        }
    };

    if resolve_path(&output)? == resolve_path(input)? {
        return Err(CommandError::InvalidArgument(format!(
            "output path '{}' would overwrite the input",
            output.display()
        ))
        .into());
    }

    Ok(output)
}
