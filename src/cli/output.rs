//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::error::{CommandError, Error};
use crate::transform::{AnnotationKind, HeadingRule, TransformReport};
use serde::Serialize;
use std::fmt::Write;
use std::path::PathBuf;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string, falling back to text.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        Self::try_parse(s).unwrap_or(Self::Text)
    }

    /// Parses format from string.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::OutputFormat`] for an unknown format name.
    pub fn try_parse(s: &str) -> Result<Self, CommandError> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(CommandError::OutputFormat(format!(
                "unknown format '{other}' (expected text or json)"
            ))),
        }
    }
}

/// Result of one conversion written to a file.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionSummary {
    /// Absolute input path.
    pub input: PathBuf,
    /// Path the converted document was written to.
    pub output: PathBuf,
    /// What the transform changed.
    pub report: TransformReport,
}

/// Formats a conversion summary.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_summary(summary: &ConversionSummary, format: OutputFormat) -> Result<String, Error> {
    match format {
        OutputFormat::Text => Ok(format_summary_text(summary)),
        OutputFormat::Json => Ok(format_json(summary)?),
    }
}

fn format_summary_text(summary: &ConversionSummary) -> String {
    let report = &summary.report;
    let mut output = String::new();

    let _ = writeln!(output, "Read '{}'.", summary.input.display());
    let _ = writeln!(
        output,
        "Converted content saved to '{}'.",
        summary.output.display()
    );

    output.push_str("\n--- Transformation Summary ---\n");
    let mut step = 0;
    for (kind, count) in [
        (AnnotationKind::Hint, report.hint_blocks),
        (AnnotationKind::Note, report.note_blocks),
    ] {
        step += 1;
        let _ = writeln!(
            output,
            "{step}. Removed {count} '{}' ({}) block(s).",
            kind.marker(),
            kind.label()
        );
    }
    for (rule, example, noun, count) in [
        (HeadingRule::NumberedItem, "1.", "question", report.items_promoted),
        (HeadingRule::SubItem, "- (1)", "sub-question", report.sub_items_promoted),
    ] {
        step += 1;
        let level = rule.level();
        let _ = writeln!(
            output,
            "{step}. Adjusted {count} '{example}' type {noun}(s) to H{level} ({}).",
            "#".repeat(level)
        );
    }
    let _ = writeln!(
        output,
        "{}. Collapsed {} run(s) of blank lines.",
        step + 1,
        report.blank_runs_collapsed
    );
    if !report.changed() {
        output.push_str("No changes were needed.\n");
    }
    output
}

/// Formats an error for the given output format.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }
            format_json(&ErrorOutput {
                error: error.to_string(),
            })
            .unwrap_or_else(|_| "{}".to_string())
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> Result<String, CommandError> {
    Ok(serde_json::to_string_pretty(value)?)
}
