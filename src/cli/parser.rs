//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::Parser;
use std::path::PathBuf;

/// hwdist: turn a source homework document into its distribution form.
///
/// Removes `**提示**：` (hint) and `**说明**：` (note) blocks, promotes
/// `1.` questions to level-3 headings and `- (1)` sub-questions to
/// level-4 headings.
#[derive(Parser, Debug)]
#[command(name = "hwdist")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the source document.
    pub input: PathBuf,

    /// Write the result here instead of `<stem><suffix>.<ext>` next to the input.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suffix appended to the input file stem for the derived output path.
    #[arg(long, default_value = crate::io::DEFAULT_SUFFIX)]
    pub suffix: String,

    /// Print the transformed document to stdout instead of writing a file.
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Summary format (text, json).
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl Cli {
    /// Returns a CLI for `input` with every option at its default.
    #[must_use]
    pub fn for_input(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            suffix: crate::io::DEFAULT_SUFFIX.to_string(),
            stdout: false,
            verbose: false,
            format: "text".to_string(),
        }
    }
}
