//! CLI layer for hwdist.
//!
//! Provides the command-line interface using clap: argument parsing,
//! command execution, and summary formatting.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::{ConversionSummary, OutputFormat};
pub use parser::Cli;
