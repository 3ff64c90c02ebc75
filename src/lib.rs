//! # hwdist
//!
//! Converts a "source" homework Markdown document into its
//! "distribution" version.
//!
//! ## Features
//!
//! - **Annotation removal**: `**提示**：` (hint) and `**说明**：` (note) blocks
//!   are dropped up to the next question, sub-question, or `##` heading
//! - **Blank-line cleanup**: runs of three or more newlines collapse to two
//! - **Heading levels**: `1.` questions become `###`, `- (1)` sub-questions `####`
//!
//! The transformer is a pure function:
//!
//! ```
//! let out = hwdist::transform("**说明**：note\n## Section Two\n");
//! assert_eq!(out, "## Section Two\n");
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
// Note: unsafe is needed for memory-mapped I/O (memmap2)
#![warn(unsafe_code)]

pub mod cli;
pub mod error;
pub mod io;
pub mod transform;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export transformer
pub use transform::{
    AnnotationKind, HeadingRule, TransformReport, Transformed, transform, transform_with_report,
};

// Re-export CLI types
pub use cli::{Cli, OutputFormat};
