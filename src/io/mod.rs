//! I/O utilities for hwdist.
//!
//! Reads source documents (memory-mapping large ones), writes results,
//! and derives output paths from input paths.

pub mod paths;
pub mod reader;

pub use paths::{DEFAULT_SUFFIX, derive_output_path, resolve_path};
pub use reader::{DocumentReader, read_file, write_file};
