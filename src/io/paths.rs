//! Output path derivation.

use crate::error::{IoError, Result};
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Suffix appended to the input file stem by default.
pub const DEFAULT_SUFFIX: &str = "_out";

/// Derives the output path for `input`.
///
/// The result sits in the same directory, with `suffix` appended to the
/// file stem and the original extension kept.
///
/// # Errors
///
/// Returns [`IoError::InvalidPath`] if `input` has no file name.
///
/// # Examples
///
/// ```
/// use hwdist::io::derive_output_path;
/// use std::path::Path;
///
/// let out = derive_output_path(Path::new("hw/week1.md"), "_out").unwrap();
/// assert_eq!(out, Path::new("hw/week1_out.md"));
/// ```
pub fn derive_output_path(input: &Path, suffix: &str) -> Result<PathBuf> {
    let stem = input.file_stem().ok_or_else(|| IoError::InvalidPath {
        path: input.to_string_lossy().to_string(),
        reason: "path has no file name".to_string(),
    })?;

    let mut file_name = OsString::from(stem);
    file_name.push(suffix);
    if let Some(ext) = input.extension() {
        file_name.push(".");
        file_name.push(ext);
    }

    Ok(input.with_file_name(file_name))
}

/// Resolves `path` to the file it would actually name.
///
/// `.` and `..` are folded and symlinks are followed for every prefix
/// that exists, so a path that does not exist yet still compares equal
/// to an existing file it would overwrite.
///
/// # Errors
///
/// Returns an error if the current directory cannot be read.
pub fn resolve_path(path: &Path) -> Result<PathBuf> {
    let mut resolved = PathBuf::new();
    for component in std::path::absolute(path)?.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => {
                resolved.push(other);
                if let Ok(real) = resolved.canonicalize() {
                    resolved = real;
                }
            }
        }
    }
    Ok(resolved)
}
