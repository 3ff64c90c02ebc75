//! Annotation block removal.
//!
//! Hint (`**提示**：`) and note (`**说明**：`) blocks are dropped with a
//! two-state line scanner. A block opens on a marker line and closes,
//! without consuming it, on the first boundary line: a numbered item, a
//! bracketed sub-item, a `##` heading, or the end of the document.

use crate::transform::report::TransformReport;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Marker literal that opens a hint block.
pub const HINT_MARKER: &str = "**提示**：";

/// Marker literal that opens a note block.
pub const NOTE_MARKER: &str = "**说明**：";

/// Kind of annotation block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationKind {
    /// `**提示**：` block.
    Hint,
    /// `**说明**：` block.
    Note,
}

impl AnnotationKind {
    /// All recognized kinds, in marker-check order.
    pub const ALL: [Self; 2] = [Self::Hint, Self::Note];

    /// Returns the marker literal for this kind.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Hint => HINT_MARKER,
            Self::Note => NOTE_MARKER,
        }
    }

    /// Returns a human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hint => "Hint",
            Self::Note => "Note",
        }
    }

    /// Detects a marker line.
    ///
    /// The marker must be the first non-whitespace text on the line;
    /// anything after it belongs to the block.
    ///
    /// # Examples
    ///
    /// ```
    /// use hwdist::transform::AnnotationKind;
    ///
    /// assert_eq!(AnnotationKind::detect("  **提示**：try x"), Some(AnnotationKind::Hint));
    /// assert_eq!(AnnotationKind::detect("see **说明**："), None);
    /// ```
    #[must_use]
    pub fn detect(line: &str) -> Option<Self> {
        let body = line.trim_start();
        Self::ALL
            .into_iter()
            .find(|kind| body.starts_with(kind.marker()))
    }
}

/// Returns true if the line ends an open annotation block.
///
/// Leading whitespace is allowed before the boundary text. `##` also
/// covers deeper headings.
#[must_use]
pub fn is_boundary(line: &str) -> bool {
    boundary_regex().is_match(strip_terminator(line))
}

#[allow(clippy::expect_used)]
fn boundary_regex() -> &'static Regex {
    static BOUNDARY: OnceLock<Regex> = OnceLock::new();
    BOUNDARY.get_or_init(|| Regex::new(r"^\s*(?:\d+\. |-\s*\(|##)").expect("valid regex"))
}

#[allow(clippy::expect_used)]
fn bare_hyphen_regex() -> &'static Regex {
    static BARE_HYPHEN: OnceLock<Regex> = OnceLock::new();
    BARE_HYPHEN.get_or_init(|| Regex::new(r"^\s*-\s*$").expect("valid regex"))
}

/// Returns true if `lines[j]` ends an open block.
///
/// A sub-item boundary may be split across lines: a line holding only
/// `-` ends the block when the next non-blank line opens with `(`.
fn ends_block(lines: &[&str], j: usize) -> bool {
    if is_boundary(lines[j]) {
        return true;
    }
    bare_hyphen_regex().is_match(strip_terminator(lines[j]))
        && first_content_line(lines, j + 1).is_some_and(|k| lines[k].trim_start().starts_with('('))
}

fn strip_terminator(line: &str) -> &str {
    line.strip_suffix('\n').unwrap_or(line)
}

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Copying lines to the output.
    Scanning,
    /// Dropping lines until the next boundary.
    InAnnotationBlock,
}

/// Index of the first line at or after `start` that is not whitespace-only.
fn first_content_line(lines: &[&str], start: usize) -> Option<usize> {
    (start..lines.len()).find(|&k| !lines[k].trim().is_empty())
}

/// Removes every hint and note block from `text`.
///
/// Whitespace-only lines directly in front of a marker line are removed
/// with its block. Whitespace-only lines directly in front of a boundary
/// are kept. A marker met inside an open block extends that block and is
/// counted as one more removed annotation.
pub fn strip_annotations(text: &str, report: &mut TransformReport) -> String {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    let mut output = String::with_capacity(text.len());
    let mut state = ScanState::Scanning;
    let mut i = 0;

    while i < lines.len() {
        let next_content = first_content_line(&lines, i);

        match (state, next_content) {
            (ScanState::Scanning, None) => {
                lines[i..].iter().for_each(|line| output.push_str(line));
                i = lines.len();
            }
            (ScanState::Scanning, Some(j)) => {
                if let Some(kind) = AnnotationKind::detect(lines[j]) {
                    report.record_annotation(kind);
                    report.lines_removed += j + 1 - i;
                    state = ScanState::InAnnotationBlock;
                } else {
                    lines[i..=j].iter().for_each(|line| output.push_str(line));
                }
                i = j + 1;
            }
            (ScanState::InAnnotationBlock, None) => {
                report.lines_removed += lines.len() - i;
                i = lines.len();
            }
            (ScanState::InAnnotationBlock, Some(j)) => {
                if ends_block(&lines, j) {
                    // Re-examined as Scanning without advancing.
                    state = ScanState::Scanning;
                } else {
                    if let Some(kind) = AnnotationKind::detect(lines[j]) {
                        report.record_annotation(kind);
                    }
                    report.lines_removed += j + 1 - i;
                    i = j + 1;
                }
            }
        }
    }

    output
}
