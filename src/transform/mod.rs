//! Homework document transformer.
//!
//! Turns a source homework document into its distribution form in three
//! steps: annotation blocks are removed, newline runs are collapsed, and
//! question lines are promoted to headings. The whole pipeline is a pure
//! function of its input.

pub mod annotation;
pub mod blank_lines;
pub mod headings;
pub mod report;

pub use annotation::{AnnotationKind, HINT_MARKER, NOTE_MARKER, is_boundary, strip_annotations};
pub use blank_lines::collapse_blank_lines;
pub use headings::{HeadingRule, rewrite_headings, rewrite_line};
pub use report::TransformReport;

use tracing::debug;

/// Output of a transform run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    /// Transformed document text.
    pub text: String,
    /// What changed.
    pub report: TransformReport,
}

/// Transforms a document, returning the new text and a change report.
///
/// # Examples
///
/// ```
/// use hwdist::transform::transform_with_report;
///
/// let out = transform_with_report("**提示**：do X\nmore hint text\n1. Question\n");
/// assert_eq!(out.text, "### 1. Question\n");
/// assert_eq!(out.report.hint_blocks, 1);
/// assert_eq!(out.report.items_promoted, 1);
/// ```
#[must_use]
pub fn transform_with_report(source_text: &str) -> Transformed {
    let mut report = TransformReport::default();

    let stripped = strip_annotations(source_text, &mut report);
    debug!(
        hints = report.hint_blocks,
        notes = report.note_blocks,
        lines = report.lines_removed,
        "removed annotation blocks"
    );

    let collapsed = collapse_blank_lines(&stripped, &mut report);
    debug!(runs = report.blank_runs_collapsed, "collapsed blank lines");

    let text = rewrite_headings(&collapsed, &mut report);
    debug!(
        items = report.items_promoted,
        sub_items = report.sub_items_promoted,
        "rewrote headings"
    );

    Transformed { text, report }
}

/// Transforms a document.
///
/// Total over all strings: malformed patterns simply do not match.
///
/// # Examples
///
/// ```
/// use hwdist::transform;
///
/// assert_eq!(transform("- (1) first sub-item\n"), "#### (1) first sub-item\n");
/// assert_eq!(transform(""), "");
/// ```
#[must_use]
pub fn transform(source_text: &str) -> String {
    transform_with_report(source_text).text
}
