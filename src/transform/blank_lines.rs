//! Blank-line normalization.

use crate::transform::report::TransformReport;
use regex::Regex;
use std::sync::OnceLock;

#[allow(clippy::expect_used)]
fn newline_run_regex() -> &'static Regex {
    static NEWLINE_RUN: OnceLock<Regex> = OnceLock::new();
    NEWLINE_RUN.get_or_init(|| Regex::new(r"\n{3,}").expect("valid regex"))
}

/// Collapses every run of three or more `\n` to exactly two.
///
/// Only bare newlines count; a line holding spaces breaks the run.
///
/// # Examples
///
/// ```
/// use hwdist::transform::{TransformReport, collapse_blank_lines};
///
/// let mut report = TransformReport::default();
/// assert_eq!(collapse_blank_lines("a\n\n\n\nb", &mut report), "a\n\nb");
/// assert_eq!(report.blank_runs_collapsed, 1);
/// ```
pub fn collapse_blank_lines(text: &str, report: &mut TransformReport) -> String {
    let re = newline_run_regex();
    let runs = re.find_iter(text).count();
    if runs == 0 {
        return text.to_string();
    }
    report.blank_runs_collapsed += runs;
    re.replace_all(text, "\n\n").into_owned()
}
