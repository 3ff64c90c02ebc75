//! Heading-level rewriting.
//!
//! Each line is tested against an ordered list of rules and the first
//! match wins. Sub-items (`- (1) ...`) become level-4 headings, numbered
//! questions (`1. ...`) become level-3 headings, everything else passes
//! through byte-for-byte.

use crate::transform::report::TransformReport;
use regex::Regex;
use serde::Serialize;
use std::borrow::Cow;
use std::sync::OnceLock;

/// A line-rewrite rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingRule {
    /// `- (label) rest` → `#### (label) rest`.
    SubItem,
    /// `12. rest` → `### 12. rest`.
    NumberedItem,
}

impl HeadingRule {
    /// Rules in evaluation order.
    pub const ORDERED: [Self; 2] = [Self::SubItem, Self::NumberedItem];

    /// Markdown heading level produced by this rule.
    #[must_use]
    pub const fn level(self) -> usize {
        match self {
            Self::SubItem => 4,
            Self::NumberedItem => 3,
        }
    }

    #[allow(clippy::expect_used)]
    fn regex(self) -> &'static Regex {
        macro_rules! static_regex {
            ($name:ident, $pattern:expr) => {{
                static $name: OnceLock<Regex> = OnceLock::new();
                $name.get_or_init(|| Regex::new($pattern).expect("valid regex"))
            }};
        }

        match self {
            Self::SubItem => static_regex!(
                SUB_ITEM,
                r"^\s*-\s*\((?P<label>.*?)\)(?P<rest>.*)"
            ),
            Self::NumberedItem => static_regex!(NUMBERED_ITEM, r"^\s*(?P<number>\d+)\."),
        }
    }

    const fn replacement(self) -> &'static str {
        match self {
            Self::SubItem => "#### (${label})${rest}",
            Self::NumberedItem => "### ${number}.",
        }
    }

    /// Applies the rule to one line, or returns `None` if it does not match.
    ///
    /// # Examples
    ///
    /// ```
    /// use hwdist::transform::HeadingRule;
    ///
    /// assert_eq!(
    ///     HeadingRule::NumberedItem.apply("  3. Prove it").as_deref(),
    ///     Some("### 3. Prove it")
    /// );
    /// assert_eq!(HeadingRule::SubItem.apply("- (a"), None);
    /// ```
    #[must_use]
    pub fn apply(self, line: &str) -> Option<String> {
        let re = self.regex();
        if !re.is_match(line) {
            return None;
        }
        Some(re.replacen(line, 1, self.replacement()).into_owned())
    }
}

/// Rewrites a single line, returning the rule that fired, if any.
#[must_use]
pub fn rewrite_line(line: &str) -> (Cow<'_, str>, Option<HeadingRule>) {
    HeadingRule::ORDERED
        .into_iter()
        .find_map(|rule| rule.apply(line).map(|out| (Cow::Owned(out), Some(rule))))
        .unwrap_or((Cow::Borrowed(line), None))
}

/// Rewrites every line of `text`.
///
/// Lines are split on `\n` and rejoined with `\n`, so a trailing newline
/// survives and a `\r` stays with its line.
pub fn rewrite_headings(text: &str, report: &mut TransformReport) -> String {
    let lines: Vec<Cow<'_, str>> = text
        .split('\n')
        .map(|line| {
            let (out, rule) = rewrite_line(line);
            if let Some(rule) = rule {
                report.record_heading(rule);
            }
            out
        })
        .collect();
    lines.join("\n")
}
