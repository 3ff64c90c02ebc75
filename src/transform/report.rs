//! Change accounting for a transform run.

use crate::transform::annotation::AnnotationKind;
use crate::transform::headings::HeadingRule;
use serde::Serialize;

/// Counts of what a transform run changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TransformReport {
    /// Hint markers removed.
    pub hint_blocks: usize,
    /// Note markers removed.
    pub note_blocks: usize,
    /// Lines deleted by annotation removal.
    pub lines_removed: usize,
    /// Runs of three or more newlines collapsed.
    pub blank_runs_collapsed: usize,
    /// Numbered items promoted to level-3 headings.
    pub items_promoted: usize,
    /// Sub-items promoted to level-4 headings.
    pub sub_items_promoted: usize,
}

impl TransformReport {
    /// Records one removed annotation.
    pub const fn record_annotation(&mut self, kind: AnnotationKind) {
        match kind {
            AnnotationKind::Hint => self.hint_blocks += 1,
            AnnotationKind::Note => self.note_blocks += 1,
        }
    }

    /// Records one rewritten line.
    pub const fn record_heading(&mut self, rule: HeadingRule) {
        match rule {
            HeadingRule::SubItem => self.sub_items_promoted += 1,
            HeadingRule::NumberedItem => self.items_promoted += 1,
        }
    }

    /// Total annotations removed.
    #[must_use]
    pub const fn annotations_removed(&self) -> usize {
        self.hint_blocks + self.note_blocks
    }

    /// Returns true if the run changed anything.
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.annotations_removed() > 0
            || self.lines_removed > 0
            || self.blank_runs_collapsed > 0
            || self.items_promoted > 0
            || self.sub_items_promoted > 0
    }
}
