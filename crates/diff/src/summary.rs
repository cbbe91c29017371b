use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::edit::{EditOperation, EditTag};

/// Coarse severity of the change between two documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ChangeType {
    #[display(fmt = "minor")]
    Minor,
    #[display(fmt = "moderate")]
    Moderate,
    #[display(fmt = "major")]
    Major,
}

impl ChangeType {
    /// Classify from a similarity percentage and the changed-character
    /// ratio. The minor bucket is checked first, then moderate.
    pub fn classify(similarity: u8, changes_ratio: f64) -> Self {
        if similarity >= 90 && changes_ratio <= 0.1 {
            ChangeType::Minor
        } else if similarity >= 70 && changes_ratio <= 0.3 {
            ChangeType::Moderate
        } else {
            ChangeType::Major
        }
    }
}

/// Line and character change counts plus the overall severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChangeSummary {
    /// Added plus removed lines
    pub lines_changed: usize,

    /// Added plus removed characters
    pub chars_changed: usize,

    pub added_lines: usize,

    pub removed_lines: usize,

    /// Whole-document similarity percentage (0-100)
    pub similarity: u8,

    pub change_type: ChangeType,
}

/// Character totals taken from the character-level diff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContentSummary {
    /// Added plus removed lines
    pub total_changes: usize,

    pub added_content: usize,

    pub removed_content: usize,

    /// `min(added_content, removed_content)`, a rough estimate of content
    /// that was rewritten rather than purely inserted or deleted
    pub modified_content: usize,
}

#[derive(Debug, Default)]
struct Tally {
    added: usize,
    removed: usize,
}

impl Tally {
    fn total(&self) -> usize {
        self.added + self.removed
    }
}

fn tally(ops: &[EditOperation], measure: impl Fn(&EditOperation) -> usize) -> Tally {
    let mut tally = Tally::default();
    for op in ops {
        match op.tag() {
            EditTag::Added => tally.added += measure(op),
            EditTag::Removed => tally.removed += measure(op),
            EditTag::Unchanged => {}
        }
    }
    tally
}

/// Aggregate the character and line edit scripts of one comparison.
///
/// `similarity` is the whole-document similarity, and `max_len` the longer
/// document's length in characters.
pub(crate) fn summarize(
    char_ops: &[EditOperation],
    line_ops: &[EditOperation],
    similarity: u8,
    max_len: usize,
) -> (ChangeSummary, ContentSummary) {
    let chars = tally(char_ops, EditOperation::char_len);
    let lines = tally(line_ops, EditOperation::line_count);

    let changes_ratio = if max_len > 0 {
        chars.total() as f64 / max_len as f64
    } else {
        0.0
    };

    let changes = ChangeSummary {
        lines_changed: lines.total(),
        chars_changed: chars.total(),
        added_lines: lines.added,
        removed_lines: lines.removed,
        similarity,
        change_type: ChangeType::classify(similarity, changes_ratio),
    };

    let summary = ContentSummary {
        total_changes: lines.total(),
        added_content: chars.added,
        removed_content: chars.removed,
        modified_content: chars.added.min(chars.removed),
    };

    (changes, summary)
}
