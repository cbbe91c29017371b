use log::debug;
use similar::Algorithm;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::char_diff::diff_chars_with;
use crate::config::DiffConfig;
use crate::edit::EditOperation;
use crate::line_diff::diff_lines_with;
use crate::pairing::{flatten_units, pair_modifications, LineUnit};
use crate::similarity::similarity_with;
use crate::summary::{summarize, ChangeSummary, ContentSummary};

/// The result of comparing two documents.
///
/// Created fresh by every comparison and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComparisonResult {
    /// The line-level edit script
    lines: Vec<EditOperation>,

    /// Line and character change counts with the overall severity
    changes: ChangeSummary,

    /// Character totals from the character-level diff
    summary: ContentSummary,
}

/// Compare two documents.
///
/// Never fails: every pair of strings, including empty ones, produces a
/// result.
pub fn compare(old_text: &str, new_text: &str, config: &DiffConfig) -> ComparisonResult {
    let (char_ops, line_ops) = run_differencers(config, old_text, new_text);

    let similarity = similarity_with(old_text, new_text, config.ignore_whitespace);
    let max_len = old_text.chars().count().max(new_text.chars().count());
    let (changes, summary) = summarize(&char_ops, &line_ops, similarity, max_len);

    debug!(
        "compared {} char ops / {} line ops: +{} -{} lines, similarity {}%, {}",
        char_ops.len(),
        line_ops.len(),
        changes.added_lines,
        changes.removed_lines,
        changes.similarity,
        changes.change_type
    );

    ComparisonResult {
        lines: line_ops,
        changes,
        summary,
    }
}

#[cfg(feature = "parallel")]
fn run_differencers(
    config: &DiffConfig,
    old_text: &str,
    new_text: &str,
) -> (Vec<EditOperation>, Vec<EditOperation>) {
    let algorithm: Algorithm = config.algorithm;
    rayon::join(
        || diff_chars_with(algorithm, old_text, new_text),
        || diff_lines_with(algorithm, old_text, new_text, config.ignore_whitespace),
    )
}

#[cfg(not(feature = "parallel"))]
fn run_differencers(
    config: &DiffConfig,
    old_text: &str,
    new_text: &str,
) -> (Vec<EditOperation>, Vec<EditOperation>) {
    let algorithm: Algorithm = config.algorithm;
    (
        diff_chars_with(algorithm, old_text, new_text),
        diff_lines_with(algorithm, old_text, new_text, config.ignore_whitespace),
    )
}

impl ComparisonResult {
    /// Get the line-level edit script
    pub fn line_edits(&self) -> &[EditOperation] {
        &self.lines
    }

    /// Get the change counts and severity
    pub fn changes(&self) -> &ChangeSummary {
        &self.changes
    }

    /// Get the character totals
    pub fn summary(&self) -> &ContentSummary {
        &self.summary
    }

    /// Check if any line was added or removed
    pub fn has_changes(&self) -> bool {
        self.lines.iter().any(EditOperation::is_change)
    }

    /// Display units with adjacent removed/added lines paired into
    /// modifications
    pub fn units(&self) -> Vec<LineUnit> {
        pair_modifications(&self.lines)
    }

    /// Display units, one per line, without pairing
    pub fn flat_units(&self) -> Vec<LineUnit> {
        flatten_units(&self.lines)
    }

    /// The trimmed text of every added or removed line operation, in order
    pub fn changed_lines(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|op| op.is_change())
            .map(|op| op.text().trim())
            .collect()
    }
}
