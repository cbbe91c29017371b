use derive_more::Display;
use log::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::char_diff::diff_chars;
use crate::edit::{split_lines, EditOperation};
use crate::similarity::similarity_ratio;

/// Minimum similarity ratio for a removed/added line pair to be shown as
/// one modified line.
pub const MODIFICATION_THRESHOLD: f64 = 0.3;

/// The display kind of a line unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LineUnitKind {
    #[display(fmt = "unchanged")]
    Unchanged,
    #[display(fmt = "added")]
    Added,
    #[display(fmt = "removed")]
    Removed,
    #[display(fmt = "modified")]
    Modified,
}

/// One display line derived from a line edit script
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "value", rename_all = "lowercase"))]
pub enum LineUnit {
    Unchanged(String),
    Added(String),
    Removed(String),
    /// A removed line and the added line that replaced it
    Modified { old: String, new: String },
}

impl LineUnit {
    pub fn kind(&self) -> LineUnitKind {
        match self {
            LineUnit::Unchanged(_) => LineUnitKind::Unchanged,
            LineUnit::Added(_) => LineUnitKind::Added,
            LineUnit::Removed(_) => LineUnitKind::Removed,
            LineUnit::Modified { .. } => LineUnitKind::Modified,
        }
    }

    /// The text to display for this line; the new text for a modified line
    pub fn content(&self) -> &str {
        match self {
            LineUnit::Unchanged(text) | LineUnit::Added(text) | LineUnit::Removed(text) => text,
            LineUnit::Modified { new, .. } => new,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, LineUnit::Unchanged(_))
    }

    /// Character-level diff between the old and new text of a modified line
    pub fn inline_diff(&self) -> Option<Vec<EditOperation>> {
        match self {
            LineUnit::Modified { old, new } => Some(diff_chars(old, new)),
            _ => None,
        }
    }
}

/// Restructure a line edit script into display units, pairing the lines of
/// a removed block that is immediately followed by an added block.
///
/// Lines are paired by position within the two blocks. A pair whose
/// similarity ratio reaches [`MODIFICATION_THRESHOLD`] becomes one
/// `Modified` unit; otherwise each present side is emitted on its own,
/// removed first. Empty lines inside a paired block are not present and
/// produce no unit. Blocks are never paired across an unchanged run.
pub fn pair_modifications(ops: &[EditOperation]) -> Vec<LineUnit> {
    let mut units = Vec::new();
    let mut i = 0;

    while i < ops.len() {
        match (&ops[i], ops.get(i + 1)) {
            (EditOperation::Removed(removed), Some(EditOperation::Added(added))) => {
                pair_block(removed, added, &mut units);
                i += 2;
            }
            (op, _) => {
                push_lines(op, &mut units);
                i += 1;
            }
        }
    }

    units
}

/// Split a line edit script into one unit per line without any pairing
pub fn flatten_units(ops: &[EditOperation]) -> Vec<LineUnit> {
    let mut units = Vec::new();
    for op in ops {
        push_lines(op, &mut units);
    }
    units
}

fn pair_block(removed: &str, added: &str, units: &mut Vec<LineUnit>) {
    let removed_lines = split_lines(removed);
    let added_lines = split_lines(added);
    let max_lines = removed_lines.len().max(added_lines.len());

    for j in 0..max_lines {
        // Blank lines inside a paired block count as missing
        let old = removed_lines.get(j).copied().filter(|line| !line.is_empty());
        let new = added_lines.get(j).copied().filter(|line| !line.is_empty());

        if let (Some(old), Some(new)) = (old, new) {
            let ratio = similarity_ratio(old, new);
            trace!("pair {}: similarity {:.3}", j, ratio);
            if ratio >= MODIFICATION_THRESHOLD {
                units.push(LineUnit::Modified {
                    old: old.to_string(),
                    new: new.to_string(),
                });
                continue;
            }
        }

        if let Some(old) = old {
            units.push(LineUnit::Removed(old.to_string()));
        }
        if let Some(new) = new {
            units.push(LineUnit::Added(new.to_string()));
        }
    }
}

fn push_lines(op: &EditOperation, units: &mut Vec<LineUnit>) {
    for line in op.lines() {
        let line = line.to_string();
        units.push(match op {
            EditOperation::Unchanged(_) => LineUnit::Unchanged(line),
            EditOperation::Added(_) => LineUnit::Added(line),
            EditOperation::Removed(_) => LineUnit::Removed(line),
        });
    }
}
