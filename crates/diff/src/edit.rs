use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of an edit operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EditTag {
    /// Text present in both documents
    #[display(fmt = "unchanged")]
    Unchanged,

    /// Text only present in the new document
    #[display(fmt = "added")]
    Added,

    /// Text only present in the old document
    #[display(fmt = "removed")]
    Removed,
}

/// A contiguous run of characters or lines that share the same treatment.
///
/// Operations are ordered: applying them left to right transforms the old
/// text into the new text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "value", rename_all = "lowercase"))]
pub enum EditOperation {
    Unchanged(String),
    Added(String),
    Removed(String),
}

impl EditOperation {
    /// Create an operation from a tag and its text
    pub fn new(tag: EditTag, text: impl Into<String>) -> Self {
        let text = text.into();
        match tag {
            EditTag::Unchanged => EditOperation::Unchanged(text),
            EditTag::Added => EditOperation::Added(text),
            EditTag::Removed => EditOperation::Removed(text),
        }
    }

    pub fn tag(&self) -> EditTag {
        match self {
            EditOperation::Unchanged(_) => EditTag::Unchanged,
            EditOperation::Added(_) => EditTag::Added,
            EditOperation::Removed(_) => EditTag::Removed,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            EditOperation::Unchanged(text)
            | EditOperation::Added(text)
            | EditOperation::Removed(text) => text,
        }
    }

    /// Check if this operation adds or removes text
    pub fn is_change(&self) -> bool {
        !matches!(self, EditOperation::Unchanged(_))
    }

    /// Length of the text in characters
    pub fn char_len(&self) -> usize {
        self.text().chars().count()
    }

    /// Number of lines covered by this operation.
    ///
    /// A trailing `\n` terminates the last line rather than starting a new
    /// one, so `"a\nb\n"` and `"a\nb"` both count two lines.
    pub fn line_count(&self) -> usize {
        count_lines(self.text())
    }

    /// Split the text into display lines, dropping the single empty segment
    /// a trailing `\n` leaves behind.
    pub fn lines(&self) -> Vec<&str> {
        split_lines(self.text())
    }
}

pub(crate) fn count_lines(text: &str) -> usize {
    let segments = text.split('\n').count();
    if text.ends_with('\n') {
        segments - 1
    } else {
        segments
    }
}

pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// Rebuild the old document from an edit script
pub fn old_text(ops: &[EditOperation]) -> String {
    ops.iter()
        .filter(|op| op.tag() != EditTag::Added)
        .map(EditOperation::text)
        .collect()
}

/// Rebuild the new document from an edit script
pub fn new_text(ops: &[EditOperation]) -> String {
    ops.iter()
        .filter(|op| op.tag() != EditTag::Removed)
        .map(EditOperation::text)
        .collect()
}

/// Accumulates tagged fragments into a canonical edit script.
///
/// Adjacent fragments with the same tag are merged, and inside every change
/// block (the fragments between two unchanged runs) all removed text is
/// emitted before all added text.
#[derive(Debug, Default)]
pub(crate) struct EditScriptBuilder {
    ops: Vec<EditOperation>,
    unchanged: String,
    removed: String,
    added: String,
}

impl EditScriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tag: EditTag, fragment: &str) {
        if fragment.is_empty() {
            return;
        }
        match tag {
            EditTag::Unchanged => {
                self.flush_changes();
                self.unchanged.push_str(fragment);
            }
            EditTag::Removed => {
                self.flush_unchanged();
                self.removed.push_str(fragment);
            }
            EditTag::Added => {
                self.flush_unchanged();
                self.added.push_str(fragment);
            }
        }
    }

    pub fn finish(mut self) -> Vec<EditOperation> {
        self.flush_unchanged();
        self.flush_changes();
        self.ops
    }

    fn flush_unchanged(&mut self) {
        if !self.unchanged.is_empty() {
            let text = std::mem::take(&mut self.unchanged);
            self.ops.push(EditOperation::Unchanged(text));
        }
    }

    fn flush_changes(&mut self) {
        if !self.removed.is_empty() {
            let text = std::mem::take(&mut self.removed);
            self.ops.push(EditOperation::Removed(text));
        }
        if !self.added.is_empty() {
            let text = std::mem::take(&mut self.added);
            self.ops.push(EditOperation::Added(text));
        }
    }
}
