use similar::{Algorithm, ChangeTag, TextDiff};

use crate::edit::{EditOperation, EditScriptBuilder, EditTag};

/// Compute a character-level edit script between two texts.
///
/// Two empty inputs produce an empty script. Inputs with nothing in common
/// produce a single `Removed` run followed by a single `Added` run.
pub fn diff_chars(old_text: &str, new_text: &str) -> Vec<EditOperation> {
    diff_chars_with(Algorithm::Myers, old_text, new_text)
}

/// Same as [`diff_chars`] with an explicit diff algorithm
pub fn diff_chars_with(
    algorithm: Algorithm,
    old_text: &str,
    new_text: &str,
) -> Vec<EditOperation> {
    if old_text.is_empty() && new_text.is_empty() {
        return Vec::new();
    }

    let diff = TextDiff::configure()
        .algorithm(algorithm)
        .diff_chars(old_text, new_text);

    let mut builder = EditScriptBuilder::new();
    for change in diff.iter_all_changes() {
        builder.push(edit_tag(change.tag()), change.value());
    }
    builder.finish()
}

pub(crate) fn edit_tag(tag: ChangeTag) -> EditTag {
    match tag {
        ChangeTag::Equal => EditTag::Unchanged,
        ChangeTag::Insert => EditTag::Added,
        ChangeTag::Delete => EditTag::Removed,
    }
}
