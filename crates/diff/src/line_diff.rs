use std::borrow::Cow;

use similar::{capture_diff_slices, Algorithm, DiffTag};

use crate::edit::{EditOperation, EditScriptBuilder, EditTag};

/// Compute a line-level edit script between two texts.
///
/// Lines keep their `\n` terminator, so every operation's text is a run of
/// whole lines taken verbatim from the input. Two empty inputs produce an
/// empty script.
pub fn diff_lines(old_text: &str, new_text: &str, ignore_whitespace: bool) -> Vec<EditOperation> {
    diff_lines_with(Algorithm::Myers, old_text, new_text, ignore_whitespace)
}

/// Same as [`diff_lines`] with an explicit diff algorithm.
///
/// With `ignore_whitespace`, lines are matched on their normalized form but
/// emitted with their original text. Lines matched as equal carry the new
/// document's text.
pub fn diff_lines_with(
    algorithm: Algorithm,
    old_text: &str,
    new_text: &str,
    ignore_whitespace: bool,
) -> Vec<EditOperation> {
    let old_lines = tokenize_lines(old_text);
    let new_lines = tokenize_lines(new_text);

    let old_keys = line_keys(&old_lines, ignore_whitespace);
    let new_keys = line_keys(&new_lines, ignore_whitespace);

    let mut builder = EditScriptBuilder::new();
    for op in capture_diff_slices(algorithm, &old_keys, &new_keys) {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => {
                for line in &new_lines[new_range] {
                    builder.push(EditTag::Unchanged, line);
                }
            }
            DiffTag::Delete => {
                for line in &old_lines[old_range] {
                    builder.push(EditTag::Removed, line);
                }
            }
            DiffTag::Insert => {
                for line in &new_lines[new_range] {
                    builder.push(EditTag::Added, line);
                }
            }
            DiffTag::Replace => {
                for line in &old_lines[old_range] {
                    builder.push(EditTag::Removed, line);
                }
                for line in &new_lines[new_range] {
                    builder.push(EditTag::Added, line);
                }
            }
        }
    }
    builder.finish()
}

/// Collapse every whitespace run to a single space and trim both ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split text into lines, each keeping its `\n` terminator
fn tokenize_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

fn line_keys<'a>(lines: &[&'a str], ignore_whitespace: bool) -> Vec<Cow<'a, str>> {
    lines
        .iter()
        .map(|&line| {
            if ignore_whitespace {
                Cow::Owned(normalize_whitespace(line))
            } else {
                Cow::Borrowed(line)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_keeps_terminators() {
        assert_eq!(tokenize_lines("a\nb\n"), vec!["a\n", "b\n"]);
        assert_eq!(tokenize_lines("a\nb"), vec!["a\n", "b"]);
        assert!(tokenize_lines("").is_empty());
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  a \t b  \n"), "a b");
        assert_eq!(normalize_whitespace("   "), "");
        assert_eq!(normalize_whitespace("a b"), "a b");
    }
}
