use document_diff::{compare, new_text, old_text, DiffConfig, EditOperation, LineUnit};

#[test]
fn test_newlines_at_end() {
    // Every trailing-newline combination round-trips
    let cases = [
        ("Line 1\nLine 2\n", "Line 1\nLine X\n"),
        ("Line 1\nLine 2\n", "Line 1\nLine X"),
        ("Line 1\nLine 2", "Line 1\nLine X\n"),
        ("Line 1\nLine 2", "Line 1\nLine X"),
    ];

    for (old, new) in cases {
        let result = compare(old, new, &DiffConfig::default());
        assert!(result.has_changes());
        assert_eq!(old_text(result.line_edits()), old);
        assert_eq!(new_text(result.line_edits()), new);
        assert_eq!(result.changes().added_lines, 1);
        assert_eq!(result.changes().removed_lines, 1);
    }
}

#[test]
fn test_very_large_diff() {
    let mut old = String::new();
    let mut new = String::new();

    // 1000 lines, every 10th one rewritten
    for i in 0..1000 {
        old.push_str(&format!("Line {} of old text\n", i));

        if i % 10 == 0 {
            new.push_str(&format!("MODIFIED Line {} of new text\n", i));
        } else {
            new.push_str(&format!("Line {} of old text\n", i));
        }
    }

    let result = compare(&old, &new, &DiffConfig::default());
    let units = result.units();

    assert_eq!(result.changes().added_lines, 100);
    assert_eq!(result.changes().removed_lines, 100);
    assert_eq!(units.len(), 1000);
    let modified = units
        .iter()
        .filter(|unit| matches!(unit, LineUnit::Modified { .. }))
        .count();
    assert_eq!(modified, 100);
}

#[test]
fn test_unicode_text() {
    let old = "Line 1\nLine 2 🚀\nLine 3 😊\n";
    let new = "Line 1\nLine 2 🚀\nLine 3 🎉\n";

    let result = compare(old, new, &DiffConfig::default());

    assert!(result.has_changes());
    // Lengths are counted in characters, not bytes
    assert_eq!(result.changes().chars_changed, 2);
    assert_eq!(
        result.units()[2],
        LineUnit::Modified {
            old: "Line 3 😊".to_string(),
            new: "Line 3 🎉".to_string(),
        }
    );
}

#[test]
fn test_carriage_returns_are_content() {
    // \r\n is not normalized; the \r stays part of the line text
    let result = compare("a\r\nb\r\n", "a\r\nc\r\n", &DiffConfig::default());

    assert_eq!(
        result.units(),
        vec![
            LineUnit::Unchanged("a\r".to_string()),
            LineUnit::Modified {
                old: "b\r".to_string(),
                new: "c\r".to_string(),
            },
        ]
    );
}

#[test]
fn test_blank_lines_are_kept() {
    let old = "first\n\nsecond\n";
    let new = "first\n\n\nsecond\n";

    let result = compare(old, new, &DiffConfig::default());

    assert_eq!(result.changes().added_lines, 1);
    assert_eq!(result.changes().removed_lines, 0);
    let units = result.units();
    assert_eq!(units.len(), 4);
    assert!(units.contains(&LineUnit::Added(String::new())));
}

#[test]
fn test_placeholder_text_is_ordinary_input() {
    let extracted = "[PDF SUPPORT LIMITED]\n\nThe file \"a.pdf\" is a PDF document.\n";
    let typed = "Quarterly report\n";

    let result = compare(extracted, typed, &DiffConfig::default());

    assert_eq!(old_text(result.line_edits()), extracted);
    assert_eq!(new_text(result.line_edits()), typed);
}

#[test]
fn test_missing_trailing_newline_shows_as_modified_line() {
    let result = compare("a\nb", "a\nb\n", &DiffConfig::default());
    let units = result.units();

    assert_eq!(
        units,
        vec![
            LineUnit::Unchanged("a".to_string()),
            LineUnit::Modified {
                old: "b".to_string(),
                new: "b".to_string(),
            },
        ]
    );
    // Only the terminator differs, so the inline diff has nothing to mark
    assert_eq!(
        units[1].inline_diff(),
        Some(vec![EditOperation::Unchanged("b".to_string())])
    );
}
