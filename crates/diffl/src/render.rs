//! Text rendering of comparison results.
//!
//! Every function here is a pure function of a [`ComparisonResult`] and a
//! [`DisplayOptions`] value, so views can be tested without a terminal.

use clap::ValueEnum;
use colored::Colorize;
use document_diff::{ComparisonResult, EditOperation, LineUnit, LineUnitKind};
use document_stats::DocumentStatistics;

/// How the differences are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ViewMode {
    /// Every line in document order, like a unified diff
    #[default]
    Git,
    /// Changed lines only
    List,
}

/// Presentation settings for one rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub view_mode: ViewMode,
    pub show_line_numbers: bool,
    /// Show a character diff inside modified lines
    pub inline_diffs: bool,
    pub color: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::Git,
            show_line_numbers: true,
            inline_diffs: true,
            color: false,
        }
    }
}

/// Render the header and the selected view
pub fn render(result: &ComparisonResult, options: &DisplayOptions) -> String {
    let units = if options.inline_diffs {
        result.units()
    } else {
        result.flat_units()
    };

    let mut out = header(result);
    out.push('\n');
    match options.view_mode {
        ViewMode::Git => render_git(&units, options, &mut out),
        ViewMode::List => render_list(&units, options, &mut out),
    }
    out
}

/// One-line overview of the change counts and severity
pub fn header(result: &ComparisonResult) -> String {
    let changes = result.changes();
    format!(
        "{} lines • {} chars • {}% similar • {} change",
        changes.lines_changed, changes.chars_changed, changes.similarity, changes.change_type
    )
}

fn render_git(units: &[LineUnit], options: &DisplayOptions, out: &mut String) {
    for (index, unit) in units.iter().enumerate() {
        push_line(index + 1, unit, options, out);
    }
}

fn render_list(units: &[LineUnit], options: &DisplayOptions, out: &mut String) {
    let changes: Vec<&LineUnit> = units
        .iter()
        .filter(|unit| unit.is_change() && !is_blank(unit))
        .collect();

    if changes.is_empty() {
        out.push_str("No differences found\n");
        return;
    }

    for (index, unit) in changes.into_iter().enumerate() {
        push_line(index + 1, unit, options, out);
    }
}

fn is_blank(unit: &LineUnit) -> bool {
    match unit {
        LineUnit::Modified { old, new } => old.is_empty() && new.is_empty(),
        other => other.content().is_empty(),
    }
}

fn push_line(number: usize, unit: &LineUnit, options: &DisplayOptions, out: &mut String) {
    let kind = unit.kind();
    let body = match unit.inline_diff() {
        Some(ops) if options.inline_diffs => inline_markup(&ops, options.color),
        _ => unit.content().to_string(),
    };

    let mut line = String::new();
    if options.show_line_numbers {
        line.push_str(&format!("{:>4} ", number));
    }
    line.push(marker(kind));
    if !body.is_empty() {
        line.push(' ');
        line.push_str(&body);
    }
    let line = line.trim_end_matches(' ');

    if options.color {
        let painted = match kind {
            LineUnitKind::Added => line.green().to_string(),
            LineUnitKind::Removed => line.red().to_string(),
            LineUnitKind::Modified | LineUnitKind::Unchanged => line.to_string(),
        };
        out.push_str(&painted);
    } else {
        out.push_str(line);
    }
    out.push('\n');
}

fn marker(kind: LineUnitKind) -> char {
    match kind {
        LineUnitKind::Added => '+',
        LineUnitKind::Removed => '-',
        LineUnitKind::Modified => '~',
        LineUnitKind::Unchanged => ' ',
    }
}

/// Mark up a character diff, either with `[-removed-]{+added+}` brackets or
/// with colour
fn inline_markup(ops: &[EditOperation], color: bool) -> String {
    let mut out = String::new();
    for op in ops {
        match (op, color) {
            (EditOperation::Unchanged(text), _) => out.push_str(text),
            (EditOperation::Removed(text), false) => {
                out.push_str(&format!("[-{}-]", text));
            }
            (EditOperation::Added(text), false) => {
                out.push_str(&format!("{{+{}+}}", text));
            }
            (EditOperation::Removed(text), true) => {
                out.push_str(&text.red().strikethrough().to_string());
            }
            (EditOperation::Added(text), true) => {
                out.push_str(&text.green().bold().to_string());
            }
        }
    }
    out
}

/// Plain listing of the changes for copying elsewhere.
///
/// The git view prefixes every raw line operation; the list view emits only
/// the non-blank lines of added and removed operations.
pub fn export_plain(result: &ComparisonResult, view_mode: ViewMode) -> String {
    match view_mode {
        ViewMode::Git => result
            .line_edits()
            .iter()
            .map(|op| format!("{}{}", plain_prefix(op), op.text()))
            .collect::<Vec<_>>()
            .join("\n"),
        ViewMode::List => result
            .line_edits()
            .iter()
            .filter(|op| op.is_change())
            .flat_map(|op| {
                op.text()
                    .split('\n')
                    .filter(|line| !line.is_empty())
                    .map(move |line| format!("{}{}", plain_prefix(op), line))
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn plain_prefix(op: &EditOperation) -> &'static str {
    match op {
        EditOperation::Added(_) => "+ ",
        EditOperation::Removed(_) => "- ",
        EditOperation::Unchanged(_) => "",
    }
}

/// Readability statistics of one document as an indented block
pub fn render_statistics(label: &str, stats: &DocumentStatistics) -> String {
    let rows = [
        ("Reading time", format!("{} min", stats.reading_time)),
        ("Characters", stats.total_chars.to_string()),
        ("Words", stats.word_count.to_string()),
        ("Lines", stats.line_count.to_string()),
        ("Paragraphs", stats.paragraph_count.to_string()),
        ("Sentences", stats.sentence_count.to_string()),
        ("Words per sentence", format!("{:.1}", stats.average_words_per_sentence)),
        ("Characters per word", format!("{:.1}", stats.average_chars_per_word)),
        ("Complexity", stats.complexity.to_string()),
        ("Unique words", stats.language_metrics.unique_words.to_string()),
        (
            "Lexical diversity",
            format!("{:.2}", stats.language_metrics.lexical_diversity),
        ),
    ];

    let mut out = format!("{} statistics\n", label);
    for (name, value) in rows {
        out.push_str(&format!("  {:<22}{}\n", format!("{}:", name), value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use document_diff::DiffConfig;
    use document_stats::compute_statistics;
    use pretty_assertions::assert_eq;

    const OLD: &str = "keep\nold line\nremoved\n";
    const NEW: &str = "keep\nold lime\nnew\n";

    fn compare(old: &str, new: &str) -> ComparisonResult {
        DiffConfig::default().compare(old, new)
    }

    #[test]
    fn test_header() {
        let result = compare(OLD, NEW);
        assert_eq!(
            header(&result),
            "4 lines • 10 chars • 68% similar • major change"
        );
    }

    #[test]
    fn test_git_view() {
        let output = render(&compare(OLD, NEW), &DisplayOptions::default());
        insta::assert_snapshot!(output, @r###"
        4 lines • 10 chars • 68% similar • major change
           1   keep
           2 ~ old li[-n-]{+m+}e
           3 - removed
           4 + new
        "###);
    }

    #[test]
    fn test_git_view_without_inline_diffs() {
        let options = DisplayOptions {
            inline_diffs: false,
            show_line_numbers: false,
            ..DisplayOptions::default()
        };
        let output = render(&compare(OLD, NEW), &options);
        let lines: Vec<&str> = output.lines().skip(1).collect();
        assert_eq!(
            lines,
            vec!["  keep", "- old line", "- removed", "+ old lime", "+ new"]
        );
    }

    #[test]
    fn test_list_view() {
        let options = DisplayOptions {
            view_mode: ViewMode::List,
            ..DisplayOptions::default()
        };
        let output = render(&compare(OLD, NEW), &options);
        insta::assert_snapshot!(output, @r###"
        4 lines • 10 chars • 68% similar • major change
           1 ~ old li[-n-]{+m+}e
           2 - removed
           3 + new
        "###);
    }

    #[test]
    fn test_list_view_skips_blank_lines() {
        let options = DisplayOptions {
            view_mode: ViewMode::List,
            show_line_numbers: false,
            ..DisplayOptions::default()
        };
        let output = render(&compare("a\n", "a\n\nb\n"), &options);
        let lines: Vec<&str> = output.lines().skip(1).collect();
        assert_eq!(lines, vec!["+ b"]);
    }

    #[test]
    fn test_list_view_identical() {
        let options = DisplayOptions {
            view_mode: ViewMode::List,
            ..DisplayOptions::default()
        };
        let output = render(&compare("same\n", "same\n"), &options);
        assert_eq!(
            output,
            "0 lines • 0 chars • 100% similar • minor change\nNo differences found\n"
        );
    }

    #[test]
    fn test_blank_unchanged_line_has_no_trailing_space() {
        let output = render(&compare("a\n\nb\n", "a\n\nc\n"), &DisplayOptions::default());
        assert!(output.lines().all(|line| !line.ends_with(' ')));
        assert!(output.contains("\n   2\n"));
    }

    #[test]
    fn test_color_markup() {
        colored::control::set_override(true);
        let options = DisplayOptions {
            color: true,
            ..DisplayOptions::default()
        };
        let output = render(&compare(OLD, NEW), &options);
        assert!(output.contains("\u{1b}["));
        assert!(!output.contains("[-n-]"));
    }

    #[test]
    fn test_export_plain_git() {
        let result = compare("a\nb\n", "a\nc\n");
        assert_eq!(
            export_plain(&result, ViewMode::Git),
            "a\n\n- b\n\n+ c\n"
        );
    }

    #[test]
    fn test_export_plain_list() {
        let result = compare("a\nb\n\nc\n", "a\nx\n");
        assert_eq!(
            export_plain(&result, ViewMode::List),
            "- b\n- c\n+ x"
        );
    }

    #[test]
    fn test_statistics_block() {
        let stats = compute_statistics("The cat sat. The dog ran!\n\nA bird flew?");
        insta::assert_snapshot!(render_statistics("Old", &stats), @r###"
        Old statistics
          Reading time:         1 min
          Characters:           39
          Words:                9
          Lines:                3
          Paragraphs:           2
          Sentences:            3
          Words per sentence:   3.0
          Characters per word:  4.3
          Complexity:           Simple
          Unique words:         8
          Lexical diversity:    0.89
        "###);
    }
}
