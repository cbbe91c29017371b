use anyhow::{Context, Result};
use document_diff::{Algorithm, DiffConfig, EditOperation};
use std::env;
use std::fs;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        println!("Usage: compare_documents <old_file> <new_file> [options]");
        println!("Options:");
        println!("  --ignore-ws   Ignore whitespace changes");
        println!("  --patience    Use the patience algorithm (default is Myers)");
        return Ok(());
    }

    let old_file = &args[1];
    let new_file = &args[2];

    let old_content =
        fs::read_to_string(old_file).with_context(|| format!("failed to read {}", old_file))?;
    let new_content =
        fs::read_to_string(new_file).with_context(|| format!("failed to read {}", new_file))?;

    let mut config = DiffConfig::default();
    for arg in &args[3..] {
        match arg.as_str() {
            "--ignore-ws" => config = config.ignore_whitespace(true),
            "--patience" => config = config.algorithm(Algorithm::Patience),
            _ => {}
        }
    }

    let result = config.compare(&old_content, &new_content);
    let changes = result.changes();
    let summary = result.summary();

    println!("Comparing {} and {}", old_file, new_file);
    println!("Configuration:");
    println!("  Algorithm: {:?}", config.algorithm);
    println!("  Ignore whitespace: {}", config.ignore_whitespace);
    println!();

    println!("Statistics:");
    println!("  Lines changed: {}", changes.lines_changed);
    println!("  Added lines: {}", changes.added_lines);
    println!("  Removed lines: {}", changes.removed_lines);
    println!("  Characters changed: {}", changes.chars_changed);
    println!("  Similarity: {}%", changes.similarity);
    println!("  Change type: {}", changes.change_type);
    println!("  Added content: {}", summary.added_content);
    println!("  Removed content: {}", summary.removed_content);
    println!();

    println!("Line operations:");
    for op in result.line_edits() {
        let sign = match op {
            EditOperation::Removed(_) => "-",
            EditOperation::Added(_) => "+",
            EditOperation::Unchanged(_) => " ",
        };
        for line in op.lines() {
            println!("{}{}", sign, line);
        }
    }

    Ok(())
}
