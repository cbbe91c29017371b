use anyhow::Result;
use document_diff::{compare, DiffConfig, EditOperation, LineUnit};

fn main() -> Result<()> {
    // Sample texts with edited, added and removed lines
    let text1 = "This is the first paragraph with some words.\nHere is another line with minor changes.\nThis line is unchanged.\nabc";
    let text2 = "This is the first paragraph with different words.\nHere is another sentence with major changes.\nThis line is unchanged.\nxyz\nPlus a new last line.";

    let result = compare(text1, text2, &DiffConfig::default());

    println!("=== Paired display units ===");
    for (number, unit) in (1..).zip(result.units()) {
        match &unit {
            LineUnit::Modified { .. } => {
                let inline: String = unit
                    .inline_diff()
                    .unwrap_or_default()
                    .iter()
                    .map(|op| match op {
                        EditOperation::Removed(text) => format!("\x1b[31m{}\x1b[0m", text),
                        EditOperation::Added(text) => format!("\x1b[32m{}\x1b[0m", text),
                        EditOperation::Unchanged(text) => text.clone(),
                    })
                    .collect();
                println!("{:>3} ~ {}", number, inline);
            }
            LineUnit::Added(text) => println!("{:>3} \x1b[32m+ {}\x1b[0m", number, text),
            LineUnit::Removed(text) => println!("{:>3} \x1b[31m- {}\x1b[0m", number, text),
            LineUnit::Unchanged(text) => println!("{:>3}   {}", number, text),
        }
    }

    println!("\n=== Flat display units ===");
    for unit in result.flat_units() {
        println!("{:>9}: {}", unit.kind().to_string(), unit.content());
    }

    Ok(())
}
