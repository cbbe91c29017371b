//! diffl - compare two text documents from the command line.

mod cli;
mod document;
mod render;

use anyhow::{bail, Context, Result};
use clap::Parser;
use document_diff::{ComparisonResult, DiffConfig, LineUnit};
use document_stats::{compute_statistics, DocumentStatistics};
use log::info;
use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use crate::document::{is_stdin, load_document};

/// JSON output of one comparison
#[derive(Serialize)]
struct Report<'a> {
    config: &'a DiffConfig,
    comparison: &'a ComparisonResult,
    units: Vec<LineUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    statistics: Option<DocumentPair>,
}

#[derive(Serialize)]
struct DocumentPair {
    old: DocumentStatistics,
    new: DocumentStatistics,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if is_stdin(&cli.old) && is_stdin(&cli.new) {
        bail!("Only one of the documents can be read from standard input");
    }

    let old_text = load_document(&cli.old)?;
    let new_text = load_document(&cli.new)?;

    let config = DiffConfig::default().ignore_whitespace(cli.ignore_whitespace);
    let result = config.compare(&old_text, &new_text);
    info!(
        "{} vs {}: {}",
        cli.old.display(),
        cli.new.display(),
        render::header(&result)
    );

    let statistics = cli.stats.then(|| DocumentPair {
        old: compute_statistics(&old_text),
        new: compute_statistics(&new_text),
    });

    match cli.format {
        OutputFormat::Json => {
            let options = cli.display_options(false);
            let report = Report {
                config: &config,
                comparison: &result,
                units: if options.inline_diffs {
                    result.units()
                } else {
                    result.flat_units()
                },
                statistics,
            };
            let json = serde_json::to_string_pretty(&report)
                .context("Failed to serialize comparison report")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            let color = cli
                .color
                .enabled(colored::control::SHOULD_COLORIZE.should_colorize());
            colored::control::set_override(color);
            let options = cli.display_options(color);
            if cli.plain {
                println!("{}", render::export_plain(&result, options.view_mode));
            } else {
                print!("{}", render::render(&result, &options));
            }

            if let Some(pair) = statistics {
                println!();
                print!("{}", render::render_statistics("Old", &pair.old));
                println!();
                print!("{}", render::render_statistics("New", &pair.new));
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
