//! Command-line arguments for diffl.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::render::{DisplayOptions, ViewMode};

/// diffl - compare two text documents line by line
#[derive(Debug, Parser)]
#[command(name = "diffl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Original document (`-` reads standard input)
    #[arg(value_name = "OLD")]
    pub old: PathBuf,

    /// Modified document (`-` reads standard input)
    #[arg(value_name = "NEW")]
    pub new: PathBuf,

    /// Treat lines that differ only in whitespace as unchanged
    #[arg(short = 'w', long, env = "DIFFL_IGNORE_WHITESPACE")]
    pub ignore_whitespace: bool,

    /// How the differences are laid out
    #[arg(long, value_enum, default_value_t = ViewMode::Git, env = "DIFFL_VIEW")]
    pub view: ViewMode,

    /// Hide the line-number gutter
    #[arg(long)]
    pub no_line_numbers: bool,

    /// Show edited lines as separate removals and additions
    #[arg(long)]
    pub no_inline: bool,

    /// When to colour the output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Print readability statistics for both documents
    #[arg(long)]
    pub stats: bool,

    /// Print a plain, copyable listing of the changes
    #[arg(long)]
    pub plain: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log comparison details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl ColorChoice {
    /// Whether output is coloured, given what `auto` detected for the
    /// terminal
    pub fn enabled(self, terminal_supports_color: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => terminal_supports_color,
        }
    }
}

impl Cli {
    pub fn display_options(&self, color: bool) -> DisplayOptions {
        DisplayOptions {
            view_mode: self.view,
            show_line_numbers: !self.no_line_numbers,
            inline_diffs: !self.no_inline,
            color,
        }
    }
}
