//! Command-line surface.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "styledit", version, about = "Formatting-preserving edits on styled documents")]
pub struct Args {
    /// Optional configuration file path (overrides discovery of `styledit.toml`).
    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

/// Character range; both ends default to the document bounds.
#[derive(ClapArgs, Debug, Clone, Copy, Default)]
pub struct RangeArgs {
    #[arg(long)]
    pub start: Option<usize>,
    #[arg(long)]
    pub end: Option<usize>,
}

#[derive(ClapArgs, Debug, Clone, Copy, Default)]
pub struct CaseArgs {
    /// Compare case-insensitively.
    #[arg(long, short = 'i', conflicts_with = "match_case")]
    pub ignore_case: bool,
    /// Compare case-sensitively even if the config says otherwise.
    #[arg(long)]
    pub match_case: bool,
}

impl CaseArgs {
    pub fn case_sensitive(&self, default: bool) -> bool {
        if self.ignore_case {
            false
        } else if self.match_case {
            true
        } else {
            default
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print word and character counts.
    Stats {
        file: PathBuf,
        #[command(flatten)]
        range: RangeArgs,
    },
    /// Locate text; exits non-zero when absent.
    Find {
        file: PathBuf,
        needle: String,
        #[command(flatten)]
        case: CaseArgs,
        /// Report the last occurrence instead of the first.
        #[arg(long)]
        last: bool,
    },
    /// Replace text, carrying formatting over character by character.
    Replace {
        file: PathBuf,
        from: String,
        to: String,
        #[command(flatten)]
        case: CaseArgs,
        /// Replace every occurrence.
        #[arg(long)]
        all: bool,
        /// Write here instead of overwriting the input.
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// Uppercase a range.
    Upper {
        file: PathBuf,
        #[command(flatten)]
        range: RangeArgs,
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// Lowercase a range.
    Lower {
        file: PathBuf,
        #[command(flatten)]
        range: RangeArgs,
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// Toggle flags and/or apply a font over a range.
    Style {
        file: PathBuf,
        #[command(flatten)]
        range: RangeArgs,
        #[arg(long)]
        bold: bool,
        #[arg(long)]
        italic: bool,
        #[arg(long)]
        underline: bool,
        /// Font family; the configured default when given without a value.
        #[arg(long, num_args = 0..=1, default_missing_value = "")]
        font: Option<String>,
        /// Font size; the configured default when omitted.
        #[arg(long, requires = "font")]
        size: Option<u32>,
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// Cut a range and paste it at another position (in post-cut coordinates).
    Move {
        file: PathBuf,
        #[arg(long)]
        start: usize,
        #[arg(long)]
        end: usize,
        #[arg(long)]
        to: usize,
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// Convert UTF-8 text into an unformatted styled document.
    Import { input: PathBuf, output: PathBuf },
    /// Write the plain text of a styled document.
    Export { input: PathBuf, output: PathBuf },
    /// Print the attribute spans of a styled document.
    Dump { file: PathBuf },
}
