use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "style-guard")]
#[command(author, version, about = "Lexical style checks for C and C++ sources")]
#[command(long_about = "Checks C-family source files against lexical style rules \
    (line length, indentation, naming, declaration order, headers, include guards).\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    1 - Style violations found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check files against the configured style rules
    Check(CheckArgs),

    /// List every rule code with its description
    Rules,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Source files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Ignore .style-guard.toml and use the recommended rules
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Also print informational records
    #[arg(long)]
    pub info: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
