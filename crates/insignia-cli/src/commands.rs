//! CLI command definitions using clap

use crate::config::ColorChoice;
use clap::{Parser, Subcommand, ValueEnum};
use insignia::{BadgeStyle, DEFAULT_BADGE_PATH, DEFAULT_REPORT_PATH};
use std::path::PathBuf;

/// Insignia: generate SVG coverage badges from coverage reports
#[derive(Parser, Debug)]
#[command(name = "insignia")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a badge from a coverage report
    Generate(GenerateArgs),

    /// Print the severity tier for a percentage
    Classify(ClassifyArgs),
}

/// Arguments for the generate command
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Coverage report JSON file
    #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
    pub input: PathBuf,

    /// Badge output file (parent directory must exist)
    #[arg(short, long, default_value = DEFAULT_BADGE_PATH)]
    pub output: PathBuf,

    /// Badge label text
    #[arg(short, long, default_value = "coverage")]
    pub label: String,

    /// Badge style
    #[arg(long, default_value = "flat")]
    pub style: StyleArg,

    /// Decimal places in the percentage message
    #[arg(long, default_value = "0")]
    pub precision: usize,
}

/// Arguments for the classify command
#[derive(Parser, Debug)]
pub struct ClassifyArgs {
    /// Coverage percentage (0-100)
    pub percentage: f64,
}

/// Badge style argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum StyleArg {
    /// Rounded corners with a subtle gradient
    #[default]
    Flat,
    /// Square corners, solid fills
    FlatSquare,
}

impl From<StyleArg> for BadgeStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Flat => Self::Flat,
            StyleArg::FlatSquare => Self::FlatSquare,
        }
    }
}

/// Color output argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Always use colors
    Always,
    /// Detect terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(color: ColorArg) -> Self {
        match color {
            ColorArg::Always => Self::Always,
            ColorArg::Auto => Self::Auto,
            ColorArg::Never => Self::Never,
        }
    }
}
