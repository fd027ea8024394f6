//! Insignia CLI: generate SVG coverage badges
//!
//! ## Usage
//!
//! ```bash
//! insignia generate                         # coverage.json -> docs/images/coverage-badge.svg
//! insignia generate -i cov.json -o out.svg  # explicit paths
//! insignia classify 87.3                    # print the tier for a percentage
//! ```

use clap::Parser;
use insignia_cli::{handlers, Cli, CliConfig, CliResult, ColorChoice, Commands, Verbosity};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Build configuration from CLI args
    let config = build_config(&cli);

    match cli.command {
        Commands::Generate(args) => handlers::generate::execute_generate(&config, &args),
        Commands::Classify(args) => handlers::classify::execute_classify(&config, &args),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        match cli.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    };

    let color: ColorChoice = cli.color.into();

    CliConfig::new().with_verbosity(verbosity).with_color(color)
}
