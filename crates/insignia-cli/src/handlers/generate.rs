//! Generate command handler

use crate::commands::GenerateArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use insignia::{BadgeGenerator, ColorTier, GeneratorOptions};

/// Execute the generate command
pub fn execute_generate(config: &CliConfig, args: &GenerateArgs) -> CliResult<()> {
    if config.verbosity.is_verbose() {
        println!("Reading coverage report from {}...", args.input.display());
    }

    let options = GeneratorOptions::new()
        .with_label(args.label.clone())
        .with_style(args.style.into())
        .with_precision(args.precision);

    let spec = BadgeGenerator::new()
        .with_options(options)
        .generate(&args.input, &args.output)?;

    if !config.verbosity.is_quiet() {
        println!("Badge written to: {}", args.output.display());
        if config.verbosity.is_verbose() {
            let tier = tier_name(&spec.color);
            println!("  {}: {} ({tier})", spec.label, spec.message);
        }
    }

    Ok(())
}

/// Tier name for a badge color, for verbose reporting
fn tier_name(color: &insignia::BadgeColor) -> String {
    match color {
        insignia::BadgeColor::Success => ColorTier::Success.to_string(),
        insignia::BadgeColor::Important => ColorTier::Important.to_string(),
        insignia::BadgeColor::Critical => ColorTier::Critical.to_string(),
        insignia::BadgeColor::Custom(css) => css.clone(),
    }
}
