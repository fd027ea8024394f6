//! Classify command handler

use crate::commands::ClassifyArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use insignia::ColorTier;

/// Execute the classify command
pub fn execute_classify(config: &CliConfig, args: &ClassifyArgs) -> CliResult<()> {
    if !args.percentage.is_finite() {
        return Err(CliError::invalid_argument(format!(
            "percentage must be a finite number, got {}",
            args.percentage
        )));
    }

    let tier = ColorTier::classify(args.percentage);
    if config.verbosity.is_verbose() {
        println!("{}% -> {tier}", args.percentage);
    } else {
        println!("{tier}");
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_classify_ok() {
        let args = ClassifyArgs { percentage: 87.3 };
        assert!(execute_classify(&CliConfig::default(), &args).is_ok());
    }

    #[test]
    fn test_execute_classify_rejects_nan() {
        let args = ClassifyArgs {
            percentage: f64::NAN,
        };
        let result = execute_classify(&CliConfig::default(), &args);
        assert!(matches!(result, Err(CliError::InvalidArgument { .. })));
    }
}
