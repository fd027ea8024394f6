//! Badge generation pipeline: read report, classify, render, write.

use crate::badge::{BadgeSpec, BadgeStyle};
use crate::coverage::{ColorTier, CoverageReport};
use crate::render::{BadgeRenderer, SvgBadgeRenderer};
use crate::result::{InsigniaError, InsigniaResult};
use std::path::Path;
use tracing::debug;

/// Default coverage report path, relative to the invocation directory
pub const DEFAULT_REPORT_PATH: &str = "coverage.json";

/// Default badge output path
pub const DEFAULT_BADGE_PATH: &str = "docs/images/coverage-badge.svg";

/// Options controlling badge content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Left-hand segment text
    pub label: String,
    /// Rendering style
    pub style: BadgeStyle,
    /// Decimal places in the percentage message
    pub precision: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            label: "coverage".to_string(),
            style: BadgeStyle::Flat,
            precision: 0,
        }
    }
}

impl GeneratorOptions {
    /// Create default options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the badge label
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the rendering style
    #[must_use]
    pub const fn with_style(mut self, style: BadgeStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the number of decimal places in the message
    #[must_use]
    pub const fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

/// Orchestrates the read, classify, render, write pipeline
///
/// Generic over the renderer so tests can observe the spec a run produces
/// without parsing SVG.
#[derive(Debug, Clone, Default)]
pub struct BadgeGenerator<R = SvgBadgeRenderer> {
    renderer: R,
    options: GeneratorOptions,
}

impl BadgeGenerator<SvgBadgeRenderer> {
    /// Create a generator with the default SVG renderer and options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: BadgeRenderer> BadgeGenerator<R> {
    /// Create a generator over a custom renderer
    pub fn with_renderer(renderer: R) -> Self {
        Self {
            renderer,
            options: GeneratorOptions::default(),
        }
    }

    /// Set the generation options
    #[must_use]
    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    /// Get the current options
    #[must_use]
    pub const fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Build the badge spec for a coverage percentage
    ///
    /// The pure middle of the pipeline: formats the message and picks the
    /// tier color, touching no files.
    #[must_use]
    pub fn build_spec(&self, percentage: f64) -> BadgeSpec {
        let tier = ColorTier::classify(percentage);
        let message = format!("{percentage:.prec$}%", prec = self.options.precision);
        BadgeSpec::new(self.options.label.clone(), message)
            .with_color(tier.into())
            .with_style(self.options.style)
    }

    /// Generate a badge from a coverage report file
    ///
    /// Reads `report_path`, classifies the covered percentage, renders the
    /// badge, and writes it to `output_path`, replacing any prior content.
    /// Every failure propagates; a failure before the write step leaves any
    /// existing output file untouched. The write itself is not atomic.
    ///
    /// Returns the spec that was rendered so callers can report on it.
    pub fn generate(&self, report_path: &Path, output_path: &Path) -> InsigniaResult<BadgeSpec> {
        let report = CoverageReport::from_path(report_path)?;
        let percentage = report.percent_covered()?;
        debug!(
            report = %report_path.display(),
            percentage,
            "loaded coverage report"
        );

        let spec = self.build_spec(percentage);
        let bytes = self.renderer.render(&spec)?;
        debug!(bytes = bytes.len(), "rendered badge");

        std::fs::write(output_path, &bytes).map_err(|source| InsigniaError::BadgeWrite {
            path: output_path.to_path_buf(),
            source,
        })?;
        debug!(badge = %output_path.display(), "wrote badge");

        Ok(spec)
    }
}
