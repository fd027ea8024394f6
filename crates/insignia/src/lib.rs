//! Insignia: coverage badge generation.
//!
//! Insignia (Spanish: "badge") turns a coverage summary into a two-segment
//! SVG badge of the form `coverage | NN%`, colored by a fixed threshold
//! table: 75% and up is green, 50% and up is orange, anything lower is red.
//!
//! # Pipeline
//!
//! ```text
//! coverage.json ──► CoverageReport ──► ColorTier ──► BadgeSpec ──► SVG
//!      (read)          (parse)        (classify)     (render)    (write)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use insignia::{BadgeGenerator, DEFAULT_BADGE_PATH, DEFAULT_REPORT_PATH};
//! use std::path::Path;
//!
//! # fn main() -> insignia::InsigniaResult<()> {
//! let spec = BadgeGenerator::new().generate(
//!     Path::new(DEFAULT_REPORT_PATH),
//!     Path::new(DEFAULT_BADGE_PATH),
//! )?;
//! println!("wrote {} badge", spec.message);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

mod badge;
mod coverage;
mod generator;
mod render;
mod result;

pub use badge::{BadgeColor, BadgeSpec, BadgeStyle};
pub use coverage::{
    ColorTier, CoverageReport, CoverageTotals, IMPORTANT_THRESHOLD, SUCCESS_THRESHOLD,
};
pub use generator::{BadgeGenerator, GeneratorOptions, DEFAULT_BADGE_PATH, DEFAULT_REPORT_PATH};
pub use render::{BadgeRenderer, SvgBadgeConfig, SvgBadgeRenderer};
pub use result::{InsigniaError, InsigniaResult};
