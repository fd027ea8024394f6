//! Coverage report parsing and tier classification.

use crate::badge::BadgeColor;
use crate::result::{InsigniaError, InsigniaResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Tier threshold: at or above is a passing (green) badge
pub const SUCCESS_THRESHOLD: f64 = 75.0;
/// Tier threshold: at or above (but below [`SUCCESS_THRESHOLD`]) is a warning badge
pub const IMPORTANT_THRESHOLD: f64 = 50.0;

/// Severity tier derived from a coverage percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorTier {
    /// Coverage at or above 75%
    Success,
    /// Coverage in [50%, 75%)
    Important,
    /// Coverage below 50%
    Critical,
}

impl ColorTier {
    /// Classify a percentage into a tier
    ///
    /// Pure and total: boundaries are inclusive on the upper tier (exactly
    /// 75.0 is `Success`, exactly 50.0 is `Important`). Values outside
    /// [0, 100] get no special handling, and NaN fails both threshold
    /// guards and lands on `Critical`.
    #[must_use]
    pub fn classify(percentage: f64) -> Self {
        if percentage >= SUCCESS_THRESHOLD {
            Self::Success
        } else if percentage >= IMPORTANT_THRESHOLD {
            Self::Important
        } else {
            Self::Critical
        }
    }
}

impl fmt::Display for ColorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Success => "success",
            Self::Important => "important",
            Self::Critical => "critical",
        };
        write!(f, "{name}")
    }
}

impl From<ColorTier> for BadgeColor {
    fn from(tier: ColorTier) -> Self {
        match tier {
            ColorTier::Success => Self::Success,
            ColorTier::Important => Self::Important,
            ColorTier::Critical => Self::Critical,
        }
    }
}

/// Aggregate totals of a coverage run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageTotals {
    /// Covered percentage, 0-100
    pub percent_covered: f64,
}

/// A parsed coverage report
///
/// Matches the summary JSON emitted by coverage tools:
/// `{"totals": {"percent_covered": <number>}}`. Unknown fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Aggregate totals
    pub totals: CoverageTotals,
}

impl CoverageReport {
    /// Load a coverage report from a JSON file
    pub fn from_path(path: &Path) -> InsigniaResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            InsigniaError::ReportRead {
                path: path.to_path_buf(),
                source,
            }
        })?;

        serde_json::from_str(&content).map_err(|source| InsigniaError::ReportParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Covered percentage, validated to be a finite number
    ///
    /// Coverage tools emit finite values; anything else means a corrupt
    /// report, and the pipeline fails fast rather than silently rendering
    /// the lowest tier.
    pub fn percent_covered(&self) -> InsigniaResult<f64> {
        let value = self.totals.percent_covered;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(InsigniaError::InvalidPercentage { value })
        }
    }
}
