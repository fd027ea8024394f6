//! Result and error types for Insignia.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for Insignia operations
pub type InsigniaResult<T> = Result<T, InsigniaError>;

/// Errors that can occur while generating a badge
#[derive(Debug, Error)]
pub enum InsigniaError {
    /// Coverage report could not be read
    #[error("Failed to read coverage report {path}: {source}")]
    ReportRead {
        /// Path of the report file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Coverage report is not valid JSON or lacks the expected fields
    #[error("Failed to parse coverage report {path}: {source}")]
    ReportParse {
        /// Path of the report file
        path: PathBuf,
        /// Underlying parse error
        source: serde_json::Error,
    },

    /// Covered percentage is not a finite number
    #[error("Coverage percentage is not a finite number: {value}")]
    InvalidPercentage {
        /// The rejected value
        value: f64,
    },

    /// Badge rendering failed
    #[error("Badge rendering failed: {message}")]
    Render {
        /// Error message
        message: String,
    },

    /// Badge file could not be written
    #[error("Failed to write badge {path}: {source}")]
    BadgeWrite {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl InsigniaError {
    /// Create a rendering error
    #[must_use]
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_report_read_error_display() {
        let err = InsigniaError::ReportRead {
            path: PathBuf::from("coverage.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("coverage.json"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_invalid_percentage_display() {
        let err = InsigniaError::InvalidPercentage { value: f64::NAN };
        assert!(err.to_string().contains("not a finite number"));
    }

    #[test]
    fn test_render_error_helper() {
        let err = InsigniaError::render("width overflow");
        assert!(err.to_string().contains("Badge rendering failed"));
        assert!(err.to_string().contains("width overflow"));
    }

    #[test]
    fn test_badge_write_error_display() {
        let err = InsigniaError::BadgeWrite {
            path: PathBuf::from("docs/images/coverage-badge.svg"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("docs/images/coverage-badge.svg"));
    }
}
