//! Unified error types for risk-tools.
//!
//! Validation failures always name the offending field and the range it
//! was expected to fall in; the engine never silently clamps an invalid
//! input. Computed outputs clamp only where their range is documented
//! (e.g. the CVSS base score is capped at 10).

use thiserror::Error;

/// Main error type for risk-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RiskToolsError {
    /// An input factor or categorical value was outside its domain.
    #[error("Validation failed for '{field}': {value} (expected {expected})")]
    Validation {
        /// Name of the offending field
        field: &'static str,
        /// The value that was rejected
        value: f64,
        /// Human-readable description of the accepted range
        expected: &'static str,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Errors during report export
    #[error("Export failed: {context}")]
    Export {
        context: String,
        #[source]
        source: anyhow::Error,
    },

    /// A batch computation was cancelled cooperatively.
    #[error("Batch scoring cancelled after {completed} of {total} entities")]
    Cancelled { completed: usize, total: usize },
}

impl RiskToolsError {
    /// Create a validation error for a factor outside its range.
    pub fn validation(field: &'static str, value: f64, expected: &'static str) -> Self {
        Self::Validation {
            field,
            value,
            expected,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an export error with context
    pub fn export(context: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Export {
            context: context.into(),
            source,
        }
    }
}

/// Convenient Result type for risk-tools operations
pub type Result<T> = std::result::Result<T, RiskToolsError>;

/// Validate that a factor lies in `[0, 1]`, rejecting NaN.
///
/// Shared by the risk formula and the anomaly/config validation paths so
/// every caller reports range violations identically.
pub fn check_unit_interval(field: &'static str, value: f64) -> Result<f64> {
    if value.is_nan() || !(0.0..=1.0).contains(&value) {
        return Err(RiskToolsError::validation(field, value, "0.0..=1.0"));
    }
    Ok(value)
}
