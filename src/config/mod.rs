//! Engine configuration.
//!
//! Typed, validated configuration for the tunable parts of the engine.
//! Defaults reproduce the documented semantics exactly. The ladder
//! thresholds and scoring weights themselves are not configurable;
//! they are the contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::aggregate::{percent_change, TrendDirection, DEFAULT_SENSITIVITY};
use crate::schedule::{sla_status_with, SlaStatus, SLA_BREACH_DAYS, SLA_WARN_DAYS};

/// Configuration validation error.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: &'static str, message: String },
}

/// Types that can validate their own configuration values.
pub trait Validatable {
    /// Check every field against its documented range.
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Anomaly detection tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnomalyConfig {
    /// Sensitivity 1-10; the flagging threshold is
    /// `std_dev * (sensitivity / 5)`
    pub sensitivity: u8,
}

impl Default for AnomalyConfig {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }
}

impl Validatable for AnomalyConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=10).contains(&self.sensitivity) {
            return Err(ConfigError::InvalidValue {
                field: "anomaly.sensitivity",
                message: format!("{} is outside 1..=10", self.sensitivity),
            });
        }
        Ok(())
    }
}

/// SLA policy in whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlaConfig {
    /// Days open after which a finding approaches breach (exclusive)
    pub warn_days: i64,
    /// Days open after which the SLA is breached (exclusive)
    pub breach_days: i64,
}

impl Default for SlaConfig {
    fn default() -> Self {
        Self {
            warn_days: SLA_WARN_DAYS,
            breach_days: SLA_BREACH_DAYS,
        }
    }
}

impl SlaConfig {
    /// SLA status of a finding under this day policy.
    #[must_use]
    pub fn status(&self, discovery: DateTime<Utc>, now: DateTime<Utc>) -> SlaStatus {
        sla_status_with(discovery, now, self.warn_days, self.breach_days)
    }
}

impl Validatable for SlaConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.warn_days < 0 || self.breach_days < 0 {
            return Err(ConfigError::InvalidValue {
                field: "sla",
                message: "day thresholds must be non-negative".to_string(),
            });
        }
        if self.warn_days >= self.breach_days {
            return Err(ConfigError::InvalidValue {
                field: "sla.warn_days",
                message: format!(
                    "warn_days ({}) must be below breach_days ({})",
                    self.warn_days, self.breach_days
                ),
            });
        }
        Ok(())
    }
}

/// Trend classification tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Percent-change magnitude treated as stable
    pub tolerance_pct: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self { tolerance_pct: 1.0 }
    }
}

impl TrendConfig {
    /// Classify movement between two aggregate values under this
    /// tolerance.
    #[must_use]
    pub fn direction(&self, current: f64, baseline: f64) -> TrendDirection {
        TrendDirection::from_percent_change(percent_change(current, baseline), self.tolerance_pct)
    }
}

impl Validatable for TrendConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance_pct.is_finite() || self.tolerance_pct < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "trend.tolerance_pct",
                message: format!("{} must be finite and non-negative", self.tolerance_pct),
            });
        }
        Ok(())
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub anomaly: AnomalyConfig,
    pub sla: SlaConfig,
    pub trend: TrendConfig,
}

impl Validatable for EngineConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.anomaly.validate()?;
        self.sla.validate()?;
        self.trend.validate()?;
        Ok(())
    }
}
