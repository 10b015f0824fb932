//! Standard-deviation based anomaly flagging.

use serde::{Deserialize, Serialize};

use super::stats::summarize;
use crate::error::{Result, RiskToolsError};

/// Default anomaly sensitivity (mid-scale: threshold equals one
/// standard deviation).
pub const DEFAULT_SENSITIVITY: u8 = 5;

/// Severity of a flagged anomaly based on how far past the threshold
/// the value sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnomalySeverity {
    Low,
    Medium,
    High,
}

/// One flagged outlier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    /// Index of the value in the input slice
    pub index: usize,
    /// The outlying value
    pub value: f64,
    /// Absolute deviation from the population mean
    pub deviation: f64,
    pub severity: AnomalySeverity,
}

/// Flag values deviating from the population mean by more than
/// `std_dev * (sensitivity / 5)`.
///
/// Sensitivity runs 1-10 (validated); at the default of 5 the threshold
/// is exactly one standard deviation, lower values flag more
/// aggressively. Deviations beyond 2x the threshold are High, beyond
/// 1.5x Medium, otherwise Low. An empty population yields no anomalies.
pub fn detect_anomalies(values: &[f64], sensitivity: u8) -> Result<Vec<Anomaly>> {
    if !(1..=10).contains(&sensitivity) {
        return Err(RiskToolsError::validation(
            "sensitivity",
            f64::from(sensitivity),
            "1..=10",
        ));
    }
    if values.is_empty() {
        return Ok(Vec::new());
    }

    let stats = summarize(values);
    let threshold = stats.std_dev * (f64::from(sensitivity) / 5.0);

    let anomalies = values
        .iter()
        .enumerate()
        .filter_map(|(index, &value)| {
            let deviation = (value - stats.mean).abs();
            if deviation > threshold {
                Some(Anomaly {
                    index,
                    value,
                    deviation,
                    severity: severity_for(deviation, threshold),
                })
            } else {
                None
            }
        })
        .collect();

    Ok(anomalies)
}

fn severity_for(deviation: f64, threshold: f64) -> AnomalySeverity {
    if deviation > 2.0 * threshold {
        AnomalySeverity::High
    } else if deviation > 1.5 * threshold {
        AnomalySeverity::Medium
    } else {
        AnomalySeverity::Low
    }
}
