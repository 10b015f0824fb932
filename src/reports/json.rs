//! JSON export.

use serde::Serialize;

use crate::error::{Result, RiskToolsError};
use crate::pipeline::PopulationAssessment;

/// Serialize any computed result to compact JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value)
        .map_err(|e| RiskToolsError::export("JSON serialization", e.into()))
}

/// Serialize any computed result to pretty-printed JSON.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| RiskToolsError::export("JSON serialization", e.into()))
}

/// Full population assessment as pretty JSON, the shape dashboards
/// consume.
pub fn assessment_json(assessment: &PopulationAssessment) -> Result<String> {
    to_json_pretty(assessment)
}
