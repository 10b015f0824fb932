//! CSV export.
//!
//! Comma-separated renditions of scored populations and heat maps,
//! suitable for spreadsheet import and data analysis pipelines.

use crate::aggregate::HeatMap;
use crate::model::{RiskScore, VulnerabilityScore};

/// Escape a CSV field: double any embedded quotes.
///
/// Fields are always emitted quoted, so commas and newlines inside
/// values need no further treatment.
fn escape_csv(value: &str) -> String {
    value.replace('"', "\"\"")
}

/// Render a risk score population as CSV, one row per entity.
#[must_use]
pub fn risk_scores_csv(scores: &[RiskScore]) -> String {
    let mut content = String::new();
    content.push_str(
        "Id,Inherent Risk,Residual Risk,Likelihood,Impact,Control Effectiveness,Level,Confidence,Calculated At\n",
    );

    for score in scores {
        content.push_str(&format!(
            "\"{}\",{:.4},{:.4},{:.4},{:.4},{:.4},{},{:.2},{}\n",
            escape_csv(&score.id),
            score.inherent_risk,
            score.residual_risk,
            score.likelihood,
            score.impact,
            score.control_effectiveness,
            score.level.label(),
            score.confidence,
            score.calculated_at.to_rfc3339(),
        ));
    }

    content
}

/// Render vulnerability scores as CSV, one row per entity.
#[must_use]
pub fn vulnerability_scores_csv(scores: &[VulnerabilityScore]) -> String {
    let mut content = String::new();
    content.push_str("Id,Base Score,Severity,Vector\n");

    for score in scores {
        content.push_str(&format!(
            "\"{}\",{:.1},{:?},\"{}\"\n",
            escape_csv(&score.id),
            score.base_score,
            score.severity,
            score.metrics.vector_string(),
        ));
    }

    content
}

/// Render a heat map as CSV, one row per non-empty cell.
#[must_use]
pub fn heat_map_csv(map: &HeatMap) -> String {
    let mut content = String::new();
    content.push_str("Likelihood Bucket,Impact Bucket,Count,Level,Members\n");

    for cell in map.cells.iter().filter(|c| c.count > 0) {
        let members = cell.member_ids.join("; ");
        content.push_str(&format!(
            "{},{},{},{},\"{}\"\n",
            cell.likelihood_bucket,
            cell.impact_bucket,
            cell.count,
            cell.level.label(),
            escape_csv(&members),
        ));
    }

    content
}
