//! Weighted likelihood/impact/control risk formula.

use chrono::{DateTime, Utc};

use crate::classify::risk_level_of;
use crate::error::Result;
use crate::model::{EntityId, FactorVector, RiskScore};

/// Compute a [`RiskScore`] from a validated factor vector.
///
/// `inherent_risk = likelihood * impact * 10` and
/// `residual_risk = inherent_risk * (1 - control_effectiveness)`.
/// Neither value is clamped: the formula cannot exceed 10 for valid
/// inputs, and invalid inputs are rejected rather than clamped.
///
/// Timestamps the score with the current wall clock; use
/// [`calculate_risk_score_at`] when the caller controls the clock.
pub fn calculate_risk_score(id: impl Into<EntityId>, factors: &FactorVector) -> Result<RiskScore> {
    calculate_risk_score_at(id, factors, Utc::now())
}

/// [`calculate_risk_score`] with an explicit computation timestamp.
///
/// Everything except `calculated_at` is a pure function of `factors`,
/// so identical inputs always produce identical scores.
pub fn calculate_risk_score_at(
    id: impl Into<EntityId>,
    factors: &FactorVector,
    at: DateTime<Utc>,
) -> Result<RiskScore> {
    factors.validate()?;

    let inherent_risk = factors.likelihood * factors.impact * 10.0;
    let residual_risk = inherent_risk * (1.0 - factors.control_effectiveness);

    Ok(RiskScore {
        id: id.into(),
        inherent_risk,
        residual_risk,
        likelihood: factors.likelihood,
        impact: factors.impact,
        control_effectiveness: factors.control_effectiveness,
        level: risk_level_of(residual_risk),
        confidence: factors.confidence,
        calculated_at: at,
    })
}
