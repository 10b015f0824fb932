//! CVSS v3.1-style base score.
//!
//! The origin material contained two divergent renditions of this
//! formula (different rounding, one with hard-coded metrics). This
//! module implements the single canonical variant: official v3.1
//! metric weights, `exploitability = 8.22 * AV * AC * PR * UI`, a
//! plain complement-product impact subscore, a 1.08 scope multiplier,
//! and half-up rounding to one decimal. Note the impact subscore is
//! *not* scaled by the official 6.42 ISS multiplier, so absolute
//! values sit below full CVSS v3.1 scores for the same vector.

use crate::classify::severity_of;
use crate::model::{
    AttackComplexity, AttackVector, CvssMetrics, EntityId, ImpactMetric, PrivilegesRequired, Scope,
    UserInteraction, VulnerabilityScore,
};

// Metric weight tables (CVSS v3.1 specification values).

const fn attack_vector_weight(av: AttackVector) -> f64 {
    match av {
        AttackVector::Network => 0.85,
        AttackVector::Adjacent => 0.62,
        AttackVector::Local => 0.55,
        AttackVector::Physical => 0.20,
    }
}

const fn attack_complexity_weight(ac: AttackComplexity) -> f64 {
    match ac {
        AttackComplexity::Low => 0.77,
        AttackComplexity::High => 0.44,
    }
}

const fn privileges_required_weight(pr: PrivilegesRequired) -> f64 {
    match pr {
        PrivilegesRequired::None => 0.85,
        PrivilegesRequired::Low => 0.62,
        PrivilegesRequired::High => 0.27,
    }
}

const fn user_interaction_weight(ui: UserInteraction) -> f64 {
    match ui {
        UserInteraction::None => 0.85,
        UserInteraction::Required => 0.62,
    }
}

const fn impact_weight(metric: ImpactMetric) -> f64 {
    match metric {
        ImpactMetric::None => 0.0,
        ImpactMetric::Low => 0.22,
        ImpactMetric::High => 0.56,
    }
}

/// Exploitability sub-formula: `8.22 * AV * AC * PR * UI`.
#[must_use]
pub fn exploitability(metrics: &CvssMetrics) -> f64 {
    8.22 * attack_vector_weight(metrics.attack_vector)
        * attack_complexity_weight(metrics.attack_complexity)
        * privileges_required_weight(metrics.privileges_required)
        * user_interaction_weight(metrics.user_interaction)
}

/// Impact sub-formula: `1 - (1-C)(1-I)(1-A)`.
#[must_use]
pub fn impact_subscore(metrics: &CvssMetrics) -> f64 {
    1.0 - (1.0 - impact_weight(metrics.confidentiality))
        * (1.0 - impact_weight(metrics.integrity))
        * (1.0 - impact_weight(metrics.availability))
}

/// Compute a [`VulnerabilityScore`] from the eight categorical metrics.
///
/// A non-positive impact subscore short-circuits to 0 regardless of
/// exploitability. The base score is capped at 10 (the only clamp in
/// this module; it bounds a *computed* output, never an input) and
/// rounded to one decimal before severity classification.
pub fn calculate_cvss_base_score(
    id: impl Into<EntityId>,
    metrics: &CvssMetrics,
) -> VulnerabilityScore {
    let impact = impact_subscore(metrics);

    let base_score = if impact <= 0.0 {
        0.0
    } else {
        let raw = exploitability(metrics) + impact;
        let scoped = match metrics.scope {
            Scope::Unchanged => raw,
            Scope::Changed => 1.08 * raw,
        };
        round_one_decimal(scoped.min(10.0))
    };

    VulnerabilityScore {
        id: id.into(),
        base_score,
        metrics: *metrics,
        severity: severity_of(base_score),
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
