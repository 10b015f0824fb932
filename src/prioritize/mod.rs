//! Deterministic ordering of scored entities.
//!
//! All three operations are pure functions over their input slice.
//! Ties are broken by the documented secondary key and, as a last
//! resort, by entity id, so the output never depends on input
//! iteration order.

use serde::{Deserialize, Serialize};

use crate::model::{EntityId, RiskScore, Severity, VulnerabilityScore};

/// Rank assigned to one entity by [`prioritize_risks`].
///
/// Recomputed wholesale per prioritization call; never independently
/// stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityRank {
    /// Caller-owned entity id
    pub entity_id: EntityId,
    /// `population size - index`; the highest risk gets the largest rank
    pub rank: usize,
    /// The sort key that produced this position, for audit trails
    pub tiebreak_key: String,
}

/// Order vulnerabilities severity-first, score-second.
///
/// Sorts by severity rank descending (critical=4 ... low=1), breaking
/// ties by base score descending and finally by id ascending.
#[must_use]
pub fn prioritize_vulnerabilities(items: &[VulnerabilityScore]) -> Vec<VulnerabilityScore> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        b.severity
            .rank()
            .cmp(&a.severity.rank())
            .then_with(|| b.base_score.total_cmp(&a.base_score))
            .then_with(|| a.id.cmp(&b.id))
    });
    sorted
}

/// Rank risks by residual risk descending.
///
/// The entity with the highest residual risk gets `rank == items.len()`,
/// the lowest gets `rank == 1`. Exact residual ties are broken by id
/// ascending.
#[must_use]
pub fn prioritize_risks(items: &[RiskScore]) -> Vec<PriorityRank> {
    let mut sorted: Vec<&RiskScore> = items.iter().collect();
    sorted.sort_by(|a, b| {
        b.residual_risk
            .total_cmp(&a.residual_risk)
            .then_with(|| a.id.cmp(&b.id))
    });

    let count = sorted.len();
    sorted
        .into_iter()
        .enumerate()
        .map(|(index, score)| PriorityRank {
            entity_id: score.id.clone(),
            rank: count - index,
            tiebreak_key: format!("residual:{:.4}/id:{}", score.residual_risk, score.id),
        })
        .collect()
}

/// Derive a bounded 1-10 remediation priority for a finding set.
///
/// Base priority is `ceil(risk_score / 10)` over a 0-100 composite
/// score. Any critical-severity item floors the priority at 9; any
/// item with a base score of 7.0 or more counts as exploitable and
/// adds 2, capped at 10. The result is clamped to `[1, 10]`.
#[must_use]
pub fn remediation_priority(items: &[VulnerabilityScore], risk_score: f64) -> u8 {
    let mut priority = (risk_score / 10.0).ceil() as i64;

    if items.iter().any(|v| v.severity == Severity::Critical) {
        priority = priority.max(9);
    }

    if items.iter().any(|v| v.base_score >= 7.0) {
        priority = (priority + 2).min(10);
    }

    priority.clamp(1, 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        AttackComplexity, AttackVector, CvssMetrics, ImpactMetric, PrivilegesRequired, Scope,
        UserInteraction,
    };
    use chrono::Utc;

    fn vuln(id: &str, severity: Severity, base_score: f64) -> VulnerabilityScore {
        VulnerabilityScore {
            id: id.to_string(),
            base_score,
            metrics: CvssMetrics {
                attack_vector: AttackVector::Network,
                attack_complexity: AttackComplexity::Low,
                privileges_required: PrivilegesRequired::None,
                user_interaction: UserInteraction::None,
                scope: Scope::Unchanged,
                confidentiality: ImpactMetric::High,
                integrity: ImpactMetric::High,
                availability: ImpactMetric::High,
            },
            severity,
        }
    }

    fn risk(id: &str, residual: f64) -> RiskScore {
        RiskScore {
            id: id.to_string(),
            inherent_risk: residual,
            residual_risk: residual,
            likelihood: 0.5,
            impact: 0.5,
            control_effectiveness: 0.0,
            level: crate::classify::risk_level_of(residual),
            confidence: 1.0,
            calculated_at: Utc::now(),
        }
    }

    #[test]
    fn severity_first_score_second() {
        let items = vec![
            vuln("a", Severity::Low, 5.0),
            vuln("b", Severity::Critical, 9.0),
            vuln("c", Severity::High, 8.0),
        ];
        let sorted = prioritize_vulnerabilities(&items);
        let ids: Vec<&str> = sorted.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn order_independent_of_input_order() {
        let forward = vec![
            vuln("a", Severity::High, 7.5),
            vuln("b", Severity::High, 7.5),
            vuln("c", Severity::Medium, 5.0),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_eq!(
            prioritize_vulnerabilities(&forward),
            prioritize_vulnerabilities(&reversed)
        );
    }

    #[test]
    fn risk_ranks_descend_from_population_size() {
        let items = vec![risk("low", 2.0), risk("high", 9.5), risk("mid", 5.0)];
        let ranks = prioritize_risks(&items);

        assert_eq!(ranks.len(), 3);
        assert_eq!(ranks[0].entity_id, "high");
        assert_eq!(ranks[0].rank, 3);
        assert_eq!(ranks[1].entity_id, "mid");
        assert_eq!(ranks[1].rank, 2);
        assert_eq!(ranks[2].entity_id, "low");
        assert_eq!(ranks[2].rank, 1);
    }

    #[test]
    fn risk_ties_break_by_id() {
        let items = vec![risk("zeta", 5.0), risk("alpha", 5.0)];
        let ranks = prioritize_risks(&items);
        assert_eq!(ranks[0].entity_id, "alpha");
        assert_eq!(ranks[1].entity_id, "zeta");
    }

    #[test]
    fn empty_population_yields_empty_ranking() {
        assert!(prioritize_risks(&[]).is_empty());
        assert!(prioritize_vulnerabilities(&[]).is_empty());
    }

    #[test]
    fn remediation_priority_base_only() {
        let items = vec![vuln("a", Severity::Medium, 5.0)];
        assert_eq!(remediation_priority(&items, 45.0), 5);
        assert_eq!(remediation_priority(&items, 41.0), 5);
        assert_eq!(remediation_priority(&items, 40.0), 4);
    }

    #[test]
    fn critical_floors_at_nine() {
        let items = vec![vuln("a", Severity::Critical, 6.5)];
        assert_eq!(remediation_priority(&items, 10.0), 9);
    }

    #[test]
    fn exploitable_adds_two_capped_at_ten() {
        let items = vec![vuln("a", Severity::High, 7.0)];
        assert_eq!(remediation_priority(&items, 50.0), 7);
        // Critical floor 9, then +2 capped at 10
        let items = vec![vuln("a", Severity::Critical, 9.8)];
        assert_eq!(remediation_priority(&items, 10.0), 10);
    }

    #[test]
    fn priority_clamped_to_lower_bound() {
        let items = vec![vuln("a", Severity::Low, 1.0)];
        assert_eq!(remediation_priority(&items, 0.0), 1);
    }
}
