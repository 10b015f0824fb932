//! Factor inputs consumed by the scoring formulas.

use serde::{Deserialize, Serialize};

use crate::error::{check_unit_interval, Result};

/// Likelihood/impact/control factor vector for one entity.
///
/// All factors are fractions in `[0, 1]`. `control_effectiveness` may
/// equal 1.0, which yields zero residual risk. `confidence` is the
/// collaborator-reported measurement confidence carried through onto
/// the computed score (1.0 when not supplied).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorVector {
    /// Probability that the threat materializes (0-1)
    pub likelihood: f64,
    /// Magnitude of the consequence if it does (0-1)
    pub impact: f64,
    /// Fraction of inherent risk neutralized by existing controls (0-1)
    pub control_effectiveness: f64,
    /// Measurement confidence reported by the data source (0-1)
    #[serde(default = "default_confidence")]
    pub confidence: f64,
}

const fn default_confidence() -> f64 {
    1.0
}

impl FactorVector {
    /// Create a factor vector with full confidence.
    #[must_use]
    pub const fn new(likelihood: f64, impact: f64, control_effectiveness: f64) -> Self {
        Self {
            likelihood,
            impact,
            control_effectiveness,
            confidence: 1.0,
        }
    }

    /// Set the measurement confidence.
    #[must_use]
    pub const fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    /// Validate every factor against its `[0, 1]` domain.
    ///
    /// The error names the first offending field; nothing is clamped.
    pub fn validate(&self) -> Result<()> {
        check_unit_interval("likelihood", self.likelihood)?;
        check_unit_interval("impact", self.impact)?;
        check_unit_interval("control_effectiveness", self.control_effectiveness)?;
        check_unit_interval("confidence", self.confidence)?;
        Ok(())
    }
}

// ============================================================================
// CVSS categorical metrics
// ============================================================================

/// How the vulnerable component is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackVector {
    Network,
    Adjacent,
    Local,
    Physical,
}

/// Conditions beyond the attacker's control that must exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackComplexity {
    Low,
    High,
}

/// Privilege level the attacker must hold before exploitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrivilegesRequired {
    None,
    Low,
    High,
}

/// Whether a user other than the attacker must participate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserInteraction {
    None,
    Required,
}

/// Whether the exploit crosses a security authority boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Unchanged,
    Changed,
}

/// Degree of loss for one of the C/I/A impact dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactMetric {
    None,
    Low,
    High,
}

/// The eight categorical metrics feeding the CVSS base score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CvssMetrics {
    pub attack_vector: AttackVector,
    pub attack_complexity: AttackComplexity,
    pub privileges_required: PrivilegesRequired,
    pub user_interaction: UserInteraction,
    pub scope: Scope,
    pub confidentiality: ImpactMetric,
    pub integrity: ImpactMetric,
    pub availability: ImpactMetric,
}

impl CvssMetrics {
    /// Short vector string in the CVSS v3.1 notation, e.g.
    /// `AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H`.
    #[must_use]
    pub fn vector_string(&self) -> String {
        format!(
            "AV:{}/AC:{}/PR:{}/UI:{}/S:{}/C:{}/I:{}/A:{}",
            match self.attack_vector {
                AttackVector::Network => "N",
                AttackVector::Adjacent => "A",
                AttackVector::Local => "L",
                AttackVector::Physical => "P",
            },
            match self.attack_complexity {
                AttackComplexity::Low => "L",
                AttackComplexity::High => "H",
            },
            match self.privileges_required {
                PrivilegesRequired::None => "N",
                PrivilegesRequired::Low => "L",
                PrivilegesRequired::High => "H",
            },
            match self.user_interaction {
                UserInteraction::None => "N",
                UserInteraction::Required => "R",
            },
            match self.scope {
                Scope::Unchanged => "U",
                Scope::Changed => "C",
            },
            impact_letter(self.confidentiality),
            impact_letter(self.integrity),
            impact_letter(self.availability),
        )
    }
}

const fn impact_letter(metric: ImpactMetric) -> &'static str {
    match metric {
        ImpactMetric::None => "N",
        ImpactMetric::Low => "L",
        ImpactMetric::High => "H",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_vector_validates_bounds() {
        assert!(FactorVector::new(0.5, 0.5, 0.5).validate().is_ok());
        assert!(FactorVector::new(0.0, 1.0, 1.0).validate().is_ok());
        assert!(FactorVector::new(1.1, 0.5, 0.5).validate().is_err());
        assert!(FactorVector::new(0.5, -0.1, 0.5).validate().is_err());
        assert!(FactorVector::new(0.5, 0.5, 2.0).validate().is_err());
    }

    #[test]
    fn confidence_defaults_to_full() {
        let fv = FactorVector::new(0.5, 0.5, 0.5);
        assert_eq!(fv.confidence, 1.0);
        let fv = fv.with_confidence(0.8);
        assert_eq!(fv.confidence, 0.8);
    }

    #[test]
    fn confidence_deserializes_when_absent() {
        let fv: FactorVector =
            serde_json::from_str(r#"{"likelihood":0.3,"impact":0.4,"control_effectiveness":0.5}"#)
                .unwrap();
        assert_eq!(fv.confidence, 1.0);
    }

    #[test]
    fn vector_string_format() {
        let metrics = CvssMetrics {
            attack_vector: AttackVector::Network,
            attack_complexity: AttackComplexity::Low,
            privileges_required: PrivilegesRequired::None,
            user_interaction: UserInteraction::None,
            scope: Scope::Unchanged,
            confidentiality: ImpactMetric::High,
            integrity: ImpactMetric::High,
            availability: ImpactMetric::High,
        };
        assert_eq!(metrics.vector_string(), "AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H");
    }

    #[test]
    fn metric_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&AttackVector::Network).unwrap(),
            r#""network""#
        );
        let av: AttackVector = serde_json::from_str(r#""adjacent""#).unwrap();
        assert_eq!(av, AttackVector::Adjacent);
    }
}
