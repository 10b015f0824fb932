//! Computed score types and their discrete labels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::factors::CvssMetrics;

/// Opaque entity identifier owned by the caller.
///
/// The engine never interprets ids beyond equality and ordering; they
/// key the caller's upsert and break prioritization ties
/// deterministically.
pub type EntityId = String;

/// Discrete risk level derived from residual risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Negligible,
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Uppercase label as reported to collaborators.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
            Self::Negligible => "NEGLIGIBLE",
        }
    }
}

/// CVSS-style qualitative severity for a vulnerability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Numeric rank used for severity-first prioritization.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Critical => 4,
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
            Self::None => 0,
        }
    }
}

/// Letter grade over a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    #[must_use]
    pub const fn letter(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

/// Fine-grained star grade over a weighted 0-1000 rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarGrade {
    APlus,
    A,
    AMinus,
    BPlus,
    B,
    BMinus,
    CPlus,
    C,
    CMinus,
    D,
    F,
}

impl StarGrade {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

/// A computed likelihood/impact/control risk score.
///
/// Invariant: `residual_risk <= inherent_risk`, because control
/// effectiveness is a fraction of inherent risk. Immutable once
/// produced; a recomputation replaces the stored score via upsert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct RiskScore {
    /// Caller-owned entity id, also the upsert key
    pub id: EntityId,
    /// Risk before controls, `likelihood * impact * 10` (0-10)
    pub inherent_risk: f64,
    /// Risk remaining after controls (0-10)
    pub residual_risk: f64,
    /// Input likelihood factor
    pub likelihood: f64,
    /// Input impact factor
    pub impact: f64,
    /// Input control effectiveness factor
    pub control_effectiveness: f64,
    /// Level classified from residual risk
    pub level: RiskLevel,
    /// Measurement confidence carried from the factor vector
    pub confidence: f64,
    /// When the score was computed
    pub calculated_at: DateTime<Utc>,
}

/// A computed CVSS-style vulnerability score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct VulnerabilityScore {
    /// Caller-owned entity id, also the upsert key
    pub id: EntityId,
    /// CVSS base score, rounded to one decimal (0-10)
    pub base_score: f64,
    /// The categorical metrics the score was derived from
    pub metrics: CvssMetrics,
    /// Qualitative severity classified from the base score
    pub severity: Severity,
}
