//! Core data model for the scoring engine.
//!
//! Inputs ([`FactorVector`], [`CvssMetrics`]) are immutable snapshots
//! supplied by external collaborators; outputs ([`RiskScore`],
//! [`VulnerabilityScore`]) are immutable once produced: a later
//! recomputation replaces a stored score via upsert, it is never
//! mutated in place.

mod factors;
mod score;

pub use factors::{
    AttackComplexity, AttackVector, CvssMetrics, FactorVector, ImpactMetric, PrivilegesRequired,
    Scope, UserInteraction,
};
pub use score::{EntityId, LetterGrade, RiskLevel, RiskScore, Severity, StarGrade, VulnerabilityScore};
