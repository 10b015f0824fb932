//! **A deterministic risk and vulnerability scoring engine.**
//!
//! `risk-tools` implements the scoring core of a security-operations
//! product: numeric risk formulas, severity and grade classification,
//! prioritization, statistical aggregation, and SLA date arithmetic.
//! Every operation is a pure, referentially-transparent computation
//! over caller-supplied factor data: the engine performs no I/O,
//! fabricates no inputs, and hands every result back to the caller's
//! persistence and reporting collaborators.
//!
//! ## Key Features
//!
//! - **Risk scoring**: the weighted likelihood/impact/control model
//!   (`inherent = likelihood * impact * 10`, residual discounted by
//!   control effectiveness) with strict input validation.
//! - **CVSS base scores**: a CVSS v3.1-style base score from eight
//!   categorical attack metrics.
//! - **Ladder classification**: risk levels, letter grades, and star
//!   grades from ordered, non-overlapping threshold tables.
//! - **Prioritization**: severity-first ordering, residual-risk
//!   ranking, and a bounded 1-10 remediation priority.
//! - **Aggregation**: 5x5 likelihood/impact heat maps, nearest-rank
//!   percentiles, population statistics, and stddev-based anomaly
//!   flags, all with defined zero values for empty populations.
//! - **Scheduling**: grade-driven review dates and exclusive-boundary
//!   SLA status.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: factor inputs ([`FactorVector`], [`CvssMetrics`])
//!   and immutable computed scores ([`RiskScore`],
//!   [`VulnerabilityScore`]).
//! - **[`scoring`]**: the two scoring formulas.
//! - **[`classify`]**: threshold ladders shared by every
//!   continuous-to-discrete mapping.
//! - **[`prioritize`]** and **[`aggregate`]**: operations over scored
//!   populations.
//! - **[`schedule`]**: review-date and SLA arithmetic with an explicit
//!   clock.
//! - **[`pipeline`]**: parallel batch scoring with cooperative
//!   cancellation, plus the one-call population assessment.
//! - **[`store`]**: the upsert-by-id persistence port implemented by
//!   the caller.
//! - **[`reports`]**: CSV/JSON export serializers.
//!
//! ## Getting Started: Scoring an Entity
//!
//! ```
//! use risk_tools::{calculate_risk_score, FactorVector, RiskLevel};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let factors = FactorVector::new(0.75, 0.85, 0.60);
//!     let score = calculate_risk_score("vendor-42", &factors)?;
//!
//!     assert_eq!(score.level, RiskLevel::Low);
//!     println!(
//!         "{}: inherent {:.2}, residual {:.2} ({})",
//!         score.id, score.inherent_risk, score.residual_risk,
//!         score.level.label(),
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Assessing a Population
//!
//! ```
//! use chrono::Utc;
//! use risk_tools::pipeline::{assess_population, score_population, CancellationToken};
//! use risk_tools::{EngineConfig, FactorVector};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let entities = vec![
//!         ("db-server".to_string(), FactorVector::new(0.9, 0.95, 0.2)),
//!         ("wiki".to_string(), FactorVector::new(0.3, 0.2, 0.5)),
//!     ];
//!
//!     let scores = score_population(&entities, Utc::now(), &CancellationToken::new())?;
//!     let assessment = assess_population(scores, &EngineConfig::default())?;
//!
//!     assert_eq!(assessment.heat_map.total(), 2);
//!     println!("p95 residual: {:?}", assessment.percentiles.entries.last());
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Cast safety: usize/f64 casts are pervasive in the statistical
    // calculations; all values are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    // Doc completeness: # Errors sections are aspirational
    clippy::missing_errors_doc
)]

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod prioritize;
pub mod reports;
pub mod schedule;
pub mod scoring;
pub mod store;

// Re-export main types for convenience
pub use aggregate::{
    build_heat_map, detect_anomalies, percent_change, percentile, summarize, Anomaly,
    AnomalySeverity, HeatMap, HeatMapCell, PercentileTable, SummaryStats, TrendDirection,
};
pub use classify::{grade_of, risk_level_of, severity_of, star_grade_of};
pub use config::{ConfigError, EngineConfig, Validatable};
pub use error::{Result, RiskToolsError};
pub use model::{
    CvssMetrics, EntityId, FactorVector, LetterGrade, RiskLevel, RiskScore, Severity, StarGrade,
    VulnerabilityScore,
};
pub use pipeline::{CancellationToken, PopulationAssessment};
pub use prioritize::{
    prioritize_risks, prioritize_vulnerabilities, remediation_priority, PriorityRank,
};
pub use schedule::{next_review_date, sla_status, AssessmentType, SlaStatus};
pub use scoring::{calculate_cvss_base_score, calculate_risk_score, calculate_risk_score_at};
pub use store::{MemoryScoreStore, ScoreStore};
