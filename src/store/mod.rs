//! Persistence port for computed scores.
//!
//! The engine never reaches for storage itself: callers hand computed
//! results to a [`ScoreStore`] implementation. Upserts are keyed by
//! entity id and must be idempotent: recomputing and re-storing the
//! same id overwrites rather than duplicates. No optimistic-concurrency
//! token is needed because the computation is deterministic and
//! side-effect-free.

use indexmap::IndexMap;
use tracing::debug;

use crate::error::Result;
use crate::model::{RiskScore, VulnerabilityScore};

/// Upsert-by-id persistence port.
///
/// Implementations back this with whatever storage the product uses;
/// [`MemoryScoreStore`] is the reference implementation and backs the
/// test suite.
pub trait ScoreStore {
    /// Insert or replace the risk score for its entity id.
    fn upsert_risk_score(&mut self, score: RiskScore) -> Result<()>;

    /// Insert or replace the vulnerability score for its entity id.
    fn upsert_vulnerability_score(&mut self, score: VulnerabilityScore) -> Result<()>;

    /// Fetch a stored risk score by entity id.
    fn risk_score(&self, id: &str) -> Option<&RiskScore>;

    /// Fetch a stored vulnerability score by entity id.
    fn vulnerability_score(&self, id: &str) -> Option<&VulnerabilityScore>;

    /// All stored risk scores, in first-insertion order.
    fn risk_scores(&self) -> Vec<&RiskScore>;

    /// All stored vulnerability scores, in first-insertion order.
    fn vulnerability_scores(&self) -> Vec<&VulnerabilityScore>;
}

/// In-memory [`ScoreStore`] keyed by entity id.
///
/// Insertion order is preserved so exports over the stored population
/// are reproducible.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    risks: IndexMap<String, RiskScore>,
    vulnerabilities: IndexMap<String, VulnerabilityScore>,
}

impl MemoryScoreStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored risk scores.
    #[must_use]
    pub fn risk_count(&self) -> usize {
        self.risks.len()
    }

    /// Number of stored vulnerability scores.
    #[must_use]
    pub fn vulnerability_count(&self) -> usize {
        self.vulnerabilities.len()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn upsert_risk_score(&mut self, score: RiskScore) -> Result<()> {
        debug!(id = %score.id, residual = score.residual_risk, "upsert risk score");
        self.risks.insert(score.id.clone(), score);
        Ok(())
    }

    fn upsert_vulnerability_score(&mut self, score: VulnerabilityScore) -> Result<()> {
        debug!(id = %score.id, base = score.base_score, "upsert vulnerability score");
        self.vulnerabilities.insert(score.id.clone(), score);
        Ok(())
    }

    fn risk_score(&self, id: &str) -> Option<&RiskScore> {
        self.risks.get(id)
    }

    fn vulnerability_score(&self, id: &str) -> Option<&VulnerabilityScore> {
        self.vulnerabilities.get(id)
    }

    fn risk_scores(&self) -> Vec<&RiskScore> {
        self.risks.values().collect()
    }

    fn vulnerability_scores(&self) -> Vec<&VulnerabilityScore> {
        self.vulnerabilities.values().collect()
    }
}
