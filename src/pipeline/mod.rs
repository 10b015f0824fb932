//! Batch orchestration over entity populations.
//!
//! Each entity's computation is O(1), so the batch path parallelizes
//! with `rayon` and checks for cooperative cancellation once per
//! entity. Collaborator I/O (fetching factors, persisting results)
//! happens outside these functions and must complete before the next
//! stage runs, since every downstream step depends on the completed
//! scores.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

use crate::aggregate::{
    build_heat_map, detect_anomalies, percentile_table, summarize, Anomaly, HeatMap,
    PercentileTable, SummaryStats,
};
use crate::config::EngineConfig;
use crate::error::{Result, RiskToolsError};
use crate::model::{EntityId, FactorVector, RiskScore};
use crate::prioritize::{prioritize_risks, PriorityRank};
use crate::scoring::calculate_risk_score_at;

/// Percentile cut points reported for every population assessment.
pub const ASSESSMENT_PERCENTILES: [f64; 5] = [50.0, 75.0, 90.0, 95.0, 99.0];

/// Shared flag for cooperatively cancelling a batch run.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; in-flight entities finish, pending ones are
    /// skipped.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Everything the aggregation stage derives from one scored population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct PopulationAssessment {
    /// The scored population, in input order
    pub scores: Vec<RiskScore>,
    pub heat_map: HeatMap,
    /// Summary statistics over residual risk
    pub residual_stats: SummaryStats,
    /// Residual-risk percentiles at [`ASSESSMENT_PERCENTILES`]
    pub percentiles: PercentileTable,
    /// Residual-risk outliers at the configured sensitivity
    pub anomalies: Vec<Anomaly>,
    /// Residual-risk ranking, highest first
    pub ranking: Vec<PriorityRank>,
}

/// Score a population of factor vectors in parallel.
///
/// Deterministic: results come back in input order and the first
/// validation failure (by input position, not scheduling order) is the
/// one reported. Cancellation is checked once per entity; a cancelled
/// run reports how many entities had completed.
pub fn score_population(
    entities: &[(EntityId, FactorVector)],
    at: DateTime<Utc>,
    token: &CancellationToken,
) -> Result<Vec<RiskScore>> {
    let span = info_span!("score_population", total = entities.len());
    let _guard = span.enter();

    let results: Vec<Option<Result<RiskScore>>> = entities
        .par_iter()
        .map(|(id, factors)| {
            if token.is_cancelled() {
                return None;
            }
            Some(calculate_risk_score_at(id.clone(), factors, at))
        })
        .collect();

    if token.is_cancelled() {
        let completed = results.iter().filter(|r| r.is_some()).count();
        debug!(completed, total = entities.len(), "batch cancelled");
        return Err(RiskToolsError::Cancelled {
            completed,
            total: entities.len(),
        });
    }

    let mut scores = Vec::with_capacity(entities.len());
    for result in results {
        // Token was never cancelled, so every slot is Some
        match result {
            Some(Ok(score)) => scores.push(score),
            Some(Err(err)) => return Err(err),
            None => unreachable!("uncancelled batch produced no result"),
        }
    }

    debug!(scored = scores.len(), "batch scoring complete");
    Ok(scores)
}

/// Run the full aggregation stage over an already-scored population.
///
/// Consumes the scores and returns heat map, summary statistics,
/// percentiles, anomalies, and ranking in one pass. An empty
/// population produces the defined zero-value aggregates.
pub fn assess_population(
    scores: Vec<RiskScore>,
    config: &EngineConfig,
) -> Result<PopulationAssessment> {
    let span = info_span!("assess_population", population = scores.len());
    let _guard = span.enter();

    let residuals: Vec<f64> = scores.iter().map(|s| s.residual_risk).collect();

    let heat_map = build_heat_map(&scores);
    let residual_stats = summarize(&residuals);
    let percentiles = percentile_table(&residuals, &ASSESSMENT_PERCENTILES);
    let anomalies = detect_anomalies(&residuals, config.anomaly.sensitivity)?;
    let ranking = prioritize_risks(&scores);

    Ok(PopulationAssessment {
        scores,
        heat_map,
        residual_stats,
        percentiles,
        anomalies,
        ranking,
    })
}
