//! Summary statistics, percentiles, and trend arithmetic.

use serde::{Deserialize, Serialize};

/// Population summary for a slice of scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Population standard deviation (sum of squared deviations over n)
    pub std_dev: f64,
}

impl SummaryStats {
    /// Zero-value stats for an empty population.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            min: 0.0,
            max: 0.0,
            std_dev: 0.0,
        }
    }
}

/// Compute population mean, min, max, and standard deviation.
///
/// The standard deviation divides by `n`, not `n - 1`; the input is
/// treated as the whole population, not a sample. Empty input returns
/// [`SummaryStats::empty`].
#[must_use]
pub fn summarize(values: &[f64]) -> SummaryStats {
    if values.is_empty() {
        return SummaryStats::empty();
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum_sq = 0.0;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
        let d = v - mean;
        sum_sq += d * d;
    }

    SummaryStats {
        count: values.len(),
        mean,
        min,
        max,
        std_dev: (sum_sq / n).sqrt(),
    }
}

/// One row of a percentile table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileEntry {
    pub percentile: f64,
    pub value: f64,
}

/// Percentile values at the requested cut points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct PercentileTable {
    pub entries: Vec<PercentileEntry>,
}

/// Nearest-rank percentile: sort ascending, then take
/// `values[clamp(ceil(p/100 * n) - 1, 0, n - 1)]`.
///
/// Returns 0 for an empty population.
#[must_use]
pub fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let index = ((p / 100.0 * n as f64).ceil() as i64 - 1).clamp(0, n as i64 - 1) as usize;
    sorted[index]
}

/// Compute a percentile table for the given cut points.
///
/// Sorts once and indexes per cut point, so requesting the usual
/// p50/p75/p90/p95/p99 spread costs a single sort.
#[must_use]
pub fn percentile_table(values: &[f64], cut_points: &[f64]) -> PercentileTable {
    if values.is_empty() {
        return PercentileTable {
            entries: cut_points
                .iter()
                .map(|&p| PercentileEntry {
                    percentile: p,
                    value: 0.0,
                })
                .collect(),
        };
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();

    let entries = cut_points
        .iter()
        .map(|&p| {
            let index = ((p / 100.0 * n as f64).ceil() as i64 - 1).clamp(0, n as i64 - 1) as usize;
            PercentileEntry {
                percentile: p,
                value: sorted[index],
            }
        })
        .collect();

    PercentileTable { entries }
}

/// Percentage change of `current` relative to `baseline`.
///
/// A zero baseline returns 0 rather than infinity or NaN; comparisons
/// against an empty prior period are treated as "no change" so trend
/// consumers never see non-finite values.
#[must_use]
pub fn percent_change(current: f64, baseline: f64) -> f64 {
    if baseline == 0.0 {
        return 0.0;
    }
    (current - baseline) / baseline * 100.0
}

/// Direction of movement between two aggregate values.
///
/// For risk metrics a decrease is an improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Stable,
    Worsening,
}

impl TrendDirection {
    /// Classify a percent change, treating anything within the given
    /// tolerance (in percent) as stable.
    #[must_use]
    pub fn from_percent_change(change: f64, tolerance: f64) -> Self {
        if change > tolerance {
            Self::Worsening
        } else if change < -tolerance {
            Self::Improving
        } else {
            Self::Stable
        }
    }
}
