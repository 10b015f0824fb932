//! Statistical aggregation over a scored population.
//!
//! All aggregations are read-only reduces over their input slice and
//! return defined zero values for an empty population. "No data" is a
//! valid steady state, not an error.

mod anomaly;
mod heatmap;
mod stats;

pub use anomaly::{detect_anomalies, Anomaly, AnomalySeverity, DEFAULT_SENSITIVITY};
pub use heatmap::{bucket_of, build_heat_map, HeatMap, HeatMapCell};
pub use stats::{
    percent_change, percentile, percentile_table, summarize, PercentileEntry, PercentileTable,
    SummaryStats, TrendDirection,
};
