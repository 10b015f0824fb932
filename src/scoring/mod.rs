//! Score calculation.
//!
//! Pure, referentially-transparent formulas: the weighted
//! likelihood/impact/control model in [`risk`] and the CVSS v3.1 base
//! score approximation in [`cvss`]. Neither performs any I/O; callers
//! hand the results to a [`crate::store::ScoreStore`] if they want them
//! persisted.

mod cvss;
mod risk;

pub use cvss::{calculate_cvss_base_score, exploitability, impact_subscore};
pub use risk::{calculate_risk_score, calculate_risk_score_at};
