//! Threshold-ladder classification.
//!
//! Every continuous-to-discrete mapping in the engine is an ordered
//! table of `{threshold, label}` pairs evaluated top-down with an
//! inclusive lower bound. The first matching threshold wins, so the
//! tables must be sorted descending and non-overlapping; a unit test
//! enforces both for each ladder.
//!
//! The heat-map cell ladder intentionally uses a different numeric
//! scale (products of 1-5 buckets) than the single-score ladder; the
//! two are separate tables, not a shared one.

use crate::model::{LetterGrade, RiskLevel, Severity, StarGrade};

/// One ladder rung: scores at or above `threshold` get `label`.
#[derive(Debug, Clone, Copy)]
pub struct Rung<L> {
    pub threshold: f64,
    pub label: L,
}

const fn rung<L>(threshold: f64, label: L) -> Rung<L> {
    Rung { threshold, label }
}

/// Walk a ladder top-down, falling back to `floor` below every rung.
fn classify<L: Copy>(ladder: &[Rung<L>], score: f64, floor: L) -> L {
    for r in ladder {
        if score >= r.threshold {
            return r.label;
        }
    }
    floor
}

/// Risk level ladder over residual risk (0-10).
pub const RISK_LEVEL_LADDER: [Rung<RiskLevel>; 4] = [
    rung(9.0, RiskLevel::Critical),
    rung(7.0, RiskLevel::High),
    rung(4.0, RiskLevel::Medium),
    rung(2.0, RiskLevel::Low),
];

/// CVSS qualitative severity ladder over the base score (0-10).
///
/// Matches the v3.1 rating scale: a base score of exactly 0 is `None`,
/// anything positive is at least `Low`.
pub const SEVERITY_LADDER: [Rung<Severity>; 4] = [
    rung(9.0, Severity::Critical),
    rung(7.0, Severity::High),
    rung(4.0, Severity::Medium),
    rung(0.1, Severity::Low),
];

/// Letter grade ladder over a 0-100 score.
pub const LETTER_GRADE_LADDER: [Rung<LetterGrade>; 4] = [
    rung(90.0, LetterGrade::A),
    rung(80.0, LetterGrade::B),
    rung(70.0, LetterGrade::C),
    rung(60.0, LetterGrade::D),
];

/// Star grade ladder over a weighted 0-1000 rating.
pub const STAR_GRADE_LADDER: [Rung<StarGrade>; 10] = [
    rung(900.0, StarGrade::APlus),
    rung(850.0, StarGrade::A),
    rung(800.0, StarGrade::AMinus),
    rung(750.0, StarGrade::BPlus),
    rung(700.0, StarGrade::B),
    rung(650.0, StarGrade::BMinus),
    rung(600.0, StarGrade::CPlus),
    rung(550.0, StarGrade::C),
    rung(500.0, StarGrade::CMinus),
    rung(400.0, StarGrade::D),
];

/// Heat-map cell ladder over the product of likelihood and impact
/// buckets (1-25).
pub const HEAT_CELL_LADDER: [Rung<RiskLevel>; 3] = [
    rung(20.0, RiskLevel::Critical),
    rung(12.0, RiskLevel::High),
    rung(6.0, RiskLevel::Medium),
];

/// Classify residual risk (0-10) into a [`RiskLevel`].
#[must_use]
pub fn risk_level_of(residual_risk: f64) -> RiskLevel {
    classify(&RISK_LEVEL_LADDER, residual_risk, RiskLevel::Negligible)
}

/// Classify a CVSS base score (0-10) into a [`Severity`].
#[must_use]
pub fn severity_of(base_score: f64) -> Severity {
    classify(&SEVERITY_LADDER, base_score, Severity::None)
}

/// Classify a 0-100 score into a [`LetterGrade`].
#[must_use]
pub fn grade_of(score: f64) -> LetterGrade {
    classify(&LETTER_GRADE_LADDER, score, LetterGrade::F)
}

/// Classify a weighted 0-1000 rating into a [`StarGrade`].
#[must_use]
pub fn star_grade_of(rating: f64) -> StarGrade {
    classify(&STAR_GRADE_LADDER, rating, StarGrade::F)
}

/// Classify a heat-map cell by its `likelihood_bucket * impact_bucket`
/// product.
#[must_use]
pub fn heat_cell_level(bucket_product: u32) -> RiskLevel {
    classify(&HEAT_CELL_LADDER, f64::from(bucket_product), RiskLevel::Low)
}
