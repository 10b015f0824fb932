//! Review-date and SLA arithmetic.
//!
//! Both operations take the reference date explicitly so callers (and
//! tests) control the clock; the engine never reads wall time here.

use chrono::{DateTime, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::model::LetterGrade;

/// Cadence of the assessment driving the review schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentType {
    /// Point-in-time assessments reviewed on a grade-driven cadence
    Periodic,
    /// Continuously monitored entities reviewed monthly regardless of grade
    Continuous,
}

/// SLA state of an open finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlaStatus {
    WithinSla,
    ApproachingBreach,
    Breached,
}

/// Days an entity may stay open before the SLA is breached.
pub const SLA_BREACH_DAYS: i64 = 30;
/// Days after which a finding counts as approaching breach.
pub const SLA_WARN_DAYS: i64 = 25;

/// Review interval in months for a grade and assessment type.
///
/// Grades D and F review quarterly and C semi-annually; everything
/// else reviews annually. A continuous assessment overrides the
/// grade-based interval and always reviews monthly.
#[must_use]
pub const fn review_interval_months(assessment: AssessmentType, grade: LetterGrade) -> u32 {
    let months = match grade {
        LetterGrade::D | LetterGrade::F => 3,
        LetterGrade::C => 6,
        LetterGrade::A | LetterGrade::B => 12,
    };
    match assessment {
        AssessmentType::Continuous => 1,
        AssessmentType::Periodic => months,
    }
}

/// Next review date from a reference date.
///
/// Month addition is calendar-aware: the day of month is preserved,
/// clamping to the last day of shorter months (Jan 31 + 3 months is
/// Apr 30).
#[must_use]
pub fn next_review_date(
    assessment: AssessmentType,
    grade: LetterGrade,
    from: NaiveDate,
) -> NaiveDate {
    let months = review_interval_months(assessment, grade);
    from.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// SLA status from elapsed whole days since discovery.
///
/// Day 30 is still within the warning band and day 31 is breached; the
/// cutoff day itself is exclusive on both boundaries. A discovery date
/// in the future counts as zero days open.
#[must_use]
pub fn sla_status(discovery: DateTime<Utc>, now: DateTime<Utc>) -> SlaStatus {
    sla_status_with(discovery, now, SLA_WARN_DAYS, SLA_BREACH_DAYS)
}

/// [`sla_status`] against a custom day policy.
///
/// Both cutoffs stay exclusive of the cutoff day itself. Callers with
/// a validated [`crate::config::SlaConfig`] use its
/// [`status`](crate::config::SlaConfig::status) method, which delegates
/// here.
#[must_use]
pub fn sla_status_with(
    discovery: DateTime<Utc>,
    now: DateTime<Utc>,
    warn_days: i64,
    breach_days: i64,
) -> SlaStatus {
    let days_open = (now - discovery).num_days().max(0);
    if days_open > breach_days {
        SlaStatus::Breached
    } else if days_open > warn_days {
        SlaStatus::ApproachingBreach
    } else {
        SlaStatus::WithinSla
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn failing_grade_reviews_quarterly() {
        let next = next_review_date(AssessmentType::Periodic, LetterGrade::F, date(2025, 1, 15));
        assert_eq!(next, date(2025, 4, 15));
        let next = next_review_date(AssessmentType::Periodic, LetterGrade::D, date(2025, 1, 15));
        assert_eq!(next, date(2025, 4, 15));
    }

    #[test]
    fn continuous_overrides_grade() {
        let next = next_review_date(AssessmentType::Continuous, LetterGrade::A, date(2025, 1, 15));
        assert_eq!(next, date(2025, 2, 15));
        let next = next_review_date(AssessmentType::Continuous, LetterGrade::F, date(2025, 1, 15));
        assert_eq!(next, date(2025, 2, 15));
    }

    #[test]
    fn grade_cadences() {
        assert_eq!(
            review_interval_months(AssessmentType::Periodic, LetterGrade::A),
            12
        );
        assert_eq!(
            review_interval_months(AssessmentType::Periodic, LetterGrade::B),
            12
        );
        assert_eq!(
            review_interval_months(AssessmentType::Periodic, LetterGrade::C),
            6
        );
        assert_eq!(
            review_interval_months(AssessmentType::Periodic, LetterGrade::D),
            3
        );
    }

    #[test]
    fn month_rollover_clamps_to_month_end() {
        let next = next_review_date(AssessmentType::Periodic, LetterGrade::F, date(2025, 1, 31));
        assert_eq!(next, date(2025, 4, 30));
        // Across a year boundary
        let next = next_review_date(AssessmentType::Periodic, LetterGrade::A, date(2025, 3, 10));
        assert_eq!(next, date(2026, 3, 10));
    }

    #[test]
    fn sla_boundaries_are_exclusive() {
        let discovery = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let at = |days: i64| discovery + chrono::Duration::days(days);

        assert_eq!(sla_status(discovery, at(0)), SlaStatus::WithinSla);
        assert_eq!(sla_status(discovery, at(25)), SlaStatus::WithinSla);
        assert_eq!(sla_status(discovery, at(26)), SlaStatus::ApproachingBreach);
        assert_eq!(sla_status(discovery, at(30)), SlaStatus::ApproachingBreach);
        assert_eq!(sla_status(discovery, at(31)), SlaStatus::Breached);
        assert_eq!(sla_status(discovery, at(400)), SlaStatus::Breached);
    }

    #[test]
    fn partial_days_floor() {
        let discovery = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        // 30 days and 23 hours later is still 30 whole days open
        let now = Utc.with_ymd_and_hms(2025, 2, 1, 11, 0, 0).unwrap();
        assert_eq!(sla_status(discovery, now), SlaStatus::ApproachingBreach);
    }

    #[test]
    fn future_discovery_is_within_sla() {
        let discovery = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap();
        assert_eq!(sla_status(discovery, now), SlaStatus::WithinSla);
    }
}
