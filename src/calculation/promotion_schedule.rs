//! Promotion scheduling.
//!
//! This module computes the first date on which a staff member may be
//! promoted again. The grade's base duration is shortened by credits
//! (rewards and competition participations) and never drops below the
//! policy floor.
//!
//! Schedules are recomputed on every call and never cached, so credits
//! added after the fact are always reflected.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{GradeTable, ProgressionConfig, ProgressionPolicy};
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, Credit, CreditKind, Grade};

/// The full derivation of a promotion date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionSchedule {
    /// The date the wait is counted from.
    pub from_date: NaiveDate,
    /// The grade's base wait in months.
    pub base_months: u32,
    /// Months removed by credits.
    pub reduction_months: u32,
    /// The wait actually applied, after the floor.
    pub effective_months: u32,
    /// The first eligible promotion date.
    pub next_date: NaiveDate,
    /// The audit step recording this derivation.
    pub audit_step: AuditStep,
}

/// Returns the grade's base wait between promotions, in months.
pub fn base_duration_months(grade: Grade, table: &GradeTable) -> u32 {
    table.rule(grade).promotion_months
}

/// Sums the promotion reduction earned by a set of credits, in months.
///
/// # Examples
///
/// ```
/// use grade_engine::calculation::reduction_months;
/// use grade_engine::config::ProgressionPolicy;
/// use grade_engine::models::Credit;
///
/// let credits = vec![Credit::reward(), Credit::reward(), Credit::competition()];
/// assert_eq!(reduction_months(&credits, &ProgressionPolicy::default()), 7);
/// ```
pub fn reduction_months(credits: &[Credit], policy: &ProgressionPolicy) -> u32 {
    credits.iter().fold(0u32, |total, credit| {
        let months = match credit.kind {
            CreditKind::Reward => policy.reward_reduction_months,
            CreditKind::Competition => policy.competition_reduction_months,
        };
        total.saturating_add(months)
    })
}

/// Returns the wait applied for a grade and credit set: the base duration
/// less the reduction, but never below the policy floor.
pub fn effective_months(grade: Grade, credits: &[Credit], config: &ProgressionConfig) -> u32 {
    let base = base_duration_months(grade, config.grades());
    let reduction = reduction_months(credits, config.policy());
    base.saturating_sub(reduction)
        .max(config.policy().minimum_promotion_months)
}

/// Adds calendar months to a date.
///
/// The day of month is kept where valid, otherwise clamped to the last day
/// of the target month (2024-01-31 + 1 month = 2024-02-29).
pub fn add_calendar_months(date: NaiveDate, months: u32) -> NaiveDate {
    // Only overflows past chrono's representable range.
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Derives the next promotion date with its full breakdown.
///
/// # Errors
///
/// Returns `MissingBaseDate` when `from_date` is `None`.
pub fn schedule_promotion(
    grade: Grade,
    from_date: Option<NaiveDate>,
    credits: &[Credit],
    config: &ProgressionConfig,
) -> EngineResult<PromotionSchedule> {
    let from_date = from_date.ok_or_else(|| EngineError::MissingBaseDate {
        context: "promotion schedule".to_string(),
    })?;

    let base_months = base_duration_months(grade, config.grades());
    let reduction = reduction_months(credits, config.policy());
    let effective = effective_months(grade, credits, config);
    let next_date = add_calendar_months(from_date, effective);

    let rewards = credits
        .iter()
        .filter(|c| c.kind == CreditKind::Reward)
        .count();
    let competitions = credits.len() - rewards;
    let floor = config.policy().minimum_promotion_months;

    debug!(
        grade = %grade,
        from_date = %from_date,
        base_months,
        reduction_months = reduction,
        effective_months = effective,
        next_date = %next_date,
        "Computed promotion schedule"
    );

    let audit_step = AuditStep {
        rule_id: "promotion_schedule".to_string(),
        rule_name: "Promotion Schedule".to_string(),
        input: serde_json::json!({
            "grade": grade.as_str(),
            "from_date": from_date.to_string(),
            "rewards": rewards,
            "competitions": competitions
        }),
        output: serde_json::json!({
            "base_months": base_months,
            "reduction_months": reduction,
            "effective_months": effective,
            "next_date": next_date.to_string()
        }),
        reasoning: format!(
            "max({}, {} - {}) = {} months from {} gives {}",
            floor, base_months, reduction, effective, from_date, next_date
        ),
    };

    Ok(PromotionSchedule {
        from_date,
        base_months,
        reduction_months: reduction,
        effective_months: effective,
        next_date,
        audit_step,
    })
}

/// Computes the first eligible promotion date.
///
/// # Examples
///
/// ```
/// use grade_engine::calculation::compute_next_promotion_date;
/// use grade_engine::config::ProgressionConfig;
/// use grade_engine::models::{Credit, Grade};
/// use chrono::NaiveDate;
///
/// let config = ProgressionConfig::default();
/// let from = NaiveDate::from_ymd_opt(2024, 1, 1);
/// let credits = vec![Credit::reward(), Credit::reward()];
///
/// let next = compute_next_promotion_date(Grade::GradeIII, from, &credits, &config).unwrap();
/// assert_eq!(next, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
/// ```
pub fn compute_next_promotion_date(
    grade: Grade,
    from_date: Option<NaiveDate>,
    credits: &[Credit],
    config: &ProgressionConfig,
) -> EngineResult<NaiveDate> {
    schedule_promotion(grade, from_date, credits, config).map(|schedule| schedule.next_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rewards(n: usize) -> Vec<Credit> {
        vec![Credit::reward(); n]
    }

    #[test]
    fn test_base_durations() {
        let table = GradeTable::default();

        assert_eq!(base_duration_months(Grade::GradeI, &table), 60);
        assert_eq!(base_duration_months(Grade::GradeII, &table), 36);
        assert_eq!(base_duration_months(Grade::GradeIII, &table), 24);
    }

    #[test]
    fn test_reduction_weights_by_kind() {
        let policy = ProgressionPolicy::default();

        assert_eq!(reduction_months(&[], &policy), 0);
        assert_eq!(reduction_months(&rewards(2), &policy), 6);
        assert_eq!(reduction_months(&vec![Credit::competition(); 4], &policy), 4);
    }

    #[test]
    fn test_effective_months_respects_floor() {
        let config = ProgressionConfig::default();

        // 24 - 15 = 9, floored at 12
        assert_eq!(effective_months(Grade::GradeIII, &rewards(5), &config), 12);
        // reduction far beyond the base
        assert_eq!(effective_months(Grade::GradeI, &rewards(100), &config), 12);
        // 60 - 9 = 51
        assert_eq!(effective_months(Grade::GradeI, &rewards(3), &config), 51);
    }

    #[test]
    fn test_grade_iii_without_credits_is_24_months() {
        let config = ProgressionConfig::default();
        let next =
            compute_next_promotion_date(Grade::GradeIII, Some(date(2024, 1, 1)), &[], &config)
                .unwrap();

        assert_eq!(next, date(2026, 1, 1));
    }

    #[test]
    fn test_two_rewards_shorten_grade_iii_to_18_months() {
        let config = ProgressionConfig::default();
        let schedule =
            schedule_promotion(Grade::GradeIII, Some(date(2024, 1, 1)), &rewards(2), &config)
                .unwrap();

        assert_eq!(schedule.base_months, 24);
        assert_eq!(schedule.reduction_months, 6);
        assert_eq!(schedule.effective_months, 18);
        assert_eq!(schedule.next_date, date(2025, 7, 1));
    }

    #[test]
    fn test_mixed_credits_on_grade_ii() {
        let config = ProgressionConfig::default();
        let credits = vec![Credit::reward(), Credit::competition(), Credit::competition()];
        let next =
            compute_next_promotion_date(Grade::GradeII, Some(date(2023, 3, 15)), &credits, &config)
                .unwrap();

        // 36 - 5 = 31 months
        assert_eq!(next, date(2025, 10, 15));
    }

    #[test]
    fn test_missing_from_date_returns_error() {
        let config = ProgressionConfig::default();

        match compute_next_promotion_date(Grade::GradeI, None, &[], &config) {
            Err(EngineError::MissingBaseDate { context }) => {
                assert_eq!(context, "promotion schedule");
            }
            other => panic!("Expected MissingBaseDate, got {:?}", other),
        }
    }

    #[test]
    fn test_month_end_is_clamped() {
        assert_eq!(add_calendar_months(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(add_calendar_months(date(2023, 1, 31), 1), date(2023, 2, 28));
        assert_eq!(add_calendar_months(date(2023, 8, 31), 18), date(2025, 2, 28));
        assert_eq!(add_calendar_months(date(2024, 2, 29), 12), date(2025, 2, 28));
    }

    #[test]
    fn test_audit_step_explains_floor() {
        let config = ProgressionConfig::default();
        let schedule =
            schedule_promotion(Grade::GradeIII, Some(date(2024, 1, 1)), &rewards(5), &config)
                .unwrap();

        assert_eq!(schedule.audit_step.rule_id, "promotion_schedule");
        assert_eq!(schedule.audit_step.input["rewards"], 5);
        assert_eq!(schedule.audit_step.output["effective_months"], 12);
        assert!(schedule.audit_step.reasoning.contains("max(12, 24 - 15) = 12"));
        assert!(schedule.audit_step.reasoning.contains("2025-01-01"));
    }
}
