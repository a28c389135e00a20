//! Salary increment scheduling.
//!
//! The increment schedule runs in parallel to promotion and is simpler:
//! a fixed period (36 months unless a grade overrides it) counted from the
//! last increment, shortened by one month per reward. Competition
//! participations do not count here. It has no floor, and the wait stops
//! shortening at zero months.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::ProgressionConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Credit, CreditKind, Grade, SalaryIncrementStatus, StaffProgression};

use super::promotion_schedule::add_calendar_months;

/// Returns the increment period for a grade, in months.
///
/// Unassigned staff and grades without an override use the policy default.
pub fn increment_period_months(grade: Option<Grade>, config: &ProgressionConfig) -> u32 {
    grade
        .and_then(|g| config.grades().rule(g).increment_months)
        .unwrap_or(config.policy().increment_period_months)
}

fn next_increment_from(
    grade: Option<Grade>,
    last_increment_date: NaiveDate,
    credits: &[Credit],
    config: &ProgressionConfig,
) -> NaiveDate {
    let period = increment_period_months(grade, config);
    let rewards = credits
        .iter()
        .filter(|c| c.kind == CreditKind::Reward)
        .count();
    let reward_count = u32::try_from(rewards).unwrap_or(u32::MAX);
    let reduction = reward_count.saturating_mul(config.policy().increment_reduction_per_reward);
    let months = period.saturating_sub(reduction);

    add_calendar_months(last_increment_date, months)
}

/// Computes the next salary increment date.
///
/// # Errors
///
/// Returns `MissingBaseDate` when `last_increment_date` is `None`.
///
/// # Examples
///
/// ```
/// use grade_engine::calculation::compute_next_increment_date;
/// use grade_engine::config::ProgressionConfig;
/// use grade_engine::models::{Credit, Grade};
/// use chrono::NaiveDate;
///
/// let config = ProgressionConfig::default();
/// let last = NaiveDate::from_ymd_opt(2022, 9, 1);
/// let credits = vec![Credit::reward(), Credit::competition()];
///
/// let next = compute_next_increment_date(Some(Grade::GradeI), last, &credits, &config).unwrap();
/// // only the reward counts: 36 - 1 = 35 months
/// assert_eq!(next, NaiveDate::from_ymd_opt(2025, 8, 1).unwrap());
/// ```
pub fn compute_next_increment_date(
    grade: Option<Grade>,
    last_increment_date: Option<NaiveDate>,
    credits: &[Credit],
    config: &ProgressionConfig,
) -> EngineResult<NaiveDate> {
    let last = last_increment_date.ok_or_else(|| EngineError::MissingBaseDate {
        context: "salary increment schedule".to_string(),
    })?;

    Ok(next_increment_from(grade, last, credits, config))
}

/// Reports a staff member's increment status.
///
/// A record without a last increment date is evaluated from `today`, and
/// the returned status says so; persisting that date is left to the caller.
pub fn salary_increment_status(
    staff: &StaffProgression,
    today: NaiveDate,
    config: &ProgressionConfig,
) -> SalaryIncrementStatus {
    let (last_increment_date, defaulted) = match staff.last_increment_date {
        Some(date) => (date, false),
        None => (today, true),
    };
    let next_increment_date =
        next_increment_from(staff.grade, last_increment_date, &staff.credits, config);

    if defaulted {
        debug!(
            staff_id = %staff.staff_id,
            today = %today,
            "No last increment date; counting from today"
        );
    }

    SalaryIncrementStatus {
        staff_id: staff.staff_id.clone(),
        qualification_code: staff.qualification_code.clone(),
        last_increment_date,
        next_increment_date,
        last_increment_date_defaulted: defaulted,
    }
}

/// Builds the increment listing for a set of staff, in input order.
pub fn list_salary_increments(
    staffs: &[StaffProgression],
    today: NaiveDate,
    config: &ProgressionConfig,
) -> Vec<SalaryIncrementStatus> {
    staffs
        .iter()
        .map(|staff| salary_increment_status(staff, today, config))
        .collect()
}
