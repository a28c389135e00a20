//! Grade assignment and level transitions.
//!
//! A staff record is either unassigned (new hire) or assigned to a grade at
//! some level. The operations here move a record between those states:
//!
//! - [`assign_grade`] sets a grade and resets the level to 1
//! - [`promote`] raises the level by one, bounded by the grade ceiling and
//!   the next promotion date
//! - [`demote`] lowers the level by one, bounded below by 1
//!
//! Every mutating operation ends with [`recompute_derived_fields`]. The
//! current date always comes from the caller.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::config::{GradeTable, ProgressionConfig};
use crate::error::{EngineError, EngineResult};
use crate::models::{Grade, SalaryInfoView, StaffProgression};

use super::coefficient::{compute_coefficient, compute_salary};
use super::promotion_schedule::compute_next_promotion_date;

/// Checks that a level lies within `1..=max_level(grade)`.
pub fn validate_level(grade: Grade, level: u32, table: &GradeTable) -> EngineResult<()> {
    let max_level = table.max_level(grade);
    if level < 1 || level > max_level {
        return Err(EngineError::InvalidLevel {
            grade,
            level,
            max_level,
        });
    }
    Ok(())
}

/// Recomputes coefficient and salary from grade and level.
///
/// Idempotent. An unassigned record has zero coefficient and salary.
///
/// # Errors
///
/// Returns `InvalidLevel` if the stored level is outside the grade's range.
pub fn recompute_derived_fields(
    mut staff: StaffProgression,
    config: &ProgressionConfig,
) -> EngineResult<StaffProgression> {
    match staff.grade {
        None => {
            staff.coefficient = Decimal::ZERO;
            staff.salary = Decimal::ZERO;
        }
        Some(grade) => {
            validate_level(grade, staff.level, config.grades())?;
            let coefficient = compute_coefficient(grade, staff.level, config.grades())?;
            staff.coefficient = coefficient;
            staff.salary = compute_salary(coefficient, config.policy().base_salary_unit);
        }
    }
    Ok(staff)
}

fn rejected(staff: &StaffProgression, operation: &str, error: EngineError) -> EngineError {
    warn!(
        staff_id = %staff.staff_id,
        operation,
        error = %error,
        "Transition rejected"
    );
    error
}

/// Assigns a grade, resetting the level to 1.
///
/// Legal from any state. The next promotion date is computed from `now`
/// using the record's current credits.
///
/// # Examples
///
/// ```
/// use grade_engine::calculation::assign_grade;
/// use grade_engine::config::ProgressionConfig;
/// use grade_engine::models::{Grade, StaffProgression};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let config = ProgressionConfig::default();
/// let now = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let staff = StaffProgression::new_hire("mscb-1", now);
///
/// let staff = assign_grade(staff, Grade::GradeIII, now, &config).unwrap();
/// assert_eq!(staff.level, 1);
/// assert_eq!(staff.salary, Decimal::from(5_475_600));
/// assert_eq!(staff.next_promotion_date, NaiveDate::from_ymd_opt(2026, 1, 1));
/// ```
pub fn assign_grade(
    mut staff: StaffProgression,
    grade: Grade,
    now: NaiveDate,
    config: &ProgressionConfig,
) -> EngineResult<StaffProgression> {
    let previous = staff.grade;
    staff.grade = Some(grade);
    staff.level = 1;

    let mut staff = recompute_derived_fields(staff, config)?;
    staff.next_promotion_date = Some(compute_next_promotion_date(
        grade,
        Some(now),
        &staff.credits,
        config,
    )?);

    info!(
        staff_id = %staff.staff_id,
        previous_grade = ?previous,
        grade = %grade,
        next_promotion_date = ?staff.next_promotion_date,
        "Grade assigned"
    );
    Ok(staff)
}

/// Assigns a grade given by name, as received from outside the engine.
///
/// # Errors
///
/// Returns `InvalidGrade` when the name is not a known grade.
pub fn assign_grade_by_name(
    staff: StaffProgression,
    grade: &str,
    now: NaiveDate,
    config: &ProgressionConfig,
) -> EngineResult<StaffProgression> {
    let grade = grade
        .parse::<Grade>()
        .map_err(|e| rejected(&staff, "assign_grade", e))?;
    assign_grade(staff, grade, now, config)
}

/// Promotes a staff member one level within their grade.
///
/// Preconditions, checked in order:
/// 1. a grade is assigned (`NotAssigned`)
/// 2. the level is below the grade ceiling (`MaxLevelReached`)
/// 3. `today` is on or after the next promotion date (`NotYetEligible`)
///
/// On success the schedule restarts from `today`.
pub fn promote(
    mut staff: StaffProgression,
    today: NaiveDate,
    config: &ProgressionConfig,
) -> EngineResult<StaffProgression> {
    let Some(grade) = staff.grade else {
        let error = EngineError::NotAssigned {
            staff_id: staff.staff_id.clone(),
        };
        return Err(rejected(&staff, "promote", error));
    };

    validate_level(grade, staff.level, config.grades())
        .map_err(|e| rejected(&staff, "promote", e))?;

    let max_level = config.grades().max_level(grade);
    if staff.level >= max_level {
        let error = EngineError::MaxLevelReached { grade, max_level };
        return Err(rejected(&staff, "promote", error));
    }

    let Some(eligible_date) = staff.next_promotion_date else {
        let error = EngineError::MissingBaseDate {
            context: "promotion eligibility".to_string(),
        };
        return Err(rejected(&staff, "promote", error));
    };
    if today < eligible_date {
        let error = EngineError::NotYetEligible { eligible_date };
        return Err(rejected(&staff, "promote", error));
    }

    staff.level += 1;
    let mut staff = recompute_derived_fields(staff, config)?;
    staff.next_promotion_date = Some(compute_next_promotion_date(
        grade,
        Some(today),
        &staff.credits,
        config,
    )?);

    info!(
        staff_id = %staff.staff_id,
        grade = %grade,
        level = staff.level,
        salary = %staff.salary,
        next_promotion_date = ?staff.next_promotion_date,
        "Staff promoted"
    );
    Ok(staff)
}

/// Demotes a staff member one level within their grade.
///
/// The next promotion date is left unchanged.
pub fn demote(
    mut staff: StaffProgression,
    config: &ProgressionConfig,
) -> EngineResult<StaffProgression> {
    if staff.level <= 1 {
        let error = EngineError::MinLevelReached { level: staff.level };
        return Err(rejected(&staff, "demote", error));
    }

    let Some(grade) = staff.grade else {
        let error = EngineError::NotAssigned {
            staff_id: staff.staff_id.clone(),
        };
        return Err(rejected(&staff, "demote", error));
    };

    validate_level(grade, staff.level, config.grades())
        .map_err(|e| rejected(&staff, "demote", e))?;

    staff.level -= 1;
    let staff = recompute_derived_fields(staff, config)?;

    info!(
        staff_id = %staff.staff_id,
        grade = %grade,
        level = staff.level,
        salary = %staff.salary,
        "Staff demoted"
    );
    Ok(staff)
}

/// Returns a read-only salary projection of a staff record.
pub fn get_salary_info(staff: &StaffProgression, config: &ProgressionConfig) -> SalaryInfoView {
    SalaryInfoView {
        grade: staff.grade,
        level: staff.level,
        max_level: staff.grade.map(|grade| config.grades().max_level(grade)),
        coefficient: staff.coefficient,
        salary: staff.salary,
        next_promotion_date: staff.next_promotion_date,
    }
}
