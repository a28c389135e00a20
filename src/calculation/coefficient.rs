//! Salary coefficient calculation.
//!
//! This module derives a staff member's salary coefficient from their grade
//! and level, and the monetary salary from the coefficient.

use rust_decimal::Decimal;

use crate::config::GradeTable;
use crate::error::{EngineError, EngineResult};
use crate::models::Grade;

/// Computes the salary coefficient for a grade and level.
///
/// `coefficient = base_coefficient(grade) + level_increment(grade) * (level - 1)`
///
/// The upper bound is the transition machine's concern; only `level < 1`
/// is rejected here.
///
/// # Errors
///
/// Returns `InvalidLevel` when `level` is zero.
///
/// # Examples
///
/// ```
/// use grade_engine::calculation::compute_coefficient;
/// use grade_engine::config::GradeTable;
/// use grade_engine::models::Grade;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = GradeTable::default();
/// let coefficient = compute_coefficient(Grade::GradeII, 3, &table).unwrap();
/// assert_eq!(coefficient, Decimal::from_str("3.35").unwrap());
/// ```
pub fn compute_coefficient(grade: Grade, level: u32, table: &GradeTable) -> EngineResult<Decimal> {
    let rule = table.rule(grade);
    if level < 1 {
        return Err(EngineError::InvalidLevel {
            grade,
            level,
            max_level: rule.max_level,
        });
    }

    Ok(rule.base_coefficient + rule.level_increment * Decimal::from(level - 1))
}

/// Computes the monetary salary for a coefficient.
///
/// # Examples
///
/// ```
/// use grade_engine::calculation::compute_salary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let salary = compute_salary(Decimal::from_str("2.34").unwrap(), Decimal::from(2_340_000));
/// assert_eq!(salary, Decimal::from(5_475_600));
/// ```
pub fn compute_salary(coefficient: Decimal, base_salary_unit: Decimal) -> Decimal {
    coefficient * base_salary_unit
}
