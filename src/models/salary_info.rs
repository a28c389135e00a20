//! Read-only projections of a staff record.
//!
//! [`SalaryInfoView`] answers "what is this person paid and when can they
//! next be promoted"; [`SalaryIncrementStatus`] is one row of the salary
//! increment listing.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Grade;

/// Salary information for a single staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInfoView {
    /// The assigned grade, if any.
    pub grade: Option<Grade>,
    /// The current level.
    pub level: u32,
    /// The grade's ceiling, `None` while unassigned.
    pub max_level: Option<u32>,
    /// The salary coefficient.
    pub coefficient: Decimal,
    /// The monetary salary.
    pub salary: Decimal,
    /// First date on which the next promotion is allowed.
    pub next_promotion_date: Option<NaiveDate>,
}

/// One row of the salary increment listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryIncrementStatus {
    /// Opaque staff identifier.
    pub staff_id: String,
    /// Opaque qualification code.
    pub qualification_code: Option<String>,
    /// The last increment date used for the computation.
    pub last_increment_date: NaiveDate,
    /// The next scheduled increment date.
    pub next_increment_date: NaiveDate,
    /// True when the record had no last increment date and "today" was used.
    ///
    /// The caller should persist `last_increment_date` when this is set.
    pub last_increment_date_defaulted: bool,
}
