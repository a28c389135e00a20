//! Staff progression record.
//!
//! This module defines [`StaffProgression`], the record every engine
//! operation reads and returns. The engine owns no state of its own; the
//! caller persists whatever comes back.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Credit, Grade};

/// The progression state of a staff record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressionState {
    /// No grade has been assigned yet (new hire).
    Unassigned,
    /// A grade is assigned and the record sits at `level` within it.
    Assigned {
        /// The assigned grade.
        grade: Grade,
        /// The level within the grade.
        level: u32,
    },
}

/// A staff member's grade, level and derived salary fields.
///
/// `coefficient` and `salary` are always derived from `grade` and `level`
/// by the engine; callers should never set them directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffProgression {
    /// Opaque staff identifier.
    pub staff_id: String,
    /// Opaque qualification code, carried through to reports.
    #[serde(default)]
    pub qualification_code: Option<String>,
    /// The assigned grade, `None` until the first assignment.
    #[serde(default)]
    pub grade: Option<Grade>,
    /// The level within the grade, starting at 1.
    pub level: u32,
    /// Salary coefficient derived from grade and level.
    pub coefficient: Decimal,
    /// Monetary salary derived from the coefficient.
    pub salary: Decimal,
    /// Date of the last salary increment.
    #[serde(default)]
    pub last_increment_date: Option<NaiveDate>,
    /// First date on which the next promotion is allowed.
    #[serde(default)]
    pub next_promotion_date: Option<NaiveDate>,
    /// Rewards and competition participations at evaluation time.
    #[serde(default)]
    pub credits: Vec<Credit>,
}

impl StaffProgression {
    /// Creates an unassigned record for a new hire.
    ///
    /// The increment clock starts at the hire date.
    ///
    /// # Examples
    ///
    /// ```
    /// use grade_engine::models::{ProgressionState, StaffProgression};
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2020, 1, 6).unwrap();
    /// let staff = StaffProgression::new_hire("mscb-1", start);
    ///
    /// assert_eq!(staff.state(), ProgressionState::Unassigned);
    /// assert_eq!(staff.level, 1);
    /// assert_eq!(staff.last_increment_date, Some(start));
    /// ```
    pub fn new_hire(staff_id: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            staff_id: staff_id.into(),
            qualification_code: None,
            grade: None,
            level: 1,
            coefficient: Decimal::ZERO,
            salary: Decimal::ZERO,
            last_increment_date: Some(start_date),
            next_promotion_date: None,
            credits: Vec::new(),
        }
    }

    /// Sets the qualification code.
    pub fn with_qualification_code(mut self, code: impl Into<String>) -> Self {
        self.qualification_code = Some(code.into());
        self
    }

    /// Replaces the credits with the given collection.
    pub fn with_credits(mut self, credits: Vec<Credit>) -> Self {
        self.credits = credits;
        self
    }

    /// Returns the record's position in the progression state machine.
    pub fn state(&self) -> ProgressionState {
        match self.grade {
            None => ProgressionState::Unassigned,
            Some(grade) => ProgressionState::Assigned {
                grade,
                level: self.level,
            },
        }
    }

    /// Returns true once a grade has been assigned.
    pub fn is_assigned(&self) -> bool {
        self.grade.is_some()
    }
}
