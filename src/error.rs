//! Error types for the Grade Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every precondition violation the progression rules can report.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::Grade;

/// The main error type for the Grade Engine.
///
/// Every failure is a precondition violation reported to the immediate
/// caller. Nothing is retried internally.
///
/// # Example
///
/// ```
/// use grade_engine::error::EngineError;
///
/// let error = EngineError::InvalidGrade {
///     value: "GRADE_IV".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid grade: GRADE_IV");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The supplied grade name is not one of the known grades.
    #[error("Invalid grade: {value}")]
    InvalidGrade {
        /// The rejected grade name.
        value: String,
    },

    /// A level outside `1..=max_level` was supplied.
    #[error("Invalid level {level} for grade {grade} (allowed 1..={max_level})")]
    InvalidLevel {
        /// The grade the level was checked against.
        grade: Grade,
        /// The rejected level.
        level: u32,
        /// The ceiling for the grade.
        max_level: u32,
    },

    /// An operation requiring a grade was attempted before one was assigned.
    #[error("Staff '{staff_id}' has no grade assigned")]
    NotAssigned {
        /// The staff member the operation targeted.
        staff_id: String,
    },

    /// Promotion attempted at the grade's ceiling.
    #[error("Maximum level {max_level} reached for grade {grade}")]
    MaxLevelReached {
        /// The staff member's grade.
        grade: Grade,
        /// The ceiling that was reached.
        max_level: u32,
    },

    /// Demotion attempted at the lowest level.
    #[error("Minimum level reached (current level {level})")]
    MinLevelReached {
        /// The current level.
        level: u32,
    },

    /// Promotion attempted before the next promotion date.
    #[error("Not yet eligible for promotion; eligible on {eligible_date}")]
    NotYetEligible {
        /// The first date on which promotion is allowed.
        eligible_date: NaiveDate,
    },

    /// A schedule was requested without a reference date.
    #[error("Missing base date for {context}")]
    MissingBaseDate {
        /// Which schedule needed the date.
        context: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but its contents are unusable.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What was wrong with the configuration.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_grade_displays_value() {
        let error = EngineError::InvalidGrade {
            value: "GRADE_X".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid grade: GRADE_X");
    }

    #[test]
    fn test_invalid_level_displays_bounds() {
        let error = EngineError::InvalidLevel {
            grade: Grade::GradeI,
            level: 7,
            max_level: 6,
        };
        assert_eq!(
            error.to_string(),
            "Invalid level 7 for grade GRADE_I (allowed 1..=6)"
        );
    }

    #[test]
    fn test_not_yet_eligible_carries_date() {
        let error = EngineError::NotYetEligible {
            eligible_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Not yet eligible for promotion; eligible on 2025-06-01"
        );
    }

    #[test]
    fn test_max_level_reached_displays_grade() {
        let error = EngineError::MaxLevelReached {
            grade: Grade::GradeII,
            max_level: 8,
        };
        assert_eq!(
            error.to_string(),
            "Maximum level 8 reached for grade GRADE_II"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing_date() -> EngineResult<()> {
            Err(EngineError::MissingBaseDate {
                context: "promotion schedule".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_missing_date()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
