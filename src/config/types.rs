//! Configuration types for grade progression.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the defaults used
//! when no file is supplied.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Grade;

/// The constants governing a single grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeRule {
    /// Coefficient at level 1.
    pub base_coefficient: Decimal,
    /// Coefficient added for every level above 1.
    pub level_increment: Decimal,
    /// Highest level reachable within the grade.
    pub max_level: u32,
    /// Base wait, in months, between promotions.
    pub promotion_months: u32,
    /// Salary increment period override, in months.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub increment_months: Option<u32>,
}

/// grades.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct GradesConfig {
    /// Map of grade to its constants.
    pub grades: HashMap<Grade, GradeRule>,
}

/// Immutable lookup table keyed by [`Grade`].
///
/// Every grade always has a rule; construction through
/// [`GradeTable::from_rules`] rejects incomplete tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeTable {
    rules: [GradeRule; 3],
}

impl GradeTable {
    /// Builds a table from a map that must cover every grade.
    pub fn from_rules(mut rules: HashMap<Grade, GradeRule>) -> EngineResult<Self> {
        let mut take = |grade: Grade| -> EngineResult<GradeRule> {
            let rule = rules.remove(&grade).ok_or_else(|| EngineError::InvalidConfig {
                message: format!("missing rule for grade {}", grade),
            })?;
            if rule.max_level < 1 {
                return Err(EngineError::InvalidConfig {
                    message: format!("max_level for grade {} must be at least 1", grade),
                });
            }
            if rule.base_coefficient <= Decimal::ZERO || rule.level_increment < Decimal::ZERO {
                return Err(EngineError::InvalidConfig {
                    message: format!(
                        "base_coefficient must be positive and level_increment non-negative for grade {}",
                        grade
                    ),
                });
            }
            Ok(rule)
        };

        Ok(Self {
            rules: [
                take(Grade::GradeI)?,
                take(Grade::GradeII)?,
                take(Grade::GradeIII)?,
            ],
        })
    }

    /// Returns the rule for a grade.
    pub fn rule(&self, grade: Grade) -> &GradeRule {
        &self.rules[grade.index()]
    }

    /// Returns the highest level reachable within a grade.
    pub fn max_level(&self, grade: Grade) -> u32 {
        self.rule(grade).max_level
    }
}

impl Default for GradeTable {
    fn default() -> Self {
        Self {
            rules: [
                GradeRule {
                    base_coefficient: Decimal::new(300, 2),
                    level_increment: Decimal::new(36, 2),
                    max_level: 6,
                    promotion_months: 60,
                    increment_months: None,
                },
                GradeRule {
                    base_coefficient: Decimal::new(267, 2),
                    level_increment: Decimal::new(34, 2),
                    max_level: 8,
                    promotion_months: 36,
                    increment_months: None,
                },
                GradeRule {
                    base_coefficient: Decimal::new(234, 2),
                    level_increment: Decimal::new(33, 2),
                    max_level: 9,
                    promotion_months: 24,
                    increment_months: None,
                },
            ],
        }
    }
}

/// Policy constants shared by every grade.
///
/// Missing fields in policy.yaml fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionPolicy {
    /// Monetary amount one coefficient point is worth.
    pub base_salary_unit: Decimal,
    /// Months of promotion reduction per reward.
    pub reward_reduction_months: u32,
    /// Months of promotion reduction per competition participation.
    pub competition_reduction_months: u32,
    /// Shortest possible wait between promotions, in months.
    pub minimum_promotion_months: u32,
    /// Default salary increment period, in months.
    pub increment_period_months: u32,
    /// Months of increment reduction per reward.
    pub increment_reduction_per_reward: u32,
}

impl Default for ProgressionPolicy {
    fn default() -> Self {
        Self {
            base_salary_unit: Decimal::new(2_340_000, 0),
            reward_reduction_months: 3,
            competition_reduction_months: 1,
            minimum_promotion_months: 12,
            increment_period_months: 36,
            increment_reduction_per_reward: 1,
        }
    }
}

/// The complete progression configuration.
///
/// # Example
///
/// ```
/// use grade_engine::config::ProgressionConfig;
/// use grade_engine::models::Grade;
///
/// let config = ProgressionConfig::default();
/// assert_eq!(config.grades().max_level(Grade::GradeIII), 9);
/// assert_eq!(config.policy().minimum_promotion_months, 12);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressionConfig {
    grades: GradeTable,
    policy: ProgressionPolicy,
}

impl ProgressionConfig {
    /// Creates a configuration from its component parts.
    pub fn new(grades: GradeTable, policy: ProgressionPolicy) -> EngineResult<Self> {
        if policy.base_salary_unit <= Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                message: "base_salary_unit must be positive".to_string(),
            });
        }
        Ok(Self { grades, policy })
    }

    /// Returns the grade table.
    pub fn grades(&self) -> &GradeTable {
        &self.grades
    }

    /// Returns the policy constants.
    pub fn policy(&self) -> &ProgressionPolicy {
        &self.policy
    }
}
