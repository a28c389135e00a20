//! Grade model.
//!
//! A staff member's rank tier. The set is closed; unknown names are rejected
//! at the boundary with [`EngineError::InvalidGrade`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A staff member's grade.
///
/// Serialized as `GRADE_I`, `GRADE_II` or `GRADE_III`.
///
/// # Example
///
/// ```
/// use grade_engine::models::Grade;
///
/// let grade: Grade = "GRADE_II".parse().unwrap();
/// assert_eq!(grade, Grade::GradeII);
/// assert!("GRADE_IV".parse::<Grade>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    /// Grade I, the senior tier.
    #[serde(rename = "GRADE_I")]
    GradeI,
    /// Grade II.
    #[serde(rename = "GRADE_II")]
    GradeII,
    /// Grade III, the entry tier.
    #[serde(rename = "GRADE_III")]
    GradeIII,
}

impl Grade {
    /// Every grade, in table order.
    pub const ALL: [Grade; 3] = [Grade::GradeI, Grade::GradeII, Grade::GradeIII];

    /// Returns the canonical name of the grade.
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::GradeI => "GRADE_I",
            Grade::GradeII => "GRADE_II",
            Grade::GradeIII => "GRADE_III",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Grade::GradeI => 0,
            Grade::GradeII => 1,
            Grade::GradeIII => 2,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grade::ALL
            .into_iter()
            .find(|grade| grade.as_str() == s)
            .ok_or_else(|| EngineError::InvalidGrade {
                value: s.to_string(),
            })
    }
}
