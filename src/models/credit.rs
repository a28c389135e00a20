//! Credit model.
//!
//! Credits are rewards and competition participations that shorten the wait
//! to the next promotion. The storage layer owns the underlying records and
//! resolves them into [`Credit`] values before calling the engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The kind of achievement a credit represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreditKind {
    /// A reward (worth 3 months of reduction by default).
    Reward,
    /// A competition participation (worth 1 month of reduction by default).
    Competition,
}

/// A single accelerant attached to a staff member.
///
/// # Example
///
/// ```
/// use grade_engine::models::{Credit, CreditKind};
///
/// let credit = Credit::reward();
/// assert_eq!(credit.kind, CreditKind::Reward);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credit {
    /// The kind of achievement.
    #[serde(rename = "type")]
    pub kind: CreditKind,
    /// Title of the reward or competition, for reporting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Date the credit was earned, for reporting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl Credit {
    /// Creates an untitled credit of the given kind.
    pub fn new(kind: CreditKind) -> Self {
        Self {
            kind,
            title: None,
            date: None,
        }
    }

    /// Creates an untitled reward credit.
    pub fn reward() -> Self {
        Self::new(CreditKind::Reward)
    }

    /// Creates an untitled competition credit.
    pub fn competition() -> Self {
        Self::new(CreditKind::Competition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tagged_credit() {
        let json = r#"{"type": "COMPETITION", "title": "Research Week 2024", "date": "2024-05-10"}"#;
        let credit: Credit = serde_json::from_str(json).unwrap();

        assert_eq!(credit.kind, CreditKind::Competition);
        assert_eq!(credit.title.as_deref(), Some("Research Week 2024"));
        assert_eq!(credit.date, NaiveDate::from_ymd_opt(2024, 5, 10));
    }

    #[test]
    fn test_deserialize_bare_credit() {
        let credit: Credit = serde_json::from_str(r#"{"type": "REWARD"}"#).unwrap();
        assert_eq!(credit, Credit::reward());
    }

    #[test]
    fn test_unknown_credit_type_is_rejected() {
        let result: Result<Credit, _> = serde_json::from_str(r#"{"type": "BONUS"}"#);
        assert!(result.is_err());
    }
}
