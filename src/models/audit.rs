//! Audit step model.
//!
//! Schedule and salary derivations record the inputs, outputs and
//! reasoning behind each figure so a reviewer can see how it was reached.

use serde::{Deserialize, Serialize};

/// A single recorded rule application.
///
/// # Example
///
/// ```
/// use grade_engine::models::AuditStep;
///
/// let step = AuditStep {
///     rule_id: "promotion_schedule".to_string(),
///     rule_name: "Promotion Schedule".to_string(),
///     input: serde_json::json!({"grade": "GRADE_III", "credits": 0}),
///     output: serde_json::json!({"effective_months": 24}),
///     reasoning: "24 months - 0 months reduction = 24 months".to_string(),
/// };
/// assert_eq!(step.rule_id, "promotion_schedule");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}
