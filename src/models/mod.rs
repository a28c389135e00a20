//! Core data models for the Grade Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod credit;
mod grade;
mod salary_info;
mod staff;

pub use audit::AuditStep;
pub use credit::{Credit, CreditKind};
pub use grade::Grade;
pub use salary_info::{SalaryIncrementStatus, SalaryInfoView};
pub use staff::{ProgressionState, StaffProgression};
