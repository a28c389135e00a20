//! Calculation logic for the Grade Engine.
//!
//! This module contains the coefficient and salary derivation, promotion
//! scheduling with credit reductions, the parallel salary increment
//! schedule, and the grade assignment / level transition operations.

mod coefficient;
mod level_transition;
mod promotion_schedule;
mod salary_increment;

pub use coefficient::{compute_coefficient, compute_salary};
pub use level_transition::{
    assign_grade, assign_grade_by_name, demote, get_salary_info, promote,
    recompute_derived_fields, validate_level,
};
pub use promotion_schedule::{
    PromotionSchedule, add_calendar_months, base_duration_months, compute_next_promotion_date,
    effective_months, reduction_months, schedule_promotion,
};
pub use salary_increment::{
    compute_next_increment_date, increment_period_months, list_salary_increments,
    salary_increment_status,
};
