//! Grade and Salary Progression Engine for academic staff
//!
//! This crate assigns grades to staff members, derives their salary
//! coefficient and salary from grade and level, schedules the next eligible
//! promotion (shortened by rewards and competition participations), and
//! promotes or demotes levels within each grade's bounds.
//!
//! The engine is pure: every operation takes the staff record and the
//! current date from the caller and returns the updated record.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
