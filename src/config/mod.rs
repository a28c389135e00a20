//! Configuration for the Grade Engine.
//!
//! The grade table and policy constants default to the published values
//! and can be replaced by loading YAML files from a directory.
//!
//! # Example
//!
//! ```no_run
//! use grade_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap().into_config();
//! println!("Base unit: {}", config.policy().base_salary_unit);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{GradeRule, GradeTable, GradesConfig, ProgressionConfig, ProgressionPolicy};
