//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading progression
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{GradeTable, GradesConfig, ProgressionConfig, ProgressionPolicy};

/// Loads progression configuration from a directory.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── grades.yaml   # Per-grade coefficients, ceilings and durations
/// └── policy.yaml   # Base salary unit, credit weights, floors
/// ```
///
/// # Example
///
/// ```no_run
/// use grade_engine::config::ConfigLoader;
/// use grade_engine::models::Grade;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("GRADE_I ceiling: {}", loader.config().grades().max_level(Grade::GradeI));
/// # Ok::<(), grade_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ProgressionConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Either file is missing (`ConfigNotFound`)
    /// - Either file contains invalid YAML (`ConfigParseError`)
    /// - The grade table is incomplete or the policy is unusable (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let grades_path = path.join("grades.yaml");
        let grades_config = Self::load_yaml::<GradesConfig>(&grades_path)?;
        let grades = GradeTable::from_rules(grades_config.grades)?;

        let policy_path = path.join("policy.yaml");
        let policy = Self::load_yaml::<ProgressionPolicy>(&policy_path)?;

        let config = ProgressionConfig::new(grades, policy)?;
        debug!(path = %path.display(), "Loaded progression configuration");

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ProgressionConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> ProgressionConfig {
        self.config
    }
}
