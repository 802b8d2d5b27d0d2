//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading scheduler
//! configuration from a YAML file.

use chrono::Weekday;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{RotationConfig, SchedulerConfig};

/// The file read from the configuration directory.
pub const CONFIG_FILE_NAME: &str = "scheduler.yaml";

/// Loads and provides access to scheduler configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── scheduler.yaml   # Week start, copy, reporting and rotation settings
/// ```
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// println!("Copy looks back {} month(s)", loader.lookback_months());
/// # Ok::<(), roster_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: SchedulerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `scheduler.yaml` is missing
    /// - The file contains invalid YAML or values of the wrong type
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config_path = path.as_ref().join(CONFIG_FILE_NAME);
        let config = Self::load_yaml::<SchedulerConfig>(&config_path)?;
        info!(
            path = %config_path.display(),
            week_start = ?config.week_start,
            lookback_months = config.copy.lookback_months,
            "Scheduler configuration loaded"
        );
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: SchedulerConfig) -> Self {
        Self { config }
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

    /// Returns the underlying configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Returns the configured first day of the week.
    pub fn week_start(&self) -> Weekday {
        self.config.week_start.to_weekday()
    }

    /// Returns how many months the copy source lies behind the target.
    pub fn lookback_months(&self) -> u32 {
        self.config.copy.lookback_months
    }

    /// Returns the decimal places pay is presented with.
    pub fn pay_decimal_places(&self) -> u32 {
        self.config.reporting.pay_decimal_places
    }

    /// Returns the decimal places hours are presented with.
    pub fn hours_decimal_places(&self) -> u32 {
        self.config.reporting.hours_decimal_places
    }

    /// Returns the rotation seeding templates.
    pub fn rotation(&self) -> &RotationConfig {
        &self.config.rotation
    }
}
