//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading default
//! settings and an optional seed employee list from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, Settings};

/// Loads and provides access to default engine configuration.
///
/// The `ConfigLoader` reads YAML files from a directory and provides the
/// default settings (and optionally a seed employee list) served when a
/// caller supplies none of its own.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── settings.yaml   # Default allocation settings (required)
/// └── employees.yaml  # Seed employee list (optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use bonus_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("default profit share: {}", loader.settings().total_profit_share);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: Settings,
    employees: Vec<Employee>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `settings.yaml` is missing
    /// - Any present file contains invalid YAML
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings_path = path.join("settings.yaml");
        let settings = Self::load_yaml::<Settings>(&settings_path)?;

        // The seed employee list is optional; a missing file means an
        // empty default list, a malformed file is still an error.
        let employees_path = path.join("employees.yaml");
        let employees = if employees_path.exists() {
            Self::load_yaml::<Vec<Employee>>(&employees_path)?
        } else {
            Vec::new()
        };

        Ok(Self {
            settings,
            employees,
        })
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

    /// Returns the default settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the seed employee list (possibly empty).
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }
}
