//! Analyzer configuration

use serde::Deserialize;
use thiserror::Error;
use ycql_diagnostics::{CONFIGURATION_ERROR, SemError};

/// Configuration errors
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("invalid analyzer configuration: {0}")]
    Parse(String),
}

impl From<ConfigError> for SemError {
    fn from(err: ConfigError) -> Self {
        SemError::system(CONFIGURATION_ERROR, err.to_string())
    }
}

/// Policy knobs read while analyzing a statement
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SemConfig {
    /// Reject write access to tables in system keyspaces
    pub system_namespace_readonly: bool,
}

impl Default for SemConfig {
    fn default() -> Self {
        Self {
            system_namespace_readonly: true,
        }
    }
}

impl SemConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a configuration object; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn with_system_namespace_readonly(mut self, readonly: bool) -> Self {
        self.system_namespace_readonly = readonly;
        self
    }
}
