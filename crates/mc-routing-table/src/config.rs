//! # Routing Configuration
//!
//! Node limits applied when entries are added to a table.
//!
//! # Config File Format
//!
//! ```toml
//! [routing]
//! max_processor_id = 17
//! max_link_id = 5
//! max_entries_per_table = 1023
//! ```
//!
//! Every key is optional; missing keys take their default. Unknown keys are
//! rejected so a misspelt limit is not silently ignored.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::domain::{RoutingTableError, MAX_LINK_ID, MAX_PROCESSOR_ID};

/// Default largest processor id (eighteen processors per node).
pub const DEFAULT_MAX_PROCESSOR_ID: u8 = 17;

/// Routing table configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoutingConfig {
    /// Largest processor id an entry may route to.
    pub max_processor_id: u8,

    /// Largest link id an entry may route to.
    pub max_link_id: u8,

    /// Router capacity. `None` means unbounded.
    pub max_entries_per_table: Option<usize>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            max_processor_id: DEFAULT_MAX_PROCESSOR_ID,
            max_link_id: MAX_LINK_ID,
            max_entries_per_table: None,
        }
    }
}

/// Configuration file structure.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    routing: RoutingConfig,
}

impl RoutingConfig {
    /// Create a config for testing (tiny capacity).
    pub fn for_testing() -> Self {
        Self {
            max_entries_per_table: Some(4),
            ..Self::default()
        }
    }

    /// Builder-style method to set the table capacity
    pub fn with_max_entries(mut self, max: usize) -> Self {
        self.max_entries_per_table = Some(max);
        self
    }

    /// Builder-style method to set the largest processor id
    pub fn with_max_processor_id(mut self, max: u8) -> Self {
        self.max_processor_id = max;
        self
    }

    /// Check the limits fit the route word.
    ///
    /// Tables run this on construction, so a config built in code is held
    /// to the same rules as one loaded from TOML.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_processor_id > MAX_PROCESSOR_ID {
            return Err(ConfigError::Invalid(format!(
                "max_processor_id {} exceeds route word limit {}",
                self.max_processor_id, MAX_PROCESSOR_ID
            )));
        }

        if self.max_link_id > MAX_LINK_ID {
            return Err(ConfigError::Invalid(format!(
                "max_link_id {} exceeds route word limit {}",
                self.max_link_id, MAX_LINK_ID
            )));
        }

        if self.max_entries_per_table == Some(0) {
            return Err(ConfigError::Invalid(
                "max_entries_per_table cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        file.routing.validate()?;
        Ok(file.routing)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, parsed, or fails validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_toml_str(&content)
    }
}

/// Errors that can occur during config loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("Failed to read {path}: {error}")]
    Io {
        /// File path
        path: String,
        /// Underlying error message
        error: String,
    },

    /// TOML parsing error.
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// Values outside accepted limits.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl From<ConfigError> for RoutingTableError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Invalid(reason) => RoutingTableError::InvalidConfig(reason),
            other => RoutingTableError::InvalidConfig(other.to_string()),
        }
    }
}
