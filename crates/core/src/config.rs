//! Configuration management for sensor list control.
//!
//! A configuration file describes the classifier switches, the logging
//! setup and an optional bank of sensors to classify:
//!
//! ```toml
//! [control]
//! check_faults = true
//!
//! [[sensors]]
//! low = 1
//! high = 1
//! value = 1
//! active = true
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
#[cfg(feature = "toml")]
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub control: ControlConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub sensors: Vec<SensorSpec>,
}

/// Classifier switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlConfig {
    /// Route active sensors reading outside their bounds to the fault list
    #[serde(default = "default_check_faults")]
    pub check_faults: bool,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            check_faults: default_check_faults(),
        }
    }
}

impl ControlConfig {
    /// Switches with fault checking turned off
    pub fn without_fault_check() -> Self {
        Self {
            check_faults: false,
        }
    }
}

fn default_check_faults() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// One configured sensor: inclusive bounds plus its current reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorSpec {
    pub low: i32,
    pub high: i32,
    #[serde(default)]
    pub value: i32,
    #[serde(default)]
    pub active: bool,
}

impl Config {
    #[cfg(feature = "toml")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a TOML document
    #[cfg(feature = "toml")]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        tracing::debug!(
            sensors = config.sensors.len(),
            check_faults = config.control.check_faults,
            "Loaded configuration"
        );
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self::default()
    }

    /// Reject sensors whose low bound is above their high bound.
    pub fn validate(&self) -> Result<()> {
        match self.sensors.iter().find(|spec| spec.low > spec.high) {
            Some(spec) => Err(Error::InvalidBounds {
                low: spec.low,
                high: spec.high,
            }),
            None => Ok(()),
        }
    }
}
