//! Core functionality for sensor list control.
//!
//! This crate provides the error type, configuration model and logging
//! setup shared by the sensor list crates and their tooling.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{Config, ControlConfig, LoggingConfig, SensorSpec};
pub use error::{Error, Result};
