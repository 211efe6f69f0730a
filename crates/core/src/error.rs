//! Core error types

use thiserror::Error;

/// Core error type for sensor list control
#[derive(Debug, Error)]
pub enum Error {
    /// IO error
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(String),

    /// A sensor was configured with a low bound above its high bound
    #[error("Invalid bounds: low {low} exceeds high {high}")]
    InvalidBounds {
        /// Configured low bound
        low: i32,
        /// Configured high bound
        high: i32,
    },

    /// Report rendering failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result alias used across the workspace
pub type Result<T> = std::result::Result<T, Error>;
