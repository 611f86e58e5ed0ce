//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use sinhala_translator_provider::BackendError;

/// Core layer error type
///
/// None of these reach a section's readout: a failed submission is recorded in the
/// section's own status. These errors cover programming and configuration faults.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Section index out of range
    #[error("Section not found: {0}")]
    SectionNotFound(usize),

    /// Configuration is well-formed but unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read
    #[error("Config file error: {0}")]
    ConfigIo(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Backend error (converting from library)
    #[error("{0}")]
    Backend(#[from] BackendError),
}

impl CoreError {
    /// Whether the error is expected (user configuration, bad input); used to pick the log level.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidConfig(_) | Self::ConfigIo(_) | Self::SerializationError(_) => true,
            Self::Backend(e) => e.is_expected(),
            Self::SectionNotFound(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
