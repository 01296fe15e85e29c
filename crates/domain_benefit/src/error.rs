//! Benefit domain errors
//!
//! The evaluation functions never fail; these errors surface only from the
//! strict entry points (configuration loading, registry lookups that demand
//! a known type, and converting a failed validation into a `Result`).

use core_kernel::TemporalError;
use thiserror::Error;

/// Errors that can occur in the benefit domain
#[derive(Debug, Error)]
pub enum BenefitError {
    /// The validity type string is neither canonical nor a known legacy alias
    #[error("Unknown validity type: {0}")]
    UnknownValidityType(String),

    /// A registry was assembled with conflicting or dangling entries
    #[error("Invalid validity registry: {0}")]
    InvalidRegistry(String),

    /// Benefit record failed structural validation
    #[error("Benefit validation failed: {0}")]
    ValidationFailed(String),

    /// Date or timezone handling failed
    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),
}

impl BenefitError {
    /// Creates an UnknownValidityType error, rendering absent input as `<none>`
    pub fn unknown_type(raw: Option<&str>) -> Self {
        BenefitError::UnknownValidityType(raw.unwrap_or("<none>").to_string())
    }

    /// Creates a ValidationFailed error from collected messages
    pub fn validation_failed(errors: Vec<String>) -> Self {
        BenefitError::ValidationFailed(errors.join("; "))
    }
}
