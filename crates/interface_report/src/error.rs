//! Report error handling

use domain_benefit::BenefitError;
use thiserror::Error;

/// Report error types
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to read request: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed request: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid reference date: {0}")]
    InvalidReferenceDate(String),

    #[error(transparent)]
    Benefit(#[from] BenefitError),
}
