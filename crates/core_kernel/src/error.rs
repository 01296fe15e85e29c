//! Kernel error type

use thiserror::Error;
use crate::temporal::TemporalError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),

    #[error("{kind} cannot be empty")]
    EmptyIdentifier { kind: &'static str },
}

impl CoreError {
    pub fn empty_identifier(kind: &'static str) -> Self {
        CoreError::EmptyIdentifier { kind }
    }
}
