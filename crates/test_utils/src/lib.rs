//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! benefit validity test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built anchor dates, reference dates and records
//! - `builders`: Builder patterns for benefit rows and raw records
//! - `assertions`: Custom assertion helpers for eligibility and validation
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
