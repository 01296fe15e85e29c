//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::temporal::TemporalError;
use core_kernel::{AnnualDate, BenefitId};

#[test]
fn test_empty_identifier_names_the_kind() {
    let error = BenefitId::new("   ").unwrap_err();
    assert!(matches!(error, CoreError::EmptyIdentifier { kind: "BenefitId" }));
    assert_eq!(error.to_string(), "BenefitId cannot be empty");
}

#[test]
fn test_core_error_from_temporal_error() {
    let temporal = TemporalError::UnknownTimezone("Nowhere/City".to_string());
    let core_error: CoreError = temporal.into();

    assert!(matches!(core_error, CoreError::Temporal(_)));
    assert!(core_error.to_string().contains("Nowhere/City"));
}

#[test]
fn test_invalid_annual_date_converts() {
    let core_error: CoreError = AnnualDate::new(2, 30).unwrap_err().into();
    assert!(matches!(
        core_error,
        CoreError::Temporal(TemporalError::InvalidAnnualDate { month: 2, day: 30 })
    ));
}
