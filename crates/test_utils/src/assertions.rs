//! Custom Test Assertions
//!
//! Assertion helpers that name the validity type, anchor and reference date
//! in their failure messages.

use chrono::NaiveDate;
use domain_benefit::{is_benefit_active, is_benefit_upcoming, ValidationResult};

/// Asserts that a benefit is active on exactly the given days of `days`
///
/// # Panics
///
/// Panics on the first day whose activity disagrees with `expected`
pub fn assert_active_days(
    validity_type: &str,
    anchor: NaiveDate,
    days: &[NaiveDate],
    expected: &[NaiveDate],
) {
    for day in days {
        let active = is_benefit_active(validity_type, Some(anchor), *day);
        let wanted = expected.contains(day);
        assert_eq!(
            active, wanted,
            "{validity_type} anchored on {anchor}: expected active={wanted} on {day}"
        );
    }
}

/// Asserts that a legacy alias and its canonical type agree on activity and
/// upcoming status for every day in `days`
pub fn assert_same_behavior(
    legacy: &str,
    canonical: &str,
    anchor: Option<NaiveDate>,
    days: &[NaiveDate],
) {
    for day in days {
        assert_eq!(
            is_benefit_active(legacy, anchor, *day),
            is_benefit_active(canonical, anchor, *day),
            "active differs for {legacy}/{canonical} anchor={anchor:?} on {day}"
        );
        assert_eq!(
            is_benefit_upcoming(legacy, anchor, *day),
            is_benefit_upcoming(canonical, anchor, *day),
            "upcoming differs for {legacy}/{canonical} anchor={anchor:?} on {day}"
        );
    }
}

/// Asserts that a validation result is valid
pub fn assert_valid(result: &ValidationResult) {
    assert!(
        result.is_valid,
        "Expected valid record, got errors: {:?}",
        result.errors
    );
}

/// Asserts that a validation result is invalid and carries `error`
pub fn assert_invalid_with(result: &ValidationResult, error: &str) {
    assert!(!result.is_valid, "Expected invalid record");
    assert!(
        result.errors.iter().any(|e| e == error),
        "Expected error {:?}, got {:?}",
        error,
        result.errors
    );
}
