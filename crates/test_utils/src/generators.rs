//! Property-Based Test Generators
//!
//! Proptest strategies for anchors, reference dates and validity type
//! strings, including the malformed ones the engine must tolerate.

use chrono::NaiveDate;
use domain_benefit::registry;
use proptest::prelude::*;

/// Strategy for calendar dates between 1900 and 2100
pub fn civil_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1900i32..=2100, 1u32..=366).prop_filter_map("day out of year", |(year, ordinal)| {
        NaiveDate::from_yo_opt(year, ordinal)
    })
}

/// Strategy for plausible member anchors (birthdays and anniversaries)
pub fn anchor_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1920i32..=2020, 1u32..=366).prop_filter_map("day out of year", |(year, ordinal)| {
        NaiveDate::from_yo_opt(year, ordinal)
    })
}

/// Strategy for reference dates within a few years of today
pub fn reference_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2020i32..=2030, 1u32..=366).prop_filter_map("day out of year", |(year, ordinal)| {
        NaiveDate::from_yo_opt(year, ordinal)
    })
}

/// Strategy for optional anchors, absent about a fifth of the time
pub fn optional_anchor_strategy() -> impl Strategy<Value = Option<NaiveDate>> {
    prop_oneof![
        1 => Just(None),
        4 => anchor_date_strategy().prop_map(Some),
    ]
}

/// Strategy for canonical validity type ids
pub fn canonical_type_strategy() -> impl Strategy<Value = &'static str> {
    let ids: Vec<&'static str> = registry().iter().map(|validity| validity.id).collect();
    proptest::sample::select(ids)
}

/// Strategy for `(legacy, canonical)` alias pairs
pub fn legacy_pair_strategy() -> impl Strategy<Value = (&'static str, &'static str)> {
    let pairs: Vec<(&'static str, &'static str)> = registry().aliases().collect();
    proptest::sample::select(pairs)
}

/// Strategy for any validity type string: canonical, legacy, near-miss or noise
pub fn validity_type_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        canonical_type_strategy().prop_map(str::to_string),
        legacy_pair_strategy().prop_map(|(legacy, _)| legacy.to_string()),
        canonical_type_strategy().prop_map(str::to_uppercase),
        canonical_type_strategy().prop_map(|id| format!(" {id}")),
        Just(String::new()),
        Just("always_valid".to_string()),
        "\\PC{0,24}",
    ]
}

/// Strategy for locale tags, supported or not
pub fn locale_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("en".to_string()),
        Just("he".to_string()),
        Just("he-IL".to_string()),
        Just("en-US".to_string()),
        Just("fr".to_string()),
        Just(String::new()),
        "[a-z]{2}(-[A-Z]{2})?",
        "\\PC{0,8}",
    ]
}
