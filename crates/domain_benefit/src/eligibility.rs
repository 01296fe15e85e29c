//! Eligibility evaluation
//!
//! Decides whether a benefit is active on a reference date. Every policy
//! compares the reference date against the anchor's month and day; the
//! anchor's year never matters. Absent anchors and unknown validity types
//! are never active.

use chrono::NaiveDate;
use core_kernel::{AnnualDate, DateRange};
use tracing::debug;

use crate::benefit::{UserAnchors, ValidityCarrier};
use crate::validity::{registry, ValidityRegistry, WindowPolicy};

impl WindowPolicy {
    /// Returns true if `reference` falls inside this policy's active window
    pub fn is_active(&self, anchor: AnnualDate, reference: NaiveDate) -> bool {
        match *self {
            WindowPolicy::ExactDate => anchor.falls_on(reference),
            WindowPolicy::EntireMonth => anchor.shares_month_with(reference),
            WindowPolicy::Surrounding { days } => within_distance(anchor, reference, -days, days),
            WindowPolicy::DaysBefore { days } => within_distance(anchor, reference, -days, 0),
            WindowPolicy::DaysAfter { days } => within_distance(anchor, reference, 0, days),
            WindowPolicy::Weekend => anchor
                .observed_around(reference)
                .filter_map(DateRange::weekend_of)
                .any(|window| window.contains(reference)),
        }
    }
}

fn within_distance(anchor: AnnualDate, reference: NaiveDate, from: i64, to: i64) -> bool {
    anchor
        .signed_distance(reference)
        .is_some_and(|distance| (from..=to).contains(&distance))
}

/// Returns true if a benefit with `validity_type` is active on `reference`
///
/// Uses the standard registry. `anchor` is the member's birthday or
/// anniversary, whichever the validity type reads; callers holding both
/// dates can use [`filter_active`] or [`UserAnchors::anchor_for`].
pub fn is_benefit_active(validity_type: &str, anchor: Option<NaiveDate>, reference: NaiveDate) -> bool {
    is_active_in(registry(), validity_type, anchor, reference)
}

/// [`is_benefit_active`] against an injected registry
pub fn is_active_in(
    registry: &ValidityRegistry,
    validity_type: &str,
    anchor: Option<NaiveDate>,
    reference: NaiveDate,
) -> bool {
    let Some(anchor) = anchor else {
        return false;
    };

    match registry.resolve(validity_type) {
        Some(validity) => validity.policy.is_active(AnnualDate::from_date(anchor), reference),
        None => {
            debug!(validity_type, "unknown validity type treated as inactive");
            false
        }
    }
}

/// Keeps the benefits active on `reference`, preserving input order
pub fn filter_active<'a, B: ValidityCarrier>(
    benefits: &'a [B],
    anchors: &UserAnchors,
    reference: NaiveDate,
) -> Vec<&'a B> {
    filter_active_in(registry(), benefits, anchors, reference)
}

/// [`filter_active`] against an injected registry
pub fn filter_active_in<'a, B: ValidityCarrier>(
    registry: &ValidityRegistry,
    benefits: &'a [B],
    anchors: &UserAnchors,
    reference: NaiveDate,
) -> Vec<&'a B> {
    benefits
        .iter()
        .filter(|benefit| {
            registry
                .resolve(benefit.validity_type())
                .is_some_and(|validity| {
                    is_active_in(
                        registry,
                        validity.id,
                        anchors.anchor_for(validity.anchor),
                        reference,
                    )
                })
        })
        .collect()
}
