//! Upcoming classification
//!
//! A benefit is "upcoming" when it is not active on the reference date but
//! the UI should still surface it as coming soon. The rule is asymmetric:
//!
//! - month-wide policies are upcoming in every month other than the anchor's
//!   month, with no cutoff
//! - every other policy is upcoming in any other month, and within the
//!   anchor's month only while more than [`UPCOMING_LEAD_DAYS`] days remain
//!   before the anchor day
//!
//! Active benefits are never upcoming.

use chrono::NaiveDate;
use core_kernel::AnnualDate;
use tracing::debug;

use crate::benefit::{UserAnchors, ValidityCarrier};
use crate::validity::{registry, ValidityRegistry, WindowPolicy};

/// Days before the anchor inside its month after which a benefit stops
/// being reported as upcoming
pub const UPCOMING_LEAD_DAYS: i64 = 7;

impl WindowPolicy {
    /// Returns true if this policy reports the benefit as coming soon
    pub fn is_upcoming(&self, anchor: AnnualDate, reference: NaiveDate) -> bool {
        if self.is_active(anchor, reference) {
            return false;
        }

        match self {
            WindowPolicy::EntireMonth => !anchor.shares_month_with(reference),
            _ => match anchor.days_until_in_month(reference) {
                None => true,
                Some(days_until) => days_until > UPCOMING_LEAD_DAYS,
            },
        }
    }
}

/// Returns true if a benefit with `validity_type` is upcoming on `reference`
pub fn is_benefit_upcoming(
    validity_type: &str,
    anchor: Option<NaiveDate>,
    reference: NaiveDate,
) -> bool {
    is_upcoming_in(registry(), validity_type, anchor, reference)
}

/// [`is_benefit_upcoming`] against an injected registry
pub fn is_upcoming_in(
    registry: &ValidityRegistry,
    validity_type: &str,
    anchor: Option<NaiveDate>,
    reference: NaiveDate,
) -> bool {
    let Some(anchor) = anchor else {
        return false;
    };

    match registry.resolve(validity_type) {
        Some(validity) => validity.policy.is_upcoming(AnnualDate::from_date(anchor), reference),
        None => {
            debug!(validity_type, "unknown validity type is never upcoming");
            false
        }
    }
}

/// Keeps the benefits that are upcoming on `reference`, preserving input order
///
/// Each benefit reads the anchor its validity type names. Types outside the
/// registry, such as always-valid offers, never pass.
pub fn filter_upcoming<'a, B: ValidityCarrier>(
    benefits: &'a [B],
    anchors: &UserAnchors,
    reference: NaiveDate,
) -> Vec<&'a B> {
    filter_upcoming_in(registry(), benefits, anchors, reference)
}

/// [`filter_upcoming`] against an injected registry
pub fn filter_upcoming_in<'a, B: ValidityCarrier>(
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
                    is_upcoming_in(
                        registry,
                        validity.id,
                        anchors.anchor_for(validity.anchor),
                        reference,
                    )
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_exact_date_upcoming_in_other_month() {
        let birthday = Some(date(1990, 6, 20));
        assert!(is_benefit_upcoming("birthday_exact_date", birthday, date(2024, 3, 1)));
        assert!(is_benefit_upcoming("birthday_exact_date", birthday, date(2024, 9, 1)));
    }

    #[test]
    fn test_exact_date_same_month_needs_more_than_a_week() {
        let birthday = Some(date(1990, 6, 20));
        assert!(is_benefit_upcoming("birthday_exact_date", birthday, date(2024, 6, 12)));
        assert!(!is_benefit_upcoming("birthday_exact_date", birthday, date(2024, 6, 13)));
        assert!(!is_benefit_upcoming("birthday_exact_date", birthday, date(2024, 6, 25)));
    }

    #[test]
    fn test_active_is_not_upcoming() {
        let birthday = Some(date(1990, 6, 20));
        assert!(!is_benefit_upcoming("birthday_exact_date", birthday, date(2024, 6, 20)));
    }

    #[test]
    fn test_entire_month_upcoming_outside_month() {
        let birthday = Some(date(1990, 6, 20));
        assert!(is_benefit_upcoming("birthday_entire_month", birthday, date(2024, 5, 31)));
        assert!(!is_benefit_upcoming("birthday_entire_month", birthday, date(2024, 6, 1)));
    }

    #[test]
    fn test_unknown_or_missing_inputs() {
        assert!(!is_benefit_upcoming("nope", Some(date(1990, 6, 20)), date(2024, 1, 1)));
        assert!(!is_benefit_upcoming("birthday_exact_date", None, date(2024, 1, 1)));
    }
}
