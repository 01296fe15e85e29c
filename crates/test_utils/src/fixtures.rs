//! Pre-built Test Fixtures
//!
//! Ready-to-use dates and records for benefit tests. Every date here is
//! fixed so failures reproduce regardless of when the suite runs.

use chrono::NaiveDate;
use core_kernel::{BenefitId, BrandId};
use domain_benefit::UserAnchors;
use serde_json::{json, Value};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Fixture for member anchor dates
pub struct AnchorFixtures;

impl AnchorFixtures {
    /// Mid-month birthday (June 15, 1990)
    pub fn birthday() -> NaiveDate {
        ymd(1990, 6, 15)
    }

    /// Leap-day birthday (February 29, 1992)
    pub fn leap_day_birthday() -> NaiveDate {
        ymd(1992, 2, 29)
    }

    /// Birthday just after New Year (January 3, 1990)
    pub fn new_year_birthday() -> NaiveDate {
        ymd(1990, 1, 3)
    }

    /// Birthday on the last day of the year (December 31, 1985)
    pub fn new_years_eve_birthday() -> NaiveDate {
        ymd(1985, 12, 31)
    }

    /// Wedding anniversary (September 1, 2015)
    pub fn anniversary() -> NaiveDate {
        ymd(2015, 9, 1)
    }

    /// Member with both anchors set
    pub fn member() -> UserAnchors {
        UserAnchors::new(Some(Self::birthday()), Some(Self::anniversary()))
    }

    /// Member who never entered an anniversary
    pub fn member_without_anniversary() -> UserAnchors {
        UserAnchors::with_birthday(Self::birthday())
    }

    /// Every anchor above, for exhaustive sweeps
    pub fn all() -> Vec<NaiveDate> {
        vec![
            Self::birthday(),
            Self::leap_day_birthday(),
            Self::new_year_birthday(),
            Self::new_years_eve_birthday(),
            Self::anniversary(),
        ]
    }
}

/// Fixture for reference dates
pub struct ReferenceFixtures;

impl ReferenceFixtures {
    /// A week after the standard birthday (Saturday, June 22, 2024)
    pub fn week_after_birthday() -> NaiveDate {
        ymd(2024, 6, 22)
    }

    /// Leap day in a leap year
    pub fn leap_day() -> NaiveDate {
        ymd(2024, 2, 29)
    }

    /// February 28 in a common year
    pub fn common_year_feb_28() -> NaiveDate {
        ymd(2023, 2, 28)
    }

    /// Days from `start` through `end` inclusive
    pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        start.iter_days().take_while(|day| *day <= end).collect()
    }

    /// Every day of 2024
    pub fn year_2024() -> Vec<NaiveDate> {
        Self::days_between(ymd(2024, 1, 1), ymd(2024, 12, 31))
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Deterministic benefit id
    pub fn benefit_id() -> BenefitId {
        BenefitId::new("ben_fixture_1").unwrap()
    }

    /// Deterministic brand id
    pub fn brand_id() -> BrandId {
        BrandId::new("brand_fixture_1").unwrap()
    }
}

/// Fixture for raw benefit records as submitted to validation
pub struct RecordFixtures;

impl RecordFixtures {
    /// A record that passes validation with no warnings
    pub fn valid() -> Value {
        json!({
            "title": "Birthday dessert",
            "description": "A free dessert with any main course",
            "brandId": IdFixtures::brand_id().as_str(),
            "redemptionMethod": "Show this screen to your server",
            "validityType": "birthday_entire_month",
            "validityDuration": 30
        })
    }

    /// A record using a legacy validity type
    pub fn legacy() -> Value {
        let mut record = Self::valid();
        record["validityType"] = json!("birthday_week");
        record
    }

    /// An empty record
    pub fn empty() -> Value {
        json!({})
    }
}
