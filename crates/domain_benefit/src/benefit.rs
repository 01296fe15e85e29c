//! Benefit records, member anchor dates, and evaluation inputs
//!
//! Benefit rows and member dates belong to the persistence layer; this
//! module only describes the fields the engine reads.

use chrono::NaiveDate;
use core_kernel::{parse_calendar_date, BenefitId, BrandId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::eligibility::is_active_in;
use crate::upcoming::is_upcoming_in;
use crate::validity::{registry, AnchorKind, ValidityRegistry, ValidityType};

/// Anything that carries a raw validity type string
pub trait ValidityCarrier {
    fn validity_type(&self) -> &str;
}

impl ValidityCarrier for &str {
    fn validity_type(&self) -> &str {
        self
    }
}

impl ValidityCarrier for String {
    fn validity_type(&self) -> &str {
        self
    }
}

/// A benefit row as loaded from storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Benefit {
    pub id: BenefitId,
    pub brand_id: BrandId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub redemption_method: String,
    /// Canonical id, legacy alias, or anything else the row happens to hold
    pub validity_type: String,
    /// Days; informational only, the window policy decides activity
    #[serde(default)]
    pub validity_duration: Option<i64>,
}

impl Benefit {
    /// The registry entry for this row's validity type, if it resolves
    pub fn validity(&self) -> Option<&'static ValidityType> {
        registry().resolve(&self.validity_type)
    }

    /// The anchor kind this benefit is measured against
    pub fn anchor_kind(&self) -> Option<AnchorKind> {
        self.validity().map(|validity| validity.anchor)
    }
}

impl ValidityCarrier for Benefit {
    fn validity_type(&self) -> &str {
        &self.validity_type
    }
}

/// The member dates benefits are anchored to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAnchors {
    #[serde(default, rename = "dateOfBirth")]
    pub birthday: Option<NaiveDate>,
    #[serde(default, rename = "anniversaryDate")]
    pub anniversary: Option<NaiveDate>,
}

impl UserAnchors {
    pub fn new(birthday: Option<NaiveDate>, anniversary: Option<NaiveDate>) -> Self {
        Self {
            birthday,
            anniversary,
        }
    }

    pub fn with_birthday(birthday: NaiveDate) -> Self {
        Self::new(Some(birthday), None)
    }

    /// Parses raw stored values; anything unparseable counts as absent
    pub fn from_raw(birthday: Option<&str>, anniversary: Option<&str>) -> Self {
        Self::new(lenient_date(birthday), lenient_date(anniversary))
    }

    /// The date a validity type of `kind` is measured against
    pub fn anchor_for(&self, kind: AnchorKind) -> Option<NaiveDate> {
        match kind {
            AnchorKind::Birthday => self.birthday,
            AnchorKind::Anniversary => self.anniversary,
        }
    }
}

fn lenient_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?;
    match parse_calendar_date(raw) {
        Ok(date) => Some(date),
        Err(err) => {
            debug!(error = %err, "ignoring unparseable date");
            None
        }
    }
}

/// Where a benefit stands on a reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitStatus {
    Active,
    Upcoming,
    Inactive,
}

impl BenefitStatus {
    /// Classifies a benefit against an injected registry
    pub fn classify(
        registry: &ValidityRegistry,
        validity_type: &str,
        anchor: Option<NaiveDate>,
        reference: NaiveDate,
    ) -> Self {
        if is_active_in(registry, validity_type, anchor, reference) {
            BenefitStatus::Active
        } else if is_upcoming_in(registry, validity_type, anchor, reference) {
            BenefitStatus::Upcoming
        } else {
            BenefitStatus::Inactive
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, BenefitStatus::Active)
    }

    pub fn is_upcoming(&self) -> bool {
        matches!(self, BenefitStatus::Upcoming)
    }
}

/// Per-call evaluation input
///
/// Built fresh for every evaluation. A missing reference date means "today"
/// as reported by the evaluating engine's clock. Raw inputs that fail to
/// parse make the context evaluate as inactive instead of raising.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationContext {
    pub validity_type: Option<String>,
    pub anchor_date: Option<NaiveDate>,
    pub reference_date: Option<NaiveDate>,
    malformed: bool,
}

impl EvaluationContext {
    pub fn new(validity_type: impl Into<String>, anchor_date: Option<NaiveDate>) -> Self {
        Self {
            validity_type: Some(validity_type.into()),
            anchor_date,
            reference_date: None,
            malformed: false,
        }
    }

    /// Pins the reference date instead of using today
    pub fn on(mut self, reference_date: NaiveDate) -> Self {
        self.reference_date = Some(reference_date);
        self
    }

    /// Builds a context from untyped caller input
    ///
    /// An unparseable anchor counts as absent. An unparseable reference date
    /// marks the whole context malformed, so it never evaluates as active or
    /// upcoming.
    pub fn from_raw(
        validity_type: Option<&str>,
        anchor_date: Option<&str>,
        reference_date: Option<&str>,
    ) -> Self {
        let mut malformed = false;
        let reference_date = match reference_date.map(parse_calendar_date) {
            None => None,
            Some(Ok(date)) => Some(date),
            Some(Err(err)) => {
                debug!(error = %err, "reference date rejected");
                malformed = true;
                None
            }
        };

        Self {
            validity_type: validity_type.map(str::to_string),
            anchor_date: lenient_date(anchor_date),
            reference_date,
            malformed,
        }
    }

    /// Returns true if a raw reference date failed to parse
    pub fn is_malformed(&self) -> bool {
        self.malformed
    }
}
