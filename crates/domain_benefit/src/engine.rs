//! Benefit engine facade
//!
//! Bundles the registry, the display catalog, a [`Clock`] and locale
//! preferences so callers can evaluate benefits "as of today" without
//! threading those dependencies through every call. The free functions in
//! [`crate::eligibility`] and [`crate::upcoming`] remain the primitives.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use core_kernel::FixedClock;
//! use domain_benefit::{BenefitEngine, BenefitStatus};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 22).unwrap();
//! let engine = BenefitEngine::standard().with_clock(FixedClock(today));
//!
//! let birthday = NaiveDate::from_ymd_opt(1990, 6, 15);
//! assert_eq!(engine.status("birthday_week", birthday), BenefitStatus::Active);
//! ```

use chrono::NaiveDate;
use core_kernel::{Clock, SystemClock};
use serde_json::Value;

use crate::benefit::{BenefitStatus, EvaluationContext, UserAnchors, ValidityCarrier};
use crate::config::EngineConfig;
use crate::display::{catalog, DisplayCatalog, FALLBACK_LOCALE};
use crate::eligibility::{filter_active_in, is_active_in};
use crate::error::BenefitError;
use crate::upcoming::{filter_upcoming_in, is_upcoming_in};
use crate::validation::{BenefitValidator, ValidationResult};
use crate::validity::{registry, ValidityRegistry};

/// Evaluates benefits against an injected registry, catalog and clock
#[derive(Debug, Clone)]
pub struct BenefitEngine<C: Clock = SystemClock> {
    registry: &'static ValidityRegistry,
    catalog: &'static DisplayCatalog,
    clock: C,
    default_locale: String,
    fallback_locale: String,
}

impl BenefitEngine<SystemClock> {
    /// Standard registry and catalog, UTC system clock, English labels
    pub fn standard() -> Self {
        Self {
            registry: registry(),
            catalog: catalog(),
            clock: SystemClock::default(),
            default_locale: FALLBACK_LOCALE.to_string(),
            fallback_locale: FALLBACK_LOCALE.to_string(),
        }
    }

    /// Standard tables with the clock and locales taken from configuration
    pub fn from_config(config: &EngineConfig) -> Result<Self, BenefitError> {
        Ok(Self {
            clock: config.clock()?,
            default_locale: config.default_locale.clone(),
            fallback_locale: config.fallback_locale.clone(),
            ..Self::standard()
        })
    }
}

impl Default for BenefitEngine<SystemClock> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<C: Clock> BenefitEngine<C> {
    /// Replaces the clock
    pub fn with_clock<D: Clock>(self, clock: D) -> BenefitEngine<D> {
        BenefitEngine {
            registry: self.registry,
            catalog: self.catalog,
            clock,
            default_locale: self.default_locale,
            fallback_locale: self.fallback_locale,
        }
    }

    /// Sets the locale used when callers pass none
    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    pub fn registry(&self) -> &ValidityRegistry {
        self.registry
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Today according to the engine's clock
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Is the benefit active today
    pub fn is_active(&self, validity_type: &str, anchor: Option<NaiveDate>) -> bool {
        self.is_active_on(validity_type, anchor, self.today())
    }

    pub fn is_active_on(
        &self,
        validity_type: &str,
        anchor: Option<NaiveDate>,
        reference: NaiveDate,
    ) -> bool {
        is_active_in(self.registry, validity_type, anchor, reference)
    }

    /// Is the benefit upcoming today
    pub fn is_upcoming(&self, validity_type: &str, anchor: Option<NaiveDate>) -> bool {
        self.is_upcoming_on(validity_type, anchor, self.today())
    }

    pub fn is_upcoming_on(
        &self,
        validity_type: &str,
        anchor: Option<NaiveDate>,
        reference: NaiveDate,
    ) -> bool {
        is_upcoming_in(self.registry, validity_type, anchor, reference)
    }

    /// Status today
    pub fn status(&self, validity_type: &str, anchor: Option<NaiveDate>) -> BenefitStatus {
        self.status_on(validity_type, anchor, self.today())
    }

    pub fn status_on(
        &self,
        validity_type: &str,
        anchor: Option<NaiveDate>,
        reference: NaiveDate,
    ) -> BenefitStatus {
        BenefitStatus::classify(self.registry, validity_type, anchor, reference)
    }

    /// Status for a per-call context; malformed or incomplete contexts are inactive
    pub fn evaluate(&self, context: &EvaluationContext) -> BenefitStatus {
        if context.is_malformed() {
            return BenefitStatus::Inactive;
        }
        let Some(validity_type) = context.validity_type.as_deref() else {
            return BenefitStatus::Inactive;
        };
        let reference = context.reference_date.unwrap_or_else(|| self.today());
        self.status_on(validity_type, context.anchor_date, reference)
    }

    /// Badge text; `locale` defaults to the engine's default locale
    pub fn display_text(&self, validity_type: Option<&str>, locale: Option<&str>) -> String {
        let requested = locale.unwrap_or(self.default_locale.as_str());
        self.catalog.validity_text(
            validity_type,
            &[
                requested,
                self.default_locale.as_str(),
                self.fallback_locale.as_str(),
            ],
        )
    }

    /// Benefits active today, in input order
    pub fn active_benefits<'a, B: ValidityCarrier>(
        &self,
        benefits: &'a [B],
        anchors: &UserAnchors,
    ) -> Vec<&'a B> {
        filter_active_in(self.registry, benefits, anchors, self.today())
    }

    /// Benefits upcoming today, in input order
    pub fn upcoming_benefits<'a, B: ValidityCarrier>(
        &self,
        benefits: &'a [B],
        anchors: &UserAnchors,
    ) -> Vec<&'a B> {
        filter_upcoming_in(self.registry, benefits, anchors, self.today())
    }

    /// Structural validation against the engine's registry
    pub fn validate(&self, record: &Value) -> ValidationResult {
        BenefitValidator::validate_with(self.registry, record)
    }
}
