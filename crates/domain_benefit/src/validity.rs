//! Validity type registry
//!
//! Every benefit row names a validity type as a plain string. The registry
//! turns that string into a [`ValidityType`]: which anchor date it reads and
//! which [`WindowPolicy`] decides when it is active. The standard registry is
//! built once on first access and is never modified afterwards.
//!
//! Resolution order for a raw string:
//! 1. exact match on a canonical identifier
//! 2. match on a legacy alias (see [`crate::alias`])
//! 3. `None` - callers treat this as never active and never upcoming

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::alias::LEGACY_ALIASES;
use crate::display;
use crate::error::BenefitError;

/// Which of the member's dates a validity type is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorKind {
    Birthday,
    Anniversary,
}

/// The rule deciding which dates around the anchor count as active
///
/// Day counts are measured from the anchor's nearest yearly occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WindowPolicy {
    /// Only the anchor's month and day
    ExactDate,
    /// Any day in the anchor's month
    EntireMonth,
    /// Up to `days` before through `days` after the anchor
    Surrounding { days: i64 },
    /// The anchor through the weekend that closes its Monday-to-Sunday week
    ///
    /// Always the weekend after the anchor, never the one before: a Monday
    /// anchor runs Monday through the following Sunday and skips the
    /// Saturday and Sunday just before it. A Sunday anchor also takes in
    /// the Saturday before.
    Weekend,
    /// Up to `days` before the anchor, anchor day included
    DaysBefore { days: i64 },
    /// The anchor day through `days` after it
    DaysAfter { days: i64 },
}

/// A registry entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidityType {
    /// Canonical identifier stored in benefit rows
    pub id: &'static str,
    /// Internal note describing the rule
    pub description: &'static str,
    /// Anchor date the policy reads
    pub anchor: AnchorKind,
    /// Active window rule
    pub policy: WindowPolicy,
}

impl ValidityType {
    /// Localized badge text, falling back to English and then to the id
    pub fn display_text(&self, locale: &str) -> String {
        display::catalog().label(self.id, locale)
    }
}

/// The canonical validity types shipped with the product
pub const STANDARD_TYPES: &[ValidityType] = &[
    ValidityType {
        id: "birthday_exact_date",
        description: "Valid on the birthday itself only",
        anchor: AnchorKind::Birthday,
        policy: WindowPolicy::ExactDate,
    },
    ValidityType {
        id: "birthday_entire_month",
        description: "Valid on every day of the birthday month",
        anchor: AnchorKind::Birthday,
        policy: WindowPolicy::EntireMonth,
    },
    ValidityType {
        id: "birthday_week_before_after",
        description: "Valid from 7 days before to 7 days after the birthday",
        anchor: AnchorKind::Birthday,
        policy: WindowPolicy::Surrounding { days: 7 },
    },
    ValidityType {
        id: "birthday_weekend",
        description: "Valid from the birthday through the weekend closing its week",
        anchor: AnchorKind::Birthday,
        policy: WindowPolicy::Weekend,
    },
    ValidityType {
        id: "birthday_30_days",
        description: "Valid from 30 days before to 30 days after the birthday",
        anchor: AnchorKind::Birthday,
        policy: WindowPolicy::Surrounding { days: 30 },
    },
    ValidityType {
        id: "birthday_7_days_before",
        description: "Valid during the 7 days leading up to the birthday",
        anchor: AnchorKind::Birthday,
        policy: WindowPolicy::DaysBefore { days: 7 },
    },
    ValidityType {
        id: "birthday_7_days_after",
        description: "Valid during the 7 days following the birthday",
        anchor: AnchorKind::Birthday,
        policy: WindowPolicy::DaysAfter { days: 7 },
    },
    ValidityType {
        id: "birthday_3_days_before",
        description: "Valid during the 3 days leading up to the birthday",
        anchor: AnchorKind::Birthday,
        policy: WindowPolicy::DaysBefore { days: 3 },
    },
    ValidityType {
        id: "birthday_3_days_after",
        description: "Valid during the 3 days following the birthday",
        anchor: AnchorKind::Birthday,
        policy: WindowPolicy::DaysAfter { days: 3 },
    },
    ValidityType {
        id: "anniversary_exact_date",
        description: "Valid on the anniversary itself only",
        anchor: AnchorKind::Anniversary,
        policy: WindowPolicy::ExactDate,
    },
    ValidityType {
        id: "anniversary_entire_month",
        description: "Valid on every day of the anniversary month",
        anchor: AnchorKind::Anniversary,
        policy: WindowPolicy::EntireMonth,
    },
    ValidityType {
        id: "anniversary_week_before_after",
        description: "Valid from 7 days before to 7 days after the anniversary",
        anchor: AnchorKind::Anniversary,
        policy: WindowPolicy::Surrounding { days: 7 },
    },
];

static STANDARD_REGISTRY: Lazy<ValidityRegistry> = Lazy::new(ValidityRegistry::standard);

/// The process-wide standard registry
pub fn registry() -> &'static ValidityRegistry {
    &STANDARD_REGISTRY
}

/// Resolves a raw validity type string against the standard registry
pub fn resolve_canonical(raw: Option<&str>) -> Option<&'static ValidityType> {
    raw.and_then(|raw| registry().resolve(raw))
}

/// Immutable catalog of validity types and their legacy aliases
#[derive(Debug, Clone)]
pub struct ValidityRegistry {
    types: Vec<ValidityType>,
    index: HashMap<&'static str, usize>,
    aliases: HashMap<&'static str, &'static str>,
}

impl ValidityRegistry {
    /// Builds a registry, checking that ids are unique and every alias
    /// points at a registered canonical id
    pub fn new(
        types: Vec<ValidityType>,
        aliases: &[(&'static str, &'static str)],
    ) -> Result<Self, BenefitError> {
        let mut seen = HashMap::new();
        for validity in &types {
            if seen.insert(validity.id, ()).is_some() {
                return Err(BenefitError::InvalidRegistry(format!(
                    "duplicate validity type id {}",
                    validity.id
                )));
            }
        }

        for (alias, canonical) in aliases {
            if seen.contains_key(alias) {
                return Err(BenefitError::InvalidRegistry(format!(
                    "alias {} shadows a canonical id",
                    alias
                )));
            }
            if !seen.contains_key(canonical) {
                return Err(BenefitError::InvalidRegistry(format!(
                    "alias {} points at unknown id {}",
                    alias, canonical
                )));
            }
        }

        Ok(Self::from_parts(types, aliases))
    }

    /// The registry every entry point uses unless another one is injected
    pub fn standard() -> Self {
        Self::from_parts(STANDARD_TYPES.to_vec(), LEGACY_ALIASES)
    }

    fn from_parts(types: Vec<ValidityType>, aliases: &[(&'static str, &'static str)]) -> Self {
        let index = types
            .iter()
            .enumerate()
            .map(|(position, validity)| (validity.id, position))
            .collect();
        let aliases = aliases.iter().copied().collect();

        Self {
            types,
            index,
            aliases,
        }
    }

    /// Looks up a canonical id only
    pub fn get(&self, id: &str) -> Option<&ValidityType> {
        self.index.get(id).map(|&position| &self.types[position])
    }

    /// Resolves a canonical id or a legacy alias
    pub fn resolve(&self, raw: &str) -> Option<&ValidityType> {
        self.get(raw)
            .or_else(|| self.aliases.get(raw).and_then(|canonical| self.get(canonical)))
    }

    /// Like [`Self::resolve`] but reports unknown input as an error
    pub fn require(&self, raw: &str) -> Result<&ValidityType, BenefitError> {
        self.resolve(raw)
            .ok_or_else(|| BenefitError::unknown_type(Some(raw)))
    }

    /// Returns the canonical id for a canonical id or a legacy alias
    pub fn canonical_id(&self, raw: &str) -> Option<&'static str> {
        self.resolve(raw).map(|validity| validity.id)
    }

    /// Returns true if `raw` is a legacy alias rather than a canonical id
    pub fn is_legacy(&self, raw: &str) -> bool {
        self.aliases.contains_key(raw)
    }

    /// Iterates over the canonical entries in registration order
    pub fn iter(&self) -> impl Iterator<Item = &ValidityType> {
        self.types.iter()
    }

    /// Iterates over `(legacy, canonical)` alias pairs
    pub fn aliases(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.aliases.iter().map(|(alias, canonical)| (*alias, *canonical))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for ValidityRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
