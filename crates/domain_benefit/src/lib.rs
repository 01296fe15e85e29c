//! Benefit Validity Domain
//!
//! Decides, for a calendar date, whether a benefit tied to a recurring annual
//! anchor (a member's birthday or anniversary) is active, coming up, or
//! neither. Everything here is a pure function of its arguments plus the
//! read-only validity registry; nothing performs I/O
//! apart from reading the clock in [`engine`].
//!
//! # Layers
//!
//! - **Registry** ([`validity`]): the fixed catalog of validity types and the
//!   window policy each one applies
//! - **Legacy aliases** ([`alias`]): old short-form identifiers that stored
//!   rows may still carry
//! - **Eligibility** ([`eligibility`]): is a benefit active on a date
//! - **Upcoming** ([`upcoming`]): will a benefit become active later
//! - **Validation** ([`validation`]): structural checks before a benefit row
//!   is persisted
//! - **Display** ([`display`]): localized badge text per validity type
//! - **Engine** ([`engine`]): the above bundled with a clock and locale
//!   preferences, configured through [`config`]
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use domain_benefit::{is_benefit_active, is_benefit_upcoming};
//!
//! let birthday = NaiveDate::from_ymd_opt(1990, 6, 15);
//! let reference = NaiveDate::from_ymd_opt(2024, 6, 22).unwrap();
//!
//! assert!(is_benefit_active("birthday_week_before_after", birthday, reference));
//! assert!(!is_benefit_upcoming("birthday_week_before_after", birthday, reference));
//! ```

pub mod alias;
pub mod benefit;
pub mod config;
pub mod display;
pub mod eligibility;
pub mod engine;
pub mod error;
pub mod upcoming;
pub mod validation;
pub mod validity;

pub use benefit::{Benefit, BenefitStatus, EvaluationContext, UserAnchors, ValidityCarrier};
pub use config::EngineConfig;
pub use display::{get_validity_display_text, DisplayCatalog};
pub use eligibility::{filter_active, is_benefit_active};
pub use engine::BenefitEngine;
pub use error::BenefitError;
pub use upcoming::{filter_upcoming, is_benefit_upcoming};
pub use validation::{validate_benefit_data, BenefitValidator, ValidationResult};
pub use validity::{registry, resolve_canonical, AnchorKind, ValidityRegistry, ValidityType, WindowPolicy};
