//! Core Kernel - Foundational types for the benefit tracker
//!
//! This crate provides the building blocks shared by the domain crates:
//! - Recurring annual dates (birthdays, anniversaries) and date windows
//! - Clocks that resolve "today" in a configured timezone
//! - Identifiers for externally owned records

pub mod temporal;
pub mod identifiers;
pub mod error;

pub use temporal::{
    AnnualDate, Clock, DateRange, FixedClock, SystemClock, TemporalError, Timezone,
    parse_calendar_date,
};
pub use identifiers::{BenefitId, BrandId, UserId};
pub use error::CoreError;
