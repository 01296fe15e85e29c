//! Legacy validity type aliases
//!
//! Early versions of the product stored short identifiers such as
//! `birthday_date`. Rows carrying them are never migrated; the registry maps
//! them onto canonical identifiers at evaluation time instead.

/// Deprecated identifier paired with the canonical identifier it stands for
pub const LEGACY_ALIASES: &[(&str, &str)] = &[
    ("birthday_date", "birthday_exact_date"),
    ("birthday_month", "birthday_entire_month"),
    ("birthday_week", "birthday_week_before_after"),
    ("anniversary_date", "anniversary_exact_date"),
    ("anniversary_month", "anniversary_entire_month"),
    ("anniversary_week", "anniversary_week_before_after"),
];
