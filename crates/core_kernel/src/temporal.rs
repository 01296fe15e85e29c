//! Calendar handling for recurring annual dates
//!
//! Benefits are tied to a date that comes back every year, such as a birthday
//! or a wedding anniversary. This module provides:
//! - [`AnnualDate`]: a month/day pair with the year stripped off
//! - [`DateRange`]: an inclusive span of civil dates
//! - [`Clock`]: the source of "today", resolved in a configured [`Timezone`]
//! - [`parse_calendar_date`]: lenient parsing of caller-supplied date strings
//!
//! All arithmetic works on civil dates (`NaiveDate`); times of day never
//! take part in a comparison.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Timezone wrapper used to decide which civil date "today" is
///
/// Wraps chrono_tz::Tz with custom serialization support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Timezone::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Parses an IANA zone name such as `Asia/Jerusalem`
    pub fn parse(name: &str) -> Result<Self, TemporalError> {
        Tz::from_str(name.trim())
            .map(Timezone)
            .map_err(|_| TemporalError::UnknownTimezone(name.to_string()))
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Converts a UTC datetime to the local timezone
    pub fn to_local(&self, utc: DateTime<Utc>) -> DateTime<Tz> {
        utc.with_timezone(&self.0)
    }

    /// Returns the civil date in this timezone at the given instant
    pub fn civil_date(&self, utc: DateTime<Utc>) -> NaiveDate {
        self.to_local(utc).date_naive()
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::UTC)
    }
}

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must not be after end {end}")]
    InvalidPeriod {
        start: String,
        end: String,
    },

    #[error("Invalid annual date: month {month}, day {day}")]
    InvalidAnnualDate {
        month: u32,
        day: u32,
    },

    #[error("Unparseable date: {0:?}")]
    UnparseableDate(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

/// A date that recurs every year
///
/// Only the month and day are kept. February 29 is a valid annual date; it
/// has an exact occurrence only in leap years (see [`AnnualDate::occurrence_in`])
/// and is observed on February 28 otherwise (see [`AnnualDate::observed_in`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnnualDate {
    month: u32,
    day: u32,
}

impl AnnualDate {
    /// Creates an annual date, rejecting month/day pairs that never occur
    pub fn new(month: u32, day: u32) -> Result<Self, TemporalError> {
        // 2000 is a leap year, so Feb 29 passes
        NaiveDate::from_ymd_opt(2000, month, day)
            .map(|_| Self { month, day })
            .ok_or(TemporalError::InvalidAnnualDate { month, day })
    }

    /// Strips the year from a calendar date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Returns true for February 29
    pub fn is_leap_day(&self) -> bool {
        self.month == 2 && self.day == 29
    }

    /// Returns true if `date` has exactly this month and day
    pub fn falls_on(&self, date: NaiveDate) -> bool {
        date.month() == self.month && date.day() == self.day
    }

    /// Returns true if `date` is in this date's month
    pub fn shares_month_with(&self, date: NaiveDate) -> bool {
        date.month() == self.month
    }

    /// The exact occurrence in `year`; `None` for Feb 29 in a common year
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }

    /// The occurrence in `year`, observing Feb 29 on Feb 28 in common years
    pub fn observed_in(&self, year: i32) -> Option<NaiveDate> {
        self.occurrence_in(year).or_else(|| {
            if self.is_leap_day() {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }

    /// Observed occurrences in the year before, the year of, and the year after `reference`
    pub fn observed_around(&self, reference: NaiveDate) -> impl Iterator<Item = NaiveDate> {
        let annual = *self;
        let year = reference.year();
        [year - 1, year, year + 1]
            .into_iter()
            .filter_map(move |y| annual.observed_in(y))
    }

    /// The observed occurrence closest to `reference`
    ///
    /// Considering the adjacent years makes windows that straddle
    /// December 31 work without month-boundary special cases.
    pub fn nearest_occurrence(&self, reference: NaiveDate) -> Option<NaiveDate> {
        self.observed_around(reference)
            .min_by_key(|occurrence| (reference - *occurrence).num_days().abs())
    }

    /// Signed days from the nearest occurrence to `reference`
    ///
    /// Negative when `reference` comes before the occurrence, positive after.
    /// `None` only when no occurrence is representable (at the edges of the
    /// supported calendar range).
    pub fn signed_distance(&self, reference: NaiveDate) -> Option<i64> {
        self.nearest_occurrence(reference)
            .map(|occurrence| (reference - occurrence).num_days())
    }

    /// Days left until this date when `reference` is in the same month
    ///
    /// Uses the raw day numbers, so the result is negative once the day has
    /// passed. `None` when `reference` is in a different month.
    pub fn days_until_in_month(&self, reference: NaiveDate) -> Option<i64> {
        self.shares_month_with(reference)
            .then(|| i64::from(self.day) - i64::from(reference.day()))
    }
}

impl From<NaiveDate> for AnnualDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl fmt::Display for AnnualDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for AnnualDate {
    type Err = TemporalError;

    /// Accepts `MM-DD` or the ISO 8601 recurring form `--MM-DD`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let body = trimmed.strip_prefix("--").unwrap_or(trimmed);
        let (month, day) = body
            .split_once('-')
            .ok_or_else(|| TemporalError::UnparseableDate(s.to_string()))?;
        let month = month
            .parse()
            .map_err(|_| TemporalError::UnparseableDate(s.to_string()))?;
        let day = day
            .parse()
            .map_err(|_| TemporalError::UnparseableDate(s.to_string()))?;
        Self::new(month, day)
    }
}

/// An inclusive range of civil dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if start > end {
            return Err(TemporalError::InvalidPeriod {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// The span from `date` to the Sunday closing its Monday-to-Sunday week
    ///
    /// When `date` is itself a Sunday the span starts on the Saturday before,
    /// so the result always covers a full weekend plus `date`.
    pub fn weekend_of(date: NaiveDate) -> Option<Self> {
        let from_monday = i64::from(date.weekday().num_days_from_monday());
        let saturday = date.checked_add_signed(Duration::days(5 - from_monday))?;
        let sunday = saturday.succ_opt()?;
        Some(Self {
            start: date.min(saturday),
            end: sunday,
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days between start and end (0 for a single-day range)
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// Source of the current civil date
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the system time and converts it to a civil date in a timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    timezone: Timezone,
}

impl SystemClock {
    pub fn new(timezone: Timezone) -> Self {
        Self { timezone }
    }

    pub fn timezone(&self) -> Timezone {
        self.timezone
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        self.timezone.civil_date(Utc::now())
    }
}

/// A clock pinned to one date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Parses a caller-supplied date string into a civil date
///
/// Accepted forms:
/// - `YYYY-MM-DD`
/// - RFC 3339 timestamps (`1990-06-15T00:00:00.000Z`); the date in the
///   timestamp's own offset is used
/// - Naive timestamps (`1990-06-15T08:30:00`, optional fraction)
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate, TemporalError> {
    let trimmed = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.date_naive());
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(timestamp.date());
    }

    Err(TemporalError::UnparseableDate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_annual_date_rejects_impossible_day() {
        assert_eq!(
            AnnualDate::new(4, 31),
            Err(TemporalError::InvalidAnnualDate { month: 4, day: 31 })
        );
        assert!(AnnualDate::new(2, 29).is_ok());
    }

    #[test]
    fn test_leap_day_observed_on_feb_28_in_common_year() {
        let leap = AnnualDate::new(2, 29).unwrap();
        assert_eq!(leap.occurrence_in(2023), None);
        assert_eq!(leap.observed_in(2023), Some(date(2023, 2, 28)));
        assert_eq!(leap.observed_in(2024), Some(date(2024, 2, 29)));
    }

    #[test]
    fn test_signed_distance_wraps_year_end() {
        let anchor = AnnualDate::new(1, 3).unwrap();
        assert_eq!(anchor.signed_distance(date(2023, 12, 27)), Some(-7));
        assert_eq!(anchor.signed_distance(date(2024, 1, 10)), Some(7));
    }

    #[test]
    fn test_weekend_of_weekday() {
        // 2024-06-12 is a Wednesday
        let range = DateRange::weekend_of(date(2024, 6, 12)).unwrap();
        assert_eq!(range.start, date(2024, 6, 12));
        assert_eq!(range.end, date(2024, 6, 16));
    }

    #[test]
    fn test_weekend_of_sunday_includes_saturday() {
        let range = DateRange::weekend_of(date(2024, 6, 16)).unwrap();
        assert_eq!(range.start, date(2024, 6, 15));
        assert_eq!(range.end, date(2024, 6, 16));
    }

    #[test]
    fn test_parse_calendar_date_forms() {
        assert_eq!(parse_calendar_date("1990-06-15"), Ok(date(1990, 6, 15)));
        assert_eq!(
            parse_calendar_date("1990-06-15T00:00:00.000Z"),
            Ok(date(1990, 6, 15))
        );
        assert_eq!(
            parse_calendar_date("1990-06-15T08:30:00"),
            Ok(date(1990, 6, 15))
        );
        assert!(parse_calendar_date("not a date").is_err());
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(date(2024, 6, 22));
        assert_eq!(clock.today(), date(2024, 6, 22));
    }
}
