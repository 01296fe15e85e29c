//! Report DTOs

use chrono::NaiveDate;
use core_kernel::UserId;
use domain_benefit::{BenefitStatus, ValidationResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A member and the benefits to evaluate for them
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    /// `YYYY-MM-DD` or RFC 3339; today in the configured timezone when absent
    #[serde(default)]
    pub reference_date: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub user: MemberDates,
    /// Benefit rows as stored, validated as-is
    #[serde(default)]
    pub benefits: Vec<Value>,
}

/// Raw member dates as stored on the profile
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDates {
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub anniversary_date: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub validity_type: Option<String>,
    pub status: BenefitStatus,
    pub display_text: String,
    pub validation: ValidationResult,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub active: usize,
    pub upcoming: usize,
    pub inactive: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    pub reference_date: NaiveDate,
    pub locale: String,
    pub counts: StatusCounts,
    pub benefits: Vec<BenefitLine>,
}
