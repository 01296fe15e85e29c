//! Benefit report
//!
//! Evaluates every benefit in a [`ReportRequest`] for one member: status on
//! the reference date, badge text in the requested locale, and the result
//! of record validation. Used by the `benefit-report` binary.

pub mod dto;
pub mod error;

use std::io::Read;

use core_kernel::{parse_calendar_date, Clock};
use domain_benefit::{BenefitEngine, BenefitStatus, UserAnchors};
use serde_json::Value;
use tracing::{debug, info};

pub use dto::{BenefitLine, MemberDates, Report, ReportRequest, StatusCounts};
pub use error::ReportError;

/// Reads a JSON request
pub fn read_request(reader: impl Read) -> Result<ReportRequest, ReportError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Builds the report for a request
///
/// Member dates that fail to parse count as absent. An unparseable
/// reference date is rejected, since every line would silently change
/// meaning otherwise.
pub fn build_report<C: Clock>(
    engine: &BenefitEngine<C>,
    request: &ReportRequest,
) -> Result<Report, ReportError> {
    let reference_date = match request.reference_date.as_deref() {
        Some(raw) => parse_calendar_date(raw)
            .map_err(|_| ReportError::InvalidReferenceDate(raw.to_string()))?,
        None => engine.today(),
    };
    let locale = request.locale.as_deref();
    let anchors = UserAnchors::from_raw(
        request.user.date_of_birth.as_deref(),
        request.user.anniversary_date.as_deref(),
    );

    let benefits: Vec<BenefitLine> = request
        .benefits
        .iter()
        .map(|record| evaluate_line(engine, record, &anchors, reference_date, locale))
        .collect();

    let mut counts = StatusCounts::default();
    for line in &benefits {
        match line.status {
            BenefitStatus::Active => counts.active += 1,
            BenefitStatus::Upcoming => counts.upcoming += 1,
            BenefitStatus::Inactive => counts.inactive += 1,
        }
    }

    info!(
        user = request.user.id.as_ref().map(|id| id.as_str()).unwrap_or("<anonymous>"),
        %reference_date,
        benefits = benefits.len(),
        active = counts.active,
        upcoming = counts.upcoming,
        "report built"
    );

    Ok(Report {
        user_id: request.user.id.clone(),
        reference_date,
        locale: locale.unwrap_or(engine.default_locale()).to_string(),
        counts,
        benefits,
    })
}

fn evaluate_line<C: Clock>(
    engine: &BenefitEngine<C>,
    record: &Value,
    anchors: &UserAnchors,
    reference_date: chrono::NaiveDate,
    locale: Option<&str>,
) -> BenefitLine {
    let text_field = |field: &str| record.get(field).and_then(Value::as_str).map(str::to_string);
    let validity_type = text_field("validityType");

    let status = match validity_type.as_deref() {
        Some(raw) => {
            let anchor = engine
                .registry()
                .resolve(raw)
                .and_then(|validity| anchors.anchor_for(validity.anchor));
            engine.status_on(raw, anchor, reference_date)
        }
        None => BenefitStatus::Inactive,
    };

    let validation = engine.validate(record);
    if !validation.is_valid {
        debug!(errors = ?validation.errors, "benefit record failed validation");
    }

    BenefitLine {
        id: text_field("id"),
        title: text_field("title"),
        display_text: engine.display_text(validity_type.as_deref(), locale),
        validity_type,
        status,
        validation,
    }
}
