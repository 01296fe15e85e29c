//! Benefit record validation
//!
//! Structural checks run on a benefit record before the persistence layer
//! stores it. The record arrives as untyped JSON from a form or API body, so
//! field presence and field types are both checked here.
//!
//! # Validation Rules
//!
//! - `title`, `description`, `brandId`, `redemptionMethod` must be non-empty strings
//! - `validityType` must be a canonical validity type or a legacy alias
//! - `validityDuration`, when present and not null, must be a number
//!
//! Every rule runs; a record with several problems reports all of them.
//! Warnings never affect `is_valid`.

use serde::Serialize;
use serde_json::Value;

use crate::error::BenefitError;
use crate::validity::{registry, ValidityRegistry};

/// Result of benefit validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Whether the record may be persisted
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
    /// List of validation warnings (non-fatal issues)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Creates a failed validation result with errors
    pub fn fail(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Adds a warning to the result
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Merges another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Converts into a `Result`, keeping the warnings on success
    pub fn into_result(self) -> Result<Vec<String>, BenefitError> {
        if self.is_valid {
            Ok(self.warnings)
        } else {
            Err(BenefitError::validation_failed(self.errors))
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for benefit records
pub struct BenefitValidator;

impl BenefitValidator {
    /// Validates a record against the standard registry
    pub fn validate(record: &Value) -> ValidationResult {
        Self::validate_with(registry(), record)
    }

    /// Validates a record against an injected registry
    pub fn validate_with(registry: &ValidityRegistry, record: &Value) -> ValidationResult {
        let mut result = ValidationResult::ok();

        result.merge(Self::require_text(record, "title", "Title is required"));
        result.merge(Self::require_text(record, "description", "Description is required"));
        result.merge(Self::require_text(record, "brandId", "Brand ID is required"));
        result.merge(Self::require_text(
            record,
            "redemptionMethod",
            "Redemption method is required",
        ));
        result.merge(Self::validate_validity_type(registry, record));
        result.merge(Self::validate_duration(record));

        result
    }

    fn require_text(record: &Value, field: &str, message: &str) -> ValidationResult {
        let present = record
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|text| !text.trim().is_empty());
        if present {
            ValidationResult::ok()
        } else {
            ValidationResult::fail(vec![message.to_string()])
        }
    }

    /// An absent field has no raw value to quote and is reported as
    /// `<missing>`; any other non-string value is quoted as JSON (`null`, `7`)
    fn validate_validity_type(registry: &ValidityRegistry, record: &Value) -> ValidationResult {
        let mut result = ValidationResult::ok();
        match record.get("validityType") {
            Some(Value::String(raw)) => match registry.resolve(raw) {
                Some(validity) => {
                    if registry.is_legacy(raw) {
                        result.add_warning(format!(
                            "Validity type {} is deprecated; use {}",
                            raw, validity.id
                        ));
                    }
                }
                None => result.add_error(format!("Invalid validity type: {}", raw)),
            },
            Some(other) => result.add_error(format!("Invalid validity type: {}", other)),
            None => result.add_error("Invalid validity type: <missing>"),
        }
        result
    }

    fn validate_duration(record: &Value) -> ValidationResult {
        let mut result = ValidationResult::ok();
        match record.get("validityDuration") {
            None | Some(Value::Null) => {}
            Some(Value::Number(number)) => {
                let days = number.as_f64().unwrap_or_default();
                if days <= 0.0 {
                    result.add_warning("Validity duration should be a positive number of days");
                } else if days.fract() != 0.0 {
                    result.add_warning("Validity duration should be a whole number of days");
                }
            }
            Some(_) => result.add_error("Validity duration must be a number"),
        }
        result
    }
}

/// Validates a benefit record before it is persisted
pub fn validate_benefit_data(record: &Value) -> ValidationResult {
    BenefitValidator::validate(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_record() -> Value {
        json!({
            "title": "Free coffee",
            "description": "One free coffee of any size",
            "brandId": "brand_1",
            "redemptionMethod": "Show the app at the counter",
            "validityType": "birthday_exact_date",
            "validityDuration": 1
        })
    }

    #[test]
    fn test_valid_record() {
        let result = validate_benefit_data(&valid_record());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_whitespace_title_is_missing() {
        let mut record = valid_record();
        record["title"] = json!("   ");
        let result = validate_benefit_data(&record);
        assert_eq!(result.errors, vec!["Title is required".to_string()]);
    }

    #[test]
    fn test_non_object_record_reports_everything() {
        let result = validate_benefit_data(&Value::Null);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 5);
    }

    #[test]
    fn test_missing_and_null_type_messages() {
        let mut record = valid_record();
        record.as_object_mut().unwrap().remove("validityType");
        assert_eq!(
            validate_benefit_data(&record).errors,
            vec!["Invalid validity type: <missing>".to_string()]
        );

        record["validityType"] = Value::Null;
        assert_eq!(
            validate_benefit_data(&record).errors,
            vec!["Invalid validity type: null".to_string()]
        );
    }

    #[test]
    fn test_merge_keeps_rule_order_and_warnings() {
        let mut result = ValidationResult::ok();
        let mut legacy = ValidationResult::ok();
        legacy.add_warning("deprecated");
        result.merge(legacy);
        assert!(result.is_valid);

        result.merge(ValidationResult::fail(vec!["first".into()]));
        result.merge(ValidationResult::fail(vec!["second".into()]));
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["first".to_string(), "second".to_string()]);
        assert_eq!(result.warnings, vec!["deprecated".to_string()]);
    }

    #[test]
    fn test_into_result() {
        assert!(validate_benefit_data(&valid_record()).into_result().is_ok());
        let err = validate_benefit_data(&json!({})).into_result().unwrap_err();
        assert!(err.to_string().contains("Title is required"));
    }
}
