//! Test Data Builders
//!
//! Builder patterns for benefit rows and raw records. Tests set only the
//! fields they care about; text fields default to generated filler.

use core_kernel::{BenefitId, BrandId};
use domain_benefit::Benefit;
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use serde_json::{json, Map, Value};

use crate::fixtures::IdFixtures;

/// Builder for [`Benefit`] rows
pub struct BenefitBuilder {
    id: BenefitId,
    brand_id: BrandId,
    title: String,
    description: String,
    redemption_method: String,
    validity_type: String,
    validity_duration: Option<i64>,
}

impl Default for BenefitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BenefitBuilder {
    /// Creates a new builder with a birthday-month benefit
    pub fn new() -> Self {
        let company: String = CompanyName().fake();
        Self {
            id: BenefitId::generate(),
            brand_id: IdFixtures::brand_id(),
            title: format!("{company} birthday treat"),
            description: Sentence(4..10).fake(),
            redemption_method: Sentence(3..6).fake(),
            validity_type: "birthday_entire_month".to_string(),
            validity_duration: None,
        }
    }

    /// Sets the id
    pub fn with_id(mut self, id: BenefitId) -> Self {
        self.id = id;
        self
    }

    /// Sets the brand
    pub fn with_brand_id(mut self, brand_id: BrandId) -> Self {
        self.brand_id = brand_id;
        self
    }

    /// Sets the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the raw validity type
    pub fn with_validity_type(mut self, validity_type: impl Into<String>) -> Self {
        self.validity_type = validity_type.into();
        self
    }

    /// Sets the duration in days
    pub fn with_duration(mut self, days: i64) -> Self {
        self.validity_duration = Some(days);
        self
    }

    /// Builds the row
    pub fn build(self) -> Benefit {
        Benefit {
            id: self.id,
            brand_id: self.brand_id,
            title: self.title,
            description: self.description,
            redemption_method: self.redemption_method,
            validity_type: self.validity_type,
            validity_duration: self.validity_duration,
        }
    }

    /// Builds one row per validity type, in the given order
    pub fn many(validity_types: &[&str]) -> Vec<Benefit> {
        validity_types
            .iter()
            .map(|validity_type| Self::new().with_validity_type(*validity_type).build())
            .collect()
    }
}

/// Builder for untyped records as they arrive at validation
pub struct RecordBuilder {
    fields: Map<String, Value>,
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordBuilder {
    /// Creates a builder holding a fully valid record
    pub fn new() -> Self {
        let benefit = BenefitBuilder::new().build();
        let mut fields = Map::new();
        fields.insert("title".into(), json!(benefit.title));
        fields.insert("description".into(), json!(benefit.description));
        fields.insert("brandId".into(), json!(benefit.brand_id.as_str()));
        fields.insert("redemptionMethod".into(), json!(benefit.redemption_method));
        fields.insert("validityType".into(), json!(benefit.validity_type));
        Self { fields }
    }

    /// Sets a field to any JSON value
    pub fn with(mut self, field: &str, value: Value) -> Self {
        self.fields.insert(field.to_string(), value);
        self
    }

    /// Removes a field entirely
    pub fn without(mut self, field: &str) -> Self {
        self.fields.remove(field);
        self
    }

    /// Builds the record
    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}
