use crate::component::Component;
use serde::Serialize;

/// Clamp a value into [0.0, 1.0]. NaN maps to 0.0 so the result is always
/// in range; idempotent for any input.
pub fn clamp01(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Per-dimension similarity scores of a record, each in [0,1].
///
/// Serializes with the `s_*` input column names so a record round-trips to
/// the original table schema.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityVector {
    #[serde(rename = "s_price")]
    pub price: f64,
    #[serde(rename = "s_bed")]
    pub bedroom: f64,
    #[serde(rename = "s_bath")]
    pub bathroom: f64,
    #[serde(rename = "s_type")]
    pub property_type: f64,
    #[serde(rename = "s_cond")]
    pub condition: f64,
    #[serde(rename = "s_year")]
    pub year: f64,
    #[serde(rename = "s_size")]
    pub size: f64,
    #[serde(rename = "s_loc")]
    pub location: f64,
}

impl Default for SimilarityVector {
    /// Neutral vector: every component at 0.5.
    fn default() -> Self {
        Self {
            price: 0.5,
            bedroom: 0.5,
            bathroom: 0.5,
            property_type: 0.5,
            condition: 0.5,
            year: 0.5,
            size: 0.5,
            location: 0.5,
        }
    }
}

impl SimilarityVector {
    /// Raw stored score for a component.
    pub fn get(&self, component: Component) -> f64 {
        match component {
            Component::Price => self.price,
            Component::Bedroom => self.bedroom,
            Component::Bathroom => self.bathroom,
            Component::PropertyType => self.property_type,
            Component::Condition => self.condition,
            Component::Year => self.year,
            Component::Size => self.size,
            Component::Location => self.location,
        }
    }

    pub fn set(&mut self, component: Component, value: f64) {
        match component {
            Component::Price => self.price = value,
            Component::Bedroom => self.bedroom = value,
            Component::Bathroom => self.bathroom = value,
            Component::PropertyType => self.property_type = value,
            Component::Condition => self.condition = value,
            Component::Year => self.year = value,
            Component::Size => self.size = value,
            Component::Location => self.location = value,
        }
    }

    /// Defensive read: NaN falls back to the neutral 0.5, everything else
    /// is clamped to [0,1]. Consumers use this so an unnormalized record
    /// still yields scores in range.
    pub fn clamped(&self, component: Component) -> f64 {
        let v = self.get(component);
        if v.is_nan() {
            0.5
        } else {
            clamp01(v)
        }
    }
}

/// One user-property candidate pair with its final score, similarity
/// vector, and budget-compliance gate.
///
/// Records are produced by the normalizer and held read-only; NaN marks an
/// unknown numeric attribute. Serializes with the original table column
/// names. Records enter the system through [`crate::normalize_rows`], not
/// through deserialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    #[serde(rename = "User ID")]
    pub user_id: String,
    #[serde(rename = "Property ID")]
    pub property_id: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Type")]
    pub property_type: String,
    #[serde(rename = "Condition")]
    pub condition: String,
    #[serde(rename = "Bedrooms")]
    pub bedrooms: f64,
    #[serde(rename = "Bathrooms")]
    pub bathrooms: f64,
    #[serde(rename = "Size")]
    pub size: f64,
    #[serde(rename = "Year Built")]
    pub year_built: f64,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "MatchScore")]
    pub match_score: f64,
    #[serde(rename = "g_budget")]
    pub budget_gate: f64,
    #[serde(flatten)]
    pub similarity: SimilarityVector,
}

impl Default for MatchRecord {
    fn default() -> Self {
        Self {
            user_id: "Unknown".to_string(),
            property_id: "Unknown".to_string(),
            location: "Unknown".to_string(),
            property_type: "Unknown".to_string(),
            condition: "Unknown".to_string(),
            bedrooms: f64::NAN,
            bathrooms: f64::NAN,
            size: f64::NAN,
            year_built: f64::NAN,
            price: f64::NAN,
            match_score: f64::NAN,
            budget_gate: f64::NAN,
            similarity: SimilarityVector::default(),
        }
    }
}

/// Render an identifier as canonical integer text where possible.
///
/// `"101.0"` becomes `"101"`, `42` stays `"42"`; anything that does not
/// parse as a finite number is kept verbatim. Guarantees identifiers are
/// stable, comparable strings even when the source mixed numeric and
/// string representations.
pub fn canonical_id(raw: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => (n as i64).to_string(),
        _ => raw.to_string(),
    }
}
