//! Normalization of raw tabular rows into canonical [`MatchRecord`]s.
//!
//! The normalizer is total: whatever shape the raw table has, it produces a
//! usable record set. Missing or unparseable numeric cells become NaN,
//! missing similarity scores become the neutral 0.5 (then clamped to
//! [0,1]), missing categoricals become `"Unknown"`, and identifiers are
//! coerced to canonical integer text where possible. The input is never
//! mutated.

use crate::component::Component;
use crate::record::{canonical_id, clamp01, MatchRecord, SimilarityVector};
use serde_json::Value;

/// Normalize a raw table (one JSON object per row) into canonical records.
pub fn normalize_rows(rows: &[Value]) -> Vec<MatchRecord> {
    rows.iter().map(normalize_row).collect()
}

/// Normalize a single raw row. A non-object row yields an all-defaults
/// record rather than an error.
pub fn normalize_row(row: &Value) -> MatchRecord {
    let mut similarity = SimilarityVector::default();
    for component in Component::ALL {
        similarity.set(component, coerce_similarity(row.get(component.column())));
    }

    MatchRecord {
        user_id: coerce_id(row.get("User ID")),
        property_id: coerce_id(row.get("Property ID")),
        location: coerce_text(row.get("Location")),
        property_type: coerce_text(row.get("Type")),
        condition: coerce_text(row.get("Condition")),
        bedrooms: coerce_number(row.get("Bedrooms")),
        bathrooms: coerce_number(row.get("Bathrooms")),
        size: coerce_number(row.get("Size")),
        year_built: coerce_number(row.get("Year Built")),
        price: coerce_number(row.get("Price")),
        match_score: coerce_number(row.get("MatchScore")),
        budget_gate: coerce_number(row.get("g_budget")),
        similarity,
    }
}

/// Coerce a cell to a number; anything unparseable becomes NaN.
fn coerce_number(cell: Option<&Value>) -> f64 {
    match cell {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => f64::NAN,
    }
}

/// Coerce a similarity cell: unparseable or missing becomes the neutral
/// 0.5, everything else is clamped to [0,1].
fn coerce_similarity(cell: Option<&Value>) -> f64 {
    let v = coerce_number(cell);
    if v.is_nan() {
        0.5
    } else {
        clamp01(v)
    }
}

/// Coerce a categorical cell to text; missing becomes `"Unknown"`.
fn coerce_text(cell: Option<&Value>) -> String {
    match cell {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => "Unknown".to_string(),
    }
}

/// Coerce an identifier cell: text rendering first, then canonical
/// integer-text form. Never empty.
fn coerce_id(cell: Option<&Value>) -> String {
    canonical_id(&coerce_text(cell))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_row_passes_through() {
        let row = json!({
            "User ID": 1,
            "Property ID": "101",
            "Location": "Downtown",
            "Type": "Apartment",
            "Condition": "New",
            "Bedrooms": 3,
            "Bathrooms": 2,
            "Size": 1200,
            "Year Built": 2015,
            "Price": 450000,
            "MatchScore": 92.5,
            "g_budget": 0.99,
            "s_price": 0.95,
            "s_bed": 0.4,
        });
        let record = normalize_row(&row);
        assert_eq!(record.user_id, "1");
        assert_eq!(record.property_id, "101");
        assert_eq!(record.location, "Downtown");
        assert_eq!(record.bedrooms, 3.0);
        assert_eq!(record.match_score, 92.5);
        assert_eq!(record.similarity.price, 0.95);
        assert_eq!(record.similarity.bedroom, 0.4);
        // Absent similarity columns default to neutral
        assert_eq!(record.similarity.location, 0.5);
    }

    #[test]
    fn missing_numeric_columns_become_nan() {
        let record = normalize_row(&json!({"User ID": 1, "Property ID": 2}));
        assert!(record.price.is_nan());
        assert!(record.match_score.is_nan());
        assert!(record.budget_gate.is_nan());
    }

    #[test]
    fn unparseable_numerics_become_nan() {
        let record = normalize_row(&json!({"Price": "expensive", "Size": ""}));
        assert!(record.price.is_nan());
        assert!(record.size.is_nan());
    }

    #[test]
    fn numeric_strings_and_bools_are_coerced() {
        let record = normalize_row(&json!({"Price": " 450000 ", "Bedrooms": "3.0", "Bathrooms": true}));
        assert_eq!(record.price, 450000.0);
        assert_eq!(record.bedrooms, 3.0);
        assert_eq!(record.bathrooms, 1.0);
    }

    #[test]
    fn similarity_cells_are_clamped() {
        let record = normalize_row(&json!({"s_price": 1.7, "s_bed": -0.2, "s_bath": "junk", "s_loc": "nan"}));
        assert_eq!(record.similarity.price, 1.0);
        assert_eq!(record.similarity.bedroom, 0.0);
        assert_eq!(record.similarity.bathroom, 0.5);
        assert_eq!(record.similarity.location, 0.5);
    }

    #[test]
    fn missing_categoricals_become_unknown() {
        let record = normalize_row(&json!({"Price": 100}));
        assert_eq!(record.location, "Unknown");
        assert_eq!(record.property_type, "Unknown");
        assert_eq!(record.condition, "Unknown");
        assert_eq!(record.user_id, "Unknown");
    }

    #[test]
    fn ids_are_canonical_integer_text() {
        let record = normalize_row(&json!({"User ID": "7.0", "Property ID": 101.0}));
        assert_eq!(record.user_id, "7");
        assert_eq!(record.property_id, "101");

        let record = normalize_row(&json!({"User ID": "u-42", "Property ID": "A17"}));
        assert_eq!(record.user_id, "u-42");
        assert_eq!(record.property_id, "A17");
    }

    #[test]
    fn non_object_row_normalizes_to_defaults() {
        let record = normalize_row(&json!("not a row"));
        assert_eq!(record.user_id, "Unknown");
        assert!(record.match_score.is_nan());
        assert_eq!(record.similarity.price, 0.5);
    }

    #[test]
    fn input_rows_are_not_consumed() {
        let rows = vec![json!({"User ID": 1}), json!({"User ID": 2})];
        let records = normalize_rows(&rows);
        assert_eq!(records.len(), 2);
        assert_eq!(rows.len(), 2);
    }
}
