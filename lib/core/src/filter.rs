//! Conjunctive filtering over a record set.
//!
//! Every configured predicate must pass (AND semantics); unconfigured
//! predicates are unrestricted, so an empty criteria value is the
//! identity. NaN numerics never satisfy a threshold or range predicate,
//! which keeps malformed rows out rather than silently passing them.

use crate::record::MatchRecord;
use std::collections::HashSet;

/// Optional predicates over a record set.
///
/// Empty accepted-value sets and `None` ranges/thresholds mean
/// "no restriction" for that dimension.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Accepted locations; empty = any.
    pub locations: HashSet<String>,
    /// Accepted property types; empty = any.
    pub property_types: HashSet<String>,
    /// Accepted conditions; empty = any.
    pub conditions: HashSet<String>,
    /// Inclusive price range.
    pub price_range: Option<(f64, f64)>,
    /// Inclusive size range.
    pub size_range: Option<(f64, f64)>,
    /// Minimum match score.
    pub min_score: Option<f64>,
    /// Minimum budget gate.
    pub min_budget_gate: Option<f64>,
}

impl FilterCriteria {
    /// True when no predicate is configured.
    pub fn is_unrestricted(&self) -> bool {
        self.locations.is_empty()
            && self.property_types.is_empty()
            && self.conditions.is_empty()
            && self.price_range.is_none()
            && self.size_range.is_none()
            && self.min_score.is_none()
            && self.min_budget_gate.is_none()
    }

    /// Whether a record satisfies every configured predicate.
    pub fn matches(&self, record: &MatchRecord) -> bool {
        accepts(&self.locations, &record.location)
            && accepts(&self.property_types, &record.property_type)
            && accepts(&self.conditions, &record.condition)
            && in_range(record.price, self.price_range)
            && in_range(record.size, self.size_range)
            && above(record.match_score, self.min_score)
            && above(record.budget_gate, self.min_budget_gate)
    }
}

fn accepts(accepted: &HashSet<String>, value: &str) -> bool {
    accepted.is_empty() || accepted.contains(value)
}

// NaN comparisons are false, so unknown values fail closed here.
fn in_range(value: f64, range: Option<(f64, f64)>) -> bool {
    match range {
        None => true,
        Some((min, max)) => value >= min && value <= max,
    }
}

fn above(value: f64, threshold: Option<f64>) -> bool {
    match threshold {
        None => true,
        Some(min) => value >= min,
    }
}

/// Keep the records satisfying `criteria`, preserving their order.
pub fn apply_filters(records: &[MatchRecord], criteria: &FilterCriteria) -> Vec<MatchRecord> {
    records.iter().filter(|r| criteria.matches(r)).cloned().collect()
}
