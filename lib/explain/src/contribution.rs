//! Weighted per-component contributions to a final match score.
//!
//! A breakdown is ephemeral: recomputed on every call so it always
//! reflects the weight profile in hand, never cached on the record.

use crate::weights::WeightProfile;
use matchlens_core::{Component, MatchRecord};
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::cmp::Reverse;

/// One component's share of the final score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Contribution {
    pub component: Component,
    pub value: f64,
}

/// Weighted contribution of every component, sorted descending by value;
/// ties resolve to canonical component order.
///
/// Similarity scores are read defensively (NaN -> neutral 0.5, then
/// clamped), so a raw record that skipped normalization still decomposes
/// into in-range values.
pub fn contributions(record: &MatchRecord, weights: &WeightProfile) -> Vec<Contribution> {
    let mut parts: Vec<Contribution> = Component::ALL
        .iter()
        .map(|&component| Contribution {
            component,
            value: weights.get(component) * record.similarity.clamped(component),
        })
        .collect();
    sort_breakdown(&mut parts);
    parts
}

/// Clamped raw component scores in the same descending order, for
/// side-by-side display next to the weighted breakdown.
pub fn raw_components(record: &MatchRecord) -> Vec<Contribution> {
    let mut parts: Vec<Contribution> = Component::ALL
        .iter()
        .map(|&component| Contribution {
            component,
            value: record.similarity.clamped(component),
        })
        .collect();
    sort_breakdown(&mut parts);
    parts
}

fn sort_breakdown(parts: &mut [Contribution]) {
    parts.sort_by_key(|p| (Reverse(OrderedFloat(p.value)), p.component.ordinal()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchlens_core::SimilarityVector;

    fn record_with(similarity: SimilarityVector) -> MatchRecord {
        MatchRecord {
            similarity,
            ..MatchRecord::default()
        }
    }

    #[test]
    fn breakdown_is_sorted_descending() {
        let mut sim = SimilarityVector::default();
        sim.price = 0.9;
        sim.location = 1.0;
        let parts = contributions(&record_with(sim), &WeightProfile::default());
        for pair in parts.windows(2) {
            assert!(pair[0].value >= pair[1].value);
        }
        // price 0.30*0.9 = 0.27 beats location 0.08*1.0 = 0.08
        assert_eq!(parts[0].component, Component::Price);
    }

    #[test]
    fn ties_resolve_to_canonical_order() {
        // All-equal similarities with all-equal weights tie everywhere.
        let weights = WeightProfile {
            price: 0.1,
            bedroom: 0.1,
            bathroom: 0.1,
            property_type: 0.1,
            condition: 0.1,
            year: 0.1,
            size: 0.1,
            location: 0.1,
        };
        let parts = contributions(&record_with(SimilarityVector::default()), &weights);
        let order: Vec<Component> = parts.iter().map(|p| p.component).collect();
        assert_eq!(order, Component::ALL.to_vec());
    }

    #[test]
    fn each_contribution_is_bounded_by_its_weight() {
        let mut sim = SimilarityVector::default();
        sim.price = 5.0; // out of range on purpose
        sim.bedroom = f64::NAN;
        let weights = WeightProfile::default();
        let parts = contributions(&record_with(sim), &weights);
        let mut total = 0.0;
        for p in &parts {
            assert!(p.value >= 0.0);
            assert!(p.value <= weights.get(p.component));
            total += p.value;
        }
        assert!(total <= weights.sum() + 1e-12);
    }

    #[test]
    fn neutral_record_contributes_half_of_each_weight() {
        let weights = WeightProfile::default();
        let parts = contributions(&record_with(SimilarityVector::default()), &weights);
        for p in parts {
            assert!((p.value - weights.get(p.component) * 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn raw_components_are_clamped_and_sorted() {
        let mut sim = SimilarityVector::default();
        sim.size = 1.8;
        sim.year = -0.4;
        let parts = raw_components(&record_with(sim));
        assert_eq!(parts[0].component, Component::Size);
        assert_eq!(parts[0].value, 1.0);
        assert_eq!(parts.last().unwrap().component, Component::Year);
        assert_eq!(parts.last().unwrap().value, 0.0);
    }

    #[test]
    fn breakdown_is_deterministic() {
        let mut sim = SimilarityVector::default();
        sim.bathroom = 0.77;
        let record = record_with(sim);
        let weights = WeightProfile::default();
        assert_eq!(contributions(&record, &weights), contributions(&record, &weights));
    }
}
