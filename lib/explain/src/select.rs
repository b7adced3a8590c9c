//! The selection pipeline: filter, sort, search, truncate, annotate.
//!
//! Ties the core stages together for one user's candidate set and
//! decorates every displayed record with its rationale and contribution
//! breakdown. Pure: recomputes annotations on every call, so output is
//! always consistent with the weight profile passed in.

use crate::contribution::{contributions, Contribution};
use crate::reason::explain;
use crate::weights::WeightProfile;
use matchlens_core::{
    apply_filters, search_records, sort_records, Error, FilterCriteria, MatchRecord, Result,
    SortSpec,
};

/// The full configuration surface of one selection request.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    pub criteria: FilterCriteria,
    pub sort: SortSpec,
    /// Case-sensitive substring match on property id; empty = no search.
    pub search: String,
    /// Maximum rows returned; must be at least 1.
    pub top_k: usize,
}

impl QueryOptions {
    /// Options that pass everything through, capped at `top_k` rows.
    pub fn top(top_k: usize) -> Self {
        Self {
            top_k,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(Error::InvalidTopK(self.top_k));
        }
        Ok(())
    }
}

/// A displayed record plus its synthesized annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedMatch {
    pub record: MatchRecord,
    /// The "why this matched" line.
    pub reason: String,
    /// Weighted per-component breakdown, best first.
    pub contributions: Vec<Contribution>,
}

/// Counters and score summary for one selection request.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionStats {
    /// Candidate records passed in (the user's full set).
    pub total_candidates: usize,
    /// Rows surviving filters and search, before truncation.
    pub after_filters: usize,
    /// Rows returned after top-K truncation.
    pub returned: usize,
    /// Best match score across all candidates, ignoring unknowns.
    pub best_score: Option<f64>,
    /// Mean match score of the surviving rows, ignoring unknowns.
    pub avg_filtered_score: Option<f64>,
}

/// Result of one selection request.
#[derive(Debug, Clone)]
pub struct Selection {
    pub matches: Vec<AnnotatedMatch>,
    pub stats: SelectionStats,
}

impl Selection {
    /// An empty result is a normal outcome, not an error.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Run the filter -> sort -> search -> truncate pipeline over one user's
/// candidates and annotate each surviving record.
pub fn select(
    records: &[MatchRecord],
    options: &QueryOptions,
    weights: &WeightProfile,
) -> Result<Selection> {
    options.validate()?;

    let mut survivors = apply_filters(records, &options.criteria);
    sort_records(&mut survivors, &options.sort);
    let survivors = search_records(survivors, options.search.trim());

    let stats = SelectionStats {
        total_candidates: records.len(),
        after_filters: survivors.len(),
        returned: survivors.len().min(options.top_k),
        best_score: max_score(records),
        avg_filtered_score: mean_score(&survivors),
    };

    let mut shown = survivors;
    shown.truncate(options.top_k);

    let matches = shown
        .into_iter()
        .map(|record| AnnotatedMatch {
            reason: explain(&record),
            contributions: contributions(&record, weights),
            record,
        })
        .collect();

    Ok(Selection { matches, stats })
}

fn max_score(records: &[MatchRecord]) -> Option<f64> {
    records
        .iter()
        .map(|r| r.match_score)
        .filter(|s| !s.is_nan())
        .fold(None, |best, s| Some(best.map_or(s, |b: f64| b.max(s))))
}

fn mean_score(records: &[MatchRecord]) -> Option<f64> {
    let known: Vec<f64> = records
        .iter()
        .map(|r| r.match_score)
        .filter(|s| !s.is_nan())
        .collect();
    if known.is_empty() {
        None
    } else {
        Some(known.iter().sum::<f64>() / known.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchlens_core::{FilterCriteria, SimilarityVector, SortKey};

    fn record(property_id: &str, score: f64, gate: f64, price: f64) -> MatchRecord {
        MatchRecord {
            user_id: "1".to_string(),
            property_id: property_id.to_string(),
            match_score: score,
            budget_gate: gate,
            price,
            ..MatchRecord::default()
        }
    }

    fn candidates() -> Vec<MatchRecord> {
        vec![
            record("101", 92.5, 0.99, 450_000.0),
            record("202", 85.0, 0.90, 320_000.0),
            record("310", 78.0, 0.40, 600_000.0),
            record("404", f64::NAN, f64::NAN, f64::NAN),
        ]
    }

    #[test]
    fn pipeline_orders_and_annotates() {
        let selection = select(&candidates(), &QueryOptions::top(10), &WeightProfile::default()).unwrap();
        let ids: Vec<&str> = selection
            .matches
            .iter()
            .map(|m| m.record.property_id.as_str())
            .collect();
        // Default sort: best score first, unknown score last.
        assert_eq!(ids, vec!["101", "202", "310", "404"]);
        for m in &selection.matches {
            assert!(!m.reason.is_empty());
            assert_eq!(m.contributions.len(), 8);
        }
    }

    #[test]
    fn top_k_bounds_the_result() {
        let selection = select(&candidates(), &QueryOptions::top(2), &WeightProfile::default()).unwrap();
        assert_eq!(selection.matches.len(), 2);
        assert_eq!(selection.stats.returned, 2);
        assert_eq!(selection.stats.after_filters, 4);
    }

    #[test]
    fn zero_top_k_is_rejected() {
        let err = select(&candidates(), &QueryOptions::top(0), &WeightProfile::default());
        assert_eq!(err.unwrap_err(), Error::InvalidTopK(0));
    }

    #[test]
    fn filters_and_search_compose() {
        let options = QueryOptions {
            criteria: FilterCriteria {
                min_budget_gate: Some(0.5),
                ..FilterCriteria::default()
            },
            search: "10".to_string(),
            top_k: 10,
            ..QueryOptions::default()
        };
        let selection = select(&candidates(), &options, &WeightProfile::default()).unwrap();
        let ids: Vec<&str> = selection
            .matches
            .iter()
            .map(|m| m.record.property_id.as_str())
            .collect();
        // 310 passes the substring but fails the gate threshold.
        assert_eq!(ids, vec!["101"]);
        assert_eq!(selection.stats.after_filters, 1);
    }

    #[test]
    fn stats_skip_unknown_scores() {
        let selection = select(&candidates(), &QueryOptions::top(10), &WeightProfile::default()).unwrap();
        assert_eq!(selection.stats.total_candidates, 4);
        assert_eq!(selection.stats.best_score, Some(92.5));
        let avg = selection.stats.avg_filtered_score.unwrap();
        assert!((avg - (92.5 + 85.0 + 78.0) / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_result_is_a_normal_outcome() {
        let options = QueryOptions {
            criteria: FilterCriteria {
                min_score: Some(1000.0),
                ..FilterCriteria::default()
            },
            top_k: 10,
            ..QueryOptions::default()
        };
        let selection = select(&candidates(), &options, &WeightProfile::default()).unwrap();
        assert!(selection.is_empty());
        assert_eq!(selection.stats.after_filters, 0);
        assert_eq!(selection.stats.avg_filtered_score, None);
        assert_eq!(selection.stats.best_score, Some(92.5));
    }

    #[test]
    fn alternate_sort_key_flows_through() {
        let options = QueryOptions {
            sort: SortSpec {
                key: SortKey::Price,
                ascending: true,
            },
            top_k: 10,
            ..QueryOptions::default()
        };
        let selection = select(&candidates(), &options, &WeightProfile::default()).unwrap();
        assert_eq!(selection.matches[0].record.property_id, "202");
    }

    #[test]
    fn end_to_end_reason_scenario() {
        let mut sim = SimilarityVector::default();
        sim.price = 0.95;
        sim.bedroom = 0.40;
        let candidate = MatchRecord {
            match_score: 92.5,
            budget_gate: 0.99,
            similarity: sim,
            ..record("101", 92.5, 0.99, 450_000.0)
        };
        let selection = select(&[candidate], &QueryOptions::top(5), &WeightProfile::default()).unwrap();
        let reason = &selection.matches[0].reason;
        assert!(reason.contains("within budget") || reason.starts_with("Within budget"));
        assert!(reason.contains("strong on: price fit"));
        assert!(!reason.contains("trade-offs"));
    }

    #[test]
    fn annotations_track_the_weight_profile() {
        let mut sim = SimilarityVector::default();
        sim.price = 1.0;
        let candidate = MatchRecord {
            similarity: sim,
            ..record("101", 90.0, 0.99, 1.0)
        };
        let boosted = WeightProfile::default().with_weight(matchlens_core::Component::Price, 0.9);
        let selection = select(&[candidate], &QueryOptions::top(1), &boosted).unwrap();
        let top = &selection.matches[0].contributions[0];
        assert_eq!(top.component, matchlens_core::Component::Price);
        assert!((top.value - 0.9).abs() < 1e-12);
    }
}
