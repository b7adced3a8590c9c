//! # matchlens
//!
//! A ranking and explanation engine for precomputed property-to-user
//! match records.
//!
//! matchlens takes a table of candidate properties per user — each row
//! annotated with a final match score, a per-dimension similarity vector,
//! and a budget-compliance gate — and turns it into an annotated, ranked
//! result set: normalized records, weighted per-component contribution
//! breakdowns, and a one-line "why this matched" rationale per row, with
//! filtering, sorting, free-text id search, and top-K truncation.
//!
//! The match score itself is supplied as input, never recomputed here;
//! this engine only decomposes and explains it.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install matchlens
//! matchlens --input match_recommendations.csv --user 1 --top-k 10
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use matchlens::prelude::*;
//! use serde_json::json;
//!
//! let rows = vec![
//!     json!({"User ID": 1, "Property ID": 101, "MatchScore": 92.5,
//!            "g_budget": 0.99, "s_price": 0.95}),
//!     json!({"User ID": 1, "Property ID": 202, "MatchScore": 80.1,
//!            "g_budget": 0.55}),
//! ];
//! let table = MatchTable::from_rows(&rows);
//!
//! let selection = select(
//!     table.records_for("1"),
//!     &QueryOptions::top(10),
//!     &WeightProfile::default(),
//! ).unwrap();
//!
//! assert_eq!(selection.matches[0].record.property_id, "101");
//! assert!(selection.matches[0].reason.starts_with("Within budget"));
//! ```
//!
//! ## Crate Structure
//!
//! - [`matchlens-core`](https://docs.rs/matchlens-core) - Record model,
//!   normalization, filtering, ranking
//! - [`matchlens-explain`](https://docs.rs/matchlens-explain) -
//!   Contribution breakdowns, rationales, selection pipeline, CSV export

// Re-export core types
pub use matchlens_core::{
    apply_filters, canonical_id, clamp01, normalize_row, normalize_rows, rank, search_records,
    sort_records, Component, Error, FilterCriteria, MatchRecord, MatchTable, Result,
    SimilarityVector, SortKey, SortSpec,
};

// Re-export the explanation layer
pub use matchlens_explain::{
    contributions, explain, raw_components, select, to_csv, AnnotatedMatch, Contribution,
    ExportError, QueryOptions, Selection, SelectionStats, WeightError, WeightProfile,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        apply_filters, contributions, explain, normalize_rows, rank, select, to_csv,
        AnnotatedMatch, Component, FilterCriteria, MatchRecord, MatchTable, QueryOptions,
        Selection, SimilarityVector, SortKey, SortSpec, WeightProfile,
    };
}
