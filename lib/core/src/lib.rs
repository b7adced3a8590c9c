//! # matchlens Core
//!
//! Core record model and selection stages for the matchlens ranking and
//! explanation engine.
//!
//! This crate provides the fundamental data structures and transforms:
//!
//! - [`MatchRecord`] - One user-property candidate with score, similarity
//!   vector, and budget gate
//! - [`Component`] - The eight similarity dimensions in canonical order
//! - [`normalize_rows`] - Total normalization of raw tabular rows
//! - [`MatchTable`] - A normalized record set grouped per user
//! - [`FilterCriteria`] - Conjunctive filtering over a record set
//! - [`SortSpec`] / [`rank`] - Stable sorting, id search, top-K truncation
//!
//! Everything here is a pure function or transform over immutable inputs;
//! records are produced once by the normalizer and never mutated
//! downstream.
//!
//! ## Example
//!
//! ```rust
//! use matchlens_core::{rank, MatchTable, SortSpec};
//! use serde_json::json;
//!
//! let rows = vec![
//!     json!({"User ID": 1, "Property ID": 101, "MatchScore": 92.5, "g_budget": 0.99}),
//!     json!({"User ID": 1, "Property ID": 202, "MatchScore": 80.1, "g_budget": 0.90}),
//! ];
//! let table = MatchTable::from_rows(&rows);
//! let candidates = table.records_for("1").to_vec();
//! let top = rank(candidates, &SortSpec::default(), "", 10);
//! assert_eq!(top[0].property_id, "101");
//! ```

pub mod component;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod rank;
pub mod record;
pub mod table;

pub use component::Component;
pub use error::{Error, Result};
pub use filter::{apply_filters, FilterCriteria};
pub use normalize::{normalize_row, normalize_rows};
pub use rank::{rank, search_records, sort_records, SortKey, SortSpec};
pub use record::{canonical_id, clamp01, MatchRecord, SimilarityVector};
pub use table::MatchTable;
