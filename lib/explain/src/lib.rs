//! # matchlens Explain
//!
//! Explanation and selection layer for the matchlens engine.
//!
//! Takes one user's canonical match records and produces the annotated
//! output table: every displayed record carries a weighted per-component
//! contribution breakdown and a one-line "why this matched" rationale.
//!
//! ## Features
//!
//! - **Weight profiles**: an explicit immutable weight vector per call
//!   site, validated but never renormalized
//! - **Contribution breakdowns**: weight x clamped similarity, sorted
//!   descending with a deterministic canonical tie-break
//! - **Rationales**: threshold-driven clause synthesis from the budget
//!   gate and similarity vector
//! - **Selection pipeline**: filter -> sort -> search -> top-K with
//!   summary stats, all pure and recomputed per call
//! - **CSV export**: the annotated table as delimited text in display
//!   column order
//!
//! ## Example
//!
//! ```rust
//! use matchlens_core::MatchTable;
//! use matchlens_explain::{select, QueryOptions, WeightProfile};
//! use serde_json::json;
//!
//! let rows = vec![
//!     json!({"User ID": 1, "Property ID": 101, "MatchScore": 92.5,
//!            "g_budget": 0.99, "s_price": 0.95}),
//! ];
//! let table = MatchTable::from_rows(&rows);
//! let selection = select(
//!     table.records_for("1"),
//!     &QueryOptions::top(10),
//!     &WeightProfile::default(),
//! ).unwrap();
//! assert!(selection.matches[0].reason.starts_with("Within budget"));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Criteria   │────>│   Filter    │────>│  Rank/Search│
//! │  + Options  │     │  (records)  │     │   + top-K   │
//! └─────────────┘     └─────────────┘     └──────┬──────┘
//!       │                                        │
//!       │              ┌─────────────┐           │
//!       └─────────────>│  Annotate   │<──────────┘
//!                      │(reason +    │
//!                      │ breakdown)  │
//!                      └──────┬──────┘
//!                             │
//!                      ┌─────────────┐
//!                      │   Export    │
//!                      │   (CSV)     │
//!                      └─────────────┘
//! ```

pub mod contribution;
pub mod export;
pub mod reason;
pub mod select;
pub mod weights;

pub use contribution::{contributions, raw_components, Contribution};
pub use export::{to_csv, ExportError, BASE_COLUMNS};
pub use reason::explain;
pub use select::{select, AnnotatedMatch, QueryOptions, Selection, SelectionStats};
pub use weights::{WeightError, WeightProfile};
