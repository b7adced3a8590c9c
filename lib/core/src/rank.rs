//! Sorting, identifier search, and top-K truncation of a record set.

use crate::error::Error;
use crate::record::MatchRecord;
use std::cmp::Ordering;
use std::str::FromStr;

/// Keys a record set can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    MatchScore,
    Price,
    Size,
    YearBuilt,
    BudgetGate,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::MatchScore,
        SortKey::Price,
        SortKey::Size,
        SortKey::YearBuilt,
        SortKey::BudgetGate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::MatchScore => "match_score",
            SortKey::Price => "price",
            SortKey::Size => "size",
            SortKey::YearBuilt => "year_built",
            SortKey::BudgetGate => "budget_gate",
        }
    }

    /// The record attribute this key sorts on.
    pub fn value_of(self, record: &MatchRecord) -> f64 {
        match self {
            SortKey::MatchScore => record.match_score,
            SortKey::Price => record.price,
            SortKey::Size => record.size,
            SortKey::YearBuilt => record.year_built,
            SortKey::BudgetGate => record.budget_gate,
        }
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "match_score" | "score" => Ok(SortKey::MatchScore),
            "price" => Ok(SortKey::Price),
            "size" => Ok(SortKey::Size),
            "year_built" | "year" => Ok(SortKey::YearBuilt),
            "budget_gate" | "budget" => Ok(SortKey::BudgetGate),
            other => Err(Error::UnknownSortKey(other.to_string())),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sort key plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub ascending: bool,
}

impl Default for SortSpec {
    /// Best match first.
    fn default() -> Self {
        Self {
            key: SortKey::MatchScore,
            ascending: false,
        }
    }
}

// Unknown (NaN) keys always sort last, whichever the direction; known
// keys compare normally and flip with the direction.
fn compare_keys(a: f64, b: f64, ascending: bool) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ord = a.total_cmp(&b);
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        }
    }
}

/// Stable sort by the chosen key; equal-key records keep their input order.
pub fn sort_records(records: &mut [MatchRecord], spec: &SortSpec) {
    records.sort_by(|a, b| compare_keys(spec.key.value_of(a), spec.key.value_of(b), spec.ascending));
}

/// Keep records whose property id contains `substring` (case-sensitive).
/// An empty substring keeps everything.
pub fn search_records(records: Vec<MatchRecord>, substring: &str) -> Vec<MatchRecord> {
    if substring.is_empty() {
        return records;
    }
    records.into_iter().filter(|r| r.property_id.contains(substring)).collect()
}

/// Sort, search, and truncate to the top `top_k` records.
pub fn rank(
    mut records: Vec<MatchRecord>,
    spec: &SortSpec,
    substring: &str,
    top_k: usize,
) -> Vec<MatchRecord> {
    sort_records(&mut records, spec);
    let mut records = search_records(records, substring);
    records.truncate(top_k);
    records
}
