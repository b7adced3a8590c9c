use crate::normalize::normalize_rows;
use crate::record::MatchRecord;
use ahash::AHashMap;
use serde_json::Value;
use std::cmp::Ordering;

/// A normalized record set grouped per user, held read-only for a session.
///
/// Records keep their input order within each user; ordering of displayed
/// results is decided later by the ranking stage.
#[derive(Debug, Clone, Default)]
pub struct MatchTable {
    by_user: AHashMap<String, Vec<MatchRecord>>,
    total: usize,
}

impl MatchTable {
    /// Build a table from already-normalized records.
    pub fn from_records(records: Vec<MatchRecord>) -> Self {
        let total = records.len();
        let mut by_user: AHashMap<String, Vec<MatchRecord>> = AHashMap::new();
        for record in records {
            by_user.entry(record.user_id.clone()).or_default().push(record);
        }
        Self { by_user, total }
    }

    /// Normalize raw rows and build the table in one step.
    pub fn from_rows(rows: &[Value]) -> Self {
        Self::from_records(normalize_rows(rows))
    }

    /// All user ids, ascending. Integer-text ids sort numerically, other
    /// ids lexicographically after them.
    pub fn user_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.by_user.keys().cloned().collect();
        ids.sort_by(|a, b| match (a.parse::<i64>(), b.parse::<i64>()) {
            (Ok(x), Ok(y)) => x.cmp(&y),
            (Ok(_), Err(_)) => Ordering::Less,
            (Err(_), Ok(_)) => Ordering::Greater,
            (Err(_), Err(_)) => a.cmp(b),
        });
        ids
    }

    /// Candidate records for one user; empty when the user is unknown.
    pub fn records_for(&self, user_id: &str) -> &[MatchRecord] {
        self.by_user.get(user_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_user(&self, user_id: &str) -> bool {
        self.by_user.contains_key(user_id)
    }

    pub fn user_count(&self) -> usize {
        self.by_user.len()
    }

    /// Total number of records across all users.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
