//! One-line match rationales synthesized from a record's budget gate and
//! similarity vector.
//!
//! Rules apply in a fixed order and each appends at most one clause:
//! budget signal first, then strengths, then trade-offs — and the
//! trade-offs clause is only attempted while fewer than two clauses
//! exist, which keeps rationales short. A record that is both strongly
//! over budget and strong on some component therefore never surfaces its
//! weaknesses; that interaction is intentional and preserved.

use matchlens_core::{Component, MatchRecord};

const WITHIN_BUDGET_GATE: f64 = 0.98;
const NEAR_BUDGET_GATE: f64 = 0.85;
const STRONG_THRESHOLD: f64 = 0.80;
const WEAK_THRESHOLD: f64 = 0.35;
const MAX_STRONG_LABELS: usize = 3;
const MAX_WEAK_LABELS: usize = 2;
const MAX_CLAUSES_BEFORE_TRADEOFFS: usize = 2;
const CLAUSE_SEPARATOR: &str = " • ";
const BALANCED_FALLBACK: &str = "Balanced match across constraints and preferences.";

/// Synthesize the "why this matched" line for a record.
///
/// Total and deterministic: the same record always yields the same
/// string, and every record yields one (the fallback covers records with
/// no signal at all).
pub fn explain(record: &MatchRecord) -> String {
    let mut clauses: Vec<String> = Vec::new();

    let gate = record.budget_gate;
    if !gate.is_nan() {
        let clause = if gate >= WITHIN_BUDGET_GATE {
            "within budget"
        } else if gate >= NEAR_BUDGET_GATE {
            "slightly above budget (small penalty)"
        } else {
            "over budget (strong penalty)"
        };
        clauses.push(clause.to_string());
    }

    let strong: Vec<&str> = Component::ALL
        .iter()
        .filter(|&&c| record.similarity.clamped(c) >= STRONG_THRESHOLD)
        .map(|&c| c.label())
        .collect();
    if !strong.is_empty() {
        let shown = &strong[..strong.len().min(MAX_STRONG_LABELS)];
        clauses.push(format!("strong on: {}", shown.join(", ")));
    }

    if clauses.len() < MAX_CLAUSES_BEFORE_TRADEOFFS {
        let weak: Vec<&str> = Component::ALL
            .iter()
            .filter(|&&c| record.similarity.clamped(c) <= WEAK_THRESHOLD)
            .map(|&c| c.label())
            .collect();
        if !weak.is_empty() {
            let shown = &weak[..weak.len().min(MAX_WEAK_LABELS)];
            clauses.push(format!("trade-offs: {}", shown.join(", ")));
        }
    }

    if clauses.is_empty() {
        return BALANCED_FALLBACK.to_string();
    }

    let mut sentence = capitalize(&clauses.join(CLAUSE_SEPARATOR));
    sentence.push('.');
    sentence
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
