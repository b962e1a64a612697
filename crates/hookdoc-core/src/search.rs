//! Ranked search over registry entries
//!
//! Scores are lower-is-better: exact name 0, name prefix 1, name substring 2,
//! in-order fuzzy name match 3 plus a gap penalty. Matches found only in the
//! description rank after every name match.

use crate::registry::{HookEntry, Registry};

/// Penalty added to description-only matches
pub const DESCRIPTION_PENALTY: f64 = 10.0;

/// Penalty per skipped character in a fuzzy match
const GAP_PENALTY: f64 = 0.1;

/// A matching entry and its score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit<'a> {
    pub entry: &'a HookEntry,
    pub score: f64,
}

/// Search `registry` for `query`, best matches first.
///
/// Equal scores keep presentation order. A blank query matches nothing.
pub fn search<'a>(registry: &'a Registry, query: &str) -> Vec<SearchHit<'a>> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit<'a>> = registry
        .iter()
        .filter_map(|entry| {
            let score = match fuzzy_score(&query, entry.id) {
                Some(score) => score,
                None => substring_score(&query, entry.description)? + DESCRIPTION_PENALTY,
            };
            Some(SearchHit { entry, score })
        })
        .collect();

    hits.sort_by(|a, b| a.score.total_cmp(&b.score));
    tracing::trace!(query = %query, hits = hits.len(), "search");
    hits
}

/// Score a lower-cased `query` against `text`.
fn fuzzy_score(query: &str, text: &str) -> Option<f64> {
    let text = text.to_lowercase();

    if let Some(score) = substring_score(query, &text) {
        return Some(score);
    }

    // Every query char must appear in order
    let mut wanted = query.chars().peekable();
    let mut last_match: Option<usize> = None;
    let mut penalty = 0.0;

    for (i, c) in text.chars().enumerate() {
        let Some(&next) = wanted.peek() else { break };
        if c == next {
            if let Some(last) = last_match {
                penalty += GAP_PENALTY * (i - last - 1) as f64;
            }
            last_match = Some(i);
            wanted.next();
        }
    }

    if wanted.peek().is_some() {
        return None;
    }
    Some(3.0 + penalty)
}

fn substring_score(query: &str, text: &str) -> Option<f64> {
    let text = text.to_lowercase();
    if text == query {
        Some(0.0)
    } else if text.starts_with(query) {
        Some(1.0)
    } else if text.contains(query) {
        Some(2.0)
    } else {
        None
    }
}
