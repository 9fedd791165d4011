//! Client-side relevance ranking of server results
//!
//! The endpoint already filters by query; this re-orders its candidates so
//! that names matching the typed text float to the top of the suggestions.

use super::types::{RankedResult, RawResult};

pub const EXACT_NAME_SCORE: u32 = 100;
pub const NAME_PREFIX_SCORE: u32 = 80;
pub const NAME_CONTAINS_SCORE: u32 = 60;
pub const LOCATION_CONTAINS_SCORE: u32 = 40;

/// Score a single candidate against the query, case-insensitively
///
/// Name matching is tiered (exact beats prefix beats contains, only the best
/// tier counts); a location match adds on top of whatever the name scored.
pub fn score(candidate: &RawResult, query: &str) -> u32 {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return 0;
    }

    let name = candidate.name.to_lowercase();
    let name_score = if name == query {
        EXACT_NAME_SCORE
    } else if name.starts_with(&query) {
        NAME_PREFIX_SCORE
    } else if name.contains(&query) {
        NAME_CONTAINS_SCORE
    } else {
        0
    };

    let location_score = match &candidate.location {
        Some(location) if location.to_lowercase().contains(&query) => LOCATION_CONTAINS_SCORE,
        _ => 0,
    };

    name_score + location_score
}

/// Rank candidates by descending score and keep the first `limit`
///
/// Equal scores keep the order the server returned them in.
pub fn rank(candidates: Vec<RawResult>, query: &str, limit: usize) -> Vec<RankedResult> {
    let mut ranked: Vec<RankedResult> = candidates
        .into_iter()
        .map(|item| {
            let score = score(&item, query);
            RankedResult { item, score }
        })
        .collect();

    // `sort_by` is stable; ties must not be reordered
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
#[path = "ranker_tests.rs"]
mod ranker_tests;
