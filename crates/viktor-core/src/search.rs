//! Search engine — weighted keyword scoring over the catalog.
//!
//! Each record earns points for a case-insensitive substring hit on its
//! name, domain and description. Hits are additive, so a record can score on
//! all three fields.

use crate::catalog::Catalog;
use crate::types::{FormulaRecord, SearchResult};

pub const NAME_WEIGHT: u32 = 3;
pub const DOMAIN_WEIGHT: u32 = 2;
pub const DESCRIPTION_WEIGHT: u32 = 1;

/// Result count used when the caller does not supply one.
pub const DEFAULT_LIMIT: usize = 10;

/// Score `formula` against an already-lowercased query.
pub fn score(formula: &FormulaRecord, query_lower: &str) -> u32 {
    let hit = |field: &str| field.to_lowercase().contains(query_lower);

    let mut score = 0;
    if hit(&formula.name) {
        score += NAME_WEIGHT;
    }
    if hit(&formula.domain) {
        score += DOMAIN_WEIGHT;
    }
    if hit(&formula.description) {
        score += DESCRIPTION_WEIGHT;
    }
    score
}

/// Rank catalog entries against `query`, best first, at most `limit` of them.
///
/// Zero-score records are dropped. Equal scores keep catalog order. An empty
/// query is accepted here; rejecting it is the caller's business.
pub fn search<'a>(catalog: &'a Catalog, query: &str, limit: usize) -> Vec<SearchResult<'a>> {
    let query_lower = query.to_lowercase();

    let mut results: Vec<SearchResult<'a>> = catalog
        .iter()
        .filter_map(|formula| match score(formula, &query_lower) {
            0 => None,
            relevance_score => Some(SearchResult {
                formula,
                relevance_score,
            }),
        })
        .collect();

    // `sort_by` is stable, which gives the insertion-order tie-break.
    results.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
    results.truncate(limit);
    results
}
