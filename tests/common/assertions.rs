//! Domain-specific assertion macros for viktor harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* ranking or response invariant was violated.

// ---------------------------------------------------------------------------
// Ranking assertions
// ---------------------------------------------------------------------------

/// Assert that search results are all positive and ranked best-first.
///
/// ```rust
/// assert_ranked!(search(&catalog, "energy", 10));
/// ```
#[macro_export]
macro_rules! assert_ranked {
    ($results:expr) => {{
        let results: &[viktor_core::SearchResult<'_>] = &$results;
        for (i, r) in results.iter().enumerate() {
            if r.relevance_score == 0 {
                panic!(
                    "assert_ranked! failed: result {} ({:?}) has score 0",
                    i, r.formula.id
                );
            }
        }
        for pair in results.windows(2) {
            if pair[0].relevance_score < pair[1].relevance_score {
                panic!(
                    "assert_ranked! failed: {:?} (score {}) ranked above {:?} (score {})",
                    pair[0].formula.id,
                    pair[0].relevance_score,
                    pair[1].formula.id,
                    pair[1].relevance_score
                );
            }
        }
    }};
}

/// Assert the exact `(id, score)` sequence of a result list.
#[macro_export]
macro_rules! assert_hits {
    ($results:expr, [$(($id:expr, $score:expr)),* $(,)?]) => {{
        let actual: Vec<(String, u32)> = $results
            .iter()
            .map(|r| (r.formula.id.clone(), r.relevance_score))
            .collect();
        let expected: Vec<(String, u32)> = vec![$(($id.to_string(), $score)),*];
        pretty_assertions::assert_eq!(actual, expected, "search hits differ");
    }};
}

// ---------------------------------------------------------------------------
// Response assertions
// ---------------------------------------------------------------------------

/// Assert an error response's status and its `{"error": ...}` message.
#[macro_export]
macro_rules! assert_error_body {
    ($response:expr, $status:expr, $message:expr) => {{
        let (status, body): (axum::http::StatusCode, serde_json::Value) = $response;
        pretty_assertions::assert_eq!(status, $status, "unexpected status, body: {}", body);
        pretty_assertions::assert_eq!(
            body,
            serde_json::json!({ "error": $message }),
            "unexpected error body"
        );
    }};
}
