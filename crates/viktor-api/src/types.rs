//! Request and response bodies for the JSON API.

use serde::{Deserialize, Serialize};
use viktor_core::{ExplanationRecord, FormulaRecord, RelationshipEntry, SearchResult};

pub const SYSTEM_STATUS: &str = "operational";
pub const STATS_VERSION: &str = "1.0.0-demo";
pub const HEALTH_STATUS: &str = "healthy";
pub const HEALTH_VERSION: &str = "1.0.0";
pub const DEFAULT_CONTEXT: &str = "general";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `POST /api/search`. A missing `query` is treated like an empty one.
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse<'a> {
    pub query: String,
    pub results: Vec<SearchResult<'a>>,
    pub total_found: usize,
    /// Seconds.
    pub processing_time: f64,
}

#[derive(Debug, Serialize)]
pub struct FormulaDetailResponse<'a> {
    pub formula: &'a FormulaRecord,
    pub relationships: &'static [&'static str],
    pub ai_explanation: ExplanationRecord,
}

#[derive(Debug, Serialize)]
pub struct RelationshipsResponse {
    pub formula_id: String,
    pub relationships: Vec<RelationshipEntry>,
    pub total_connections: usize,
}

/// `POST /api/explain`.
#[derive(Debug, Default, Deserialize)]
pub struct ExplainRequest {
    #[serde(default)]
    pub formula_id: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    pub formula_id: String,
    pub explanation: ExplanationRecord,
    pub context: String,
    /// Unix epoch seconds.
    pub generated_at: f64,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_formulas: usize,
    pub domains_covered: usize,
    pub system_status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Unix epoch seconds.
    pub timestamp: f64,
    pub version: &'static str,
}
