//! Route handlers.
//!
//! Handlers that borrow from the catalog serialize their response before
//! returning, so they hand back a [`Response`] rather than `Json<T>`.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use viktor_core::{explain, layout, relationships, search};

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::*;

type SharedState = State<Arc<AppState>>;

pub async fn search_formulas(
    State(state): SharedState,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;
    let query = req.query.unwrap_or_default();
    if query.is_empty() {
        return Err(ApiError::Validation("Query is required".to_string()));
    }
    let limit = req.limit.unwrap_or(state.search.default_limit);

    let delay = state.demo.search_delay();
    tokio::time::sleep(delay).await;

    let results = search::search(&state.catalog, &query, limit);
    tracing::debug!("search {query:?} (limit {limit}): {} results", results.len());

    Ok(Json(SearchResponse {
        total_found: results.len(),
        processing_time: delay.as_secs_f64(),
        query,
        results,
    })
    .into_response())
}

pub async fn formula_detail(
    State(state): SharedState,
    Path(formula_id): Path<String>,
) -> Result<Response, ApiError> {
    let formula = state
        .catalog
        .find_by_id(&formula_id)
        .ok_or_else(|| ApiError::NotFound("Formula not found".to_string()))?;
    tracing::debug!("formula detail {formula_id}");

    Ok(Json(FormulaDetailResponse {
        formula,
        relationships: relationships::related_ids(&formula_id),
        ai_explanation: explain::explain(&formula_id),
    })
    .into_response())
}

/// Only the static relationship table is consulted; the id need not be in
/// the catalog.
pub async fn formula_relationships(Path(formula_id): Path<String>) -> Json<RelationshipsResponse> {
    let related = relationships::related_ids(&formula_id);
    let relationships = layout::layout(related, &mut rand::thread_rng());
    tracing::debug!("relationships {formula_id}: {}", relationships.len());

    Json(RelationshipsResponse {
        formula_id,
        total_connections: related.len(),
        relationships,
    })
}

pub async fn explain_formula(
    State(state): SharedState,
    payload: Result<Json<ExplainRequest>, JsonRejection>,
) -> Result<Json<ExplainResponse>, ApiError> {
    let Json(req) = payload?;
    let formula_id = match req.formula_id {
        Some(id) if !id.is_empty() => id,
        _ => return Err(ApiError::Validation("Formula ID is required".to_string())),
    };
    let context = req.context.unwrap_or_else(|| DEFAULT_CONTEXT.to_string());

    tokio::time::sleep(state.demo.explain_delay()).await;

    let explanation = explain::explain(&formula_id);
    tracing::debug!(
        "explain {formula_id} ({context}), curated={}",
        explain::is_curated(&formula_id)
    );

    Ok(Json(ExplainResponse {
        formula_id,
        explanation,
        context,
        generated_at: unix_seconds(Utc::now()),
    }))
}

pub async fn stats(State(state): SharedState) -> Json<StatsResponse> {
    Json(StatsResponse {
        total_formulas: state.catalog.len(),
        domains_covered: state.catalog.domains_covered(),
        system_status: SYSTEM_STATUS,
        version: STATS_VERSION,
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTH_STATUS,
        timestamp: unix_seconds(Utc::now()),
        version: HEALTH_VERSION,
    })
}

fn unix_seconds(ts: DateTime<Utc>) -> f64 {
    ts.timestamp_micros() as f64 / 1_000_000.0
}
