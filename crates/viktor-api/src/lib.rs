//! viktor-api — JSON HTTP surface for the formula explorer.
//!
//! [`router`] wires every endpoint onto an axum [`Router`] sharing one
//! read-only [`AppState`]. The binary binds it; tests drive it in-process.
//! [`with_middleware`] adds CORS and turns handler panics into 500s.

pub mod error;
pub mod handlers;
pub mod state;
pub mod types;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

pub use error::ApiError;
pub use state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    let routes = Router::new()
        .route("/api/search", post(handlers::search_formulas))
        .route("/api/formula/{formula_id}", get(handlers::formula_detail))
        .route(
            "/api/relationships/{formula_id}",
            get(handlers::formula_relationships),
        )
        .route("/api/explain", post(handlers::explain_formula))
        .route("/api/stats", get(handlers::stats))
        .route("/health", get(handlers::health))
        .with_state(state);

    with_middleware(routes)
}

/// Layers shared by every route. Apply after all routes are added: routes
/// merged in later are not covered.
pub fn with_middleware(routes: Router) -> Router {
    routes
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(CorsLayer::permissive())
}
