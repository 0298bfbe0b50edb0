//! Axum router construction for the Observer API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled for cross-origin dashboard access.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the Observer server.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page
/// - `POST /api/simulation/init` -- initialize a fresh simulation
/// - `POST /api/simulation/step` -- advance by N steps
/// - `POST /api/simulation/reset` -- discard the session
/// - `GET /api/simulation/stats` -- current stats snapshot
/// - `GET /api/simulation/history` -- sampled metric history
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // Simulation API
        .route("/api/simulation/init", post(handlers::init_simulation))
        .route("/api/simulation/step", post(handlers::step_simulation))
        .route("/api/simulation/reset", post(handlers::reset_simulation))
        .route("/api/simulation/stats", get(handlers::get_stats))
        .route("/api/simulation/history", get(handlers::get_history))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
