//! REST API endpoint handlers for the Observer server.
//!
//! All handlers go through the session slot in the shared [`AppState`].
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `POST` | `/api/simulation/init` | Initialize a fresh simulation |
//! | `POST` | `/api/simulation/step` | Advance by N steps (optional AGI trigger) |
//! | `POST` | `/api/simulation/reset` | Discard the current session |
//! | `GET` | `/api/simulation/stats` | Current stats snapshot |
//! | `GET` | `/api/simulation/history` | Full sampled metric history |

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::info;

use threshold_engine::{Simulation, derive_events};
use threshold_types::{History, SimulationEvent, SimulationId, SimulationParameters, StatsSnapshot};

use crate::error::ObserverError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/simulation/step`.
///
/// Both fields are optional; an absent body advances five steps without
/// touching the deployment flag.
#[derive(Debug, serde::Deserialize)]
pub struct StepRequest {
    /// How many steps to advance (default 5).
    #[serde(default = "default_steps")]
    pub steps: u64,
    /// Trigger the one-time AGI deployment shock before stepping.
    #[serde(default)]
    pub deploy_agi: bool,
}

impl Default for StepRequest {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            deploy_agi: false,
        }
    }
}

const fn default_steps() -> u64 {
    5
}

/// Response body for `POST /api/simulation/init`.
#[derive(Debug, serde::Serialize)]
struct InitResponse {
    /// Identifier of the freshly minted session.
    simulation_id: SimulationId,
    /// Stats of the just-built population (step 0).
    stats: StatsSnapshot,
    /// Empty history.
    history: History,
}

/// Response body for `POST /api/simulation/step`.
#[derive(Debug, serde::Serialize)]
struct StepResponse {
    /// Stats after the batch completed.
    stats: StatsSnapshot,
    /// The full sampled history so far.
    history: History,
    /// Threshold events derived from the fresh stats.
    events: Vec<SimulationEvent>,
}

/// Generic success response.
#[derive(Debug, serde::Serialize)]
struct OkResponse {
    /// Whether the operation succeeded.
    ok: bool,
    /// Human-readable message.
    message: String,
}

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing the session status and API links.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let session = state.session.read().await;

    let (status, step, agents, gini, agi) = session.as_ref().map_or_else(
        || (String::from("IDLE"), 0, 0, String::from("-"), "-"),
        |sim| {
            let stats = sim.stats();
            (
                String::from("RUNNING"),
                stats.step,
                sim.agents().len(),
                format!("{:.3}", stats.gini),
                if stats.agi_deployed { "yes" } else { "no" },
            )
        },
    );

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Threshold Observer</title>
    <style>
        body {{
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }}
        h1 {{ color: #58a6ff; margin-bottom: 0.25rem; }}
        .subtitle {{ color: #8b949e; margin-top: 0; }}
        .metric {{
            display: inline-block;
            background: #161b22;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 1rem 1.5rem;
            margin: 0.5rem 0.5rem 0.5rem 0;
            min-width: 120px;
        }}
        .metric .label {{ color: #8b949e; font-size: 0.85rem; }}
        .metric .value {{ color: #58a6ff; font-size: 1.5rem; font-weight: bold; }}
        a {{ color: #58a6ff; text-decoration: none; }}
        a:hover {{ text-decoration: underline; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; }}
        .status {{ color: #3fb950; font-weight: bold; }}
    </style>
</head>
<body>
    <h1>Threshold Observer</h1>
    <p class="subtitle">AGI-shock economy simulation</p>

    <p>Status: <span class="status">{status}</span></p>

    <div>
        <div class="metric">
            <div class="label">Step</div>
            <div class="value">{step}</div>
        </div>
        <div class="metric">
            <div class="label">Agents</div>
            <div class="value">{agents}</div>
        </div>
        <div class="metric">
            <div class="label">Gini</div>
            <div class="value">{gini}</div>
        </div>
        <div class="metric">
            <div class="label">AGI deployed</div>
            <div class="value">{agi}</div>
        </div>
    </div>

    <h2>API Endpoints</h2>
    <ul>
        <li>POST <a href="/api/simulation/init">/api/simulation/init</a> -- Initialize a simulation</li>
        <li>POST /api/simulation/step -- Advance (body: steps, deploy_agi)</li>
        <li>POST /api/simulation/reset -- Discard the session</li>
        <li>GET <a href="/api/simulation/stats">/api/simulation/stats</a> -- Current stats snapshot</li>
        <li>GET <a href="/api/simulation/history">/api/simulation/history</a> -- Sampled metric history</li>
    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// POST /api/simulation/init
// ---------------------------------------------------------------------------

/// Initialize a fresh simulation, replacing any prior session.
///
/// The body is a partial parameter set; omitted fields (or an omitted
/// body) take their defaults. When a `seed` is supplied, the population
/// draws are reproducible.
pub async fn init_simulation(
    State(state): State<Arc<AppState>>,
    body: Option<Json<SimulationParameters>>,
) -> Result<impl IntoResponse, ObserverError> {
    let params = body.map_or_else(SimulationParameters::default, |Json(p)| p);

    let mut rng = params
        .seed
        .map_or_else(SmallRng::from_os_rng, SmallRng::seed_from_u64);
    let simulation = Simulation::new(params, &mut rng)?;

    let response = InitResponse {
        simulation_id: simulation.id(),
        stats: simulation.stats(),
        history: simulation.history().clone(),
    };

    let mut session = state.session.write().await;
    if let Some(previous) = session.as_ref() {
        info!(previous_id = %previous.id(), "Replacing existing session");
    }
    *session = Some(simulation);

    Ok(Json(response))
}

// ---------------------------------------------------------------------------
// POST /api/simulation/step
// ---------------------------------------------------------------------------

/// Advance the simulation by N steps, optionally firing the AGI
/// deployment shock first.
///
/// The whole batch runs synchronously while holding the session write
/// lock; there is no cancellation or partial progress. Returns the
/// post-batch stats, the full history, and the derived threshold
/// events.
pub async fn step_simulation(
    State(state): State<Arc<AppState>>,
    body: Option<Json<StepRequest>>,
) -> Result<impl IntoResponse, ObserverError> {
    let request = body.map_or_else(StepRequest::default, |Json(r)| r);

    let mut session = state.session.write().await;
    let simulation = session.as_mut().ok_or(ObserverError::Uninitialized)?;

    if request.deploy_agi {
        simulation.deploy_agi();
    }
    simulation.advance_by(request.steps);

    let stats = simulation.stats();
    let events = derive_events(&stats);

    Ok(Json(StepResponse {
        stats,
        history: simulation.history().clone(),
        events,
    }))
}

// ---------------------------------------------------------------------------
// POST /api/simulation/reset
// ---------------------------------------------------------------------------

/// Discard the current session.
///
/// Succeeds whether or not a session exists; a subsequent stats query
/// reports the uninitialized error until the next initialize.
pub async fn reset_simulation(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut session = state.session.write().await;
    let had_session = session.take().is_some();

    let message = if had_session {
        "Simulation discarded"
    } else {
        "No simulation to discard"
    };

    Json(OkResponse {
        ok: true,
        message: String::from(message),
    })
}

// ---------------------------------------------------------------------------
// GET /api/simulation/stats
// ---------------------------------------------------------------------------

/// Return the current stats snapshot.
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ObserverError> {
    let session = state.session.read().await;
    let simulation = session.as_ref().ok_or(ObserverError::Uninitialized)?;
    Ok(Json(simulation.stats()))
}

// ---------------------------------------------------------------------------
// GET /api/simulation/history
// ---------------------------------------------------------------------------

/// Return the full sampled metric history.
///
/// With no active session this returns the empty-sequence shape rather
/// than an error, so dashboards can poll it unconditionally.
pub async fn get_history(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let session = state.session.read().await;
    let history = session
        .as_ref()
        .map_or_else(History::new, |sim| sim.history().clone());
    Json(history)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_request_defaults() {
        let request: StepRequest = serde_json::from_str("{}").unwrap_or_default();
        assert_eq!(request.steps, 5);
        assert!(!request.deploy_agi);
    }

    #[test]
    fn step_request_accepts_partial_bodies() {
        let request: StepRequest =
            serde_json::from_str(r#"{"deploy_agi": true}"#).unwrap_or_default();
        assert_eq!(request.steps, 5);
        assert!(request.deploy_agi);
    }
}
