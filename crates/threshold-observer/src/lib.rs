//! Observer API server for the Threshold economy simulation.
//!
//! This crate provides an Axum HTTP server that exposes the simulation
//! engine's five operations as REST endpoints:
//!
//! - **`POST /api/simulation/init`** -- build a fresh population
//! - **`POST /api/simulation/step`** -- advance by N steps, optionally
//!   triggering the AGI deployment shock first
//! - **`POST /api/simulation/reset`** -- discard the current session
//! - **`GET /api/simulation/stats`** -- current stats snapshot
//! - **`GET /api/simulation/history`** -- full sampled metric history
//! - **Minimal HTML dashboard** (`GET /`) showing the current step,
//!   population, and headline metrics
//!
//! # Architecture
//!
//! The server owns one session slot: a [`tokio::sync::RwLock`] around an
//! optional [`Simulation`](threshold_engine::Simulation) handle. Each
//! state-mutating request acquires the write lock and runs to
//! completion, so operations serialize; a re-initialize replaces the
//! prior session unconditionally (last writer wins). Routing, CORS, and
//! JSON encoding all live here -- the engine itself performs no I/O.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
