//! Shared application state for the Observer API server.
//!
//! [`AppState`] holds the single simulation session slot. The engine
//! keeps no global state of its own; whoever owns the handle owns the
//! simulation, and this server owns exactly one at a time.

use threshold_engine::Simulation;
use tokio::sync::RwLock;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor. The write lock serializes initialize/advance/reset;
/// stats and history queries take the read lock.
#[derive(Debug)]
pub struct AppState {
    /// The current simulation session, absent until the first
    /// initialize and after a reset.
    pub session: RwLock<Option<Simulation>>,
}

impl AppState {
    /// Create application state with no active session.
    pub const fn new() -> Self {
        Self {
            session: RwLock::const_new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
