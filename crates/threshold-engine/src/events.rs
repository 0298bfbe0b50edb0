//! Threshold checks deriving classified events from a stats snapshot.
//!
//! After each advance batch the hosting layer derives events from the
//! freshly computed stats. The three checks are independent,
//! non-exclusive, and order-stable: inequality first, then velocity,
//! then steady state. Events are recomputed each call and never stored
//! in history.

use chrono::Utc;

use threshold_types::{EventSeverity, SimulationEvent, StatsSnapshot};

/// Gini level above which inequality is flagged.
const GINI_WARNING_THRESHOLD: f64 = 0.7;

/// Velocity level below which spending is considered near-stagnant.
const VELOCITY_WARNING_THRESHOLD: f64 = 0.5;

/// Gini level the steady-state check requires staying under.
const STEADY_STATE_GINI: f64 = 0.5;

/// Velocity level the steady-state check requires staying above.
const STEADY_STATE_VELOCITY: f64 = 1.5;

/// Run the three threshold checks against a snapshot.
pub fn derive_events(stats: &StatsSnapshot) -> Vec<SimulationEvent> {
    let mut events = Vec::new();

    if stats.gini > GINI_WARNING_THRESHOLD {
        events.push(event(
            EventSeverity::Warning,
            format!("Severe wealth inequality: Gini coefficient at {:.3}", stats.gini),
            stats.step,
        ));
    }

    if stats.velocity < VELOCITY_WARNING_THRESHOLD {
        events.push(event(
            EventSeverity::Warning,
            format!(
                "Money velocity critically low at {:.3}: spending is near-stagnant",
                stats.velocity
            ),
            stats.step,
        ));
    }

    if stats.gini < STEADY_STATE_GINI
        && stats.velocity > STEADY_STATE_VELOCITY
        && stats.agi_deployed
    {
        events.push(event(
            EventSeverity::Success,
            String::from("System reached steady state: low inequality with active circulation"),
            stats.step,
        ));
    }

    events
}

fn event(severity: EventSeverity, message: String, step: u64) -> SimulationEvent {
    SimulationEvent {
        severity,
        message,
        step,
        created_at: Utc::now().to_rfc3339(),
    }
}
