//! Enumeration types for the Threshold economy simulation.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AgentKind
// ---------------------------------------------------------------------------

/// The economic class of an agent. Immutable after creation.
///
/// The population partitions into three contiguous bands by construction:
/// 80% workers, 19.9% capitalists, 0.1% government (floor division, so
/// totals can be off by rounding at small populations).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    /// Wage earner. Receives UBI and compute-tax redistribution.
    Worker,
    /// Capital owner. Compounds wealth each step and absorbs the AGI boost.
    Capitalist,
    /// The single regulating agent. Participates in no policy pass.
    Government,
}

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

/// Per-step behavioral rule assigned at creation. Immutable.
///
/// Matched exhaustively in the strategy phase -- there is no fallthrough
/// for unrecognized values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// No direct effect in the strategy phase.
    Normal,
    /// Bank a share of income at the cost of a little happiness.
    Save,
    /// Burn wealth down for a little happiness, while wealth lasts.
    Spend,
    /// Compound wealth and income. Only effective for capitalists.
    Invest,
    /// Government stance; no direct effect in the strategy phase.
    Regulate,
}

// ---------------------------------------------------------------------------
// EventSeverity
// ---------------------------------------------------------------------------

/// Classification of a derived simulation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventSeverity {
    /// Something is off -- inequality or stagnation past a threshold.
    Warning,
    /// The system reached a desirable configuration.
    Success,
}
