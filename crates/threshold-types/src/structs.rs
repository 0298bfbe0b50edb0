//! Core entity structs for the Threshold economy simulation.

use serde::{Deserialize, Serialize};

use crate::enums::{AgentKind, EventSeverity, Strategy};
use crate::ids::AgentId;

// ---------------------------------------------------------------------------
// Agent
// ---------------------------------------------------------------------------

/// One economic actor.
///
/// `kind` and `strategy` are fixed at creation; `wealth`, `income`, and
/// `happiness` are mutated every step by the strategy and policy rules.
/// `happiness` is clamped to [0, 1] after every step; `income` may go
/// negative under the capped-taxation edge case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Dense index assigned at creation, stable for the agent's lifetime.
    pub id: AgentId,
    /// Economic class. Immutable.
    pub kind: AgentKind,
    /// Non-negative stock of assets.
    pub wealth: f64,
    /// Per-step flow of earnings.
    pub income: f64,
    /// Well-being in [0, 1].
    pub happiness: f64,
    /// Which per-step transition rule applies. Immutable.
    pub strategy: Strategy,
}

impl Agent {
    /// Create a worker with the given initial wealth and income draws.
    pub const fn worker(id: AgentId, wealth: f64, income: f64) -> Self {
        Self {
            id,
            kind: AgentKind::Worker,
            wealth,
            income,
            happiness: 0.6,
            strategy: Strategy::Normal,
        }
    }

    /// Create a capitalist with the given initial wealth and income draws.
    pub const fn capitalist(id: AgentId, wealth: f64, income: f64) -> Self {
        Self {
            id,
            kind: AgentKind::Capitalist,
            wealth,
            income,
            happiness: 0.7,
            strategy: Strategy::Invest,
        }
    }

    /// Create the government agent. Fixed treasury, no income.
    pub const fn government(id: AgentId) -> Self {
        Self {
            id,
            kind: AgentKind::Government,
            wealth: 1_000_000.0,
            income: 0.0,
            happiness: 0.5,
            strategy: Strategy::Regulate,
        }
    }
}

// ---------------------------------------------------------------------------
// History
// ---------------------------------------------------------------------------

/// Aggregate metric history, sampled every fifth step.
///
/// Five parallel sequences appended to together; indices are aligned
/// positionally. Length grows monotonically and is never truncated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    /// The step numbers at which samples were taken.
    pub steps: Vec<u64>,
    /// Gini coefficient at each sampled step.
    pub gini: Vec<f64>,
    /// Money velocity at each sampled step.
    pub velocity: Vec<f64>,
    /// Mean worker happiness at each sampled step.
    pub worker_happiness: Vec<f64>,
    /// Mean capitalist happiness at each sampled step.
    pub capitalist_happiness: Vec<f64>,
}

impl History {
    /// Create an empty history.
    pub const fn new() -> Self {
        Self {
            steps: Vec::new(),
            gini: Vec::new(),
            velocity: Vec::new(),
            worker_happiness: Vec::new(),
            capitalist_happiness: Vec::new(),
        }
    }

    /// Append one sample to all five sequences at once.
    ///
    /// Going through this method is what keeps the sequences positionally
    /// aligned.
    pub fn push_sample(
        &mut self,
        step: u64,
        gini: f64,
        velocity: f64,
        worker_happiness: f64,
        capitalist_happiness: f64,
    ) {
        self.steps.push(step);
        self.gini.push(gini);
        self.velocity.push(velocity);
        self.worker_happiness.push(worker_happiness);
        self.capitalist_happiness.push(capitalist_happiness);
    }

    /// Number of samples taken so far.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether any sample has been taken.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

// ---------------------------------------------------------------------------
// StatsSnapshot
// ---------------------------------------------------------------------------

/// Point-in-time summary of the simulation.
///
/// Cohort means over an empty cohort are reported as 0.0 rather than NaN
/// so the snapshot is always JSON-representable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Current step counter.
    pub step: u64,
    /// Gini coefficient over all agents' wealth.
    pub gini: f64,
    /// Money velocity: aggregate income over aggregate wealth, times 10.
    pub velocity: f64,
    /// Mean happiness across workers.
    pub worker_happiness: f64,
    /// Mean happiness across capitalists.
    pub capitalist_happiness: f64,
    /// Whether the AGI deployment shock has fired.
    pub agi_deployed: bool,
    /// Number of worker agents.
    pub worker_count: usize,
    /// Number of capitalist agents.
    pub capitalist_count: usize,
    /// Mean wealth across workers.
    pub avg_worker_wealth: f64,
    /// Mean wealth across capitalists.
    pub avg_capitalist_wealth: f64,
}

// ---------------------------------------------------------------------------
// SimulationEvent
// ---------------------------------------------------------------------------

/// A classified message derived from a freshly computed stats snapshot.
///
/// Events are recomputed on every advance call and never stored in
/// history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Severity classification.
    pub severity: EventSeverity,
    /// Human-readable message.
    pub message: String,
    /// The step at which the triggering snapshot was taken.
    pub step: u64,
    /// RFC 3339 timestamp when the event was derived.
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_constructors_fix_strategy_and_happiness() {
        let w = Agent::worker(AgentId::from(0), 10.0, 100.0);
        assert_eq!(w.kind, AgentKind::Worker);
        assert_eq!(w.strategy, Strategy::Normal);
        assert!((w.happiness - 0.6).abs() < f64::EPSILON);

        let c = Agent::capitalist(AgentId::from(1), 400.0, 500.0);
        assert_eq!(c.strategy, Strategy::Invest);
        assert!((c.happiness - 0.7).abs() < f64::EPSILON);

        let g = Agent::government(AgentId::from(2));
        assert_eq!(g.strategy, Strategy::Regulate);
        assert!((g.wealth - 1_000_000.0).abs() < f64::EPSILON);
        assert!(g.income.abs() < f64::EPSILON);
    }

    #[test]
    fn history_sequences_stay_aligned() {
        let mut history = History::new();
        assert!(history.is_empty());

        history.push_sample(5, 0.4, 1.2, 0.6, 0.7);
        history.push_sample(10, 0.5, 1.1, 0.55, 0.72);

        assert_eq!(history.len(), 2);
        assert_eq!(history.steps, vec![5, 10]);
        assert_eq!(history.gini.len(), 2);
        assert_eq!(history.velocity.len(), 2);
        assert_eq!(history.worker_happiness.len(), 2);
        assert_eq!(history.capitalist_happiness.len(), 2);
    }

    #[test]
    fn stats_snapshot_roundtrip_serde() {
        let snapshot = StatsSnapshot {
            step: 5,
            gini: 0.42,
            velocity: 1.3,
            worker_happiness: 0.6,
            capitalist_happiness: 0.7,
            agi_deployed: false,
            worker_count: 800,
            capitalist_count: 199,
            avg_worker_wealth: 8.5,
            avg_capitalist_wealth: 700.0,
        };
        let json = serde_json::to_string(&snapshot).unwrap_or_default();
        let back: Result<StatsSnapshot, _> = serde_json::from_str(&json);
        assert_eq!(back.ok(), Some(snapshot));
    }
}
