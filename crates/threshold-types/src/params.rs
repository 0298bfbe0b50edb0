//! Initialization parameters for a simulation session.
//!
//! Parameters arrive as JSON from the hosting layer. Every field has a
//! default so a partial (or empty) body initializes a standard
//! population. Unrecognized keys are captured and stored untouched so
//! callers can round-trip experimental knobs without the engine growing
//! an opinion about them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Configuration snapshot fixed at initialization.
///
/// Immutable for the simulation's lifetime; a new initialization replaces
/// it wholesale. Validation happens at simulation construction, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Total number of agents across all three bands.
    #[serde(default = "default_n_agents")]
    pub n_agents: usize,

    /// Income multiplier applied to capitalists by the AGI deployment
    /// shock. Also the denominator of the AGI surplus formula.
    #[serde(default = "default_agi_boost")]
    pub agi_boost: f64,

    /// Reserved behavioral knob. Accepted and stored, never read by the
    /// step rule.
    #[serde(default = "default_worker_rationality")]
    pub worker_rationality: f64,

    /// Reserved behavioral knob. Accepted and stored, never read by the
    /// step rule.
    #[serde(default = "default_herd_effect")]
    pub herd_effect: f64,

    /// Universal basic income added to every worker's income each step.
    /// Zero disables the policy.
    #[serde(default)]
    pub ubi: f64,

    /// Tax rate on the AGI-attributable share of capitalist income,
    /// redistributed equally to workers. Inert until the shock fires.
    #[serde(default)]
    pub compute_tax: f64,

    /// Reserved work-hours knob. Accepted and stored, never read by the
    /// step rule.
    #[serde(default = "default_work_hours")]
    pub work_hours: f64,

    /// Optional seed for the population draws. When present, two
    /// initializations with the same parameters build identical
    /// populations.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Unrecognized keys, passed through and stored but otherwise unused.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            n_agents: default_n_agents(),
            agi_boost: default_agi_boost(),
            worker_rationality: default_worker_rationality(),
            herd_effect: default_herd_effect(),
            ubi: 0.0,
            compute_tax: 0.0,
            work_hours: default_work_hours(),
            seed: None,
            extra: BTreeMap::new(),
        }
    }
}

const fn default_n_agents() -> usize {
    1000
}

const fn default_agi_boost() -> f64 {
    5.0
}

const fn default_worker_rationality() -> f64 {
    0.4
}

const fn default_herd_effect() -> f64 {
    0.5
}

const fn default_work_hours() -> f64 {
    4.0
}
