//! Error types for the threshold-engine crate.
//!
//! Configuration is validated at simulation construction rather than
//! letting malformed numbers flow through the arithmetic. All rejections
//! name the offending field so the hosting layer can report them
//! verbatim.

/// Upper bound on the population size accepted at initialization.
pub const MAX_AGENTS: usize = 1_000_000;

/// Errors raised when initialization parameters fail validation.
#[derive(Debug, thiserror::Error)]
pub enum ParameterError {
    /// The requested population exceeds the configured bound.
    #[error("n_agents {requested} exceeds the maximum population of {max}")]
    TooManyAgents {
        /// The population size the caller asked for.
        requested: usize,
        /// The enforced upper bound ([`MAX_AGENTS`]).
        max: usize,
    },

    /// A numeric knob was NaN or infinite.
    #[error("parameter `{field}` must be a finite number")]
    NotFinite {
        /// Name of the offending field.
        field: &'static str,
    },

    /// The AGI boost must be strictly positive -- the surplus formula
    /// divides by it.
    #[error("agi_boost must be positive, got {value}")]
    NonPositiveAgiBoost {
        /// The rejected value.
        value: f64,
    },

    /// A knob that only makes sense non-negative was negative.
    #[error("parameter `{field}` must be non-negative, got {value}")]
    Negative {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The compute-tax rate is a fraction of surplus income.
    #[error("compute_tax must be within [0, 1], got {value}")]
    TaxRateOutOfRange {
        /// The rejected value.
        value: f64,
    },
}
