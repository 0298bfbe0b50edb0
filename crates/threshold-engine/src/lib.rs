//! Simulation engine for the Threshold economy simulation.
//!
//! This crate owns all modeling logic: building the agent population,
//! the per-step state-transition rule, the aggregate metrics, the AGI
//! deployment shock, and the redistribution policies. It performs no
//! I/O -- the observer crate hosts it behind HTTP.
//!
//! # Modules
//!
//! - [`error`] -- Typed parameter rejection ([`ParameterError`])
//! - [`events`] -- Threshold checks deriving classified events from stats
//! - [`metrics`] -- Gini coefficient and money velocity
//! - [`policy`] -- UBI and compute-tax application
//! - [`population`] -- Three-band population construction
//! - [`simulation`] -- The [`Simulation`] handle tying it all together
//! - [`strategy`] -- The per-agent strategy phase of each step

pub mod error;
pub mod events;
pub mod metrics;
pub mod policy;
pub mod population;
pub mod simulation;
pub mod strategy;

// Re-export primary types at crate root for convenience.
pub use error::ParameterError;
pub use events::derive_events;
pub use simulation::Simulation;
