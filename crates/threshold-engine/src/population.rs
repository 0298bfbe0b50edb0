//! Three-band population construction.
//!
//! The population partitions into contiguous bands by construction:
//! 80% workers, the next 19.9% capitalists, and whatever remains (0.1%
//! at scale) government. Band sizes use floor division, so totals can be
//! off by rounding at small populations -- the government band absorbs
//! the remainder and is therefore never empty for `n >= 1`.
//!
//! Initial wealth is drawn log-normally (workers centered well below
//! capitalists), income uniformly around a band-specific mean. All draws
//! come from the caller-supplied generator, so a seeded generator
//! reproduces the population exactly.

use rand::Rng;

use threshold_types::{Agent, AgentId};

/// Fraction of the population assigned to the worker band.
const WORKER_SHARE: f64 = 0.8;

/// Cumulative fraction assigned to workers plus capitalists; the
/// remainder becomes government.
const NON_GOVERNMENT_SHARE: f64 = 0.999;

/// Band sizes for a population of `n` agents: (workers, capitalists,
/// government).
///
/// Workers and the worker+capitalist cutoff both use floor division;
/// the government count is the remainder.
pub fn band_counts(n: usize) -> (usize, usize, usize) {
    let workers = (n as f64 * WORKER_SHARE).floor() as usize;
    let non_government = (n as f64 * NON_GOVERNMENT_SHARE).floor() as usize;
    let capitalists = non_government.saturating_sub(workers);
    let government = n.saturating_sub(workers).saturating_sub(capitalists);
    (workers, capitalists, government)
}

/// Build the full agent population in band order with dense ids 0..n-1.
///
/// Draws per band:
/// - worker wealth `exp(2 + U[0,0.5))`, income `100 + (U[0,1) - 0.5) * 40`
/// - capitalist wealth `exp(6 + U[0,1.5))`, income `500 + (U[0,1) - 0.5) * 400`
/// - government wealth fixed at 1,000,000, income 0
pub fn build_population<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Agent> {
    let (workers, capitalists, _) = band_counts(n);
    let mut agents = Vec::with_capacity(n);

    for index in 0..n {
        let id = AgentId::from(index as u32);
        if index < workers {
            let wealth = (2.0 + 0.5 * rng.random::<f64>()).exp();
            let income = 100.0 + (rng.random::<f64>() - 0.5) * 40.0;
            agents.push(Agent::worker(id, wealth, income));
        } else if index < workers.saturating_add(capitalists) {
            let wealth = (6.0 + 1.5 * rng.random::<f64>()).exp();
            let income = 500.0 + (rng.random::<f64>() - 0.5) * 400.0;
            agents.push(Agent::capitalist(id, wealth, income));
        } else {
            agents.push(Agent::government(id));
        }
    }

    agents
}
