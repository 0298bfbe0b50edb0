//! The [`Simulation`] handle: owns the population, the step counter, the
//! deployment flag, and the metric history.
//!
//! The handle is an explicit session object owned by the calling layer.
//! The engine keeps no global state, so two handles are two fully
//! isolated simulations. Construction validates parameters and draws the
//! population from a caller-supplied generator; everything after that is
//! deterministic.
//!
//! Each advance runs three phases in order:
//!
//! 1. **Strategy** -- every agent applies its immutable per-step rule
//! 2. **Policy** -- UBI and, once AGI is deployed, the compute tax
//! 3. **Sampling** -- every fifth step, aggregate metrics are appended
//!    to history

use rand::Rng;
use tracing::{debug, info};

use threshold_types::{
    Agent, AgentKind, History, SimulationId, SimulationParameters, StatsSnapshot,
};

use crate::error::{MAX_AGENTS, ParameterError};
use crate::{metrics, policy, population, strategy};

/// History is sampled at every step divisible by this interval.
const HISTORY_SAMPLE_INTERVAL: u64 = 5;

/// Income multiplier applied to workers by the deployment shock.
const AGI_WORKER_INCOME_MULTIPLIER: f64 = 0.3;

/// Happiness multiplier applied to workers by the deployment shock.
const AGI_WORKER_HAPPINESS_MULTIPLIER: f64 = 0.5;

/// Wealth multiplier applied to capitalists by the deployment shock.
const AGI_CAPITALIST_WEALTH_MULTIPLIER: f64 = 1.5;

/// One simulation session.
///
/// Mutated in place by [`advance`](Self::advance) and
/// [`deploy_agi`](Self::deploy_agi); read-only for stats and history
/// queries. Dropping the handle discards the session.
#[derive(Debug, Clone)]
pub struct Simulation {
    id: SimulationId,
    params: SimulationParameters,
    step: u64,
    agi_deployed: bool,
    agents: Vec<Agent>,
    history: History,
}

impl Simulation {
    /// Validate parameters and build a fresh session.
    ///
    /// The step counter starts at 0, the deployment flag false, the
    /// history empty. All population draws come from `rng`, so a seeded
    /// generator reproduces the session exactly.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] naming the offending field when the
    /// configuration is rejected.
    pub fn new<R: Rng + ?Sized>(
        params: SimulationParameters,
        rng: &mut R,
    ) -> Result<Self, ParameterError> {
        validate_parameters(&params)?;

        let agents = population::build_population(params.n_agents, rng);
        let (workers, capitalists, government) = population::band_counts(params.n_agents);
        let id = SimulationId::new();

        info!(
            simulation_id = %id,
            n_agents = params.n_agents,
            workers,
            capitalists,
            government,
            agi_boost = params.agi_boost,
            ubi = params.ubi,
            compute_tax = params.compute_tax,
            "Simulation initialized"
        );

        Ok(Self {
            id,
            params,
            step: 0,
            agi_deployed: false,
            agents,
            history: History::new(),
        })
    }

    /// The session identifier minted at construction.
    pub const fn id(&self) -> SimulationId {
        self.id
    }

    /// The parameters the session was built with.
    pub const fn params(&self) -> &SimulationParameters {
        &self.params
    }

    /// The current step counter.
    pub const fn step(&self) -> u64 {
        self.step
    }

    /// Whether the AGI deployment shock has fired.
    pub const fn agi_deployed(&self) -> bool {
        self.agi_deployed
    }

    /// Read-only view of the population.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Read-only view of the sampled metric history.
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Advance the simulation by exactly one discrete time unit.
    pub fn advance(&mut self) {
        self.step = self.step.saturating_add(1);

        strategy::apply_strategy_phase(&mut self.agents);

        let revenue =
            policy::apply_policy_phase(&mut self.agents, &self.params, self.agi_deployed);
        if revenue > 0.0 {
            debug!(step = self.step, revenue, "Compute tax collected");
        }

        if self.step % HISTORY_SAMPLE_INTERVAL == 0 {
            self.sample_history();
        }
    }

    /// Advance by `steps` time units, synchronously, with no partial
    /// progress reporting.
    pub fn advance_by(&mut self, steps: u64) {
        for _ in 0..steps {
            self.advance();
        }
        debug!(step = self.step, advanced = steps, "Batch advanced");
    }

    /// Fire the one-time AGI deployment shock.
    ///
    /// No-op when already deployed. Otherwise capitalists see income
    /// multiplied by the configured boost and wealth by 1.5; workers see
    /// income multiplied by 0.3 and happiness by 0.5. Happiness is not
    /// clamped here -- the next step's strategy phase clamps it. The
    /// government agent is unaffected.
    pub fn deploy_agi(&mut self) {
        if self.agi_deployed {
            return;
        }
        self.agi_deployed = true;

        for agent in &mut self.agents {
            match agent.kind {
                AgentKind::Capitalist => {
                    agent.income *= self.params.agi_boost;
                    agent.wealth *= AGI_CAPITALIST_WEALTH_MULTIPLIER;
                }
                AgentKind::Worker => {
                    agent.income *= AGI_WORKER_INCOME_MULTIPLIER;
                    agent.happiness *= AGI_WORKER_HAPPINESS_MULTIPLIER;
                }
                AgentKind::Government => {}
            }
        }

        info!(
            simulation_id = %self.id,
            step = self.step,
            agi_boost = self.params.agi_boost,
            "AGI deployment shock applied"
        );
    }

    /// Point-in-time stats summary of the current agent state.
    ///
    /// Pure read. Cohort means over an empty cohort are 0.0.
    pub fn stats(&self) -> StatsSnapshot {
        let wealth: Vec<f64> = self.agents.iter().map(|a| a.wealth).collect();

        let (worker_count, worker_happiness_sum, worker_wealth_sum) =
            self.cohort_totals(AgentKind::Worker);
        let (capitalist_count, capitalist_happiness_sum, capitalist_wealth_sum) =
            self.cohort_totals(AgentKind::Capitalist);

        StatsSnapshot {
            step: self.step,
            gini: metrics::gini(&wealth),
            velocity: metrics::velocity(&self.agents),
            worker_happiness: mean_or_zero(worker_happiness_sum, worker_count),
            capitalist_happiness: mean_or_zero(capitalist_happiness_sum, capitalist_count),
            agi_deployed: self.agi_deployed,
            worker_count,
            capitalist_count,
            avg_worker_wealth: mean_or_zero(worker_wealth_sum, worker_count),
            avg_capitalist_wealth: mean_or_zero(capitalist_wealth_sum, capitalist_count),
        }
    }

    /// Count, happiness sum, and wealth sum for one cohort.
    fn cohort_totals(&self, kind: AgentKind) -> (usize, f64, f64) {
        self.agents
            .iter()
            .filter(|a| a.kind == kind)
            .fold((0, 0.0, 0.0), |(count, happiness, wealth), a| {
                (count + 1, happiness + a.happiness, wealth + a.wealth)
            })
    }

    /// Append one sample of aggregate metrics to the history sequences.
    fn sample_history(&mut self) {
        let stats = self.stats();
        self.history.push_sample(
            self.step,
            stats.gini,
            stats.velocity,
            stats.worker_happiness,
            stats.capitalist_happiness,
        );
        debug!(
            step = self.step,
            gini = stats.gini,
            velocity = stats.velocity,
            "History sampled"
        );
    }
}

/// Mean of a cohort total, or 0.0 for an empty cohort.
fn mean_or_zero(sum: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { sum / count as f64 }
}

/// Reject configurations that would corrupt the arithmetic downstream.
///
/// The inert knobs (`worker_rationality`, `herd_effect`, `work_hours`)
/// are still checked for finiteness so a later activation cannot start
/// from garbage.
///
/// # Errors
///
/// Returns a [`ParameterError`] naming the first offending field.
pub fn validate_parameters(params: &SimulationParameters) -> Result<(), ParameterError> {
    if params.n_agents > MAX_AGENTS {
        return Err(ParameterError::TooManyAgents {
            requested: params.n_agents,
            max: MAX_AGENTS,
        });
    }

    for (field, value) in [
        ("agi_boost", params.agi_boost),
        ("worker_rationality", params.worker_rationality),
        ("herd_effect", params.herd_effect),
        ("ubi", params.ubi),
        ("compute_tax", params.compute_tax),
        ("work_hours", params.work_hours),
    ] {
        if !value.is_finite() {
            return Err(ParameterError::NotFinite { field });
        }
    }

    if params.agi_boost <= 0.0 {
        return Err(ParameterError::NonPositiveAgiBoost {
            value: params.agi_boost,
        });
    }

    for (field, value) in [("ubi", params.ubi), ("work_hours", params.work_hours)] {
        if value < 0.0 {
            return Err(ParameterError::Negative { field, value });
        }
    }

    if !(0.0..=1.0).contains(&params.compute_tax) {
        return Err(ParameterError::TaxRateOutOfRange {
            value: params.compute_tax,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn simulation_with(params: SimulationParameters) -> Simulation {
        let mut rng = SmallRng::seed_from_u64(42);
        Simulation::new(params, &mut rng).unwrap_or_else(|e| {
            // Test-only shortcut; construction is expected to succeed.
            panic!("simulation construction failed: {e}")
        })
    }

    fn params_with(n_agents: usize) -> SimulationParameters {
        SimulationParameters {
            n_agents,
            ..SimulationParameters::default()
        }
    }

    #[test]
    fn fresh_simulation_starts_at_step_zero() {
        let sim = simulation_with(params_with(1000));
        assert_eq!(sim.step(), 0);
        assert!(!sim.agi_deployed());
        assert!(sim.history().is_empty());
        assert_eq!(sim.agents().len(), 1000);
    }

    #[test]
    fn stats_reports_band_counts() {
        let sim = simulation_with(params_with(1000));
        let stats = sim.stats();
        assert_eq!(stats.worker_count, 800);
        assert_eq!(stats.capitalist_count, 199);
        assert!(!stats.agi_deployed);
        // Initialization happiness is uniform within each band.
        assert!((stats.worker_happiness - 0.6).abs() < 1e-12);
        assert!((stats.capitalist_happiness - 0.7).abs() < 1e-12);
    }

    #[test]
    fn advance_by_five_samples_history_once() {
        let mut sim = simulation_with(params_with(200));
        sim.advance_by(5);
        assert_eq!(sim.step(), 5);
        assert_eq!(sim.history().len(), 1);
        assert_eq!(sim.history().steps, vec![5]);
    }

    #[test]
    fn advance_by_four_samples_nothing() {
        let mut sim = simulation_with(params_with(200));
        sim.advance_by(4);
        assert_eq!(sim.step(), 4);
        assert!(sim.history().is_empty());
    }

    #[test]
    fn history_grows_monotonically() {
        let mut sim = simulation_with(params_with(100));
        sim.advance_by(23);
        assert_eq!(sim.history().steps, vec![5, 10, 15, 20]);
        assert_eq!(sim.history().gini.len(), 4);
        assert_eq!(sim.history().capitalist_happiness.len(), 4);
    }

    #[test]
    fn deploy_is_idempotent() {
        let mut sim = simulation_with(params_with(1000));
        sim.deploy_agi();
        let after_first = sim.agents().to_vec();
        sim.deploy_agi();
        assert_eq!(sim.agents().to_vec(), after_first);
        assert!(sim.agi_deployed());
    }

    #[test]
    fn deploy_shocks_both_cohorts() {
        let mut sim = simulation_with(params_with(1000));
        let before = sim.agents().to_vec();
        sim.deploy_agi();

        for (old, new) in before.iter().zip(sim.agents()) {
            match new.kind {
                AgentKind::Capitalist => {
                    assert!((new.income - old.income * 5.0).abs() < 1e-9);
                    assert!((new.wealth - old.wealth * 1.5).abs() < 1e-9);
                }
                AgentKind::Worker => {
                    assert!((new.income - old.income * 0.3).abs() < 1e-9);
                    assert!((new.happiness - old.happiness * 0.5).abs() < 1e-12);
                }
                AgentKind::Government => {
                    assert_eq!(new, old);
                }
            }
        }
    }

    #[test]
    fn compute_tax_bites_only_after_deployment() {
        let params = SimulationParameters {
            n_agents: 100,
            compute_tax: 0.5,
            ..SimulationParameters::default()
        };

        let mut sim = simulation_with(params);
        let income_before: f64 = capitalist_income(&sim);
        sim.advance_by(3);
        // Pre-deployment the tax is inert; Invest compounds income by
        // 1.002 per step and nothing else touches it.
        let expected = income_before * 1.002_f64.powi(3);
        assert!((capitalist_income(&sim) - expected).abs() < 1e-6);

        sim.deploy_agi();
        let boosted = capitalist_income(&sim);
        sim.advance();
        // Post-deployment each step first compounds, then taxes away
        // 40% (surplus share 0.8 times rate 0.5).
        let compounded = boosted * 1.002;
        assert!(capitalist_income(&sim) < compounded - 1e-6);
    }

    #[test]
    fn ubi_accumulates_per_worker_per_step() {
        let params = SimulationParameters {
            n_agents: 100,
            ubi: 50.0,
            ..SimulationParameters::default()
        };
        let mut sim = simulation_with(params);
        let incomes_before: Vec<f64> = worker_incomes(&sim);

        sim.advance_by(5);

        // Workers run the Normal strategy, so UBI is the only income
        // effect: exactly 50 * 5 each.
        for (before, after) in incomes_before.iter().zip(worker_incomes(&sim)) {
            assert!((after - before - 250.0).abs() < 1e-9);
        }
        assert_eq!(sim.history().len(), 1);
        assert_eq!(sim.history().steps, vec![5]);
    }

    #[test]
    fn empty_population_is_fully_defined() {
        let mut sim = simulation_with(params_with(0));
        sim.advance_by(5);
        let stats = sim.stats();
        assert!(stats.gini.abs() < f64::EPSILON);
        assert!(stats.velocity.abs() < f64::EPSILON);
        assert!(stats.worker_happiness.abs() < f64::EPSILON);
        assert!(stats.avg_capitalist_wealth.abs() < f64::EPSILON);
        assert_eq!(sim.history().len(), 1);
    }

    #[test]
    fn seeded_sessions_reproduce() {
        let mut rng_a = SmallRng::seed_from_u64(7);
        let mut rng_b = SmallRng::seed_from_u64(7);
        let a = Simulation::new(params_with(300), &mut rng_a).ok();
        let b = Simulation::new(params_with(300), &mut rng_b).ok();
        assert!(a.is_some() && b.is_some());
        if let (Some(a), Some(b)) = (a, b) {
            assert_eq!(a.agents(), b.agents());
            // Session ids stay unique even for identical populations.
            assert_ne!(a.id(), b.id());
        }
    }

    #[test]
    fn validation_rejects_bad_parameters() {
        let cases = [
            SimulationParameters {
                n_agents: MAX_AGENTS + 1,
                ..SimulationParameters::default()
            },
            SimulationParameters {
                agi_boost: 0.0,
                ..SimulationParameters::default()
            },
            SimulationParameters {
                agi_boost: f64::NAN,
                ..SimulationParameters::default()
            },
            SimulationParameters {
                ubi: -1.0,
                ..SimulationParameters::default()
            },
            SimulationParameters {
                compute_tax: 1.5,
                ..SimulationParameters::default()
            },
            SimulationParameters {
                herd_effect: f64::INFINITY,
                ..SimulationParameters::default()
            },
        ];

        for params in cases {
            assert!(validate_parameters(&params).is_err(), "{params:?}");
        }
    }

    #[test]
    fn validation_accepts_the_defaults_and_edges() {
        assert!(validate_parameters(&SimulationParameters::default()).is_ok());
        let edges = SimulationParameters {
            n_agents: 0,
            compute_tax: 1.0,
            ubi: 0.0,
            ..SimulationParameters::default()
        };
        assert!(validate_parameters(&edges).is_ok());
    }

    fn capitalist_income(sim: &Simulation) -> f64 {
        sim.agents()
            .iter()
            .filter(|a| a.kind == AgentKind::Capitalist)
            .map(|a| a.income)
            .sum()
    }

    fn worker_incomes(sim: &Simulation) -> Vec<f64> {
        sim.agents()
            .iter()
            .filter(|a| a.kind == AgentKind::Worker)
            .map(|a| a.income)
            .collect()
    }
}
