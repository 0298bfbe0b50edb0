//! Redistribution policies: universal basic income and the compute tax.
//!
//! The policy phase runs after the strategy phase and only when at least
//! one policy is live: UBI is live whenever its amount is positive; the
//! compute tax is live only once the AGI shock has fired, regardless of
//! its configured rate.
//!
//! The compute tax targets the AGI-attributable share of capitalist
//! income: with a boost of `b`, a post-shock income `y` decomposes into a
//! baseline `y / b` and a surplus `y * (1 - 1/b)`. Only the surplus is
//! taxed. Collected revenue is split equally across workers in the same
//! step.

use threshold_types::{Agent, AgentKind, SimulationParameters};

/// Happiness gained by each worker per UBI payment.
const UBI_HAPPINESS_GAIN: f64 = 0.005;

/// Happiness lost by each capitalist per tax collection.
const TAX_HAPPINESS_COST: f64 = 0.003;

/// Apply the policy phase to the population.
///
/// Returns the compute-tax revenue collected this step (0.0 when the tax
/// is inactive). Does nothing at all when no policy is live.
pub fn apply_policy_phase(
    agents: &mut [Agent],
    params: &SimulationParameters,
    agi_deployed: bool,
) -> f64 {
    let tax_live = params.compute_tax > 0.0 && agi_deployed;
    if params.ubi <= 0.0 && !tax_live {
        return 0.0;
    }

    if params.ubi > 0.0 {
        for agent in agents.iter_mut() {
            if agent.kind == AgentKind::Worker {
                agent.income += params.ubi;
                agent.happiness = (agent.happiness + UBI_HAPPINESS_GAIN).min(1.0);
            }
        }
    }

    if !tax_live {
        return 0.0;
    }

    let mut revenue = 0.0;
    for agent in agents.iter_mut() {
        if agent.kind == AgentKind::Capitalist {
            let surplus = agent.income * (1.0 - 1.0 / params.agi_boost);
            let tax = surplus * params.compute_tax;
            agent.income -= tax;
            agent.happiness = (agent.happiness - TAX_HAPPINESS_COST).max(0.0);
            revenue += tax;
        }
    }

    let workers = agents
        .iter()
        .filter(|a| a.kind == AgentKind::Worker)
        .count();
    if workers > 0 {
        let share = revenue / workers as f64;
        for agent in agents.iter_mut() {
            if agent.kind == AgentKind::Worker {
                agent.income += share;
            }
        }
    }

    revenue
}

#[cfg(test)]
mod tests {
    use threshold_types::{AgentId, Strategy};

    use super::*;

    fn worker(income: f64) -> Agent {
        Agent::worker(AgentId::from(0), 50.0, income)
    }

    fn capitalist(income: f64) -> Agent {
        Agent::capitalist(AgentId::from(1), 5000.0, income)
    }

    fn params_with(ubi: f64, compute_tax: f64) -> SimulationParameters {
        SimulationParameters {
            ubi,
            compute_tax,
            ..SimulationParameters::default()
        }
    }

    #[test]
    fn phase_is_skipped_when_no_policy_is_live() {
        let mut agents = [worker(100.0), capitalist(500.0)];
        let before = agents.clone();
        let revenue = apply_policy_phase(&mut agents, &params_with(0.0, 0.0), true);
        assert!(revenue.abs() < f64::EPSILON);
        assert_eq!(agents.to_vec(), before.to_vec());
    }

    #[test]
    fn compute_tax_is_inert_before_deployment() {
        let mut agents = [worker(100.0), capitalist(500.0)];
        let before = agents.clone();
        let revenue = apply_policy_phase(&mut agents, &params_with(0.0, 0.5), false);
        assert!(revenue.abs() < f64::EPSILON);
        assert_eq!(agents.to_vec(), before.to_vec());
    }

    #[test]
    fn ubi_raises_worker_income_and_happiness() {
        let mut agents = [worker(100.0), capitalist(500.0)];
        apply_policy_phase(&mut agents, &params_with(50.0, 0.0), false);
        assert!((agents[0].income - 150.0).abs() < 1e-12);
        assert!((agents[0].happiness - 0.605).abs() < 1e-12);
        // Capitalists do not receive UBI.
        assert!((agents[1].income - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn compute_tax_collects_the_surplus_share() {
        // Default boost is 5, so surplus = income * 0.8.
        let mut agents = [worker(100.0), capitalist(500.0)];
        apply_policy_phase(&mut agents, &params_with(0.0, 0.5), true);

        // tax = 500 * 0.8 * 0.5 = 200, all to the single worker.
        assert!((agents[1].income - 300.0).abs() < 1e-9);
        assert!((agents[1].happiness - 0.697).abs() < 1e-12);
        assert!((agents[0].income - 300.0).abs() < 1e-9);
    }

    #[test]
    fn tax_redistribution_conserves_total_income() {
        let mut agents = [
            worker(90.0),
            worker(110.0),
            capitalist(400.0),
            capitalist(600.0),
            Agent::government(AgentId::from(4)),
        ];
        let before: f64 = agents.iter().map(|a| a.income).sum();
        apply_policy_phase(&mut agents, &params_with(0.0, 0.3), true);
        let after: f64 = agents.iter().map(|a| a.income).sum();
        assert!((before - after).abs() < 1e-9);
    }

    #[test]
    fn revenue_with_no_workers_is_kept_out_of_circulation() {
        let mut agents = [capitalist(500.0)];
        let revenue = apply_policy_phase(&mut agents, &params_with(0.0, 0.5), true);
        assert!((revenue - 200.0).abs() < 1e-9);
        assert!((agents[0].income - 300.0).abs() < 1e-9);
    }

    #[test]
    fn government_is_untouched_by_both_policies() {
        let mut agents = [
            worker(100.0),
            capitalist(500.0),
            Agent::government(AgentId::from(2)),
        ];
        apply_policy_phase(&mut agents, &params_with(25.0, 0.5), true);
        assert!(agents[2].income.abs() < f64::EPSILON);
        assert!((agents[2].happiness - 0.5).abs() < f64::EPSILON);
        assert_eq!(agents[2].strategy, Strategy::Regulate);
    }
}
