//! The strategy phase of each step.
//!
//! Every agent carries an immutable [`Strategy`] chosen at creation.
//! The phase applies each agent's rule independently -- there is no
//! agent-to-agent interaction -- and finishes by clamping every agent's
//! happiness back into [0, 1].
//!
//! Order of operations per step:
//!
//! 1. Apply the strategy rule to every agent
//! 2. Clamp happiness to [0, 1]

use threshold_types::{Agent, AgentKind, Strategy};

/// Share of income banked by the `Save` strategy each step.
const SAVE_INCOME_SHARE: f64 = 0.3;

/// Happiness cost of saving each step.
const SAVE_HAPPINESS_COST: f64 = 0.005;

/// Minimum wealth below which the `Spend` strategy stops burning assets.
const SPEND_WEALTH_FLOOR: f64 = 10.0;

/// Multiplicative wealth decay applied by `Spend`.
const SPEND_WEALTH_DECAY: f64 = 0.95;

/// Happiness gained by spending each step.
const SPEND_HAPPINESS_GAIN: f64 = 0.01;

/// Multiplicative wealth growth applied by `Invest`.
const INVEST_WEALTH_GROWTH: f64 = 1.02;

/// Multiplicative income growth applied by `Invest`.
const INVEST_INCOME_GROWTH: f64 = 1.002;

/// Apply the strategy phase to the whole population, then clamp
/// happiness.
pub fn apply_strategy_phase(agents: &mut [Agent]) {
    for agent in agents.iter_mut() {
        apply_strategy(agent);
    }
    for agent in agents.iter_mut() {
        agent.happiness = agent.happiness.clamp(0.0, 1.0);
    }
}

/// Apply one agent's strategy rule. The match is exhaustive; adding a
/// strategy without a rule is a compile error.
fn apply_strategy(agent: &mut Agent) {
    match agent.strategy {
        Strategy::Save => {
            agent.wealth += agent.income * SAVE_INCOME_SHARE;
            agent.happiness = (agent.happiness - SAVE_HAPPINESS_COST).max(0.0);
        }
        Strategy::Spend => {
            if agent.wealth > SPEND_WEALTH_FLOOR {
                agent.wealth *= SPEND_WEALTH_DECAY;
                agent.happiness = (agent.happiness + SPEND_HAPPINESS_GAIN).min(1.0);
            }
        }
        Strategy::Invest => {
            // Invest only compounds for actual capital owners.
            if agent.kind == AgentKind::Capitalist {
                agent.wealth *= INVEST_WEALTH_GROWTH;
                agent.income *= INVEST_INCOME_GROWTH;
            }
        }
        Strategy::Normal | Strategy::Regulate => {}
    }
}
