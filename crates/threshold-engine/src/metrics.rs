//! Aggregate inequality and liquidity metrics.
//!
//! Both metrics are pure functions of the current agent snapshot. Both
//! are total: an empty population or a zero (or negative) wealth total
//! returns exactly 0.0 rather than propagating NaN into history and
//! JSON responses.

use threshold_types::Agent;

/// Scale factor applied to the raw income/wealth ratio.
const VELOCITY_SCALE: f64 = 10.0;

/// Gini coefficient over a set of wealth values.
///
/// Sorts ascending and applies the standard discrete formula over sorted
/// values `w[0..n-1]` with sum `S`:
///
/// ```text
/// G = sum_i (2 * (i + 1) - n - 1) * w[i] / (n * S)
/// ```
///
/// Returns 0.0 for perfect equality, approaching 1.0 as one agent holds
/// everything. For non-negative inputs the result is bounded to [0, 1]
/// by construction.
pub fn gini(wealth: &[f64]) -> f64 {
    let n = wealth.len();
    if n == 0 {
        return 0.0;
    }

    let mut sorted = wealth.to_vec();
    sorted.sort_by(f64::total_cmp);

    let total: f64 = sorted.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }

    let n_f = n as f64;
    let weighted: f64 = sorted
        .iter()
        .enumerate()
        .map(|(i, w)| (2.0 * (i as f64 + 1.0) - n_f - 1.0) * w)
        .sum();

    weighted / (n_f * total)
}

/// Money velocity: aggregate income flow over aggregate wealth stock,
/// scaled by 10.
///
/// A proxy for economic activity. Returns 0.0 when total wealth is zero
/// or negative.
pub fn velocity(agents: &[Agent]) -> f64 {
    let total_wealth: f64 = agents.iter().map(|a| a.wealth).sum();
    if total_wealth <= 0.0 {
        return 0.0;
    }
    let total_income: f64 = agents.iter().map(|a| a.income).sum();
    total_income / total_wealth * VELOCITY_SCALE
}

#[cfg(test)]
mod tests {
    use threshold_types::AgentId;

    use super::*;

    #[test]
    fn gini_of_equal_wealths_is_zero() {
        let g = gini(&[100.0, 100.0, 100.0, 100.0]);
        assert!(g.abs() < 1e-12);
    }

    #[test]
    fn gini_of_empty_population_is_zero() {
        assert!(gini(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn gini_of_zero_total_wealth_is_zero() {
        assert!(gini(&[0.0, 0.0, 0.0]).abs() < f64::EPSILON);
    }

    #[test]
    fn gini_of_concentrated_wealth() {
        // [0, 0, 300] sorted: only i = 2 contributes,
        // (2*3 - 3 - 1) * 300 / (3 * 300) = 600 / 900 = 2/3.
        let g = gini(&[0.0, 0.0, 300.0]);
        assert!((g - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn gini_is_bounded_for_non_negative_inputs() {
        let samples = [1.0, 5.0, 12.0, 0.5, 300.0, 42.0, 7.0, 0.0];
        let g = gini(&samples);
        assert!((0.0..=1.0).contains(&g));
    }

    #[test]
    fn gini_is_order_independent() {
        let ascending = gini(&[1.0, 2.0, 3.0, 4.0]);
        let shuffled = gini(&[3.0, 1.0, 4.0, 2.0]);
        assert!((ascending - shuffled).abs() < 1e-12);
    }

    #[test]
    fn velocity_scales_income_over_wealth() {
        let agents = vec![
            Agent::worker(AgentId::from(0), 600.0, 40.0),
            Agent::worker(AgentId::from(1), 400.0, 60.0),
        ];
        // (40 + 60) / (600 + 400) * 10 = 1.0
        assert!((velocity(&agents) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn velocity_of_empty_population_is_zero() {
        assert!(velocity(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn velocity_of_zero_wealth_is_zero() {
        let agents = vec![Agent::worker(AgentId::from(0), 0.0, 100.0)];
        assert!(velocity(&agents).abs() < f64::EPSILON);
    }
}
