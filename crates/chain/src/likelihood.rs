//! Sequence likelihood under a Markov chain, in linear and log domain.

use crate::model::MarkovModel;

/// Probability of observing exactly the sequence `x` under `model`.
///
/// Computed as `init[x0] * Π trans[x_{t-1}][x_t]` over adjacent pairs. The
/// empty sequence has probability 1.0 (the empty product).
///
/// # Panics
///
/// Panics if any state in `x` is outside `0..model.num_states()`.
pub fn likelihood(x: &[usize], model: &MarkovModel) -> f64 {
    if x.is_empty() {
        return 1.0;
    }
    let mut prob = model.init_prob(x[0]);
    for pair in x.windows(2) {
        prob *= model.trans_prob(pair[0], pair[1]);
    }
    prob
}

/// Log-probability of observing exactly the sequence `x` under `model`.
///
/// Computed as `ln(init[x0]) + Σ ln(trans[x_{t-1}][x_t])`. The empty
/// sequence has log-probability 0.0 (`ln(1)`).
///
/// No guard is applied to non-positive probabilities: a zero entry yields
/// `-inf` and a negative entry yields NaN, per IEEE-754 `ln` semantics.
///
/// # Panics
///
/// Panics if any state in `x` is outside `0..model.num_states()`.
pub fn log_likelihood(x: &[usize], model: &MarkovModel) -> f64 {
    if x.is_empty() {
        return 0.0;
    }
    let mut log_prob = model.init_prob(x[0]).ln();
    for pair in x.windows(2) {
        log_prob += model.trans_prob(pair[0], pair[1]).ln();
    }
    log_prob
}
