//! Joint probability of a hidden/observed sequence pair, in linear and log
//! domain.

use crate::model::HiddenMarkovModel;

/// Probability of the hidden sequence `hidden` occurring together with the
/// observed sequence `observed` under `model`.
///
/// Computed as `init[z0] * emit[z0][x0] * Π trans[z_{t-1}][z_t] *
/// emit[z_t][x_t]`. Two empty sequences have probability 1.0.
///
/// # Panics
///
/// Panics if `hidden` and `observed` differ in length, or if any hidden
/// state or observation symbol is outside its table's bounds.
pub fn joint_prob(hidden: &[usize], observed: &[usize], model: &HiddenMarkovModel) -> f64 {
    assert_eq!(
        hidden.len(),
        observed.len(),
        "hidden and observed sequences must have equal length: {} vs {}",
        hidden.len(),
        observed.len()
    );
    if hidden.is_empty() {
        return 1.0;
    }
    let mut prob = model.init_prob(hidden[0]) * model.emit_prob(hidden[0], observed[0]);
    for t in 1..hidden.len() {
        prob *= model.trans_prob(hidden[t - 1], hidden[t]) * model.emit_prob(hidden[t], observed[t]);
    }
    prob
}

/// Log-probability analogue of [`joint_prob`].
///
/// Sums `ln(init[z0]) + ln(emit[z0][x0])` plus per-step `ln(trans) +
/// ln(emit)`. Two empty sequences have log-probability 0.0. Non-positive
/// probabilities are not guarded: zeros yield `-inf`, negatives yield NaN.
///
/// # Panics
///
/// Panics if `hidden` and `observed` differ in length, or if any hidden
/// state or observation symbol is outside its table's bounds.
pub fn log_joint_prob(hidden: &[usize], observed: &[usize], model: &HiddenMarkovModel) -> f64 {
    assert_eq!(
        hidden.len(),
        observed.len(),
        "hidden and observed sequences must have equal length: {} vs {}",
        hidden.len(),
        observed.len()
    );
    if hidden.is_empty() {
        return 0.0;
    }
    let mut log_prob =
        model.init_prob(hidden[0]).ln() + model.emit_prob(hidden[0], observed[0]).ln();
    for t in 1..hidden.len() {
        log_prob += model.trans_prob(hidden[t - 1], hidden[t]).ln()
            + model.emit_prob(hidden[t], observed[t]).ln();
    }
    log_prob
}
