use seqlik_hmm::{joint_prob, log_joint_prob, HiddenMarkovModel};

/// Two hidden states, three observation symbols.
fn example_model() -> HiddenMarkovModel {
    HiddenMarkovModel::new(
        vec![0.2, 0.8],
        vec![vec![0.5, 0.5], vec![0.4, 0.6]],
        vec![vec![0.5, 0.4, 0.1], vec![0.2, 0.4, 0.4]],
    )
}

// ---------------------------------------------------------------------------
// 1. reference_values
// ---------------------------------------------------------------------------
#[test]
fn reference_values() {
    let hmm = example_model();
    assert!((joint_prob(&[0], &[0], &hmm) - 0.10).abs() < 1e-12);
    assert!((joint_prob(&[0, 1], &[0, 2], &hmm) - 0.02).abs() < 1e-12);
}

// ---------------------------------------------------------------------------
// 2. hidden_path_changes_probability
// ---------------------------------------------------------------------------
#[test]
fn hidden_path_changes_probability() {
    let hmm = example_model();
    let observed = [1, 1, 1];

    // Same observations, different hidden paths, different probabilities.
    let p_low = joint_prob(&[0, 0, 0], &observed, &hmm);
    let p_high = joint_prob(&[1, 1, 1], &observed, &hmm);
    assert!((p_low - 0.2 * 0.4 * 0.5 * 0.4 * 0.5 * 0.4).abs() < 1e-12);
    assert!((p_high - 0.8 * 0.4 * 0.6 * 0.4 * 0.6 * 0.4).abs() < 1e-12);
    assert!(p_high > p_low);
}

// ---------------------------------------------------------------------------
// 3. log_agrees_over_long_pair
// ---------------------------------------------------------------------------
#[test]
fn log_agrees_over_long_pair() {
    let hmm = example_model();

    // 60-step pair: hidden alternates, observations cycle through symbols.
    let hidden: Vec<usize> = (0..60).map(|t| t % 2).collect();
    let observed: Vec<usize> = (0..60).map(|t| t % 3).collect();

    let lin = joint_prob(&hidden, &observed, &hmm);
    let log = log_joint_prob(&hidden, &observed, &hmm);
    assert!(lin > 0.0);
    assert!((log - lin.ln()).abs() < 1e-9, "log {log}, ln(linear) {}", lin.ln());
}

// ---------------------------------------------------------------------------
// 4. impossible_emission_zeroes_the_pair
// ---------------------------------------------------------------------------
#[test]
fn impossible_emission_zeroes_the_pair() {
    // State 0 can never emit symbol 1.
    let hmm = HiddenMarkovModel::new(
        vec![0.5, 0.5],
        vec![vec![0.5, 0.5], vec![0.5, 0.5]],
        vec![vec![1.0, 0.0], vec![0.5, 0.5]],
    );
    assert_eq!(joint_prob(&[0], &[1], &hmm), 0.0);
    assert_eq!(log_joint_prob(&[0], &[1], &hmm), f64::NEG_INFINITY);
}
