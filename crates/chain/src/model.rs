//! Immutable Markov chain model: initial-state and transition probability tables.

/// A discrete-time Markov chain over states `0..K`.
///
/// Holds an initial-state distribution (length K) and a K×K transition
/// matrix. Dimensions are checked once at construction; the tables are
/// immutable afterwards, so a model can be shared across threads without
/// locking.
///
/// Rows are *not* checked to sum to 1.0 — callers are responsible for
/// supplying valid probability distributions.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkovModel {
    init_probs: Vec<f64>,
    trans: Vec<Vec<f64>>,
}

impl MarkovModel {
    /// Creates a model from initial and transition probabilities.
    ///
    /// `init_probs[i]` is the probability that a sequence starts in state
    /// `i`; `trans[i][j]` is the probability of moving from state `i` to
    /// state `j` between adjacent positions.
    ///
    /// # Panics
    ///
    /// Panics if `init_probs` is empty, if `trans` does not have one row per
    /// state, or if any row of `trans` does not have one entry per state.
    pub fn new(init_probs: Vec<f64>, trans: Vec<Vec<f64>>) -> Self {
        let k = init_probs.len();
        assert!(k > 0, "model must have at least one state");
        assert_eq!(
            trans.len(),
            k,
            "trans must have one row per state: expected {k}, got {}",
            trans.len()
        );
        for (i, row) in trans.iter().enumerate() {
            assert_eq!(
                row.len(),
                k,
                "trans row {i} must have one entry per state: expected {k}, got {}",
                row.len()
            );
        }
        Self { init_probs, trans }
    }

    /// Number of states K.
    pub fn num_states(&self) -> usize {
        self.init_probs.len()
    }

    /// Probability that a sequence starts in `state`.
    pub fn init_prob(&self, state: usize) -> f64 {
        self.init_probs[state]
    }

    /// Probability of transitioning from `from` to `to`.
    pub fn trans_prob(&self, from: usize, to: usize) -> f64 {
        self.trans[from][to]
    }

    /// The full initial-state distribution.
    pub fn init_probs(&self) -> &[f64] {
        &self.init_probs
    }

    /// The full K×K transition matrix, row-major by source state.
    pub fn trans(&self) -> &[Vec<f64>] {
        &self.trans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather_model() -> MarkovModel {
        // Sunny = 0, Cloudy = 1.
        MarkovModel::new(vec![0.3, 0.7], vec![vec![0.5, 0.5], vec![0.2, 0.8]])
    }

    #[test]
    fn construction_and_accessors() {
        let mm = weather_model();
        assert_eq!(mm.num_states(), 2);
        assert_eq!(mm.init_prob(0), 0.3);
        assert_eq!(mm.init_prob(1), 0.7);
        assert_eq!(mm.trans_prob(0, 1), 0.5);
        assert_eq!(mm.trans_prob(1, 0), 0.2);
        assert_eq!(mm.init_probs(), &[0.3, 0.7]);
        assert_eq!(mm.trans().len(), 2);
    }

    #[test]
    fn single_state_model() {
        let mm = MarkovModel::new(vec![1.0], vec![vec![1.0]]);
        assert_eq!(mm.num_states(), 1);
        assert_eq!(mm.trans_prob(0, 0), 1.0);
    }

    #[test]
    #[should_panic(expected = "at least one state")]
    fn empty_init_probs_panics() {
        let _ = MarkovModel::new(vec![], vec![]);
    }

    #[test]
    #[should_panic(expected = "one row per state")]
    fn wrong_row_count_panics() {
        let _ = MarkovModel::new(vec![0.5, 0.5], vec![vec![0.5, 0.5]]);
    }

    #[test]
    #[should_panic(expected = "trans row 1")]
    fn ragged_row_panics() {
        let _ = MarkovModel::new(vec![0.5, 0.5], vec![vec![0.5, 0.5], vec![1.0]]);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn out_of_range_state_panics() {
        let mm = weather_model();
        let _ = mm.init_prob(2);
    }

    #[test]
    fn model_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<MarkovModel>();
    }
}
