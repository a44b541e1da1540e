//! Hidden Markov model: a Markov chain plus an emission probability table.

use seqlik_chain::MarkovModel;

/// A hidden Markov model over hidden states `0..K` and observation symbols
/// `0..M`.
///
/// Composes a [`MarkovModel`] for the initial-state and transition tables
/// with a K×M emission matrix: `emit_probs[i][o]` is the probability of
/// emitting symbol `o` while in hidden state `i`. The row count is checked
/// against K at construction; the symbol count M is taken as given and not
/// cross-validated against use.
///
/// Like the underlying chain, the model is immutable after construction and
/// no row is checked to sum to 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct HiddenMarkovModel {
    chain: MarkovModel,
    emit_probs: Vec<Vec<f64>>,
}

impl HiddenMarkovModel {
    /// Creates a model from initial, transition, and emission probabilities.
    ///
    /// # Panics
    ///
    /// Panics if the initial/transition dimensions are inconsistent (see
    /// [`MarkovModel::new`]) or if `emit_probs` does not have one row per
    /// hidden state.
    pub fn new(init_probs: Vec<f64>, trans: Vec<Vec<f64>>, emit_probs: Vec<Vec<f64>>) -> Self {
        let chain = MarkovModel::new(init_probs, trans);
        assert_eq!(
            emit_probs.len(),
            chain.num_states(),
            "emit_probs must have one row per hidden state: expected {}, got {}",
            chain.num_states(),
            emit_probs.len()
        );
        Self { chain, emit_probs }
    }

    /// The underlying chain over hidden states.
    pub fn chain(&self) -> &MarkovModel {
        &self.chain
    }

    /// Number of hidden states K.
    pub fn num_states(&self) -> usize {
        self.chain.num_states()
    }

    /// Probability that a sequence starts in hidden `state`.
    pub fn init_prob(&self, state: usize) -> f64 {
        self.chain.init_prob(state)
    }

    /// Probability of transitioning from hidden state `from` to `to`.
    pub fn trans_prob(&self, from: usize, to: usize) -> f64 {
        self.chain.trans_prob(from, to)
    }

    /// Probability of emitting `symbol` while in hidden `state`.
    pub fn emit_prob(&self, state: usize, symbol: usize) -> f64 {
        self.emit_probs[state][symbol]
    }

    /// The full K×M emission matrix, row-major by hidden state.
    pub fn emit_probs(&self) -> &[Vec<f64>] {
        &self.emit_probs
    }
}
