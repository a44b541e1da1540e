//! Maximum-likelihood estimation of Markov chain parameters by frequency counting.

use crate::error::EstimateError;
use crate::model::MarkovModel;
use crate::result::FittedChain;
use tracing::debug;

/// Fraction of sequences in `corpus` that start in `state`.
///
/// Returns NaN for an empty corpus (0/0); [`estimate_parameters`] guards
/// that case before calling.
///
/// # Panics
///
/// Panics if any sequence in `corpus` is empty (it has no first element).
pub fn initial_probability(corpus: &[Vec<usize>], state: usize) -> f64 {
    let count = corpus.iter().filter(|seq| seq[0] == state).count();
    count as f64 / corpus.len() as f64
}

/// Estimated probability of transitioning from `from` to `to`.
///
/// Counts adjacent `(from, to)` pairs across all sequences and divides by
/// the total number of occurrences of `from` at *any* position, including
/// final positions where no transition follows. A state that never occurs
/// in the corpus gets probability exactly 0.0 rather than a 0/0 result.
pub fn transition_probability(corpus: &[Vec<usize>], from: usize, to: usize) -> f64 {
    let occurrences: usize = corpus
        .iter()
        .map(|seq| seq.iter().filter(|&&s| s == from).count())
        .sum();
    if occurrences == 0 {
        return 0.0;
    }
    let transitions: usize = corpus
        .iter()
        .map(|seq| {
            seq.windows(2)
                .filter(|pair| pair[0] == from && pair[1] == to)
                .count()
        })
        .sum();
    transitions as f64 / occurrences as f64
}

/// Fits a [`MarkovModel`] to an observed corpus by frequency counting.
///
/// The distinct state values in the corpus are sorted ascending and mapped
/// to dense model indices `0..K`; the returned [`FittedChain`] carries that
/// ordering alongside the model. Initial probabilities come from first
/// elements, transition probabilities from adjacent-pair counts (see
/// [`initial_probability`] and [`transition_probability`]).
///
/// The corpus is rescanned once per `(from, to)` state pair, so the cost is
/// O(K² · total corpus length). Fine for small state spaces; this estimator
/// is not meant for large alphabets.
///
/// # Errors
///
/// Returns [`EstimateError::EmptyCorpus`] if `corpus` has no sequences, and
/// [`EstimateError::NoObservations`] if every sequence is empty.
///
/// # Panics
///
/// Panics if the corpus mixes empty and non-empty sequences: an empty
/// sequence has no first element to count.
pub fn estimate_parameters(corpus: &[Vec<usize>]) -> Result<FittedChain, EstimateError> {
    if corpus.is_empty() {
        return Err(EstimateError::EmptyCorpus);
    }

    let mut states: Vec<usize> = corpus.iter().flatten().copied().collect();
    states.sort_unstable();
    states.dedup();
    if states.is_empty() {
        return Err(EstimateError::NoObservations);
    }

    debug!(
        sequences = corpus.len(),
        states = states.len(),
        "estimating markov chain parameters"
    );

    let init_probs: Vec<f64> = states
        .iter()
        .map(|&s| initial_probability(corpus, s))
        .collect();
    let trans: Vec<Vec<f64>> = states
        .iter()
        .map(|&from| {
            states
                .iter()
                .map(|&to| transition_probability(corpus, from, to))
                .collect()
        })
        .collect();

    let model = MarkovModel::new(init_probs, trans);
    Ok(FittedChain::new(model, states))
}
