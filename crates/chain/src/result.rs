//! Output type for parameter estimation.

use crate::model::MarkovModel;

/// A Markov chain fitted from an observed corpus.
///
/// Estimation relabels states: the distinct values observed in the corpus
/// are sorted ascending and mapped to dense model indices `0..K`. The fitted
/// model's state `i` therefore corresponds to the i-th smallest observed
/// value, which is the identity mapping only when the observed labels are
/// already `0..K`. [`states`](Self::states) returns the ordering so callers
/// can translate between model indices and original labels.
#[derive(Debug, Clone)]
pub struct FittedChain {
    model: MarkovModel,
    states: Vec<usize>,
}

impl FittedChain {
    pub(crate) fn new(model: MarkovModel, states: Vec<usize>) -> Self {
        Self { model, states }
    }

    /// The fitted model.
    pub fn model(&self) -> &MarkovModel {
        &self.model
    }

    /// Consumes the fit, returning the model alone.
    pub fn into_model(self) -> MarkovModel {
        self.model
    }

    /// Original state labels in model-index order (sorted ascending).
    pub fn states(&self) -> &[usize] {
        &self.states
    }

    /// Model index of an original label, or `None` if it was never observed.
    pub fn index_of(&self, label: usize) -> Option<usize> {
        self.states.binary_search(&label).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_and_label_lookup() {
        let model = MarkovModel::new(vec![0.5, 0.5], vec![vec![0.5, 0.5], vec![0.5, 0.5]]);
        let fit = FittedChain::new(model, vec![3, 8]);
        assert_eq!(fit.model().num_states(), 2);
        assert_eq!(fit.states(), &[3, 8]);
        assert_eq!(fit.index_of(3), Some(0));
        assert_eq!(fit.index_of(8), Some(1));
        assert_eq!(fit.index_of(5), None);
    }

    #[test]
    fn into_model_returns_model() {
        let model = MarkovModel::new(vec![1.0], vec![vec![1.0]]);
        let fit = FittedChain::new(model.clone(), vec![0]);
        assert_eq!(fit.into_model(), model);
    }
}
