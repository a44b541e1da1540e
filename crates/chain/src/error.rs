//! Error types for the seqlik-chain crate.

/// Error type for parameter estimation.
///
/// Contract violations of the programmer-error class (dimension mismatches,
/// out-of-range state indices) panic instead; see the `# Panics` sections on
/// the individual functions.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EstimateError {
    /// Returned when the corpus contains no sequences.
    #[error("corpus is empty: cannot estimate parameters from zero sequences")]
    EmptyCorpus,

    /// Returned when the corpus has sequences but none contains a state.
    #[error("corpus contains no observations: every sequence is empty")]
    NoObservations,
}
