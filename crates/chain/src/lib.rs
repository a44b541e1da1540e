//! Discrete-time Markov chain models over integer state spaces.
//!
//! This crate provides an immutable [`MarkovModel`] (initial-state and
//! transition probability tables), linear- and log-domain sequence
//! likelihood evaluators, and a maximum-likelihood estimator that fits a
//! model to a corpus of observed state sequences by frequency counting.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//!  │   corpus      │────▶│  estimate    │────▶│   likelihood     │
//!  │  (sequences)  │     │  (fit model) │     │  (score seq)     │
//!  └──────────────┘     └──────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use seqlik_chain::{MarkovModel, likelihood, log_likelihood};
//!
//! // Sunny = 0, Cloudy = 1.
//! let mm = MarkovModel::new(
//!     vec![0.3, 0.7],
//!     vec![vec![0.5, 0.5], vec![0.2, 0.8]],
//! );
//!
//! let p = likelihood(&[0, 0, 1], &mm);
//! assert!((p - 0.3 * 0.5 * 0.5).abs() < 1e-12);
//! assert!((log_likelihood(&[0, 0, 1], &mm) - p.ln()).abs() < 1e-12);
//! ```

pub mod error;
pub mod estimate;
pub mod likelihood;
pub mod model;
pub mod result;

pub use error::EstimateError;
pub use estimate::{estimate_parameters, initial_probability, transition_probability};
pub use likelihood::{likelihood, log_likelihood};
pub use model::MarkovModel;
pub use result::FittedChain;
