//! Hidden Markov models over integer state and symbol spaces.
//!
//! A [`HiddenMarkovModel`] pairs a Markov chain over hidden states (from
//! `seqlik-chain`) with a K×M emission table, and the evaluators in
//! [`joint`] compute the probability of a hidden/observed sequence pair in
//! linear or log domain.
//!
//! # Quick start
//!
//! ```rust
//! use seqlik_hmm::{HiddenMarkovModel, joint_prob};
//!
//! let hmm = HiddenMarkovModel::new(
//!     vec![0.2, 0.8],
//!     vec![vec![0.5, 0.5], vec![0.4, 0.6]],
//!     vec![vec![0.5, 0.4, 0.1], vec![0.2, 0.4, 0.4]],
//! );
//!
//! // P(hidden = [0], observed = [0]) = init(0) * emit(0, 0).
//! assert!((joint_prob(&[0], &[0], &hmm) - 0.10).abs() < 1e-12);
//! ```

pub mod joint;
pub mod model;

pub use joint::{joint_prob, log_joint_prob};
pub use model::HiddenMarkovModel;
