//! Training infrastructure for AdaBoost over rectangle features.
//!
//! ## Round Components
//!
//! - [`DecisionStump`]: depth-1 Gini split on one feature vector
//! - [`WeakLearnerSelector`]: best `(feature, block)` stump for a distribution
//! - [`Distribution`]: per-sample weights, reweighted after every round
//!
//! ## Driver
//!
//! - [`AdaBoostTrainer`], [`AdaBoostParams`]: the boosting loop
//! - [`Ensemble`], [`BoostRound`]: the trained rounds and their vote weights
//! - [`TrainingLogger`], [`Verbosity`]: structured logging

mod distribution;
mod ensemble;
mod logger;
mod selector;
mod stump;
mod trainer;

pub use distribution::Distribution;
pub use ensemble::{BoostRound, Ensemble};
pub use logger::{TrainingLogger, Verbosity};
pub use selector::{weighted_error, Selection, WeakLearner, WeakLearnerSelector};
pub use stump::{DecisionStump, StumpWeighting};
pub use trainer::{compute_alpha, AdaBoostParams, AdaBoostTrainer};
