//! Trained AdaBoost ensemble.

use serde::{Deserialize, Serialize};

use super::selector::WeakLearner;

/// One boosting round: the selected learner and its vote weight.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoostRound {
    pub alpha: f64,
    pub learner: WeakLearner,
}

/// Weighted weak learners in round order. Append-only during training.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ensemble {
    rounds: Vec<BoostRound>,
}

impl Ensemble {
    pub fn with_capacity(n_rounds: usize) -> Self {
        Self { rounds: Vec::with_capacity(n_rounds) }
    }

    pub(crate) fn push(&mut self, alpha: f64, learner: WeakLearner) {
        self.rounds.push(BoostRound { alpha, learner });
    }

    #[inline]
    pub fn rounds(&self) -> &[BoostRound] {
        &self.rounds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Vote weight of each round.
    pub fn alphas(&self) -> Vec<f64> {
        self.rounds.iter().map(|r| r.alpha).collect()
    }

    /// Weighted training error of each round's learner.
    pub fn error_history(&self) -> Vec<f64> {
        self.rounds.iter().map(|r| r.learner.error).collect()
    }
}
