//! AdaBoost training loop.
//!
//! Each round selects the best `(feature, block)` stump under the current
//! distribution, derives its vote weight, and reweights the samples so the
//! next round focuses on what this one got wrong. Rounds are strictly
//! sequential; only the per-key work inside a round runs in parallel.

use crate::data::{DatasetError, Label};
use crate::features::FeatureCache;
use crate::utils::Parallelism;

use super::distribution::Distribution;
use super::ensemble::Ensemble;
use super::logger::{TrainingLogger, Verbosity};
use super::selector::{Selection, WeakLearnerSelector};
use super::stump::StumpWeighting;

// ============================================================================
// AdaBoostParams
// ============================================================================

/// Parameters for AdaBoost training.
#[derive(Clone, Debug, PartialEq)]
pub struct AdaBoostParams {
    /// Number of boosting rounds.
    pub n_rounds: u32,

    /// Whether stumps are fitted on the distribution or on raw labels.
    pub stump_weighting: StumpWeighting,

    /// Verbosity level for training output.
    pub verbosity: Verbosity,
}

impl Default for AdaBoostParams {
    fn default() -> Self {
        Self {
            n_rounds: 3,
            stump_weighting: StumpWeighting::default(),
            verbosity: Verbosity::default(),
        }
    }
}

/// Vote weight of a learner with weighted error `error`.
///
/// `0` when the error is exactly zero, otherwise `0.5 * ln((1 - e) / e)`.
/// Errors of 0.5 give 0 and errors above 0.5 give a negative weight, which
/// flips the stump's vote.
#[inline]
pub fn compute_alpha(error: f64) -> f64 {
    if error == 0.0 {
        return 0.0;
    }
    0.5 * ((1.0 - error) / error).ln()
}

// ============================================================================
// AdaBoostTrainer
// ============================================================================

/// Discrete AdaBoost trainer over a precomputed [`FeatureCache`].
#[derive(Clone, Debug)]
pub struct AdaBoostTrainer {
    params: AdaBoostParams,
}

impl AdaBoostTrainer {
    pub fn new(params: AdaBoostParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &AdaBoostParams {
        &self.params
    }

    /// Run `n_rounds` rounds of boosting.
    ///
    /// **Note:** This method does NOT create a thread pool. `parallelism` only
    /// says whether the current pool may be used.
    ///
    /// # Arguments
    ///
    /// * `cache` - Feature vectors of every candidate key
    /// * `labels` - One label per cache sample, in the same order
    /// * `parallelism` - Sequential or Parallel iteration hint
    ///
    /// # Errors
    ///
    /// [`DatasetError::LabelCountMismatch`] if `labels` does not match the
    /// cache. Nothing is trained in that case.
    pub fn train(
        &self,
        cache: &FeatureCache,
        labels: &[Label],
        parallelism: Parallelism,
    ) -> Result<Ensemble, DatasetError> {
        self.run(cache, labels, parallelism).map(|(ensemble, _)| ensemble)
    }

    /// Boosting loop; also returns the distribution left after the last round.
    fn run(
        &self,
        cache: &FeatureCache,
        labels: &[Label],
        parallelism: Parallelism,
    ) -> Result<(Ensemble, Distribution), DatasetError> {
        let selector =
            WeakLearnerSelector::new(cache, labels, self.params.stump_weighting, parallelism)?;

        let n_rounds = self.params.n_rounds as usize;
        let mut distribution = Distribution::uniform(cache.n_samples());
        let mut ensemble = Ensemble::with_capacity(n_rounds);

        let mut logger = TrainingLogger::new(self.params.verbosity);
        logger.start_training(n_rounds, cache.n_samples(), cache.n_keys());

        for round in 0..n_rounds {
            let Selection { learner, correct, errors } = selector.select(&distribution);
            logger.log_candidates(round, cache.keys(), &errors);

            let alpha = compute_alpha(learner.error);
            logger.log_round(round, &learner, alpha);
            ensemble.push(alpha, learner);

            if !distribution.reweight(alpha, &correct) {
                logger.log_unnormalized(round, alpha);
            }
        }

        logger.finish_training(ensemble.len());
        Ok((ensemble, distribution))
    }
}

// ============================================================================
// Tests
// ============================================================================
