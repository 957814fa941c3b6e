//! Best weak learner per round.
//!
//! Every `(feature, block)` key of the cache gets a stump fitted on its
//! feature vector; the key with the lowest distribution-weighted error wins.
//! Keys are evaluated independently (in parallel when allowed), and the
//! winner is picked by a sequential scan in key order so that ties always go
//! to the earliest key.

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use crate::data::{DatasetError, Label};
use crate::features::{FeatureCache, FeatureKey};
use crate::utils::Parallelism;

use super::distribution::Distribution;
use super::stump::{DecisionStump, StumpWeighting};

// =============================================================================
// Output types
// =============================================================================

/// A fitted stump on one key, with its weighted error in the round it won.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeakLearner {
    pub key: FeatureKey,
    pub stump: DecisionStump,
    pub error: f64,
}

impl WeakLearner {
    /// Predict from this learner's feature value.
    #[inline]
    pub fn predict(&self, value: f64) -> Label {
        self.stump.predict(value)
    }
}

/// Result of one selection pass.
#[derive(Clone, Debug)]
pub struct Selection {
    pub learner: WeakLearner,
    /// Per sample, whether the winning stump classifies it correctly.
    pub correct: Vec<bool>,
    /// Weighted error of every key, in cache key order.
    pub errors: Vec<f64>,
}

// =============================================================================
// WeakLearnerSelector
// =============================================================================

/// Picks the minimum-error `(feature, block)` stump for a distribution.
///
/// Reads the cache and labels only. With [`StumpWeighting::Unweighted`] the
/// stumps do not depend on the distribution, so they are fitted once here and
/// only their errors are recomputed per round.
#[derive(Debug)]
pub struct WeakLearnerSelector<'a> {
    cache: &'a FeatureCache,
    labels: &'a [Label],
    weighting: StumpWeighting,
    parallelism: Parallelism,
    prefitted: Option<Vec<DecisionStump>>,
}

impl<'a> WeakLearnerSelector<'a> {
    /// # Errors
    ///
    /// [`DatasetError::LabelCountMismatch`] if `labels` does not match the
    /// cache's sample count.
    pub fn new(
        cache: &'a FeatureCache,
        labels: &'a [Label],
        weighting: StumpWeighting,
        parallelism: Parallelism,
    ) -> Result<Self, DatasetError> {
        debug_assert!(cache.n_keys() > 0);
        if labels.len() != cache.n_samples() {
            return Err(DatasetError::LabelCountMismatch {
                images: cache.n_samples(),
                labels: labels.len(),
            });
        }

        let prefitted = match weighting {
            StumpWeighting::Unweighted => Some(parallelism.maybe_par_map(0..cache.n_keys(), |k| {
                DecisionStump::fit(cache.vector(k), labels, None)
            })),
            StumpWeighting::Distribution => None,
        };

        Ok(Self { cache, labels, weighting, parallelism, prefitted })
    }

    pub fn weighting(&self) -> StumpWeighting {
        self.weighting
    }

    /// Evaluate every key under `distribution` and return the best one.
    ///
    /// Ties in weighted error go to the key that comes first in the cache.
    pub fn select(&self, distribution: &Distribution) -> Selection {
        debug_assert_eq!(distribution.len(), self.cache.n_samples());
        let weights = distribution.as_slice();

        let candidates: Vec<(DecisionStump, f64)> =
            self.parallelism.maybe_par_map(0..self.cache.n_keys(), |k| {
                let values = self.cache.vector(k);
                let stump = match &self.prefitted {
                    Some(stumps) => stumps[k],
                    None => DecisionStump::fit(values, self.labels, Some(weights)),
                };
                (stump, weighted_error(&stump, values, self.labels, weights))
            });

        let mut best = 0;
        for (k, (_, error)) in candidates.iter().enumerate().skip(1) {
            if *error < candidates[best].1 {
                best = k;
            }
        }

        let (stump, error) = candidates[best];
        let correct = self
            .cache
            .vector(best)
            .iter()
            .zip(self.labels)
            .map(|(&value, &label)| stump.predict(value) == label)
            .collect();

        Selection {
            learner: WeakLearner { key: self.cache.keys()[best], stump, error },
            correct,
            errors: candidates.into_iter().map(|(_, e)| e).collect(),
        }
    }
}

/// Sum of weights over misclassified samples.
pub fn weighted_error(
    stump: &DecisionStump,
    values: ArrayView1<'_, f64>,
    labels: &[Label],
    weights: &[f64],
) -> f64 {
    values
        .iter()
        .zip(labels)
        .zip(weights)
        .filter(|((&value, &label), _)| stump.predict(value) != label)
        .map(|(_, &w)| w)
        .sum()
}
