//! Precomputed feature vectors for every `(feature, block)` key.

use ndarray::{Array2, ArrayView1, ArrayView2};

use crate::data::TrainingSet;
use crate::image::IntegralImage;
use crate::utils::Parallelism;

use super::{partition_blocks, FeatureBank, FeatureKey};

/// Errors from assembling a cache.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CacheError {
    /// No keys, or no samples.
    #[error("feature cache needs at least one key and one sample")]
    Empty,

    #[error("{keys} keys but {vectors} feature vectors")]
    CountMismatch { keys: usize, vectors: usize },

    /// A vector's length differs from the first vector's.
    #[error("feature vector for {key} has length {found}, expected {expected}")]
    RaggedVectors {
        key: FeatureKey,
        expected: usize,
        found: usize,
    },

    #[error("duplicate feature key {0}")]
    DuplicateKey(FeatureKey),
}

/// Feature values of every key over every training image.
///
/// Stored feature-major as `[n_keys, n_samples]`: row `k` is the feature
/// vector of `keys()[k]`, in training-image order. Built once per training
/// run and read-only afterwards.
///
/// Never empty: both constructors reject zero keys and zero samples.
#[derive(Clone, Debug)]
pub struct FeatureCache {
    keys: Vec<FeatureKey>,
    values: Array2<f64>,
}

impl FeatureCache {
    /// Evaluate every key of `bank` on every image of `set`.
    ///
    /// Each image gets one integral image, shared by all of its keys. Images
    /// are processed in parallel when `parallelism` allows it; the result does
    /// not depend on scheduling.
    ///
    /// # Errors
    ///
    /// [`CacheError::Empty`] if `bank` has no kinds.
    pub fn build(set: &TrainingSet, bank: &FeatureBank, parallelism: Parallelism) -> Result<Self, CacheError> {
        if bank.is_empty() {
            return Err(CacheError::Empty);
        }
        let keys = bank.keys();
        let (width, height) = set.dims();
        let blocks = partition_blocks(width, height);
        let images = set.images();

        let per_image: Vec<Vec<f64>> = parallelism.maybe_par_map(0..images.len(), |i| {
            let integral = IntegralImage::new(&images[i]);
            keys.iter()
                .map(|key| key.kind.evaluate(&integral, blocks[key.block]))
                .collect()
        });

        let values = Array2::from_shape_fn((keys.len(), images.len()), |(k, s)| per_image[s][k]);
        Ok(Self { keys, values })
    }

    /// Assemble a cache from precomputed vectors, one per key.
    ///
    /// The key order given here is the candidate iteration order.
    ///
    /// # Errors
    ///
    /// See [`CacheError`].
    pub fn from_vectors(keys: Vec<FeatureKey>, vectors: Vec<Vec<f64>>) -> Result<Self, CacheError> {
        if keys.len() != vectors.len() {
            return Err(CacheError::CountMismatch { keys: keys.len(), vectors: vectors.len() });
        }
        let n_samples = vectors.first().map_or(0, Vec::len);
        if keys.is_empty() || n_samples == 0 {
            return Err(CacheError::Empty);
        }
        for (i, key) in keys.iter().enumerate() {
            if keys[..i].contains(key) {
                return Err(CacheError::DuplicateKey(*key));
            }
            if vectors[i].len() != n_samples {
                return Err(CacheError::RaggedVectors {
                    key: *key,
                    expected: n_samples,
                    found: vectors[i].len(),
                });
            }
        }

        let values = Array2::from_shape_fn((keys.len(), n_samples), |(k, s)| vectors[k][s]);
        Ok(Self { keys, values })
    }

    /// Keys in iteration order.
    #[inline]
    pub fn keys(&self) -> &[FeatureKey] {
        &self.keys
    }

    #[inline]
    pub fn n_keys(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn n_samples(&self) -> usize {
        self.values.ncols()
    }

    /// Position of `key` in iteration order.
    pub fn position(&self, key: FeatureKey) -> Option<usize> {
        self.keys.iter().position(|&k| k == key)
    }

    /// Feature vector of `key`, if the cache holds it.
    pub fn get(&self, key: FeatureKey) -> Option<ArrayView1<'_, f64>> {
        self.position(key).map(|k| self.vector(k))
    }

    /// Feature vector at position `index`.
    #[inline]
    pub fn vector(&self, index: usize) -> ArrayView1<'_, f64> {
        self.values.row(index)
    }

    /// All values, `[n_keys, n_samples]`.
    #[inline]
    pub fn values(&self) -> ArrayView2<'_, f64> {
        self.values.view()
    }
}
