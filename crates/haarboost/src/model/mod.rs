//! High-level model API.
//!
//! - [`BoostConfig`]: validated training configuration (`bon` builder)
//! - [`AdaBoostModel`]: trained ensemble plus metadata and config
//! - [`ModelMeta`]: what the model was trained on
//! - [`TrainError`]: everything that can stop a training run

mod config;

pub use config::{BoostConfig, BoostConfigBuilder, ConfigError};

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::data::{DatasetError, TrainingSet};
use crate::features::{CacheError, FeatureCache};
use crate::training::{AdaBoostTrainer, Ensemble, TrainingLogger};
use crate::utils::{run_with_threads, Parallelism};

// =============================================================================
// TrainError
// =============================================================================

/// Errors from [`AdaBoostModel::train`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrainError {
    /// The configuration was assembled without the validating builder and is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

// =============================================================================
// ModelMeta
// =============================================================================

/// Training-context metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMeta {
    /// Width of every training image, in pixels.
    pub width: usize,
    /// Height of every training image, in pixels.
    pub height: usize,
    pub n_samples: usize,
    pub n_positive: usize,
    pub n_negative: usize,
}

impl ModelMeta {
    pub fn from_training_set(set: &TrainingSet) -> Self {
        let (width, height) = set.dims();
        Self {
            width,
            height,
            n_samples: set.n_samples(),
            n_positive: set.n_positive(),
            n_negative: set.n_negative(),
        }
    }
}

// =============================================================================
// AdaBoostModel
// =============================================================================

/// Trained AdaBoost model.
///
/// Access components via [`ensemble()`](Self::ensemble), [`meta()`](Self::meta),
/// and [`config()`](Self::config).
#[derive(Debug, Clone, PartialEq)]
pub struct AdaBoostModel {
    ensemble: Ensemble,
    meta: ModelMeta,
    config: BoostConfig,
}

impl AdaBoostModel {
    /// Create a model from all its parts.
    ///
    /// Used when loading a persisted model.
    pub fn from_parts(ensemble: Ensemble, meta: ModelMeta, config: BoostConfig) -> Self {
        Self { ensemble, meta, config }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn ensemble(&self) -> &Ensemble {
        &self.ensemble
    }

    pub fn meta(&self) -> &ModelMeta {
        &self.meta
    }

    pub fn config(&self) -> &BoostConfig {
        &self.config
    }

    /// Vote weight of each round.
    pub fn alphas(&self) -> Vec<f64> {
        self.ensemble.alphas()
    }

    /// Weighted training error of each round's learner.
    pub fn error_history(&self) -> Vec<f64> {
        self.ensemble.error_history()
    }

    // =========================================================================
    // Training
    // =========================================================================

    /// Train a new model.
    ///
    /// Builds the feature cache once, then runs `config.n_rounds` rounds.
    ///
    /// # Arguments
    ///
    /// * `set` - Validated training images and labels
    /// * `config` - Training configuration
    /// * `n_threads` - Thread count: 0 = auto, 1 = sequential, >1 = exact count
    ///
    /// # Errors
    ///
    /// [`TrainError::Config`] if `config` fails validation (it may have been
    /// built by struct update rather than the builder), otherwise whatever the
    /// cache or the trainer reports.
    pub fn train(set: &TrainingSet, config: BoostConfig, n_threads: usize) -> Result<Self, TrainError> {
        run_with_threads(n_threads, |parallelism| Self::train_inner(set, config, parallelism))
    }

    /// Internal training implementation (no thread pool management).
    fn train_inner(
        set: &TrainingSet,
        config: BoostConfig,
        parallelism: Parallelism,
    ) -> Result<Self, TrainError> {
        config.validate()?;
        let params = config.to_trainer_params();
        let logger = TrainingLogger::new(params.verbosity);

        let started = Instant::now();
        let cache = FeatureCache::build(set, &config.features, parallelism)?;
        logger.log_cache_built(cache.n_keys(), cache.n_samples(), started.elapsed());

        let ensemble = AdaBoostTrainer::new(params).train(&cache, set.labels(), parallelism)?;
        let meta = ModelMeta::from_training_set(set);

        Ok(Self { ensemble, meta, config })
    }
}

// =============================================================================
// Tests
// =============================================================================
