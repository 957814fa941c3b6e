//! haarboost: AdaBoost over rectangle-sum image features.
//!
//! Trains a weighted ensemble of decision stumps, each reading one
//! rectangle feature on one block of a 3x3 grid over the image, in the
//! style of the Viola-Jones framework.
//!
//! # Key Types
//!
//! - [`AdaBoostModel`] - High-level model with training and persistence
//! - [`BoostConfig`] - Configuration builder
//! - [`TrainingSet`] - Validated images and labels
//! - [`FeatureBank`] / [`FeatureCache`] - Candidate features and their values
//!
//! # Training
//!
//! Use `BoostConfig::builder()` to configure, then `AdaBoostModel::train()`.
//! See the [`model`] module for details.
//!
//! ```
//! use haarboost::{AdaBoostModel, BoostConfig};
//! use haarboost::testing::synthetic_set;
//!
//! let set = synthetic_set(12, 12, 10, 42).unwrap();
//! let config = BoostConfig::builder().n_rounds(2).build().unwrap();
//! let model = AdaBoostModel::train(&set, config, 0).unwrap();
//!
//! assert_eq!(model.alphas().len(), 2);
//! ```

// Re-export approx traits for users who want to compare alphas and errors
pub use approx;

pub mod data;
pub mod features;
pub mod image;
pub mod model;
pub mod persist;
pub mod testing;
pub mod training;
pub mod utils;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// High-level model types
pub use model::{AdaBoostModel, BoostConfig, ConfigError, ModelMeta, TrainError};

// Data types
pub use data::{DatasetError, Label, TrainingSet};
pub use crate::image::{GrayImage, IntegralImage, Rect};

// Features
pub use features::{CacheError, FeatureBank, FeatureCache, FeatureKey, FeatureKind};

// Training types
pub use training::{AdaBoostParams, AdaBoostTrainer, Ensemble, StumpWeighting, Verbosity};

// Shared utilities
pub use utils::{run_with_threads, Parallelism};
