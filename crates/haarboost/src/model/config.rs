//! High-level AdaBoost configuration with builder pattern.
//!
//! [`BoostConfig`] is the one configuration object for model training. It
//! uses `bon` for the builder and validates at build time.
//!
//! # Example
//!
//! ```
//! use haarboost::features::{FeatureBank, FeatureKind};
//! use haarboost::model::BoostConfig;
//! use haarboost::training::Verbosity;
//!
//! // Defaults: 3 rounds over the standard feature bank
//! let config = BoostConfig::builder().build().unwrap();
//! assert_eq!(config.n_rounds, 3);
//!
//! let config = BoostConfig::builder()
//!     .n_rounds(10)
//!     .features(FeatureBank::new([FeatureKind::TwoRectangle]))
//!     .verbosity(Verbosity::Info)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.features.len(), 1);
//! ```

use bon::Builder;

use crate::features::FeatureBank;
use crate::training::{AdaBoostParams, StumpWeighting, Verbosity};

// =============================================================================
// ConfigError
// =============================================================================

/// Errors that can occur during configuration validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Number of rounds must be at least 1.
    #[error("n_rounds must be at least 1")]
    InvalidNRounds,

    /// At least one feature kind is needed to form candidates.
    #[error("feature bank is empty")]
    EmptyFeatureBank,
}

// =============================================================================
// BoostConfig
// =============================================================================

/// Configuration for [`AdaBoostModel`](super::AdaBoostModel) training.
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
pub struct BoostConfig {
    /// Number of boosting rounds. Default: 3.
    #[builder(default = 3)]
    pub n_rounds: u32,

    /// Feature kinds evaluated on every block. Default: all three.
    #[builder(default)]
    pub features: FeatureBank,

    /// How stumps are fitted. Default: [`StumpWeighting::Unweighted`].
    #[builder(default)]
    pub stump_weighting: StumpWeighting,

    /// Verbosity level. Default: `Silent`.
    #[builder(default)]
    pub verbosity: Verbosity,
}

/// Custom finishing function that validates the config.
impl<S: boost_config_builder::IsComplete> BoostConfigBuilder<S> {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidNRounds`] if `n_rounds == 0`
    /// - [`ConfigError::EmptyFeatureBank`] if `features` has no kinds
    pub fn build(self) -> Result<BoostConfig, ConfigError> {
        let config = self.__build_internal();
        config.validate()?;
        Ok(config)
    }
}

impl BoostConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.n_rounds == 0 {
            return Err(ConfigError::InvalidNRounds);
        }
        if self.features.is_empty() {
            return Err(ConfigError::EmptyFeatureBank);
        }
        Ok(())
    }

    /// Trainer-level parameters for this configuration.
    pub fn to_trainer_params(&self) -> AdaBoostParams {
        AdaBoostParams {
            n_rounds: self.n_rounds,
            stump_weighting: self.stump_weighting,
            verbosity: self.verbosity,
        }
    }
}

impl Default for BoostConfig {
    fn default() -> Self {
        Self {
            n_rounds: 3,
            features: FeatureBank::standard(),
            stump_weighting: StumpWeighting::default(),
            verbosity: Verbosity::default(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
