//! Schema types for model serialization.
//!
//! Kept separate from the runtime types so the on-disk layout can evolve
//! independently and everything is validated on the way back in.

use serde::{Deserialize, Serialize};

use crate::features::{FeatureBank, FeatureKey, FeatureKind, N_BLOCKS};
use crate::model::{AdaBoostModel, BoostConfig, ModelMeta};
use crate::training::{DecisionStump, Ensemble, StumpWeighting, Verbosity, WeakLearner};

use super::PersistError;

/// Current on-disk format version.
pub const FORMAT_VERSION: u32 = 1;

/// Just enough of a document to check its version before a full parse.
#[derive(Debug, Deserialize)]
pub(super) struct VersionHeader {
    pub format_version: u32,
}

/// Top-level persisted model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaBoostModelSchema {
    pub format_version: u32,
    pub meta: ModelMetaSchema,
    pub config: BoostConfigSchema,
    pub rounds: Vec<RoundSchema>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetaSchema {
    pub width: usize,
    pub height: usize,
    pub n_samples: usize,
    pub n_positive: usize,
    pub n_negative: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoostConfigSchema {
    pub n_rounds: u32,
    /// Feature kinds by stable name, in bank order.
    pub features: Vec<FeatureKind>,
    pub stump_weighting: StumpWeighting,
    pub verbosity: Verbosity,
}

/// One boosting round, flattened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundSchema {
    pub alpha: f64,
    pub feature: FeatureKind,
    pub block: usize,
    pub stump: DecisionStump,
    pub error: f64,
}

// =============================================================================
// Runtime -> schema
// =============================================================================

impl From<&AdaBoostModel> for AdaBoostModelSchema {
    fn from(model: &AdaBoostModel) -> Self {
        let meta = model.meta();
        let config = model.config();
        Self {
            format_version: FORMAT_VERSION,
            meta: ModelMetaSchema {
                width: meta.width,
                height: meta.height,
                n_samples: meta.n_samples,
                n_positive: meta.n_positive,
                n_negative: meta.n_negative,
            },
            config: BoostConfigSchema {
                n_rounds: config.n_rounds,
                features: config.features.kinds().to_vec(),
                stump_weighting: config.stump_weighting,
                verbosity: config.verbosity,
            },
            rounds: model
                .ensemble()
                .rounds()
                .iter()
                .map(|round| RoundSchema {
                    alpha: round.alpha,
                    feature: round.learner.key.kind,
                    block: round.learner.key.block,
                    stump: round.learner.stump,
                    error: round.learner.error,
                })
                .collect(),
        }
    }
}

// =============================================================================
// Schema -> runtime
// =============================================================================

impl TryFrom<AdaBoostModelSchema> for AdaBoostModel {
    type Error = PersistError;

    fn try_from(schema: AdaBoostModelSchema) -> Result<Self, Self::Error> {
        if schema.format_version != FORMAT_VERSION {
            return Err(PersistError::UnsupportedVersion {
                found: schema.format_version,
                supported: FORMAT_VERSION,
            });
        }

        let m = schema.meta;
        if m.n_positive + m.n_negative != m.n_samples {
            return Err(PersistError::Validation(format!(
                "meta has {} positives and {} negatives but {} samples",
                m.n_positive, m.n_negative, m.n_samples
            )));
        }
        let meta = ModelMeta {
            width: m.width,
            height: m.height,
            n_samples: m.n_samples,
            n_positive: m.n_positive,
            n_negative: m.n_negative,
        };

        let c = schema.config;
        let config = BoostConfig::builder()
            .n_rounds(c.n_rounds)
            .features(FeatureBank::new(c.features))
            .stump_weighting(c.stump_weighting)
            .verbosity(c.verbosity)
            .build()?;

        if schema.rounds.len() != config.n_rounds as usize {
            return Err(PersistError::Validation(format!(
                "{} rounds stored but n_rounds is {}",
                schema.rounds.len(),
                config.n_rounds
            )));
        }

        let mut ensemble = Ensemble::with_capacity(schema.rounds.len());
        for (index, round) in schema.rounds.into_iter().enumerate() {
            ensemble.push(round.alpha, round.into_learner(index, &config.features)?);
        }

        Ok(AdaBoostModel::from_parts(ensemble, meta, config))
    }
}

impl RoundSchema {
    fn into_learner(self, index: usize, bank: &FeatureBank) -> Result<WeakLearner, PersistError> {
        let invalid = |what: String| PersistError::Validation(format!("round {index}: {what}"));

        if self.block >= N_BLOCKS {
            return Err(invalid(format!("block {} out of range", self.block)));
        }
        if !bank.kinds().contains(&self.feature) {
            return Err(invalid(format!("feature {} is not in the feature bank", self.feature)));
        }
        if !self.alpha.is_finite() {
            return Err(invalid(format!("alpha {} is not finite", self.alpha)));
        }
        if !(0.0..=1.0).contains(&self.error) {
            return Err(invalid(format!("error {} outside [0, 1]", self.error)));
        }
        if let Some(threshold) = self.stump.threshold() {
            if !threshold.is_finite() {
                return Err(invalid(format!("threshold {threshold} is not finite")));
            }
        }

        Ok(WeakLearner {
            key: FeatureKey::new(self.feature, self.block),
            stump: self.stump,
            error: self.error,
        })
    }
}
