//! Training progress logging.
//!
//! [`TrainingLogger`] filters by [`Verbosity`] and emits `tracing` events.
//! The library never installs a subscriber; applications choose one.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::features::FeatureKey;

use super::selector::WeakLearner;

/// Verbosity level for training output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    /// No output.
    #[default]
    Silent,
    /// Degenerate rounds and other warnings only.
    Warning,
    /// Progress: one line per round.
    Info,
    /// Every candidate's weighted error, every round.
    Debug,
}

/// Round-by-round training logger.
#[derive(Debug)]
pub struct TrainingLogger {
    verbosity: Verbosity,
    started: Option<Instant>,
}

impl TrainingLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity, started: None }
    }

    #[inline]
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    #[inline]
    fn enabled(&self, level: Verbosity) -> bool {
        level != Verbosity::Silent && self.verbosity >= level
    }

    pub fn log_cache_built(&self, n_keys: usize, n_samples: usize, elapsed: Duration) {
        if self.enabled(Verbosity::Info) {
            tracing::info!(
                n_keys,
                n_samples,
                elapsed_ms = elapsed.as_secs_f64() * 1e3,
                "feature cache built"
            );
        }
    }

    pub fn start_training(&mut self, n_rounds: usize, n_samples: usize, n_candidates: usize) {
        self.started = Some(Instant::now());
        if self.enabled(Verbosity::Info) {
            tracing::info!(n_rounds, n_samples, n_candidates, "starting adaboost training");
        }
    }

    /// Weighted error of every candidate key for one round.
    pub fn log_candidates(&self, round: usize, keys: &[FeatureKey], errors: &[f64]) {
        if !self.enabled(Verbosity::Debug) {
            return;
        }
        for (key, error) in keys.iter().zip(errors) {
            tracing::debug!(round, key = %key, error, "candidate");
        }
    }

    pub fn log_round(&self, round: usize, learner: &WeakLearner, alpha: f64) {
        if self.enabled(Verbosity::Warning) {
            if learner.error == 0.0 {
                tracing::warn!(round, key = %learner.key, "zero weighted error, alpha set to 0");
            } else if learner.error >= 0.5 {
                tracing::warn!(
                    round,
                    key = %learner.key,
                    error = learner.error,
                    alpha,
                    "weighted error not below 0.5"
                );
            }
        }
        if self.enabled(Verbosity::Info) {
            tracing::info!(round, key = %learner.key, error = learner.error, alpha, "round complete");
        }
    }

    pub fn log_unnormalized(&self, round: usize, alpha: f64) {
        if self.enabled(Verbosity::Warning) {
            tracing::warn!(round, alpha, "distribution sum is zero or not finite, left unnormalized");
        }
    }

    pub fn finish_training(&mut self, n_rounds: usize) {
        let elapsed = self.started.take().map(|t| t.elapsed()).unwrap_or_default();
        if self.enabled(Verbosity::Info) {
            tracing::info!(
                n_rounds,
                elapsed_ms = elapsed.as_secs_f64() * 1e3,
                "training complete"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_is_ordered() {
        assert!(Verbosity::Silent < Verbosity::Warning);
        assert!(Verbosity::Warning < Verbosity::Info);
        assert!(Verbosity::Info < Verbosity::Debug);
        assert_eq!(Verbosity::default(), Verbosity::Silent);
    }

    #[test]
    fn levels_are_filtered() {
        let silent = TrainingLogger::new(Verbosity::Silent);
        assert!(!silent.enabled(Verbosity::Warning));

        let info = TrainingLogger::new(Verbosity::Info);
        assert!(info.enabled(Verbosity::Warning));
        assert!(info.enabled(Verbosity::Info));
        assert!(!info.enabled(Verbosity::Debug));
    }
}
