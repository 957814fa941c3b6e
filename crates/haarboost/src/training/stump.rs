//! Depth-1 decision stumps on a single feature.
//!
//! Fitting follows a CART depth-1 classifier with the Gini criterion:
//! candidate thresholds sit halfway between consecutive distinct values,
//! the first split with strictly lowest weighted child impurity wins, and
//! each side predicts its weighted majority class.

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use crate::data::Label;

// =============================================================================
// StumpWeighting
// =============================================================================

/// Whether stumps see the boosting distribution when they are fitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StumpWeighting {
    /// Fit on raw labels; the distribution only weights the error.
    ///
    /// Stumps then do not change between rounds and are fitted once.
    #[default]
    Unweighted,
    /// Fit with the current distribution as sample weights.
    Distribution,
}

// =============================================================================
// DecisionStump
// =============================================================================

/// Single-threshold binary classifier.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DecisionStump {
    /// No usable split: always predicts `label`.
    Constant { label: Label },
    /// Predicts `below` when `value <= threshold`, `above` otherwise.
    Split {
        threshold: f64,
        below: Label,
        above: Label,
    },
}

impl DecisionStump {
    /// Fit on `values` against `labels`, optionally weighted.
    ///
    /// Pure or constant inputs give a [`Constant`](Self::Constant) stump.
    pub fn fit(values: ArrayView1<'_, f64>, labels: &[Label], weights: Option<&[f64]>) -> Self {
        let n = values.len();
        debug_assert_eq!(labels.len(), n);
        debug_assert!(weights.map_or(true, |w| w.len() == n));

        let weight = |i: usize| weights.map_or(1.0, |w| w[i]);

        let mut total = ClassWeights::default();
        for (i, &label) in labels.iter().enumerate() {
            total.add(label, weight(i));
        }
        if total.is_pure() {
            return Self::Constant { label: total.majority() };
        }

        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

        let mut left = ClassWeights::default();
        let mut best: Option<BestSplit> = None;

        for p in 1..n {
            let prev = order[p - 1];
            left.add(labels[prev], weight(prev));

            let (lo, hi) = (values[prev], values[order[p]]);
            // no threshold separates equal values
            if !(hi > lo) {
                continue;
            }

            let right = total.minus(left);
            let impurity = left.weighted_gini() + right.weighted_gini();
            if best.map_or(true, |b| impurity < b.impurity) {
                best = Some(BestSplit { impurity, lo, hi, left, right });
            }
        }

        match best {
            None => Self::Constant { label: total.majority() },
            Some(split) => {
                let mut threshold = split.lo / 2.0 + split.hi / 2.0;
                if threshold == split.hi || !threshold.is_finite() {
                    threshold = split.lo;
                }
                Self::Split {
                    threshold,
                    below: split.left.majority(),
                    above: split.right.majority(),
                }
            }
        }
    }

    /// Predicted label for one feature value.
    #[inline]
    pub fn predict(&self, value: f64) -> Label {
        match *self {
            Self::Constant { label } => label,
            Self::Split { threshold, below, above } => {
                if value <= threshold {
                    below
                } else {
                    above
                }
            }
        }
    }

    /// Threshold, if the stump splits at all.
    pub fn threshold(&self) -> Option<f64> {
        match *self {
            Self::Constant { .. } => None,
            Self::Split { threshold, .. } => Some(threshold),
        }
    }
}

// =============================================================================
// Internals
// =============================================================================

#[derive(Clone, Copy, Debug)]
struct BestSplit {
    impurity: f64,
    lo: f64,
    hi: f64,
    left: ClassWeights,
    right: ClassWeights,
}

/// Per-class weight totals of one side of a split.
#[derive(Clone, Copy, Debug, Default)]
struct ClassWeights {
    positive: f64,
    negative: f64,
}

impl ClassWeights {
    #[inline]
    fn add(&mut self, label: Label, weight: f64) {
        match label {
            Label::Positive => self.positive += weight,
            Label::Negative => self.negative += weight,
        }
    }

    #[inline]
    fn minus(self, other: Self) -> Self {
        Self {
            positive: self.positive - other.positive,
            negative: self.negative - other.negative,
        }
    }

    #[inline]
    fn total(self) -> f64 {
        self.positive + self.negative
    }

    #[inline]
    fn is_pure(self) -> bool {
        self.positive <= 0.0 || self.negative <= 0.0
    }

    /// Gini impurity scaled by the side's weight.
    #[inline]
    fn weighted_gini(self) -> f64 {
        let total = self.total();
        if total <= 0.0 {
            return 0.0;
        }
        total - (self.positive * self.positive + self.negative * self.negative) / total
    }

    /// Heavier class; ties go to `Negative`.
    #[inline]
    fn majority(self) -> Label {
        if self.positive > self.negative {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}
