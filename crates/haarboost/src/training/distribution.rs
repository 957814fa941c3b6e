//! Per-sample boosting weights.

/// Non-negative sample weights summing to 1.
///
/// Owned and mutated only by the trainer, between rounds.
#[derive(Clone, Debug, PartialEq)]
pub struct Distribution {
    weights: Vec<f64>,
}

impl Distribution {
    /// `1/n` for every sample.
    pub fn uniform(n_samples: usize) -> Self {
        debug_assert!(n_samples > 0);
        Self { weights: vec![1.0 / n_samples as f64; n_samples] }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Scale correctly classified samples by `e^-alpha`, misclassified ones by
    /// `e^alpha`, then renormalize.
    ///
    /// Returns `false` (weights left unnormalized) if the post-update sum is
    /// zero or not finite.
    pub fn reweight(&mut self, alpha: f64, correct: &[bool]) -> bool {
        debug_assert_eq!(correct.len(), self.weights.len());
        let (shrink, grow) = ((-alpha).exp(), alpha.exp());
        for (w, &ok) in self.weights.iter_mut().zip(correct) {
            *w *= if ok { shrink } else { grow };
        }
        self.normalize()
    }

    fn normalize(&mut self) -> bool {
        let total = self.sum();
        if !(total.is_finite() && total > 0.0) {
            return false;
        }
        for w in &mut self.weights {
            *w /= total;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn uniform_sums_to_one() {
        let d = Distribution::uniform(7);
        assert_eq!(d.len(), 7);
        assert_abs_diff_eq!(d.sum(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_alpha_keeps_distribution() {
        let mut d = Distribution::uniform(4);
        assert!(d.reweight(0.0, &[true, false, true, false]));
        for &w in d.as_slice() {
            assert_abs_diff_eq!(w, 0.25, epsilon = 1e-15);
        }
    }

    #[test]
    fn misclassified_samples_gain_weight() {
        // error 0.25 -> alpha = 0.5 ln 3; misclassified mass becomes exactly 1/2
        let alpha = 0.5 * 3.0f64.ln();
        let mut d = Distribution::uniform(4);
        assert!(d.reweight(alpha, &[true, true, true, false]));

        let w = d.as_slice();
        assert_abs_diff_eq!(w[3], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(w[0], 1.0 / 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(d.sum(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn negative_alpha_flips_direction() {
        let mut d = Distribution::uniform(2);
        d.reweight(-1.0, &[true, false]);
        assert!(d.as_slice()[0] > d.as_slice()[1]);
        assert_abs_diff_eq!(d.sum(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn overflowing_update_is_reported() {
        let mut d = Distribution::uniform(2);
        assert!(!d.reweight(1e6, &[false, false]));
    }
}
