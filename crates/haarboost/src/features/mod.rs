//! Rectangle features evaluated over image blocks.
//!
//! # Key Types
//!
//! - [`FeatureKind`]: one rectangle-difference feature (two, three, four rectangles)
//! - [`FeatureBank`]: the ordered set of kinds a training run uses
//! - [`FeatureKey`]: one `(feature, block)` weak-learner candidate
//! - [`FeatureCache`]: every key's feature vector over the training images
//!
//! Blocks come from [`partition_blocks`], a fixed 3x3 grid.

mod blocks;
mod cache;

pub use blocks::{partition_blocks, GRID, N_BLOCKS};
pub use cache::{CacheError, FeatureCache};

use serde::{Deserialize, Serialize};

use crate::image::{GrayImage, IntegralImage, Rect};

// =============================================================================
// FeatureKind
// =============================================================================

/// A signed difference of sub-rectangle sums inside a block.
///
/// Sub-rectangles have equal size; trailing pixels that do not divide evenly
/// are left out. A block too small to split yields `0.0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    /// Left half minus right half.
    TwoRectangle,
    /// Outer vertical strips minus the middle strip.
    ThreeRectangle,
    /// Main diagonal quadrants minus the anti-diagonal quadrants.
    FourRectangle,
}

impl FeatureKind {
    /// All kinds, in the standard bank order.
    pub const ALL: [FeatureKind; 3] = [
        FeatureKind::TwoRectangle,
        FeatureKind::ThreeRectangle,
        FeatureKind::FourRectangle,
    ];

    /// Stable identifier, used in logs and persisted models.
    pub fn name(self) -> &'static str {
        match self {
            FeatureKind::TwoRectangle => "two_rectangle",
            FeatureKind::ThreeRectangle => "three_rectangle",
            FeatureKind::FourRectangle => "four_rectangle",
        }
    }

    /// Evaluate over `block` using a prebuilt integral image.
    pub fn evaluate(self, integral: &IntegralImage, block: Rect) -> f64 {
        let sum = |r: Rect| integral.sum(r) as f64;
        let (x0, y0) = (block.x0, block.y0);

        match self {
            FeatureKind::TwoRectangle => {
                let half = block.width() / 2;
                if half == 0 {
                    return 0.0;
                }
                let h = block.height();
                let left = Rect::from_origin(x0, y0, half, h);
                let right = Rect::from_origin(x0 + half, y0, half, h);
                sum(left) - sum(right)
            }
            FeatureKind::ThreeRectangle => {
                let strip = block.width() / 3;
                if strip == 0 {
                    return 0.0;
                }
                let h = block.height();
                let left = Rect::from_origin(x0, y0, strip, h);
                let middle = Rect::from_origin(x0 + strip, y0, strip, h);
                let right = Rect::from_origin(x0 + 2 * strip, y0, strip, h);
                sum(left) + sum(right) - sum(middle)
            }
            FeatureKind::FourRectangle => {
                let (hw, hh) = (block.width() / 2, block.height() / 2);
                if hw == 0 || hh == 0 {
                    return 0.0;
                }
                let top_left = Rect::from_origin(x0, y0, hw, hh);
                let top_right = Rect::from_origin(x0 + hw, y0, hw, hh);
                let bottom_left = Rect::from_origin(x0, y0 + hh, hw, hh);
                let bottom_right = Rect::from_origin(x0 + hw, y0 + hh, hw, hh);
                sum(top_left) + sum(bottom_right) - sum(top_right) - sum(bottom_left)
            }
        }
    }

    /// Evaluate directly on an image. Builds a throwaway integral image.
    pub fn evaluate_image(self, image: &GrayImage, block: Rect) -> f64 {
        self.evaluate(&IntegralImage::new(image), block)
    }
}

impl std::fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// FeatureBank
// =============================================================================

/// Ordered, duplicate-free set of feature kinds.
///
/// The bank order fixes the candidate iteration order used for tie-breaking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureBank {
    kinds: Vec<FeatureKind>,
}

impl FeatureBank {
    /// All three kinds: two-, three-, then four-rectangle.
    pub fn standard() -> Self {
        Self { kinds: FeatureKind::ALL.to_vec() }
    }

    /// Bank with the given kinds, keeping first occurrences only.
    pub fn new(kinds: impl IntoIterator<Item = FeatureKind>) -> Self {
        let mut unique = Vec::new();
        for kind in kinds {
            if !unique.contains(&kind) {
                unique.push(kind);
            }
        }
        Self { kinds: unique }
    }

    #[inline]
    pub fn kinds(&self) -> &[FeatureKind] {
        &self.kinds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Every `(feature, block)` key in iteration order: bank order outer,
    /// block index inner.
    pub fn keys(&self) -> Vec<FeatureKey> {
        self.kinds
            .iter()
            .flat_map(|&kind| (0..N_BLOCKS).map(move |block| FeatureKey::new(kind, block)))
            .collect()
    }
}

impl Default for FeatureBank {
    fn default() -> Self {
        Self::standard()
    }
}

// =============================================================================
// FeatureKey
// =============================================================================

/// Identifies one weak-learner candidate: a feature kind applied to one block.
///
/// Carries the feature's stable identity rather than its position in a bank,
/// so keys stay valid across banks and cache rebuilds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureKey {
    pub kind: FeatureKind,
    /// Row-major index into the 3x3 block grid.
    pub block: usize,
}

impl FeatureKey {
    #[inline]
    pub fn new(kind: FeatureKind, block: usize) -> Self {
        debug_assert!(block < N_BLOCKS);
        Self { kind, block }
    }
}

impl std::fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.kind, self.block)
    }
}
