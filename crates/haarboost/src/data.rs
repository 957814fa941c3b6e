//! Labelled training data.
//!
//! [`TrainingSet`] owns the images and labels for one training run and
//! validates them up front, before any feature is computed.

use serde::{Deserialize, Serialize};

use crate::features::GRID;
use crate::image::GrayImage;

// =============================================================================
// DatasetError
// =============================================================================

/// Errors raised while assembling training data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    /// No images were supplied.
    #[error("training set is empty")]
    Empty,

    /// Image and label counts differ.
    #[error("label count mismatch: {images} images but {labels} labels")]
    LabelCountMismatch { images: usize, labels: usize },

    /// An image does not share the size of the first image.
    #[error("image {index} is {}x{}, expected {}x{}", .found.0, .found.1, .expected.0, .expected.1)]
    DimensionMismatch {
        index: usize,
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// Image too small for every block of the 3x3 grid to hold a pixel.
    #[error("image is {width}x{height}, need at least {min}x{min}", min = GRID)]
    ImageTooSmall { width: usize, height: usize },

    /// Raw pixel buffer length does not match the requested dimensions.
    #[error("pixel buffer has {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

// =============================================================================
// Label
// =============================================================================

/// Binary class label (+1 / -1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Positive,
    Negative,
}

impl Label {
    /// `+1` or `-1`.
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Label::Positive => 1,
            Label::Negative => -1,
        }
    }

    /// Positive for any value > 0, negative otherwise.
    #[inline]
    pub fn from_sign(sign: i8) -> Self {
        if sign > 0 {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}

// =============================================================================
// TrainingSet
// =============================================================================

/// Images with one label each, all of one size.
#[derive(Clone, Debug)]
pub struct TrainingSet {
    images: Vec<GrayImage>,
    labels: Vec<Label>,
    dims: (usize, usize),
}

impl TrainingSet {
    /// Validate and assemble a training set.
    ///
    /// # Errors
    ///
    /// - [`DatasetError::Empty`] if `images` is empty
    /// - [`DatasetError::LabelCountMismatch`] if the counts differ
    /// - [`DatasetError::DimensionMismatch`] if any image differs in size from the first
    /// - [`DatasetError::ImageTooSmall`] if the shared size is below 3x3
    pub fn new(images: Vec<GrayImage>, labels: Vec<Label>) -> Result<Self, DatasetError> {
        let first = images.first().ok_or(DatasetError::Empty)?;
        if images.len() != labels.len() {
            return Err(DatasetError::LabelCountMismatch {
                images: images.len(),
                labels: labels.len(),
            });
        }

        let dims = first.dims();
        if let Some((index, image)) = images.iter().enumerate().find(|(_, img)| img.dims() != dims) {
            return Err(DatasetError::DimensionMismatch {
                index,
                expected: dims,
                found: image.dims(),
            });
        }

        let (width, height) = dims;
        if width < GRID || height < GRID {
            return Err(DatasetError::ImageTooSmall { width, height });
        }

        Ok(Self { images, labels, dims })
    }

    /// Build from `(image, label)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (GrayImage, Label)>) -> Result<Self, DatasetError> {
        let (images, labels) = pairs.into_iter().unzip();
        Self::new(images, labels)
    }

    #[inline]
    pub fn n_samples(&self) -> usize {
        self.images.len()
    }

    /// Shared `(width, height)` of every image.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        self.dims
    }

    #[inline]
    pub fn images(&self) -> &[GrayImage] {
        &self.images
    }

    #[inline]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn n_positive(&self) -> usize {
        self.labels.iter().filter(|&&l| l == Label::Positive).count()
    }

    pub fn n_negative(&self) -> usize {
        self.n_samples() - self.n_positive()
    }
}
