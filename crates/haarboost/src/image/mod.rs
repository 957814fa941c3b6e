//! Grayscale images and pixel rectangles.
//!
//! - [`GrayImage`]: owned 8-bit grayscale buffer, immutable once built
//! - [`Rect`]: inclusive axis-aligned pixel rectangle
//! - [`IntegralImage`]: prefix-sum table for O(1) rectangle sums

mod integral;
#[cfg(feature = "io-image")]
pub mod io;

pub use integral::IntegralImage;

use ndarray::{Array2, ArrayView2};

use crate::data::DatasetError;

// =============================================================================
// GrayImage
// =============================================================================

/// Owned 8-bit grayscale image.
///
/// Pixels are stored as `[row, col]`, so `get(x, y)` reads row `y`, column `x`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImage {
    pixels: Array2<u8>,
}

impl GrayImage {
    /// Wrap an existing `[height, width]` pixel array.
    pub fn from_array(pixels: Array2<u8>) -> Self {
        Self { pixels }
    }

    /// Build from a row-major byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::BufferSize`] if `data.len() != width * height`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, DatasetError> {
        let expected = width * height;
        let actual = data.len();
        if actual != expected {
            return Err(DatasetError::BufferSize { expected, actual });
        }
        let pixels = Array2::from_shape_vec((height, width), data)
            .map_err(|_| DatasetError::BufferSize { expected, actual })?;
        Ok(Self { pixels })
    }

    /// Build by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> u8) -> Self {
        let pixels = Array2::from_shape_fn((height, width), |(y, x)| f(x, y));
        Self { pixels }
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// `(width, height)`.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Pixel intensity at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.pixels[[y, x]]
    }

    /// Borrow the `[height, width]` pixel array.
    #[inline]
    pub fn view(&self) -> ArrayView2<'_, u8> {
        self.pixels.view()
    }
}

// =============================================================================
// Rect
// =============================================================================

/// Axis-aligned pixel rectangle with **inclusive** bounds.
///
/// Covers columns `x0..=x1` and rows `y0..=y1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl Rect {
    #[inline]
    pub fn new(x0: usize, y0: usize, x1: usize, y1: usize) -> Self {
        debug_assert!(x0 <= x1 && y0 <= y1, "empty rect ({x0},{y0})-({x1},{y1})");
        Self { x0, y0, x1, y1 }
    }

    /// Rectangle of `width × height` pixels anchored at `(x, y)`.
    ///
    /// Both sizes must be at least 1.
    #[inline]
    pub fn from_origin(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self::new(x, y, x + width - 1, y + height - 1)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.x1 - self.x0 + 1
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.y1 - self.y0 + 1
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.width() * self.height()
    }

    /// Whether `(x, y)` lies inside the rectangle.
    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        (self.x0..=self.x1).contains(&x) && (self.y0..=self.y1).contains(&y)
    }
}
