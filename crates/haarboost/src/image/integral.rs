//! Integral image (summed-area table).
//!
//! The table is filled in one row-major pass. It carries a zero guard row and
//! column so that the "index -1" terms of the inclusion-exclusion identity
//! read as 0 without branching:
//!
//! ```text
//! sum(rect) = S(x1, y1) - S(x0-1, y1) - S(x1, y0-1) + S(x0-1, y0-1)
//!                 D            C             B              A
//! ```

use ndarray::Array2;

use super::{GrayImage, Rect};

/// Prefix sums over a [`GrayImage`].
///
/// `table[[y + 1, x + 1]]` holds S(x, y), the sum of all pixels with
/// row <= y and column <= x. Row 0 and column 0 are zero.
#[derive(Clone, Debug)]
pub struct IntegralImage {
    table: Array2<u64>,
}

impl IntegralImage {
    /// Build the table in O(W·H).
    pub fn new(image: &GrayImage) -> Self {
        let (width, height) = image.dims();
        let pixels = image.view();
        let mut table = Array2::<u64>::zeros((height + 1, width + 1));

        for y in 0..height {
            let mut row_sum = 0u64;
            for x in 0..width {
                row_sum += u64::from(pixels[[y, x]]);
                table[[y + 1, x + 1]] = table[[y, x + 1]] + row_sum;
            }
        }

        Self { table }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.table.ncols() - 1
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.table.nrows() - 1
    }

    /// S(x, y): sum of pixels in columns `0..=x`, rows `0..=y`.
    #[inline]
    pub fn cumulative(&self, x: usize, y: usize) -> u64 {
        self.table[[y + 1, x + 1]]
    }

    /// The four independent partial sums `[D, C, B, A]` of a rectangle.
    ///
    /// Each term is a single table lookup; [`sum`](Self::sum) reduces them.
    #[inline]
    pub fn corners(&self, rect: Rect) -> [u64; 4] {
        debug_assert!(rect.x1 < self.width() && rect.y1 < self.height());
        let d = self.table[[rect.y1 + 1, rect.x1 + 1]];
        let c = self.table[[rect.y1 + 1, rect.x0]];
        let b = self.table[[rect.y0, rect.x1 + 1]];
        let a = self.table[[rect.y0, rect.x0]];
        [d, c, b, a]
    }

    /// Sum of pixel intensities inside `rect` (inclusive bounds), in O(1).
    #[inline]
    pub fn sum(&self, rect: Rect) -> u64 {
        let [d, c, b, a] = self.corners(rect);
        // d + a >= b + c for any non-empty rectangle
        d + a - b - c
    }
}
