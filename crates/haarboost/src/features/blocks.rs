//! Fixed 3x3 block grid.

use crate::image::Rect;

/// Blocks per side.
pub const GRID: usize = 3;

/// Blocks per image.
pub const N_BLOCKS: usize = GRID * GRID;

/// Split a `width × height` image into a 3x3 grid of equal blocks.
///
/// Blocks are `(width / 3) × (height / 3)` and listed row-major (top-left
/// first). When a dimension is not a multiple of 3 the trailing remainder
/// pixels on the right/bottom edge belong to no block; training data is
/// expected to share one fixed size, so this is kept rather than rebalanced.
///
/// Both dimensions must be at least 3 (checked by
/// [`TrainingSet::new`](crate::data::TrainingSet::new)).
pub fn partition_blocks(width: usize, height: usize) -> [Rect; N_BLOCKS] {
    debug_assert!(width >= GRID && height >= GRID, "image {width}x{height} too small");
    let (bw, bh) = (width / GRID, height / GRID);
    std::array::from_fn(|i| {
        let (row, col) = (i / GRID, i % GRID);
        Rect::from_origin(col * bw, row * bh, bw, bh)
    })
}
