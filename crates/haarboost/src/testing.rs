//! Seeded synthetic data and reference implementations for tests and benches.

use rand::prelude::*;

use crate::data::{DatasetError, Label, TrainingSet};
use crate::image::{GrayImage, Rect};

/// Uniform random pixels in `[0, 255]`.
pub fn random_gray_image(width: usize, height: usize, seed: u64) -> GrayImage {
    let mut rng = StdRng::seed_from_u64(seed);
    GrayImage::from_fn(width, height, |_, _| rng.gen())
}

/// Two-class set with a left/right brightness contrast plus noise.
///
/// Positives are brighter on the left half, negatives on the right half.
/// Pixels are `noise + 150` on the bright side and `noise` elsewhere, with
/// noise uniform in `[0, 60]`. Positives come first, then negatives.
pub fn synthetic_set(
    width: usize,
    height: usize,
    n_per_class: usize,
    seed: u64,
) -> Result<TrainingSet, DatasetError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut image = |bright_left: bool| {
        GrayImage::from_fn(width, height, |x, _| {
            let noise: u8 = rng.gen_range(0..=60);
            let left = x < width / 2;
            if left == bright_left {
                noise + 150
            } else {
                noise
            }
        })
    };

    let mut pairs = Vec::with_capacity(2 * n_per_class);
    for _ in 0..n_per_class {
        pairs.push((image(true), Label::Positive));
    }
    for _ in 0..n_per_class {
        pairs.push((image(false), Label::Negative));
    }
    TrainingSet::from_pairs(pairs)
}

/// Rectangle sum by visiting every pixel.
pub fn brute_force_sum(image: &GrayImage, rect: Rect) -> u64 {
    let mut total = 0u64;
    for y in rect.y0..=rect.y1 {
        for x in rect.x0..=rect.x1 {
            total += image.get(x, y) as u64;
        }
    }
    total
}

/// Cumulative sum of the rectangle `(0, 0)..=(x, y)` by direct recursion.
///
/// Column sums recurse over rows and the total recurses over columns; an
/// index of `-1` contributes zero. Quadratic and stack-hungry, so only for
/// checking [`IntegralImage`](crate::image::IntegralImage) on small images.
pub fn recursive_cumulative(image: &GrayImage, x: isize, y: isize) -> u64 {
    fn column(image: &GrayImage, x: usize, y: isize) -> u64 {
        if y < 0 {
            return 0;
        }
        image.get(x, y as usize) as u64 + column(image, x, y - 1)
    }

    if x < 0 {
        return 0;
    }
    column(image, x as usize, y) + recursive_cumulative(image, x - 1, y)
}
