//! Loading grayscale training images from disk.
//!
//! - `load_gray_image`: decode any supported format and convert to 8-bit luma
//! - `load_labeled_dir`: every image in one directory, with one label
//! - `load_training_set`: a positive and a negative directory, validated

use std::fs;
use std::path::{Path, PathBuf};

use crate::data::{DatasetError, Label, TrainingSet};

use super::GrayImage;

/// Errors from reading images off disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Load an image from disk and convert to 8-bit grayscale.
///
/// Color images go through `image`'s `into_luma8`, which weights channels with
/// the Rec. 709 coefficients `0.2126 R + 0.7152 G + 0.0722 B`. Tools that use
/// the BT.601 weights `0.299 R + 0.587 G + 0.114 B` (PIL's `convert("L")`,
/// OpenCV's `cvtColor`) produce different pixel values, and so different
/// feature sums, for the same color file.
pub fn load_gray_image(path: impl AsRef<Path>) -> Result<GrayImage, LoadError> {
    let path = path.as_ref();
    let luma = image::open(path)
        .map_err(|err| match err {
            image::ImageError::IoError(source) => LoadError::Io { path: path.to_path_buf(), source },
            source => LoadError::Decode { path: path.to_path_buf(), source },
        })?
        .into_luma8();

    let (width, height) = (luma.width() as usize, luma.height() as usize);
    Ok(GrayImage::from_raw(width, height, luma.into_raw())?)
}

/// Load every image in `dir`, labelled `label`.
///
/// Files are read in file-name order so sample order is reproducible.
/// Subdirectories and hidden files (leading `.`) are skipped.
pub fn load_labeled_dir(dir: impl AsRef<Path>, label: Label) -> Result<Vec<(GrayImage, Label)>, LoadError> {
    let dir = dir.as_ref();
    let io_err = |source| LoadError::Io { path: dir.to_path_buf(), source };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        let path = entry.path();
        if !hidden && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let images = paths
        .iter()
        .map(|path| Ok((load_gray_image(path)?, label)))
        .collect::<Result<Vec<_>, LoadError>>()?;

    tracing::debug!(dir = %dir.display(), ?label, n_images = images.len(), "loaded image directory");
    Ok(images)
}

/// Load positives then negatives into one validated training set.
pub fn load_training_set(
    positive_dir: impl AsRef<Path>,
    negative_dir: impl AsRef<Path>,
) -> Result<TrainingSet, LoadError> {
    let mut pairs = load_labeled_dir(positive_dir, Label::Positive)?;
    pairs.extend(load_labeled_dir(negative_dir, Label::Negative)?);
    Ok(TrainingSet::from_pairs(pairs)?)
}
