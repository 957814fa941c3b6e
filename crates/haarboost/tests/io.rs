//! Loader tests against images written to a temporary directory.

use std::fs;
use std::path::Path;

use haarboost::image::io::{load_gray_image, load_labeled_dir, load_training_set, LoadError};
use haarboost::{DatasetError, Label};
use image::{Luma, Rgb};

fn write_gray_png(path: &Path, width: u32, height: u32, value: u8) {
    image::GrayImage::from_fn(width, height, |x, _| Luma([value.wrapping_add(x as u8)]))
        .save(path)
        .unwrap();
}

#[test]
fn loads_gray_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.png");
    write_gray_png(&path, 6, 4, 10);

    let image = load_gray_image(&path).unwrap();
    assert_eq!(image.dims(), (6, 4));
    assert_eq!(image.get(0, 0), 10);
    assert_eq!(image.get(5, 3), 15);
}

#[test]
fn converts_color_to_luma() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gray_rgb.png");
    image::RgbImage::from_pixel(4, 4, Rgb([90, 90, 90])).save(&path).unwrap();

    let image = load_gray_image(&path).unwrap();
    assert_eq!(image.dims(), (4, 4));
    assert_eq!(image.get(2, 2), 90);
}

#[test]
fn color_conversion_uses_rec709_weights() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("primaries.png");
    let primaries = [Rgb([255, 0, 0]), Rgb([0, 255, 0]), Rgb([0, 0, 255])];
    image::RgbImage::from_fn(3, 1, |x, _| primaries[x as usize]).save(&path).unwrap();

    let image = load_gray_image(&path).unwrap();
    let luma: Vec<u8> = (0..3).map(|x| image.get(x, 0)).collect();

    // BT.601 would give [76, 149, 29]
    for (got, rec709) in luma.iter().zip([54u8, 182, 18]) {
        assert!(got.abs_diff(rec709) <= 1, "got {luma:?}");
    }
}

#[test]
fn directory_is_read_in_name_order() {
    let dir = tempfile::tempdir().unwrap();
    write_gray_png(&dir.path().join("b.png"), 3, 3, 20);
    write_gray_png(&dir.path().join("a.png"), 3, 3, 10);
    write_gray_png(&dir.path().join("c.png"), 3, 3, 30);
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join(".hidden"), b"not an image").unwrap();

    let pairs = load_labeled_dir(dir.path(), Label::Negative).unwrap();
    let firsts: Vec<u8> = pairs.iter().map(|(image, _)| image.get(0, 0)).collect();
    assert_eq!(firsts, vec![10, 20, 30]);
    assert!(pairs.iter().all(|(_, label)| *label == Label::Negative));
}

#[test]
fn training_set_puts_positives_first() {
    let root = tempfile::tempdir().unwrap();
    let (pos, neg) = (root.path().join("pos"), root.path().join("neg"));
    fs::create_dir(&pos).unwrap();
    fs::create_dir(&neg).unwrap();
    write_gray_png(&pos.join("p0.png"), 9, 9, 200);
    write_gray_png(&pos.join("p1.png"), 9, 9, 180);
    write_gray_png(&neg.join("n0.png"), 9, 9, 5);

    let set = load_training_set(&pos, &neg).unwrap();
    assert_eq!(set.labels(), &[Label::Positive, Label::Positive, Label::Negative]);
    assert_eq!(set.dims(), (9, 9));
}

#[test]
fn mixed_sizes_are_a_dataset_error() {
    let root = tempfile::tempdir().unwrap();
    let (pos, neg) = (root.path().join("pos"), root.path().join("neg"));
    fs::create_dir(&pos).unwrap();
    fs::create_dir(&neg).unwrap();
    write_gray_png(&pos.join("p.png"), 9, 9, 0);
    write_gray_png(&neg.join("n.png"), 12, 9, 0);

    let err = load_training_set(&pos, &neg).unwrap_err();
    assert!(
        matches!(err, LoadError::Dataset(DatasetError::DimensionMismatch { index: 1, .. })),
        "got: {err:?}"
    );
}

#[test]
fn undecodable_file_is_a_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    fs::write(&path, b"definitely not a png").unwrap();

    let err = load_gray_image(&path).unwrap_err();
    assert!(matches!(err, LoadError::Decode { .. }), "got: {err:?}");
}

#[test]
fn missing_directory_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_labeled_dir(dir.path().join("absent"), Label::Positive).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }), "got: {err:?}");
}
