//! End-to-end file rendering tests for the graphite CLI crate.

use std::path::PathBuf;

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use graphite::models::SketchConfig;
use graphite::rendering::render_file;

/// Write a synthetic photograph (dark square on a light field) to disk.
fn write_test_photo(dir: &TempDir, name: &str, size: u32) -> PathBuf {
    let image = RgbImage::from_fn(size, size, |x, y| {
        if (size / 4..3 * size / 4).contains(&x) && (size / 4..3 * size / 4).contains(&y) {
            Rgb([50, 50, 50])
        } else {
            Rgb([210, 210, 210])
        }
    });
    let path = dir.path().join(name);
    DynamicImage::ImageRgb8(image).save(&path).unwrap();
    path
}

#[test]
fn test_render_file_writes_output_with_input_dimensions() {
    let dir = TempDir::new().unwrap();
    let input = write_test_photo(&dir, "photo.png", 32);
    let output = dir.path().join("sketch.png");

    let config = SketchConfig {
        kernel_size: 5,
        ..SketchConfig::default()
    };
    let report = render_file(&input, &output, &config).unwrap();

    assert_eq!(report.width, 32);
    assert_eq!(report.height, 32);
    assert!(report.bytes > 0);
    assert!(output.exists());

    // The written file decodes back as a single-channel image of the
    // same dimensions.
    let decoded = image::open(&output).unwrap();
    assert_eq!(decoded.width(), 32);
    assert_eq!(decoded.height(), 32);
}

#[test]
fn test_render_file_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let input = write_test_photo(&dir, "photo.png", 24);
    let first = dir.path().join("a.png");
    let second = dir.path().join("b.png");

    let config = SketchConfig {
        kernel_size: 7,
        ..SketchConfig::default()
    };
    render_file(&input, &first, &config).unwrap();
    render_file(&input, &second, &config).unwrap();

    let a = image::open(&first).unwrap().to_luma8();
    let b = image::open(&second).unwrap().to_luma8();
    assert_eq!(a.as_raw(), b.as_raw());
}

#[test]
fn test_render_file_with_canvas_darkens_output() {
    let dir = TempDir::new().unwrap();
    let input = write_test_photo(&dir, "photo.png", 16);

    // A mid-gray paper texture.
    let canvas_path = dir.path().join("paper.png");
    DynamicImage::ImageLuma8(GrayImage::from_pixel(16, 16, Luma([128])))
        .save(&canvas_path)
        .unwrap();

    let plain_out = dir.path().join("plain.png");
    let textured_out = dir.path().join("textured.png");

    let plain_config = SketchConfig {
        kernel_size: 5,
        ..SketchConfig::default()
    };
    let textured_config = SketchConfig {
        kernel_size: 5,
        canvas: Some(canvas_path),
        ..SketchConfig::default()
    };

    render_file(&input, &plain_out, &plain_config).unwrap();
    render_file(&input, &textured_out, &textured_config).unwrap();

    let plain = image::open(&plain_out).unwrap().to_luma8();
    let textured = image::open(&textured_out).unwrap().to_luma8();

    let plain_sum: u64 = plain.as_raw().iter().map(|&v| v as u64).sum();
    let textured_sum: u64 = textured.as_raw().iter().map(|&v| v as u64).sum();
    assert!(
        textured_sum < plain_sum,
        "canvas composite should darken: {textured_sum} vs {plain_sum}"
    );
}

#[test]
fn test_render_file_canvas_dimension_mismatch_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_test_photo(&dir, "photo.png", 16);

    let canvas_path = dir.path().join("paper.png");
    DynamicImage::ImageLuma8(GrayImage::new(16, 20))
        .save(&canvas_path)
        .unwrap();

    let config = SketchConfig {
        kernel_size: 5,
        canvas: Some(canvas_path),
        ..SketchConfig::default()
    };
    let output = dir.path().join("sketch.png");
    let err = render_file(&input, &output, &config).unwrap_err();

    assert!(matches!(err, graphite::error::AppError::Sketch(_)));
    assert!(!output.exists(), "no output may be produced on failure");
}

#[test]
fn test_render_file_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let config = SketchConfig::default();
    let result = render_file(
        &dir.path().join("missing.png"),
        &dir.path().join("out.png"),
        &config,
    );
    assert!(result.is_err());
}
