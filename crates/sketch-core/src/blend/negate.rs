//! Per-pixel complement.

use image::GrayImage;

use super::{gray_from_raw, map_pixels};

/// Produce the per-pixel complement of an image: `out = 255 - value`.
///
/// Pure and total; applying it twice returns the original image exactly.
pub fn negate(image: &GrayImage) -> GrayImage {
    let out = map_pixels(image.as_raw(), complement);
    gray_from_raw(image.width(), image.height(), out)
}

#[inline]
fn complement(value: u8) -> u8 {
    255 - value
}
