//! Color-dodge blend: division-based tone lightening.
//!
//! Dodging brightens the base image in proportion to the inverse of the
//! mask. Where the mask saturates at 255 the divisor would be zero; that
//! pixel is defined to be full white rather than an error.

use image::GrayImage;

use super::error::BlendError;
use super::{ensure_matching, gray_from_raw, zip_pixels};

/// Blend a base image with a mask via color dodge.
///
/// For every pixel, the output is
/// `min(255, floor(base * 256 / (255 - mask)))`, with a mask value of 255
/// mapping straight to 255 (full lightening). The multiply-by-256 is a
/// left shift, so the quotient is exact before the floor.
///
/// The whole image is transformed in one bulk elementwise pass; there is
/// no per-pixel coordinate loop.
///
/// # Errors
///
/// Returns [`BlendError::DimensionMismatch`] if the operands differ in
/// width or height.
pub fn dodge_blend(image: &GrayImage, mask: &GrayImage) -> Result<GrayImage, BlendError> {
    ensure_matching(image, mask)?;
    let out = zip_pixels(image.as_raw(), mask.as_raw(), dodge);
    Ok(gray_from_raw(image.width(), image.height(), out))
}

/// Scalar dodge kernel, applied to every pixel by the bulk pass.
#[inline]
pub(crate) fn dodge(value: u8, mask: u8) -> u8 {
    if mask == 255 {
        return 255;
    }
    let lifted = (value as u32) << 8;
    (lifted / (255 - mask) as u32).min(255) as u8
}
