//! Elementwise tone operations over grayscale images.
//!
//! Every operation in this module is a pure, whole-image transform: the
//! scalar kernel for one pixel lives in an `#[inline]` function inside the
//! operation's file, and is applied to the flat pixel buffer by the bulk
//! helpers below. Large images are processed in parallel via rayon; small
//! ones take a sequential path where the thread-pool dispatch would cost
//! more than it saves.
//!
//! Operands are [`image::GrayImage`] values, so a channel-count mismatch
//! between two operands cannot be expressed; width/height mismatches are
//! reported as [`BlendError::DimensionMismatch`].

mod burn;
mod composite;
mod dodge;
mod error;
mod negate;

pub use burn::burn_blend;
pub use composite::canvas_composite;
pub use dodge::dodge_blend;
pub use error::BlendError;
pub use negate::negate;

use image::GrayImage;
use rayon::prelude::*;

/// Pixel count above which bulk passes dispatch to rayon.
///
/// Below this (roughly a 256x256 image) the sequential path wins because
/// per-call thread-pool overhead dominates the arithmetic.
pub(crate) const PARALLEL_THRESHOLD: usize = 1 << 16;

/// Verify that two blend operands share the same width and height.
pub(crate) fn ensure_matching(base: &GrayImage, other: &GrayImage) -> Result<(), BlendError> {
    if base.dimensions() != other.dimensions() {
        let (expected_width, expected_height) = base.dimensions();
        let (actual_width, actual_height) = other.dimensions();
        return Err(BlendError::DimensionMismatch {
            expected_width,
            expected_height,
            actual_width,
            actual_height,
        });
    }
    Ok(())
}

/// Apply a scalar kernel to every pixel of a flat buffer in one bulk pass.
pub(crate) fn map_pixels<F>(src: &[u8], op: F) -> Vec<u8>
where
    F: Fn(u8) -> u8 + Sync,
{
    if src.len() >= PARALLEL_THRESHOLD {
        src.par_iter().map(|&v| op(v)).collect()
    } else {
        src.iter().map(|&v| op(v)).collect()
    }
}

/// Apply a scalar kernel to every pixel pair of two equal-length flat
/// buffers in one bulk pass.
pub(crate) fn zip_pixels<F>(lhs: &[u8], rhs: &[u8], op: F) -> Vec<u8>
where
    F: Fn(u8, u8) -> u8 + Sync,
{
    if lhs.len() >= PARALLEL_THRESHOLD {
        lhs.par_iter()
            .zip(rhs.par_iter())
            .map(|(&a, &b)| op(a, b))
            .collect()
    } else {
        lhs.iter()
            .zip(rhs.iter())
            .map(|(&a, &b)| op(a, b))
            .collect()
    }
}

/// Rewrap a transformed buffer as a `GrayImage`.
///
/// The bulk helpers preserve buffer length, so the length always matches
/// `width * height` here.
pub(crate) fn gray_from_raw(width: u32, height: u32, data: Vec<u8>) -> GrayImage {
    GrayImage::from_raw(width, height, data)
        .expect("pixel buffer length matches image dimensions")
}
