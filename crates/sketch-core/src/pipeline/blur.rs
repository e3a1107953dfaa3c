//! Gaussian blur adapter.
//!
//! The pipeline treats smoothing as an opaque primitive with the contract
//! `(image, kernel size, sigma) -> image` of identical dimensions. The
//! actual convolution is delegated to `image::imageops::blur`, which is
//! sigma-parameterized; the kernel size participates through sigma
//! derivation when no explicit spread is given.

use image::imageops;
use image::GrayImage;

/// Minimum spatial extent accepted for the smoothing kernel.
const MIN_KERNEL_SIZE: u32 = 3;

/// Smooth an image with a Gaussian kernel.
///
/// Output dimensions equal input dimensions. A non-positive `sigma` means
/// "derive the spread from the kernel size".
pub fn gaussian(image: &GrayImage, kernel_size: u32, sigma: f32) -> GrayImage {
    imageops::blur(image, effective_sigma(kernel_size, sigma))
}

/// Resolve the Gaussian spread from the configured parameters.
///
/// An explicit positive sigma wins; otherwise the spread is derived from
/// the kernel size with the rule OpenCV uses for automatic sigma
/// selection: `0.3 * ((k - 1) * 0.5 - 1) + 0.8`.
#[inline]
pub(crate) fn effective_sigma(kernel_size: u32, sigma: f32) -> f32 {
    if sigma > 0.0 {
        return sigma;
    }
    let k = kernel_size.max(MIN_KERNEL_SIZE) as f32;
    0.3 * ((k - 1.0) * 0.5 - 1.0) + 0.8
}
