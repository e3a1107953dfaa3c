//! Color-burn blend: the tonal dual of dodge.
//!
//! Burning darkens the base image via the same division formula applied to
//! complemented inputs: `burn(x, m) = 255 - dodge(255 - x, 255 - m)`.

use image::GrayImage;

use super::dodge::dodge;
use super::error::BlendError;
use super::{ensure_matching, gray_from_raw, zip_pixels};

/// Blend a base image with a mask via color burn.
///
/// Shares the dodge kernel's clamp and zero-divisor handling through the
/// complement identity, and runs as a single bulk pass rather than
/// negate/dodge/negate round trips over three allocations.
///
/// # Errors
///
/// Returns [`BlendError::DimensionMismatch`] if the operands differ in
/// width or height.
pub fn burn_blend(image: &GrayImage, mask: &GrayImage) -> Result<GrayImage, BlendError> {
    ensure_matching(image, mask)?;
    let out = zip_pixels(image.as_raw(), mask.as_raw(), burn);
    Ok(gray_from_raw(image.width(), image.height(), out))
}

/// Scalar burn kernel, applied to every pixel by the bulk pass.
#[inline]
pub(crate) fn burn(value: u8, mask: u8) -> u8 {
    255 - dodge(255 - value, 255 - mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burn_dark_mask_crushes_to_black() {
        // burn(200, 50) = 255 - dodge(55, 205) = 255 - min(255, floor(55*256/50)) = 0
        assert_eq!(burn(200, 50), 0);
    }

    #[test]
    fn test_burn_zero_mask_divisor_path() {
        // Complemented mask saturates at 255, hitting the dodge zero-divisor
        // path: burn(x, 0) = 255 - 255 = 0.
        assert_eq!(burn(100, 0), 0);
        assert_eq!(burn(255, 0), 0);
    }

    #[test]
    fn test_burn_is_dual_of_dodge_everywhere() {
        for value in 0..=255u8 {
            for mask in 0..=255u8 {
                assert_eq!(
                    burn(value, mask),
                    255 - dodge(255 - value, 255 - mask),
                    "value={value} mask={mask}"
                );
            }
        }
    }

    #[test]
    fn test_burn_monotone_in_value() {
        // Dodge is non-decreasing in its base, so burn is too.
        for mask in 0..=255u8 {
            let mut previous = 0u8;
            for value in 0..=255u8 {
                let current = burn(value, mask);
                assert!(
                    current >= previous,
                    "burn not monotone at value={value} mask={mask}"
                );
                previous = current;
            }
        }
    }

    #[test]
    fn test_burn_blend_applies_kernel_per_pixel() {
        let image = GrayImage::from_raw(2, 1, vec![200, 100]).unwrap();
        let mask = GrayImage::from_raw(2, 1, vec![50, 0]).unwrap();
        let out = burn_blend(&image, &mask).unwrap();
        assert_eq!(out.as_raw(), &vec![0, 0]);
    }

    #[test]
    fn test_burn_blend_rejects_mismatched_dimensions() {
        let image = GrayImage::new(4, 4);
        let mask = GrayImage::new(5, 4);
        let err = burn_blend(&image, &mask).unwrap_err();
        assert!(matches!(err, BlendError::DimensionMismatch { .. }));
    }
}
