//! Canvas compositing via scaled multiplication.

use image::GrayImage;

use super::error::BlendError;
use super::{ensure_matching, gray_from_raw, zip_pixels};

/// Blend a finished sketch onto a background texture:
/// `out = floor(sketch * canvas / 256)`, clamped to 255.
///
/// The /256 scale keeps the product inside the 8-bit range for all valid
/// inputs (255 * 255 / 256 = 254), so the clamp never fires in practice.
///
/// # Errors
///
/// Returns [`BlendError::DimensionMismatch`] if the operands differ in
/// width or height.
pub fn canvas_composite(sketch: &GrayImage, canvas: &GrayImage) -> Result<GrayImage, BlendError> {
    ensure_matching(sketch, canvas)?;
    let out = zip_pixels(sketch.as_raw(), canvas.as_raw(), multiply);
    Ok(gray_from_raw(sketch.width(), sketch.height(), out))
}

/// Scalar multiply kernel, applied to every pixel by the bulk pass.
#[inline]
fn multiply(sketch: u8, canvas: u8) -> u8 {
    ((sketch as u32 * canvas as u32) >> 8).min(255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiply_black_canvas_blots_out() {
        assert_eq!(multiply(200, 0), 0);
        assert_eq!(multiply(255, 0), 0);
    }

    #[test]
    fn test_multiply_white_canvas_nearly_preserves() {
        // floor(v * 255 / 256) loses at most one level.
        assert_eq!(multiply(200, 255), 199);
        assert_eq!(multiply(255, 255), 254);
        assert_eq!(multiply(0, 255), 0);
    }

    #[test]
    fn test_multiply_stays_in_range_everywhere() {
        for sketch in 0..=255u32 {
            for canvas in 0..=255u32 {
                let expected = (sketch * canvas / 256).min(255) as u8;
                assert_eq!(multiply(sketch as u8, canvas as u8), expected);
            }
        }
    }

    #[test]
    fn test_canvas_composite_applies_kernel_per_pixel() {
        let sketch = GrayImage::from_raw(2, 1, vec![128, 255]).unwrap();
        let canvas = GrayImage::from_raw(2, 1, vec![128, 64]).unwrap();
        let out = canvas_composite(&sketch, &canvas).unwrap();
        // 128*128/256 = 64, 255*64/256 = 63
        assert_eq!(out.as_raw(), &vec![64, 63]);
    }

    #[test]
    fn test_canvas_composite_rejects_mismatched_dimensions() {
        let sketch = GrayImage::new(3, 3);
        let canvas = GrayImage::new(3, 4);
        let err = canvas_composite(&sketch, &canvas).unwrap_err();
        assert!(matches!(err, BlendError::DimensionMismatch { .. }));
    }
}
