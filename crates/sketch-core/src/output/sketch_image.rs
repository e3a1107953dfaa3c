//! SketchImage: the finished single-channel sketch.
//!
//! [`SketchImage`] wraps the pipeline's final grayscale raster with
//! dimension accessors and an on-demand RGB expansion for callers that
//! need 3-channel output.

use image::GrayImage;

/// The canonical output of the sketch pipeline.
///
/// Stores one `u8` luminance value per pixel in row-major order. The
/// grayscale form is canonical; the RGB form is computed on demand by
/// replicating the luminance into each channel.
///
/// # Example
///
/// ```
/// use image::{GrayImage, Luma};
/// use sketch_core::SketchImage;
///
/// let gray = GrayImage::from_pixel(2, 2, Luma([200]));
/// let sketch = SketchImage::new(gray);
///
/// assert_eq!(sketch.width(), 2);
/// assert_eq!(sketch.height(), 2);
/// assert_eq!(sketch.to_rgb().len(), 2 * 2 * 3);
/// ```
#[derive(Debug, Clone)]
pub struct SketchImage {
    image: GrayImage,
}

impl SketchImage {
    /// Wrap a finished grayscale sketch.
    #[inline]
    pub fn new(image: GrayImage) -> Self {
        Self { image }
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Returns the luminance values as a flat slice, row-major.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Borrow the underlying grayscale image.
    #[inline]
    pub fn as_gray(&self) -> &GrayImage {
        &self.image
    }

    /// Consume the wrapper and return the underlying grayscale image.
    #[inline]
    pub fn into_gray(self) -> GrayImage {
        self.image
    }

    /// Expand to RGB bytes in `[R, G, B, R, G, B, ...]` layout.
    ///
    /// Each luminance value is replicated into all three channels. The
    /// returned buffer has length `width * height * 3`.
    pub fn to_rgb(&self) -> Vec<u8> {
        let raw = self.image.as_raw();
        let mut rgb = Vec::with_capacity(raw.len() * 3);
        for &v in raw {
            rgb.push(v);
            rgb.push(v);
            rgb.push(v);
        }
        rgb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stores_fields() {
        let gray = GrayImage::from_raw(3, 2, vec![0, 50, 100, 150, 200, 250]).unwrap();
        let sketch = SketchImage::new(gray);

        assert_eq!(sketch.width(), 3);
        assert_eq!(sketch.height(), 2);
        assert_eq!(sketch.as_raw(), &[0, 50, 100, 150, 200, 250]);
    }

    #[test]
    fn test_to_rgb_length_and_layout() {
        let gray = GrayImage::from_raw(2, 1, vec![10, 250]).unwrap();
        let sketch = SketchImage::new(gray);

        let rgb = sketch.to_rgb();
        assert_eq!(rgb, vec![10, 10, 10, 250, 250, 250]);
    }

    #[test]
    fn test_into_gray_round_trips() {
        let gray = GrayImage::from_raw(2, 2, vec![1, 2, 3, 4]).unwrap();
        let sketch = SketchImage::new(gray.clone());
        assert_eq!(sketch.into_gray().as_raw(), gray.as_raw());
    }
}
