//! SketchRenderer builder -- the primary ergonomic entry point for the
//! crate.
//!
//! [`SketchRenderer`] wraps the sketch pipeline with fluent configuration
//! and optional canvas compositing.

use image::{DynamicImage, GrayImage};

use crate::api::SketchError;
use crate::blend::canvas_composite;
use crate::output::SketchImage;
use crate::pipeline::{SketchOptions, Sketcher};

/// High-level pencil-sketch builder.
///
/// `SketchRenderer` is the recommended entry point for the crate. It wraps
/// the complete pipeline (grayscale, negate, blur, dodge, optional canvas
/// composite) behind a fluent builder API with sensible defaults.
///
/// # Design
///
/// - Constructor takes no required state (defaults render a usable sketch)
/// - Configuration methods consume and return `self` (standard builder pattern)
/// - [`render()`](Self::render) takes `&self` so the builder is **reusable**
///   across multiple photographs
/// - The canvas, when set, must match the photograph's dimensions; the
///   mismatch surfaces as a [`SketchError`] at render time
///
/// # Example
///
/// ```
/// use image::{DynamicImage, Rgb, RgbImage};
/// use sketch_core::SketchRenderer;
///
/// let photo = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([90, 120, 180])));
///
/// let renderer = SketchRenderer::new().kernel_size(5);
/// let sketch = renderer.render(&photo).unwrap();
///
/// assert_eq!(sketch.width(), 4);
/// assert_eq!(sketch.height(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SketchRenderer {
    options: SketchOptions,
    canvas: Option<GrayImage>,
}

impl SketchRenderer {
    /// Create a new renderer with default options and no canvas.
    pub fn new() -> Self {
        Self {
            options: SketchOptions::default(),
            canvas: None,
        }
    }

    /// Set the smoothing kernel size (pencil-stroke softness).
    #[inline]
    pub fn kernel_size(mut self, kernel_size: u32) -> Self {
        self.options = self.options.kernel_size(kernel_size);
        self
    }

    /// Set the Gaussian spread; zero derives it from the kernel size.
    #[inline]
    pub fn sigma(mut self, sigma: f32) -> Self {
        self.options = self.options.sigma(sigma);
        self
    }

    /// Set a background texture to composite the finished sketch onto.
    ///
    /// The canvas must share the photograph's dimensions.
    #[inline]
    pub fn canvas(mut self, canvas: GrayImage) -> Self {
        self.canvas = Some(canvas);
        self
    }

    /// Render a color photograph into a pencil sketch.
    ///
    /// Runs the full pipeline:
    /// 1. Grayscale conversion
    /// 2. Negate
    /// 3. Gaussian blur of the negative
    /// 4. Dodge blend of grayscale with the blurred mask
    /// 5. Canvas composite, if a canvas was configured
    ///
    /// The builder is reusable -- `render()` takes `&self`.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::InvalidFormat`] for non-8-bit inputs and
    /// [`SketchError::Blend`] when a configured canvas does not match the
    /// photograph's dimensions.
    pub fn render(&self, color: &DynamicImage) -> Result<SketchImage, SketchError> {
        let sketcher = Sketcher::new(self.options.clone());
        let staged = sketcher.process(color)?;

        let sketch = match &self.canvas {
            Some(canvas) => canvas_composite(&staged.sketch, canvas)?,
            None => staged.sketch,
        };

        Ok(SketchImage::new(sketch))
    }
}
