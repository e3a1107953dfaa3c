//! Pipeline options and configuration.
//!
//! This module provides the [`SketchOptions`] struct for configuring the
//! blur stage of the sketch pipeline.

/// Configuration options for the sketch pipeline.
///
/// Both parameters feed the Gaussian blur applied to the negated grayscale
/// image. A larger kernel means more smoothing and softer pencil strokes.
///
/// # Defaults
///
/// - Kernel size: 21 (medium stroke softness)
/// - Sigma: 0.0, meaning "derive the spread from the kernel size"
///
/// # Example
///
/// ```
/// use sketch_core::SketchOptions;
///
/// // Default options
/// let options = SketchOptions::new();
///
/// // Customize with builder pattern
/// let options = SketchOptions::new().kernel_size(31).sigma(4.0);
/// ```
#[derive(Debug, Clone)]
pub struct SketchOptions {
    /// Spatial extent of the smoothing kernel in pixels.
    ///
    /// Larger values increase blur and pencil-stroke softness. Values
    /// below 3 are treated as 3 by the blur stage.
    pub kernel_size: u32,

    /// Gaussian spread.
    ///
    /// Zero (or negative) means "derive from the kernel size".
    pub sigma: f32,
}

impl Default for SketchOptions {
    fn default() -> Self {
        Self {
            kernel_size: 21,
            sigma: 0.0,
        }
    }
}

impl SketchOptions {
    /// Create new pipeline options with default values.
    ///
    /// This is equivalent to `SketchOptions::default()` but more
    /// discoverable.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the smoothing kernel size.
    ///
    /// # Arguments
    /// * `kernel_size` - Spatial extent of the kernel in pixels
    #[inline]
    pub fn kernel_size(mut self, kernel_size: u32) -> Self {
        self.kernel_size = kernel_size;
        self
    }

    /// Set the Gaussian spread.
    ///
    /// # Arguments
    /// * `sigma` - Spread in pixels; zero derives it from the kernel size
    #[inline]
    pub fn sigma(mut self, sigma: f32) -> Self {
        self.sigma = sigma;
        self
    }
}
