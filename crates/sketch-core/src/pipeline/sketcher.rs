//! Stage orchestration for the sketch pipeline.
//!
//! [`Sketcher`] runs the fixed four-stage chain
//! grayscale -> negate -> blur -> dodge and returns a [`SketchResult`]
//! holding every intermediate. Canvas compositing is layered on top by
//! [`crate::api::SketchRenderer`].

use image::{ColorType, DynamicImage, GrayImage};

use crate::api::SketchError;
use crate::blend::{dodge_blend, negate};

use super::blur;
use super::SketchOptions;

/// Result of running the sketch pipeline.
///
/// Each field captures the output of one stage, so callers can inspect or
/// display every step of the chain. All images share the grayscale input's
/// dimensions.
#[derive(Debug, Clone)]
pub struct SketchResult {
    /// Stage 1: luminance conversion of the color input.
    pub grayscale: GrayImage,
    /// Stage 2: per-pixel complement of the grayscale image.
    pub negative: GrayImage,
    /// Stage 3: Gaussian-blurred negative (the dodge mask).
    pub blurred: GrayImage,
    /// Stage 4: dodge blend of the grayscale image with the blurred mask.
    pub sketch: GrayImage,
}

/// The pipeline orchestrator.
///
/// Stateless apart from its options: each [`process`](Self::process) call
/// is an independent, deterministic run of the fixed stage chain. Stages
/// execute in sequence, each consuming the previous stage's output; there
/// is no branching and no retry.
#[derive(Debug, Clone)]
pub struct Sketcher {
    options: SketchOptions,
}

impl Sketcher {
    /// Create a sketcher with the given pipeline options.
    #[inline]
    pub fn new(options: SketchOptions) -> Self {
        Self { options }
    }

    /// Run the pipeline over a color photograph.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::InvalidFormat`] if the input is not 8-bit
    /// per channel. Blend-stage dimension errors cannot occur here (every
    /// stage preserves dimensions) but propagate as
    /// [`SketchError::Blend`] if they ever did.
    pub fn process(&self, color: &DynamicImage) -> Result<SketchResult, SketchError> {
        ensure_eight_bit(color)?;

        let grayscale = color.to_luma8();
        tracing::debug!(
            width = grayscale.width(),
            height = grayscale.height(),
            "converted to grayscale"
        );

        let negative = negate(&grayscale);

        let blurred = blur::gaussian(&negative, self.options.kernel_size, self.options.sigma);
        tracing::debug!(
            kernel_size = self.options.kernel_size,
            sigma = self.options.sigma,
            "blurred negative"
        );

        let sketch = dodge_blend(&grayscale, &blurred)?;

        Ok(SketchResult {
            grayscale,
            negative,
            blurred,
            sketch,
        })
    }
}

/// All pipeline arithmetic assumes 8-bit channels; reject deeper or float
/// inputs before any stage runs.
fn ensure_eight_bit(color: &DynamicImage) -> Result<(), SketchError> {
    match color.color() {
        ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8 => Ok(()),
        other => Err(SketchError::InvalidFormat {
            color_type: format!("{other:?}"),
        }),
    }
}
