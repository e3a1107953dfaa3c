//! File-level rendering service: decode, run the sketch pipeline, encode.

use std::path::Path;

use image::DynamicImage;
use sketch_core::SketchRenderer;

use crate::error::AppError;
use crate::models::SketchConfig;

/// Summary of a completed render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderReport {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Size of the encoded output file in bytes.
    pub bytes: u64,
}

/// Render a photograph file into a pencil-sketch file.
///
/// Decodes `input`, runs the sketch pipeline with the given configuration
/// (loading and grayscale-converting the canvas texture when one is
/// configured), and writes the result to `output`. The output format is
/// inferred from the file extension.
pub fn render_file(
    input: &Path,
    output: &Path,
    config: &SketchConfig,
) -> Result<RenderReport, AppError> {
    let photo = image::open(input)?;
    tracing::info!(
        input = %input.display(),
        width = photo.width(),
        height = photo.height(),
        "decoded photograph"
    );

    let mut renderer = SketchRenderer::new()
        .kernel_size(config.kernel_size)
        .sigma(config.sigma);

    if let Some(canvas_path) = &config.canvas {
        let canvas = load_canvas(canvas_path)?;
        renderer = renderer.canvas(canvas);
    }

    let sketch = renderer.render(&photo)?;
    let (width, height) = (sketch.width(), sketch.height());

    sketch.into_gray().save(output)?;
    let bytes = std::fs::metadata(output)?.len();
    tracing::info!(output = %output.display(), bytes, "wrote sketch");

    Ok(RenderReport {
        width,
        height,
        bytes,
    })
}

/// Load a canvas texture and convert it to single-channel form.
fn load_canvas(path: &Path) -> Result<image::GrayImage, AppError> {
    let texture: DynamicImage = image::open(path)?;
    Ok(texture.to_luma8())
}
