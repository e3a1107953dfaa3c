//! sketch-core: pencil-sketch rendering for color photographs
//!
//! This library converts a color photograph into a stylized pencil-sketch
//! rendering through a short deterministic image-transform pipeline,
//! optionally compositing the result onto a textured background.
//!
//! # Quick Start
//!
//! The [`SketchRenderer`] builder is the primary entry point:
//!
//! ```
//! use image::{DynamicImage, Rgb, RgbImage};
//! use sketch_core::SketchRenderer;
//!
//! let photo = DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, Rgb([120, 90, 60])));
//!
//! let renderer = SketchRenderer::new().kernel_size(5);
//! let sketch = renderer.render(&photo).unwrap();
//!
//! assert_eq!(sketch.width(), 8);
//! assert_eq!(sketch.height(), 8);
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! color photo                 (8-bit, decoded by the caller)
//!     |
//!     v
//! grayscale ------------+     (luminance conversion, image crate)
//!     |                 |
//!     v                 |
//! negative              |
//!     |                 |
//!     v                 |
//! blurred negative      |     (Gaussian smoothing)
//!     |                 |
//!     v                 v
//! dodge blend (mask = blurred negative, base = grayscale)
//!     |
//!     v
//! [canvas composite]          (only when a texture is configured)
//!     |
//!     v
//! pencil sketch               (single-channel, 8-bit)
//! ```
//!
//! # The Dodge Blend
//!
//! The tonal heart of the pipeline is the color-dodge blend: for every
//! pixel, `out = min(255, floor(base * 256 / (255 - mask)))`, with a
//! saturated mask (255) mapping straight to white instead of dividing by
//! zero. The blurred negative acts as the mask, so edges -- where the
//! negative differs most from the original -- survive as dark strokes
//! while flat regions wash out to paper white.
//!
//! Its dual, [`burn_blend`](blend::burn_blend), darkens via the same
//! formula applied to complemented inputs.
//!
//! # Performance
//!
//! Every operation is a whole-image bulk transform over the flat pixel
//! buffer; large images are processed in parallel via rayon. Pixels are
//! independent, so no ordering or synchronization exists inside a stage.

pub mod api;
pub mod blend;
pub mod output;
pub mod pipeline;


pub use api::{SketchError, SketchRenderer};
pub use blend::{burn_blend, canvas_composite, dodge_blend, negate, BlendError};
pub use output::SketchImage;
pub use pipeline::{SketchOptions, SketchResult, Sketcher};
