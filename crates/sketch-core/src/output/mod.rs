//! Output wrapper for finished sketches.

mod sketch_image;

pub use sketch_image::SketchImage;
