use std::path::PathBuf;

use thiserror::Error;

use sketch_core::SketchError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Sketch error: {0}")]
    Sketch(#[from] SketchError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Config error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
