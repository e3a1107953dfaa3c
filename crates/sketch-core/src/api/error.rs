//! Unified error type for the sketch-core public API.
//!
//! [`SketchError`] wraps the error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use thiserror::Error;

use crate::blend::BlendError;

/// Unified error type for the sketch-core public API.
///
/// Any raised condition aborts the current pipeline invocation without
/// side effects; no stage mutates shared state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SketchError {
    /// A blend or composite operation failed (dimension mismatch).
    #[error("blend error: {0}")]
    Blend(#[from] BlendError),

    /// The input image is not 8-bit per channel.
    #[error("unsupported pixel format {color_type}: 8-bit channels required")]
    InvalidFormat {
        /// The rejected input's color type.
        color_type: String,
    },
}
