//! Public API surface: the [`SketchRenderer`] builder and the unified
//! [`SketchError`] type.

mod builder;
mod error;

pub use builder::SketchRenderer;
pub use error::SketchError;
