//! Error types for blend operations.

use thiserror::Error;

/// Error raised by the two-operand blend operations.
///
/// A blend never partially processes its inputs: the dimensions are checked
/// before any pixel is touched, so an `Err` means no output was produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BlendError {
    /// The two operands differ in width or height.
    #[error("dimension mismatch: expected {expected_width}x{expected_height}, got {actual_width}x{actual_height}")]
    DimensionMismatch {
        /// Width of the base operand.
        expected_width: u32,
        /// Height of the base operand.
        expected_height: u32,
        /// Width of the mismatched operand.
        actual_width: u32,
        /// Height of the mismatched operand.
        actual_height: u32,
    },
}
