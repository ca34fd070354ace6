//! Error types for matrix statistics operations.
//!
//! Only structural problems are errors. Degenerate numerics (a single-row
//! standard deviation, `ln(0)` in the sampler) are returned as `NaN` or
//! infinity without a signal.

use thiserror::Error;

/// Errors raised by column statistics, rescaling, and printing.
///
/// # Variants
///
/// - `InvalidDimension`: A row or column count is unusable (zero, or too few rows)
/// - `BufferTooSmall`: A matrix or vector slice is shorter than its shape requires
/// - `InvalidParameter`: A configuration value is out of range
/// - `Io`: The output stream rejected a write
///
/// # Examples
///
/// ```
/// use colstats_core::StatsError;
///
/// let err = StatsError::InvalidDimension { name: "dim_i", value: 0 };
/// assert_eq!(err.to_string(), "Invalid dimension dim_i = 0");
/// ```
#[derive(Error, Debug)]
pub enum StatsError {
    /// Row or column count is not usable for the requested operation.
    #[error("Invalid dimension {name} = {value}")]
    InvalidDimension {
        /// Which dimension was rejected (`dim_i` or `dim_j`).
        name: &'static str,
        /// The rejected value.
        value: usize,
    },

    /// A buffer is shorter than the shape requires.
    #[error("Buffer '{buffer}' too small: need {required} elements, got {actual}")]
    BufferTooSmall {
        /// Name of the offending buffer.
        buffer: &'static str,
        /// Minimum number of elements.
        required: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// Invalid configuration value.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },

    /// Output stream failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StatsError {
    /// Returns `true` for [`StatsError::InvalidDimension`].
    pub fn is_invalid_dimension(&self) -> bool {
        matches!(self, Self::InvalidDimension { .. })
    }
}

/// Result alias for colstats operations.
pub type Result<T> = std::result::Result<T, StatsError>;
