//! Row-major matrix shape and buffer validation.
//!
//! A matrix is a flat `f64` slice plus a [`MatrixShape`]. Element
//! `(row, col)` lives at `row * cols + col`. All operations validate the
//! slices they receive against the shape before touching them.

use super::error::{Result, StatsError};

/// Dimensions of a dense row-major matrix (`dim_i` rows by `dim_j` columns).
///
/// Both dimensions are non-zero by construction.
///
/// # Examples
///
/// ```rust
/// use colstats_core::MatrixShape;
///
/// let shape = MatrixShape::new(3, 4).unwrap();
/// assert_eq!(shape.len(), 12);
/// assert_eq!(shape.offset(1, 2), 6);
///
/// assert!(MatrixShape::new(0, 4).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MatrixShape {
    rows: usize,
    cols: usize,
}

impl MatrixShape {
    /// Creates a shape of `rows` by `cols`.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::InvalidDimension` if either dimension is zero, or
    /// if `rows * cols` does not fit in `usize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 {
            return Err(StatsError::InvalidDimension {
                name: "dim_i",
                value: rows,
            });
        }
        if cols == 0 {
            return Err(StatsError::InvalidDimension {
                name: "dim_j",
                value: cols,
            });
        }
        if rows.checked_mul(cols).is_none() {
            return Err(StatsError::InvalidDimension {
                name: "dim_j",
                value: cols,
            });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows (`dim_i`).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`dim_j`).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of elements, `rows * cols`. Never overflows: [`MatrixShape::new`]
    /// rejects shapes whose element count does not fit in `usize`.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Always `false`; kept for symmetry with [`MatrixShape::len`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Linear offset of `(row, col)` in a row-major buffer.
    #[inline]
    pub fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Checks that `buffer` can hold a matrix of this shape.
    ///
    /// Longer buffers are accepted; only the leading `len()` elements are used.
    pub fn check_matrix(&self, buffer: &'static str, actual: usize) -> Result<()> {
        check_len(buffer, self.len(), actual)
    }

    /// Checks that `buffer` can hold one value per column.
    pub fn check_vector(&self, buffer: &'static str, actual: usize) -> Result<()> {
        check_len(buffer, self.cols, actual)
    }
}

fn check_len(buffer: &'static str, required: usize, actual: usize) -> Result<()> {
    if actual < required {
        return Err(StatsError::BufferTooSmall {
            buffer,
            required,
            actual,
        });
    }
    Ok(())
}
