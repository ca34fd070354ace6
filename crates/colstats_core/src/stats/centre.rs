//! Column centering: subtracting the per-column mean from every element.

use tracing::trace;

use super::{rows, rows_mut};
use crate::types::{MatrixShape, Result};

/// Writes `b[r][c] = a[r][c] - mean[c]` for every element.
///
/// `a` and `mean` are left unmodified. For in-place centering use
/// [`remove_mean_in_place`].
///
/// # Errors
///
/// Returns `StatsError::BufferTooSmall` if `a`, `b` or `mean` is shorter than
/// the shape requires. Nothing is written on error.
///
/// # Examples
///
/// ```rust
/// use colstats_core::stats::remove_mean_into;
/// use colstats_core::MatrixShape;
///
/// let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let mut b = [0.0; 6];
/// remove_mean_into(&a, &[3.0, 4.0], MatrixShape::new(3, 2).unwrap(), &mut b).unwrap();
/// assert_eq!(b, [-2.0, -2.0, 0.0, 0.0, 2.0, 2.0]);
/// ```
pub fn remove_mean_into(a: &[f64], mean: &[f64], shape: MatrixShape, b: &mut [f64]) -> Result<()> {
    shape.check_matrix("a", a.len())?;
    shape.check_vector("mean", mean.len())?;
    shape.check_matrix("b", b.len())?;
    trace!(rows = shape.rows(), cols = shape.cols(), "remove column mean");

    for (src, dst) in rows(a, shape).zip(rows_mut(b, shape)) {
        for ((out, &value), &m) in dst.iter_mut().zip(src).zip(mean) {
            *out = value - m;
        }
    }
    Ok(())
}

/// Returns a new matrix with each column's mean subtracted.
///
/// # Errors
///
/// Returns `StatsError::BufferTooSmall` if `a` or `mean` is too short.
pub fn remove_mean(a: &[f64], mean: &[f64], shape: MatrixShape) -> Result<Vec<f64>> {
    shape.check_matrix("a", a.len())?;
    shape.check_vector("mean", mean.len())?;
    let mut b = vec![0.0; shape.len()];
    remove_mean_into(a, mean, shape, &mut b)?;
    Ok(b)
}

/// Subtracts each column's mean from `mtx` in place.
///
/// Each output element depends only on the matching input element, so the
/// in-place result is identical to [`remove_mean_into`].
///
/// # Errors
///
/// Returns `StatsError::BufferTooSmall` if `mtx` or `mean` is too short.
pub fn remove_mean_in_place(mtx: &mut [f64], mean: &[f64], shape: MatrixShape) -> Result<()> {
    shift_columns(mtx, mean, shape, -1.0)
}

/// Adds each column's mean back to `mtx` in place, undoing
/// [`remove_mean_in_place`].
///
/// # Errors
///
/// Returns `StatsError::BufferTooSmall` if `mtx` or `mean` is too short.
pub fn restore_mean_in_place(mtx: &mut [f64], mean: &[f64], shape: MatrixShape) -> Result<()> {
    shift_columns(mtx, mean, shape, 1.0)
}

fn shift_columns(mtx: &mut [f64], mean: &[f64], shape: MatrixShape, sign: f64) -> Result<()> {
    shape.check_matrix("mtx", mtx.len())?;
    shape.check_vector("mean", mean.len())?;
    trace!(rows = shape.rows(), cols = shape.cols(), sign, "shift columns");

    for row in rows_mut(mtx, shape) {
        for (value, &m) in row.iter_mut().zip(mean) {
            *value += sign * m;
        }
    }
    Ok(())
}
