//! Per-column arithmetic mean.

use tracing::trace;

use super::rows;
use crate::types::{MatrixShape, Result};

/// Computes the mean of each column of `a` into `mean`.
///
/// `mean[c] = (1 / dim_i) * Σ_r a[r][c]`. Only the first `dim_j` entries of
/// `mean` are written.
///
/// # Errors
///
/// Returns `StatsError::BufferTooSmall` if `a` holds fewer than
/// `dim_i * dim_j` values or `mean` fewer than `dim_j`. Nothing is written
/// on error.
///
/// # Examples
///
/// ```rust
/// use colstats_core::stats::column_mean_into;
/// use colstats_core::MatrixShape;
///
/// let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let mut mean = [0.0; 2];
/// column_mean_into(&a, MatrixShape::new(3, 2).unwrap(), &mut mean).unwrap();
/// assert_eq!(mean, [3.0, 4.0]);
/// ```
pub fn column_mean_into(a: &[f64], shape: MatrixShape, mean: &mut [f64]) -> Result<()> {
    shape.check_matrix("a", a.len())?;
    shape.check_vector("mean", mean.len())?;
    trace!(rows = shape.rows(), cols = shape.cols(), "column mean");

    let mean = &mut mean[..shape.cols()];
    mean.fill(0.0);

    for row in rows(a, shape) {
        for (acc, &value) in mean.iter_mut().zip(row) {
            *acc += value;
        }
    }

    let n = shape.rows() as f64;
    for acc in mean.iter_mut() {
        *acc /= n;
    }
    Ok(())
}

/// Computes the mean of each column of `a`, returning a new vector of
/// length `dim_j`.
///
/// # Errors
///
/// Returns `StatsError::BufferTooSmall` if `a` is shorter than the shape.
pub fn column_mean(a: &[f64], shape: MatrixShape) -> Result<Vec<f64>> {
    shape.check_matrix("a", a.len())?;
    let mut mean = vec![0.0; shape.cols()];
    column_mean_into(a, shape, &mut mean)?;
    Ok(mean)
}
