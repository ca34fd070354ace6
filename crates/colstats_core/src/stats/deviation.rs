//! Per-column sample standard deviation.
//!
//! Uses Bessel's correction (divisor `dim_i - 1`). A matrix with a single
//! row has no spread to estimate; its result is `NaN` (0 / 0), returned
//! as-is rather than reported as an error.

use tracing::{trace, warn};

use super::{column_mean, rows};
use crate::types::{MatrixShape, Result};

/// Column means and sample standard deviations of one matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnSummary {
    /// Per-column arithmetic mean, length `dim_j`.
    pub mean: Vec<f64>,
    /// Per-column sample standard deviation, length `dim_j`.
    pub std: Vec<f64>,
}

/// Computes the sample standard deviation of each column of `a` into `std`.
///
/// `std[c] = sqrt(Σ_r (a[r][c] - mean[c])² / (dim_i - 1))`
///
/// `mean` is trusted to hold the column means of `a`; it is not recomputed.
///
/// # Errors
///
/// Returns `StatsError::BufferTooSmall` if `a`, `mean` or `std` is shorter
/// than the shape requires. Nothing is written on error.
///
/// # Examples
///
/// ```rust
/// use colstats_core::stats::column_std_into;
/// use colstats_core::MatrixShape;
///
/// let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let mut std = [0.0; 2];
/// column_std_into(&a, &[3.0, 4.0], MatrixShape::new(3, 2).unwrap(), &mut std).unwrap();
/// assert_eq!(std, [2.0, 2.0]);
/// ```
pub fn column_std_into(
    a: &[f64],
    mean: &[f64],
    shape: MatrixShape,
    std: &mut [f64],
) -> Result<()> {
    shape.check_matrix("a", a.len())?;
    shape.check_vector("mean", mean.len())?;
    shape.check_vector("std", std.len())?;
    trace!(rows = shape.rows(), cols = shape.cols(), "column std");

    if shape.rows() < 2 {
        warn!(
            rows = shape.rows(),
            "sample standard deviation of a single row is undefined"
        );
    }

    let mean = &mean[..shape.cols()];
    let std = &mut std[..shape.cols()];
    std.fill(0.0);

    for row in rows(a, shape) {
        for ((acc, &value), &m) in std.iter_mut().zip(row).zip(mean) {
            let d = value - m;
            *acc += d * d;
        }
    }

    // dim_i - 1 is zero for a single row; 0 / 0 yields NaN.
    let divisor = (shape.rows() - 1) as f64;
    for acc in std.iter_mut() {
        *acc = (*acc / divisor).sqrt();
    }
    Ok(())
}

/// Computes the sample standard deviation of each column of `a`, returning a
/// new vector of length `dim_j`.
///
/// # Errors
///
/// Returns `StatsError::BufferTooSmall` if `a` or `mean` is too short.
pub fn column_std(a: &[f64], mean: &[f64], shape: MatrixShape) -> Result<Vec<f64>> {
    shape.check_matrix("a", a.len())?;
    shape.check_vector("mean", mean.len())?;
    let mut std = vec![0.0; shape.cols()];
    column_std_into(a, mean, shape, &mut std)?;
    Ok(std)
}

/// Computes column means and sample standard deviations in one call.
///
/// # Examples
///
/// ```rust
/// use colstats_core::stats::column_mean_std;
/// use colstats_core::MatrixShape;
///
/// let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let summary = column_mean_std(&a, MatrixShape::new(3, 2).unwrap()).unwrap();
/// assert_eq!(summary.mean, vec![3.0, 4.0]);
/// assert_eq!(summary.std, vec![2.0, 2.0]);
/// ```
pub fn column_mean_std(a: &[f64], shape: MatrixShape) -> Result<ColumnSummary> {
    let mean = column_mean(a, shape)?;
    let std = column_std(a, &mean, shape)?;
    Ok(ColumnSummary { mean, std })
}
