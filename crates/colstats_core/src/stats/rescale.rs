//! Affine rescaling of matrix values towards a target mean and standard
//! deviation.
//!
//! Two variants exist:
//!
//! - [`modify_mean_stddev`] applies `x * new_stddev + new_mean` to every
//!   element. It does not look at the data, so it only lands on the target
//!   statistics when the input is already standardised (mean 0, std 1), for
//!   instance a fresh normal sample.
//! - [`standardize_columns`] first z-scores each column with its own sample
//!   mean and standard deviation, then applies the same affine map, so any
//!   input ends up with the target column statistics.

use tracing::{debug, trace};

use super::{column_mean_std, rows, rows_mut};
use crate::types::{MatrixShape, Result, StatsError};

/// Rescales every element of `mtx` in place: `x ← x * new_stddev + new_mean`.
///
/// The same scalars apply to every column. With `new_stddev = 0` every
/// element becomes `new_mean`.
///
/// # Errors
///
/// Returns `StatsError::BufferTooSmall` if `mtx` is shorter than the shape.
///
/// # Examples
///
/// ```rust
/// use colstats_core::stats::modify_mean_stddev;
/// use colstats_core::MatrixShape;
///
/// let mut mtx = [0.0; 4];
/// modify_mean_stddev(&mut mtx, 5.0, 2.0, MatrixShape::new(2, 2).unwrap()).unwrap();
/// assert_eq!(mtx, [5.0; 4]);
/// ```
pub fn modify_mean_stddev(
    mtx: &mut [f64],
    new_mean: f64,
    new_stddev: f64,
    shape: MatrixShape,
) -> Result<()> {
    shape.check_matrix("mtx", mtx.len())?;
    trace!(
        rows = shape.rows(),
        cols = shape.cols(),
        new_mean,
        new_stddev,
        "affine rescale"
    );

    for value in mtx[..shape.len()].iter_mut() {
        *value = *value * new_stddev + new_mean;
    }
    Ok(())
}

/// Maps each column of `mtx` in place to sample mean `new_mean` and sample
/// standard deviation `new_stddev`.
///
/// Columns with no spread are set to `new_mean`. A column has no spread when
/// every value equals the value in its first row; this is decided from the
/// data, since the computed standard deviation of a constant column such as
/// `0.1` can round to a tiny non-zero value.
///
/// # Errors
///
/// Returns `StatsError::InvalidDimension` for fewer than two rows, where the
/// sample standard deviation is undefined, and `StatsError::BufferTooSmall`
/// if `mtx` is shorter than the shape.
///
/// # Examples
///
/// ```rust
/// use colstats_core::stats::{column_mean_std, standardize_columns};
/// use colstats_core::MatrixShape;
///
/// let shape = MatrixShape::new(3, 2).unwrap();
/// let mut mtx = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// standardize_columns(&mut mtx, 10.0, 0.5, shape).unwrap();
///
/// let summary = column_mean_std(&mtx, shape).unwrap();
/// assert!((summary.mean[0] - 10.0).abs() < 1e-12);
/// assert!((summary.std[1] - 0.5).abs() < 1e-12);
/// ```
pub fn standardize_columns(
    mtx: &mut [f64],
    new_mean: f64,
    new_stddev: f64,
    shape: MatrixShape,
) -> Result<()> {
    if shape.rows() < 2 {
        return Err(StatsError::InvalidDimension {
            name: "dim_i",
            value: shape.rows(),
        });
    }
    let summary = column_mean_std(mtx, shape)?;
    debug!(
        rows = shape.rows(),
        cols = shape.cols(),
        new_mean,
        new_stddev,
        "standardising columns"
    );

    let first = mtx[..shape.cols()].to_vec();
    let mut constant = vec![true; shape.cols()];
    for row in rows(mtx, shape) {
        for ((flag, &value), &head) in constant.iter_mut().zip(row).zip(&first) {
            *flag &= value == head;
        }
    }

    for row in rows_mut(mtx, shape) {
        let columns = summary.mean.iter().zip(&summary.std).zip(&constant);
        for (value, ((&m, &s), &flat)) in row.iter_mut().zip(columns) {
            *value = if !flat && s > 0.0 {
                (*value - m) / s * new_stddev + new_mean
            } else {
                new_mean
            };
        }
    }
    Ok(())
}
