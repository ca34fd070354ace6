//! Column-wise statistics and transforms over row-major matrices.
//!
//! This module provides:
//! - `mean`: per-column arithmetic mean
//! - `deviation`: per-column sample standard deviation (Bessel-corrected)
//! - `centre`: subtracting (and restoring) column means
//! - `rescale`: affine rescaling towards a target mean and standard deviation
//!
//! Every reduction comes in two forms: an `_into` form that writes into a
//! caller-provided buffer without allocating, and a convenience form that
//! returns a fresh `Vec<f64>`.

mod centre;
mod deviation;
mod mean;
mod rescale;

pub use centre::{remove_mean, remove_mean_in_place, remove_mean_into, restore_mean_in_place};
pub use deviation::{column_mean_std, column_std, column_std_into, ColumnSummary};
pub use mean::{column_mean, column_mean_into};
pub use rescale::{modify_mean_stddev, standardize_columns};

use crate::types::MatrixShape;

/// Iterates over the first `shape.rows()` rows of a validated buffer.
#[inline]
pub(crate) fn rows(a: &[f64], shape: MatrixShape) -> impl Iterator<Item = &[f64]> {
    a[..shape.len()].chunks_exact(shape.cols())
}

/// Mutable counterpart of [`rows`].
#[inline]
pub(crate) fn rows_mut(a: &mut [f64], shape: MatrixShape) -> impl Iterator<Item = &mut [f64]> {
    a[..shape.len()].chunks_exact_mut(shape.cols())
}
