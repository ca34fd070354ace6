//! # colstats_core: Column Statistics over Row-Major Matrices
//!
//! ## Layer 1 (Foundation) Role
//!
//! colstats_core is the bottom layer of the workspace, providing:
//! - The matrix layout convention and shape validation (`types::shape`)
//! - Error types: `StatsError` (`types::error`)
//! - Column reductions: mean and sample standard deviation (`stats`)
//! - Column centering and affine rescaling (`stats`)
//! - Text display of matrices (`print`)
//!
//! ## Matrix Convention
//!
//! Matrices are flat `f64` buffers in row-major order: the elements of a row
//! are contiguous, and element `(row, col)` lives at `row * cols + col`.
//! There is no owning matrix type; every operation takes a slice plus a
//! [`MatrixShape`].
//!
//! ```text
//! 3x4 matrix        buffer
//! 1 2 3 4
//! 5 6 7 8     ->    [1 2 3 4 5 6 7 8 9 0 1 2]
//! 9 0 1 2
//! ```
//!
//! ## Usage Examples
//!
//! ```rust
//! use colstats_core::stats::{column_mean, column_std, remove_mean};
//! use colstats_core::MatrixShape;
//!
//! let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let shape = MatrixShape::new(3, 2).unwrap();
//!
//! let mean = column_mean(&a, shape).unwrap();
//! assert_eq!(mean, vec![3.0, 4.0]);
//!
//! let std = column_std(&a, &mean, shape).unwrap();
//! assert_eq!(std, vec![2.0, 2.0]);
//!
//! let centred = remove_mean(&a, &mean, shape).unwrap();
//! assert_eq!(centred, vec![-2.0, -2.0, 0.0, 0.0, 2.0, 2.0]);
//! ```
//!
//! ## Numerical Edge Cases
//!
//! Shape problems are reported as [`StatsError`]. Degenerate numerics are
//! not: the sample standard deviation of a single row is `NaN`, and the
//! result propagates to the caller unchanged.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for [`PrintConfig`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod print;
pub mod stats;
pub mod types;

pub use print::{format_matrix, show_matrix, write_matrix, PrintConfig};
pub use types::{MatrixShape, Result, StatsError};
