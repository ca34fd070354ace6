//! Core layout and error types.
//!
//! This module provides:
//! - `shape`: [`MatrixShape`], the row-major layout contract and buffer validation
//! - `error`: [`StatsError`], the structured error type shared by every operation

pub mod error;
pub mod shape;

pub use error::{Result, StatsError};
pub use shape::MatrixShape;
