//! # colstats_random: Normal Sampling for Row-Major Matrices
//!
//! ## Layer 2 Role
//!
//! colstats_random builds on colstats_core and provides:
//! - A seeded pseudo-random generator wrapper (`rng`)
//! - Uniform-to-normal transforms and the matrix sampler (`sampler`)
//!
//! ## Generator Ownership
//!
//! There is no process-wide generator. Each [`GaussianSampler`] owns a
//! [`StatsRng`]; calls take `&mut self`, so sharing a sampler across threads
//! is an explicit decision of the caller.
//!
//! ## Usage Example
//!
//! ```rust
//! use colstats_core::stats::column_mean_std;
//! use colstats_core::MatrixShape;
//! use colstats_random::{GaussianSampler, SamplerConfig};
//!
//! let config = SamplerConfig::builder().seed(42).build();
//! let mut sampler = GaussianSampler::from_config(&config);
//!
//! let shape = MatrixShape::new(1000, 3).unwrap();
//! let mtx = sampler.sample_matrix(shape);
//!
//! let summary = column_mean_std(&mtx, shape).unwrap();
//! assert!(summary.mean.iter().all(|m| m.abs() < 0.2));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod rng;
pub mod sampler;

pub use rng::StatsRng;
pub use sampler::{
    box_muller_transform, single_draw_transform, GaussianSampler, NormalMethod,
    ParseMethodError, SamplerConfig, SamplerConfigBuilder,
};
