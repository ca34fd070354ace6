//! Normal sampling over a [`StatsRng`](crate::StatsRng).
//!
//! This module provides:
//! - `transform`: pure uniform-to-normal transforms
//! - `config`: [`NormalMethod`] and [`SamplerConfig`] with its builder
//! - `gaussian`: [`GaussianSampler`], scalar and matrix sampling

mod config;
mod gaussian;
mod transform;

pub use config::{NormalMethod, ParseMethodError, SamplerConfig, SamplerConfigBuilder};
pub use gaussian::GaussianSampler;
pub use transform::{box_muller_transform, single_draw_transform};
