//! # Random Number Generation
//!
//! Seeded uniform generation for the normal sampler.
//!
//! ## Design
//!
//! - **Reproducibility**: every generator carries the seed it was built from;
//!   generators created from entropy draw and log a seed first, so any run
//!   can be replayed
//! - **Zero allocation**: batch operations fill caller-provided `&mut [f64]`
//! - **Explicit state**: no global generator; callers own their `StatsRng`
//!
//! ## Module Structure
//!
//! - `prng`: [`StatsRng`], a wrapper around `rand::rngs::StdRng`

mod prng;

pub use prng::StatsRng;

#[cfg(test)]
mod tests;
