//! Sampler configuration.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Algorithm turning uniform draws into normal variates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum NormalMethod {
    /// Single uniform reused for radius and angle.
    ///
    /// Reproduces the legacy `randn`; slightly biased (see
    /// [`single_draw_transform`](crate::single_draw_transform)).
    SingleDraw,

    /// Box–Muller with two independent uniforms.
    #[default]
    BoxMuller,

    /// Ziggurat method via `rand_distr::StandardNormal`.
    Ziggurat,
}

impl NormalMethod {
    /// Canonical lowercase name, accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SingleDraw => "single-draw",
            Self::BoxMuller => "box-muller",
            Self::Ziggurat => "ziggurat",
        }
    }
}

impl fmt::Display for NormalMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown method name passed to `NormalMethod::from_str`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown normal method: {0}. Must be one of: single-draw, box-muller, ziggurat")]
pub struct ParseMethodError(pub String);

impl FromStr for NormalMethod {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single-draw" | "single" | "legacy" => Ok(Self::SingleDraw),
            "box-muller" | "boxmuller" => Ok(Self::BoxMuller),
            "ziggurat" => Ok(Self::Ziggurat),
            _ => Err(ParseMethodError(s.to_string())),
        }
    }
}

/// Configuration for a [`GaussianSampler`](crate::GaussianSampler).
///
/// Use [`SamplerConfig::builder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use colstats_random::{NormalMethod, SamplerConfig};
///
/// let config = SamplerConfig::builder()
///     .seed(7)
///     .method(NormalMethod::Ziggurat)
///     .build();
///
/// assert_eq!(config.seed(), Some(7));
/// assert_eq!(config.method(), NormalMethod::Ziggurat);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplerConfig {
    seed: Option<u64>,
    #[cfg_attr(feature = "serde", serde(default))]
    method: NormalMethod,
}

impl SamplerConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SamplerConfigBuilder {
        SamplerConfigBuilder::default()
    }

    /// Seed for reproducible sampling; `None` seeds from entropy.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Normal transform in use.
    #[inline]
    pub fn method(&self) -> NormalMethod {
        self.method
    }
}

/// Builder for [`SamplerConfig`].
#[derive(Clone, Debug, Default)]
pub struct SamplerConfigBuilder {
    seed: Option<u64>,
    method: NormalMethod,
}

impl SamplerConfigBuilder {
    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the normal transform.
    #[inline]
    pub fn method(mut self, method: NormalMethod) -> Self {
        self.method = method;
        self
    }

    /// Builds the configuration.
    #[inline]
    pub fn build(self) -> SamplerConfig {
        SamplerConfig {
            seed: self.seed,
            method: self.method,
        }
    }
}
