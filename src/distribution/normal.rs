//! Normal (Gaussian) distribution.

use super::{ContinuousCdf, Distribution};
use crate::error::{ContrastarError, Result};
use crate::math::erf;
use serde::{Deserialize, Serialize};
use std::f32::consts::SQRT_2;

/// Normal distribution with location `mu` and scale `sigma`.
///
/// # Examples
///
/// ```
/// use contrastar::distribution::{ContinuousCdf, Distribution, Normal};
///
/// let norm = Normal::new(0.0, 1.0).expect("sigma > 0");
/// assert!((norm.cdf(0.2) - 0.579_259).abs() < 1e-5);
/// assert_eq!(norm.std_dev(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normal {
    mu: f32,
    sigma: f32,
}

impl Normal {
    /// Creates a normal distribution with the given location and scale.
    ///
    /// # Errors
    ///
    /// Returns error if `sigma` is not strictly positive or either
    /// parameter is not finite.
    pub fn new(mu: f32, sigma: f32) -> Result<Self> {
        if !mu.is_finite() {
            return Err(ContrastarError::invalid_parameter("mu", mu, "finite"));
        }
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(ContrastarError::invalid_parameter(
                "sigma",
                sigma,
                "> 0 and finite",
            ));
        }
        Ok(Self { mu, sigma })
    }

    /// Standard normal distribution N(0, 1).
    #[must_use]
    pub fn standard() -> Self {
        Self {
            mu: 0.0,
            sigma: 1.0,
        }
    }

    /// Location parameter.
    #[must_use]
    pub fn mu(&self) -> f32 {
        self.mu
    }

    /// Scale parameter.
    #[must_use]
    pub fn sigma(&self) -> f32 {
        self.sigma
    }

    /// Median (equals the mean by symmetry).
    #[must_use]
    pub fn median(&self) -> f32 {
        self.mu
    }
}

impl Distribution for Normal {
    fn mean(&self) -> f32 {
        self.mu
    }

    fn variance(&self) -> f32 {
        self.sigma * self.sigma
    }

    fn std_dev(&self) -> f32 {
        self.sigma
    }
}

impl ContinuousCdf for Normal {
    fn cdf(&self, x: f32) -> f32 {
        0.5 * (1.0 + erf((x - self.mu) / (SQRT_2 * self.sigma)))
    }
}
