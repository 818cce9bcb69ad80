//! Exponential distribution.

use super::{ContinuousCdf, Distribution};
use crate::error::{ContrastarError, Result};
use serde::{Deserialize, Serialize};

/// Exponential distribution with rate `lambda`.
///
/// # Examples
///
/// ```
/// use contrastar::distribution::{ContinuousCdf, Distribution, Exponential};
///
/// let exp = Exponential::new(0.5).expect("lambda > 0");
/// assert_eq!(exp.mean(), 2.0);
/// assert_eq!(exp.variance(), 4.0);
/// assert!((exp.cdf(2.0) - (1.0 - (-1.0_f32).exp())).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Exponential {
    lambda: f32,
}

impl Exponential {
    /// Creates an exponential distribution with the given rate.
    ///
    /// # Errors
    ///
    /// Returns error if `lambda` is not strictly positive.
    pub fn new(lambda: f32) -> Result<Self> {
        if !lambda.is_finite() || lambda <= 0.0 {
            return Err(ContrastarError::invalid_parameter(
                "lambda",
                lambda,
                "> 0",
            ));
        }
        Ok(Self { lambda })
    }

    /// Rate parameter.
    #[must_use]
    pub fn lambda(&self) -> f32 {
        self.lambda
    }
}

impl Distribution for Exponential {
    fn mean(&self) -> f32 {
        1.0 / self.lambda
    }

    fn variance(&self) -> f32 {
        1.0 / (self.lambda * self.lambda)
    }
}

impl ContinuousCdf for Exponential {
    fn cdf(&self, x: f32) -> f32 {
        1.0 - (-self.lambda * x).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moments() {
        let exp = Exponential::new(0.5).unwrap();
        assert_eq!(exp.mean(), 2.0);
        assert_eq!(exp.variance(), 4.0);
        assert_eq!(exp.std_dev(), 2.0);
    }

    #[test]
    fn test_cdf_at_zero() {
        let exp = Exponential::new(1.5).unwrap();
        assert_eq!(exp.cdf(0.0), 0.0);
    }

    #[test]
    fn test_cdf_at_mean() {
        // CDF at the mean is 1 - e^-1 for any rate
        for lambda in [0.25_f32, 1.0, 4.0] {
            let exp = Exponential::new(lambda).unwrap();
            let want = 1.0 - (-1.0_f32).exp();
            assert!((exp.cdf(exp.mean()) - want).abs() < 1e-6);
        }
    }

    #[test]
    fn test_rejects_non_positive_lambda() {
        assert!(Exponential::new(0.0).is_err());
        assert!(Exponential::new(-2.0).is_err());
        assert!(Exponential::new(f32::NAN).is_err());
    }
}
