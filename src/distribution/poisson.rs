//! Poisson distribution.

use super::Distribution;
use crate::error::{ContrastarError, Result};
use serde::{Deserialize, Serialize};

/// Poisson distribution: event counts per interval at average rate `lambda`.
///
/// # Examples
///
/// ```
/// use contrastar::distribution::{Distribution, Poisson};
///
/// let pois = Poisson::new(4.0).expect("lambda > 0");
/// assert_eq!(pois.mean(), 4.0);
/// assert_eq!(pois.variance(), 4.0);
/// assert_eq!(pois.std_dev(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Poisson {
    lambda: f32,
}

impl Poisson {
    /// Creates a Poisson distribution with the given rate.
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

impl Distribution for Poisson {
    fn mean(&self) -> f32 {
        self.lambda
    }

    fn variance(&self) -> f32 {
        self.lambda
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_equals_variance() {
        let pois = Poisson::new(2.5).unwrap();
        assert_eq!(pois.mean(), 2.5);
        assert_eq!(pois.variance(), 2.5);
        assert!((pois.std_dev() - 2.5_f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_non_positive_lambda() {
        assert!(Poisson::new(0.0).is_err());
        assert!(Poisson::new(-1.0).is_err());
        assert!(Poisson::new(f32::NAN).is_err());
    }
}
