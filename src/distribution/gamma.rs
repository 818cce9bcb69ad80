//! Gamma distribution.

use super::Distribution;
use crate::error::{ContrastarError, Result};
use serde::{Deserialize, Serialize};

/// Gamma distribution with shape `k` and scale `theta`.
///
/// # Examples
///
/// ```
/// use contrastar::distribution::{Distribution, Gamma};
///
/// let g = Gamma::new(2.0, 3.0).expect("valid parameters");
/// assert_eq!(g.mean(), 6.0);
/// assert_eq!(g.variance(), 18.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gamma {
    k: f32,
    theta: f32,
}

impl Gamma {
    /// Creates a gamma distribution with the given shape and scale.
    ///
    /// # Errors
    ///
    /// Returns error if `k` or `theta` is not strictly positive.
    pub fn new(k: f32, theta: f32) -> Result<Self> {
        if !k.is_finite() || k <= 0.0 {
            return Err(ContrastarError::invalid_parameter("k", k, "> 0"));
        }
        if !theta.is_finite() || theta <= 0.0 {
            return Err(ContrastarError::invalid_parameter("theta", theta, "> 0"));
        }
        Ok(Self { k, theta })
    }

    /// Shape parameter.
    #[must_use]
    pub fn k(&self) -> f32 {
        self.k
    }

    /// Scale parameter.
    #[must_use]
    pub fn theta(&self) -> f32 {
        self.theta
    }
}

impl Distribution for Gamma {
    fn mean(&self) -> f32 {
        self.k * self.theta
    }

    fn variance(&self) -> f32 {
        self.k * self.theta * self.theta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moments() {
        let g = Gamma::new(1.0, 2.0).unwrap();
        assert_eq!(g.mean(), 2.0);
        assert_eq!(g.variance(), 4.0);
        assert_eq!(g.std_dev(), 2.0);
    }

    #[test]
    fn test_shape_scale_accessors() {
        let g = Gamma::new(7.5, 0.25).unwrap();
        assert_eq!(g.k(), 7.5);
        assert_eq!(g.theta(), 0.25);
    }

    #[test]
    fn test_rejects_non_positive_parameters() {
        assert!(Gamma::new(0.0, 1.0).is_err());
        assert!(Gamma::new(1.0, 0.0).is_err());
        assert!(Gamma::new(-1.0, 1.0).is_err());
        assert!(Gamma::new(1.0, -1.0).is_err());
    }
}
