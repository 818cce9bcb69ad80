//! Binomial distribution.

use super::Distribution;
use crate::error::{ContrastarError, Result};
use serde::{Deserialize, Serialize};

/// Binomial distribution: number of successes in `n` independent trials,
/// each succeeding with probability `p`.
///
/// # Examples
///
/// ```
/// use contrastar::distribution::{Binomial, Distribution};
///
/// let bin = Binomial::new(20.0, 0.5).expect("valid parameters");
/// assert_eq!(bin.mean(), 10.0);
/// assert_eq!(bin.variance(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Binomial {
    n: f32,
    p: f32,
}

impl Binomial {
    /// Creates a binomial distribution with `n` trials and success
    /// probability `p`.
    ///
    /// # Errors
    ///
    /// Returns error if `n` is negative or not an integer value, or if `p`
    /// is outside [0, 1].
    pub fn new(n: f32, p: f32) -> Result<Self> {
        if !n.is_finite() || n < 0.0 || n.fract() != 0.0 {
            return Err(ContrastarError::invalid_parameter(
                "n",
                n,
                "a non-negative integer",
            ));
        }
        if !(0.0..=1.0).contains(&p) {
            return Err(ContrastarError::invalid_parameter("p", p, "in [0, 1]"));
        }
        Ok(Self { n, p })
    }

    /// Number of trials.
    #[must_use]
    pub fn n(&self) -> f32 {
        self.n
    }

    /// Success probability of each trial.
    #[must_use]
    pub fn p(&self) -> f32 {
        self.p
    }
}

impl Distribution for Binomial {
    fn mean(&self) -> f32 {
        self.n * self.p
    }

    fn variance(&self) -> f32 {
        self.mean() * (1.0 - self.p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moments() {
        let bin = Binomial::new(25.0, 0.25).unwrap();
        assert_eq!(bin.mean(), 6.25);
        assert!((bin.variance() - 4.6875).abs() < 1e-6);
        assert!((bin.std_dev() - 4.6875_f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_p() {
        let always = Binomial::new(10.0, 1.0).unwrap();
        assert_eq!(always.mean(), 10.0);
        assert_eq!(always.variance(), 0.0);
    }

    #[test]
    fn test_rejects_fractional_n() {
        assert!(Binomial::new(2.5, 0.5).is_err());
    }

    #[test]
    fn test_rejects_invalid_p() {
        assert!(Binomial::new(10.0, -0.1).is_err());
        assert!(Binomial::new(10.0, 1.1).is_err());
    }

    #[test]
    fn test_rejects_negative_n() {
        assert!(Binomial::new(-5.0, 0.5).is_err());
    }
}
