//! Parametric probability distribution models.
//!
//! Each family exposes its moments through the [`Distribution`] trait; the
//! continuous families with a closed-form cumulative distribution function
//! additionally implement [`ContinuousCdf`]. Constructors validate their
//! parameters and return a typed error for invalid input.
//!
//! The hypothesis testing engine in [`crate::hypothesis`] consumes a
//! population model only through these two traits.
//!
//! # Examples
//!
//! ```
//! use contrastar::distribution::{ContinuousCdf, Distribution, Normal};
//!
//! let std_normal = Normal::new(0.0, 1.0).expect("sigma > 0");
//! assert_eq!(std_normal.mean(), 0.0);
//! assert_eq!(std_normal.variance(), 1.0);
//! assert!((std_normal.cdf(0.0) - 0.5).abs() < 1e-6);
//! ```

mod binomial;
mod exponential;
mod gamma;
mod normal;
mod poisson;

pub use binomial::Binomial;
pub use exponential::Exponential;
pub use gamma::Gamma;
pub use normal::Normal;
pub use poisson::Poisson;

/// Moments of a parametric distribution.
pub trait Distribution {
    /// Expected value.
    fn mean(&self) -> f32;

    /// Variance.
    fn variance(&self) -> f32;

    /// Standard deviation.
    fn std_dev(&self) -> f32 {
        self.variance().sqrt()
    }
}

/// Cumulative distribution function of a continuous distribution.
pub trait ContinuousCdf {
    /// Probability that a draw is at most `x`.
    fn cdf(&self, x: f32) -> f32;
}
