//! Descriptive statistics over numeric samples.
//!
//! Pure functions over `&[f32]` slices: central tendency (mean, median),
//! spread (sample variance, standard deviation, range), and quartiles using
//! the R-7 linear interpolation method (Hyndman & Fan 1996), the default in
//! R, `NumPy`, and Pandas.
//!
//! These are the sample-statistics primitives consumed by the hypothesis
//! testing procedures in [`crate::hypothesis`].
//!
//! # Examples
//!
//! ```
//! use contrastar::descriptive::{mean, median, sample_std_dev};
//!
//! let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! assert_eq!(mean(&data).expect("non-empty sample"), 5.0);
//! assert_eq!(median(&data).expect("non-empty sample"), 4.5);
//! assert!((sample_std_dev(&data).expect("sample of at least 2") - 2.138).abs() < 1e-3);
//! ```

use crate::error::{ContrastarError, Result};
use serde::{Deserialize, Serialize};

/// First, second, and third quartiles of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    /// 25th percentile
    pub q1: f32,
    /// 50th percentile (median)
    pub q2: f32,
    /// 75th percentile
    pub q3: f32,
}

/// Computes the arithmetic mean of a sample.
///
/// # Errors
///
/// Returns error if the sample is empty.
///
/// # Examples
///
/// ```
/// use contrastar::descriptive::mean;
///
/// assert_eq!(mean(&[5.0, 5.0, 5.0]).expect("non-empty sample"), 5.0);
/// ```
pub fn mean(sample: &[f32]) -> Result<f32> {
    if sample.is_empty() {
        return Err(ContrastarError::empty_input("mean"));
    }
    Ok(sample.iter().sum::<f32>() / sample.len() as f32)
}

/// Computes the median of a sample (50th percentile, R-7 method).
///
/// # Errors
///
/// Returns error if the sample is empty.
pub fn median(sample: &[f32]) -> Result<f32> {
    quantile(sample, 0.5)
}

/// Computes the first, second, and third quartiles of a sample.
///
/// Uses R-7 linear interpolation between order statistics.
///
/// # Errors
///
/// Returns error if the sample is empty.
///
/// # Examples
///
/// ```
/// use contrastar::descriptive::quartiles;
///
/// let q = quartiles(&[1.0, 2.0, 3.0, 4.0, 5.0]).expect("non-empty sample");
/// assert_eq!(q.q1, 2.0);
/// assert_eq!(q.q2, 3.0);
/// assert_eq!(q.q3, 4.0);
/// ```
pub fn quartiles(sample: &[f32]) -> Result<Quartiles> {
    Ok(Quartiles {
        q1: quantile(sample, 0.25)?,
        q2: quantile(sample, 0.5)?,
        q3: quantile(sample, 0.75)?,
    })
}

/// Computes the sample variance (n-1 denominator).
///
/// # Errors
///
/// Returns error if the sample has fewer than 2 observations.
pub fn sample_variance(sample: &[f32]) -> Result<f32> {
    let n = sample.len();
    if n < 2 {
        return Err(ContrastarError::InsufficientSample {
            needed: 2,
            actual: n,
        });
    }
    let m = mean(sample)?;
    Ok(sample.iter().map(|&x| (x - m).powi(2)).sum::<f32>() / (n - 1) as f32)
}

/// Computes the sample standard deviation (n-1 denominator).
///
/// # Errors
///
/// Returns error if the sample has fewer than 2 observations.
///
/// # Examples
///
/// ```
/// use contrastar::descriptive::sample_std_dev;
///
/// let s = sample_std_dev(&[2.0, 4.0, 6.0]).expect("sample of at least 2");
/// assert!((s - 2.0).abs() < 1e-6);
/// ```
pub fn sample_std_dev(sample: &[f32]) -> Result<f32> {
    Ok(sample_variance(sample)?.sqrt())
}

/// Returns the smallest value in the sample.
///
/// # Errors
///
/// Returns error if the sample is empty.
pub fn min(sample: &[f32]) -> Result<f32> {
    sample
        .iter()
        .copied()
        .fold(None, |acc: Option<f32>, x| {
            Some(acc.map_or(x, |m| m.min(x)))
        })
        .ok_or_else(|| ContrastarError::empty_input("min"))
}

/// Returns the largest value in the sample.
///
/// # Errors
///
/// Returns error if the sample is empty.
pub fn max(sample: &[f32]) -> Result<f32> {
    sample
        .iter()
        .copied()
        .fold(None, |acc: Option<f32>, x| {
            Some(acc.map_or(x, |m| m.max(x)))
        })
        .ok_or_else(|| ContrastarError::empty_input("max"))
}

/// Returns the range of the sample (max - min).
///
/// # Errors
///
/// Returns error if the sample is empty.
pub fn range(sample: &[f32]) -> Result<f32> {
    Ok(max(sample)? - min(sample)?)
}

/// Computes a quantile using linear interpolation (R-7 method).
///
/// # Errors
///
/// Returns error if the sample is empty or `q` is not in [0, 1].
pub fn quantile(sample: &[f32], q: f64) -> Result<f32> {
    if sample.is_empty() {
        return Err(ContrastarError::empty_input("quantile"));
    }
    if !(0.0..=1.0).contains(&q) {
        return Err(ContrastarError::invalid_parameter(
            "q",
            q as f32,
            "in [0, 1]",
        ));
    }

    let n = sample.len();
    if n == 1 {
        return Ok(sample[0]);
    }

    let mut sorted = sample.to_vec();
    sorted.sort_unstable_by(|a, b| {
        a.partial_cmp(b)
            .expect("f32 values should be comparable (not NaN)")
    });

    // R-7: h = (n - 1) * q, interpolate between floor and ceil positions
    let h = (n - 1) as f64 * q;
    let h_floor = h.floor() as usize;
    let h_ceil = h.ceil() as usize;
    if h_floor == h_ceil {
        return Ok(sorted[h_floor]);
    }

    let fraction = (h - h_floor as f64) as f32;
    Ok(sorted[h_floor] + fraction * (sorted[h_ceil] - sorted[h_floor]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_constant_sample() {
        assert_eq!(mean(&[5.0, 5.0, 5.0]).unwrap(), 5.0);
    }

    #[test]
    fn test_mean_mixed_signs() {
        let got = mean(&[-2.0, 0.0, 2.0, 4.0]).unwrap();
        assert!((got - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_mean_empty_errors() {
        assert!(mean(&[]).is_err());
    }

    #[test]
    fn test_median_odd_length() {
        assert_eq!(median(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
    }

    #[test]
    fn test_median_even_length() {
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
    }

    #[test]
    fn test_quartiles_five_points() {
        let q = quartiles(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(q.q1, 2.0);
        assert_eq!(q.q2, 3.0);
        assert_eq!(q.q3, 4.0);
    }

    #[test]
    fn test_sample_variance_known_value() {
        // deviations from mean 4: -2, 0, 2 -> SS = 8, n-1 = 2
        let v = sample_variance(&[2.0, 4.0, 6.0]).unwrap();
        assert!((v - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_sample_variance_needs_two() {
        assert!(matches!(
            sample_variance(&[1.0]),
            Err(ContrastarError::InsufficientSample {
                needed: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_std_dev_is_sqrt_of_variance() {
        let data = [0.1, 0.02, -0.3, 0.47, 0.015];
        let v = sample_variance(&data).unwrap();
        let s = sample_std_dev(&data).unwrap();
        assert!((s * s - v).abs() < 1e-6);
    }

    #[test]
    fn test_min_max_range() {
        let data = [3.0, -1.5, 7.25, 0.0];
        assert_eq!(min(&data).unwrap(), -1.5);
        assert_eq!(max(&data).unwrap(), 7.25);
        assert_eq!(range(&data).unwrap(), 8.75);
    }

    #[test]
    fn test_min_empty_errors() {
        assert!(min(&[]).is_err());
        assert!(max(&[]).is_err());
        assert!(range(&[]).is_err());
    }

    #[test]
    fn test_quantile_edges() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(quantile(&data, 0.0).unwrap(), 1.0);
        assert_eq!(quantile(&data, 1.0).unwrap(), 5.0);
    }

    #[test]
    fn test_quantile_rejects_out_of_range_q() {
        assert!(quantile(&[1.0, 2.0], 1.5).is_err());
        assert!(quantile(&[1.0, 2.0], -0.1).is_err());
    }

    #[test]
    fn test_quantile_single_element() {
        assert_eq!(quantile(&[42.0], 0.73).unwrap(), 42.0);
    }
}
