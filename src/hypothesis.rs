//! Classical hypothesis testing.
//!
//! Implements one-sample Z and T tests and the paired T test. Each procedure
//! is a single pass: compute a signed statistic from the sample, resolve the
//! decision threshold (the population CDF for Z, the tabulated Student's t
//! critical value for T), apply the tail rule, and return the decision
//! together with the threshold or p-value it was based on.
//!
//! # Hypotheses
//!
//! All tests share the null hypothesis H0: sample mean = population mean.
//! The alternative depends on the tail direction:
//!
//! - [`TailDirection::Right`]: H1: sample mean > population mean
//! - [`TailDirection::Left`]: H1: sample mean < population mean
//! - [`TailDirection::Both`]: H1: sample mean != population mean
//!
//! # Example
//!
//! ```
//! use contrastar::hypothesis::{one_sample_t_test, TailDirection};
//!
//! let sample = [5.1, 4.9, 5.0, 5.2, 4.8, 5.0, 5.1];
//! let result = one_sample_t_test(&sample, 5.0, 0.05, TailDirection::Right)
//!     .expect("valid t-test inputs");
//! assert!(result.accepted);
//! ```

use crate::descriptive::{mean, sample_std_dev};
use crate::distribution::{ContinuousCdf, Distribution};
use crate::error::{ContrastarError, Result};
use crate::table;
use serde::{Deserialize, Serialize};

/// Which side of the distribution counts as evidence against H0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TailDirection {
    /// Reject for statistics in the upper tail.
    Right,
    /// Reject for statistics in the lower tail.
    Left,
    /// Reject for statistics in either tail.
    Both,
}

/// Outcome of a hypothesis test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    /// True when H0 is not rejected at the requested significance level.
    pub accepted: bool,
    /// The value the decision was based on: the p-value for Z tests, the
    /// signed critical value for T tests.
    pub diagnostic: f32,
}

/// Resolves the one-tailed Student's t critical value for the given degrees
/// of freedom and significance level.
///
/// Degrees of freedom must match a tabulated row exactly (the embedded
/// table covers 1 through 100); significance levels between tabulated
/// columns are linearly interpolated.
///
/// # Errors
///
/// Returns [`ContrastarError::OutOfDomain`] when `df` is not a tabulated
/// row or `alpha` lies outside the tabulated column range.
///
/// # Examples
///
/// ```
/// use contrastar::hypothesis::t_critical_value;
///
/// let crit = t_critical_value(1.0, 0.1).expect("tabulated lookup");
/// assert_eq!(crit, 3.078);
/// ```
pub fn t_critical_value(df: f32, alpha: f32) -> Result<f32> {
    let tab = table::student_t();
    let row = tab
        .row_position(df)
        .ok_or(ContrastarError::OutOfDomain {
            value: df,
            min: tab.row_min(),
            max: tab.row_max(),
        })?;
    tab.interpolate(alpha, row)
}

/// One-sample Z test against a population with known parameters.
///
/// Applicable when the population is normally distributed and its standard
/// deviation is known. Computes
/// `z = (mean(sample) - population.mean()) / (population.std_dev() / sqrt(n))`
/// and converts it to a p-value through the population CDF.
///
/// For [`TailDirection::Both`] the right-tail p-value is compared against
/// the full `alpha`; a symmetric two-sided region at `alpha / 2` per tail
/// is deliberately not substituted.
///
/// Returns the decision and the p-value used.
///
/// # Errors
///
/// Returns error if the sample is empty or `alpha` is outside (0, 1).
///
/// # Examples
///
/// ```
/// use contrastar::distribution::Normal;
/// use contrastar::hypothesis::{one_sample_z_test, TailDirection};
///
/// let sample = [0.1, 0.02, -0.3, 0.47, 0.015, 0.21, -0.32];
/// let result = one_sample_z_test(&sample, &Normal::standard(), 0.05, TailDirection::Right)
///     .expect("valid z-test inputs");
/// assert!(result.accepted);
/// ```
pub fn one_sample_z_test<D>(
    sample: &[f32],
    population: &D,
    alpha: f32,
    tail: TailDirection,
) -> Result<TestResult>
where
    D: Distribution + ContinuousCdf,
{
    if sample.is_empty() {
        return Err(ContrastarError::InsufficientSample {
            needed: 1,
            actual: 0,
        });
    }
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(ContrastarError::invalid_parameter(
            "alpha",
            alpha,
            "in (0, 1)",
        ));
    }

    let n = sample.len() as f32;
    let z = (mean(sample)? - population.mean()) / (population.std_dev() / n.sqrt());

    let p = match tail {
        TailDirection::Right | TailDirection::Both => 1.0 - population.cdf(z),
        TailDirection::Left => population.cdf(-z),
    };
    Ok(TestResult {
        accepted: !(p < alpha),
        diagnostic: p,
    })
}

/// One-sample T test against a claimed population mean.
///
/// Applicable when the population standard deviation is unknown: the sample
/// standard deviation (n-1 denominator) estimates it, and the threshold
/// comes from the Student's t table at n-1 degrees of freedom. `alpha` is
/// the significance level of one tail; the two-sided variant looks up the
/// critical value at `2 * alpha`.
///
/// Returns the decision and the signed critical value it was compared
/// against (the upper critical for [`TailDirection::Both`]).
///
/// # Errors
///
/// Returns error if the sample has fewer than 2 observations, or if the
/// degrees of freedom or significance level fall outside the embedded
/// table (degrees of freedom 1 through 100 are tabulated).
pub fn one_sample_t_test(
    sample: &[f32],
    pop_mean: f32,
    alpha: f32,
    tail: TailDirection,
) -> Result<TestResult> {
    let n = sample.len();
    if n < 2 {
        return Err(ContrastarError::InsufficientSample {
            needed: 2,
            actual: n,
        });
    }

    let m = mean(sample)?;
    let s = sample_std_dev(sample)?;
    let t = (m - pop_mean) / (s / (n as f32).sqrt());
    let df = (n - 1) as f32;

    // Each arm states the rejection condition; anything else, including a
    // NaN statistic from a zero-variance sample at the claimed mean, keeps
    // H0 accepted.
    match tail {
        TailDirection::Right => {
            let critical = t_critical_value(df, alpha)?;
            Ok(TestResult {
                accepted: !(t > critical),
                diagnostic: critical,
            })
        }
        TailDirection::Left => {
            let critical = -t_critical_value(df, alpha)?;
            Ok(TestResult {
                accepted: !(t < critical),
                diagnostic: critical,
            })
        }
        TailDirection::Both => {
            let upper = t_critical_value(df, 2.0 * alpha)?;
            Ok(TestResult {
                accepted: !(t > upper || t < -upper),
                diagnostic: upper,
            })
        }
    }
}

/// Paired T test on before/after measurements of the same subjects.
///
/// Forms the element-wise differences `post - pre` and runs
/// [`one_sample_t_test`] on them against a population mean of zero.
///
/// # Errors
///
/// Returns error if the samples differ in length, or any error of the
/// delegated one-sample test.
///
/// # Examples
///
/// ```
/// use contrastar::hypothesis::{paired_t_test, TailDirection};
///
/// let pre = [12.0, 14.5, 13.0, 11.0, 12.5];
/// let post = [12.2, 14.3, 13.1, 11.2, 12.4];
/// let result = paired_t_test(&pre, &post, 0.05, TailDirection::Both)
///     .expect("valid paired inputs");
/// assert!(result.accepted);
/// ```
pub fn paired_t_test(
    pre: &[f32],
    post: &[f32],
    alpha: f32,
    tail: TailDirection,
) -> Result<TestResult> {
    if pre.len() != post.len() {
        return Err(ContrastarError::DimensionMismatch {
            expected: format!("{} values in pre", pre.len()),
            actual: format!("{} values in post", post.len()),
        });
    }
    let diffs: Vec<f32> = pre.iter().zip(post.iter()).map(|(&a, &b)| b - a).collect();
    one_sample_t_test(&diffs, 0.0, alpha, tail)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::distribution::Normal;
    use proptest::prelude::*;

    fn tail_strategy() -> impl Strategy<Value = TailDirection> {
        prop_oneof![
            Just(TailDirection::Right),
            Just(TailDirection::Left),
            Just(TailDirection::Both),
        ]
    }

    fn alpha_strategy() -> impl Strategy<Value = f32> {
        prop_oneof![Just(0.05_f32), Just(0.025), Just(0.01)]
    }

    proptest! {
        /// Paired test must agree with the one-sample test on differences.
        #[test]
        fn prop_paired_equivalence(
            pairs in prop::collection::vec((-100.0_f32..100.0, -100.0_f32..100.0), 2..40),
            alpha in alpha_strategy(),
            tail in tail_strategy(),
        ) {
            let pre: Vec<f32> = pairs.iter().map(|&(a, _)| a).collect();
            let post: Vec<f32> = pairs.iter().map(|&(_, b)| b).collect();
            let diffs: Vec<f32> = pairs.iter().map(|&(a, b)| b - a).collect();

            let paired = paired_t_test(&pre, &post, alpha, tail).unwrap();
            let direct = one_sample_t_test(&diffs, 0.0, alpha, tail).unwrap();
            prop_assert_eq!(paired, direct);
        }

        /// Identical inputs must produce bit-identical results.
        #[test]
        fn prop_idempotent(
            sample in prop::collection::vec(-100.0_f32..100.0, 2..30),
            alpha in alpha_strategy(),
            tail in tail_strategy(),
        ) {
            let a = one_sample_t_test(&sample, 0.0, alpha, tail).unwrap();
            let b = one_sample_t_test(&sample, 0.0, alpha, tail).unwrap();
            prop_assert_eq!(a.accepted, b.accepted);
            prop_assert_eq!(a.diagnostic.to_bits(), b.diagnostic.to_bits());
        }

        /// Z-test p-values stay inside [0, 1] for any tail.
        #[test]
        fn prop_z_pvalue_bounded(
            sample in prop::collection::vec(-10.0_f32..10.0, 1..30),
            tail in tail_strategy(),
        ) {
            let result = one_sample_z_test(&sample, &Normal::standard(), 0.05, tail).unwrap();
            prop_assert!((0.0..=1.0).contains(&result.diagnostic));
        }

        /// In-domain critical value lookups succeed and stay within the
        /// values tabulated for the bracketing columns.
        #[test]
        fn prop_t_critical_in_domain(
            df in 1_usize..=100,
            alpha in 0.001_f32..=0.25,
        ) {
            let crit = t_critical_value(df as f32, alpha).unwrap();
            prop_assert!(crit.is_finite());
            prop_assert!(crit > 0.0);
        }
    }
}
