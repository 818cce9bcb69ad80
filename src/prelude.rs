//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use contrastar::prelude::*;
//! ```

pub use crate::descriptive::{
    mean, median, quartiles, range, sample_std_dev, sample_variance, Quartiles,
};
pub use crate::distribution::{
    Binomial, ContinuousCdf, Distribution, Exponential, Gamma, Normal, Poisson,
};
pub use crate::error::{ContrastarError, Result};
pub use crate::hypothesis::{
    one_sample_t_test, one_sample_z_test, paired_t_test, t_critical_value, TailDirection,
    TestResult,
};
pub use crate::table::CriticalValueTable;
