//! Contrastar: classical statistics in pure Rust.
//!
//! Contrastar provides descriptive statistics, parametric probability
//! distribution models, and classical hypothesis testing (one-sample Z test,
//! one-sample T test, paired T test) with typed errors instead of panics and
//! an embedded Student's t critical value table.
//!
//! # Quick Start
//!
//! ```
//! use contrastar::prelude::*;
//!
//! // Is this sample consistent with a standard normal population?
//! let sample = [0.1, 0.02, -0.3, 0.47, 0.015, 0.21, -0.32];
//! let result = one_sample_z_test(&sample, &Normal::standard(), 0.05, TailDirection::Right)
//!     .expect("valid z-test inputs");
//! assert!(result.accepted);
//!
//! // Without a known population sigma, fall back to the t test
//! let result = one_sample_t_test(&sample, 0.0, 0.05, TailDirection::Both)
//!     .expect("valid t-test inputs");
//! assert!(result.accepted);
//! ```
//!
//! # Modules
//!
//! - [`descriptive`]: Mean, median, quartiles, variance, and spread measures
//! - [`distribution`]: Normal, Binomial, Exponential, Gamma, and Poisson models
//! - [`table`]: Critical value tables with column interpolation
//! - [`hypothesis`]: Z and T testing procedures and the critical value resolver
//!
//! All operations are synchronous, pure functions; the one shared data asset,
//! the embedded Student's t table, is immutable after first access and safe
//! to use from any number of threads.

pub mod descriptive;
pub mod distribution;
pub mod error;
pub mod hypothesis;
mod math;
pub mod prelude;
pub mod table;

pub use error::{ContrastarError, Result};
pub use hypothesis::{TailDirection, TestResult};
