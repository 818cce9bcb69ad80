//! Error types for Contrastar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Contrastar operations.
///
/// Provides detailed context about failures including out-of-domain table
/// lookups, invalid distribution parameters, mismatched sample lengths, and
/// samples too small for the requested procedure.
///
/// # Examples
///
/// ```
/// use contrastar::error::ContrastarError;
///
/// let err = ContrastarError::OutOfDomain {
///     value: 0.5,
///     min: 0.001,
///     max: 0.25,
/// };
/// assert!(err.to_string().contains("outside tabulated domain"));
/// ```
#[derive(Debug)]
pub enum ContrastarError {
    /// A lookup value lies outside the tabulated range.
    OutOfDomain {
        /// Requested lookup value
        value: f32,
        /// Smallest tabulated value
        min: f32,
        /// Largest tabulated value
        max: f32,
    },

    /// Invalid parameter value provided.
    InvalidParameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Sequence lengths don't match for the operation.
    DimensionMismatch {
        /// Expected length description
        expected: String,
        /// Actual length found
        actual: String,
    },

    /// Sample has too few observations for the requested procedure.
    InsufficientSample {
        /// Minimum sample size required
        needed: usize,
        /// Actual sample size
        actual: usize,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for ContrastarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContrastarError::OutOfDomain { value, min, max } => {
                write!(f, "Value {value} outside tabulated domain [{min}, {max}]")
            }
            ContrastarError::InvalidParameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter: {param} = {value}, expected {constraint}"
                )
            }
            ContrastarError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Sample dimension mismatch: expected {expected}, got {actual}"
                )
            }
            ContrastarError::InsufficientSample { needed, actual } => {
                write!(
                    f,
                    "Insufficient sample: need at least {needed} observations, got {actual}"
                )
            }
            ContrastarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ContrastarError {}

impl From<&str> for ContrastarError {
    fn from(msg: &str) -> Self {
        ContrastarError::Other(msg.to_string())
    }
}

impl From<String> for ContrastarError {
    fn from(msg: String) -> Self {
        ContrastarError::Other(msg)
    }
}

impl ContrastarError {
    /// Create an invalid parameter error with descriptive context
    #[must_use]
    pub fn invalid_parameter(param: &str, value: f32, constraint: &str) -> Self {
        Self::InvalidParameter {
            param: param.to_string(),
            value: format!("{value}"),
            constraint: constraint.to_string(),
        }
    }

    /// Create an index out of bounds error
    #[must_use]
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Self::Other(format!("index {index} out of bounds (len={len})"))
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::Other(format!("empty input: {context}"))
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, ContrastarError>;
