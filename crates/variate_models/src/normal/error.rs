//! Error types for normal distribution parameters.
//!
//! This module provides:
//! - `ParamError`: rejections from the checked constructor
//!   [`NormalParams::try_new`](super::NormalParams::try_new)

use thiserror::Error;

/// Invalid normal distribution parameters.
///
/// Only produced by the opt-in checked constructors. The plain constructors
/// accept any values and let NaN or infinities propagate through the
/// numerical functions.
///
/// # Variants
/// - `NonFiniteMean`: μ is NaN or infinite
/// - `InvalidSigma`: σ is not finite and strictly positive
///
/// # Examples
/// ```
/// use variate_models::normal::ParamError;
///
/// let err = ParamError::InvalidSigma { sigma: -0.5 };
/// assert_eq!(format!("{}", err), "Invalid standard deviation: σ = -0.5");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParamError {
    /// Mean is NaN or infinite.
    #[error("Invalid mean: μ = {mu}")]
    NonFiniteMean {
        /// The rejected mean, widened to `f64`
        mu: f64,
    },

    /// Standard deviation is not finite and strictly positive.
    #[error("Invalid standard deviation: σ = {sigma}")]
    InvalidSigma {
        /// The rejected standard deviation, widened to `f64`
        sigma: f64,
    },
}
