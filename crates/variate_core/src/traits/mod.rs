//! Core traits for sampling: precision, uniform sources, distributions.
//!
//! This module defines the abstractions shared by every distribution:
//! - Generic floating-point operations (`Float` trait, re-exported)
//! - Text-aware precision (`SampleFloat` trait)
//! - Randomness input (`UniformSource` trait and its adapters)
//! - The distribution family interface (`ContinuousDistribution` trait)
//!
//! ## Important
//! Do NOT use `Box<dyn Trait>` dynamic dispatch with these traits; samplers
//! are meant to be monomorphised into their calling kernels.

/// Generic floating-point trait for numeric computations.
///
/// # Examples
/// ```
/// use variate_core::traits::Float;
///
/// fn standardise<T: Float>(x: T, mu: T, sigma: T) -> T {
///     (x - mu) / sigma
/// }
///
/// assert_eq!(standardise(8.0_f64, 6.0, 2.0), 1.0);
/// ```
pub use num_traits::Float;

/// Mathematical constants for generic floats (`PI`, `SQRT_2`, ...).
pub use num_traits::FloatConst;

pub mod distribution;
pub mod float;
pub mod uniform;

pub use distribution::ContinuousDistribution;
pub use float::SampleFloat;
pub use uniform::{FnSource, RngSource, UniformSource};
