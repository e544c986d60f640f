//! # variate_core: Numerical Foundation for Inverse-CDF Sampling
//!
//! ## Layer 1 (Foundation) Role
//!
//! variate_core is the bottom layer of the workspace, providing:
//! - Special functions: `erf`, `erfc`, standard normal CDF `phi` and its
//!   inverse `inv_phi` (`math::special`)
//! - The [`SampleFloat`](traits::SampleFloat) precision trait for `f32`/`f64`
//! - The [`UniformSource`](traits::UniformSource) contract and adapters over
//!   `rand` engines and closures (`traits::uniform`)
//! - The [`ContinuousDistribution`](traits::ContinuousDistribution) family
//!   trait (`traits::distribution`)
//! - A small scanner for the canonical text formats (`text`)
//! - Error types: `ParseError` (`types::error`)
//!
//! ## Kernel Safety
//!
//! Everything on the sampling path is allocation-free, statically dispatched
//! and never returns an error: domain violations surface as NaN or infinities.
//!
//! ## Usage Examples
//!
//! ```rust
//! use variate_core::math::special::{inv_phi, phi};
//!
//! assert_eq!(inv_phi(0.5_f64), 0.0);
//! assert!((phi(1.0_f64) - 0.841_344_746_068_543).abs() < 1e-14);
//! assert_eq!(inv_phi(0.0_f64), f64::NEG_INFINITY);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod text;
pub mod traits;
pub mod types;
