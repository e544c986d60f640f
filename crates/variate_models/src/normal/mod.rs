//! Normal (Gaussian) distribution.
//!
//! This module provides:
//! - [`NormalParams`]: the (μ, σ) pair with its `(<mu> <sigma>)` text form
//! - [`NormalDist`]: inverse-transform sampling plus pdf, cdf and icdf
//! - [`ParamError`]: rejections from the checked constructor
//!
//! ## Example
//!
//! ```rust
//! use variate_core::traits::FnSource;
//! use variate_models::normal::{NormalDist, NormalParams};
//!
//! let params = NormalParams::try_new(0.0_f64, 1.0).unwrap();
//! let normal = NormalDist::from_params(params);
//!
//! let mut draws = [0.025_f64, 0.5, 0.975].into_iter();
//! let mut source = FnSource::new(move || draws.next().unwrap_or(0.5));
//! let mut buffer = [0.0; 3];
//! normal.fill(&mut source, &mut buffer);
//!
//! assert!((buffer[0] + 1.959_963_984_540_054).abs() < 1e-12);
//! assert_eq!(buffer[1], 0.0);
//! assert!((buffer[2] - 1.959_963_984_540_054).abs() < 1e-12);
//! ```

pub mod dist;
pub mod error;
pub mod params;

pub use dist::NormalDist;
pub use error::ParamError;
pub use params::NormalParams;
