//! # Variate Models (L2: Distributions)
//!
//! Probability distributions sampled by inverse transform.
//!
//! This crate provides:
//! - [`NormalParams`](normal::NormalParams): the (μ, σ) parameter object
//! - [`NormalDist`](normal::NormalDist): sampling, density, cumulative and
//!   inverse-cumulative functions of the normal distribution
//! - Canonical text serialisation for logging and checkpointing
//!
//! ## Design Principles
//!
//! - **Generic over `T: SampleFloat`** and over the uniform source type
//! - **Stateless values**: distributions are `Copy` and sampling takes `&self`
//! - **One draw per variate**: output streams are reproducible from the
//!   source state alone
//! - **No errors on the hot path**: invalid parameters propagate as NaN or
//!   infinities; only text parsing is fallible
//!
//! ## Usage
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use variate_core::traits::RngSource;
//! use variate_models::normal::NormalDist;
//!
//! let normal = NormalDist::new(6.0_f64, 2.0);
//! let mut source = RngSource::new(StdRng::seed_from_u64(2024));
//!
//! let x = normal.sample(&mut source);
//! assert!(x.is_finite());
//!
//! let text = normal.serialize();
//! assert_eq!(text, "[normal (6.0000000000000000 2.0000000000000000)]");
//! assert_eq!(NormalDist::<f64>::parse(&text).unwrap(), normal);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod normal;
