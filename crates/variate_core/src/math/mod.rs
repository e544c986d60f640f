//! Numerical routines.
//!
//! - [`special`]: error functions and the standard normal CDF with its inverse

pub mod special;

pub use special::{erf, erfc, inv_phi, phi};
