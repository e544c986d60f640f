//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for text parsing
//!
//! # Re-exports
//!
//! - [`ParseError`] from `error`

pub mod error;

pub use error::ParseError;
