//! Error types for structured error handling.
//!
//! This module provides:
//! - `ParseError`: Errors from reading the canonical text formats
//!
//! Numerical routines never return errors; see the crate documentation.

use thiserror::Error;

/// Errors from parsing canonical distribution text.
///
/// Every variant records the byte offset into the input where scanning
/// stopped, so callers reading long checkpoint files can point at the fault.
///
/// # Variants
/// - `UnexpectedEnd`: Input ended before a required literal
/// - `ExpectedLiteral`: A required literal did not match
/// - `InvalidScalar`: A numeric field could not be read
/// - `TrailingInput`: Input continues after a complete value
///
/// # Examples
/// ```
/// use variate_core::types::ParseError;
///
/// let err = ParseError::ExpectedLiteral { expected: "(", found: '6', offset: 0 };
/// assert_eq!(format!("{}", err), "Expected \"(\" at offset 0, found '6'");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input ended before a required literal.
    #[error("Unexpected end of input at offset {offset}: expected {expected:?}")]
    UnexpectedEnd {
        /// The literal that was required
        expected: &'static str,
        /// Byte offset where input ended
        offset: usize,
    },

    /// A required literal did not match.
    #[error("Expected {expected:?} at offset {offset}, found {found:?}")]
    ExpectedLiteral {
        /// The literal that was required
        expected: &'static str,
        /// The first character that did not match
        found: char,
        /// Byte offset of the mismatch
        offset: usize,
    },

    /// A numeric field could not be read.
    #[error("Invalid scalar {text:?} at offset {offset}")]
    InvalidScalar {
        /// The token that failed to parse
        text: String,
        /// Byte offset of the token
        offset: usize,
    },

    /// Input continues after a complete value.
    #[error("Unexpected trailing input at offset {offset}")]
    TrailingInput {
        /// Byte offset of the first unread character
        offset: usize,
    },
}

impl ParseError {
    /// Byte offset in the input where the error was detected.
    ///
    /// # Examples
    /// ```
    /// use variate_core::types::ParseError;
    ///
    /// assert_eq!(ParseError::TrailingInput { offset: 12 }.offset(), 12);
    /// ```
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnexpectedEnd { offset, .. }
            | ParseError::ExpectedLiteral { offset, .. }
            | ParseError::InvalidScalar { offset, .. }
            | ParseError::TrailingInput { offset } => *offset,
        }
    }
}
