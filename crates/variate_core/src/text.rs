//! Scanner for the canonical text formats.
//!
//! Parameter and distribution values are written as nested, literal-delimited
//! blocks such as `(6.0000000000000000 2.0000000000000000)`. [`Scanner`]
//! reads such blocks front to back without allocating on the success path:
//! - [`expect`](Scanner::expect) matches an exact literal
//! - [`scalar`](Scanner::scalar) reads one numeric token
//! - [`skip_whitespace`](Scanner::skip_whitespace) discards leading blanks
//!
//! Whitespace is significant everywhere except where a caller explicitly
//! skips it; a separator is a single ASCII space.

use crate::traits::SampleFloat;
use crate::types::ParseError;

/// Characters that terminate a numeric token.
const DELIMITERS: &[char] = &['(', ')', '[', ']'];

/// Cursor over a text being parsed.
///
/// # Examples
/// ```
/// use variate_core::text::Scanner;
///
/// let mut scanner = Scanner::new("(1.5 2.5) tail");
/// scanner.expect("(").unwrap();
/// let a: f64 = scanner.scalar().unwrap();
/// scanner.expect(" ").unwrap();
/// let b: f64 = scanner.scalar().unwrap();
/// scanner.expect(")").unwrap();
///
/// assert_eq!((a, b), (1.5, 2.5));
/// assert_eq!(scanner.rest(), " tail");
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `text`.
    #[inline]
    pub fn new(text: &'a str) -> Self {
        Self { text, offset: 0 }
    }

    /// Byte offset of the next unread character.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The unread remainder of the input.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.text[self.offset..]
    }

    /// Discards leading ASCII whitespace (space, tab, CR, LF, form feed).
    ///
    /// Other Unicode spacing such as U+00A0 is left in place.
    pub fn skip_whitespace(&mut self) {
        let rest = self.rest();
        let trimmed = rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
        self.offset += rest.len() - trimmed.len();
    }

    /// Consumes `literal` or fails without advancing.
    ///
    /// # Errors
    /// - [`ParseError::UnexpectedEnd`] if the input ends inside the literal
    /// - [`ParseError::ExpectedLiteral`] on the first mismatching character
    pub fn expect(&mut self, literal: &'static str) -> Result<(), ParseError> {
        let rest = self.rest();
        if rest.starts_with(literal) {
            self.offset += literal.len();
            return Ok(());
        }

        let mismatch = rest
            .char_indices()
            .zip(literal.chars())
            .find(|((_, have), want)| have != want);

        match mismatch {
            Some(((index, found), _)) => Err(ParseError::ExpectedLiteral {
                expected: literal,
                found,
                offset: self.offset + index,
            }),
            None => Err(ParseError::UnexpectedEnd {
                expected: literal,
                offset: self.text.len(),
            }),
        }
    }

    /// Reads one numeric token or fails without advancing.
    ///
    /// The token extends up to the next whitespace, bracket or the end of
    /// input; it is then handed to `T::from_str`, which accepts the usual
    /// decimal and exponent forms as well as `inf` and `NaN`.
    ///
    /// # Errors
    /// - [`ParseError::InvalidScalar`] if the token is empty or malformed
    pub fn scalar<T: SampleFloat>(&mut self) -> Result<T, ParseError> {
        let rest = self.rest();
        let end = rest
            .find(|c: char| c.is_whitespace() || DELIMITERS.contains(&c))
            .unwrap_or(rest.len());
        let token = &rest[..end];

        match token.parse::<T>() {
            Ok(value) if !token.is_empty() => {
                self.offset += end;
                Ok(value)
            }
            _ => Err(ParseError::InvalidScalar {
                text: token.to_string(),
                offset: self.offset,
            }),
        }
    }

    /// Succeeds only if the whole input has been consumed.
    ///
    /// # Errors
    /// - [`ParseError::TrailingInput`] if unread characters remain
    pub fn finish(&self) -> Result<(), ParseError> {
        if self.offset == self.text.len() {
            Ok(())
        } else {
            Err(ParseError::TrailingInput {
                offset: self.offset,
            })
        }
    }
}
