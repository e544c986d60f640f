//! Parameter object of the normal distribution.
//!
//! [`NormalParams`] is a plain (μ, σ) value with exact equality and a
//! canonical text form `(<mu> <sigma>)`.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};
use variate_core::text::Scanner;
use variate_core::traits::SampleFloat;
use variate_core::types::ParseError;

use super::error::ParamError;

/// Mean and standard deviation of a normal distribution.
///
/// # Invariants
/// - Equality is exact field-wise comparison; no tolerance is applied.
/// - σ is expected to be strictly positive but this is not enforced by
///   [`new`](NormalParams::new). Use [`try_new`](NormalParams::try_new) to
///   validate at construction time.
///
/// # Text Format
/// `(<mu> <sigma>)`: literal parentheses, a single ASCII space, both scalars
/// in fixed notation with `DIGITS10 + 1` decimals (16 for `f64`, 7 for `f32`).
///
/// The text form is exact only for magnitudes of at least 1. Smaller values
/// lose their trailing significant digits, and anything below `1e-16` (`f64`)
/// or `1e-7` (`f32`) prints as zero, so the text is not a lossless checkpoint.
/// Prefer the `serde` representation when full precision matters.
///
/// # Examples
/// ```
/// use variate_models::normal::NormalParams;
///
/// let params = NormalParams::new(6.0_f64, 2.0);
/// assert_eq!(params.serialize(), "(6.0000000000000000 2.0000000000000000)");
///
/// let parsed: NormalParams<f64> = "(6.000000000000000 2.000000000000000)".parse().unwrap();
/// assert_eq!(parsed, params);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalParams<T> {
    mu: T,
    sigma: T,
}

impl<T: SampleFloat> NormalParams<T> {
    /// Creates parameters without validation.
    #[inline]
    pub const fn new(mu: T, sigma: T) -> Self {
        Self { mu, sigma }
    }

    /// Creates parameters, rejecting a non-finite μ or a σ that is not
    /// finite and strictly positive.
    ///
    /// # Errors
    /// - [`ParamError::NonFiniteMean`] if μ is NaN or infinite
    /// - [`ParamError::InvalidSigma`] if σ is NaN, infinite, zero or negative
    ///
    /// # Examples
    /// ```
    /// use variate_models::normal::{NormalParams, ParamError};
    ///
    /// assert!(NormalParams::try_new(0.0_f64, 1.0).is_ok());
    /// assert_eq!(
    ///     NormalParams::try_new(0.0_f64, 0.0),
    ///     Err(ParamError::InvalidSigma { sigma: 0.0 })
    /// );
    /// ```
    pub fn try_new(mu: T, sigma: T) -> Result<Self, ParamError> {
        if !mu.is_finite() {
            return Err(ParamError::NonFiniteMean {
                mu: mu.to_f64().unwrap_or(f64::NAN),
            });
        }
        if !(sigma.is_finite() && sigma > T::zero()) {
            return Err(ParamError::InvalidSigma {
                sigma: sigma.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self::new(mu, sigma))
    }

    /// Mean μ.
    #[inline]
    pub fn mu(&self) -> T {
        self.mu
    }

    /// Standard deviation σ.
    #[inline]
    pub fn sigma(&self) -> T {
        self.sigma
    }

    /// Replaces μ.
    #[inline]
    pub fn set_mu(&mut self, mu: T) {
        self.mu = mu;
    }

    /// Replaces σ.
    #[inline]
    pub fn set_sigma(&mut self, sigma: T) {
        self.sigma = sigma;
    }

    /// Exact field-wise equality; same as `==`.
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    /// Canonical text form `(<mu> <sigma>)`.
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    /// Reads one parameter block at the scanner position.
    ///
    /// On failure the scanner is left where it was.
    ///
    /// # Errors
    /// Any [`ParseError`] from a missing delimiter or a malformed scalar.
    pub fn scan(scanner: &mut Scanner<'_>) -> Result<Self, ParseError> {
        let mut cursor = scanner.clone();
        cursor.expect("(")?;
        let mu = cursor.scalar()?;
        cursor.expect(" ")?;
        let sigma = cursor.scalar()?;
        cursor.expect(")")?;
        *scanner = cursor;
        Ok(Self::new(mu, sigma))
    }

    /// Parses the canonical text form; the whole input must be consumed.
    ///
    /// # Errors
    /// Any [`ParseError`]; trailing characters yield
    /// [`ParseError::TrailingInput`].
    ///
    /// # Examples
    /// ```
    /// use variate_models::normal::NormalParams;
    ///
    /// assert!(NormalParams::<f64>::parse("6.0 2.0)").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut scanner = Scanner::new(text);
        Self::scan(&mut scanner)
            .and_then(|params| scanner.finish().map(|()| params))
            .map_err(|err| {
                debug!(offset = err.offset(), error = %err, "rejected normal parameter text");
                err
            })
    }

    /// Parses one parameter block from the front of `text`.
    ///
    /// Returns the parameters and the unread remainder, so that several values
    /// can be read from one log line or checkpoint file.
    ///
    /// # Errors
    /// Any [`ParseError`] from the leading block.
    ///
    /// # Examples
    /// ```
    /// use variate_models::normal::NormalParams;
    ///
    /// let (params, rest) = NormalParams::<f64>::parse_prefix("(1 2)(3 4)").unwrap();
    /// assert_eq!(params, NormalParams::new(1.0, 2.0));
    /// assert_eq!(rest, "(3 4)");
    /// ```
    pub fn parse_prefix(text: &str) -> Result<(Self, &str), ParseError> {
        let mut scanner = Scanner::new(text);
        match Self::scan(&mut scanner) {
            Ok(params) => Ok((params, scanner.rest())),
            Err(err) => {
                debug!(offset = err.offset(), error = %err, "rejected normal parameter text");
                Err(err)
            }
        }
    }

    /// Replaces `self` with the parameters parsed from `text`.
    ///
    /// On failure `self` is left unchanged.
    ///
    /// # Errors
    /// Same as [`parse`](NormalParams::parse).
    pub fn read_from(&mut self, text: &str) -> Result<(), ParseError> {
        let parsed = Self::parse(text)?;
        trace!(mu = %parsed.mu, sigma = %parsed.sigma, "normal parameters replaced");
        *self = parsed;
        Ok(())
    }
}

impl<T: SampleFloat> Default for NormalParams<T> {
    /// Standard normal: μ = 0, σ = 1.
    fn default() -> Self {
        Self::new(T::zero(), T::one())
    }
}

impl<T: SampleFloat> fmt::Display for NormalParams<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = T::text_precision();
        write!(
            f,
            "({:.*} {:.*})",
            precision, self.mu, precision, self.sigma
        )
    }
}

impl<T: SampleFloat> FromStr for NormalParams<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_accessors() {
        let params = NormalParams::new(6.0_f64, 2.0);
        assert_eq!(params.mu(), 6.0);
        assert_eq!(params.sigma(), 2.0);
    }

    #[test]
    fn test_default_is_standard_normal() {
        let params = NormalParams::<f64>::default();
        assert_eq!(params.mu(), 0.0);
        assert_eq!(params.sigma(), 1.0);
    }

    #[test]
    fn test_setters_replace_single_field() {
        let mut params = NormalParams::new(1.0_f64, 2.0);
        params.set_mu(-3.0);
        assert_eq!(params, NormalParams::new(-3.0, 2.0));
        params.set_sigma(0.25);
        assert_eq!(params, NormalParams::new(-3.0, 0.25));
    }

    #[test]
    fn test_equality_is_exact() {
        let a = NormalParams::new(0.1_f64 + 0.2, 1.0);
        let b = NormalParams::new(0.3_f64, 1.0);
        assert!(!a.equals(&b));
        assert!(a.equals(&NormalParams::new(0.1 + 0.2, 1.0)));
        assert_ne!(NormalParams::new(0.0_f64, 1.0), NormalParams::new(0.0, 1.0 + f64::EPSILON));
    }

    #[test]
    fn test_try_new_validation() {
        assert_eq!(
            NormalParams::try_new(5.0_f64, 2.0),
            Ok(NormalParams::new(5.0, 2.0))
        );
        assert_eq!(
            NormalParams::try_new(f64::NAN, 2.0).unwrap_err().to_string(),
            "Invalid mean: μ = NaN"
        );
        assert_eq!(
            NormalParams::try_new(0.0_f64, -1.0),
            Err(ParamError::InvalidSigma { sigma: -1.0 })
        );
        assert!(NormalParams::try_new(0.0_f64, f64::INFINITY).is_err());
        assert!(NormalParams::try_new(0.0_f32, f32::NAN).is_err());
    }

    // ==========================================================
    // Text format
    // ==========================================================

    #[test]
    fn test_serialize_f64() {
        let params = NormalParams::new(6.0_f64, 2.0);
        assert_eq!(params.serialize(), "(6.0000000000000000 2.0000000000000000)");
    }

    #[test]
    fn test_serialize_f32() {
        let params = NormalParams::new(-1.5_f32, 0.25);
        assert_eq!(params.serialize(), "(-1.5000000 0.2500000)");
    }

    #[test]
    fn test_serialize_never_scientific() {
        let params = NormalParams::new(1e20_f64, 1e-3);
        assert_eq!(
            params.serialize(),
            "(100000000000000000000.0000000000000000 0.0010000000000000)"
        );
    }

    #[test]
    fn test_text_form_is_lossy_below_one() {
        let params = NormalParams::new(1.0_f64, 0.123_456_789_012_345_678);
        let text = params.serialize();
        assert_eq!(text, "(1.0000000000000000 0.1234567890123457)");
        let parsed = NormalParams::<f64>::parse(&text).unwrap();
        assert_ne!(parsed, params);
        assert_eq!(parsed.sigma(), 0.123_456_789_012_345_7);

        let tiny = NormalParams::new(1.0_f64, 1e-20);
        assert_eq!(tiny.serialize(), "(1.0000000000000000 0.0000000000000000)");
        assert_eq!(NormalParams::<f64>::parse(&tiny.serialize()).unwrap().sigma(), 0.0);
    }

    #[test]
    fn test_parse_example() {
        let params: NormalParams<f64> = "(6.000000000000000 2.000000000000000)".parse().unwrap();
        assert_eq!(params.mu(), 6.0);
        assert_eq!(params.sigma(), 2.0);
    }

    #[test]
    fn test_parse_missing_open_paren() {
        assert_eq!(
            NormalParams::<f64>::parse("6.0 2.0)"),
            Err(ParseError::ExpectedLiteral {
                expected: "(",
                found: '6',
                offset: 0,
            })
        );
    }

    #[test]
    fn test_parse_rejects_double_space() {
        assert_eq!(
            NormalParams::<f64>::parse("(6.0  2.0)"),
            Err(ParseError::InvalidScalar {
                text: String::new(),
                offset: 5,
            })
        );
    }

    #[test]
    fn test_parse_rejects_truncated_input() {
        assert_eq!(
            NormalParams::<f64>::parse("(6.0 2.0"),
            Err(ParseError::UnexpectedEnd {
                expected: ")",
                offset: 8,
            })
        );
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(matches!(
            NormalParams::<f64>::parse("(six 2.0)"),
            Err(ParseError::InvalidScalar { offset: 1, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_trailing_input() {
        assert_eq!(
            NormalParams::<f64>::parse("(6 2) "),
            Err(ParseError::TrailingInput { offset: 5 })
        );
    }

    #[test]
    fn test_read_from_failure_leaves_target_unchanged() {
        let mut params = NormalParams::new(1.0_f64, 3.0);
        assert!(params.read_from("6.0 2.0)").is_err());
        assert_eq!(params, NormalParams::new(1.0, 3.0));

        // mu is readable here, but must not be committed
        assert!(params.read_from("(6.0 x)").is_err());
        assert_eq!(params, NormalParams::new(1.0, 3.0));
    }

    #[test]
    fn test_read_from_success_replaces_target() {
        let mut params = NormalParams::new(1.0_f64, 3.0);
        params.read_from("(-4.5 0.5)").unwrap();
        assert_eq!(params, NormalParams::new(-4.5, 0.5));
    }

    #[test]
    fn test_scan_restores_position_on_failure() {
        let mut scanner = Scanner::new("(1.0 oops)");
        assert!(NormalParams::<f64>::scan(&mut scanner).is_err());
        assert_eq!(scanner.offset(), 0);
    }

    #[test]
    fn test_parse_prefix_returns_remainder() {
        let (params, rest) = NormalParams::<f32>::parse_prefix("(0.5 1.5)\nnext").unwrap();
        assert_eq!(params, NormalParams::new(0.5, 1.5));
        assert_eq!(rest, "\nnext");
    }

    #[test]
    fn test_round_trip_short_decimals() {
        for (mu, sigma) in [(0.1, 0.2), (-2.75, 1e-3), (0.0, 1.0), (123.456, 7.5)] {
            let params = NormalParams::new(mu, sigma);
            assert_eq!(params.serialize().parse::<NormalParams<f64>>(), Ok(params));
        }
    }

    #[test]
    fn test_non_finite_values_survive_text() {
        let params = NormalParams::new(f64::NEG_INFINITY, f64::INFINITY);
        assert_eq!(params.serialize(), "(-inf inf)");
        assert_eq!(NormalParams::<f64>::parse("(-inf inf)"), Ok(params));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_fields() {
        let params = NormalParams::new(6.0_f64, 2.0);
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"mu":6.0,"sigma":2.0}"#);
        let back: NormalParams<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }

    // ==========================================================
    // Property-based tests
    // ==========================================================

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        /// Magnitudes >= 1 keep at least 17 significant digits in the
        /// fixed 16-decimal format, which is enough for an exact round-trip.
        fn mu_strategy() -> impl Strategy<Value = f64> {
            prop_oneof![-1e9_f64..=-1.0, Just(0.0), 1.0_f64..=1e9]
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn test_text_round_trip_f64(mu in mu_strategy(), sigma in 1.0_f64..1e6) {
                let params = NormalParams::new(mu, sigma);
                prop_assert_eq!(NormalParams::parse(&params.serialize()), Ok(params));
            }

            #[test]
            fn test_text_round_trip_f32(mu in 1.0_f32..1e4, sigma in 1.0_f32..1e3) {
                let params = NormalParams::new(-mu, sigma);
                prop_assert_eq!(NormalParams::parse(&params.serialize()), Ok(params));
            }

            #[test]
            fn test_accessors_return_constructor_arguments(
                mu in -1e12_f64..1e12,
                sigma in 1e-12_f64..1e12,
            ) {
                let params = NormalParams::new(mu, sigma);
                prop_assert_eq!(params.mu(), mu);
                prop_assert_eq!(params.sigma(), sigma);
            }
        }
    }
}
