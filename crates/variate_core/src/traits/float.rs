//! Floating-point precision trait for sampling and text formatting.
//!
//! [`SampleFloat`] narrows `num_traits::Float` to the precisions the
//! distributions are instantiated with and carries the metadata the canonical
//! text format needs.

use std::fmt::{Debug, Display};
use std::str::FromStr;

use num_traits::{Float, FloatConst};

/// Floating-point type usable as a variate.
///
/// Implemented for `f32` and `f64`. Besides the arithmetic of
/// [`Float`] and the constants of [`FloatConst`], implementors expose:
/// - [`DIGITS10`](SampleFloat::DIGITS10): the number of decimal digits that
///   survive a text round-trip (C's `DBL_DIG`/`FLT_DIG`)
/// - [`constant`](SampleFloat::constant): conversion of `f64` literals, used
///   for polynomial coefficients in generic code
/// - [`erf`](SampleFloat::erf) and [`erfc`](SampleFloat::erfc): the error
///   function pair at this precision, backed by `libm`
///
/// # Examples
/// ```
/// use variate_core::traits::SampleFloat;
///
/// assert_eq!(<f64 as SampleFloat>::DIGITS10, 15);
/// assert_eq!(<f32 as SampleFloat>::DIGITS10, 6);
///
/// fn half<T: SampleFloat>() -> T {
///     T::constant(0.5)
/// }
/// assert_eq!(half::<f32>(), 0.5_f32);
/// ```
pub trait SampleFloat:
    Float + FloatConst + FromStr + Display + Debug + Send + Sync + 'static
{
    /// Decimal digits that can be represented without change.
    const DIGITS10: usize;

    /// Converts an `f64` literal to this precision, rounding to nearest.
    fn constant(value: f64) -> Self;

    /// Error function at this precision.
    fn erf(self) -> Self;

    /// Complementary error function at this precision.
    fn erfc(self) -> Self;

    /// Decimal places used by the canonical fixed-notation text format.
    #[inline]
    fn text_precision() -> usize {
        Self::DIGITS10 + 1
    }
}

impl SampleFloat for f32 {
    const DIGITS10: usize = f32::DIGITS as usize;

    #[inline]
    fn constant(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn erf(self) -> Self {
        libm::erff(self)
    }

    #[inline]
    fn erfc(self) -> Self {
        libm::erfcf(self)
    }
}

impl SampleFloat for f64 {
    const DIGITS10: usize = f64::DIGITS as usize;

    #[inline]
    fn constant(value: f64) -> Self {
        value
    }

    #[inline]
    fn erf(self) -> Self {
        libm::erf(self)
    }

    #[inline]
    fn erfc(self) -> Self {
        libm::erfc(self)
    }
}
