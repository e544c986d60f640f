//! Normal distribution sampled by inverse transform.

use std::fmt;
use std::str::FromStr;

use rand::distributions::Open01;
use rand::Rng;
use tracing::{debug, trace};
use variate_core::math::special::{inv_phi, phi, FRAC_1_SQRT_2PI};
use variate_core::text::Scanner;
use variate_core::traits::{ContinuousDistribution, SampleFloat, UniformSource};
use variate_core::types::ParseError;

use super::params::NormalParams;

/// Normal (Gaussian) distribution N(μ, σ²).
///
/// Variates are produced by inverse-transform sampling: each call to
/// [`sample`](NormalDist::sample) draws exactly one uniform value `u` and
/// returns `icdf(u)`. The distribution holds nothing but its
/// [`NormalParams`], so it is `Copy`, and sampling through `&self` can run
/// from many threads at once as long as each thread brings its own source.
///
/// # Domain
/// Parameters are not validated. σ <= 0 or a NaN parameter yields NaN or
/// infinite results rather than an error. Use
/// [`NormalParams::try_new`] where validation is required.
///
/// # Text Format
/// `[normal (<mu> <sigma>)]`, leading whitespace accepted when parsing.
///
/// # Examples
/// ```
/// use variate_core::traits::FnSource;
/// use variate_models::normal::NormalDist;
///
/// let normal = NormalDist::new(6.0_f64, 2.0);
///
/// // Φ⁻¹(0.5) = 0, so the median draw maps to μ
/// let mut source = FnSource::new(|| 0.5_f64);
/// assert_eq!(normal.sample(&mut source), 6.0);
///
/// assert!((normal.cdf(6.0) - 0.5).abs() < 1e-15);
/// assert_eq!(normal.icdf(0.0), f64::NEG_INFINITY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NormalDist<T> {
    params: NormalParams<T>,
}

impl<T: SampleFloat> NormalDist<T> {
    /// Creates N(μ, σ²) without validation.
    #[inline]
    pub const fn new(mu: T, sigma: T) -> Self {
        Self::from_params(NormalParams::new(mu, sigma))
    }

    /// Creates a distribution owning `params`.
    #[inline]
    pub const fn from_params(params: NormalParams<T>) -> Self {
        Self { params }
    }

    /// Resets internal state.
    ///
    /// The normal distribution carries no state between draws, so this does
    /// nothing; it exists for code written against the whole family.
    #[inline]
    pub fn reset(&mut self) {}

    /// Draws one variate, consuming exactly one value from `source`.
    #[inline]
    pub fn sample<S: UniformSource<T>>(&self, source: &mut S) -> T {
        self.icdf(source.next_uniform())
    }

    /// Draws one variate from N(`params`) without touching `self`.
    ///
    /// # Examples
    /// ```
    /// use variate_core::traits::FnSource;
    /// use variate_models::normal::{NormalDist, NormalParams};
    ///
    /// let normal = NormalDist::<f64>::default();
    /// let mut source = FnSource::new(|| 0.5_f64);
    /// let x = normal.sample_with(&mut source, &NormalParams::new(-3.0, 1.0));
    /// assert_eq!(x, -3.0);
    /// assert_eq!(normal, NormalDist::default());
    /// ```
    #[inline]
    pub fn sample_with<S: UniformSource<T>>(&self, source: &mut S, params: &NormalParams<T>) -> T {
        Self::from_params(*params).sample(source)
    }

    /// Fills `buffer` with variates, consuming exactly `buffer.len()` draws.
    ///
    /// Zero allocation; the buffer is owned by the caller.
    #[inline]
    pub fn fill<S: UniformSource<T>>(&self, source: &mut S, buffer: &mut [T]) {
        for value in buffer.iter_mut() {
            *value = self.sample(source);
        }
    }

    /// Lower bound of the support: always -∞.
    #[inline]
    pub fn min(&self) -> T {
        T::neg_infinity()
    }

    /// Upper bound of the support: always +∞.
    #[inline]
    pub fn max(&self) -> T {
        T::infinity()
    }

    /// Probability density.
    ///
    /// # Mathematical Definition
    /// f(x) = 1/(σ√(2π)) · exp(-(x-μ)²/(2σ²))
    #[inline]
    pub fn pdf(&self, x: T) -> T {
        let sigma = self.params.sigma();
        let t = x - self.params.mu();
        T::constant(FRAC_1_SQRT_2PI) / sigma
            * (t * t / (T::constant(-2.0) * sigma * sigma)).exp()
    }

    /// Cumulative distribution function.
    ///
    /// # Mathematical Definition
    /// F(x) = Φ((x-μ)/σ)
    #[inline]
    pub fn cdf(&self, x: T) -> T {
        phi((x - self.params.mu()) / self.params.sigma())
    }

    /// Inverse cumulative distribution function.
    ///
    /// # Mathematical Definition
    /// F⁻¹(p) = Φ⁻¹(p)·σ + μ
    ///
    /// `icdf(0) = -∞` and `icdf(1) = +∞`; `p` outside `[0, 1]` yields NaN.
    #[inline]
    pub fn icdf(&self, p: T) -> T {
        inv_phi(p) * self.params.sigma() + self.params.mu()
    }

    /// Current parameters.
    #[inline]
    pub fn params(&self) -> NormalParams<T> {
        self.params
    }

    /// Replaces both parameters at once.
    #[inline]
    pub fn set_params(&mut self, params: NormalParams<T>) {
        self.params = params;
    }

    /// Mean μ.
    #[inline]
    pub fn mu(&self) -> T {
        self.params.mu()
    }

    /// Replaces μ.
    #[inline]
    pub fn set_mu(&mut self, mu: T) {
        self.params.set_mu(mu);
    }

    /// Standard deviation σ.
    #[inline]
    pub fn sigma(&self) -> T {
        self.params.sigma()
    }

    /// Replaces σ.
    #[inline]
    pub fn set_sigma(&mut self, sigma: T) {
        self.params.set_sigma(sigma);
    }

    /// Equal iff the parameters are equal; same as `==`.
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    /// Canonical text form `[normal (<mu> <sigma>)]`.
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    /// Reads one distribution block at the scanner position, skipping
    /// leading whitespace.
    ///
    /// On failure the scanner is left where it was.
    ///
    /// # Errors
    /// Any [`ParseError`] from the prefix, the parameter block or the
    /// closing bracket.
    pub fn scan(scanner: &mut Scanner<'_>) -> Result<Self, ParseError> {
        let mut cursor = scanner.clone();
        cursor.skip_whitespace();
        cursor.expect("[normal ")?;
        let params = NormalParams::scan(&mut cursor)?;
        cursor.expect("]")?;
        *scanner = cursor;
        Ok(Self::from_params(params))
    }

    /// Parses the canonical text form; the whole input must be consumed.
    ///
    /// # Errors
    /// Any [`ParseError`]; trailing characters yield
    /// [`ParseError::TrailingInput`].
    ///
    /// # Examples
    /// ```
    /// use variate_models::normal::NormalDist;
    ///
    /// let d = NormalDist::<f64>::parse("  [normal (6.000000000000000 2.000000000000000)]").unwrap();
    /// assert_eq!(d, NormalDist::new(6.0, 2.0));
    /// ```
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut scanner = Scanner::new(text);
        Self::scan(&mut scanner)
            .and_then(|dist| scanner.finish().map(|()| dist))
            .map_err(|err| {
                debug!(offset = err.offset(), error = %err, "rejected normal distribution text");
                err
            })
    }

    /// Parses one distribution block from the front of `text` and returns it
    /// together with the unread remainder.
    ///
    /// # Errors
    /// Any [`ParseError`] from the leading block.
    pub fn parse_prefix(text: &str) -> Result<(Self, &str), ParseError> {
        let mut scanner = Scanner::new(text);
        match Self::scan(&mut scanner) {
            Ok(dist) => Ok((dist, scanner.rest())),
            Err(err) => {
                debug!(offset = err.offset(), error = %err, "rejected normal distribution text");
                Err(err)
            }
        }
    }

    /// Replaces `self` with the distribution parsed from `text`.
    ///
    /// On failure `self` is left unchanged.
    ///
    /// # Errors
    /// Same as [`parse`](NormalDist::parse).
    pub fn read_from(&mut self, text: &str) -> Result<(), ParseError> {
        let parsed = Self::parse(text)?;
        trace!(params = %parsed.params, "normal distribution replaced");
        self.set_params(parsed.params);
        Ok(())
    }
}

impl<T: SampleFloat> Default for NormalDist<T> {
    /// Standard normal N(0, 1).
    fn default() -> Self {
        Self::from_params(NormalParams::default())
    }
}

impl<T: SampleFloat> From<NormalParams<T>> for NormalDist<T> {
    fn from(params: NormalParams<T>) -> Self {
        Self::from_params(params)
    }
}

impl<T: SampleFloat> fmt::Display for NormalDist<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[normal {}]", self.params)
    }
}

impl<T: SampleFloat> FromStr for NormalDist<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        Self::parse(s)
    }
}

/// Sampling straight from a `rand` engine: one `Open01` draw per variate.
///
/// Use `rng.sample(dist)`; the inherent [`NormalDist::sample`] takes a
/// [`UniformSource`] instead.
impl<T> rand::distributions::Distribution<T> for NormalDist<T>
where
    T: SampleFloat,
    Open01: rand::distributions::Distribution<T>,
{
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        self.icdf(rng.sample(Open01))
    }
}

impl<T: SampleFloat> ContinuousDistribution<T> for NormalDist<T> {
    type Params = NormalParams<T>;

    fn reset(&mut self) {
        NormalDist::reset(self)
    }

    fn sample<S: UniformSource<T>>(&self, source: &mut S) -> T {
        NormalDist::sample(self, source)
    }

    fn sample_with<S: UniformSource<T>>(&self, source: &mut S, params: &NormalParams<T>) -> T {
        NormalDist::sample_with(self, source, params)
    }

    fn fill<S: UniformSource<T>>(&self, source: &mut S, buffer: &mut [T]) {
        NormalDist::fill(self, source, buffer)
    }

    fn min(&self) -> T {
        NormalDist::min(self)
    }

    fn max(&self) -> T {
        NormalDist::max(self)
    }

    fn pdf(&self, x: T) -> T {
        NormalDist::pdf(self, x)
    }

    fn cdf(&self, x: T) -> T {
        NormalDist::cdf(self, x)
    }

    fn icdf(&self, p: T) -> T {
        NormalDist::icdf(self, p)
    }

    fn params(&self) -> NormalParams<T> {
        NormalDist::params(self)
    }

    fn set_params(&mut self, params: NormalParams<T>) {
        NormalDist::set_params(self, params)
    }
}
