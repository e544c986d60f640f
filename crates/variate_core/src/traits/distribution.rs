//! Common interface of the continuous distribution family.
//!
//! Generic drivers (histogramming, goodness-of-fit checks, simulation loops)
//! are written once against [`ContinuousDistribution`] and work with every
//! member of the family. Stateless members implement
//! [`reset`](ContinuousDistribution::reset) as a no-op.
//!
//! ## Important
//! Use static dispatch only. Sampling runs inside tight kernels and must not
//! go through `dyn` vtables.

use super::float::SampleFloat;
use super::uniform::UniformSource;

/// A continuous probability distribution sampled by inverse transform.
///
/// # Contract
/// - [`sample`](ContinuousDistribution::sample) consumes exactly one draw
///   from the source and returns `icdf(u)`.
/// - Sampling reads the parameters but never mutates them.
/// - `pdf`, `cdf` and `icdf` never fail; out-of-domain inputs yield NaN or
///   infinities.
///
/// # Examples
/// ```
/// use variate_core::traits::{ContinuousDistribution, FnSource, SampleFloat, UniformSource};
///
/// /// Uniform distribution on [0, width).
/// #[derive(Clone, Copy)]
/// struct Stretch<T> {
///     width: T,
/// }
///
/// impl<T: SampleFloat> ContinuousDistribution<T> for Stretch<T> {
///     type Params = T;
///
///     fn reset(&mut self) {}
///     fn sample<S: UniformSource<T>>(&self, source: &mut S) -> T {
///         self.icdf(source.next_uniform())
///     }
///     fn sample_with<S: UniformSource<T>>(&self, source: &mut S, width: &T) -> T {
///         Stretch { width: *width }.sample(source)
///     }
///     fn min(&self) -> T { T::zero() }
///     fn max(&self) -> T { self.width }
///     fn pdf(&self, _x: T) -> T { T::one() / self.width }
///     fn cdf(&self, x: T) -> T { x / self.width }
///     fn icdf(&self, p: T) -> T { p * self.width }
///     fn params(&self) -> T { self.width }
///     fn set_params(&mut self, width: T) { self.width = width; }
/// }
///
/// let d = Stretch { width: 4.0_f64 };
/// let mut source = FnSource::new(|| 0.25_f64);
/// assert_eq!(d.sample(&mut source), 1.0);
/// ```
pub trait ContinuousDistribution<T: SampleFloat> {
    /// Parameter object fully describing an instance.
    type Params: Copy + PartialEq;

    /// Resets internal state; a no-op for stateless distributions.
    fn reset(&mut self);

    /// Draws one variate using exactly one value from `source`.
    fn sample<S: UniformSource<T>>(&self, source: &mut S) -> T;

    /// Draws one variate as if from a distribution built from `params`.
    ///
    /// The receiver's own parameters are left untouched.
    fn sample_with<S: UniformSource<T>>(&self, source: &mut S, params: &Self::Params) -> T;

    /// Fills `buffer` with variates, consuming exactly `buffer.len()` draws.
    #[inline]
    fn fill<S: UniformSource<T>>(&self, source: &mut S, buffer: &mut [T]) {
        for value in buffer.iter_mut() {
            *value = self.sample(source);
        }
    }

    /// Lower bound of the support.
    fn min(&self) -> T;

    /// Upper bound of the support.
    fn max(&self) -> T;

    /// Probability density at `x`.
    fn pdf(&self, x: T) -> T;

    /// Cumulative distribution function at `x`.
    fn cdf(&self, x: T) -> T;

    /// Inverse cumulative distribution function at probability `p`.
    fn icdf(&self, p: T) -> T;

    /// Returns the current parameters.
    fn params(&self) -> Self::Params;

    /// Replaces the parameters as a unit.
    fn set_params(&mut self, params: Self::Params);
}
