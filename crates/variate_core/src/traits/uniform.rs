//! Uniform sources feeding inverse-CDF samplers.
//!
//! A [`UniformSource`] is the only source of randomness a distribution sees.
//! Distributions borrow it per call and never store it, so the caller keeps
//! full control over seeding, stream splitting and sharing.
//!
//! Two adapters cover the common cases:
//! - [`RngSource`]: any `rand` engine, drawing from the open interval (0, 1)
//! - [`FnSource`]: any closure returning a uniform value

use rand::distributions::{Distribution, Open01};
use rand::{Rng, RngCore};

/// Sequential generator of uniform draws on `(0, 1)`.
///
/// # Contract
/// - Each call to [`next_uniform`](UniformSource::next_uniform) advances the
///   source by exactly one step.
/// - Given a fixed internal state, the returned sequence is deterministic.
/// - Values approximate independent draws from the uniform distribution.
///   Whether the bounds 0 and 1 can occur is up to the source; consumers must
///   tolerate both.
///
/// # Examples
/// ```
/// use variate_core::traits::UniformSource;
///
/// struct Constant(f64);
///
/// impl UniformSource<f64> for Constant {
///     fn next_uniform(&mut self) -> f64 {
///         self.0
///     }
/// }
///
/// let mut source = Constant(0.25);
/// assert_eq!(source.next_uniform(), 0.25);
/// ```
pub trait UniformSource<T> {
    /// Draws the next uniform value.
    fn next_uniform(&mut self) -> T;
}

impl<T, S: UniformSource<T> + ?Sized> UniformSource<T> for &mut S {
    #[inline]
    fn next_uniform(&mut self) -> T {
        (**self).next_uniform()
    }
}

/// Uniform source backed by a `rand` engine.
///
/// Draws through [`Open01`], so neither 0 nor 1 is ever produced. One call
/// consumes one `u32` (for `f32`) or one `u64` (for `f64`) from the engine.
///
/// # Examples
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use variate_core::traits::{RngSource, UniformSource};
///
/// let mut source = RngSource::new(StdRng::seed_from_u64(42));
/// let u: f64 = source.next_uniform();
/// assert!(u > 0.0 && u < 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    inner: R,
}

impl<R: RngCore> RngSource<R> {
    /// Wraps an engine.
    #[inline]
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns a shared reference to the wrapped engine.
    #[inline]
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Returns a mutable reference to the wrapped engine.
    #[inline]
    pub fn inner_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Unwraps the engine.
    #[inline]
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<T, R> UniformSource<T> for RngSource<R>
where
    R: RngCore,
    Open01: Distribution<T>,
{
    #[inline]
    fn next_uniform(&mut self) -> T {
        self.inner.sample(Open01)
    }
}

/// Uniform source backed by a closure.
///
/// # Examples
/// ```
/// use variate_core::traits::{FnSource, UniformSource};
///
/// let mut calls = 0;
/// let mut source = FnSource::new(|| {
///     calls += 1;
///     0.5_f64
/// });
/// assert_eq!(source.next_uniform(), 0.5);
/// drop(source);
/// assert_eq!(calls, 1);
/// ```
#[derive(Debug, Clone)]
pub struct FnSource<F> {
    draw: F,
}

impl<F> FnSource<F> {
    /// Wraps a closure.
    #[inline]
    pub fn new(draw: F) -> Self {
        Self { draw }
    }
}

impl<T, F: FnMut() -> T> UniformSource<T> for FnSource<F> {
    #[inline]
    fn next_uniform(&mut self) -> T {
        (self.draw)()
    }
}
