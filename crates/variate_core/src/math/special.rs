//! Special functions for the normal distribution.
//!
//! This module provides:
//! - `erf`, `erfc`: error function and its complement
//! - `phi`: standard normal cumulative distribution function Φ
//! - `inv_phi`: inverse of Φ
//!
//! All functions are generic over [`SampleFloat`] and never fail: NaN inputs
//! propagate, and `inv_phi` maps probabilities outside `[0, 1]` to NaN.
//!
//! ## Accuracy
//!
//! `erf`/`erfc` come from `libm` (`erf`/`erfc` for `f64`, `erff`/`erfcf`
//! for `f32`) and are accurate to within an ulp.

use crate::traits::SampleFloat;

/// 1 / sqrt(2π)
pub const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// sqrt(2π)
pub const SQRT_2PI: f64 = 2.506_628_274_631_000_5;

/// Φ⁻¹(3/4): below -Q and above Q the tails are evaluated through `erfc`.
const UPPER_QUARTILE: f64 = 0.674_489_750_196_081_7;

/// Acklam rational approximation, central region numerator.
const ACKLAM_A: [f64; 6] = [
    -3.969_683_028_665_376e1,
    2.209_460_984_245_205e2,
    -2.759_285_104_469_687e2,
    1.383_577_518_672_690e2,
    -3.066_479_806_614_716e1,
    2.506_628_277_459_239,
];

/// Acklam rational approximation, central region denominator.
const ACKLAM_B: [f64; 5] = [
    -5.447_609_879_822_406e1,
    1.615_858_368_580_409e2,
    -1.556_989_798_598_866e2,
    6.680_131_188_771_972e1,
    -1.328_068_155_288_572e1,
];

/// Acklam rational approximation, tail numerator.
const ACKLAM_C: [f64; 6] = [
    -7.784_894_002_430_293e-3,
    -3.223_964_580_411_365e-1,
    -2.400_758_277_161_838,
    -2.549_732_539_343_734,
    4.374_664_141_464_968,
    2.938_163_982_698_783,
];

/// Acklam rational approximation, tail denominator.
const ACKLAM_D: [f64; 4] = [
    7.784_695_709_041_462e-3,
    3.224_671_290_700_398e-1,
    2.445_134_137_142_996,
    3.754_408_661_907_416,
];

/// Boundary between the lower tail and the central region.
const ACKLAM_P_LOW: f64 = 0.024_25;

/// Evaluates `coefficients` as a polynomial in `x` (highest degree first).
#[inline]
fn horner<T: SampleFloat>(coefficients: &[f64], x: T) -> T {
    coefficients
        .iter()
        .fold(T::zero(), |acc, &c| acc * x + T::constant(c))
}

/// Error function.
///
/// # Mathematical Definition
/// erf(x) = (2/√π) ∫₀ˣ e^(-t²) dt
///
/// # Examples
/// ```
/// use variate_core::math::special::erf;
///
/// assert_eq!(erf(0.0_f64), 0.0);
/// assert!((erf(1.0_f64) - 0.842_700_792_949_714_9).abs() < 1e-15);
/// assert_eq!(erf(f64::INFINITY), 1.0);
/// ```
pub fn erf<T: SampleFloat>(x: T) -> T {
    x.erf()
}

/// Complementary error function.
///
/// # Mathematical Definition
/// erfc(x) = 1 - erf(x) = (2/√π) ∫ₓ^∞ e^(-t²) dt
///
/// Keeps full relative precision in the upper tail, where `1 - erf(x)` would
/// round to zero.
///
/// # Examples
/// ```
/// use variate_core::math::special::erfc;
///
/// assert_eq!(erfc(0.0_f64), 1.0);
/// let tail = erfc(10.0_f64);
/// assert!((tail / 2.088_487_583_762_545e-45 - 1.0).abs() < 1e-14);
/// assert_eq!(erfc(f64::NEG_INFINITY), 2.0);
/// ```
pub fn erfc<T: SampleFloat>(x: T) -> T {
    x.erfc()
}

/// Standard normal cumulative distribution function Φ.
///
/// # Mathematical Definition
/// Φ(x) = P(X <= x) for X ~ N(0, 1) = (1/2) erfc(-x/√2)
///
/// Within the interquartile range Φ is evaluated through `erf`; beyond it
/// through `erfc` on the near tail, so that small tail probabilities keep
/// their relative precision.
///
/// # Properties
/// - Monotone non-decreasing with range `[0, 1]`
/// - Φ(-∞) = 0, Φ(0) = 1/2, Φ(+∞) = 1
///
/// # Examples
/// ```
/// use variate_core::math::special::phi;
///
/// assert_eq!(phi(0.0_f64), 0.5);
/// assert!((phi(-1.0_f64) - 0.158_655_253_931_457_05).abs() < 1e-15);
/// assert!((phi(-8.0_f64) / 6.220_960_574_271_78e-16 - 1.0).abs() < 1e-12);
/// ```
pub fn phi<T: SampleFloat>(x: T) -> T {
    let quartile = T::constant(UPPER_QUARTILE);
    let half = T::constant(0.5);
    let z = x * T::FRAC_1_SQRT_2();
    if x < -quartile {
        half * erfc(-z)
    } else if x > quartile {
        T::one() - half * erfc(z)
    } else {
        half + half * erf(z)
    }
}

/// Acklam's rational approximation to Φ⁻¹ (relative error < 1.15e-9).
fn inv_phi_approx<T: SampleFloat>(p: T) -> T {
    let zero = T::zero();
    let one = T::one();
    if !(p >= zero && p <= one) {
        return T::nan();
    }
    if p == zero {
        return T::neg_infinity();
    }
    if p == one {
        return T::infinity();
    }

    let p_low = T::constant(ACKLAM_P_LOW);
    let minus_two = T::constant(-2.0);
    if p < p_low {
        let q = (minus_two * p.ln()).sqrt();
        horner(&ACKLAM_C, q) / (horner(&ACKLAM_D, q) * q + one)
    } else if p < one - p_low {
        let q = p - T::constant(0.5);
        let r = q * q;
        horner(&ACKLAM_A, r) * q / (horner(&ACKLAM_B, r) * r + one)
    } else {
        let q = (minus_two * (-p).ln_1p()).sqrt();
        -horner(&ACKLAM_C, q) / (horner(&ACKLAM_D, q) * q + one)
    }
}

/// Inverse of the standard normal cumulative distribution function Φ⁻¹.
///
/// Starts from Acklam's rational approximation and applies one Halley step
/// against [`phi`], which brings `f64` results to machine precision.
///
/// # Boundary Behaviour
/// - `inv_phi(0) = -∞`, `inv_phi(1) = +∞`
/// - `p` outside `[0, 1]` or NaN yields NaN
///
/// # Examples
/// ```
/// use variate_core::math::special::inv_phi;
///
/// assert_eq!(inv_phi(0.5_f64), 0.0);
/// assert!((inv_phi(0.975_f64) - 1.959_963_984_540_054).abs() < 1e-13);
/// assert_eq!(inv_phi(1.0_f64), f64::INFINITY);
/// assert!(inv_phi(1.5_f64).is_nan());
/// ```
pub fn inv_phi<T: SampleFloat>(p: T) -> T {
    let y = inv_phi_approx(p);
    if !y.is_finite() {
        return y;
    }
    let half = T::constant(0.5);
    let e = phi(y) - p;
    let u = e * T::constant(SQRT_2PI) * (y * y * half).exp();
    if u.is_finite() {
        y - u / (T::one() + y * u * half)
    } else {
        y
    }
}
