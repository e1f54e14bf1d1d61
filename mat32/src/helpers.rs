//! Helpers that are not part of any standard math library.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use num_traits::float::FloatCore;

use crate::rounding::{max, min};

// --- Interpolation and clamping ------------------------------------------------------------------

/// Linear interpolation between `start` and `stop` in proportion to `amount`.
///
/// `amount` is not clamped: values outside [0, 1] extrapolate beyond `start` or `stop`.
///
/// ```
/// assert_eq!(mat32::lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(mat32::lerp(0.0, 10.0, 2.0), 20.0);
/// ```
#[inline]
pub fn lerp(start: f32, stop: f32, amount: f32) -> f32 {
    (1.0 - amount) * start + amount * stop
}

/// Clamps `x` to the closed interval [`a`, `b`].
///
/// The caller must ensure that `a <= b`. If not, the result is `a` or `b` or `x`, but which one
/// is unspecified; unlike [`f32::clamp()`], this never panics.
/// If `x` is NaN, it is returned unchanged.
#[inline]
pub fn clamp(x: f32, a: f32, b: f32) -> f32 {
    if x < a {
        a
    } else if x > b {
        b
    } else {
        x
    }
}

/// Clamps `x` to the closed interval [`a`, `b`], with the same policy as [`clamp()`].
#[inline]
pub fn clamp_int(x: i64, a: i64, b: i64) -> i64 {
    if x < a {
        a
    } else if x > b {
        b
    } else {
        x
    }
}

/// Sets `*a` to [`max(*a, b)`](max).
#[inline]
pub fn set_max(a: &mut f32, b: f32) {
    *a = max(*a, b);
}

/// Sets `*a` to [`min(*a, b)`](min).
#[inline]
pub fn set_min(a: &mut f32, b: f32) {
    *a = min(*a, b);
}

/// Returns the minimum of the two values, excluding any that are ≤ 0.
///
/// If only one of them is positive, returns that one.
/// If neither is positive, returns `a`.
///
/// ```
/// assert_eq!(mat32::min_pos(2.0, 5.0), 2.0);
/// assert_eq!(mat32::min_pos(-3.0, 5.0), 5.0);
/// assert_eq!(mat32::min_pos(-3.0, -5.0), -3.0);
/// ```
#[inline]
pub fn min_pos(a: f32, b: f32) -> f32 {
    match (a > 0.0, b > 0.0) {
        (true, true) => min(a, b),
        (false, true) => b,
        (true, false) | (false, false) => a,
    }
}

/// Returns the maximum of the two values, excluding any that are ≤ 0.
///
/// If only one of them is positive, returns that one.
/// If neither is positive, returns `a`.
#[inline]
pub fn max_pos(a: f32, b: f32) -> f32 {
    match (a > 0.0, b > 0.0) {
        (true, true) => max(a, b),
        (false, true) => b,
        (true, false) | (false, false) => a,
    }
}

// --- Snapping ------------------------------------------------------------------------------------

/// Returns the integer multiple of `modulus` closest to `val`: `round(val / modulus) × modulus`,
/// rounding halfway cases away from zero.
///
/// The quotient passes through a (saturating) 64-bit integer, so `int_multiple(x, 0.0)` is a
/// zero rather than NaN. That zero is signed: `int_multiple(-3.0, 0.0)` is `-0.0` and
/// `int_multiple(3.0, 0.0)` is `+0.0`.
///
/// ```
/// assert_eq!(mat32::int_multiple(7.0, 5.0), 5.0);
/// assert_eq!(mat32::int_multiple(7.5, 5.0), 10.0);
/// ```
#[inline]
pub fn int_multiple(val: f32, modulus: f32) -> f32 {
    let multiple = libm::round(f64::from(val) / f64::from(modulus)) as i64;
    multiple as f32 * modulus
}

/// Returns the smallest integer multiple of `modulus` that is ≥ `val`:
/// `ceil(val / modulus) × modulus`.
///
/// ```
/// assert_eq!(mat32::int_multiple_ge(6.0, 5.0), 10.0);
/// assert_eq!(mat32::int_multiple_ge(5.0, 5.0), 5.0);
/// ```
#[inline]
pub fn int_multiple_ge(val: f32, modulus: f32) -> f32 {
    let multiple = libm::ceil(f64::from(val) / f64::from(modulus)) as i64;
    multiple as f32 * modulus
}

/// `f64` version of [`int_multiple()`].
#[inline]
pub fn int_multiple64(val: f64, modulus: f64) -> f64 {
    let multiple = libm::round(val / modulus) as i64;
    multiple as f64 * modulus
}

// --- Decimal truncation --------------------------------------------------------------------------

/// Rounds `val` to `prec` significant decimal digits.
///
/// This works by formatting the number as decimal text and parsing it again, so it is slow,
/// but exact in the sense that the result is the `f32` nearest to the rounded decimal number.
///
/// * A `prec` of 0 is treated as 1.
/// * A negative `prec` means “as many digits as needed to represent `val` exactly”,
///   so `val` is returned unchanged.
/// * Infinities and NaN are returned unchanged.
///
/// ```
/// assert_eq!(mat32::truncate(3.14159, 3).to_string(), "3.14");
/// assert_eq!(mat32::truncate(1234.5, 2), 1200.0);
/// ```
#[inline]
pub fn truncate(val: f32, prec: i32) -> f32 {
    round_to_digits(val, prec)
}

/// `f64` version of [`truncate()`].
#[inline]
pub fn truncate64(val: f64, prec: i32) -> f64 {
    round_to_digits(val, prec)
}

fn round_to_digits<T>(val: T, prec: i32) -> T
where
    T: FloatCore + fmt::LowerExp + FromStr,
    T::Err: fmt::Display,
{
    if prec < 0 || !val.is_finite() {
        return val;
    }

    // One digit before the point in scientific notation, so `prec - 1` after it.
    // 17 significant digits identify any `f64` (9 any `f32`), and the format precision must
    // fit in a `u16`.
    let digits_after_point = prec.clamp(1, 17) as usize - 1;
    let text: String = format!("{val:.digits_after_point$e}");
    match text.parse::<T>() {
        Ok(rounded) => rounded,
        Err(error) => {
            // Formatting a finite float always produces parseable text.
            log::warn!("could not reparse {text:?} while truncating: {error}");
            val
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString as _;
    use rand::{Rng as _, SeedableRng as _};

    #[test]
    fn clamp_cases() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp(0.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(10.0, 0.0, 10.0), 10.0);
        assert!(clamp(f32::NAN, 0.0, 10.0).is_nan());
    }

    #[test]
    fn clamp_inverted_bounds_does_not_panic() {
        // Unspecified result, but it must be one of the inputs.
        let result = clamp(5.0, 10.0, 0.0);
        assert!([5.0, 10.0, 0.0].contains(&result));
    }

    #[test]
    fn clamp_int_cases() {
        assert_eq!(clamp_int(5, 0, 10), 5);
        assert_eq!(clamp_int(-1, 0, 10), 0);
        assert_eq!(clamp_int(11, 0, 10), 10);
        assert_eq!(clamp_int(i64::MIN, -3, 3), -3);
        assert_eq!(clamp_int(i64::MAX, -3, 3), 3);
    }

    #[test]
    fn clamp_random() {
        let mut rng = rand_xoshiro::Xoshiro256Plus::seed_from_u64(0);
        for _ in 0..1000 {
            let x: f32 = rng.random_range(-100.0..100.0);
            let a: f32 = rng.random_range(-50.0..50.0);
            let b: f32 = a + rng.random_range(0.0f32..50.0);
            let c = clamp(x, a, b);
            assert!(a <= c && c <= b, "clamp({x}, {a}, {b}) = {c}");
            if a <= x && x <= b {
                assert_eq!(c, x);
            }
        }
    }

    #[test]
    fn lerp_cases() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 2.0), 20.0);
        assert_eq!(lerp(0.0, 10.0, -1.0), -10.0);
        assert_eq!(lerp(3.0, 7.0, 0.0), 3.0);
        assert_eq!(lerp(3.0, 7.0, 1.0), 7.0);
    }

    #[test]
    fn set_max_min() {
        let mut a = 1.0;
        set_max(&mut a, 3.0);
        assert_eq!(a, 3.0);
        set_max(&mut a, 2.0);
        assert_eq!(a, 3.0);
        set_min(&mut a, -1.0);
        assert_eq!(a, -1.0);
        set_min(&mut a, 0.0);
        assert_eq!(a, -1.0);
    }

    #[test]
    fn min_max_pos() {
        assert_eq!(min_pos(2.0, 5.0), 2.0);
        assert_eq!(min_pos(5.0, 2.0), 2.0);
        assert_eq!(min_pos(-3.0, 5.0), 5.0);
        assert_eq!(min_pos(5.0, -3.0), 5.0);
        assert_eq!(min_pos(-3.0, -5.0), -3.0);
        assert_eq!(min_pos(0.0, -5.0), 0.0);
        assert_eq!(max_pos(2.0, 5.0), 5.0);
        assert_eq!(max_pos(-3.0, 5.0), 5.0);
        assert_eq!(max_pos(5.0, -3.0), 5.0);
        assert_eq!(max_pos(-5.0, -3.0), -5.0);
        assert_eq!(max_pos(0.0, 0.0), 0.0);
    }

    #[test]
    fn int_multiples() {
        assert_eq!(int_multiple(7.0, 5.0), 5.0);
        assert_eq!(int_multiple(8.0, 5.0), 10.0);
        assert_eq!(int_multiple(-7.5, 5.0), -10.0);
        assert_eq!(int_multiple(0.26, 0.25), 0.25);
        assert_eq!(int_multiple(3.0, 0.0), 0.0);
        assert_eq!(int_multiple(3.0, 0.0).to_bits(), 0.0f32.to_bits());
        assert_eq!(int_multiple(-3.0, 0.0).to_bits(), (-0.0f32).to_bits());
        assert_eq!(int_multiple64(-3.0, 0.0).to_bits(), (-0.0f64).to_bits());
        assert_eq!(int_multiple_ge(6.0, 5.0), 10.0);
        assert_eq!(int_multiple_ge(5.0, 5.0), 5.0);
        assert_eq!(int_multiple_ge(-6.0, 5.0), -5.0);
        assert_eq!(int_multiple64(7.0, 5.0), 5.0);
        assert_eq!(int_multiple64(12.5, 5.0), 15.0);
    }

    #[test]
    fn truncate_significant_digits() {
        assert_eq!(truncate(3.14159, 3).to_string(), "3.14");
        assert_eq!(truncate(3.14159, 1), 3.0);
        assert_eq!(truncate(3.14159, 0), 3.0);
        assert_eq!(truncate(0.000123456, 2), 0.00012);
        assert_eq!(truncate(-98765.0, 3), -98800.0);
        assert_eq!(truncate64(3.14159, 3), 3.14);
        assert_eq!(truncate64(core::f64::consts::SQRT_2, 5), 1.4142);
    }

    #[test]
    fn truncate_passes_through() {
        assert_eq!(truncate(3.14159, -1), 3.14159);
        assert_eq!(truncate64(0.1, -1), 0.1);
        assert_eq!(truncate(f32::INFINITY, 3), f32::INFINITY);
        assert!(truncate(f32::NAN, 3).is_nan());
        assert_eq!(truncate(-0.0, 3).to_bits(), (-0.0f32).to_bits());
        // More digits than f32 has changes nothing.
        assert_eq!(truncate(0.1, 20), 0.1);
    }

    #[test]
    fn truncate_huge_precision_does_not_panic() {
        assert_eq!(truncate(3.14159, 65_535), 3.14159);
        assert_eq!(truncate(3.14159, 65_537), 3.14159);
        assert_eq!(truncate(-1.0e-30, i32::MAX), -1.0e-30);
        assert_eq!(truncate64(0.1, 65_537), 0.1);
        assert_eq!(truncate64(0.1, i32::MAX), 0.1);
        assert_eq!(truncate64(f64::MAX, i32::MAX), f64::MAX);
        assert_eq!(truncate64(f64::MIN_POSITIVE, 18), f64::MIN_POSITIVE);
    }

    #[test]
    fn truncate_is_idempotent() {
        let mut rng = rand_xoshiro::Xoshiro256Plus::seed_from_u64(0);
        for _ in 0..1000 {
            let x: f32 = rng.random_range(-1e6..1e6);
            let prec = rng.random_range(1..8);
            let once = truncate(x, prec);
            assert_eq!(truncate(once, prec), once, "truncate({x}, {prec})");
        }
    }
}
