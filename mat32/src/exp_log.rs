//! Exponentials, logarithms, powers and roots, and access to the binary exponent.

// --- Exponential ---------------------------------------------------------------------------------

/// Returns *e*<sup>`x`</sup>.
///
/// Special cases are:
///
/// * `exp(+Inf) = +Inf`
/// * `exp(-Inf) = 0`
/// * `exp(NaN) = NaN`
///
/// Very large values overflow to +Inf, and very negative values underflow to 0.
#[inline]
pub fn exp(x: f32) -> f32 {
    libm::expf(x)
}

/// Returns 2<sup>`x`</sup>.
///
/// Special cases are the same as [`exp()`].
#[inline]
pub fn exp2(x: f32) -> f32 {
    libm::exp2f(x)
}

/// Returns *e*<sup>`x`</sup> − 1, accurately even when `x` is near zero.
///
/// Special cases are:
///
/// * `expm1(+Inf) = +Inf`
/// * `expm1(-Inf) = -1`
/// * `expm1(±0) = ±0`
/// * `expm1(NaN) = NaN`
#[inline]
pub fn expm1(x: f32) -> f32 {
    libm::expm1f(x)
}

// --- Logarithmic ---------------------------------------------------------------------------------

/// Returns the natural logarithm of `x`.
///
/// Special cases are:
///
/// * `log(+Inf) = +Inf`
/// * `log(0) = -Inf`
/// * `log(x < 0) = NaN`
/// * `log(NaN) = NaN`
#[inline]
pub fn log(x: f32) -> f32 {
    libm::logf(x)
}

/// Returns the base-2 logarithm of `x`. Special cases are the same as [`log()`].
#[inline]
pub fn log2(x: f32) -> f32 {
    libm::log2f(x)
}

/// Returns the base-10 logarithm of `x`. Special cases are the same as [`log()`].
#[inline]
pub fn log10(x: f32) -> f32 {
    libm::log10f(x)
}

/// Returns the natural logarithm of 1 + `x`, accurately even when `x` is near zero.
///
/// Special cases are:
///
/// * `log1p(+Inf) = +Inf`
/// * `log1p(±0) = ±0`
/// * `log1p(-1) = -Inf`
/// * `log1p(x < -1) = NaN`
/// * `log1p(NaN) = NaN`
#[inline]
pub fn log1p(x: f32) -> f32 {
    libm::log1pf(x)
}

/// Returns the binary exponent of `x`, as a float.
///
/// Special cases are:
///
/// * `logb(±Inf) = +Inf`
/// * `logb(0) = -Inf`
/// * `logb(NaN) = NaN`
#[inline]
pub fn logb(x: f32) -> f32 {
    if x.is_infinite() {
        f32::INFINITY
    } else if x == 0.0 {
        f32::NEG_INFINITY
    } else if x.is_nan() {
        x
    } else {
        libm::ilogbf(x) as f32
    }
}

/// Returns the binary exponent of `x` as an integer value, converted to `f32`.
///
/// Special cases are:
///
/// * `ilogb(±Inf) = i32::MAX`
/// * `ilogb(0) = i32::MIN`
/// * `ilogb(NaN) = i32::MAX`
#[inline]
pub fn ilogb(x: f32) -> f32 {
    let exponent = if x == 0.0 {
        i32::MIN
    } else if !x.is_finite() {
        i32::MAX
    } else {
        libm::ilogbf(x)
    };
    exponent as f32
}

/// Breaks `f` into a normalized fraction and an integral power of two, returning
/// `(frac, exp)` such that `f == frac × 2^exp` and the absolute value of `frac` is in the
/// interval [½, 1).
///
/// Special cases are:
///
/// * `frexp(±0) = (±0, 0)`
/// * `frexp(±Inf) = (±Inf, 0)`
/// * `frexp(NaN) = (NaN, 0)`
#[inline]
pub fn frexp(f: f32) -> (f32, i32) {
    if f == 0.0 || !f.is_finite() {
        return (f, 0);
    }
    libm::frexpf(f)
}

/// The inverse of [`frexp()`]: returns `frac × 2^exp`.
///
/// Special cases are:
///
/// * `ldexp(±0, exp) = ±0`
/// * `ldexp(±Inf, exp) = ±Inf`
/// * `ldexp(NaN, exp) = NaN`
#[inline]
pub fn ldexp(frac: f32, exp: i32) -> f32 {
    libm::ldexp(f64::from(frac), exp) as f32
}

// --- Powers and roots ----------------------------------------------------------------------------

/// Returns `x` raised to the power `y`.
///
/// Special cases are (in order):
///
/// * `pow(x, ±0) = 1` for any `x`
/// * `pow(1, y) = 1` for any `y`
/// * `pow(x, 1) = x` for any `x`
/// * `pow(NaN, y) = NaN`
/// * `pow(x, NaN) = NaN`
/// * `pow(±0, y) = ±Inf` for `y` an odd integer < 0
/// * `pow(±0, -Inf) = +Inf`
/// * `pow(±0, +Inf) = +0`
/// * `pow(±0, y) = +Inf` for finite `y` < 0 and not an odd integer
/// * `pow(±0, y) = ±0` for `y` an odd integer > 0
/// * `pow(±0, y) = +0` for finite `y` > 0 and not an odd integer
/// * `pow(-1, ±Inf) = 1`
/// * `pow(x, +Inf) = +Inf` for |`x`| > 1
/// * `pow(x, -Inf) = +0` for |`x`| > 1
/// * `pow(x, +Inf) = +0` for |`x`| < 1
/// * `pow(x, -Inf) = +Inf` for |`x`| < 1
/// * `pow(+Inf, y) = +Inf` for `y` > 0
/// * `pow(+Inf, y) = +0` for `y` < 0
/// * `pow(-Inf, y) = pow(-0, -y)`
/// * `pow(x, y) = NaN` for finite `x` < 0 and finite non-integer `y`
#[inline]
pub fn pow(x: f32, y: f32) -> f32 {
    libm::pow(f64::from(x), f64::from(y)) as f32
}

/// Returns 10<sup>`n`</sup>.
///
/// Special cases are:
///
/// * `pow10(n) = 0` for `n < -323`
/// * `pow10(n) = +Inf` for `n > 308`
///
/// Anything outside roughly −45 to 38 is also 0 or +Inf, after rounding to `f32`.
#[inline]
pub fn pow10(n: i32) -> f32 {
    if n < -323 {
        0.0
    } else if n > 308 {
        f32::INFINITY
    } else {
        libm::pow(10.0, f64::from(n)) as f32
    }
}

/// Returns the square root of `x`.
///
/// Special cases are:
///
/// * `sqrt(+Inf) = +Inf`
/// * `sqrt(±0) = ±0`
/// * `sqrt(x < 0) = NaN`
/// * `sqrt(NaN) = NaN`
#[inline]
pub fn sqrt(x: f32) -> f32 {
    libm::sqrtf(x)
}

/// Returns the cube root of `x`.
///
/// Special cases are:
///
/// * `cbrt(±0) = ±0`
/// * `cbrt(±Inf) = ±Inf`
/// * `cbrt(NaN) = NaN`
#[inline]
pub fn cbrt(x: f32) -> f32 {
    libm::cbrtf(x)
}

/// Returns √(`p`² + `q`²), avoiding unnecessary overflow and underflow.
///
/// Special cases are:
///
/// * `hypot(±Inf, q) = +Inf`
/// * `hypot(p, ±Inf) = +Inf`
/// * `hypot(NaN, q) = NaN`
/// * `hypot(p, NaN) = NaN`
#[inline]
pub fn hypot(p: f32, q: f32) -> f32 {
    // Infinity wins over NaN, which the C function does not promise.
    if p.is_infinite() || q.is_infinite() {
        return f32::INFINITY;
    }
    libm::hypot(f64::from(p), f64::from(q)) as f32
}

/// Returns `x × y + z`, computed with only one rounding.
///
/// The product and sum are computed exactly in `f64` arithmetic and then rounded to `f32`.
#[inline]
pub fn fma(x: f32, y: f32, z: f32) -> f32 {
    libm::fma(f64::from(x), f64::from(y), f64::from(z)) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::E;

    fn close(actual: f32, expected: f32) -> bool {
        (actual - expected).abs() <= 4.0 * f32::EPSILON * expected.abs().max(1.0)
    }

    #[test]
    fn exp_log_agree() {
        assert_eq!(exp(0.0), 1.0);
        assert!((exp(1.0) - E).abs() <= f32::EPSILON * E);
        assert!(close(exp2(10.0), 1024.0));
        assert!(close(log2(1024.0), 10.0));
        assert!(close(log10(1000.0), 3.0));
        assert!((log(E) - 1.0).abs() <= f32::EPSILON);
        assert!((log1p(expm1(0.25)) - 0.25).abs() < 1e-7);
    }

    #[test]
    fn frexp_ldexp() {
        assert_eq!(frexp(8.0), (0.5, 4));
        assert_eq!(frexp(-3.0), (-0.75, 2));
        assert_eq!(ldexp(0.5, 4), 8.0);
        assert_eq!(ldexp(-0.75, 2), -3.0);

        // subnormals are normalized
        let (frac, exponent) = frexp(crate::SMALLEST_NONZERO_FLOAT32);
        assert_eq!((frac, exponent), (0.5, -148));
        assert_eq!(ldexp(frac, exponent), crate::SMALLEST_NONZERO_FLOAT32);
    }

    #[test]
    fn binary_exponent() {
        assert_eq!(logb(8.0), 3.0);
        assert_eq!(logb(0.1), -4.0);
        assert_eq!(ilogb(8.0), 3.0);
        assert_eq!(ilogb(-0.1), -4.0);
        assert_eq!(ilogb(0.0), i32::MIN as f32);
        assert_eq!(ilogb(f32::NAN), i32::MAX as f32);
        assert_eq!(ilogb(f32::NEG_INFINITY), i32::MAX as f32);
    }

    #[test]
    fn powers() {
        assert_eq!(pow(2.0, 10.0), 1024.0);
        assert_eq!(pow(-2.0, 3.0), -8.0);
        assert_eq!(pow(4.0, 0.5), 2.0);
        assert!(pow(-8.0, 1.0 / 3.0).is_nan());
        assert_eq!(pow10(0), 1.0);
        assert_eq!(pow10(3), 1000.0);
        assert_eq!(pow10(-2), 0.01);
        assert_eq!(pow10(38), 1e38);
        assert_eq!(pow10(39), f32::INFINITY);
        assert_eq!(pow10(-46), 0.0);
        assert_eq!(pow10(400), f32::INFINITY);
        assert_eq!(pow10(-400), 0.0);
    }

    #[test]
    fn roots() {
        assert_eq!(sqrt(16.0), 4.0);
        assert_eq!(cbrt(-27.0), -3.0);
        assert_eq!(hypot(3.0, 4.0), 5.0);
        // would overflow if squared in f32
        assert!(close(hypot(3e30, 4e30), 5e30));
    }

    #[test]
    fn fma_rounds_once() {
        // In f32, (1 + 2^-12)² loses the 2^-24 term; fused, it survives.
        let a = 1.0 + f32::EPSILON * 2048.0;
        let fused = fma(a, a, -1.0);
        assert_eq!(fused, 2.0f32.powi(-11) + 2.0f32.powi(-24));
        assert_eq!(fma(2.0, 3.0, 4.0), 10.0);
    }
}
