//! Trigonometric and hyperbolic functions, and their inverses.

use crate::consts::{DEG_TO_RAD_FACTOR, RAD_TO_DEG_FACTOR};

/// Converts an angle from degrees to radians.
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD_FACTOR
}

/// Converts an angle from radians to degrees.
#[inline]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * RAD_TO_DEG_FACTOR
}

// --- Circular ------------------------------------------------------------------------------------

/// Returns the sine of the radian argument `x`.
///
/// Special cases are:
///
/// * `sin(±0) = ±0`
/// * `sin(±Inf) = NaN`
/// * `sin(NaN) = NaN`
#[inline]
pub fn sin(x: f32) -> f32 {
    libm::sinf(x)
}

/// Returns the cosine of the radian argument `x`.
///
/// Special cases are:
///
/// * `cos(±Inf) = NaN`
/// * `cos(NaN) = NaN`
#[inline]
pub fn cos(x: f32) -> f32 {
    libm::cosf(x)
}

/// Returns the sine and cosine of `x`, in that order.
///
/// Special cases are:
///
/// * `sincos(±0) = (±0, 1)`
/// * `sincos(±Inf) = (NaN, NaN)`
/// * `sincos(NaN) = (NaN, NaN)`
#[inline]
pub fn sincos(x: f32) -> (f32, f32) {
    let (s, c) = libm::sincos(f64::from(x));
    (s as f32, c as f32)
}

/// Returns the tangent of the radian argument `x`.
///
/// Special cases are:
///
/// * `tan(±0) = ±0`
/// * `tan(±Inf) = NaN`
/// * `tan(NaN) = NaN`
#[inline]
pub fn tan(x: f32) -> f32 {
    libm::tanf(x)
}

/// Returns the arcsine, in radians, of `x`.
///
/// Special cases are:
///
/// * `asin(±0) = ±0`
/// * `asin(x) = NaN` if `x < -1` or `x > 1`
#[inline]
pub fn asin(x: f32) -> f32 {
    libm::asinf(x)
}

/// Returns the arccosine, in radians, of `x`.
///
/// Special case is:
///
/// * `acos(x) = NaN` if `x < -1` or `x > 1`
#[inline]
pub fn acos(x: f32) -> f32 {
    libm::acosf(x)
}

/// Returns the arctangent, in radians, of `x`.
///
/// Special cases are:
///
/// * `atan(±0) = ±0`
/// * `atan(±Inf) = ±π/2`
#[inline]
pub fn atan(x: f32) -> f32 {
    libm::atanf(x)
}

/// Returns the arctangent of `y / x`, using the signs of the two to determine the quadrant of
/// the result.
///
/// Special cases are (in order):
///
/// * `atan2(y, NaN) = NaN`
/// * `atan2(NaN, x) = NaN`
/// * `atan2(+0, x >= 0) = +0`
/// * `atan2(-0, x >= 0) = -0`
/// * `atan2(+0, x <= -0) = +π`
/// * `atan2(-0, x <= -0) = -π`
/// * `atan2(y > 0, 0) = +π/2`
/// * `atan2(y < 0, 0) = -π/2`
/// * `atan2(+Inf, +Inf) = +π/4`
/// * `atan2(-Inf, +Inf) = -π/4`
/// * `atan2(+Inf, -Inf) = 3π/4`
/// * `atan2(-Inf, -Inf) = -3π/4`
/// * `atan2(y, +Inf) = 0`
/// * `atan2(y > 0, -Inf) = +π`
/// * `atan2(y < 0, -Inf) = -π`
/// * `atan2(+Inf, x) = +π/2`
/// * `atan2(-Inf, x) = -π/2`
#[inline]
pub fn atan2(y: f32, x: f32) -> f32 {
    libm::atan2f(y, x)
}

// --- Hyperbolic ----------------------------------------------------------------------------------

/// Returns the hyperbolic sine of `x`.
///
/// Special cases are:
///
/// * `sinh(±0) = ±0`
/// * `sinh(±Inf) = ±Inf`
/// * `sinh(NaN) = NaN`
#[inline]
pub fn sinh(x: f32) -> f32 {
    libm::sinhf(x)
}

/// Returns the hyperbolic cosine of `x`.
///
/// Special cases are:
///
/// * `cosh(±0) = 1`
/// * `cosh(±Inf) = +Inf`
/// * `cosh(NaN) = NaN`
#[inline]
pub fn cosh(x: f32) -> f32 {
    libm::coshf(x)
}

/// Returns the hyperbolic tangent of `x`.
///
/// Special cases are:
///
/// * `tanh(±0) = ±0`
/// * `tanh(±Inf) = ±1`
/// * `tanh(NaN) = NaN`
#[inline]
pub fn tanh(x: f32) -> f32 {
    libm::tanhf(x)
}

/// Returns the inverse hyperbolic sine of `x`.
///
/// Special cases are:
///
/// * `asinh(±0) = ±0`
/// * `asinh(±Inf) = ±Inf`
/// * `asinh(NaN) = NaN`
#[inline]
pub fn asinh(x: f32) -> f32 {
    libm::asinhf(x)
}

/// Returns the inverse hyperbolic cosine of `x`.
///
/// Special cases are:
///
/// * `acosh(+Inf) = +Inf`
/// * `acosh(x) = NaN` if `x < 1`
/// * `acosh(NaN) = NaN`
#[inline]
pub fn acosh(x: f32) -> f32 {
    libm::acoshf(x)
}

/// Returns the inverse hyperbolic tangent of `x`.
///
/// Special cases are:
///
/// * `atanh(1) = +Inf`
/// * `atanh(±0) = ±0`
/// * `atanh(-1) = -Inf`
/// * `atanh(x) = NaN` if `x < -1` or `x > 1`
/// * `atanh(NaN) = NaN`
#[inline]
pub fn atanh(x: f32) -> f32 {
    libm::atanhf(x)
}
