//! Rounding, remainders, sign manipulation, classification, and comparison.

// --- Sign ----------------------------------------------------------------------------------------

/// Returns the absolute value of `x`.
///
/// Special cases are:
///
/// * `abs(±Inf) = +Inf`
/// * `abs(NaN) = NaN`
#[inline]
pub fn abs(x: f32) -> f32 {
    libm::fabsf(x)
}

/// Returns −1 if `x < 0` and 1 otherwise.
///
/// Unlike [`f32::signum()`], this returns 1 for −0 and for NaN.
#[inline]
pub fn sign(x: f32) -> f32 {
    if x < 0.0 { -1.0 } else { 1.0 }
}

/// Returns a value with the magnitude of `f` and the sign of `sign`.
#[inline]
pub fn copysign(f: f32, sign: f32) -> f32 {
    libm::copysignf(f, sign)
}

/// Reports whether `x` is negative or negative zero.
#[inline]
pub fn signbit(x: f32) -> bool {
    x.is_sign_negative()
}

// --- Classification ------------------------------------------------------------------------------

/// Returns an IEEE 754 “not-a-number” value.
#[inline]
pub fn nan() -> f32 {
    f32::NAN
}

/// Reports whether `x` is an IEEE 754 “not-a-number” value.
#[inline]
pub fn is_nan(x: f32) -> bool {
    x.is_nan()
}

/// Returns positive infinity if `sign >= 0`, negative infinity if `sign < 0`.
#[inline]
pub fn inf(sign: i32) -> f32 {
    if sign >= 0 {
        f32::INFINITY
    } else {
        f32::NEG_INFINITY
    }
}

/// Reports whether `x` is an infinity, according to `sign`.
///
/// If `sign > 0`, reports whether `x` is positive infinity.
/// If `sign < 0`, reports whether `x` is negative infinity.
/// If `sign == 0`, reports whether `x` is either infinity.
#[inline]
pub fn is_inf(x: f32, sign: i32) -> bool {
    (sign >= 0 && x == f32::INFINITY) || (sign <= 0 && x == f32::NEG_INFINITY)
}

// --- Rounding ------------------------------------------------------------------------------------

/// Returns the least integer value greater than or equal to `x`.
///
/// Special cases are:
///
/// * `ceil(±0) = ±0`
/// * `ceil(±Inf) = ±Inf`
/// * `ceil(NaN) = NaN`
#[inline]
pub fn ceil(x: f32) -> f32 {
    libm::ceilf(x)
}

/// Returns the greatest integer value less than or equal to `x`.
///
/// Special cases are:
///
/// * `floor(±0) = ±0`
/// * `floor(±Inf) = ±Inf`
/// * `floor(NaN) = NaN`
#[inline]
pub fn floor(x: f32) -> f32 {
    libm::floorf(x)
}

/// Returns the integer value of `x`, rounding toward zero.
///
/// Special cases are:
///
/// * `trunc(±0) = ±0`
/// * `trunc(±Inf) = ±Inf`
/// * `trunc(NaN) = NaN`
#[inline]
pub fn trunc(x: f32) -> f32 {
    libm::truncf(x)
}

/// Returns the nearest integer, rounding half away from zero.
///
/// Special cases are:
///
/// * `round(±0) = ±0`
/// * `round(±Inf) = ±Inf`
/// * `round(NaN) = NaN`
#[inline]
pub fn round(x: f32) -> f32 {
    libm::roundf(x)
}

/// Returns the nearest integer, rounding ties to even.
///
/// Special cases are:
///
/// * `round_to_even(±0) = ±0`
/// * `round_to_even(±Inf) = ±Inf`
/// * `round_to_even(NaN) = NaN`
#[inline]
pub fn round_to_even(x: f32) -> f32 {
    // rint() rounds according to the current rounding mode, which is always
    // round-to-nearest-even in Rust.
    libm::rint(f64::from(x)) as f32
}

/// Returns the integer and fractional parts of `f`, in that order, which sum to `f`.
/// Both parts have the same sign as `f`.
///
/// Special cases are:
///
/// * `modf(±Inf) = (±Inf, NaN)`
/// * `modf(NaN) = (NaN, NaN)`
#[inline]
pub fn modf(f: f32) -> (f32, f32) {
    if f.is_infinite() {
        return (f, f32::NAN);
    }
    let wide = f64::from(f);
    let int = libm::trunc(wide);
    // exact in f64
    let frac = libm::copysign(wide - int, wide);
    (int as f32, frac as f32)
}

/// Returns the floating-point remainder of `x / y`.
/// The magnitude of the result is less than `y` and its sign agrees with that of `x`.
///
/// Special cases are:
///
/// * `fmod(±Inf, y) = NaN`
/// * `fmod(NaN, y) = NaN`
/// * `fmod(x, 0) = NaN`
/// * `fmod(x, ±Inf) = x`
/// * `fmod(x, NaN) = NaN`
#[inline]
pub fn fmod(x: f32, y: f32) -> f32 {
    libm::fmodf(x, y)
}

/// Returns the IEEE 754 floating-point remainder of `x / y`: `x − n × y`, where `n` is
/// `x / y` rounded to the nearest integer, ties to even.
///
/// Special cases are:
///
/// * `remainder(±Inf, y) = NaN`
/// * `remainder(NaN, y) = NaN`
/// * `remainder(x, 0) = NaN`
/// * `remainder(x, ±Inf) = x`
/// * `remainder(x, NaN) = NaN`
#[inline]
pub fn remainder(x: f32, y: f32) -> f32 {
    libm::remainder(f64::from(x), f64::from(y)) as f32
}

// --- Comparison ----------------------------------------------------------------------------------

/// Returns the larger of `x` or `y`.
///
/// Special cases are:
///
/// * `max(x, +Inf) = max(+Inf, x) = +Inf`
/// * `max(x, NaN) = max(NaN, x) = NaN`
/// * `max(+0, ±0) = max(±0, +0) = +0`
/// * `max(-0, -0) = -0`
///
/// Note that this differs from [`f32::max()`], which ignores NaN.
#[inline]
pub fn max(x: f32, y: f32) -> f32 {
    if x == f32::INFINITY || y == f32::INFINITY {
        f32::INFINITY
    } else if x.is_nan() || y.is_nan() {
        f32::NAN
    } else if x == 0.0 && x == y {
        if signbit(x) { y } else { x }
    } else if x > y {
        x
    } else {
        y
    }
}

/// Returns the smaller of `x` or `y`.
///
/// Special cases are:
///
/// * `min(x, -Inf) = min(-Inf, x) = -Inf`
/// * `min(x, NaN) = min(NaN, x) = NaN`
/// * `min(-0, ±0) = min(±0, -0) = -0`
///
/// Note that this differs from [`f32::min()`], which ignores NaN.
#[inline]
pub fn min(x: f32, y: f32) -> f32 {
    if x == f32::NEG_INFINITY || y == f32::NEG_INFINITY {
        f32::NEG_INFINITY
    } else if x.is_nan() || y.is_nan() {
        f32::NAN
    } else if x == 0.0 && x == y {
        if signbit(x) { x } else { y }
    } else if x < y {
        x
    } else {
        y
    }
}

/// Returns the maximum of `x − y` or 0.
///
/// Special cases are:
///
/// * `dim(+Inf, +Inf) = NaN`
/// * `dim(-Inf, -Inf) = NaN`
/// * `dim(x, NaN) = dim(NaN, x) = NaN`
#[inline]
pub fn dim(x: f32, y: f32) -> f32 {
    let difference = x - y;
    if difference <= 0.0 {
        0.0
    } else {
        difference
    }
}

/// Returns the next representable `f32` value after `x` in the direction of `y`.
///
/// Special cases are:
///
/// * `nextafter(x, x) = x`
/// * `nextafter(NaN, y) = NaN`
/// * `nextafter(x, NaN) = NaN`
#[inline]
pub fn nextafter(x: f32, y: f32) -> f32 {
    if x.is_nan() || y.is_nan() {
        f32::NAN
    } else if x == y {
        x
    } else if x == 0.0 {
        copysign(f32::from_bits(1), y)
    } else if (y > x) == (x > 0.0) {
        f32::from_bits(x.to_bits() + 1)
    } else {
        f32::from_bits(x.to_bits() - 1)
    }
}
