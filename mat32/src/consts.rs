use core::f32::consts as c32;
use core::f64::consts as c64;

// --- Mathematical constants ----------------------------------------------------------------------

/// Euler’s number, *e*.
pub const E: f32 = c32::E;
/// Archimedes’ constant, π.
pub const PI: f32 = c32::PI;
/// The golden ratio, φ.
pub const PHI: f32 = 1.618_033_988_749_895_f64 as f32;

/// √2
pub const SQRT_2: f32 = c32::SQRT_2;
/// √*e*
pub const SQRT_E: f32 = 1.648_721_270_700_128_f64 as f32;
/// √π
pub const SQRT_PI: f32 = 1.772_453_850_905_516_f64 as f32;
/// √φ
pub const SQRT_PHI: f32 = 1.272_019_649_514_069_f64 as f32;

/// ln(2)
pub const LN_2: f32 = c32::LN_2;
/// log₂(*e*)
pub const LOG2_E: f32 = c32::LOG2_E;
/// ln(10)
pub const LN_10: f32 = c32::LN_10;
/// log₁₀(*e*)
pub const LOG10_E: f32 = c32::LOG10_E;

// --- Floating-point limits -----------------------------------------------------------------------

/// The largest finite `f32` value.
pub const MAX_FLOAT32: f32 = f32::MAX;

/// The smallest positive, non-zero `f32` value. This is a subnormal number.
pub const SMALLEST_NONZERO_FLOAT32: f32 = f32::from_bits(1);

/// The smallest positive normal `f32` value.
pub const MIN_POSITIVE_FLOAT32: f32 = f32::MIN_POSITIVE;

/// Positive infinity.
pub const INFINITY: f32 = f32::INFINITY;

// --- Angle conversion ----------------------------------------------------------------------------

/// The number of radians per degree.
///
/// Computed in `f64` and rounded once, so this is the `f32` nearest to π/180.
pub const DEG_TO_RAD_FACTOR: f32 = (c64::PI / 180.0) as f32;

/// The number of degrees per radian.
///
/// Computed in `f64` and rounded once, so this is the `f32` nearest to 180/π.
pub const RAD_TO_DEG_FACTOR: f32 = (180.0 / c64::PI) as f32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_constants_match_std() {
        assert_eq!(PHI, ((1.0 + 5.0f64.sqrt()) / 2.0) as f32);
        assert_eq!(SQRT_E, c64::E.sqrt() as f32);
        assert_eq!(SQRT_PI, c64::PI.sqrt() as f32);
        assert_eq!(SQRT_PHI, ((1.0 + 5.0f64.sqrt()) / 2.0).sqrt() as f32);
        assert_eq!(DEG_TO_RAD_FACTOR, 1.0f64.to_radians() as f32);
        assert_eq!(RAD_TO_DEG_FACTOR, 1.0f64.to_degrees() as f32);
    }

    #[test]
    fn limits() {
        assert!(SMALLEST_NONZERO_FLOAT32 > 0.0);
        assert!(SMALLEST_NONZERO_FLOAT32.is_subnormal());
        assert_eq!(SMALLEST_NONZERO_FLOAT32 / 2.0, 0.0);
        assert!(MIN_POSITIVE_FLOAT32.is_normal());
        assert!(MAX_FLOAT32.is_finite());
        assert_eq!(MAX_FLOAT32 * 2.0, INFINITY);
    }
}
