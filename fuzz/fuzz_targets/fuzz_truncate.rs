#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (f32, f64, i8)| {
    let (x, x64, prec) = input;
    let prec = i32::from(prec);

    let once = mat32::truncate(x, prec);
    let once64 = mat32::truncate64(x64, prec);

    if prec < 0 || !x.is_finite() {
        assert_eq!(once.to_bits(), x.to_bits());
    }
    if prec < 0 || !x64.is_finite() {
        assert_eq!(once64.to_bits(), x64.to_bits());
    }

    // Rounding to the same number of digits again changes nothing,
    // unless the first rounding overflowed.
    if once.is_finite() {
        assert_eq!(mat32::truncate(once, prec), once, "truncate({x}, {prec})");
    }
    if once64.is_finite() {
        assert_eq!(mat32::truncate64(once64, prec), once64, "truncate64({x64}, {prec})");
    }
});
