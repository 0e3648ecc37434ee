//! Fixed-precision rounding shared by all calculations.
//!
//! Ties are always rounded towards positive infinity, so `round2(0.125)` is
//! `0.13` and `round2(-0.125)` is `-0.12`. Stored values produced by earlier
//! versions were rounded the same way.

/// Round `value` to `decimals` places after the decimal point.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor + 0.5).floor() / factor
}

#[must_use]
pub fn round1(value: f64) -> f64 {
    round_to(value, 1)
}

#[must_use]
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}
