//! Fixed-place rounding for reported scores
//!
//! Rounds half away from zero, so `0.125` becomes `0.13` at two places.

/// Round `value` to `places` decimal places, half away from zero
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Round to two decimal places (percentages, points)
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Round to four decimal places (similarity, confidence)
pub fn round4(value: f64) -> f64 {
    round_to(value, 4)
}
