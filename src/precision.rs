//! Fixed-precision rounding helpers.
//!
//! Costs are rounded half away from zero; delivery times are floored. Both
//! operate on decimal places, so values like `0.29` that have no exact binary
//! representation must not drift down a cent when scaled.

/// Decimal places used for costs, discounts and delivery times.
pub const DECIMAL_PLACES: i32 = 2;

// Scaled values within this distance of an integer are treated as that integer.
const SNAP_EPSILON: f64 = 1e-9;

/// Rounds to `places` decimal places, halves away from zero.
///
/// # Examples
///
/// ```
/// use u_courier::precision::round_to;
///
/// assert_eq!(round_to(1.005, 2), 1.01);
/// assert_eq!(round_to(2.344, 2), 2.34);
/// assert_eq!(round_to(69.999999, 2), 70.0);
/// ```
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = snap(value * factor);
    // Halfway cases that landed just under .5 due to binary noise.
    let nudged = scaled + SNAP_EPSILON.copysign(scaled);
    nudged.round() / factor
}

/// Floors to `places` decimal places.
///
/// # Examples
///
/// ```
/// use u_courier::precision::floor_to;
///
/// assert_eq!(floor_to(1.7857, 2), 1.78);
/// assert_eq!(floor_to(0.29, 2), 0.29);
/// ```
pub fn floor_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    snap(value * factor).floor() / factor
}

/// Snaps `scaled` to the nearest integer when within binary noise of it.
pub(crate) fn snap(scaled: f64) -> f64 {
    let nearest = scaled.round();
    if (scaled - nearest).abs() < SNAP_EPSILON {
        nearest
    } else {
        scaled
    }
}
