/// Rounds `value` to `digits` decimal places, half away from zero.
///
/// # Examples
///
/// ```
/// use pickwise_stats::rounding::round_to;
///
/// assert_eq!(round_to(57.456, 2), 57.46);
/// assert_eq!(round_to(57.45, 1), 57.5);
/// assert_eq!(round_to(-1.25, 1), -1.3);
/// ```
#[must_use]
pub fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}
