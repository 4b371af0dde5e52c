use std::f64::consts::SQRT_2;

/// Cumulative distribution function of a normal distribution.
///
/// Returns `None` if `std_dev` is not strictly positive.
///
/// # Examples
///
/// ```
/// use pickwise_stats::normal::normal_cdf;
///
/// assert_eq!(normal_cdf(55.0, 55.0, 3.0), Some(0.5));
/// assert_eq!(normal_cdf(55.0, 55.0, 0.0), None);
/// ```
#[must_use]
pub fn normal_cdf(x: f64, mean: f64, std_dev: f64) -> Option<f64> {
    if std_dev <= 0.0 {
        return None;
    }
    let z = (x - mean) / (std_dev * SQRT_2);
    Some(0.5 * (1.0 + libm::erf(z)))
}
