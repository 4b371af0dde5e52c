/// Descriptive statistics summarizing a set of win rates or other samples.
///
/// Dispersion is measured over the whole population (divisor `n`), since a
/// pack or a card pool is the complete set under consideration rather than a
/// sample drawn from a larger one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveStats {
    /// The number of values in the dataset.
    pub count: usize,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The arithmetic mean of the dataset.
    pub mean: f64,
    /// The population variance of the dataset.
    pub variance: f64,
    /// The population standard deviation of the dataset.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from values in any order.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use pickwise_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new([65.0, 50.0]).unwrap();
    /// assert_eq!(stats.mean, 57.5);
    /// assert_eq!(stats.std_dev, 7.5);
    /// assert_eq!(stats.min, 50.0);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        let count = values.len();
        if count == 0 {
            return None;
        }

        let n = count as f64;
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(*v), hi.max(*v))
            });
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        Some(Self {
            count,
            min,
            max,
            mean,
            variance,
            std_dev: variance.sqrt(),
        })
    }

    /// Standard score of `value` relative to this dataset.
    ///
    /// Returns `0.0` when the dataset has no spread.
    ///
    /// ```
    /// # use pickwise_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new([65.0, 50.0]).unwrap();
    /// assert_eq!(stats.z_score(65.0), 1.0);
    /// ```
    #[must_use]
    pub fn z_score(&self, value: f64) -> f64 {
        z_score(value, self.mean, self.std_dev)
    }
}

/// Standard score of `value` for the given mean and standard deviation.
///
/// A non-positive `std_dev` yields `0.0` instead of dividing by zero.
#[must_use]
pub fn z_score(value: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev > 0.0 {
        (value - mean) / std_dev
    } else {
        0.0
    }
}
