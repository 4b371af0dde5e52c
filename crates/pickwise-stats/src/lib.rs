//! Numeric helpers shared by the dataset merger and the pack scorer.
//!
//! - **Descriptive statistics**: mean, population variance and standard deviation, z-scores
//! - **Rounding**: decimal rounding used by every persisted or displayed rate
//! - **Normal distribution**: CDF used to turn a win rate into a percentile
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing win rates
//! - [`rounding`]: Fixed-digit decimal rounding
//! - [`normal`]: Normal cumulative distribution function
//!
//! # Examples
//!
//! ## Scoring a value against its peers
//!
//! ```
//! use pickwise_stats::descriptive::DescriptiveStats;
//!
//! let pack = [65.0, 50.0];
//! let stats = DescriptiveStats::new(pack).unwrap();
//! assert_eq!(stats.z_score(50.0), -1.0);
//! ```
//!
//! ## Percentile of a win rate
//!
//! ```
//! use pickwise_stats::{normal::normal_cdf, rounding::round_to};
//!
//! let percentile = round_to(normal_cdf(58.0, 55.0, 3.0).unwrap() * 100.0, 2);
//! assert_eq!(percentile, 84.13);
//! ```

pub mod descriptive;
pub mod normal;
pub mod rounding;
