//! Set-wide win-rate distribution per color context.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use pickwise_stats::{descriptive::DescriptiveStats, normal::normal_cdf, rounding::round_to};
use serde::{Deserialize, Serialize};

use crate::{fields::WIN_RATE_FIELDS, store::CardStatStore};

const DIGITS: i32 = 2;

/// Mean and population standard deviation of one win-rate field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorMetrics {
    pub mean: f64,
    #[serde(rename = "std")]
    pub std_dev: f64,
}

/// Distribution of every win-rate field, for every color context in a store.
///
/// Only cards with a non-zero value contribute, and each card name counts
/// once (reprints share a name but carry separate ids).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetMetrics {
    /// `field -> context -> metrics`
    metrics: BTreeMap<String, BTreeMap<String, ColorMetrics>>,
}

impl SetMetrics {
    #[must_use]
    pub fn from_store(store: &CardStatStore) -> Self {
        let contexts = store
            .card_ratings
            .values()
            .flat_map(|card| card.deck_colors.keys())
            .collect::<BTreeSet<_>>();

        let metrics = WIN_RATE_FIELDS
            .iter()
            .map(|&field| {
                let per_context = contexts
                    .iter()
                    .map(|&context| (context.clone(), color_metrics(store, context, field)))
                    .collect();
                (field.to_owned(), per_context)
            })
            .collect();

        tracing::debug!(contexts = contexts.len(), "computed set metrics");
        Self { metrics }
    }

    /// `(mean, std_dev)` rounded to two decimals; `(0.0, 0.0)` when unknown.
    #[must_use]
    pub fn metrics(&self, context: &str, field: &str) -> (f64, f64) {
        self.get(context, field).map_or((0.0, 0.0), |m| {
            (round_to(m.mean, DIGITS), round_to(m.std_dev, DIGITS))
        })
    }

    #[must_use]
    pub fn get(&self, context: &str, field: &str) -> Option<&ColorMetrics> {
        self.metrics.get(field)?.get(context)
    }

    /// Percentile (0 to 100, two decimals) of `win_rate` within the
    /// distribution, or `None` when the distribution is degenerate.
    #[must_use]
    pub fn percentile(&self, win_rate: f64, context: &str, field: &str) -> Option<f64> {
        let (mean, std_dev) = self.metrics(context, field);
        normal_cdf(win_rate, mean, std_dev).map(|p| round_to(p * 100.0, DIGITS))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &ColorMetrics)> + '_ {
        self.metrics.iter().flat_map(|(field, contexts)| {
            contexts
                .iter()
                .map(move |(context, m)| (field.as_str(), context.as_str(), m))
        })
    }
}

fn color_metrics(store: &CardStatStore, context: &str, field: &str) -> ColorMetrics {
    let mut seen = HashSet::new();
    let values = store
        .card_ratings
        .values()
        .filter(|card| seen.insert(card.name.as_str()))
        .filter_map(|card| card.deck_colors.get(context)?.get(field).copied())
        .map(|value| round_to(value, DIGITS))
        .filter(|&value| value != 0.0);

    DescriptiveStats::new(values).map_or_else(ColorMetrics::default, |stats| ColorMetrics {
        mean: stats.mean,
        std_dev: stats.std_dev,
    })
}
