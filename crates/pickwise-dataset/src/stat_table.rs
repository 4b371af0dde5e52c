//! How each per-card statistic combines across documents.
//!
//! The table is plain read-only data handed to the merger. Statistics it
//! does not mention are treated as unpaired averages.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::fields::{
    GDWR, GIH, GIHWR, GNSWR, GPWR, NGD, NGND, NGOH, NGP, OHWR, PICKED, POOL, SEEN,
};

/// Merge behavior of one statistic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatNature {
    /// Additive count, summed across documents.
    Count,
    /// Rate weighted by the named companion count.
    Rate { count: String },
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum StatTableError {
    #[display("rate statistic '{stat}' pairs with '{count}', which is not declared as a count")]
    CompanionNotCount { stat: String, count: String },
}

/// Immutable lookup from statistic name to its [`StatNature`].
///
/// Serializes as a flat JSON object, e.g.
/// `{"gih": "count", "gihwr": {"rate": {"count": "gih"}}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatNatureTable {
    natures: BTreeMap<String, StatNature>,
}

impl StatNatureTable {
    /// Builds a table, checking that every rate points at a declared count.
    pub fn new<I, K>(natures: I) -> Result<Self, StatTableError>
    where
        I: IntoIterator<Item = (K, StatNature)>,
        K: Into<String>,
    {
        let table = Self {
            natures: natures.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        };
        table.validate()?;
        Ok(table)
    }

    /// Checks that every rate statistic pairs with a count statistic.
    ///
    /// Tables deserialized from configuration files should be validated
    /// before use.
    pub fn validate(&self) -> Result<(), StatTableError> {
        for (stat, nature) in &self.natures {
            let StatNature::Rate { count } = nature else {
                continue;
            };
            if self.nature(count) != Some(&StatNature::Count) {
                return Err(StatTableError::CompanionNotCount {
                    stat: stat.clone(),
                    count: count.clone(),
                });
            }
        }
        Ok(())
    }

    /// Nature of `stat`, or `None` for unpaired statistics.
    #[must_use]
    pub fn nature(&self, stat: &str) -> Option<&StatNature> {
        self.natures.get(stat)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StatNature)> + '_ {
        self.natures.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Default for StatNatureTable {
    /// Table for 17Lands card-rating statistics.
    fn default() -> Self {
        let counts = [NGP, NGOH, GIH, NGND, NGD, SEEN, PICKED, POOL]
            .map(|stat| (stat.to_owned(), StatNature::Count));
        let rates = [
            (GIHWR, GIH),
            (OHWR, NGOH),
            (GPWR, NGP),
            (GNSWR, NGND),
            (GDWR, NGD),
        ]
        .map(|(stat, count)| {
            (
                stat.to_owned(),
                StatNature::Rate {
                    count: count.to_owned(),
                },
            )
        });
        Self {
            natures: counts.into_iter().chain(rates).collect(),
        }
    }
}
