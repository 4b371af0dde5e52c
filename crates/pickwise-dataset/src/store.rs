use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{card::CardStat, meta::SetMeta};

/// Aggregate win-rate percentage per color-pair key (`"WU"`, `"Mono-Red"`, ...).
pub type ColorRatings = BTreeMap<String, f64>;

/// A complete statistical dataset, merged or loaded from disk.
///
/// Serializes to the same schema as a per-set document, so a merged store
/// can be merged again. Once built it is only read; switching events
/// replaces the store wholesale (see [`ActiveDataset`](crate::active::ActiveDataset)).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardStatStore {
    #[serde(default)]
    pub meta: SetMeta,
    #[serde(default)]
    pub color_ratings: ColorRatings,
    #[serde(default)]
    pub card_ratings: BTreeMap<String, CardStat>,
}

impl CardStatStore {
    #[must_use]
    pub fn card(&self, id: &str) -> Option<&CardStat> {
        self.card_ratings.get(id)
    }

    /// Cards for `ids` in the given order; unknown ids are skipped.
    pub fn cards_by_ids<'a, I>(&self, ids: I) -> Vec<&CardStat>
    where
        I: IntoIterator<Item = &'a str>,
    {
        ids.into_iter().filter_map(|id| self.card(id)).collect()
    }

    /// First card (in id order) carrying `name`.
    #[must_use]
    pub fn card_by_name(&self, name: &str) -> Option<&CardStat> {
        self.card_ratings.values().find(|card| card.name == name)
    }

    /// Unique card names, sorted.
    #[must_use]
    pub fn card_names(&self) -> BTreeSet<&str> {
        self.card_ratings
            .values()
            .map(|card| card.name.as_str())
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.card_ratings.is_empty()
    }
}
