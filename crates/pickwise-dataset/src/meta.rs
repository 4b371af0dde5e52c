use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Collection metadata of a statistics document.
///
/// Keys other than the five known ones are kept in [`SetMeta::extra`] and
/// written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetMeta {
    #[serde(
        default,
        with = "calendar_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<NaiveDate>,
    #[serde(
        default,
        with = "calendar_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<NaiveDate>,
    #[serde(
        default,
        with = "calendar_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub collection_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<f64>,
    #[serde(default)]
    pub game_count: u64,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl SetMeta {
    /// Folds `other` into `self`.
    ///
    /// Start date keeps the minimum, end and collection dates keep the
    /// maximum, version keeps the greater value and game counts add up.
    /// Any other key keeps the value it was first seen with.
    pub fn merge(&mut self, other: &Self) {
        self.start_date = combine(self.start_date, other.start_date, NaiveDate::min);
        self.end_date = combine(self.end_date, other.end_date, NaiveDate::max);
        self.collection_date = combine(self.collection_date, other.collection_date, NaiveDate::max);
        self.version = combine(self.version, other.version, f64::max);
        self.game_count += other.game_count;
        for (key, value) in &other.extra {
            self.extra
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
    }
}

fn combine<T>(current: Option<T>, incoming: Option<T>, pick: impl FnOnce(T, T) -> T) -> Option<T> {
    match (current, incoming) {
        (Some(current), Some(incoming)) => Some(pick(current, incoming)),
        (current, incoming) => current.or(incoming),
    }
}

/// `YYYY-MM-DD` dates that tolerate a trailing time component on input.
mod calendar_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    const FORMAT: &str = "%Y-%m-%d";

    pub(super) fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.collect_str(&date.format(FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        parse(&raw).map(Some).map_err(D::Error::custom)
    }

    pub(super) fn parse(raw: &str) -> Result<NaiveDate, String> {
        let day = raw
            .trim()
            .split([' ', 'T'])
            .next()
            .unwrap_or_default();
        NaiveDate::parse_from_str(day, FORMAT).map_err(|e| format!("invalid date '{raw}': {e}"))
    }
}
