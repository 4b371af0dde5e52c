//! Combining several per-set statistics documents into one [`CardStatStore`].
//!
//! # Merge rules
//!
//! Documents are folded left to right.
//!
//! - **meta**: see [`SetMeta::merge`].
//! - **color ratings**: a game-count weighted average per color key. The set
//!   of keys comes from the first document and only ever shrinks: a key
//!   missing from any later document is dropped, and keys that only appear
//!   later are ignored.
//! - **card ratings**: identity fields come from the first document that
//!   introduces a card. Each statistic then follows its [`StatNature`]:
//!   counts are summed, rates are averaged weighted by their companion count,
//!   and unpaired statistics take the plain mean. For rates and unpaired
//!   statistics an exact `0.0` on either side means "no qualifying sample"
//!   and the merged value stays `0.0`.
//!
//! # Failure model
//!
//! A document without the three top-level sections fails the whole merge
//! with [`MergeError`]. A section that is present but cannot be read is
//! reported as a [`MergeIssue`]; that section of the merged store is left
//! empty and the other sections are still merged.
//!
//! # Example
//!
//! ```
//! use pickwise_dataset::{merge::DatasetMerger, stat_table::StatNatureTable};
//! use serde_json::json;
//!
//! let doc = |games: u64, gihwr: f64, gih: f64| {
//!     json!({
//!         "meta": {"game_count": games},
//!         "color_ratings": {"WU": 55.0},
//!         "card_ratings": {
//!             "1": {"name": "Bear", "deck_colors": {"All Decks": {"gihwr": gihwr, "gih": gih}}}
//!         }
//!     })
//! };
//!
//! let table = StatNatureTable::default();
//! let outcome = DatasetMerger::new(&table)
//!     .merge(&[doc(100, 60.0, 100.0), doc(300, 50.0, 300.0)])
//!     .unwrap();
//! assert!(outcome.is_complete());
//! assert_eq!(outcome.store.meta.game_count, 400);
//! assert_eq!(outcome.store.card_ratings["1"].stat("All Decks", "gihwr"), 52.5);
//! assert_eq!(outcome.store.card_ratings["1"].stat("All Decks", "gih"), 400.0);
//! ```

use std::collections::{BTreeMap, btree_map::Entry};

use pickwise_stats::rounding::round_to;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    card::{CardStat, DeckColorStats},
    meta::SetMeta,
    stat_table::{StatNature, StatNatureTable},
    store::{CardStatStore, ColorRatings},
};

/// Top-level section of a statistics document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Section {
    #[display("meta")]
    Meta,
    #[display("color_ratings")]
    ColorRatings,
    #[display("card_ratings")]
    CardRatings,
}

impl Section {
    /// Key of the section in a document.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Meta => "meta",
            Self::ColorRatings => "color_ratings",
            Self::CardRatings => "card_ratings",
        }
    }
}

/// Structural failure: the documents cannot be merged at all.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum MergeError {
    #[display("no documents to merge")]
    NoDocuments,
    #[display("document #{index} is not a JSON object")]
    NotAnObject { index: usize },
    #[display("document #{index} has no '{section}' section")]
    MissingSection { index: usize, section: Section },
}

/// Non-fatal problem: one section of the merged store was left empty.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MergeIssue {
    #[display("document #{index}: '{section}' section is malformed: {reason}")]
    Malformed {
        index: usize,
        section: Section,
        reason: String,
    },
    #[display("'{section}' section skipped because '{missing}' could not be read")]
    Dependency { section: Section, missing: Section },
}

impl MergeIssue {
    /// Section of the merged store affected by this issue.
    #[must_use]
    pub fn section(&self) -> Section {
        match self {
            Self::Malformed { section, .. } | Self::Dependency { section, .. } => *section,
        }
    }
}

/// Merged store plus the sections that could not be merged.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub store: CardStatStore,
    pub issues: Vec<MergeIssue>,
}

impl MergeOutcome {
    /// `true` if every section of every document was merged.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Merges statistics documents according to a [`StatNatureTable`].
#[derive(Debug, Clone, Copy)]
pub struct DatasetMerger<'a> {
    table: &'a StatNatureTable,
}

impl<'a> DatasetMerger<'a> {
    #[must_use]
    pub fn new(table: &'a StatNatureTable) -> Self {
        Self { table }
    }

    /// Merges `documents` in order.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError`] if there are no documents, or if any document
    /// is not an object holding `meta`, `color_ratings` and `card_ratings`.
    pub fn merge(&self, documents: &[Value]) -> Result<MergeOutcome, MergeError> {
        if documents.is_empty() {
            return Err(MergeError::NoDocuments);
        }
        let raw = documents
            .iter()
            .enumerate()
            .map(|(index, document)| RawDocument::split(index, document))
            .collect::<Result<Vec<_>, _>>()?;

        let mut issues = vec![];

        let metas = parse_section::<SetMeta>(&raw, Section::Meta, &mut issues);
        let meta = metas.as_deref().map(merge_meta).unwrap_or_default();

        let ratings = parse_section::<ColorRatings>(&raw, Section::ColorRatings, &mut issues);
        let color_ratings = match (&metas, ratings) {
            (Some(metas), Some(ratings)) => {
                merge_color_ratings(metas.iter().map(|m| m.game_count).zip(&ratings))
            }
            (None, Some(_)) => {
                report(
                    &mut issues,
                    MergeIssue::Dependency {
                        section: Section::ColorRatings,
                        missing: Section::Meta,
                    },
                );
                ColorRatings::new()
            }
            (_, None) => ColorRatings::new(),
        };

        let card_ratings = parse_section::<BTreeMap<String, CardStat>>(
            &raw,
            Section::CardRatings,
            &mut issues,
        )
        .map(|cards| merge_card_ratings(cards, self.table))
        .unwrap_or_default();

        tracing::debug!(
            documents = documents.len(),
            cards = card_ratings.len(),
            colors = color_ratings.len(),
            issues = issues.len(),
            "merged statistics documents"
        );

        Ok(MergeOutcome {
            store: CardStatStore {
                meta,
                color_ratings,
                card_ratings,
            },
            issues,
        })
    }
}

#[derive(Debug)]
struct RawDocument<'a> {
    index: usize,
    meta: &'a Value,
    color_ratings: &'a Value,
    card_ratings: &'a Value,
}

impl<'a> RawDocument<'a> {
    fn split(index: usize, document: &'a Value) -> Result<Self, MergeError> {
        let object = document
            .as_object()
            .ok_or(MergeError::NotAnObject { index })?;
        let get = |section: Section| {
            object
                .get(section.key())
                .ok_or(MergeError::MissingSection { index, section })
        };
        Ok(Self {
            index,
            meta: get(Section::Meta)?,
            color_ratings: get(Section::ColorRatings)?,
            card_ratings: get(Section::CardRatings)?,
        })
    }

    fn section(&self, section: Section) -> &'a Value {
        match section {
            Section::Meta => self.meta,
            Section::ColorRatings => self.color_ratings,
            Section::CardRatings => self.card_ratings,
        }
    }
}

fn parse_section<T>(
    raw: &[RawDocument<'_>],
    section: Section,
    issues: &mut Vec<MergeIssue>,
) -> Option<Vec<T>>
where
    T: DeserializeOwned,
{
    let mut parsed = Vec::with_capacity(raw.len());
    for document in raw {
        match T::deserialize(document.section(section)) {
            Ok(value) => parsed.push(value),
            Err(e) => {
                report(
                    issues,
                    MergeIssue::Malformed {
                        index: document.index,
                        section,
                        reason: e.to_string(),
                    },
                );
                return None;
            }
        }
    }
    Some(parsed)
}

fn report(issues: &mut Vec<MergeIssue>, issue: MergeIssue) {
    tracing::warn!(section = %issue.section(), "{issue}");
    issues.push(issue);
}

fn merge_meta(metas: &[SetMeta]) -> SetMeta {
    let mut iter = metas.iter();
    let mut merged = iter.next().cloned().unwrap_or_default();
    for meta in iter {
        merged.merge(meta);
    }
    merged
}

#[derive(Debug, Default)]
struct ColorAccumulator {
    /// Sum of `rating / 100 * game_count`.
    weighted_wins: f64,
    rating_sum: f64,
    samples: u32,
}

impl ColorAccumulator {
    fn add(&mut self, rating: f64, game_count: u64) {
        #[expect(clippy::cast_precision_loss)]
        let games = game_count as f64;
        self.weighted_wins += rating / 100.0 * games;
        self.rating_sum += rating;
        self.samples += 1;
    }

    /// Weighted percentage; the plain mean when no games were counted.
    fn rating(&self, total_games: u64) -> f64 {
        if total_games > 0 {
            #[expect(clippy::cast_precision_loss)]
            let total = total_games as f64;
            round_to(self.weighted_wins / total * 100.0, 1)
        } else {
            round_to(self.rating_sum / f64::from(self.samples.max(1)), 1)
        }
    }
}

fn merge_color_ratings<'a, I>(documents: I) -> ColorRatings
where
    I: IntoIterator<Item = (u64, &'a ColorRatings)>,
{
    let mut running = BTreeMap::<String, ColorAccumulator>::new();
    let mut total_games = 0;

    for (i, (game_count, ratings)) in documents.into_iter().enumerate() {
        total_games += game_count;
        if i == 0 {
            for (color, rating) in ratings {
                running
                    .entry(color.clone())
                    .or_default()
                    .add(*rating, game_count);
            }
            continue;
        }
        running.retain(|color, _| ratings.contains_key(color));
        for (color, accumulator) in &mut running {
            accumulator.add(ratings[color], game_count);
        }
    }

    running
        .into_iter()
        .map(|(color, accumulator)| (color, accumulator.rating(total_games)))
        .collect()
}

fn merge_card_ratings(
    documents: Vec<BTreeMap<String, CardStat>>,
    table: &StatNatureTable,
) -> BTreeMap<String, CardStat> {
    let mut merged = BTreeMap::<String, CardStat>::new();
    for document in documents {
        for (id, card) in document {
            match merged.entry(id) {
                Entry::Vacant(entry) => {
                    entry.insert(card);
                }
                Entry::Occupied(mut entry) => {
                    merge_deck_colors(&mut entry.get_mut().deck_colors, card.deck_colors, table);
                }
            }
        }
    }
    merged
}

fn merge_deck_colors(
    running: &mut BTreeMap<String, DeckColorStats>,
    incoming: BTreeMap<String, DeckColorStats>,
    table: &StatNatureTable,
) {
    for (context, stats) in incoming {
        match running.entry(context) {
            Entry::Vacant(entry) => {
                entry.insert(stats);
            }
            Entry::Occupied(mut entry) => merge_stats(entry.get_mut(), &stats, table),
        }
    }
}

/// Folds one document's statistics for a card/context into the running ones.
///
/// Rates are weighted with the counts as they stood before this document,
/// regardless of the order statistics appear in.
fn merge_stats(running: &mut DeckColorStats, incoming: &DeckColorStats, table: &StatNatureTable) {
    let previous = running.clone();
    for (stat, &value) in incoming {
        let current = previous.get(stat).copied();
        let merged = match table.nature(stat) {
            Some(StatNature::Count) => current.unwrap_or(0.0) + value,
            Some(StatNature::Rate { count }) => merge_rate(
                current,
                previous.get(count).copied().unwrap_or(0.0),
                value,
                incoming.get(count).copied().unwrap_or(0.0),
            ),
            None => merge_unpaired(current, value),
        };
        running.insert(stat.clone(), merged);
    }
}

fn merge_rate(current: Option<f64>, current_count: f64, value: f64, count: f64) -> f64 {
    if current.is_some_and(is_zero) || is_zero(value) {
        return 0.0;
    }
    let Some(current) = current else {
        return value;
    };
    let total = current_count + count;
    if total > 0.0 {
        round_to((current * current_count + value * count) / total, 2)
    } else {
        value
    }
}

fn merge_unpaired(current: Option<f64>, value: f64) -> f64 {
    if current.is_some_and(is_zero) || is_zero(value) {
        return 0.0;
    }
    match current {
        Some(current) => round_to((current + value) / 2.0, 2),
        None => value,
    }
}

fn is_zero(value: f64) -> bool {
    value == 0.0
}
