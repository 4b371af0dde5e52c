//! Per-set card statistics: the document model, merging, and set-wide metrics.
//!
//! A statistics document is a JSON object with three sections:
//!
//! - `meta`: collection window, version and game count ([`SetMeta`])
//! - `color_ratings`: aggregate win rate per color pair ([`ColorRatings`])
//! - `card_ratings`: per-card identity and statistics keyed by card id ([`CardStat`])
//!
//! [`CardStatStore`] is that document in memory. Several documents for the
//! same set (for example one per player-skill segment) are combined with
//! [`DatasetMerger`], which consults a [`StatNatureTable`] to decide how each
//! statistic combines.
//!
//! # Modules
//!
//! - [`card`], [`color`], [`meta`], [`store`]: document model
//! - [`fields`]: well-known statistic and context keys
//! - [`stat_table`]: merge behavior of each statistic
//! - [`merge`]: combining documents
//! - [`naming`]: output file name of a merged dataset
//! - [`metrics`]: mean, spread and percentiles of win rates
//! - [`active`]: the swappable dataset in use
//!
//! # Examples
//!
//! ```
//! use pickwise_dataset::{CardStatStore, fields::ALL_DECKS};
//! use serde_json::json;
//!
//! let store: CardStatStore = serde_json::from_value(json!({
//!     "meta": {"start_date": "2024-04-16", "game_count": 1200},
//!     "color_ratings": {"WU": 54.3},
//!     "card_ratings": {
//!         "90001": {
//!             "name": "Bear",
//!             "cmc": 2,
//!             "types": ["Creature"],
//!             "colors": ["G"],
//!             "deck_colors": {"All Decks": {"gihwr": 56.1}}
//!         }
//!     }
//! }))
//! .unwrap();
//!
//! let bear = store.card("90001").unwrap();
//! assert!(bear.is_creature());
//! assert_eq!(bear.stat(ALL_DECKS, "gihwr"), 56.1);
//! ```

pub use self::{
    active::ActiveDataset,
    card::{CardStat, DeckColorStats},
    color::Color,
    merge::{DatasetMerger, MergeError, MergeIssue, MergeOutcome},
    meta::SetMeta,
    metrics::SetMetrics,
    stat_table::{StatNature, StatNatureTable},
    store::{CardStatStore, ColorRatings},
};

pub mod active;
pub mod card;
pub mod color;
pub mod fields;
pub mod merge;
pub mod meta;
pub mod metrics;
pub mod naming;
pub mod stat_table;
pub mod store;
