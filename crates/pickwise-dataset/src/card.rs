use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

use crate::{
    color::Color,
    fields::{ALL_DECKS, CARD_TYPE_CREATURE, CARD_TYPE_INSTANT, CARD_TYPE_SORCERY, GIHWR},
};

/// Named statistics of one card within one color context (`"gihwr" -> 61.2`, ...).
pub type DeckColorStats = BTreeMap<String, f64>;

/// One card's identity fields and its per-color-context statistics.
///
/// Identity fields that real documents sometimes omit are explicit
/// `Option`s rather than silently defaulted strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardStat {
    pub name: String,
    #[serde(
        rename = "cmc",
        default,
        deserialize_with = "deserialize_mana_value"
    )]
    pub mana_value: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mana_cost: Option<String>,
    #[serde(
        rename = "isprimarycard",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub is_primary_card: Option<bool>,
    #[serde(
        rename = "linkedfacetype",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub linked_face_type: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    /// Image reference, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<serde_json::Value>,
    #[serde(default)]
    pub colors: Vec<Color>,
    #[serde(default)]
    pub deck_colors: BTreeMap<String, DeckColorStats>,
}

impl CardStat {
    /// Creates a card with only a name; every other field is empty.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mana_value: 0,
            mana_cost: None,
            is_primary_card: None,
            linked_face_type: None,
            types: vec![],
            rarity: None,
            image: None,
            colors: vec![],
            deck_colors: BTreeMap::new(),
        }
    }

    /// Value of `field` under color context `context`, `0.0` when absent.
    #[must_use]
    pub fn stat(&self, context: &str, field: &str) -> f64 {
        self.deck_colors
            .get(context)
            .and_then(|stats| stats.get(field))
            .copied()
            .unwrap_or(0.0)
    }

    /// Games-in-hand win rate across all decks, `0.0` when absent.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        self.stat(ALL_DECKS, GIHWR)
    }

    #[must_use]
    pub fn has_type(&self, card_type: &str) -> bool {
        self.types.iter().any(|t| t == card_type)
    }

    #[must_use]
    pub fn is_creature(&self) -> bool {
        self.has_type(CARD_TYPE_CREATURE)
    }

    /// Instants and sorceries count as interaction.
    #[must_use]
    pub fn is_interaction(&self) -> bool {
        self.has_type(CARD_TYPE_INSTANT) || self.has_type(CARD_TYPE_SORCERY)
    }

    #[must_use]
    pub fn is_colorless(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Accepts integral or fractional mana values; fractions are truncated.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn deserialize_mana_value<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(D::Error::custom(format!("invalid mana value {value}")));
    }
    Ok(value as u32)
}
