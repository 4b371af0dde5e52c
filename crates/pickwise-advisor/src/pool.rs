//! Pool analysis: what the drafter has already picked.
//!
//! A [`PoolSummary`] is derived from the pool and never updated in place.
//! Whenever the pool grows it must be rebuilt with [`PoolSummary::analyze`]
//! (or through [`PickTracker`](crate::tracker::PickTracker), which does it on
//! every pick).

use std::collections::BTreeMap;

use arrayvec::ArrayVec;
use pickwise_dataset::{CardStat, Color};

/// Number of colors a drafter is considered committed to.
pub const ACTIVE_COLOR_COUNT: usize = 2;

/// The colors the drafter is currently leaning into, strongest first.
pub type ActiveColors = ArrayVec<Color, ACTIVE_COLOR_COUNT>;

/// Structural summary of a card pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolSummary {
    /// Number of cards per mana value.
    pub curve: BTreeMap<u32, u32>,
    pub creature_count: u32,
    /// Instants and sorceries.
    pub interaction_count: u32,
    /// Cards per color, in the order each color was first encountered.
    ///
    /// Multicolor cards count toward every one of their colors.
    pub color_weights: Vec<(Color, u32)>,
}

impl PoolSummary {
    /// Summarizes `pool`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pickwise_advisor::pool::PoolSummary;
    /// use pickwise_dataset::{CardStat, Color};
    ///
    /// let mut bear = CardStat::named("Bear");
    /// bear.mana_value = 2;
    /// bear.types = vec!["Creature".to_owned()];
    /// bear.colors = vec![Color::Green];
    ///
    /// let summary = PoolSummary::analyze([&bear, &bear]);
    /// assert_eq!(summary.cards_at(2), 2);
    /// assert_eq!(summary.creature_count, 2);
    /// assert_eq!(summary.active_colors().as_slice(), [Color::Green]);
    /// ```
    pub fn analyze<'a, I>(pool: I) -> Self
    where
        I: IntoIterator<Item = &'a CardStat>,
    {
        let mut summary = Self::default();
        for card in pool {
            *summary.curve.entry(card.mana_value).or_default() += 1;
            if card.is_creature() {
                summary.creature_count += 1;
            }
            if card.is_interaction() {
                summary.interaction_count += 1;
            }
            for &color in &card.colors {
                summary.add_color(color);
            }
        }
        summary
    }

    fn add_color(&mut self, color: Color) {
        match self.color_weights.iter_mut().find(|(c, _)| *c == color) {
            Some((_, weight)) => *weight += 1,
            None => self.color_weights.push((color, 1)),
        }
    }

    /// Number of pool cards at exactly `mana_value`.
    #[must_use]
    pub fn cards_at(&self, mana_value: u32) -> u32 {
        self.curve.get(&mana_value).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn color_weight(&self, color: Color) -> u32 {
        self.color_weights
            .iter()
            .find_map(|&(c, weight)| (c == color).then_some(weight))
            .unwrap_or(0)
    }

    /// The two heaviest colors; ties go to the color encountered first.
    ///
    /// An empty pool has no active colors.
    #[must_use]
    pub fn active_colors(&self) -> ActiveColors {
        let mut ranked = self.color_weights.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(ACTIVE_COLOR_COUNT)
            .map(|(color, _)| color)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(mana_value: u32, types: &[&str], colors: &[Color]) -> CardStat {
        let mut card = CardStat::named("card");
        card.mana_value = mana_value;
        card.types = types.iter().map(|&t| t.to_owned()).collect();
        card.colors = colors.to_vec();
        card
    }

    #[test]
    fn test_empty_pool() {
        let summary = PoolSummary::analyze(std::iter::empty());
        assert_eq!(summary, PoolSummary::default());
        assert!(summary.active_colors().is_empty());
    }

    #[test]
    fn test_counts() {
        let pool = [
            card(2, &["Creature"], &[Color::White]),
            card(2, &["Artifact", "Creature"], &[]),
            card(3, &["Instant"], &[Color::Blue]),
            card(5, &["Sorcery"], &[Color::White, Color::Blue]),
            card(0, &["Land"], &[]),
        ];
        let summary = PoolSummary::analyze(&pool);

        assert_eq!(summary.cards_at(2), 2);
        assert_eq!(summary.cards_at(3), 1);
        assert_eq!(summary.cards_at(4), 0);
        assert_eq!(summary.creature_count, 2);
        assert_eq!(summary.interaction_count, 2);
        assert_eq!(
            summary.color_weights,
            [(Color::White, 2), (Color::Blue, 2)]
        );
        assert_eq!(summary.color_weight(Color::Red), 0);
    }

    #[test]
    fn test_active_colors_by_weight() {
        let pool = [
            card(1, &[], &[Color::Red]),
            card(1, &[], &[Color::Green]),
            card(1, &[], &[Color::Green]),
            card(1, &[], &[Color::Black]),
            card(1, &[], &[Color::Black]),
            card(1, &[], &[Color::Black]),
        ];
        let summary = PoolSummary::analyze(&pool);
        assert_eq!(
            summary.active_colors().as_slice(),
            [Color::Black, Color::Green]
        );
    }

    #[test]
    fn test_active_color_ties_keep_encounter_order() {
        let pool = [
            card(1, &[], &[Color::Green]),
            card(1, &[], &[Color::White]),
            card(1, &[], &[Color::Blue]),
            card(1, &[], &[Color::Blue, Color::White]),
        ];
        let summary = PoolSummary::analyze(&pool);
        assert_eq!(
            summary.active_colors().as_slice(),
            [Color::White, Color::Blue]
        );
    }
}
