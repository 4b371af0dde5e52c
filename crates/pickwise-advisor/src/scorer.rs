//! Pack scoring: ranking the cards of a pack for the current pick.
//!
//! Each card's score combines four factors:
//!
//! 1. **Quality** ([`quality_score`]) - the card's win rate mapped linearly
//!    onto `0..=100`, anchored at 45% and 65%
//! 2. **Power bonus** ([`power_bonus`]) - extra credit for cards more than one
//!    standard deviation above the pack mean
//! 3. **Lane commitment** ([`color_multiplier`]) - off-color cards are
//!    penalized more and more as the draft goes on, except bombs
//! 4. **Structural hunger** ([`Hunger`]) - adjustments for unmet deck needs
//!    (creatures, two-drops, removal, curve top-end)
//!
//! ```text
//! score = clamp((quality + power_bonus) * color_multiplier * hunger, 0, 100)
//! ```
//!
//! Pick numbers are 1-based and span the whole draft; the thresholds assume
//! three packs of roughly 14 to 15 picks each.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use pickwise_advisor::{pool::PoolSummary, scorer::PackScorer};
//! use pickwise_dataset::{CardStat, CardStatStore, Color, fields::ALL_DECKS};
//!
//! let card = |name: &str, win_rate: f64, color: Color| {
//!     let mut card = CardStat::named(name);
//!     card.colors = vec![color];
//!     card.deck_colors.insert(
//!         ALL_DECKS.to_owned(),
//!         [("gihwr".to_owned(), win_rate)].into(),
//!     );
//!     card
//! };
//! let pack = [card("Okay", 55.0, Color::Red), card("Great", 61.0, Color::Blue)];
//!
//! let scorer = PackScorer::new(Arc::new(CardStatStore::default()));
//! let summary = PoolSummary::analyze(std::iter::empty());
//! let ranked = scorer.evaluate_pack(&summary, &summary.active_colors(), &pack, 1);
//!
//! assert_eq!(ranked[0].card_name, "Great");
//! assert_eq!(ranked[0].contextual_score, 80.0);
//! assert_eq!(ranked[1].contextual_score, 50.0);
//! ```

use std::sync::Arc;

use pickwise_dataset::{CardStat, CardStatStore, Color};
use pickwise_stats::{
    descriptive::{DescriptiveStats, z_score},
    rounding::round_to,
};
use serde::Serialize;

use crate::pool::PoolSummary;

/// Win rate mapped to a quality score of 0.
pub const QUALITY_FLOOR_WIN_RATE: f64 = 45.0;
/// Quality points per win-rate percentage point above the floor.
pub const QUALITY_SCALE: f64 = 5.0;
pub const MAX_SCORE: f64 = 100.0;

/// Pack mean used when there is nothing to average.
pub const DEFAULT_PACK_MEAN: f64 = 54.0;
/// Pack standard deviation used for single-card packs.
pub const SINGLETON_PACK_STD: f64 = 2.0;

/// Z-score above which a card earns a power bonus.
pub const POWER_BONUS_Z: f64 = 1.0;
pub const POWER_BONUS_SCALE: f64 = 15.0;
/// Z-score above which a card is a bomb and ignores lane commitment.
pub const BOMB_Z: f64 = 2.0;
/// Z-score from which a card is flagged as elite.
pub const ELITE_Z: f64 = 1.5;

/// Last pick at which every color is still open.
pub const OPEN_LANE_LAST_PICK: u32 = 7;
/// First pick from which an off-color bomb is discounted more heavily.
pub const BOMB_LATE_PICK: u32 = 25;
pub const BOMB_EARLY_MULTIPLIER: f64 = 0.9;
pub const BOMB_LATE_MULTIPLIER: f64 = 0.5;
pub const ON_COLOR_MULTIPLIER: f64 = 1.1;
/// Off-color multipliers by the last pick they apply to.
pub const OFF_COLOR_PENALTIES: [(u32, f64); 2] = [(14, 0.7), (28, 0.3)];
pub const OFF_COLOR_LATE_MULTIPLIER: f64 = 0.05;

/// Creatures a finished deck wants, pro-rated over the draft.
pub const TARGET_CREATURES: f64 = 16.0;
/// Picks in a full draft.
pub const DRAFT_PICKS: f64 = 40.0;
pub const CREATURE_NEED_BONUS: f64 = 0.2;
pub const TWO_DROP_TARGET: u32 = 3;
pub const TWO_DROP_MIN_PICK: u32 = 10;
pub const TWO_DROP_BONUS: f64 = 0.15;
pub const INTERACTION_TARGET: u32 = 2;
pub const INTERACTION_MIN_PICK: u32 = 15;
pub const INTERACTION_NEED_BONUS: f64 = 0.3;
pub const TOP_END_MANA_VALUE: u32 = 5;
/// Pool cards at [`TOP_END_MANA_VALUE`] beyond which top-end is penalized.
pub const TOP_END_LIMIT: u32 = 4;
pub const TOP_END_PENALTY: f64 = 0.2;

pub const REASON_CREATURES: &str = "Structural Need: Creatures";
pub const REASON_TWO_DROPS: &str = "Curve Fill: 2-Drops";
pub const REASON_REMOVAL: &str = "Critical Removal Need";
pub const REASON_TOP_END: &str = "Curve Risk: Excessive Top-end";

pub const NEUTRAL_ARCHETYPE: &str = "Neutral";

/// A scored card, ready for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub card_name: String,
    /// All-decks games-in-hand win rate.
    pub base_win_rate: f64,
    /// Final score in `0..=100`, one decimal.
    pub contextual_score: f64,
    /// Win rate in pack standard deviations, two decimals.
    pub z_score: f64,
    /// Human-readable hunger adjustments, in the order applied.
    pub reasoning: Vec<String>,
    pub is_elite: bool,
    pub archetype_fit: String,
}

/// Ranks pack cards against the active dataset.
///
/// The scorer holds a snapshot of the store; evaluation itself is a pure
/// function of its arguments, so one scorer can score any number of packs,
/// concurrently if needed.
#[derive(Debug, Clone)]
pub struct PackScorer {
    store: Arc<CardStatStore>,
}

impl PackScorer {
    #[must_use]
    pub fn new(store: Arc<CardStatStore>) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &CardStatStore {
        &self.store
    }

    /// Scores `pack` and returns it sorted by descending score.
    ///
    /// Cards with equal scores keep their pack order. An empty pack yields
    /// an empty list.
    ///
    /// `summary` and `active` must describe the current pool; rebuild them
    /// after every pick.
    pub fn evaluate_pack<'a, I>(
        &self,
        summary: &PoolSummary,
        active: &[Color],
        pack: I,
        current_pick: u32,
    ) -> Vec<Recommendation>
    where
        I: IntoIterator<Item = &'a CardStat>,
    {
        let pack = pack.into_iter().collect::<Vec<_>>();
        if pack.is_empty() {
            return vec![];
        }

        let (mean, std_dev) = pack_distribution(&pack);
        tracing::debug!(
            cards = pack.len(),
            mean,
            std_dev,
            current_pick,
            "evaluating pack"
        );

        let mut recommendations = pack
            .into_iter()
            .map(|card| score_card(card, summary, active, mean, std_dev, current_pick))
            .collect::<Vec<_>>();
        recommendations.sort_by(|a, b| b.contextual_score.total_cmp(&a.contextual_score));
        recommendations
    }

    /// Like [`evaluate_pack`](Self::evaluate_pack), resolving the pack from
    /// card ids in the held store. Unknown ids are skipped.
    pub fn evaluate_ids<'a, I>(
        &self,
        summary: &PoolSummary,
        active: &[Color],
        ids: I,
        current_pick: u32,
    ) -> Vec<Recommendation>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let pack = self.store.cards_by_ids(ids);
        self.evaluate_pack(summary, active, pack, current_pick)
    }
}

/// Mean and population standard deviation of the pack's win rates.
fn pack_distribution(pack: &[&CardStat]) -> (f64, f64) {
    let Some(stats) = DescriptiveStats::new(pack.iter().map(|card| card.win_rate())) else {
        return (DEFAULT_PACK_MEAN, 0.0);
    };
    if stats.count == 1 {
        (stats.mean, SINGLETON_PACK_STD)
    } else {
        (stats.mean, stats.std_dev)
    }
}

fn score_card(
    card: &CardStat,
    summary: &PoolSummary,
    active: &[Color],
    pack_mean: f64,
    pack_std: f64,
    current_pick: u32,
) -> Recommendation {
    let win_rate = card.win_rate();
    let z = z_score(win_rate, pack_mean, pack_std);
    let base = quality_score(win_rate) + power_bonus(z);
    let color = color_multiplier(card, active, z, current_pick);
    let hunger = Hunger::assess(card, summary, current_pick);
    let score = round_to((base * color * hunger.multiplier).clamp(0.0, MAX_SCORE), 1);

    tracing::trace!(
        card = %card.name,
        win_rate,
        z,
        color,
        hunger = hunger.multiplier,
        score,
        "scored card"
    );

    Recommendation {
        card_name: card.name.clone(),
        base_win_rate: win_rate,
        contextual_score: score,
        z_score: round_to(z, 2),
        reasoning: hunger.reasons.into_iter().map(str::to_owned).collect(),
        is_elite: z >= ELITE_Z,
        archetype_fit: NEUTRAL_ARCHETYPE.to_owned(),
    }
}

/// Win rate mapped onto `0..=100`: 45% or less is 0, 65% or more is 100.
///
/// # Examples
///
/// ```
/// use pickwise_advisor::scorer::quality_score;
///
/// assert_eq!(quality_score(55.0), 50.0);
/// assert_eq!(quality_score(80.0), 100.0);
/// ```
#[must_use]
pub fn quality_score(win_rate: f64) -> f64 {
    ((win_rate - QUALITY_FLOOR_WIN_RATE) * QUALITY_SCALE).clamp(0.0, MAX_SCORE)
}

/// `z * 15` for cards strictly more than one standard deviation above the
/// pack mean, `0` otherwise.
#[must_use]
pub fn power_bonus(z: f64) -> f64 {
    if z > POWER_BONUS_Z {
        (z * POWER_BONUS_SCALE).max(0.0)
    } else {
        0.0
    }
}

/// Lane-commitment multiplier for `card` at `current_pick`.
///
/// Colorless cards and picks up to 7 are never penalized. Later, bombs
/// (`z > 2`) get a flat discount instead of the lane logic, on-color cards a
/// bonus, and off-color cards an escalating penalty. With no active colors
/// every colored card counts as off-color.
#[must_use]
pub fn color_multiplier(card: &CardStat, active: &[Color], z: f64, current_pick: u32) -> f64 {
    if card.is_colorless() || current_pick <= OPEN_LANE_LAST_PICK {
        return 1.0;
    }
    if z > BOMB_Z {
        return if current_pick < BOMB_LATE_PICK {
            BOMB_EARLY_MULTIPLIER
        } else {
            BOMB_LATE_MULTIPLIER
        };
    }
    if card.colors.iter().any(|color| active.contains(color)) {
        return ON_COLOR_MULTIPLIER;
    }
    OFF_COLOR_PENALTIES
        .iter()
        .find(|(last_pick, _)| current_pick <= *last_pick)
        .map_or(OFF_COLOR_LATE_MULTIPLIER, |&(_, multiplier)| multiplier)
}

/// Structural-hunger adjustment of one card against the pool.
#[derive(Debug, Clone, PartialEq)]
pub struct Hunger {
    /// `1.0` plus every applied adjustment.
    pub multiplier: f64,
    pub reasons: Vec<&'static str>,
}

impl Hunger {
    #[must_use]
    pub fn assess(card: &CardStat, summary: &PoolSummary, current_pick: u32) -> Self {
        let mut hunger = Self {
            multiplier: 1.0,
            reasons: vec![],
        };
        let pick = f64::from(current_pick);

        if card.is_creature()
            && f64::from(summary.creature_count) < pick / DRAFT_PICKS * TARGET_CREATURES
        {
            hunger.adjust(CREATURE_NEED_BONUS, REASON_CREATURES);
            // Two-drops are only sought while creatures are still needed.
            if card.mana_value == 2
                && summary.cards_at(2) < TWO_DROP_TARGET
                && current_pick > TWO_DROP_MIN_PICK
            {
                hunger.adjust(TWO_DROP_BONUS, REASON_TWO_DROPS);
            }
        }
        if card.is_interaction()
            && summary.interaction_count < INTERACTION_TARGET
            && current_pick > INTERACTION_MIN_PICK
        {
            hunger.adjust(INTERACTION_NEED_BONUS, REASON_REMOVAL);
        }
        if card.mana_value >= TOP_END_MANA_VALUE
            && summary.cards_at(TOP_END_MANA_VALUE) > TOP_END_LIMIT
        {
            hunger.adjust(-TOP_END_PENALTY, REASON_TOP_END);
        }
        hunger
    }

    fn adjust(&mut self, delta: f64, reason: &'static str) {
        self.multiplier += delta;
        self.reasons.push(reason);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use pickwise_dataset::fields::{ALL_DECKS, GIHWR};

    use super::*;

    fn card(name: &str, win_rate: f64, colors: &[Color], types: &[&str], mana_value: u32) -> CardStat {
        let mut card = CardStat::named(name);
        card.mana_value = mana_value;
        card.colors = colors.to_vec();
        card.types = types.iter().map(|&t| t.to_owned()).collect();
        card.deck_colors.insert(
            ALL_DECKS.to_owned(),
            [(GIHWR.to_owned(), win_rate)].into(),
        );
        card
    }

    fn plain(name: &str, win_rate: f64) -> CardStat {
        card(name, win_rate, &[], &[], 3)
    }

    fn scorer() -> PackScorer {
        PackScorer::new(Arc::new(CardStatStore::default()))
    }

    fn evaluate(pack: &[CardStat], pool: &[CardStat], current_pick: u32) -> Vec<Recommendation> {
        let summary = PoolSummary::analyze(pool);
        scorer().evaluate_pack(&summary, &summary.active_colors(), pack, current_pick)
    }

    #[test]
    fn test_worked_scenario() {
        let pack = [
            card("A", 65.0, &[Color::White], &["Creature"], 2),
            card("B", 50.0, &[Color::Blue], &["Instant"], 1),
        ];
        let ranked = evaluate(&pack, &[], 1);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].card_name, "A");
        assert_eq!(ranked[0].contextual_score, 100.0);
        assert_eq!(ranked[0].z_score, 1.0);
        assert_eq!(ranked[0].reasoning, [REASON_CREATURES]);
        assert!(!ranked[0].is_elite);
        assert_eq!(ranked[0].archetype_fit, NEUTRAL_ARCHETYPE);
        assert_eq!(ranked[1].card_name, "B");
        assert_eq!(ranked[1].contextual_score, 25.0);
        assert_eq!(ranked[1].z_score, -1.0);
        assert!(ranked[1].reasoning.is_empty());
        assert_eq!(ranked[1].base_win_rate, 50.0);
    }

    #[test]
    fn test_empty_pack() {
        assert!(evaluate(&[], &[], 1).is_empty());
    }

    mod quality {
        use super::*;

        #[test]
        fn test_anchors_and_clamping() {
            assert_eq!(quality_score(45.0), 0.0);
            assert_eq!(quality_score(65.0), 100.0);
            assert_eq!(quality_score(75.0), 100.0);
            assert_eq!(quality_score(30.0), 0.0);
            assert_abs_diff_eq!(quality_score(57.3), 61.5, epsilon = 1e-9);
        }

        #[test]
        fn test_power_bonus_threshold() {
            assert_eq!(power_bonus(1.0), 0.0);
            assert_eq!(power_bonus(-3.0), 0.0);
            assert_eq!(power_bonus(2.0), 30.0);
        }
    }

    mod statistics {
        use super::*;

        #[test]
        fn test_singleton_pack_has_zero_z() {
            let ranked = evaluate(&[plain("Only", 62.0)], &[], 3);
            assert_eq!(ranked[0].z_score, 0.0);
            assert_eq!(ranked[0].contextual_score, 85.0);
        }

        #[test]
        fn test_identical_pack_has_zero_z() {
            let pack = [plain("A", 58.0), plain("B", 58.0), plain("C", 58.0)];
            let ranked = evaluate(&pack, &[], 3);
            assert!(ranked.iter().all(|r| r.z_score == 0.0));
        }

        #[test]
        fn test_missing_win_rate_counts_as_zero() {
            let mut unknown = CardStat::named("Unknown");
            unknown.types = vec!["Creature".to_owned()];
            let ranked = evaluate(&[unknown, plain("Known", 60.0)], &[], 3);
            assert_eq!(ranked[0].card_name, "Known");
            assert_eq!(ranked[1].base_win_rate, 0.0);
            assert_eq!(ranked[1].contextual_score, 0.0);
        }

        #[test]
        fn test_elite_and_power_bonus() {
            // mean 50, std 2: the top card sits at z = 2.
            let pack = [
                plain("Top", 54.0),
                plain("Low1", 49.0),
                plain("Low2", 49.0),
                plain("Low3", 49.0),
                plain("Low4", 49.0),
            ];
            let ranked = evaluate(&pack, &[], 3);
            let top = &ranked[0];
            assert_eq!(top.card_name, "Top");
            assert_eq!(top.z_score, 2.0);
            assert!(top.is_elite);
            // (45 + 2 * 15) * 1.0 * 1.0
            assert_eq!(top.contextual_score, 75.0);
            assert_eq!(ranked[1].z_score, -0.5);
            assert!(!ranked[1].is_elite);
            assert_eq!(ranked[1].contextual_score, 20.0);
        }
    }

    mod ordering {
        use super::*;

        #[test]
        fn test_sorted_descending() {
            let pack = [plain("Low", 50.0), plain("High", 60.0), plain("Mid", 55.0)];
            let names = evaluate(&pack, &[], 2)
                .into_iter()
                .map(|r| r.card_name)
                .collect::<Vec<_>>();
            assert_eq!(names, ["High", "Mid", "Low"]);
        }

        #[test]
        fn test_ties_keep_pack_order() {
            let pack = [
                plain("First", 70.0),
                plain("Weak", 40.0),
                plain("Second", 80.0),
                plain("Third", 66.0),
            ];
            let names = evaluate(&pack, &[], 2)
                .into_iter()
                .map(|r| r.card_name)
                .collect::<Vec<_>>();
            // First, Second and Third all clamp to 100.
            assert_eq!(names, ["First", "Second", "Third", "Weak"]);
        }

        #[test]
        fn test_scores_stay_in_range() {
            let pack = [
                card("Bomb", 90.0, &[], &["Creature"], 2),
                card("Dud", 10.0, &[Color::Red], &["Sorcery"], 7),
                card("Mid", 55.0, &[Color::Green], &["Instant"], 2),
            ];
            let pool = vec![card("Top", 50.0, &[Color::White], &[], 5); 6];
            for pick in [1, 8, 16, 26, 30, 45] {
                for r in evaluate(&pack, &pool, pick) {
                    assert!((0.0..=100.0).contains(&r.contextual_score), "{r:?}");
                }
            }
        }
    }

    mod lane {
        use super::*;

        fn red() -> CardStat {
            card("Red", 55.0, &[Color::Red], &[], 3)
        }

        #[test]
        fn test_open_early() {
            assert_eq!(color_multiplier(&red(), &[Color::White, Color::Blue], 0.0, 5), 1.0);
            assert_eq!(color_multiplier(&red(), &[Color::White, Color::Blue], 0.0, 7), 1.0);
        }

        #[test]
        fn test_colorless_never_penalized() {
            assert_eq!(color_multiplier(&plain("Rock", 55.0), &[Color::White], 0.0, 30), 1.0);
        }

        #[test]
        fn test_bomb_overrides_lane() {
            let active = [Color::White, Color::Blue];
            assert_eq!(color_multiplier(&red(), &active, 2.5, 20), 0.9);
            assert_eq!(color_multiplier(&red(), &active, 2.5, 25), 0.5);
            assert_eq!(color_multiplier(&red(), &[Color::Red], 2.5, 20), 0.9);
        }

        #[test]
        fn test_on_color_bonus() {
            let gold = card("Gold", 55.0, &[Color::Blue, Color::Red], &[], 3);
            assert_eq!(color_multiplier(&gold, &[Color::Red, Color::Green], 0.0, 12), 1.1);
        }

        #[test]
        fn test_off_color_escalation() {
            let active = [Color::White, Color::Blue];
            for (pick, expected) in [(8, 0.7), (14, 0.7), (15, 0.3), (28, 0.3), (29, 0.05), (30, 0.05)] {
                assert_eq!(color_multiplier(&red(), &active, 0.0, pick), expected, "pick {pick}");
            }
        }

        #[test]
        fn test_no_active_colors_is_off_color() {
            assert_eq!(color_multiplier(&red(), &[], 0.0, 8), 0.7);
        }
    }

    mod hunger {
        use super::*;

        fn pool_of(cards: usize, mana_value: u32, types: &[&str]) -> PoolSummary {
            let pool = vec![card("Pool", 55.0, &[], types, mana_value); cards];
            PoolSummary::analyze(&pool)
        }

        #[test]
        fn test_creature_need() {
            let bear = card("Bear", 55.0, &[], &["Creature"], 3);
            let hunger = Hunger::assess(&bear, &PoolSummary::default(), 1);
            assert_abs_diff_eq!(hunger.multiplier, 1.2, epsilon = 1e-12);
            assert_eq!(hunger.reasons, [REASON_CREATURES]);

            // 20 / 40 * 16 = 8 creatures expected by pick 20.
            let hunger = Hunger::assess(&bear, &pool_of(8, 3, &["Creature"]), 20);
            assert!(hunger.reasons.is_empty());
        }

        #[test]
        fn test_two_drop_need_requires_creature_need() {
            let bear = card("Bear", 55.0, &[], &["Creature"], 2);
            let hunger = Hunger::assess(&bear, &PoolSummary::default(), 11);
            assert_abs_diff_eq!(hunger.multiplier, 1.35, epsilon = 1e-12);
            assert_eq!(hunger.reasons, [REASON_CREATURES, REASON_TWO_DROPS]);

            let hunger = Hunger::assess(&bear, &PoolSummary::default(), 10);
            assert_eq!(hunger.reasons, [REASON_CREATURES]);

            let hunger = Hunger::assess(&bear, &pool_of(10, 3, &["Creature"]), 11);
            assert!(hunger.reasons.is_empty());

            let hunger = Hunger::assess(&bear, &pool_of(3, 2, &[]), 11);
            assert_eq!(hunger.reasons, [REASON_CREATURES]);
        }

        #[test]
        fn test_removal_need() {
            let bolt = card("Bolt", 55.0, &[], &["Instant"], 1);
            let hunger = Hunger::assess(&bolt, &PoolSummary::default(), 16);
            assert_abs_diff_eq!(hunger.multiplier, 1.3, epsilon = 1e-12);
            assert_eq!(hunger.reasons, [REASON_REMOVAL]);

            assert!(Hunger::assess(&bolt, &PoolSummary::default(), 15).reasons.is_empty());
            assert!(Hunger::assess(&bolt, &pool_of(2, 2, &["Sorcery"]), 16).reasons.is_empty());
        }

        #[test]
        fn test_top_end_risk() {
            let giant = card("Giant", 55.0, &[], &[], 6);
            let hunger = Hunger::assess(&giant, &pool_of(5, 5, &[]), 20);
            assert_abs_diff_eq!(hunger.multiplier, 0.8, epsilon = 1e-12);
            assert_eq!(hunger.reasons, [REASON_TOP_END]);

            assert!(Hunger::assess(&giant, &pool_of(4, 5, &[]), 20).reasons.is_empty());
            // Only cards at exactly mana value 5 count toward the limit.
            assert!(Hunger::assess(&giant, &pool_of(9, 6, &[]), 20).reasons.is_empty());
        }

        #[test]
        fn test_reasons_flow_into_recommendation() {
            let pack = [card("Bolt", 60.0, &[], &["Sorcery"], 1)];
            let ranked = evaluate(&pack, &[], 20);
            assert_eq!(ranked[0].reasoning, [REASON_REMOVAL]);
            // 75 * 1.0 * 1.3
            assert_eq!(ranked[0].contextual_score, 97.5);
        }
    }

    #[test]
    fn test_evaluate_ids_skips_unknown() {
        let mut store = CardStatStore::default();
        store.card_ratings.insert("1".to_owned(), plain("One", 60.0));
        store.card_ratings.insert("2".to_owned(), plain("Two", 50.0));
        let scorer = PackScorer::new(Arc::new(store));
        let summary = PoolSummary::default();

        let ranked = scorer.evaluate_ids(&summary, &[], ["2", "404", "1"], 1);
        let names = ranked.iter().map(|r| r.card_name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, ["One", "Two"]);
    }

    #[test]
    fn test_recommendation_serializes() {
        let ranked = evaluate(&[plain("Solo", 55.0)], &[], 1);
        let value = serde_json::to_value(&ranked[0]).unwrap();
        assert_eq!(value["card_name"], "Solo");
        assert_eq!(value["contextual_score"], 50.0);
        assert_eq!(value["archetype_fit"], "Neutral");
    }
}
