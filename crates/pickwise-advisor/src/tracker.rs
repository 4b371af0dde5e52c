use pickwise_dataset::CardStat;

use crate::{
    pool::{ActiveColors, PoolSummary},
    scorer::{PackScorer, Recommendation},
};

/// The drafter's pool together with its derived summary.
///
/// The summary and active colors are recomputed on every change, so
/// evaluations made through the tracker never see a stale pool.
#[derive(Debug, Clone, Default)]
pub struct PickTracker {
    pool: Vec<CardStat>,
    summary: PoolSummary,
    active_colors: ActiveColors,
}

impl PickTracker {
    #[must_use]
    pub fn new(pool: Vec<CardStat>) -> Self {
        let mut tracker = Self::default();
        tracker.refresh(pool);
        tracker
    }

    /// Replaces the pool and recomputes everything derived from it.
    pub fn refresh(&mut self, pool: Vec<CardStat>) {
        self.pool = pool;
        self.recompute();
    }

    /// Adds a picked card to the pool.
    pub fn record_pick(&mut self, card: CardStat) {
        tracing::debug!(card = %card.name, pick = self.current_pick(), "recorded pick");
        self.pool.push(card);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.summary = PoolSummary::analyze(&self.pool);
        self.active_colors = self.summary.active_colors();
    }

    /// 1-based number of the pick being made now.
    #[must_use]
    pub fn current_pick(&self) -> u32 {
        u32::try_from(self.pool.len())
            .unwrap_or(u32::MAX)
            .saturating_add(1)
    }

    #[must_use]
    pub fn pool(&self) -> &[CardStat] {
        &self.pool
    }

    #[must_use]
    pub fn summary(&self) -> &PoolSummary {
        &self.summary
    }

    #[must_use]
    pub fn active_colors(&self) -> &ActiveColors {
        &self.active_colors
    }

    /// Scores `pack` for the current pick against the current pool.
    pub fn evaluate<'a, I>(&self, scorer: &PackScorer, pack: I) -> Vec<Recommendation>
    where
        I: IntoIterator<Item = &'a CardStat>,
    {
        scorer.evaluate_pack(&self.summary, &self.active_colors, pack, self.current_pick())
    }
}
