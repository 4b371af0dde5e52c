use std::sync::{Arc, PoisonError, RwLock};

use crate::store::CardStatStore;

/// The dataset currently in use, swappable while readers hold snapshots.
///
/// Readers take an [`Arc`] snapshot and keep scoring against it; a
/// [`replace`](Self::replace) only affects snapshots taken afterwards.
#[derive(Debug, Default)]
pub struct ActiveDataset {
    current: RwLock<Arc<CardStatStore>>,
}

impl ActiveDataset {
    #[must_use]
    pub fn new(store: CardStatStore) -> Self {
        Self {
            current: RwLock::new(Arc::new(store)),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Arc<CardStatStore> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&current)
    }

    /// Installs `store` and returns the previously active one.
    pub fn replace(&self, store: CardStatStore) -> Arc<CardStatStore> {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *current, Arc::new(store));
        tracing::info!(
            cards = current.card_ratings.len(),
            games = current.meta.game_count,
            "switched active dataset"
        );
        previous
    }
}
