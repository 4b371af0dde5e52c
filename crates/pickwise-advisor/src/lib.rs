//! Pick recommendations for a draft in progress.
//!
//! This crate turns a card-statistics dataset, the drafter's pool and the
//! current pack into a ranked list of [`Recommendation`]s.
//!
//! # Architecture
//!
//! ```text
//! PickTracker (pool, kept in sync on every pick)
//!     ↓ rebuilds
//! PoolSummary + active colors
//!     ↓ feed
//! PackScorer (quality, power bonus, lane commitment, structural hunger)
//!     ↓ produces
//! Recommendation list, best first
//! ```
//!
//! # Modules
//!
//! - [`pool`] - Curve, creature/interaction counts and color weights of a pool
//! - [`scorer`] - Per-card scoring factors and pack ranking
//! - [`tracker`] - Pool ownership that keeps the derived summary fresh

pub use self::{
    pool::{ActiveColors, PoolSummary},
    scorer::{PackScorer, Recommendation},
    tracker::PickTracker,
};

pub mod pool;
pub mod scorer;
pub mod tracker;
