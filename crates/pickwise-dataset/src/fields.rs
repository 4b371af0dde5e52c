//! Well-known keys of the per-set statistics documents.

/// Color context aggregating every deck regardless of colors.
pub const ALL_DECKS: &str = "All Decks";

/// Games-in-hand win rate, the baseline quality signal.
pub const GIHWR: &str = "gihwr";
/// Opening-hand win rate.
pub const OHWR: &str = "ohwr";
/// Games-played win rate.
pub const GPWR: &str = "gpwr";
/// Games-not-seen win rate.
pub const GNSWR: &str = "gnswr";
/// Games-drawn win rate.
pub const GDWR: &str = "gdwr";
/// Average last seen at.
pub const ALSA: &str = "alsa";
/// Average taken at.
pub const ATA: &str = "ata";
/// Improvement when drawn.
pub const IWD: &str = "iwd";
/// Wheel probability.
pub const WHEEL: &str = "wheel";

/// Number of games played.
pub const NGP: &str = "ngp";
/// Number of games with the card in the opening hand.
pub const NGOH: &str = "ngoh";
/// Number of games with the card in hand.
pub const GIH: &str = "gih";
/// Number of games where the card was never drawn.
pub const NGND: &str = "ngnd";
/// Number of games where the card was drawn.
pub const NGD: &str = "ngd";
/// Times the card was seen in a pack.
pub const SEEN: &str = "seen";
/// Times the card was picked.
pub const PICKED: &str = "picked";
/// Times the card ended in a pool.
pub const POOL: &str = "pool";

/// Win-rate statistics that carry a companion game count.
pub const WIN_RATE_FIELDS: [&str; 5] = [GIHWR, OHWR, GPWR, GNSWR, GDWR];

pub const CARD_TYPE_CREATURE: &str = "Creature";
pub const CARD_TYPE_INSTANT: &str = "Instant";
pub const CARD_TYPE_SORCERY: &str = "Sorcery";
