use serde::{Deserialize, Serialize};

/// One of the five card color symbols.
///
/// Declaration order is the conventional WUBRG order and drives `Ord`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Color {
    #[serde(rename = "W")]
    #[display("W")]
    White,
    #[serde(rename = "U")]
    #[display("U")]
    Blue,
    #[serde(rename = "B")]
    #[display("B")]
    Black,
    #[serde(rename = "R")]
    #[display("R")]
    Red,
    #[serde(rename = "G")]
    #[display("G")]
    Green,
}

impl Color {
    pub const ALL: [Self; 5] = [
        Self::White,
        Self::Blue,
        Self::Black,
        Self::Red,
        Self::Green,
    ];

    /// Parses a single color symbol such as `"W"`.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.to_string() == symbol)
    }
}
