//! Card definitions - static card data.
//!
//! A `Card` is an immutable value. Playing a card moves a copy of its
//! definition between the player's deck, hand, and discard; the catalog
//! entry itself is never mutated.

use serde::{Deserialize, Serialize};

/// Card category. Only `Dependent` cards carry extra play preconditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    /// Deals damage to the enemy.
    Attack,
    /// Grants shield or other protection.
    Defense,
    /// Grants a context tag (buff) to the player.
    Context,
    /// Requires a context tag or other condition to play.
    Dependent,
}

impl CardType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardType::Attack => "attack",
            CardType::Defense => "defense",
            CardType::Context => "context",
            CardType::Dependent => "dependent",
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use effect_deck::cards::{Card, CardType};
///
/// let strike = Card::new("strike", "Strike", 1, CardType::Attack)
///     .with_description("Deal 6 damage");
///
/// assert_eq!(strike.cost, 1);
/// assert!(!strike.is_dependent());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Globally unique card id (also the effect registry key).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Energy required to play.
    pub cost: u32,

    /// Display text. Never interpreted by the engine.
    pub description: String,

    /// Card category.
    #[serde(rename = "type")]
    pub card_type: CardType,
}

impl Card {
    /// Create a card with an empty description.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, cost: u32, card_type: CardType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cost,
            description: String::new(),
            card_type,
        }
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether playing this card needs more than energy.
    #[must_use]
    pub fn is_dependent(&self) -> bool {
        self.card_type == CardType::Dependent
    }
}
