//! Game state: the authoritative snapshot.
//!
//! ## GameState
//!
//! - Turn counter and phase
//! - Player (health, energy, shield, card zones, contexts)
//! - Optional enemy (absent once removed from play)
//! - Append-only event log
//! - Game-over and victory flags
//!
//! Card zones, contexts and the log use `im` persistent vectors, so cloning
//! a whole state is O(1). The engine relies on this: it clones, mutates the
//! clone, and commits only when the action fully succeeds.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Position in the turn state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Draw,
    Action,
    Enemy,
    Cleanup,
}

impl Phase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Draw => "draw",
            Phase::Action => "action",
            Phase::Enemy => "enemy",
            Phase::Cleanup => "cleanup",
        }
    }

    /// The phase that follows this one.
    #[must_use]
    pub const fn next(self) -> Phase {
        match self {
            Phase::Draw => Phase::Action,
            Phase::Action => Phase::Enemy,
            Phase::Enemy => Phase::Cleanup,
            Phase::Cleanup => Phase::Draw,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The player.
///
/// A card is in exactly one of `deck`, `hand`, `discard`. `contexts` never
/// holds the same tag twice; use `add_context` rather than pushing directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub health: u32,
    pub max_health: u32,
    pub energy: u32,
    pub max_energy: u32,
    pub shield: u32,

    /// Cards available to play, in draw order.
    pub hand: Vector<Card>,

    /// Draw pile. Index 0 is drawn first.
    pub deck: Vector<Card>,

    /// Played cards, oldest first.
    pub discard: Vector<Card>,

    /// Active buff tags, in activation order.
    pub contexts: Vector<String>,
}

impl Player {
    /// Create a player at full health and energy with the given deck.
    #[must_use]
    pub fn new(id: impl Into<String>, max_health: u32, max_energy: u32, deck: impl IntoIterator<Item = Card>) -> Self {
        Self {
            id: id.into(),
            health: max_health,
            max_health,
            energy: max_energy,
            max_energy,
            shield: 0,
            hand: Vector::new(),
            deck: deck.into_iter().collect(),
            discard: Vector::new(),
            contexts: Vector::new(),
        }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    #[must_use]
    pub fn has_context(&self, tag: &str) -> bool {
        self.contexts.iter().any(|c| c == tag)
    }

    /// Add a context tag. Returns `false` if it was already active.
    pub fn add_context(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.has_context(&tag) {
            return false;
        }
        self.contexts.push_back(tag);
        true
    }

    /// Remove a context tag. Returns `false` if it was not active.
    pub fn remove_context(&mut self, tag: &str) -> bool {
        match self.contexts.iter().position(|c| c == tag) {
            Some(index) => {
                self.contexts.remove(index);
                true
            }
            None => false,
        }
    }

    /// Active context tags as owned strings.
    #[must_use]
    pub fn context_list(&self) -> Vec<String> {
        self.contexts.iter().cloned().collect()
    }

    /// Move up to `count` cards from the front of the deck to the hand.
    ///
    /// Returns the number actually drawn (fewer if the deck runs out).
    pub fn draw(&mut self, count: usize) -> usize {
        let drawn = count.min(self.deck.len());
        let rest = self.deck.split_off(drawn);
        self.hand.append(std::mem::replace(&mut self.deck, rest));
        drawn
    }

    /// Index of the first card in hand with the given id.
    #[must_use]
    pub fn find_in_hand(&self, card_id: &str) -> Option<usize> {
        self.hand.iter().position(|c| c.id == card_id)
    }

    /// Move the hand card at `index` to the top of the discard pile.
    pub fn discard_from_hand(&mut self, index: usize) -> Card {
        let card = self.hand.remove(index);
        self.discard.push_back(card.clone());
        card
    }

    /// Total cards across deck, hand and discard.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len()
    }
}

/// The single enemy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enemy {
    pub id: String,
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub shield: u32,

    /// Telegraphed next action, for display.
    pub intent: String,

    /// Damage dealt on the enemy's turn.
    pub damage: u32,
}

impl Enemy {
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub id: String,

    /// Round counter (starts at 1).
    pub turn: u32,

    pub phase: Phase,

    pub player: Player,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enemy: Option<Enemy>,

    /// Player-visible event history. Append only.
    pub log: Vector<String>,

    pub is_game_over: bool,

    /// Meaningful only when `is_game_over` is set.
    pub victory: bool,
}

impl GameState {
    /// Create a state at turn 1 in the draw phase.
    #[must_use]
    pub fn new(id: impl Into<String>, player: Player, enemy: Option<Enemy>) -> Self {
        Self {
            id: id.into(),
            turn: 1,
            phase: Phase::Draw,
            player,
            enemy,
            log: Vector::new(),
            is_game_over: false,
            victory: false,
        }
    }

    /// Append an event to the log.
    pub fn push_log(&mut self, entry: impl Into<String>) {
        self.log.push_back(entry.into());
    }

    /// Whether the enemy exists and has been reduced to 0 health.
    #[must_use]
    pub fn enemy_defeated(&self) -> bool {
        self.enemy.as_ref().is_some_and(|e| !e.is_alive())
    }

    /// Name of the enemy for log messages.
    #[must_use]
    pub fn enemy_name(&self) -> &str {
        self.enemy.as_ref().map_or("enemy", |e| e.name.as_str())
    }

    /// Mark the game as finished.
    pub fn finish(&mut self, victory: bool) {
        self.is_game_over = true;
        self.victory = victory;
    }
}
