//! Game configuration types.
//!
//! Games are configured at startup by providing:
//! - `EnemyConfig`: The scripted enemy (name, health, damage, intent)
//! - `GameConfig`: Player stats, deck and draw sizes, RNG seed, rule toggles
//!
//! The defaults reproduce the shipped game exactly.

use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};
use super::state::Enemy;

/// Configuration for the scripted enemy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnemyConfig {
    pub id: String,
    pub name: String,
    pub max_health: u32,
    pub damage: u32,

    /// Intent text. `None` derives "Attack for {damage}".
    pub intent: Option<String>,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            id: "basic_enemy".to_string(),
            name: "Corrupted Process".to_string(),
            max_health: 30,
            damage: 8,
            intent: None,
        }
    }
}

impl EnemyConfig {
    /// Create an enemy configuration.
    pub fn new(name: impl Into<String>, max_health: u32, damage: u32) -> Self {
        Self {
            name: name.into(),
            max_health,
            damage,
            ..Self::default()
        }
    }

    /// Set the intent text.
    #[must_use]
    pub fn with_intent(mut self, intent: impl Into<String>) -> Self {
        self.intent = Some(intent.into());
        self
    }

    /// Build a fresh enemy at full health.
    #[must_use]
    pub fn spawn(&self) -> Enemy {
        Enemy {
            id: self.id.clone(),
            name: self.name.clone(),
            health: self.max_health,
            max_health: self.max_health,
            shield: 0,
            intent: self
                .intent
                .clone()
                .unwrap_or_else(|| format!("Attack for {}", self.damage)),
            damage: self.damage,
        }
    }
}

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use effect_deck::core::{EnemyConfig, GameConfig};
///
/// let config = GameConfig::new()
///     .with_seed(7)
///     .with_enemy(EnemyConfig::new("Memory Leak", 40, 6))
///     .with_draw_per_turn(3);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.enemy.spawn().intent, "Attack for 6");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub game_id: String,
    pub player_id: String,
    pub player_max_health: u32,
    pub player_max_energy: u32,

    /// Starting deck size, taken from the front of the catalog.
    pub starting_deck_size: usize,

    /// Cards drawn when a game starts.
    pub opening_hand_size: usize,

    /// Cards drawn at the start of each later round.
    pub draw_per_turn: usize,

    pub enemy: EnemyConfig,

    /// Seed for the game's random streams.
    pub seed: u64,

    /// Shuffle the starting deck instead of keeping catalog order.
    pub shuffle_deck: bool,

    /// Let an active `Dodge` context cancel (and be consumed by) the next
    /// enemy attack. Off by default: the shipped game grants the tag but
    /// never reads it.
    pub dodge_negates_attack: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            game_id: "game_1".to_string(),
            player_id: "player".to_string(),
            player_max_health: 50,
            player_max_energy: 3,
            starting_deck_size: 10,
            opening_hand_size: 5,
            draw_per_turn: 2,
            enemy: EnemyConfig::default(),
            seed: 0,
            shuffle_deck: false,
            dodge_negates_attack: false,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_enemy(mut self, enemy: EnemyConfig) -> Self {
        self.enemy = enemy;
        self
    }

    #[must_use]
    pub fn with_player_stats(mut self, max_health: u32, max_energy: u32) -> Self {
        self.player_max_health = max_health;
        self.player_max_energy = max_energy;
        self
    }

    #[must_use]
    pub fn with_starting_deck_size(mut self, size: usize) -> Self {
        self.starting_deck_size = size;
        self
    }

    #[must_use]
    pub fn with_opening_hand_size(mut self, size: usize) -> Self {
        self.opening_hand_size = size;
        self
    }

    #[must_use]
    pub fn with_draw_per_turn(mut self, count: usize) -> Self {
        self.draw_per_turn = count;
        self
    }

    #[must_use]
    pub fn shuffled(mut self) -> Self {
        self.shuffle_deck = true;
        self
    }

    #[must_use]
    pub fn with_dodge_negating_attacks(mut self) -> Self {
        self.dodge_negates_attack = true;
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> GameResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GameError::invalid_action("load_config", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration describes a playable game.
    pub fn validate(&self) -> GameResult<()> {
        let reject = |reason: &str| -> GameResult<()> { Err(GameError::invalid_action("configure", reason)) };

        if self.player_max_health == 0 {
            return reject("player max health must be positive");
        }
        if self.enemy.max_health == 0 {
            return reject("enemy max health must be positive");
        }
        if self.starting_deck_size == 0 {
            return reject("starting deck must not be empty");
        }
        if self.opening_hand_size > self.starting_deck_size {
            return reject("opening hand is larger than the starting deck");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    #[test]
    fn test_defaults_match_shipped_game() {
        let config = GameConfig::default();
        assert_eq!(config.player_max_health, 50);
        assert_eq!(config.player_max_energy, 3);
        assert_eq!(config.starting_deck_size, 10);
        assert_eq!(config.opening_hand_size, 5);
        assert_eq!(config.draw_per_turn, 2);
        assert!(!config.shuffle_deck);
        assert!(!config.dodge_negates_attack);

        let enemy = config.enemy.spawn();
        assert_eq!(enemy.name, "Corrupted Process");
        assert_eq!(enemy.health, 30);
        assert_eq!(enemy.max_health, 30);
        assert_eq!(enemy.damage, 8);
        assert_eq!(enemy.intent, "Attack for 8");
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_seed(9)
            .with_player_stats(20, 4)
            .with_enemy(EnemyConfig::new("Deadlock", 12, 3).with_intent("Lock up"))
            .shuffled()
            .with_dodge_negating_attacks();

        assert_eq!(config.seed, 9);
        assert_eq!(config.player_max_energy, 4);
        assert_eq!(config.enemy.spawn().intent, "Lock up");
        assert!(config.shuffle_deck);
        assert!(config.dodge_negates_attack);
    }

    #[test]
    fn test_validate_rejects_unplayable() {
        let err = GameConfig::new().with_player_stats(0, 3).validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidAction);

        assert!(GameConfig::new().with_starting_deck_size(0).validate().is_err());
        assert!(GameConfig::new().with_opening_hand_size(11).validate().is_err());
        assert!(GameConfig::new().with_enemy(EnemyConfig::new("x", 0, 1)).validate().is_err());
    }

    #[test]
    fn test_from_json_partial() {
        let config = GameConfig::from_json(r#"{"seed": 42, "enemy": {"name": "Race Condition"}}"#).unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.enemy.name, "Race Condition");
        assert_eq!(config.enemy.max_health, 30);
        assert_eq!(config.draw_per_turn, 2);

        assert!(GameConfig::from_json(r#"{"startingDeckSize": 0}"#).is_err());
        assert!(GameConfig::from_json("[]").is_err());
    }
}
