//! # effect-deck
//!
//! A turn-based, single-player deck-building card game engine.
//!
//! The player fights one enemy with a hand of cards drawn from a deck. Cards
//! cost energy; some grant *contexts* (buff tags) that later *dependent*
//! cards require. The engine is a pure request/response core: renderers
//! submit an `Action` and render the `GameResponse` they get back.
//!
//! ## Design Principles
//!
//! 1. **Data-driven cards**: The `CardCatalog` describes cards, the
//!    `EffectRegistry` says what they do. The two meet only by card id.
//!
//! 2. **Errors are values**: Every rejected action is a typed `GameError`
//!    and leaves the state untouched.
//!
//! 3. **Injectable randomness**: Random damage goes through `RandomSource`,
//!    so games replay exactly from a seed and tests script their rolls.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) state cloning via `im-rs`. The
//!   engine mutates a working copy and commits it with one assignment.
//!
//! - **Explicit Phases**: `draw -> action -> enemy -> cleanup`, walked in
//!   order by `end_turn`.
//!
//! ## Modules
//!
//! - `core`: State, actions, errors, RNG, configuration
//! - `cards`: Card definitions and the catalog
//! - `combat`: Damage and shield arithmetic
//! - `effects`: Card effects, validation rules and the effect registry
//! - `rules`: The game engine state machine
//! - `session`: Lock-guarded shared engine with subscriptions
//!
//! ## Example
//!
//! ```
//! use effect_deck::{Action, GameConfig, GameEngine, RulesEngine};
//!
//! let mut engine = GameEngine::standard(GameConfig::default()).unwrap();
//! engine.start_new_game();
//!
//! let response = engine.process_action(&Action::play_card("strike")).unwrap();
//! assert_eq!(response.game_state.enemy.unwrap().health, 24);
//! ```

pub mod core;
pub mod cards;
pub mod combat;
pub mod effects;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, GameResponse,
    GameConfig, EnemyConfig,
    GameError, GameResult, ErrorKind,
    GameRng, RandomSource, ScriptedRng,
    GameState, Phase, Player, Enemy,
};

pub use crate::cards::{Card, CardType, CardCatalog, get_card, get_all_cards};

pub use crate::combat::{apply_damage, add_shield, Combatant};

pub use crate::effects::{
    CardEffect, ComposedEffect, EffectStep, EffectRegistry, Validation, Requirement,
    get_all_effects,
};

pub use crate::rules::{GameEngine, GameEngineBuilder, RulesEngine};

pub use crate::session::{GameSession, SubscriptionId};
