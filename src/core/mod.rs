//! Core engine types: state, actions, errors, RNG, configuration.
//!
//! This module contains the data the engine passes across its boundary.
//! Rules live in `effects` and `rules`.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use action::{Action, GameResponse};
pub use config::{EnemyConfig, GameConfig};
pub use error::{ErrorKind, GameError, GameResult};
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use state::{Enemy, GameState, Phase, Player};
