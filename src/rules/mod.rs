//! Game rules: the turn state machine and action processing.
//!
//! `GameEngine` implements `RulesEngine`, the request/response surface
//! renderers drive. Card behavior is not hardcoded here; the engine looks
//! effects up in the `EffectRegistry` it was built with.

pub mod engine;

pub use engine::{GameEngine, GameEngineBuilder, RulesEngine, GAME_STARTED};
