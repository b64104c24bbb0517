//! Card effects.
//!
//! A card effect is a pair of independent operations:
//! - `validate`: may this card be played right now? Never mutates state.
//! - `execute`: the state after the card resolves. Assumes validation passed.
//!
//! Most cards are a `ComposedEffect`: a `Validation` plus a list of atomic
//! `EffectStep`s applied in order. Cards with behavior that does not fit the
//! steps can implement `CardEffect` directly and be registered the same way.

use serde::{Deserialize, Serialize};

use super::resolver::resolve_step;
use super::validation::Validation;
use crate::cards::{Card, CardType};
use crate::core::{GameResult, GameState, RandomSource};

/// Behavior attached to a card id.
pub trait CardEffect: Send + Sync + std::fmt::Debug {
    /// Category this effect was written for.
    fn category(&self) -> CardType;

    /// Check whether `card` may be played against `state`.
    fn validate(&self, card: &Card, state: &GameState) -> GameResult<()>;

    /// Resolve the card, returning the new state.
    ///
    /// Appends at least one log entry describing what happened.
    fn execute(&self, card: &Card, state: GameState, rng: &mut dyn RandomSource) -> GameState;
}

/// An atomic change to game state.
///
/// Attack steps do nothing when there is no enemy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectStep {
    // === Damage ===

    /// Fixed damage to the enemy.
    DealDamage { amount: u32, ignore_shield: bool },

    /// Uniform random damage in `min..=max`.
    DealRandomDamage { min: u32, max: u32 },

    /// Damage equal to the player's current shield.
    DealShieldDamage,

    /// Damage, then shield equal to `ceil(amount * percent / 100)`.
    DealDamageAndGainShield { amount: u32, shield_percent: u32 },

    // === Player ===

    /// Add shield to the player.
    GainShield(u32),

    /// Restore health, capped at max.
    Heal(u32),

    /// Restore energy, capped at max.
    GainEnergy(u32),

    /// Draw from the deck; stops early when the deck runs out.
    DrawCards(usize),

    // === Contexts ===

    /// Activate a context tag. `announce` replaces the default log line.
    AddContext { tag: String, announce: Option<String> },

    /// Deactivate a context tag.
    RemoveContext(String),
}

impl EffectStep {
    /// Damage that is absorbed by shield.
    pub fn damage(amount: u32) -> Self {
        Self::DealDamage {
            amount,
            ignore_shield: false,
        }
    }

    /// Damage that bypasses shield.
    pub fn piercing(amount: u32) -> Self {
        Self::DealDamage {
            amount,
            ignore_shield: true,
        }
    }

    pub fn random_damage(min: u32, max: u32) -> Self {
        Self::DealRandomDamage { min, max }
    }

    /// Damage with 20% of it returned as shield.
    pub fn vampiric(amount: u32) -> Self {
        Self::DealDamageAndGainShield {
            amount,
            shield_percent: 20,
        }
    }

    pub fn add_context(tag: impl Into<String>) -> Self {
        Self::AddContext {
            tag: tag.into(),
            announce: None,
        }
    }

    pub fn add_context_announced(tag: impl Into<String>, announce: impl Into<String>) -> Self {
        Self::AddContext {
            tag: tag.into(),
            announce: Some(announce.into()),
        }
    }
}

/// A validation plus a sequence of steps.
///
/// ```
/// use effect_deck::cards::CardType;
/// use effect_deck::effects::{ComposedEffect, EffectStep, Validation};
///
/// let overclock = ComposedEffect::new(CardType::Dependent)
///     .with_validation(Validation::context("HighEnergy"))
///     .then(EffectStep::damage(15));
///
/// assert_eq!(overclock.steps().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct ComposedEffect {
    category: CardType,
    validation: Validation,
    steps: Vec<EffectStep>,
}

impl ComposedEffect {
    /// An effect with energy-only validation and no steps.
    #[must_use]
    pub fn new(category: CardType) -> Self {
        Self {
            category,
            validation: Validation::energy(),
            steps: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Append a step.
    #[must_use]
    pub fn then(mut self, step: EffectStep) -> Self {
        self.steps.push(step);
        self
    }

    #[must_use]
    pub fn steps(&self) -> &[EffectStep] {
        &self.steps
    }

    #[must_use]
    pub fn validation(&self) -> &Validation {
        &self.validation
    }
}

impl CardEffect for ComposedEffect {
    fn category(&self) -> CardType {
        self.category
    }

    fn validate(&self, card: &Card, state: &GameState) -> GameResult<()> {
        self.validation.check(card, state)
    }

    fn execute(&self, _card: &Card, state: GameState, rng: &mut dyn RandomSource) -> GameState {
        self.steps
            .iter()
            .fold(state, |state, step| resolve_step(state, step, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::get_card;
    use crate::core::{EnemyConfig, GameError, Player, ScriptedRng};

    fn state() -> GameState {
        GameState::new("test", Player::new("player", 50, 3, Vec::new()), Some(EnemyConfig::default().spawn()))
    }

    #[test]
    fn test_composed_runs_steps_in_order() {
        let effect = ComposedEffect::new(CardType::Attack)
            .then(EffectStep::GainShield(4))
            .then(EffectStep::DealShieldDamage);
        let card = Card::new("test", "Test", 0, CardType::Attack);

        let next = effect.execute(&card, state(), &mut ScriptedRng::default());

        assert_eq!(next.player.shield, 4);
        assert_eq!(next.enemy.as_ref().unwrap().health, 26);
        assert_eq!(next.log.len(), 2);
    }

    #[test]
    fn test_composed_validation() {
        let effect = ComposedEffect::new(CardType::Dependent).with_validation(Validation::context("Algorithm"));
        let card = get_card("execute_algorithm").unwrap();

        let err = effect.validate(card, &state()).unwrap_err();
        assert!(matches!(err, GameError::RequiredContextMissing { .. }));
        assert_eq!(effect.category(), CardType::Dependent);
    }

    #[test]
    fn test_step_constructors() {
        assert_eq!(
            EffectStep::piercing(8),
            EffectStep::DealDamage { amount: 8, ignore_shield: true }
        );
        assert_eq!(
            EffectStep::vampiric(10),
            EffectStep::DealDamageAndGainShield { amount: 10, shield_percent: 20 }
        );
        assert_eq!(
            EffectStep::add_context("Cache"),
            EffectStep::AddContext { tag: "Cache".to_string(), announce: None }
        );
    }
}
