//! Effects for the shipped card set.
//!
//! The numbers here are part of the game's observable behavior: changing a
//! damage value changes every recorded game.

use super::effect::{ComposedEffect, EffectStep};
use super::registry::EffectRegistry;
use super::validation::Validation;
use crate::cards::CardType;

/// Context tags the shipped cards produce or require.
pub mod contexts {
    pub const DODGE: &str = "Dodge";
    pub const ALGORITHM: &str = "Algorithm";
    pub const HIGH_ENERGY: &str = "HighEnergy";
    pub const LOAD_BALANCER: &str = "LoadBalancer";
    pub const CACHE: &str = "Cache";
}

/// Log line written when Dodge is played.
pub const DODGE_ANNOUNCEMENT: &str = "Player prepares to dodge the next attack";

fn attack(steps: impl IntoIterator<Item = EffectStep>) -> ComposedEffect {
    steps
        .into_iter()
        .fold(ComposedEffect::new(CardType::Attack), ComposedEffect::then)
}

fn defense(step: EffectStep) -> ComposedEffect {
    ComposedEffect::new(CardType::Defense).then(step)
}

fn context(tag: &str) -> ComposedEffect {
    ComposedEffect::new(CardType::Context).then(EffectStep::add_context(tag))
}

fn dependent(validation: Validation, step: EffectStep) -> ComposedEffect {
    ComposedEffect::new(CardType::Dependent)
        .with_validation(validation)
        .then(step)
}

/// Register every shipped card's effect.
pub fn register_builtin_effects(registry: &mut EffectRegistry) {
    // Attacks
    registry.register("strike", attack([EffectStep::damage(6)]));
    registry.register("heavy_strike", attack([EffectStep::damage(12)]));
    registry.register("quick_strike", attack([EffectStep::damage(3)]));
    registry.register("precise_strike", attack([EffectStep::piercing(8)]));
    registry.register("wild_strike", attack([EffectStep::random_damage(3, 9)]));
    registry.register("vampiric_strike", attack([EffectStep::vampiric(10)]));
    registry.register("berserker_strike", attack([EffectStep::vampiric(15)]));

    // Defense
    registry.register("block", defense(EffectStep::GainShield(5)));
    registry.register("shield_up", defense(EffectStep::GainShield(8)));
    registry.register(
        "dodge",
        defense(EffectStep::add_context_announced(contexts::DODGE, DODGE_ANNOUNCEMENT)),
    );

    // Contexts
    registry.register("init_algorithm", context(contexts::ALGORITHM));
    registry.register("energy_surge", context(contexts::HIGH_ENERGY));
    registry.register("load_balancer", context(contexts::LOAD_BALANCER));
    registry.register("data_cache", context(contexts::CACHE));

    // Dependent
    registry.register(
        "overclock_attack",
        dependent(Validation::context(contexts::HIGH_ENERGY), EffectStep::damage(15)),
    );
    registry.register(
        "shield_slam",
        dependent(Validation::shield(), EffectStep::DealShieldDamage),
    );
    registry.register(
        "execute_algorithm",
        dependent(Validation::context(contexts::ALGORITHM), EffectStep::damage(20)),
    );
}
