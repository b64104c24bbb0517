//! Combat primitives: damage with shield absorption, and shield gain.
//!
//! Shield is a depleting buffer consumed before health. Neither value ever
//! goes below zero; shield has no upper bound.
//!
//! ```
//! use effect_deck::combat::damage_outcome;
//!
//! // 8 damage into 5 shield: 3 reaches health, shield is gone.
//! assert_eq!(damage_outcome(50, 5, 8, false), (47, 0));
//!
//! // Ignoring shield leaves it intact.
//! assert_eq!(damage_outcome(50, 5, 8, true), (42, 5));
//! ```

use crate::core::{Enemy, Player};

/// Anything that has health and shield.
pub trait Combatant {
    fn health(&self) -> u32;
    fn shield(&self) -> u32;
    fn set_health(&mut self, health: u32);
    fn set_shield(&mut self, shield: u32);
}

impl Combatant for Player {
    fn health(&self) -> u32 {
        self.health
    }

    fn shield(&self) -> u32 {
        self.shield
    }

    fn set_health(&mut self, health: u32) {
        self.health = health;
    }

    fn set_shield(&mut self, shield: u32) {
        self.shield = shield;
    }
}

impl Combatant for Enemy {
    fn health(&self) -> u32 {
        self.health
    }

    fn shield(&self) -> u32 {
        self.shield
    }

    fn set_health(&mut self, health: u32) {
        self.health = health;
    }

    fn set_shield(&mut self, shield: u32) {
        self.shield = shield;
    }
}

/// New `(health, shield)` after taking `amount` damage.
#[must_use]
pub fn damage_outcome(health: u32, shield: u32, amount: u32, ignore_shield: bool) -> (u32, u32) {
    if ignore_shield {
        return (health.saturating_sub(amount), shield);
    }
    let effective = amount.saturating_sub(shield);
    (health.saturating_sub(effective), shield.saturating_sub(amount))
}

/// Apply damage to a target, returning the updated target.
#[must_use]
pub fn apply_damage<T: Combatant + Clone>(target: &T, amount: u32, ignore_shield: bool) -> T {
    let mut updated = target.clone();
    take_damage(&mut updated, amount, ignore_shield);
    updated
}

/// Add shield to a target, returning the updated target.
#[must_use]
pub fn add_shield<T: Combatant + Clone>(target: &T, amount: u32) -> T {
    let mut updated = target.clone();
    gain_shield(&mut updated, amount);
    updated
}

/// In-place form of `apply_damage`. Returns the health actually lost.
pub fn take_damage<T: Combatant + ?Sized>(target: &mut T, amount: u32, ignore_shield: bool) -> u32 {
    let before = target.health();
    let (health, shield) = damage_outcome(before, target.shield(), amount, ignore_shield);
    target.set_health(health);
    target.set_shield(shield);
    before - health
}

/// In-place form of `add_shield`.
pub fn gain_shield<T: Combatant + ?Sized>(target: &mut T, amount: u32) {
    let shield = target.shield().saturating_add(amount);
    target.set_shield(shield);
}
