//! Effect resolution - applying steps to game state.
//!
//! Each step takes the state by value and returns the updated state with
//! one log entry appended (none when an attack step has no enemy to hit).

use super::effect::EffectStep;
use crate::combat::{gain_shield, take_damage};
use crate::core::{GameState, RandomSource};

/// Apply a single step.
pub fn resolve_step(mut state: GameState, step: &EffectStep, rng: &mut dyn RandomSource) -> GameState {
    match step {
        EffectStep::DealDamage { amount, ignore_shield } => {
            let suffix = if *ignore_shield { " (ignoring shield)" } else { "" };
            hit_enemy(&mut state, *amount, *ignore_shield, suffix);
        }

        EffectStep::DealRandomDamage { min, max } => {
            if state.enemy.is_some() {
                let amount = rng.roll(*min, *max);
                hit_enemy(&mut state, amount, false, " (wild)");
            }
        }

        EffectStep::DealShieldDamage => {
            let amount = state.player.shield;
            if amount > 0 {
                hit_enemy(&mut state, amount, false, " (shield slam)");
            }
        }

        EffectStep::DealDamageAndGainShield { amount, shield_percent } => {
            if let Some(enemy) = state.enemy.as_mut() {
                take_damage(enemy, *amount, false);
                let name = enemy.name.clone();
                let gained = percent_ceil(*amount, *shield_percent);
                gain_shield(&mut state.player, gained);
                state.push_log(format!("Player deals {amount} damage to {name} and gains {gained} shield"));
            }
        }

        EffectStep::GainShield(amount) => {
            gain_shield(&mut state.player, *amount);
            state.push_log(format!("Player gains {amount} shield"));
        }

        EffectStep::Heal(amount) => {
            let player = &mut state.player;
            let before = player.health;
            player.health = player.health.saturating_add(*amount).min(player.max_health);
            let healed = player.health - before;
            state.push_log(format!("Player heals {healed} health"));
        }

        EffectStep::GainEnergy(amount) => {
            let player = &mut state.player;
            let before = player.energy;
            player.energy = player.energy.saturating_add(*amount).min(player.max_energy);
            let gained = player.energy - before;
            state.push_log(format!("Player gains {gained} energy"));
        }

        EffectStep::DrawCards(count) => {
            let drawn = state.player.draw(*count);
            state.push_log(format!("Player draws {drawn} cards"));
        }

        EffectStep::AddContext { tag, announce } => {
            state.player.add_context(tag.as_str());
            let entry = announce
                .clone()
                .unwrap_or_else(|| format!("{tag} context activated"));
            state.push_log(entry);
        }

        EffectStep::RemoveContext(tag) => {
            if state.player.remove_context(tag) {
                state.push_log(format!("{tag} context removed"));
            }
        }
    }

    log::trace!("resolved {:?}", step);
    state
}

fn hit_enemy(state: &mut GameState, amount: u32, ignore_shield: bool, suffix: &str) {
    let Some(enemy) = state.enemy.as_mut() else {
        return;
    };
    take_damage(enemy, amount, ignore_shield);
    let name = enemy.name.clone();
    state.push_log(format!("Player deals {amount} damage to {name}{suffix}"));
}

/// `ceil(amount * percent / 100)` in integer arithmetic.
fn percent_ceil(amount: u32, percent: u32) -> u32 {
    let scaled = u64::from(amount) * u64::from(percent);
    u32::try_from(scaled.div_ceil(100)).unwrap_or(u32::MAX)
}
