//! Property tests for the combat and engine invariants.

use proptest::prelude::*;

use effect_deck::combat::{apply_damage, damage_outcome};
use effect_deck::core::{Action, EnemyConfig, GameConfig, GameRng, GameState, RandomSource};
use effect_deck::get_all_cards;
use effect_deck::rules::{GameEngine, RulesEngine};

fn seeded(seed: u64) -> GameEngine {
    let config = GameConfig::default().with_seed(seed).shuffled();
    let mut engine = GameEngine::standard(config).unwrap();
    engine.start_new_game();
    engine
}

/// Pick a valid action by index, wrapping around.
fn pick(engine: &GameEngine, choice: usize) -> Option<Action> {
    let actions = engine.valid_actions(engine.game_state());
    if actions.is_empty() {
        return None;
    }
    Some(actions[choice % actions.len()].clone())
}

fn run(seed: u64, choices: &[usize]) -> GameState {
    let mut engine = seeded(seed);
    for &choice in choices {
        match pick(&engine, choice) {
            Some(action) => {
                engine.process_action(&action).unwrap();
            }
            None => break,
        }
    }
    engine.game_state().clone()
}

proptest! {
    /// Shield absorbs first; neither value goes negative or increases.
    #[test]
    fn damage_shield_law(health in 0u32..200, shield in 0u32..100, amount in 0u32..300) {
        let (new_health, new_shield) = damage_outcome(health, shield, amount, false);

        prop_assert_eq!(new_shield, shield.saturating_sub(amount));
        prop_assert_eq!(new_health, health.saturating_sub(amount.saturating_sub(shield)));
        prop_assert!(new_health <= health);
        prop_assert!(new_shield <= shield);

        let (pierced, kept) = damage_outcome(health, shield, amount, true);
        prop_assert_eq!(pierced, health.saturating_sub(amount));
        prop_assert_eq!(kept, shield);
    }

    #[test]
    fn apply_damage_matches_outcome(shield in 0u32..50, amount in 0u32..80) {
        let mut enemy = EnemyConfig::default().spawn();
        enemy.shield = shield;

        let hit = apply_damage(&enemy, amount, false);
        prop_assert_eq!((hit.health, hit.shield), damage_outcome(30, shield, amount, false));
    }

    /// A card is played exactly when affordable, and costs exactly its cost.
    #[test]
    fn energy_conservation(card_index in 0usize..17, energy in 0u32..=3) {
        let card = get_all_cards()[card_index].clone();
        let mut engine = seeded(0);
        let mut state = engine.game_state().clone();
        state.player.hand.push_back(card.clone());
        state.player.energy = energy;
        state.player.shield = 4;
        state.player.add_context("HighEnergy");
        state.player.add_context("Algorithm");
        engine.set_state(state.clone());

        let result = engine.process_action(&Action::play_card(card.id.clone()));

        if energy >= card.cost {
            let next = result.unwrap().game_state;
            prop_assert_eq!(next.player.energy, energy - card.cost);
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(engine.game_state(), &state);
        }
    }

    /// Playing moves exactly one card from hand to discard.
    #[test]
    fn hand_discard_conservation(seed in any::<u64>(), slot in 0usize..5) {
        let mut engine = seeded(seed);
        let before = engine.game_state().clone();
        let card = before.player.hand[slot].clone();

        let mut state = before.clone();
        state.player.energy = 3;
        engine.set_state(state);

        let after = engine.process_action(&Action::play_card(card.id.clone())).unwrap().game_state;

        let mut expected_hand = before.player.hand.clone();
        expected_hand.remove(slot);
        prop_assert_eq!(after.player.hand, expected_hand);
        prop_assert_eq!(after.player.discard.len(), before.player.discard.len() + 1);
        prop_assert_eq!(after.player.discard.back(), Some(&card));
        prop_assert_eq!(after.player.deck, before.player.deck);
    }

    /// Same seed and same choices give the same game.
    #[test]
    fn replay_is_deterministic(seed in any::<u64>(), choices in prop::collection::vec(0usize..8, 0..30)) {
        prop_assert_eq!(run(seed, &choices), run(seed, &choices));
    }

    #[test]
    fn wild_strike_range(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        for _ in 0..16 {
            let roll = rng.roll(3, 9);
            prop_assert!((3..=9).contains(&roll));
        }
    }

    /// Once over, a game rejects play and stays put.
    #[test]
    fn finished_games_are_closed(
        seed in any::<u64>(),
        losing in any::<bool>(),
        choices in prop::collection::vec(0usize..8, 0..60),
    ) {
        let mut engine = seeded(seed);
        let mut state = engine.game_state().clone();
        if losing {
            state.player.health = 8;
        } else if let Some(enemy) = state.enemy.as_mut() {
            enemy.health = 5;
        }
        engine.set_state(state);

        for &choice in &choices {
            let Some(action) = pick(&engine, choice) else { break };
            engine.process_action(&action).unwrap();
        }

        let finished = engine.game_state().clone();
        if finished.is_game_over {
            prop_assert!(engine.valid_actions(&finished).is_empty());
            for action in [Action::play_card("strike"), Action::EndTurn] {
                prop_assert!(engine.process_action(&action).is_err());
                prop_assert_eq!(engine.game_state(), &finished);
            }
        }
    }
}
