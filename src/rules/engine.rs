//! The game engine: turn state machine and action processing.
//!
//! `GameEngine` owns the only authoritative `GameState`. Each action is
//! computed against a working copy and committed with a single assignment,
//! so a rejected action leaves the state exactly as it was.
//!
//! ## Turn Sequencing
//!
//! ```text
//! draw -> action -> enemy -> cleanup -> draw -> ...
//! ```
//!
//! The player only acts in `action`. `end_turn` walks the remaining phases
//! in one call: the enemy attacks, cleanup checks for defeat, then the next
//! round draws cards and restores energy and shield. A defeat still finishes
//! the round; the game is over from then on, so nothing more is accepted.

use crate::cards::{Card, CardCatalog};
use crate::combat::take_damage;
use crate::core::{
    Action, GameConfig, GameError, GameResponse, GameResult, GameRng, GameState, Phase, Player, RandomSource,
};
use crate::effects::{contexts, EffectRegistry};

/// Log entry that opens every game.
pub const GAME_STARTED: &str = "Game started";

/// Rules engine trait.
///
/// The request/response surface every renderer drives. Implementors supply
/// state access and action processing; the error-tolerant `respond` and the
/// snapshot helpers come for free.
pub trait RulesEngine {
    /// Current state snapshot.
    fn game_state(&self) -> &GameState;

    /// Actions that would succeed against `state`.
    ///
    /// Empty once the game is over or outside the `action` phase.
    fn valid_actions(&self, state: &GameState) -> Vec<Action>;

    /// Discard the current game and deal a fresh one.
    fn start_new_game(&mut self) -> GameResponse;

    /// Apply an action. On error the state is unchanged.
    fn process_action(&mut self, action: &Action) -> GameResult<GameResponse>;

    // === Convenience Methods ===

    /// Like `process_action`, but folds errors into the response.
    fn respond(&mut self, action: &Action) -> GameResponse {
        match self.process_action(action) {
            Ok(response) => response,
            Err(error) => {
                log::debug!("rejected {action}: {error}");
                self.snapshot().with_error(&error)
            }
        }
    }

    /// Current state with its valid actions.
    fn snapshot(&self) -> GameResponse {
        let state = self.game_state();
        GameResponse::new(state.clone(), self.valid_actions(state))
    }

    /// Whether the current game has ended.
    fn is_terminal(&self) -> bool {
        self.game_state().is_game_over
    }
}

/// The single-player deck-building engine.
pub struct GameEngine {
    config: GameConfig,
    catalog: CardCatalog,
    registry: EffectRegistry,
    /// Damage rolls.
    rng: Box<dyn RandomSource>,
    /// Deck shuffles. Separate so rolls do not depend on shuffling.
    deck_rng: GameRng,
    state: GameState,
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("config", &self.config)
            .field("catalog", &self.catalog.len())
            .field("registry", &self.registry.len())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Builder for creating a `GameEngine`.
///
/// Anything not supplied falls back to the shipped game: the standard
/// catalog, the built-in effects and a `GameRng` seeded from the config.
#[derive(Default)]
pub struct GameEngineBuilder {
    config: Option<GameConfig>,
    catalog: Option<CardCatalog>,
    registry: Option<EffectRegistry>,
    rng: Option<Box<dyn RandomSource>>,
}

impl GameEngineBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn catalog(mut self, catalog: CardCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    #[must_use]
    pub fn registry(mut self, registry: EffectRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Source for random damage rolls.
    #[must_use]
    pub fn rng(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Validate the configuration and assemble the engine.
    pub fn build(self) -> GameResult<GameEngine> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let catalog = self.catalog.unwrap_or_else(|| CardCatalog::standard().clone());
        if catalog.is_empty() {
            return Err(GameError::invalid_action("configure", "card catalog is empty"));
        }

        let registry = self.registry.unwrap_or_else(EffectRegistry::standard);
        let missing = registry.missing_for(&catalog);
        if !missing.is_empty() {
            log::warn!("cards without effects cannot be played: {}", missing.join(", "));
        }

        let rng = self.rng.unwrap_or_else(|| Box::new(GameRng::new(config.seed)));
        let deck_rng = GameRng::new(config.seed).for_context("deck");
        let state = undealt_state(&config, &catalog);

        Ok(GameEngine {
            config,
            catalog,
            registry,
            rng,
            deck_rng,
            state,
        })
    }
}

impl GameEngine {
    #[must_use]
    pub fn builder() -> GameEngineBuilder {
        GameEngineBuilder::new()
    }

    /// The shipped card set and effects with the given configuration.
    pub fn standard(config: GameConfig) -> GameResult<Self> {
        Self::builder().config(config).build()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn registry(&self) -> &EffectRegistry {
        &self.registry
    }

    /// Replace the current state wholesale.
    ///
    /// For restoring snapshots and staging scenarios.
    pub fn set_state(&mut self, state: GameState) {
        self.state = state;
    }

    /// Drop the current game, returning to the undealt starting state.
    pub fn reset(&mut self) {
        self.state = undealt_state(&self.config, &self.catalog);
    }

    /// Build a fresh state and deal the opening hand.
    fn deal(&mut self) -> GameState {
        let mut state = undealt_state(&self.config, &self.catalog);

        if self.config.shuffle_deck {
            let mut deck: Vec<Card> = state.player.deck.iter().cloned().collect();
            self.deck_rng.shuffle(&mut deck);
            state.player.deck = deck.into_iter().collect();
        }

        let drawn = state.player.draw(self.config.opening_hand_size);
        state.phase = Phase::Action;
        log::info!(
            "game {} started: {} cards dealt, {} in deck",
            state.id,
            drawn,
            state.player.deck.len()
        );
        state
    }

    /// Compute the state after playing `card_id`.
    fn play_card(&mut self, card_id: &str) -> GameResult<GameState> {
        let state = &self.state;
        ensure_action_phase(state, "play_card")?;

        let index = state.player.find_in_hand(card_id).ok_or_else(|| {
            GameError::card_not_found(card_id, state.player.hand.iter().map(|c| c.id.clone()))
        })?;
        let card = state.player.hand[index].clone();

        let effect = self.registry.get(card_id)?;
        effect.validate(&card, state)?;

        let energy = state
            .player
            .energy
            .checked_sub(card.cost)
            .ok_or(GameError::InsufficientEnergy {
                required: card.cost,
                available: state.player.energy,
            })?;

        let mut next = state.clone();
        next.player.discard_from_hand(index);
        next.player.energy = energy;
        next.push_log(format!("Player plays {}", card.name));

        let mut next = effect.execute(&card, next, &mut *self.rng);

        if next.enemy_defeated() {
            let entry = format!("{} is defeated", next.enemy_name());
            next.push_log(entry);
            next.finish(true);
            log::info!("game {} won on turn {}", next.id, next.turn);
        }

        log::debug!("played {} for {} energy", card.id, card.cost);
        Ok(next)
    }

    /// Compute the state after ending the turn.
    fn end_turn(&self) -> GameResult<GameState> {
        ensure_action_phase(&self.state, "end_turn")?;
        let mut next = self.state.clone();

        // enemy
        advance(&mut next);
        self.enemy_turn(&mut next);

        // cleanup
        advance(&mut next);
        if !next.player.is_alive() {
            next.push_log("Player is defeated");
            next.finish(false);
            log::info!("game {} lost on turn {}", next.id, next.turn);
        }

        // draw
        advance(&mut next);
        next.player.draw(self.config.draw_per_turn);
        next.player.energy = next.player.max_energy;
        next.player.shield = 0;
        next.turn += 1;

        // action
        advance(&mut next);
        Ok(next)
    }

    fn enemy_turn(&self, state: &mut GameState) {
        let Some(enemy) = state.enemy.as_ref().filter(|e| e.is_alive()) else {
            return;
        };
        let name = enemy.name.clone();
        let damage = enemy.damage;

        if self.config.dodge_negates_attack && state.player.remove_context(contexts::DODGE) {
            state.push_log(format!("Player dodges {name}'s attack"));
            return;
        }

        take_damage(&mut state.player, damage, false);
        state.push_log(format!("{name} deals {damage} damage to player"));
    }
}

impl RulesEngine for GameEngine {
    fn game_state(&self) -> &GameState {
        &self.state
    }

    fn valid_actions(&self, state: &GameState) -> Vec<Action> {
        if state.is_game_over || state.phase != Phase::Action {
            return Vec::new();
        }

        let mut actions: Vec<Action> = state
            .player
            .hand
            .iter()
            .filter(|card| {
                self.registry
                    .lookup(&card.id)
                    .is_some_and(|effect| effect.validate(card, state).is_ok())
            })
            .map(|card| Action::play_card(card.id.clone()))
            .collect();

        actions.push(Action::EndTurn);
        actions
    }

    fn start_new_game(&mut self) -> GameResponse {
        self.state = self.deal();
        self.snapshot()
    }

    fn process_action(&mut self, action: &Action) -> GameResult<GameResponse> {
        let next = match action {
            Action::StartGame => return Ok(self.start_new_game()),
            Action::PlayCard { card_id, .. } => self.play_card(card_id)?,
            Action::EndTurn => self.end_turn()?,
        };

        self.state = next;
        Ok(self.snapshot())
    }
}

/// Fresh state before any cards are dealt.
fn undealt_state(config: &GameConfig, catalog: &CardCatalog) -> GameState {
    let deck = catalog.first(config.starting_deck_size).iter().cloned();
    let player = Player::new(
        config.player_id.clone(),
        config.player_max_health,
        config.player_max_energy,
        deck,
    );

    let mut state = GameState::new(config.game_id.clone(), player, Some(config.enemy.spawn()));
    state.push_log(GAME_STARTED);
    state
}

/// Reject actions on a finished game or outside the action phase.
fn ensure_action_phase(state: &GameState, action: &str) -> GameResult<()> {
    if state.is_game_over {
        return Err(GameError::invalid_action(action, "game is over"));
    }
    if state.phase != Phase::Action {
        return Err(GameError::InvalidGamePhase {
            expected: vec![Phase::Action.to_string()],
            actual: state.phase.to_string(),
        });
    }
    Ok(())
}

/// Step to the next phase of the turn cycle.
fn advance(state: &mut GameState) {
    let phase = state.phase.next();
    log::trace!("turn {}: {} -> {}", state.turn, state.phase, phase);
    state.phase = phase;
}
