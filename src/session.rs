//! Shared in-process game session.
//!
//! `GameSession` puts one `GameEngine` behind a lock so several callers (a
//! terminal renderer and a web view, say) can drive the same game. Each
//! action runs its read-modify-write under the lock; two actions never
//! interleave.
//!
//! ## Subscriptions
//!
//! Subscribers receive the committed state after every successful action,
//! and once immediately on subscribe if a game is running. Callbacks run
//! after the engine lock is released, so a callback may call back into the
//! session.
//!
//! ```
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use std::sync::Arc;
//!
//! use effect_deck::core::GameConfig;
//! use effect_deck::rules::GameEngine;
//! use effect_deck::session::GameSession;
//!
//! let session = GameSession::new(GameEngine::standard(GameConfig::default()).unwrap());
//! let seen = Arc::new(AtomicU32::new(0));
//!
//! let counter = Arc::clone(&seen);
//! session.subscribe(move |_| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! session.start_new_game();
//! session.end_turn().unwrap();
//! assert_eq!(seen.load(Ordering::SeqCst), 2);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::core::{Action, GameError, GameResponse, GameResult, GameState};
use crate::rules::{GameEngine, RulesEngine};

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

type Callback = Arc<dyn Fn(&GameState) + Send + Sync>;

#[derive(Debug)]
struct SessionInner {
    engine: GameEngine,
    active: bool,
}

/// A lock-guarded engine with change notification.
pub struct GameSession {
    inner: Mutex<SessionInner>,
    subscribers: Mutex<Vec<(SubscriptionId, Callback)>>,
    next_id: AtomicU64,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("active", &lock(&self.inner).active)
            .field("subscribers", &lock(&self.subscribers).len())
            .finish_non_exhaustive()
    }
}

impl GameSession {
    /// Wrap an engine. No game is active until `start_new_game`.
    #[must_use]
    pub fn new(engine: GameEngine) -> Self {
        Self {
            inner: Mutex::new(SessionInner { engine, active: false }),
            subscribers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Deal a fresh game, replacing any game in progress.
    pub fn start_new_game(&self) -> GameResponse {
        let response = {
            let mut inner = lock(&self.inner);
            inner.active = true;
            inner.engine.start_new_game()
        };
        self.notify(&response.game_state);
        response
    }

    /// Play a card from hand.
    pub fn play_card(&self, card_id: &str, target_id: Option<&str>) -> GameResult<GameResponse> {
        self.submit(&Action::PlayCard {
            card_id: card_id.to_string(),
            target_id: target_id.map(str::to_string),
        })
    }

    pub fn end_turn(&self) -> GameResult<GameResponse> {
        self.submit(&Action::EndTurn)
    }

    /// Apply any action.
    ///
    /// `start_game` always succeeds; other actions fail with `InvalidAction`
    /// until a game has been started.
    pub fn submit(&self, action: &Action) -> GameResult<GameResponse> {
        if *action == Action::StartGame {
            return Ok(self.start_new_game());
        }

        let response = {
            let mut inner = lock(&self.inner);
            if !inner.active {
                return Err(no_active_game(action.type_name()));
            }
            inner.engine.process_action(action)?
        };
        self.notify(&response.game_state);
        Ok(response)
    }

    /// Snapshot of the running game.
    pub fn current_state(&self) -> GameResult<GameState> {
        let inner = lock(&self.inner);
        if !inner.active {
            return Err(no_active_game("get_state"));
        }
        Ok(inner.engine.game_state().clone())
    }

    /// Snapshot of the running game with its valid actions.
    pub fn current_response(&self) -> GameResult<GameResponse> {
        let inner = lock(&self.inner);
        if !inner.active {
            return Err(no_active_game("get_state"));
        }
        Ok(inner.engine.snapshot())
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        lock(&self.inner).active
    }

    /// End the running game without starting another.
    pub fn reset(&self) {
        let mut inner = lock(&self.inner);
        inner.engine.reset();
        inner.active = false;
        log::debug!("session reset");
    }

    /// Register a state listener.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&GameState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let callback: Callback = Arc::new(callback);
        lock(&self.subscribers).push((id, Arc::clone(&callback)));

        if let Ok(state) = self.current_state() {
            callback(&state);
        }
        id
    }

    /// Remove a listener. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = lock(&self.subscribers);
        let before = subscribers.len();
        subscribers.retain(|(sid, _)| *sid != id);
        subscribers.len() != before
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        lock(&self.subscribers).len()
    }

    fn notify(&self, state: &GameState) {
        let callbacks: Vec<Callback> = lock(&self.subscribers)
            .iter()
            .map(|(_, cb)| Arc::clone(cb))
            .collect();
        for callback in callbacks {
            callback(state);
        }
    }
}

fn no_active_game(action: &str) -> GameError {
    GameError::invalid_action(action, "no active game")
}

/// Lock, recovering from poisoning. Engine state is only replaced by whole
/// assignment, so a panicked holder cannot leave it half-written.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
