//! Shared session tests.
//!
//! These tests verify the lock-guarded backend:
//! - Actions fail cleanly before a game starts
//! - Subscribers see every committed state, and only committed states
//! - Concurrent callers never interleave actions

use std::sync::{Arc, Mutex};
use std::thread;

use effect_deck::core::{Action, ErrorKind, GameConfig, GameError, GameState};
use effect_deck::rules::GameEngine;
use effect_deck::session::GameSession;

fn session() -> GameSession {
    GameSession::new(GameEngine::standard(GameConfig::default()).unwrap())
}

/// Subscribe a recorder that keeps every notified state.
fn record(session: &GameSession) -> Arc<Mutex<Vec<GameState>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    session.subscribe(move |state| sink.lock().unwrap().push(state.clone()));
    seen
}

#[test]
fn test_no_active_game() {
    let session = session();

    let err = session.play_card("strike", None).unwrap_err();
    assert_eq!(err, GameError::invalid_action("play_card", "no active game"));
    assert_eq!(session.end_turn().unwrap_err().kind(), ErrorKind::InvalidAction);
    assert!(session.current_response().is_err());
}

#[test]
fn test_play_through_session() {
    let session = session();
    session.start_new_game();

    let response = session.play_card("strike", Some("basic_enemy")).unwrap();
    assert_eq!(response.game_state.enemy.as_ref().unwrap().health, 24);
    assert_eq!(session.current_state().unwrap(), response.game_state);

    let response = session.end_turn().unwrap();
    assert_eq!(response.game_state.turn, 2);
}

#[test]
fn test_subscriber_sees_committed_states() {
    let session = session();
    let seen = record(&session);

    session.start_new_game();
    session.play_card("strike", None).unwrap();
    assert!(session.play_card("block", None).is_err());
    session.end_turn().unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[1].enemy.as_ref().unwrap().health, 24);
    assert_eq!(seen[2].turn, 2);
}

#[test]
fn test_subscribe_during_game_gets_current_state() {
    let session = session();
    session.start_new_game();
    session.play_card("quick_strike", None).unwrap();

    let seen = record(&session);
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].enemy.as_ref().unwrap().health, 27);
}

#[test]
fn test_unsubscribed_listener_is_silent() {
    let session = session();
    let seen = Arc::new(Mutex::new(0));
    let sink = Arc::clone(&seen);
    let id = session.subscribe(move |_| *sink.lock().unwrap() += 1);

    session.start_new_game();
    assert!(session.unsubscribe(id));
    session.end_turn().unwrap();

    assert_eq!(*seen.lock().unwrap(), 1);
}

#[test]
fn test_callback_may_read_session() {
    let session = Arc::new(session());
    let turns = Arc::new(Mutex::new(Vec::new()));

    let reader = Arc::clone(&session);
    let sink = Arc::clone(&turns);
    session.subscribe(move |_| {
        let turn = reader.current_state().map(|s| s.turn).unwrap_or(0);
        sink.lock().unwrap().push(turn);
    });

    session.start_new_game();
    session.end_turn().unwrap();

    assert_eq!(*turns.lock().unwrap(), vec![1, 2]);
}

#[test]
fn test_concurrent_end_turns() {
    let session = Arc::new(session());
    session.start_new_game();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let session = Arc::clone(&session);
            thread::spawn(move || session.submit(&Action::EndTurn).map(|r| r.game_state.turn))
        })
        .collect();

    let mut turns: Vec<u32> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();
    turns.sort_unstable();

    assert_eq!(turns, vec![2, 3, 4, 5]);
    let state = session.current_state().unwrap();
    assert_eq!(state.turn, 5);
    assert_eq!(state.player.health, 50 - 4 * 8);
}
