//! Actions and responses: the boundary consumed by renderers.
//!
//! A renderer turns user input into an `Action`, submits it to the engine,
//! and renders the `GameResponse` it gets back. Nothing else crosses the
//! boundary.
//!
//! On the wire (JSON) actions are tagged by `type`:
//!
//! ```
//! use effect_deck::core::Action;
//!
//! let action = Action::from_json(r#"{"type":"play_card","cardId":"strike"}"#).unwrap();
//! assert_eq!(action, Action::play_card("strike"));
//!
//! let end = Action::from_json(r#"{"type":"end_turn"}"#).unwrap();
//! assert_eq!(end, Action::EndTurn);
//! ```

use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};
use super::state::GameState;

/// A request to the engine.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Play a card from hand.
    #[serde(rename_all = "camelCase")]
    PlayCard {
        card_id: String,
        /// Accepted for forward compatibility; there is only one enemy.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target_id: Option<String>,
    },
    /// Resolve the enemy turn and start the next round.
    EndTurn,
    /// Discard the current game and deal a fresh one.
    StartGame,
}

impl Action {
    /// Play a card with no explicit target.
    #[must_use]
    pub fn play_card(card_id: impl Into<String>) -> Self {
        Action::PlayCard {
            card_id: card_id.into(),
            target_id: None,
        }
    }

    /// Play a card at a named target.
    #[must_use]
    pub fn play_card_at(card_id: impl Into<String>, target_id: impl Into<String>) -> Self {
        Action::PlayCard {
            card_id: card_id.into(),
            target_id: Some(target_id.into()),
        }
    }

    /// Wire name of this action's type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Action::PlayCard { .. } => "play_card",
            Action::EndTurn => "end_turn",
            Action::StartGame => "start_game",
        }
    }

    /// Parse an action from JSON.
    ///
    /// Unknown `type` values and malformed payloads fail with `InvalidAction`.
    pub fn from_json(json: &str) -> GameResult<Self> {
        serde_json::from_str(json).map_err(|e| GameError::invalid_action(json, e.to_string()))
    }

    pub fn to_json(&self) -> String {
        // Serializing a plain enum of strings cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::PlayCard { card_id, .. } => write!(f, "play_card({card_id})"),
            other => f.write_str(other.type_name()),
        }
    }
}

/// What the engine returns for every action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    /// State after the action (unchanged if it failed).
    pub game_state: GameState,

    /// Actions that would currently succeed.
    pub valid_actions: Vec<Action>,

    /// Message of the error that rejected the action, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GameResponse {
    #[must_use]
    pub fn new(game_state: GameState, valid_actions: Vec<Action>) -> Self {
        Self {
            game_state,
            valid_actions,
            error: None,
        }
    }

    /// Attach an error message.
    #[must_use]
    pub fn with_error(mut self, error: &GameError) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn to_json(&self) -> GameResult<String> {
        serde_json::to_string(self).map_err(|e| GameError::invalid_action("serialize_response", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    #[test]
    fn test_action_wire_format() {
        assert_eq!(Action::play_card("strike").to_json(), r#"{"type":"play_card","cardId":"strike"}"#);
        assert_eq!(Action::EndTurn.to_json(), r#"{"type":"end_turn"}"#);
        assert_eq!(Action::StartGame.to_json(), r#"{"type":"start_game"}"#);
        assert_eq!(
            Action::play_card_at("strike", "basic_enemy").to_json(),
            r#"{"type":"play_card","cardId":"strike","targetId":"basic_enemy"}"#
        );
    }

    #[test]
    fn test_parse_target() {
        let action = Action::from_json(r#"{"type":"play_card","cardId":"block","targetId":"me"}"#).unwrap();
        assert_eq!(action, Action::play_card_at("block", "me"));
    }

    #[test]
    fn test_unknown_action_type() {
        let err = Action::from_json(r#"{"type":"surrender"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidAction);

        let err = Action::from_json(r#"{"type":"play_card"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidAction);

        let err = Action::from_json("not json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidAction);
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::play_card("dodge").to_string(), "play_card(dodge)");
        assert_eq!(Action::EndTurn.to_string(), "end_turn");
    }
}
