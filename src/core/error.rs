//! Typed game errors.
//!
//! Every rejected action produces a `GameError`. Errors are values, not
//! panics: the engine leaves state untouched and the caller decides whether
//! to show the message, retry, or ignore it.
//!
//! Errors serialize as `{"kind": "...", ...fields}` so renderers can build
//! precise messages without parsing strings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used throughout the engine.
pub type GameResult<T> = Result<T, GameError>;

/// Discriminant of a `GameError`, useful for matching without fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    CardNotFound,
    InsufficientEnergy,
    InvalidGamePhase,
    RequiredContextMissing,
    InvalidAction,
}

/// A recoverable rules error.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum GameError {
    /// Unknown card id, card not in hand, or card without a registered effect.
    #[error("Card '{card_id}' not found. Available cards: {}", .available_cards.join(", "))]
    #[serde(rename_all = "camelCase")]
    CardNotFound {
        card_id: String,
        available_cards: Vec<String>,
    },

    /// Card cost exceeds the player's current energy.
    #[error("Insufficient energy. Required: {required}, Available: {available}")]
    InsufficientEnergy { required: u32, available: u32 },

    /// Action attempted outside the phase that allows it.
    #[error("Invalid game phase. Expected: {}, Actual: {actual}", .expected.join(" or "))]
    InvalidGamePhase { expected: Vec<String>, actual: String },

    /// A dependent card's precondition (context tag or shield) is unmet.
    #[error("Required context '{required}' is missing. Available contexts: {}", .available.join(", "))]
    RequiredContextMissing {
        required: String,
        available: Vec<String>,
    },

    /// Malformed or unrecognized action, or an action on a finished game.
    #[error("Invalid action '{action}': {reason}")]
    InvalidAction { action: String, reason: String },
}

impl GameError {
    /// Get the kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::CardNotFound { .. } => ErrorKind::CardNotFound,
            GameError::InsufficientEnergy { .. } => ErrorKind::InsufficientEnergy,
            GameError::InvalidGamePhase { .. } => ErrorKind::InvalidGamePhase,
            GameError::RequiredContextMissing { .. } => ErrorKind::RequiredContextMissing,
            GameError::InvalidAction { .. } => ErrorKind::InvalidAction,
        }
    }

    pub fn card_not_found(card_id: impl Into<String>, available: impl IntoIterator<Item = String>) -> Self {
        GameError::CardNotFound {
            card_id: card_id.into(),
            available_cards: available.into_iter().collect(),
        }
    }

    pub fn invalid_action(action: impl Into<String>, reason: impl Into<String>) -> Self {
        GameError::InvalidAction {
            action: action.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = GameError::InsufficientEnergy { required: 2, available: 1 };
        assert_eq!(err.to_string(), "Insufficient energy. Required: 2, Available: 1");

        let err = GameError::card_not_found("bogus", vec!["strike".to_string(), "block".to_string()]);
        assert_eq!(err.to_string(), "Card 'bogus' not found. Available cards: strike, block");

        let err = GameError::InvalidGamePhase {
            expected: vec!["action".to_string()],
            actual: "enemy".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid game phase. Expected: action, Actual: enemy");
    }

    #[test]
    fn test_kind() {
        let err = GameError::RequiredContextMissing {
            required: "HighEnergy".to_string(),
            available: vec![],
        };
        assert_eq!(err.kind(), ErrorKind::RequiredContextMissing);
        assert_eq!(
            GameError::invalid_action("jump", "unknown").kind(),
            ErrorKind::InvalidAction
        );
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let err = GameError::InsufficientEnergy { required: 1, available: 0 };
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["kind"], "InsufficientEnergy");
        assert_eq!(json["required"], 1);
        assert_eq!(json["available"], 0);

        let err = GameError::card_not_found("x", Vec::new());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["cardId"], "x");
    }
}
