//! Play validation for card effects.
//!
//! Every validation checks energy first, then each extra requirement in the
//! order it was added. The first failure is reported, so a dependent card
//! that is both unaffordable and missing its context reports the energy
//! problem.
//!
//! ```
//! use effect_deck::effects::Validation;
//!
//! let overclock = Validation::context("HighEnergy");
//! let slam = Validation::shield();
//! let plain = Validation::energy();
//! # let _ = (overclock, slam, plain);
//! ```

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::{GameError, GameResult, GameState};

/// Label reported when a shield-gated card is played with no shield.
pub const SHIELD_REQUIREMENT: &str = "Shield > 0";

/// Predicate for custom requirements. May capture its own settings.
pub type RequirementCheck = Arc<dyn Fn(&Card, &GameState) -> bool + Send + Sync>;

/// A precondition beyond energy.
#[derive(Clone)]
pub enum Requirement {
    /// The player must have this context tag.
    Context(String),
    /// The player must have some shield.
    Shield,
    /// Arbitrary predicate; `label` is reported when it fails.
    Custom { label: String, check: RequirementCheck },
}

impl fmt::Debug for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Context(tag) => f.debug_tuple("Context").field(tag).finish(),
            Requirement::Shield => f.write_str("Shield"),
            Requirement::Custom { label, .. } => {
                f.debug_struct("Custom").field("label", label).finish_non_exhaustive()
            }
        }
    }
}

impl Requirement {
    /// Check this requirement, reporting `RequiredContextMissing` on failure.
    pub fn check(&self, card: &Card, state: &GameState) -> GameResult<()> {
        let player = &state.player;
        match self {
            Requirement::Context(tag) => {
                if player.has_context(tag) {
                    return Ok(());
                }
                Err(GameError::RequiredContextMissing {
                    required: tag.clone(),
                    available: player.context_list(),
                })
            }
            Requirement::Shield => {
                if player.shield > 0 {
                    return Ok(());
                }
                Err(GameError::RequiredContextMissing {
                    required: SHIELD_REQUIREMENT.to_string(),
                    available: vec![format!("Shield: {}", player.shield)],
                })
            }
            Requirement::Custom { label, check } => {
                if (check)(card, state) {
                    return Ok(());
                }
                Err(GameError::RequiredContextMissing {
                    required: label.clone(),
                    available: Vec::new(),
                })
            }
        }
    }
}

/// Energy check plus zero or more requirements.
#[derive(Clone, Debug, Default)]
pub struct Validation {
    /// Most cards need at most one extra requirement.
    requirements: SmallVec<[Requirement; 2]>,
}

impl Validation {
    /// Energy only.
    #[must_use]
    pub fn energy() -> Self {
        Self::default()
    }

    /// Energy, then a context tag.
    #[must_use]
    pub fn context(tag: impl Into<String>) -> Self {
        Self::energy().and(Requirement::Context(tag.into()))
    }

    /// Energy, then every tag in order.
    #[must_use]
    pub fn contexts<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        tags.into_iter()
            .fold(Self::energy(), |v, tag| v.and(Requirement::Context(tag.into())))
    }

    /// Energy, then shield > 0.
    #[must_use]
    pub fn shield() -> Self {
        Self::energy().and(Requirement::Shield)
    }

    /// Energy, then a custom predicate.
    #[must_use]
    pub fn custom<F>(label: impl Into<String>, check: F) -> Self
    where
        F: Fn(&Card, &GameState) -> bool + Send + Sync + 'static,
    {
        Self::energy().and(Requirement::Custom {
            label: label.into(),
            check: Arc::new(check),
        })
    }

    /// Append a requirement (checked after the existing ones).
    #[must_use]
    pub fn and(mut self, requirement: Requirement) -> Self {
        self.requirements.push(requirement);
        self
    }

    #[must_use]
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// Run the validation. Never mutates state.
    pub fn check(&self, card: &Card, state: &GameState) -> GameResult<()> {
        validate_energy(card, state)?;
        for requirement in &self.requirements {
            requirement.check(card, state)?;
        }
        Ok(())
    }
}

/// The player can afford the card.
pub fn validate_energy(card: &Card, state: &GameState) -> GameResult<()> {
    if state.player.energy >= card.cost {
        return Ok(());
    }
    Err(GameError::InsufficientEnergy {
        required: card.cost,
        available: state.player.energy,
    })
}

/// The player can afford the card and has the context tag.
pub fn validate_context(tag: &str, card: &Card, state: &GameState) -> GameResult<()> {
    validate_energy(card, state)?;
    Requirement::Context(tag.to_string()).check(card, state)
}

/// The player can afford the card and has every tag.
pub fn validate_contexts(tags: &[&str], card: &Card, state: &GameState) -> GameResult<()> {
    validate_energy(card, state)?;
    for tag in tags {
        Requirement::Context((*tag).to_string()).check(card, state)?;
    }
    Ok(())
}

/// The player can afford the card and has shield.
pub fn validate_shield(card: &Card, state: &GameState) -> GameResult<()> {
    validate_energy(card, state)?;
    Requirement::Shield.check(card, state)
}
