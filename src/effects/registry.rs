//! Effect registry: card id to behavior.
//!
//! The registry is deliberately separate from the `CardCatalog`. Whoever
//! assembles a game joins the two; a catalog card without a registered
//! effect exists but cannot be played (`CardNotFound`).

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::effect::CardEffect;
use crate::cards::CardCatalog;
use crate::core::{GameError, GameResult};

/// Registry of card effects.
///
/// ## Example
///
/// ```
/// use effect_deck::cards::CardType;
/// use effect_deck::effects::{ComposedEffect, EffectRegistry, EffectStep};
///
/// let mut registry = EffectRegistry::new();
/// registry.register("jab", ComposedEffect::new(CardType::Attack).then(EffectStep::damage(2)));
///
/// assert!(registry.get("jab").is_ok());
/// assert!(registry.get("hook").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct EffectRegistry {
    effects: FxHashMap<String, Arc<dyn CardEffect>>,
}

impl EffectRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in card effect.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        super::builtin::register_builtin_effects(&mut registry);
        registry
    }

    /// Register an effect.
    ///
    /// Registering an id twice replaces the earlier effect.
    pub fn register(&mut self, card_id: impl Into<String>, effect: impl CardEffect + 'static) {
        self.register_shared(card_id, Arc::new(effect));
    }

    /// Register an already shared effect.
    pub fn register_shared(&mut self, card_id: impl Into<String>, effect: Arc<dyn CardEffect>) {
        let card_id = card_id.into();
        if self.effects.insert(card_id.clone(), effect).is_some() {
            log::warn!("effect for card {card_id:?} replaced");
        }
    }

    /// Look up the effect for a card id.
    pub fn get(&self, card_id: &str) -> GameResult<&Arc<dyn CardEffect>> {
        self.lookup(card_id)
            .ok_or_else(|| GameError::card_not_found(card_id, self.ids().map(str::to_string)))
    }

    /// The effect for `card_id`, if any. Builds no error.
    #[must_use]
    pub fn lookup(&self, card_id: &str) -> Option<&Arc<dyn CardEffect>> {
        self.effects.get(card_id)
    }

    /// Every registered effect, keyed by card id.
    #[must_use]
    pub fn all(&self) -> &FxHashMap<String, Arc<dyn CardEffect>> {
        &self.effects
    }

    /// Registered card ids, sorted.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        let mut ids: Vec<&str> = self.effects.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids.into_iter()
    }

    #[must_use]
    pub fn contains(&self, card_id: &str) -> bool {
        self.effects.contains_key(card_id)
    }

    /// Catalog ids that have no registered effect, in catalog order.
    #[must_use]
    pub fn missing_for(&self, catalog: &CardCatalog) -> Vec<String> {
        catalog
            .ids()
            .filter(|id| !self.contains(id))
            .map(str::to_string)
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

/// Every effect in the built-in registry.
#[must_use]
pub fn get_all_effects() -> FxHashMap<String, Arc<dyn CardEffect>> {
    EffectRegistry::standard().effects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardType;
    use crate::core::{ErrorKind, EnemyConfig, GameState, Player, ScriptedRng};
    use crate::effects::{ComposedEffect, EffectStep};

    #[test]
    fn test_register_and_get() {
        let mut registry = EffectRegistry::new();
        assert!(registry.is_empty());

        registry.register("jab", ComposedEffect::new(CardType::Attack).then(EffectStep::damage(2)));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("jab").unwrap().category(), CardType::Attack);
    }

    #[test]
    fn test_lookup_unknown_id() {
        let mut registry = EffectRegistry::new();
        registry.register("jab", ComposedEffect::new(CardType::Attack).then(EffectStep::damage(2)));

        assert!(registry.lookup("hook").is_none());
        assert_eq!(registry.lookup("jab").map(|e| e.category()), Some(CardType::Attack));
    }

    #[test]
    fn test_unknown_id_lists_registered() {
        let mut registry = EffectRegistry::new();
        registry.register("b", ComposedEffect::new(CardType::Defense));
        registry.register("a", ComposedEffect::new(CardType::Defense));

        match registry.get("c").unwrap_err() {
            GameError::CardNotFound { card_id, available_cards } => {
                assert_eq!(card_id, "c");
                assert_eq!(available_cards, vec!["a".to_string(), "b".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_register_overwrites() {
        let mut registry = EffectRegistry::new();
        registry.register("jab", ComposedEffect::new(CardType::Attack).then(EffectStep::damage(2)));
        registry.register("jab", ComposedEffect::new(CardType::Attack).then(EffectStep::damage(7)));

        assert_eq!(registry.len(), 1);

        let card = crate::cards::Card::new("jab", "Jab", 0, CardType::Attack);
        let state = GameState::new("t", Player::new("p", 50, 3, Vec::new()), Some(EnemyConfig::default().spawn()));
        let next = registry.get("jab").unwrap().execute(&card, state, &mut ScriptedRng::default());
        assert_eq!(next.enemy.unwrap().health, 23);
    }

    #[test]
    fn test_standard_covers_catalog() {
        let registry = EffectRegistry::standard();
        let catalog = CardCatalog::standard();

        assert_eq!(registry.len(), catalog.len());
        assert!(registry.missing_for(catalog).is_empty());
        assert_eq!(get_all_effects().len(), catalog.len());
    }

    #[test]
    fn test_missing_for_reports_gaps() {
        let mut registry = EffectRegistry::new();
        registry.register("strike", ComposedEffect::new(CardType::Attack));

        let missing = registry.missing_for(CardCatalog::standard());
        assert_eq!(missing.len(), CardCatalog::standard().len() - 1);
        assert_eq!(missing[0], "heavy_strike");
        assert_eq!(registry.get("block").unwrap_err().kind(), ErrorKind::CardNotFound);
    }
}
