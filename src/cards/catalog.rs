//! Card catalog for definition lookup.
//!
//! The catalog is the read-only list of every card the game knows about, in
//! a fixed order. The starting deck is taken from the front of this order,
//! so reordering entries changes the opening hand.
//!
//! The catalog only describes cards. What a card *does* lives in the
//! `EffectRegistry`; the two are joined by card id when the engine is built.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use super::definition::{Card, CardType};
use crate::core::{GameError, GameResult};

/// Ordered, id-indexed collection of card definitions.
///
/// ## Example
///
/// ```
/// use effect_deck::cards::CardCatalog;
///
/// let catalog = CardCatalog::standard();
/// let strike = catalog.get("strike").unwrap();
/// assert_eq!(strike.cost, 1);
///
/// assert!(catalog.get("nope").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<Card>,
    index: FxHashMap<String, usize>,
}

impl CardCatalog {
    /// Build a catalog from definitions.
    ///
    /// Panics if two cards share an id.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut catalog = Self::default();
        for card in cards {
            if catalog.index.contains_key(&card.id) {
                panic!("Card with ID {:?} already in catalog", card.id);
            }
            catalog.index.insert(card.id.clone(), catalog.cards.len());
            catalog.cards.push(card);
        }
        catalog
    }

    /// The process-wide catalog of the shipped game.
    pub fn standard() -> &'static CardCatalog {
        static STANDARD: OnceLock<CardCatalog> = OnceLock::new();
        STANDARD.get_or_init(|| CardCatalog::new(standard_cards()))
    }

    /// Look up a card by id.
    pub fn get(&self, id: &str) -> GameResult<&Card> {
        self.index
            .get(id)
            .map(|&i| &self.cards[i])
            .ok_or_else(|| GameError::card_not_found(id, self.ids().map(str::to_string)))
    }

    /// All cards, in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Card] {
        &self.cards
    }

    /// All card ids, in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.cards.iter().map(|c| c.id.as_str())
    }

    /// The first `count` cards, in catalog order.
    #[must_use]
    pub fn first(&self, count: usize) -> &[Card] {
        &self.cards[..count.min(self.cards.len())]
    }

    /// Find cards of a given type.
    pub fn find_by_type(&self, card_type: CardType) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.card_type == card_type)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Look up a card in the standard catalog.
pub fn get_card(id: &str) -> GameResult<&'static Card> {
    CardCatalog::standard().get(id)
}

/// Every card in the standard catalog.
pub fn get_all_cards() -> &'static [Card] {
    CardCatalog::standard().all()
}

fn card(id: &str, name: &str, cost: u32, description: &str, card_type: CardType) -> Card {
    Card::new(id, name, cost, card_type).with_description(description)
}

fn standard_cards() -> Vec<Card> {
    use CardType::*;

    vec![
        card("strike", "Strike", 1, "Deal 6 damage", Attack),
        card("heavy_strike", "Heavy Strike", 2, "Deal 12 damage", Attack),
        card("quick_strike", "Quick Strike", 0, "Deal 3 damage", Attack),
        card("precise_strike", "Precise Strike", 2, "Deal 8 damage, ignores shield", Attack),
        card("wild_strike", "Wild Strike", 1, "Deal 3-9 damage randomly", Attack),
        card("vampiric_strike", "Vampiric Strike", 2, "Deal 10 damage, gain 2 shield", Attack),
        card("berserker_strike", "Berserker Strike", 3, "Deal 15 damage, gain 3 shield", Attack),
        card("block", "Block", 1, "Gain 5 shield", Defense),
        card("shield_up", "Shield Up", 2, "Gain 8 shield", Defense),
        card("dodge", "Dodge", 1, "Negate next attack", Defense),
        card("init_algorithm", "Initialize Algorithm", 1, "Gain Algorithm context", Context),
        card("energy_surge", "Energy Surge", 0, "Gain HighEnergy context", Context),
        card("load_balancer", "Load Balancer", 2, "Gain LoadBalancer context", Context),
        card("data_cache", "Data Cache", 1, "Gain Cache context", Context),
        card("overclock_attack", "Overclock Attack", 2, "Deal 15 damage (requires HighEnergy)", Dependent),
        card("shield_slam", "Shield Slam", 1, "Deal damage equal to shield (requires Shield)", Dependent),
        card("execute_algorithm", "Execute Algorithm", 3, "Deal 20 damage (requires Algorithm)", Dependent),
    ]
}
