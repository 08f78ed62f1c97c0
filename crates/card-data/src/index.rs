//! CardCatalog: an indexed snapshot of the card collection.
//!
//! Besides holding the cards in their original order, the catalog keeps:
//! - an id index for O(1) lookups
//! - the distinct card types and names in first-seen order, which are the
//!   options offered by the type and name dropdowns

use crate::error::{CardDataError, Result};
use crate::types::*;
use std::collections::{HashMap, HashSet};

/// Owned, order-preserving snapshot of a card collection.
#[derive(Debug, Clone, Default)]
pub struct CardCatalog {
    cards: Vec<Card>,
    by_id: HashMap<CardId, usize>,
    card_types: Vec<String>,
    card_names: Vec<String>,
}

impl CardCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a card collection.
    ///
    /// Fails with `DuplicateId` if two cards share an id.
    pub fn build(cards: Vec<Card>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(cards.len());
        let mut seen_types = HashSet::new();
        let mut seen_names = HashSet::new();
        let mut card_types = Vec::new();
        let mut card_names = Vec::new();

        for (position, card) in cards.iter().enumerate() {
            if by_id.insert(card.id, position).is_some() {
                return Err(CardDataError::DuplicateId { id: card.id });
            }
            if seen_types.insert(card.card_type.as_str()) {
                card_types.push(card.card_type.clone());
            }
            if seen_names.insert(card.name.as_str()) {
                card_names.push(card.name.clone());
            }
        }

        tracing::debug!(
            "Built card catalog: {} cards, {} types, {} names",
            cards.len(),
            card_types.len(),
            card_names.len()
        );

        Ok(Self {
            cards,
            by_id,
            card_types,
            card_names,
        })
    }

    /// All cards, in the order the data source produced them.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Look up a card by id.
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.by_id.get(&id).map(|&position| &self.cards[position])
    }

    /// Distinct card types, first-seen order.
    pub fn card_types(&self) -> &[String] {
        &self.card_types
    }

    /// Distinct card names, first-seen order.
    pub fn card_names(&self) -> &[String] {
        &self.card_names
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
