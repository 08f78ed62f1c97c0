//! Source over an in-memory card list.

use crate::traits::CardSource;
use anyhow::Result;
use card_data::Card;

/// Hands out clones of a fixed list. Useful for embedding callers and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCardSource {
    cards: Vec<Card>,
}

impl StaticCardSource {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl CardSource for StaticCardSource {
    fn name(&self) -> &str {
        "StaticCardSource"
    }

    async fn fetch_cards(&self) -> Result<Vec<Card>> {
        Ok(self.cards.clone())
    }
}
