//! Dropdown filter on card name.

use crate::selection::SelectionState;
use crate::traits::Filter;
use card_data::Card;

/// Keeps cards whose name exactly equals the chosen name.
///
/// Names are not unique, so this can keep more than one card.
pub struct CardNameFilter;

impl Filter for CardNameFilter {
    fn name(&self) -> &str {
        "CardNameFilter"
    }

    fn apply(&self, cards: Vec<Card>, state: &SelectionState) -> Vec<Card> {
        if state.card_name_filter.is_all() {
            return cards;
        }

        cards
            .into_iter()
            .filter(|card| state.card_name_filter.matches(&card.name))
            .collect()
    }
}
