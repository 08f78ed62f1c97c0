//! Dropdown filter on card type.

use crate::selection::SelectionState;
use crate::traits::Filter;
use card_data::Card;

/// Keeps cards whose type exactly equals the chosen type.
pub struct CardTypeFilter;

impl Filter for CardTypeFilter {
    fn name(&self) -> &str {
        "CardTypeFilter"
    }

    fn apply(&self, cards: Vec<Card>, state: &SelectionState) -> Vec<Card> {
        if state.card_type_filter.is_all() {
            return cards;
        }

        cards
            .into_iter()
            .filter(|card| state.card_type_filter.matches(&card.card_type))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards() -> Vec<Card> {
        vec![
            Card::new(1, "burner", "Burner Card 1", 100.0, 500.0, "Active"),
            Card::new(3, "subscription", "Subscription Card 1", 300.0, 700.0, "Active"),
            Card::new(4, "subscription", "Subscription Card 2", 400.0, 600.0, "Blocked"),
        ]
    }

    #[test]
    fn test_exact_type_match() {
        let mut state = SelectionState::new();
        state.set_card_type_filter("subscription");

        let filtered = CardTypeFilter.apply(cards(), &state);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, 3);
        assert_eq!(filtered[1].id, 4);
    }

    #[test]
    fn test_type_match_is_case_sensitive() {
        let mut state = SelectionState::new();
        state.set_card_type_filter("Burner");

        assert!(CardTypeFilter.apply(cards(), &state).is_empty());
    }

    #[test]
    fn test_all_sentinel_keeps_everything() {
        let filtered = CardTypeFilter.apply(cards(), &SelectionState::new());
        assert_eq!(filtered.len(), 3);
    }
}
