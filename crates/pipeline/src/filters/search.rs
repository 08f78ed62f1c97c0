//! Free-text search over card names.

use crate::selection::SelectionState;
use crate::traits::Filter;
use card_data::Card;

/// Keeps cards whose name contains the search text, ignoring case.
///
/// Substring match on the lowercased name, so "card 2" matches
/// "Burner Card 2". An empty query keeps everything. The query is not
/// trimmed, so surrounding spaces take part in the match.
pub struct SearchFilter;

impl Filter for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn apply(&self, cards: Vec<Card>, state: &SelectionState) -> Vec<Card> {
        if state.search_query.is_empty() {
            return cards;
        }

        let needle = state.search_query.to_lowercase();
        cards
            .into_iter()
            .filter(|card| card.name.to_lowercase().contains(&needle))
            .collect()
    }
}
