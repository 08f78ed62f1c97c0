//! The selection engine entry point.

use crate::filter_pipeline::FilterPipeline;
use crate::selection::SelectionState;
use card_data::Card;

/// Compute the cards to display for a selection.
///
/// Runs the standard pipeline (tab, search, card type, card name) over a
/// copy of `cards`. The result is an order-preserving subsequence of the
/// input; calling again with the same inputs gives an equal result.
pub fn compute_visible(cards: &[Card], state: &SelectionState) -> Vec<Card> {
    FilterPipeline::standard().apply(cards.to_vec(), state)
}
