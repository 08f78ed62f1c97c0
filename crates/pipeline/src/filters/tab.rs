//! Filter for the listing tabs.

use crate::selection::{SelectionState, Tab};
use crate::traits::Filter;
use card_data::Card;

/// Narrows the cards according to the active tab.
///
/// ## Algorithm
/// - `Your`: keep cards whose status is `Active`
/// - `All`: keep everything
/// - `Blocked`: keep everything, same as `All`
///
/// The `Blocked` tab does not select blocked cards. Whether it should is
/// unresolved, so it is left matching `All` and logged.
pub struct TabFilter;

impl Filter for TabFilter {
    fn name(&self) -> &str {
        "TabFilter"
    }

    fn apply(&self, cards: Vec<Card>, state: &SelectionState) -> Vec<Card> {
        match state.active_tab {
            Tab::Your => cards
                .into_iter()
                .filter(|card| card.status.is_active())
                .collect(),
            Tab::All => cards,
            Tab::Blocked => {
                tracing::debug!("Blocked tab applies no status filter; listing all cards");
                cards
            }
        }
    }
}
