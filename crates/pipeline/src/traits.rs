//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! independently testable stages to be applied to a card set.

use crate::selection::SelectionState;
use card_data::Card;

/// One narrowing stage of the selection engine.
///
/// ## Contract
/// - A filter may only drop cards; it never adds, reorders or edits them
/// - A filter never fails. An empty output is a valid result
/// - `Send + Sync` allows a pipeline to be shared with a session task
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of cards.
    ///
    /// # Arguments
    /// * `cards` - The cards to filter (takes ownership)
    /// * `state` - The current selection state
    fn apply(&self, cards: Vec<Card>, state: &SelectionState) -> Vec<Card>;
}
