//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! filters together using the builder pattern.

use crate::filters::{CardNameFilter, CardTypeFilter, SearchFilter, TabFilter};
use crate::selection::SelectionState;
use crate::traits::Filter;
use card_data::Card;

/// Chains filters together into a conjunctive processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TabFilter)
///     .add_filter(SearchFilter);
///
/// let visible = pipeline.apply(cards, &state);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The listing pipeline: tab, then search, then card type, then card name.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(TabFilter)
            .add_filter(SearchFilter)
            .add_filter(CardTypeFilter)
            .add_filter(CardNameFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the stages, in application order.
    pub fn stage_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Apply all filters in sequence to the cards.
    ///
    /// ## Algorithm
    /// 1. Start with the input cards
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set
    ///
    /// An empty intermediate result is passed on to the next stage as is.
    pub fn apply(&self, cards: Vec<Card>, state: &SelectionState) -> Vec<Card> {
        let mut current = cards;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, state);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::standard()
    }
}
