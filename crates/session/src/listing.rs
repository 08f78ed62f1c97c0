//! # Card Listing
//!
//! The caller-side owner of one listing session:
//! 1. Load the card snapshot from a data source
//! 2. Hold the selection state and apply user actions to it
//! 3. Run the filter pipeline over the snapshot on demand
//! 4. Project the visible cards into display rows

use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use card_data::{Card, CardCatalog, CardId};
use pipeline::{FilterPipeline, SelectionAction, SelectionState, Tab};
use sources::CardSource;

/// Display projection of one visible card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardRow {
    pub id: CardId,
    #[serde(rename = "type")]
    pub card_type: String,
    pub name: String,
    pub spent: f64,
    pub available_to_spend: f64,
    pub status: String,
}

impl From<&Card> for CardRow {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id,
            card_type: card.card_type.clone(),
            name: card.name.clone(),
            spent: card.spent,
            available_to_spend: card.available_to_spend,
            status: card.status.to_string(),
        }
    }
}

/// Values offered by the two dropdowns, besides the `all` sentinel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub card_types: Vec<String>,
    pub card_names: Vec<String>,
}

/// Everything a renderer needs to draw the listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingView {
    pub active_tab: Tab,
    pub rows: Vec<CardRow>,
    pub total_count: usize,
    /// Only present while the filter panel is open
    pub filter_options: Option<FilterOptions>,
}

impl ListingView {
    pub fn visible_count(&self) -> usize {
        self.rows.len()
    }
}

/// Owns the card snapshot, the selection state and the pipeline
pub struct CardListing {
    catalog: CardCatalog,
    state: SelectionState,
    pipeline: FilterPipeline,
}

impl CardListing {
    /// Empty listing in the initial selection state
    pub fn new() -> Self {
        Self {
            catalog: CardCatalog::new(),
            state: SelectionState::new(),
            pipeline: FilterPipeline::standard(),
        }
    }

    /// Listing over an already fetched collection
    pub fn with_cards(cards: Vec<Card>) -> Result<Self> {
        let mut listing = Self::new();
        listing.replace_cards(cards)?;
        Ok(listing)
    }

    /// Swap in a different pipeline (builder pattern)
    pub fn with_pipeline(mut self, pipeline: FilterPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Fetch the full collection from `source` and make it the current
    /// snapshot. The selection state is kept as it is.
    ///
    /// # Returns
    /// Number of cards loaded
    pub async fn load(&mut self, source: &impl CardSource) -> Result<usize> {
        let start_time = Instant::now();

        let cards = source
            .fetch_cards()
            .await
            .with_context(|| format!("Failed to fetch cards from {}", source.name()))?;
        let count = self.replace_cards(cards)?;

        info!(
            "Loaded {} cards from {} in {:.2?}",
            count,
            source.name(),
            start_time.elapsed()
        );
        Ok(count)
    }

    /// Replace the snapshot. Fails, leaving the old snapshot in place, if
    /// the cards do not have unique ids.
    pub fn replace_cards(&mut self, cards: Vec<Card>) -> Result<usize> {
        self.catalog = CardCatalog::build(cards).context("Failed to index cards")?;
        Ok(self.catalog.len())
    }

    /// Apply one user action to the selection state
    pub fn dispatch(&mut self, action: SelectionAction) {
        debug!("Dispatching {:?}", action);
        self.state.apply(action);
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// All loaded cards, in source order
    pub fn cards(&self) -> &[Card] {
        self.catalog.cards()
    }

    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// The cards the current selection lets through
    pub fn visible(&self) -> Vec<Card> {
        self.pipeline.apply(self.catalog.cards().to_vec(), &self.state)
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            card_types: self.catalog.card_types().to_vec(),
            card_names: self.catalog.card_names().to_vec(),
        }
    }

    pub fn view(&self) -> ListingView {
        let rows: Vec<CardRow> = self.visible().iter().map(CardRow::from).collect();
        debug!(
            "Listing view: {} of {} cards visible",
            rows.len(),
            self.catalog.len()
        );

        ListingView {
            active_tab: self.state.active_tab,
            rows,
            total_count: self.catalog.len(),
            filter_options: self.state.is_filter_open.then(|| self.filter_options()),
        }
    }
}

impl Default for CardListing {
    fn default() -> Self {
        Self::new()
    }
}
