//! A stand-in source that simulates a slow API returning a fixed card set.

use crate::traits::CardSource;
use anyhow::Result;
use card_data::Card;
use std::time::Duration;

/// Default simulated latency of a fetch.
pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_millis(500);

/// Returns the four demo cards after a configurable delay.
///
/// ## Usage
/// ```ignore
/// let source = MockCardSource::new().with_delay(Duration::ZERO);
/// let cards = source.fetch_cards().await?;
/// ```
#[derive(Debug, Clone)]
pub struct MockCardSource {
    delay: Duration,
}

impl MockCardSource {
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_MOCK_DELAY,
        }
    }

    /// Override the simulated latency (builder pattern).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The fixed demo data set.
    pub fn demo_cards() -> Vec<Card> {
        vec![
            Card::new(1, "burner", "Burner Card 1", 100.0, 500.0, "Active"),
            Card::new(2, "burner", "Burner Card 2", 200.0, 400.0, "Blocked"),
            Card::new(3, "subscription", "Subscription Card 1", 300.0, 700.0, "Active"),
            Card::new(4, "subscription", "Subscription Card 2", 400.0, 600.0, "Active"),
        ]
    }
}

impl Default for MockCardSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CardSource for MockCardSource {
    fn name(&self) -> &str {
        "MockCardSource"
    }

    async fn fetch_cards(&self) -> Result<Vec<Card>> {
        if !self.delay.is_zero() {
            tracing::debug!("Simulating fetch latency of {:?}", self.delay);
            tokio::time::sleep(self.delay).await;
        }
        Ok(Self::demo_cards())
    }
}
