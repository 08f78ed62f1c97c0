//! # Sources Crate
//!
//! Data sources that supply the full card collection to the selection
//! engine.
//!
//! ## Components
//!
//! - **CardSource**: the trait every provider implements
//! - **MockCardSource**: the demo set of four cards behind a simulated
//!   500ms latency
//! - **FileCardSource**: a JSON card file on disk
//! - **StaticCardSource**: a list already held in memory
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{CardSource, FileCardSource};
//!
//! let source = FileCardSource::new("data/cards.json");
//! let cards = source.fetch_cards().await?;
//! ```

// Public modules
pub mod traits;
pub mod mock;
pub mod file;
pub mod memory;

// Re-export commonly used types
pub use traits::CardSource;
pub use mock::{DEFAULT_MOCK_DELAY, MockCardSource};
pub use file::FileCardSource;
pub use memory::StaticCardSource;

#[cfg(test)]
mod tests {
    use super::*;
    use card_data::Card;

    async fn fetch_names(source: &impl CardSource) -> Vec<String> {
        source
            .fetch_cards()
            .await
            .unwrap()
            .into_iter()
            .map(|card| card.name)
            .collect()
    }

    #[tokio::test]
    async fn test_static_source_preserves_order() {
        let source = StaticCardSource::new(vec![
            Card::new(2, "burner", "B", 0.0, 0.0, "Active"),
            Card::new(1, "burner", "A", 0.0, 0.0, "Active"),
        ]);

        assert_eq!(fetch_names(&source).await, vec!["B", "A"]);
    }

    #[tokio::test]
    async fn test_repeated_fetches_are_equal() {
        let source = MockCardSource::new().with_delay(std::time::Duration::ZERO);

        let first = source.fetch_cards().await.unwrap();
        let second = source.fetch_cards().await.unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_source_names() {
        assert_eq!(MockCardSource::new().name(), "MockCardSource");
        assert_eq!(StaticCardSource::default().name(), "StaticCardSource");
        assert_eq!(FileCardSource::new("x.json").name(), "FileCardSource");
    }
}
