//! # Card Data Crate
//!
//! Domain types and loading for payment-card records.
//!
//! ## Main Components
//!
//! - **types**: `Card`, `CardId`, `CardStatus`
//! - **parser**: parse JSON card files into `Card`s
//! - **index**: `CardCatalog`, an indexed snapshot that also derives the
//!   dropdown options (distinct types and names)
//! - **error**: error types for card loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use card_data::{parser, CardCatalog};
//! use std::path::Path;
//!
//! let cards = parser::parse_cards_file(Path::new("data/cards.json"))?;
//! let catalog = CardCatalog::build(cards)?;
//!
//! println!("{} cards, types: {:?}", catalog.len(), catalog.card_types());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CardDataError, Result};
pub use index::CardCatalog;
pub use types::{Card, CardId, CardStatus};
