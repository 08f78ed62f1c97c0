//! Error types for the card-data crate.

use crate::types::CardId;
use thiserror::Error;

/// Errors that can occur while loading or indexing card records.
///
/// A record that is missing a required field is rejected up front as a
/// `Json` error instead of being carried through as an inert card.
#[derive(Error, Debug)]
pub enum CardDataError {
    /// File could not be found or opened
    #[error("Failed to open card file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Malformed JSON, or a record missing a required field
    #[error("Invalid card data: {0}")]
    Json(#[from] serde_json::Error),

    /// Two records share the same id
    #[error("Duplicate card id {id}")]
    DuplicateId { id: CardId },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CardDataError>;
