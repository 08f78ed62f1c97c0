//! Parser for card data files.
//!
//! A card file is a JSON array of records:
//!
//! ```json
//! [
//!   { "id": 1, "type": "burner", "name": "Burner Card 1",
//!     "spent": 100, "available_to_spend": 500, "status": "Active" }
//! ]
//! ```

use crate::error::{CardDataError, Result};
use crate::types::*;
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Parse a JSON array of card records.
///
/// Every record must carry all six fields. Ids must be unique; the first
/// repeated id aborts the parse.
pub fn parse_cards(content: &str) -> Result<Vec<Card>> {
    let cards: Vec<Card> = serde_json::from_str(content)?;

    let mut seen = HashSet::with_capacity(cards.len());
    for card in &cards {
        if !seen.insert(card.id) {
            return Err(CardDataError::DuplicateId { id: card.id });
        }
    }

    Ok(cards)
}

/// Classify a failed read of the card file at `path`.
///
/// A missing file becomes `FileNotFound`; anything else stays an I/O error.
pub fn read_error(path: &Path, err: std::io::Error) -> CardDataError {
    match err.kind() {
        ErrorKind::NotFound => CardDataError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CardDataError::IoError(err),
    }
}

/// Read and parse a card file from disk.
pub fn parse_cards_file(path: &Path) -> Result<Vec<Card>> {
    let content = fs::read_to_string(path).map_err(|err| read_error(path, err))?;

    let cards = parse_cards(&content)?;
    tracing::debug!("Parsed {} cards from {}", cards.len(), path.display());
    Ok(cards)
}
