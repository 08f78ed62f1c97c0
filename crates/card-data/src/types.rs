//! Core domain types for payment-card records.
//!
//! These are the records a data source hands to the selection engine.
//! The engine only ever reads them; nothing here is mutated after load.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a card. Treated as an opaque key.
pub type CardId = u32;

// =============================================================================
// Card Status
// =============================================================================

/// Lifecycle status of a card.
///
/// The observed values are `Active` and `Blocked`. Any other string coming
/// from a data source is kept verbatim in `Other` so it round-trips and can
/// still be displayed; it never counts as active.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CardStatus {
    Active,
    Blocked,
    Other(String),
}

impl CardStatus {
    pub fn as_str(&self) -> &str {
        match self {
            CardStatus::Active => "Active",
            CardStatus::Blocked => "Blocked",
            CardStatus::Other(raw) => raw,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, CardStatus::Active)
    }
}

impl From<String> for CardStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Active" => CardStatus::Active,
            "Blocked" => CardStatus::Blocked,
            _ => CardStatus::Other(raw),
        }
    }
}

impl From<&str> for CardStatus {
    fn from(raw: &str) -> Self {
        CardStatus::from(raw.to_string())
    }
}

impl From<CardStatus> for String {
    fn from(status: CardStatus) -> Self {
        match status {
            CardStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for CardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Card
// =============================================================================

/// One issued payment card.
///
/// `card_type` is an open set (`burner`, `subscription`, ...) and is only
/// ever compared for equality. `spent` and `available_to_spend` are carried
/// for display and take no part in filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    #[serde(rename = "type")]
    pub card_type: String,
    pub name: String,
    pub spent: f64,
    pub available_to_spend: f64,
    pub status: CardStatus,
}

impl Card {
    pub fn new(
        id: CardId,
        card_type: impl Into<String>,
        name: impl Into<String>,
        spent: f64,
        available_to_spend: f64,
        status: impl Into<CardStatus>,
    ) -> Self {
        Self {
            id,
            card_type: card_type.into(),
            name: name.into(),
            spent,
            available_to_spend,
            status: status.into(),
        }
    }
}
