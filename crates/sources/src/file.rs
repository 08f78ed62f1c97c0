//! Source backed by a JSON card file on disk.

use crate::traits::CardSource;
use anyhow::{Context, Result};
use card_data::{Card, parser};
use std::path::{Path, PathBuf};

/// Reads the card file on every fetch, so edits show up on the next load.
#[derive(Debug, Clone)]
pub struct FileCardSource {
    path: PathBuf,
}

impl FileCardSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CardSource for FileCardSource {
    fn name(&self) -> &str {
        "FileCardSource"
    }

    async fn fetch_cards(&self) -> Result<Vec<Card>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|err| parser::read_error(&self.path, err))
            .with_context(|| format!("Failed to read card file {}", self.path.display()))?;

        let cards = parser::parse_cards(&content)
            .with_context(|| format!("Failed to parse card file {}", self.path.display()))?;

        tracing::debug!("Read {} cards from {}", cards.len(), self.path.display());
        Ok(cards)
    }
}
