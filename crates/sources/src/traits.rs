//! The data-source seam between card providers and the selection engine.

use anyhow::Result;
use card_data::Card;
use std::future::Future;

/// Anything that can produce the full card collection.
///
/// The engine does not care whether a source is backed by memory, a file or
/// a remote service; it only ever sees the `Vec<Card>` snapshot a fetch
/// returns. Fetches may be repeated, and each call yields a fresh snapshot.
///
/// ## Design Note
/// - `Send + Sync` lets a source be shared with a session task
/// - The returned future is `Send` so fetches can run on a multi-threaded runtime
pub trait CardSource: Send + Sync {
    /// Returns the name of this source (for logging/debugging)
    fn name(&self) -> &str;

    /// Fetch every card this source knows about, in source order.
    fn fetch_cards(&self) -> impl Future<Output = Result<Vec<Card>>> + Send;
}
