//! Session crate for the card listing.
//!
//! This crate holds the caller-side pieces that sit around the selection
//! engine: the listing that owns the card snapshot and selection state, and
//! an actor handle that serialises state changes coming from several tasks.

pub mod listing;
pub mod actor;

pub use actor::{SessionError, SessionHandle};
pub use listing::{CardListing, CardRow, FilterOptions, ListingView};
