//! Selection engine for the card listing.
//!
//! This crate provides:
//! - SelectionState and SelectionAction, the caller-owned filter state
//!   and the one-field-per-action transitions
//! - Filter trait and one implementation per listing control
//! - FilterPipeline for composing filters
//! - compute_visible, the pure entry point
//!
//! ## Architecture
//! Cards flow through the stages in a fixed order, each one only narrowing:
//! 1. TabFilter (your / all / blocked)
//! 2. SearchFilter (case-insensitive substring on name)
//! 3. CardTypeFilter (exact type, unless `all`)
//! 4. CardNameFilter (exact name, unless `all`)
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{compute_visible, SelectionAction, SelectionState, Tab};
//!
//! let mut state = SelectionState::new();
//! state.apply(SelectionAction::SelectTab(Tab::All));
//! state.apply(SelectionAction::Search("burner".into()));
//!
//! let visible = compute_visible(&cards, &state);
//! ```

pub mod selection;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod engine;

// Re-export main types
pub use engine::compute_visible;
pub use filter_pipeline::FilterPipeline;
pub use selection::{ALL_SENTINEL, FilterValue, SelectionAction, SelectionState, Tab, UnknownTab};
pub use traits::Filter;
