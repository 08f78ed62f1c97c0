//! Filter implementations for the selection pipeline.
//!
//! One filter per user control, composed in fixed order by
//! `FilterPipeline::standard`.

pub mod tab;
pub mod search;
pub mod card_type;
pub mod card_name;

// Re-export for convenience
pub use tab::TabFilter;
pub use search::SearchFilter;
pub use card_type::CardTypeFilter;
pub use card_name::CardNameFilter;
