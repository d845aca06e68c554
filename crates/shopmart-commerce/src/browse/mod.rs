//! Browse state module.
//!
//! Session-only filter and sort state for product listing views. Nothing
//! here is persisted; navigating away may reset it at the caller's
//! discretion.

mod filter;
mod listing;
mod sort;

pub use filter::FilterState;
pub use listing::Listing;
pub use sort::{SortDirection, SortField, SortState};
