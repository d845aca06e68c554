//! Search history and typeahead suggestions.

mod history;

pub use history::{SearchHistory, HISTORY_KEY, MAX_HISTORY, MAX_SUGGESTIONS};
