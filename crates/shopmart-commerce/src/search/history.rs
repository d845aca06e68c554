//! Persisted search history and the fixed suggestion vocabulary.

use shopmart_storage::LocalStore;

/// Storage key for the history list.
pub const HISTORY_KEY: &str = "searchHistory";

/// Maximum number of remembered queries.
pub const MAX_HISTORY: usize = 10;

/// Maximum number of typeahead suggestions returned.
pub const MAX_SUGGESTIONS: usize = 5;

/// Fixed typeahead vocabulary. Suggestions come back in this order, not
/// ranked by relevance.
const SUGGESTIONS: [&str; 10] = [
    "iPhone 15",
    "MacBook Pro",
    "Headphones",
    "Fashion",
    "Home Decor",
    "Gaming Laptop",
    "Smart Watch",
    "Jewelry",
    "Books",
    "Travel Bags",
];

/// Append-only-with-dedup list of past search queries, most recent first,
/// capped and persisted.
pub struct SearchHistory {
    storage: LocalStore,
    entries: Vec<String>,
}

impl SearchHistory {
    /// Load the history from the session's storage. Missing or corrupt
    /// state degrades to an empty history.
    pub fn new(storage: LocalStore) -> Self {
        let entries = storage.load_or_default(HISTORY_KEY);
        Self { storage, entries }
    }

    /// Past queries, most recent first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Record a search: prepend, drop the older duplicate if the query
    /// was already remembered, cap, persist. Blank queries are ignored.
    pub fn record(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        self.entries.retain(|prior| prior != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(MAX_HISTORY);
        self.persist();
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    /// Typeahead suggestions: case-insensitive substring match against
    /// the fixed vocabulary, vocabulary order, capped.
    pub fn suggestions_for(&self, partial: &str) -> Vec<String> {
        let partial_lower = partial.to_lowercase();
        SUGGESTIONS
            .iter()
            .filter(|s| s.to_lowercase().contains(&partial_lower))
            .take(MAX_SUGGESTIONS)
            .map(|s| s.to_string())
            .collect()
    }

    fn persist(&self) {
        if let Err(e) = self.storage.set(HISTORY_KEY, &self.entries) {
            tracing::warn!(error = %e, "failed to persist search history");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_recent_first_with_dedup() {
        let mut history = SearchHistory::new(LocalStore::new());
        history.record("iphone");
        history.record("iphone");
        history.record("macbook");

        assert_eq!(history.entries(), &["macbook".to_string(), "iphone".to_string()]);
    }

    #[test]
    fn test_repeat_moves_to_front() {
        let mut history = SearchHistory::new(LocalStore::new());
        history.record("a");
        history.record("b");
        history.record("a");

        assert_eq!(history.entries(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_capped_at_ten() {
        let mut history = SearchHistory::new(LocalStore::new());
        for i in 0..15 {
            history.record(&format!("query-{i}"));
        }
        assert_eq!(history.entries().len(), MAX_HISTORY);
        assert_eq!(history.entries()[0], "query-14");
    }

    #[test]
    fn test_blank_queries_ignored() {
        let mut history = SearchHistory::new(LocalStore::new());
        history.record("   ");
        history.record("");
        assert!(history.entries().is_empty());
    }

    #[test]
    fn test_history_persists_across_reload() {
        let storage = LocalStore::new();
        {
            let mut history = SearchHistory::new(storage.clone());
            history.record("iphone");
            history.record("macbook");
        }

        let reloaded = SearchHistory::new(storage);
        assert_eq!(
            reloaded.entries(),
            &["macbook".to_string(), "iphone".to_string()]
        );
    }

    #[test]
    fn test_corrupt_history_degrades_to_empty() {
        let storage = LocalStore::new();
        storage.set_raw(HISTORY_KEY, "not json at all");
        let history = SearchHistory::new(storage);
        assert!(history.entries().is_empty());
    }

    #[test]
    fn test_suggestions_vocabulary_order_and_cap() {
        let history = SearchHistory::new(LocalStore::new());

        let hits = history.suggestions_for("o");
        assert!(hits.len() <= MAX_SUGGESTIONS);
        // Vocabulary order, not relevance.
        assert_eq!(hits[0], "iPhone 15");

        assert_eq!(
            history.suggestions_for("lap"),
            vec!["Gaming Laptop".to_string()]
        );
        assert!(history.suggestions_for("zzz").is_empty());
    }

    #[test]
    fn test_suggestions_case_insensitive() {
        let history = SearchHistory::new(LocalStore::new());
        assert_eq!(
            history.suggestions_for("MACBOOK"),
            vec!["MacBook Pro".to_string()]
        );
    }
}
