//! Persisted session preferences: language, currency, location, theme.

use serde::{Deserialize, Serialize};
use shopmart_storage::LocalStore;

const LANGUAGE_KEY: &str = "preferred-language";
const CURRENCY_KEY: &str = "preferred-currency";
const LOCATION_KEY: &str = "user-location";
const THEME_KEY: &str = "theme";

/// Display theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }
}

/// Session preferences, each persisted under its own key the moment it
/// changes. Unknown or damaged persisted values fall back to defaults.
pub struct Preferences {
    storage: LocalStore,
    language: String,
    currency: String,
    location: String,
    theme: Theme,
}

impl Preferences {
    /// Load preferences, defaulting anything missing.
    pub fn new(storage: LocalStore) -> Self {
        let language = load_string(&storage, LANGUAGE_KEY, "en");
        let currency = load_string(&storage, CURRENCY_KEY, "USD");
        let location = load_string(&storage, LOCATION_KEY, "United States");
        let theme = match storage.get::<Theme>(THEME_KEY) {
            Ok(Some(theme)) => theme,
            _ => Theme::default(),
        };
        Self {
            storage,
            language,
            currency,
            location,
            theme,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
        persist(&self.storage, LANGUAGE_KEY, &self.language);
    }

    pub fn set_currency(&mut self, currency: impl Into<String>) {
        self.currency = currency.into();
        persist(&self.storage, CURRENCY_KEY, &self.currency);
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
        persist(&self.storage, LOCATION_KEY, &self.location);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        persist(&self.storage, THEME_KEY, &self.theme);
    }
}

fn load_string(storage: &LocalStore, key: &str, default: &str) -> String {
    match storage.get::<String>(key) {
        Ok(Some(value)) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

fn persist<T: Serialize>(storage: &LocalStore, key: &str, value: &T) {
    if let Err(e) = storage.set(key, value) {
        tracing::warn!(key, error = %e, "failed to persist preference");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::new(LocalStore::new());
        assert_eq!(prefs.language(), "en");
        assert_eq!(prefs.currency(), "USD");
        assert_eq!(prefs.location(), "United States");
        assert_eq!(prefs.theme(), Theme::System);
    }

    #[test]
    fn test_setters_persist_across_reload() {
        let storage = LocalStore::new();
        {
            let mut prefs = Preferences::new(storage.clone());
            prefs.set_language("ar");
            prefs.set_currency("AED");
            prefs.set_theme(Theme::Dark);
        }

        let reloaded = Preferences::new(storage);
        assert_eq!(reloaded.language(), "ar");
        assert_eq!(reloaded.currency(), "AED");
        assert_eq!(reloaded.theme(), Theme::Dark);
        assert_eq!(reloaded.location(), "United States");
    }

    #[test]
    fn test_damaged_theme_falls_back_to_system() {
        let storage = LocalStore::new();
        storage.set_raw(THEME_KEY, "\"neon\"");
        let prefs = Preferences::new(storage);
        assert_eq!(prefs.theme(), Theme::System);
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }
}
