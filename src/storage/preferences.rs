// SPDX-License-Identifier: MPL-2.0
//! Typed access to the stored theme preference.

use super::{KeyValueStore, MemoryStore};
use crate::domain::Theme;
use crate::error::Result;

/// The single key under which the theme is stored.
pub const THEME_KEY: &str = "theme";

/// Wraps a [`KeyValueStore`] and exposes the `"theme"` entry as a [`Theme`].
pub struct PreferenceStore {
    store: Box<dyn KeyValueStore>,
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore").finish_non_exhaustive()
    }
}

impl Default for PreferenceStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl PreferenceStore {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// The stored theme.
    ///
    /// Unknown values and read failures count as "nothing stored".
    #[must_use]
    pub fn theme(&self) -> Option<Theme> {
        match self.store.get(THEME_KEY) {
            Ok(Some(raw)) => match raw.parse() {
                Ok(theme) => Some(theme),
                Err(error) => {
                    tracing::warn!(%error, "ignoring stored theme");
                    None
                }
            },
            Ok(None) => None,
            Err(error) => {
                tracing::warn!(%error, "preference storage unavailable");
                None
            }
        }
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.store.set(THEME_KEY, theme.as_str())
    }

    /// Raw value under `key`, for inspection.
    pub fn raw(&self, key: &str) -> Result<Option<String>> {
        self.store.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::Storage("quota exceeded".into()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Storage("quota exceeded".into()))
        }
    }

    #[test]
    fn empty_store_has_no_theme() {
        assert_eq!(PreferenceStore::in_memory().theme(), None);
    }

    #[test]
    fn theme_is_stored_as_lowercase_string() {
        let mut prefs = PreferenceStore::in_memory();
        prefs.set_theme(Theme::Dark).unwrap();
        assert_eq!(prefs.theme(), Some(Theme::Dark));
        assert_eq!(prefs.raw(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn unknown_stored_value_is_ignored() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(PreferenceStore::new(store).theme(), None);
    }

    #[test]
    fn broken_store_reads_as_empty_and_reports_writes() {
        let mut prefs = PreferenceStore::new(BrokenStore);
        assert_eq!(prefs.theme(), None);
        assert!(prefs.set_theme(Theme::Light).is_err());
    }
}
