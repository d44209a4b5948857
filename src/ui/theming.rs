// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme switching.
//!
//! The active theme lives in the `data-theme` attribute of the root element
//! and in the preference store. Both are written together on every change.

use crate::dom::{Document, NodeId};
use crate::domain::Theme;
use crate::error::Result;
use crate::storage::PreferenceStore;

/// Attribute on the root element that stylesheets key off.
pub const THEME_ATTRIBUTE: &str = "data-theme";

const TOGGLE_SELECTOR: &str = "#theme-toggle, .theme-toggle";
const ICON_SELECTOR: &str = "#theme-toggle i, .theme-toggle i";

/// Applies and persists the theme, and keeps toggle icons in sync.
#[derive(Debug, Clone)]
pub struct ThemeController {
    current: Theme,
    icons: Vec<NodeId>,
}

impl ThemeController {
    /// Reads the stored preference once and applies it, or `fallback` when
    /// nothing usable is stored.
    pub fn init(document: &mut Document, store: &mut PreferenceStore, fallback: Theme) -> Self {
        let theme = store.theme().unwrap_or(fallback);
        let mut controller = Self {
            current: theme,
            icons: document.query_selector_all(ICON_SELECTOR),
        };
        if let Err(error) = controller.set(document, store, theme) {
            tracing::warn!(%error, "theme preference not persisted");
        }
        controller
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Applies `theme` to the document and toggle icons, then persists it.
    ///
    /// The document is updated even when persisting fails.
    pub fn set(
        &mut self,
        document: &mut Document,
        store: &mut PreferenceStore,
        theme: Theme,
    ) -> Result<()> {
        self.current = theme;
        let root = document.root();
        document.set_attribute(root, THEME_ATTRIBUTE, theme.as_str());
        for icon in &self.icons {
            document.set_class_name(*icon, theme.toggle_icon_class());
        }
        tracing::debug!(%theme, "theme applied");
        store.set_theme(theme)
    }

    /// Switches to the other theme and returns it.
    pub fn toggle(&mut self, document: &mut Document, store: &mut PreferenceStore) -> Result<Theme> {
        let next = self.current.toggled();
        self.set(document, store, next)?;
        Ok(next)
    }

    /// Whether a click on `target` is meant for a theme toggle.
    #[must_use]
    pub fn is_toggle(document: &Document, target: NodeId) -> bool {
        document.closest(target, TOGGLE_SELECTOR).is_some()
    }

    /// Picks up toggle icons of freshly swapped page content.
    pub fn rebind(&mut self, document: &mut Document) {
        self.icons = document.query_selector_all(ICON_SELECTOR);
        for icon in &self.icons {
            document.set_class_name(*icon, self.current.toggle_icon_class());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore, THEME_KEY};

    fn page() -> (Document, NodeId, NodeId) {
        let mut doc = Document::new();
        let body = doc.body();
        let button = doc.build("button").id("theme-toggle").append_to(body);
        let icon = doc.build("i").class("fas fa-moon").append_to(button);
        (doc, button, icon)
    }

    #[test]
    fn init_applies_fallback_when_nothing_is_stored() {
        let (mut doc, _, icon) = page();
        let mut store = PreferenceStore::in_memory();
        let controller = ThemeController::init(&mut doc, &mut store, Theme::Light);

        assert_eq!(controller.current(), Theme::Light);
        assert_eq!(doc.attribute(doc.root(), THEME_ATTRIBUTE).as_deref(), Some("light"));
        assert_eq!(doc.attribute(icon, "class").as_deref(), Some("fas fa-moon"));
        assert_eq!(store.theme(), Some(Theme::Light));
    }

    #[test]
    fn init_prefers_the_stored_theme() {
        let (mut doc, _, icon) = page();
        let mut backing = MemoryStore::new();
        backing.set(THEME_KEY, "dark").unwrap();
        let mut store = PreferenceStore::new(backing);

        let controller = ThemeController::init(&mut doc, &mut store, Theme::Light);
        assert_eq!(controller.current(), Theme::Dark);
        assert_eq!(doc.attribute(icon, "class").as_deref(), Some("fas fa-sun"));
    }

    #[test]
    fn set_then_current_round_trips_and_persists() {
        let (mut doc, _, _) = page();
        let mut store = PreferenceStore::in_memory();
        let mut controller = ThemeController::init(&mut doc, &mut store, Theme::Light);

        for theme in [Theme::Dark, Theme::Light] {
            controller.set(&mut doc, &mut store, theme).unwrap();
            assert_eq!(controller.current(), theme);
            assert_eq!(store.theme(), Some(theme));
            assert_eq!(
                doc.attribute(doc.root(), THEME_ATTRIBUTE).as_deref(),
                Some(theme.as_str())
            );
        }
    }

    #[test]
    fn toggling_twice_restores_the_original_theme() {
        let (mut doc, _, _) = page();
        let mut store = PreferenceStore::in_memory();
        let mut controller = ThemeController::init(&mut doc, &mut store, Theme::Dark);

        assert_eq!(controller.toggle(&mut doc, &mut store).unwrap(), Theme::Light);
        assert_eq!(controller.toggle(&mut doc, &mut store).unwrap(), Theme::Dark);
        assert_eq!(store.theme(), Some(Theme::Dark));
    }

    #[test]
    fn clicks_on_the_icon_count_as_toggle_clicks() {
        let (doc, button, icon) = page();
        assert!(ThemeController::is_toggle(&doc, button));
        assert!(ThemeController::is_toggle(&doc, icon));
        assert!(!ThemeController::is_toggle(&doc, doc.body()));
    }

    #[test]
    fn missing_toggle_is_not_an_error() {
        let mut doc = Document::new();
        let mut store = PreferenceStore::in_memory();
        let mut controller = ThemeController::init(&mut doc, &mut store, Theme::Light);
        assert!(controller.toggle(&mut doc, &mut store).is_ok());
    }
}
