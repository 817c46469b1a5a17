//! Accessibility preferences and the theme they produce.

use std::sync::Arc;

use tracing::{info, warn};
use trueshade_core::{FilterMode, HexColor, Preferences, Rgb};

use crate::persistence::{self, KeyValueStore, keys};

/// Base font size applied when large text is on.
pub const LARGE_TEXT_FONT_SIZE: &str = "18px";

/// Accent colors as `(high contrast, normal)`.
const ACCENT: (Rgb, Rgb) = (Rgb::new(0x6a, 0xff, 0x00), Rgb::new(0x6a, 0xe3, 0xff));
const ACCENT_2: (Rgb, Rgb) = (Rgb::new(0xff, 0x2b, 0xd6), Rgb::new(0xff, 0x7a, 0xdf));

/// Preferences with write-through persistence.
pub struct PreferencesStore {
    current: Preferences,
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for PreferencesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferencesStore")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl PreferencesStore {
    /// Load persisted preferences, falling back to defaults.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let current = persistence::load(store.as_ref(), keys::PREFERENCES, Preferences::default());
        Self { current, store }
    }

    #[must_use]
    pub const fn preferences(&self) -> Preferences {
        self.current
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::from(&self.current)
    }

    pub fn set_filter(&mut self, filter: FilterMode) {
        self.current.filter = filter;
        info!(filter = filter.as_str(), "Filter mode changed");
        self.persist();
    }

    pub fn set_high_contrast(&mut self, on: bool) {
        self.current.high_contrast = on;
        self.persist();
    }

    pub fn set_large_text(&mut self, on: bool) {
        self.current.large_text = on;
        self.persist();
    }

    /// Re-read preferences from persistence.
    pub fn reload(&mut self) {
        self.store.refresh();
        self.current = persistence::load(self.store.as_ref(), keys::PREFERENCES, Preferences::default());
    }

    fn persist(&self) {
        if let Err(e) = persistence::save(self.store.as_ref(), keys::PREFERENCES, &self.current) {
            warn!(error = %e, "Failed to persist preferences");
        }
    }
}

/// Visual settings derived from [`Preferences`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub filter: FilterMode,
    pub high_contrast: bool,
    pub accent: HexColor,
    pub accent_2: HexColor,
    /// `None` keeps the surface's default size.
    pub font_size: Option<&'static str>,
}

impl From<&Preferences> for Theme {
    fn from(prefs: &Preferences) -> Self {
        let pick = |(high, normal): (Rgb, Rgb)| {
            HexColor::from(if prefs.high_contrast { high } else { normal })
        };
        Self {
            filter: prefs.filter,
            high_contrast: prefs.high_contrast,
            accent: pick(ACCENT),
            accent_2: pick(ACCENT_2),
            font_size: prefs.large_text.then_some(LARGE_TEXT_FONT_SIZE),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_defaults_when_nothing_persisted() {
        let prefs = PreferencesStore::new(Arc::new(MemoryStore::new()));
        assert_eq!(prefs.preferences(), Preferences::default());
    }

    #[test]
    fn test_setters_write_through() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut prefs = PreferencesStore::new(Arc::clone(&store));
        prefs.set_filter(FilterMode::Deuteranopia);
        prefs.set_high_contrast(true);
        prefs.set_large_text(true);

        let raw = store.get_raw(keys::PREFERENCES).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["filter"], "deuteranopia");
        assert_eq!(json["highContrast"], true);
        assert_eq!(json["largeText"], true);

        let reopened = PreferencesStore::new(store);
        assert_eq!(reopened.preferences(), prefs.preferences());
    }

    #[test]
    fn test_partial_blob_uses_field_defaults() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        store
            .set_raw(keys::PREFERENCES, r#"{"largeText":true}"#.to_string())
            .unwrap();
        let prefs = PreferencesStore::new(store).preferences();
        assert!(prefs.large_text);
        assert!(!prefs.high_contrast);
        assert_eq!(prefs.filter, FilterMode::None);
    }

    #[test]
    fn test_reload_picks_up_external_changes() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut prefs = PreferencesStore::new(Arc::clone(&store));
        store
            .set_raw(keys::PREFERENCES, r#"{"filter":"tritanopia"}"#.to_string())
            .unwrap();
        prefs.reload();
        assert_eq!(prefs.preferences().filter, FilterMode::Tritanopia);
    }

    #[test]
    fn test_theme_normal() {
        let theme = Theme::from(&Preferences::default());
        assert_eq!(theme.accent.as_str(), "#6ae3ff");
        assert_eq!(theme.accent_2.as_str(), "#ff7adf");
        assert_eq!(theme.font_size, None);
        assert!(!theme.high_contrast);
    }

    #[test]
    fn test_theme_high_contrast_large_text() {
        let prefs = Preferences {
            filter: FilterMode::Achromatopsia,
            high_contrast: true,
            large_text: true,
        };
        let theme = Theme::from(&prefs);
        assert_eq!(theme.accent.as_str(), "#6aff00");
        assert_eq!(theme.accent_2.as_str(), "#ff2bd6");
        assert_eq!(theme.font_size, Some("18px"));
        assert_eq!(theme.filter, FilterMode::Achromatopsia);
    }
}
