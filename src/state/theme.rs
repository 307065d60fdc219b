use anyhow::Result;
use dioxus::logger::tracing::{debug, warn};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub const THEME_STORAGE_KEY: &str = "darkMode";

/// Durable key/value storage for client preferences.
pub trait PreferenceStorage {
    /// `None` when the key is absent or storage is unavailable.
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

/// Process-local storage. Used off the browser and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn class(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
        }
    }

    pub fn color_scheme(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Dark/light preference. Precedence: persisted user choice, then the OS
/// preference, then light.
#[derive(Debug, Clone)]
pub struct ThemeStore<S> {
    storage: S,
    dark: bool,
    overridden: bool,
}

impl<S: PreferenceStorage> ThemeStore<S> {
    pub fn new(storage: S, os_prefers_dark: bool) -> Self {
        let persisted = read_persisted(&storage);
        Self {
            dark: persisted.unwrap_or(os_prefers_dark),
            overridden: persisted.is_some(),
            storage,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn mode(&self) -> ThemeMode {
        if self.dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// Flips the theme and records it as an explicit choice. A storage
    /// failure only costs persistence across reloads.
    pub fn toggle(&mut self) {
        self.dark = !self.dark;
        self.overridden = true;
        let value = serde_json::Value::Bool(self.dark).to_string();
        if let Err(e) = self.storage.save(THEME_STORAGE_KEY, &value) {
            warn!("[theme] could not persist preference: {e:#}");
        }
    }

    /// Follows an OS preference change unless the user has chosen
    /// explicitly. Returns whether the theme changed.
    pub fn on_system_change(&mut self, os_prefers_dark: bool) -> bool {
        if self.overridden || read_persisted(&self.storage).is_some() {
            debug!("[theme] explicit preference set; ignoring OS change");
            return false;
        }
        let changed = self.dark != os_prefers_dark;
        self.dark = os_prefers_dark;
        changed
    }
}

fn read_persisted<S: PreferenceStorage>(storage: &S) -> Option<bool> {
    let raw = storage.load(THEME_STORAGE_KEY)?;
    match serde_json::from_str::<bool>(&raw) {
        Ok(v) => Some(v),
        Err(e) => {
            warn!("[theme] ignoring malformed stored preference {raw:?}: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStorage;

    impl PreferenceStorage for BrokenStorage {
        fn load(&self, _key: &str) -> Option<String> {
            None
        }
        fn save(&self, _key: &str, _value: &str) -> Result<()> {
            Err(anyhow::anyhow!("storage disabled"))
        }
    }

    #[test]
    fn defaults_to_os_preference_when_nothing_persisted() {
        assert!(ThemeStore::new(MemoryStorage::new(), true).is_dark());
        assert!(!ThemeStore::new(MemoryStorage::new(), false).is_dark());
    }

    #[test]
    fn persisted_choice_beats_os_preference() {
        let storage = MemoryStorage::new();
        storage.save(THEME_STORAGE_KEY, "false").unwrap();
        let store = ThemeStore::new(storage, true);
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[test]
    fn toggle_persists_and_pins_against_os_changes() {
        let storage = MemoryStorage::new();
        let mut store = ThemeStore::new(storage.clone(), true);
        assert!(store.is_dark());

        store.toggle();
        assert!(!store.is_dark());
        assert_eq!(storage.load(THEME_STORAGE_KEY).as_deref(), Some("false"));

        assert!(!store.on_system_change(true));
        assert!(!store.is_dark());
    }

    #[test]
    fn follows_os_until_user_chooses() {
        let mut store = ThemeStore::new(MemoryStorage::new(), false);
        assert!(store.on_system_change(true));
        assert!(store.is_dark());
        assert!(!store.on_system_change(true));
    }

    #[test]
    fn value_persisted_elsewhere_also_pins() {
        let storage = MemoryStorage::new();
        let mut store = ThemeStore::new(storage.clone(), false);
        storage.save(THEME_STORAGE_KEY, "false").unwrap();
        assert!(!store.on_system_change(true));
        assert!(!store.is_dark());
    }

    #[test]
    fn malformed_value_falls_back_to_os() {
        let storage = MemoryStorage::new();
        storage.save(THEME_STORAGE_KEY, "\"dark\"").unwrap();
        assert!(ThemeStore::new(storage, true).is_dark());
    }

    #[test]
    fn unavailable_storage_is_not_fatal() {
        let mut store = ThemeStore::new(BrokenStorage, true);
        assert!(store.is_dark());
        store.toggle();
        assert!(!store.is_dark());
        assert!(!store.on_system_change(true));
    }

    #[test]
    fn mode_maps_to_css_class() {
        assert_eq!(ThemeMode::Dark.class(), "theme-dark");
        assert_eq!(ThemeMode::Light.color_scheme(), "light");
    }
}
