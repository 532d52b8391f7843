use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// localStorage key holding the persisted preference.
pub const STORAGE_KEY: &str = "theme";
/// Class toggled on the document root while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme preference: {0:?}")]
pub struct ParseThemeError(pub String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage rejected the write: {0}")]
    Rejected(String),
}

impl ThemePreference {
    /// Stored value first, then the OS signal, then light.
    pub fn resolve(stored: Option<&str>, os_prefers_dark: bool) -> Self {
        match stored.map(str::parse::<Self>) {
            Some(Ok(pref)) => pref,
            Some(Err(e)) => {
                log::warn!("ignoring stored theme: {e}");
                Self::from_os(os_prefers_dark)
            }
            None => Self::from_os(os_prefers_dark),
        }
    }

    fn from_os(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Where the preference string is persisted between sessions.
pub trait ThemeStore {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&mut self, value: &str) -> Result<(), StorageError>;
}

/// The document-level visual state that mirrors the preference.
pub trait ThemeDocument {
    fn apply(&mut self, preference: ThemePreference);
}

/// Session-only store, used when the browser has no storage to offer.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    value: Option<String>,
}

impl MemoryStore {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.value.clone())
    }

    fn save(&mut self, value: &str) -> Result<(), StorageError> {
        self.value = Some(value.to_string());
        Ok(())
    }
}

/// Owns the in-memory flag and keeps the document and the store in step with it.
pub struct ThemeController<S, D> {
    preference: ThemePreference,
    store: S,
    document: D,
    persistent: bool,
}

impl<S: ThemeStore, D: ThemeDocument> ThemeController<S, D> {
    pub fn init(store: S, mut document: D, os_prefers_dark: bool) -> Self {
        let (stored, persistent) = match store.load() {
            Ok(v) => (v, true),
            Err(e) => {
                log::warn!("theme preference not loaded, using session only: {e}");
                (None, false)
            }
        };
        let preference = ThemePreference::resolve(stored.as_deref(), os_prefers_dark);
        document.apply(preference);
        log::debug!("resolved theme preference: {preference}");
        Self {
            preference,
            store,
            document,
            persistent,
        }
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// Whether the preference still reaches durable storage.
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    pub fn toggle(&mut self) -> ThemePreference {
        self.preference = self.preference.toggled();
        self.document.apply(self.preference);
        if self.persistent {
            if let Err(e) = self.store.save(self.preference.as_str()) {
                self.storage_failed(e);
            }
        }
        self.preference
    }

    /// Stops persisting for the rest of the session. Stores that write in the
    /// background report their failures here after `save` returned.
    pub fn storage_failed(&mut self, err: StorageError) {
        if self.persistent {
            log::warn!("theme preference not persisted, using session only: {err}");
            self.persistent = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[derive(Clone, Default)]
    struct RecordingDocument {
        dark: Rc<RefCell<Option<bool>>>,
    }

    impl ThemeDocument for RecordingDocument {
        fn apply(&mut self, preference: ThemePreference) {
            *self.dark.borrow_mut() = Some(preference.is_dark());
        }
    }

    #[derive(Clone, Default)]
    struct SharedStore {
        value: Rc<RefCell<Option<String>>>,
    }

    impl ThemeStore for SharedStore {
        fn load(&self) -> Result<Option<String>, StorageError> {
            Ok(self.value.borrow().clone())
        }

        fn save(&mut self, value: &str) -> Result<(), StorageError> {
            *self.value.borrow_mut() = Some(value.to_string());
            Ok(())
        }
    }

    struct BrokenStore;

    impl ThemeStore for BrokenStore {
        fn load(&self) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn save(&mut self, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    struct ReadOnlyStore(Option<String>);

    impl ThemeStore for ReadOnlyStore {
        fn load(&self) -> Result<Option<String>, StorageError> {
            Ok(self.0.clone())
        }

        fn save(&mut self, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Rejected("QuotaExceededError".to_string()))
        }
    }

    #[test]
    fn stored_value_wins_over_os_signal() {
        assert_eq!(
            ThemePreference::resolve(Some("light"), true),
            ThemePreference::Light
        );
        assert_eq!(
            ThemePreference::resolve(Some("dark"), false),
            ThemePreference::Dark
        );
    }

    #[test]
    fn os_signal_wins_over_default() {
        assert_eq!(ThemePreference::resolve(None, true), ThemePreference::Dark);
        assert_eq!(ThemePreference::resolve(None, false), ThemePreference::Light);
    }

    #[test]
    fn unknown_stored_value_falls_back() {
        assert_eq!(
            ThemePreference::resolve(Some("sepia"), true),
            ThemePreference::Dark
        );
        assert_eq!(
            ThemePreference::resolve(Some(""), false),
            ThemePreference::Light
        );
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("dark".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
        assert_eq!(" light\n".parse::<ThemePreference>(), Ok(ThemePreference::Light));
        assert!("Dark!".parse::<ThemePreference>().is_err());
        assert_eq!(ThemePreference::Dark.to_string(), "dark");
        assert_eq!(
            serde_json::to_string(&ThemePreference::Light).unwrap(),
            "\"light\""
        );
    }

    #[test]
    fn init_applies_resolved_preference() {
        let doc = RecordingDocument::default();
        let store = MemoryStore::with_value("dark");
        let ctrl = ThemeController::init(store, doc.clone(), false);
        assert_eq!(ctrl.preference(), ThemePreference::Dark);
        assert_eq!(*doc.dark.borrow(), Some(true));
    }

    #[test]
    fn toggle_twice_restores_state_and_storage() {
        let doc = RecordingDocument::default();
        let store = SharedStore::default();
        *store.value.borrow_mut() = Some("light".to_string());
        let mut ctrl = ThemeController::init(store.clone(), doc.clone(), true);
        assert_eq!(ctrl.preference(), ThemePreference::Light);

        assert_eq!(ctrl.toggle(), ThemePreference::Dark);
        assert_eq!(*doc.dark.borrow(), Some(true));
        assert_eq!(store.value.borrow().as_deref(), Some("dark"));

        assert_eq!(ctrl.toggle(), ThemePreference::Light);
        assert_eq!(*doc.dark.borrow(), Some(false));
        assert_eq!(store.value.borrow().as_deref(), Some("light"));
    }

    #[test]
    fn toggle_persists_when_nothing_was_stored() {
        let store = SharedStore::default();
        let mut ctrl = ThemeController::init(store.clone(), RecordingDocument::default(), true);
        assert_eq!(store.value.borrow().as_deref(), None);
        ctrl.toggle();
        assert_eq!(store.value.borrow().as_deref(), Some("light"));
    }

    #[test]
    fn unavailable_storage_degrades_to_memory() {
        let doc = RecordingDocument::default();
        let mut ctrl = ThemeController::init(BrokenStore, doc.clone(), true);
        assert!(!ctrl.is_persistent());
        assert_eq!(ctrl.preference(), ThemePreference::Dark);
        assert_eq!(ctrl.toggle(), ThemePreference::Light);
        assert_eq!(*doc.dark.borrow(), Some(false));
    }

    #[test]
    fn background_write_failure_stops_persisting() {
        let doc = RecordingDocument::default();
        let store = SharedStore::default();
        let mut ctrl = ThemeController::init(store.clone(), doc.clone(), false);
        assert_eq!(ctrl.toggle(), ThemePreference::Dark);
        assert_eq!(store.value.borrow().as_deref(), Some("dark"));

        ctrl.storage_failed(StorageError::Rejected("QuotaExceededError".to_string()));
        assert!(!ctrl.is_persistent());
        ctrl.storage_failed(StorageError::Unavailable);
        assert!(!ctrl.is_persistent());

        assert_eq!(ctrl.toggle(), ThemePreference::Light);
        assert_eq!(*doc.dark.borrow(), Some(false));
        assert_eq!(store.value.borrow().as_deref(), Some("dark"));
    }

    #[test]
    fn memory_store_keeps_the_session_value() {
        let mut ctrl =
            ThemeController::init(MemoryStore::default(), RecordingDocument::default(), true);
        assert_eq!(ctrl.preference(), ThemePreference::Dark);
        ctrl.toggle();
        assert!(ctrl.is_persistent());
        assert_eq!(ctrl.store.load(), Ok(Some("light".to_string())));
    }

    #[test]
    fn rejected_write_keeps_toggling_in_memory() {
        let doc = RecordingDocument::default();
        let mut ctrl = ThemeController::init(ReadOnlyStore(None), doc.clone(), false);
        assert!(ctrl.is_persistent());
        assert_eq!(ctrl.toggle(), ThemePreference::Dark);
        assert!(!ctrl.is_persistent());
        assert_eq!(ctrl.toggle(), ThemePreference::Light);
        assert_eq!(*doc.dark.borrow(), Some(false));
    }
}
