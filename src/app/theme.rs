use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos_use::{
    storage::{use_local_storage_with_options, UseStorageError, UseStorageOptions},
    use_preferred_dark,
};

use crate::theme::ThemePreference;
#[cfg(feature = "hydrate")]
use crate::theme::{
    MemoryStore, StorageError, ThemeController, ThemeDocument, ThemeStore, DARK_CLASS, STORAGE_KEY,
};

/// localStorage through leptos-use; an empty string means nothing is stored.
/// leptos-use writes in an effect, so write failures arrive through `failure`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy)]
struct LocalStore {
    stored: Signal<String>,
    set_stored: WriteSignal<String>,
    failure: RwSignal<Option<StorageError>>,
}

#[cfg(feature = "hydrate")]
impl LocalStore {
    fn failed(&self) -> Result<(), StorageError> {
        match self.failure.get_untracked() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[cfg(feature = "hydrate")]
impl ThemeStore for LocalStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        self.failed()?;
        let value = self.stored.get_untracked();
        Ok((!value.is_empty()).then_some(value))
    }

    fn save(&mut self, value: &str) -> Result<(), StorageError> {
        self.failed()?;
        self.set_stored.set(value.to_string());
        Ok(())
    }
}

/// localStorage when the browser offers it, else a session-only copy.
#[cfg(feature = "hydrate")]
enum BrowserStore {
    Local(LocalStore),
    Session(MemoryStore),
}

#[cfg(feature = "hydrate")]
impl ThemeStore for BrowserStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match self {
            Self::Local(store) => store.load(),
            Self::Session(store) => store.load(),
        }
    }

    fn save(&mut self, value: &str) -> Result<(), StorageError> {
        match self {
            Self::Local(store) => store.save(value),
            Self::Session(store) => store.save(value),
        }
    }
}

#[cfg(feature = "hydrate")]
fn storage_error<E: std::fmt::Debug, D: std::fmt::Debug>(err: UseStorageError<E, D>) -> StorageError {
    match err {
        UseStorageError::StorageNotAvailable(_) | UseStorageError::StorageReturnedNone => {
            StorageError::Unavailable
        }
        other => StorageError::Rejected(format!("{other:?}")),
    }
}

/// The `<html>` element's class list.
#[cfg(feature = "hydrate")]
struct DocumentRoot;

#[cfg(feature = "hydrate")]
impl ThemeDocument for DocumentRoot {
    fn apply(&mut self, preference: ThemePreference) {
        let Some(root) = document().document_element() else {
            log::warn!("no document element to theme");
            return;
        };
        if let Err(e) = root
            .class_list()
            .toggle_with_force(DARK_CLASS, preference.is_dark())
        {
            log::warn!("couldn't toggle {DARK_CLASS} class: {e:?}");
        }
    }
}

/// Shared theme state, provided once by the shell.
#[derive(Clone, Copy)]
pub struct Theme {
    preference: RwSignal<ThemePreference>,
    #[cfg(feature = "hydrate")]
    controller: StoredValue<Option<ThemeController<BrowserStore, DocumentRoot>>>,
}

impl Theme {
    pub fn is_dark(&self) -> bool {
        self.preference.get().is_dark()
    }

    pub fn toggle(&self) {
        #[cfg(feature = "hydrate")]
        {
            let mut next = None;
            self.controller
                .update_value(|c| next = c.as_mut().map(|c| c.toggle()));
            if let Some(next) = next {
                self.preference.set(next);
                return;
            }
        }
        // not mounted yet
        self.preference.update(|p| *p = p.toggled());
    }
}

pub fn provide_theme() -> Theme {
    let preference = RwSignal::new(ThemePreference::default());

    #[cfg(feature = "hydrate")]
    let controller = {
        let failure = RwSignal::new(None::<StorageError>);
        let (stored, set_stored, _) = use_local_storage_with_options::<String, FromToStringCodec>(
            STORAGE_KEY,
            UseStorageOptions::default().on_error(move |e| failure.set(Some(storage_error(e)))),
        );
        let prefers_dark = use_preferred_dark();
        let controller = StoredValue::new(None);

        Effect::watch(
            || (),
            move |_, _, _| {
                let store = match failure.get_untracked() {
                    Some(StorageError::Unavailable) => {
                        log::warn!("localStorage unavailable, theme kept for this session only");
                        BrowserStore::Session(MemoryStore::default())
                    }
                    _ => BrowserStore::Local(LocalStore {
                        stored,
                        set_stored,
                        failure,
                    }),
                };
                let ctrl = ThemeController::init(store, DocumentRoot, prefers_dark.get_untracked());
                preference.set(ctrl.preference());
                controller.set_value(Some(ctrl));
            },
            true,
        );
        Effect::watch(
            move || failure.get(),
            move |err, _, _| {
                if let Some(e) = err.clone() {
                    controller.update_value(|c| {
                        if let Some(c) = c.as_mut() {
                            c.storage_failed(e);
                        }
                    });
                }
            },
            false,
        );
        controller
    };

    let theme = Theme {
        preference,
        #[cfg(feature = "hydrate")]
        controller,
    };
    provide_context(theme);
    theme
}
