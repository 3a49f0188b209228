//! Light/dark theme preference
//!
//! [`ThemeStore`] is the single owner of the preference: it resolves the
//! initial value, hands out change notifications and writes every change back
//! to storage. A storage failure never takes the preference down with it; the
//! store keeps working in memory for the rest of the session.

use derive_more::Display;
use leptos::logging::warn;

use crate::core::storage::{PreferenceStorage, StorageError};

/// Storage key holding the persisted preference
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class added to the document root while the dark theme is active
pub const DARK_CLASS: &str = "dark";

/// Display theme
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Display)]
pub enum Theme {
    #[default]
    #[display("light")]
    Light,
    #[display("dark")]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a persisted value. Anything other than `light`/`dark` is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Class the document root carries for this theme
    pub fn root_class(&self) -> Option<&'static str> {
        self.is_dark().then_some(DARK_CLASS)
    }

    /// Label for the toggle button, describing what clicking it does
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark mode",
            Theme::Dark => "Switch to light mode",
        }
    }
}

/// Resolve the starting theme: stored preference, then OS preference, then light
pub fn resolve_initial(stored: Option<&str>, system_prefers_dark: bool) -> Theme {
    match stored.and_then(Theme::parse) {
        Some(theme) => theme,
        None if system_prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Handle returned by [`ThemeStore::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(Theme)>;

/// Process-wide theme preference
pub struct ThemeStore<S> {
    theme: Theme,
    storage: S,
    persistent: bool,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl<S: PreferenceStorage> ThemeStore<S> {
    /// Build the store from whatever the storage holds.
    ///
    /// A read failure is logged and treated as "nothing stored".
    pub fn load(storage: S, system_prefers_dark: bool) -> Self {
        let stored = match storage.get(THEME_STORAGE_KEY) {
            Ok(value) => value,
            Err(err) => {
                warn!("theme preference could not be read: {err}");
                None
            }
        };

        Self {
            theme: resolve_initial(stored.as_deref(), system_prefers_dark),
            storage,
            persistent: true,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn get(&self) -> Theme {
        self.theme
    }

    /// False once a write has failed; later changes stay in memory only
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    /// Change the theme, notify subscribers and persist it.
    ///
    /// The in-memory value and the notifications happen even when the write
    /// fails. The error is returned so the caller can tell the user once.
    pub fn set(&mut self, theme: Theme) -> Result<(), StorageError> {
        self.theme = theme;
        for (_, subscriber) in &self.subscribers {
            subscriber(theme);
        }

        if !self.persistent {
            return Ok(());
        }

        self.storage
            .set(THEME_STORAGE_KEY, theme.as_str())
            .inspect_err(|err| {
                warn!("theme preference kept in memory only: {err}");
                self.persistent = false;
            })
    }

    /// Flip the theme; returns the new value on success
    pub fn toggle(&mut self) -> Result<Theme, StorageError> {
        let next = self.theme.toggled();
        self.set(next).map(|_| next)
    }

    pub fn subscribe(&mut self, subscriber: impl Fn(Theme) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns false if the id was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStorage;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Storage that refuses every write
    struct ReadOnlyStorage;

    impl PreferenceStorage for ReadOnlyStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(Some("dark".to_string()))
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                reason: "SecurityError".to_string(),
            })
        }
    }

    /// Storage whose reads fail
    struct UnreadableStorage;

    impl PreferenceStorage for UnreadableStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read {
                key: key.to_string(),
                reason: "denied".to_string(),
            })
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("Dark"), None);
        assert_eq!(Theme::parse("auto"), None);
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn test_root_class() {
        assert_eq!(Theme::Dark.root_class(), Some("dark"));
        assert_eq!(Theme::Light.root_class(), None);
    }

    #[test]
    fn test_resolve_initial_priority() {
        assert_eq!(resolve_initial(Some("light"), true), Theme::Light);
        assert_eq!(resolve_initial(Some("dark"), false), Theme::Dark);
        assert_eq!(resolve_initial(None, true), Theme::Dark);
        assert_eq!(resolve_initial(None, false), Theme::Light);
        assert_eq!(resolve_initial(Some("garbage"), true), Theme::Dark);
        assert_eq!(resolve_initial(Some("garbage"), false), Theme::Light);
    }

    #[test]
    fn test_load_uses_stored_value() {
        let store = ThemeStore::load(MemoryStorage::with_value(THEME_STORAGE_KEY, "dark"), false);
        assert_eq!(store.get(), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists() {
        let mut store = ThemeStore::load(MemoryStorage::new(), false);
        assert_eq!(store.toggle(), Ok(Theme::Dark));
        assert_eq!(
            store.storage().get(THEME_STORAGE_KEY),
            Ok(Some("dark".to_string()))
        );
    }

    #[test]
    fn test_toggle_twice_restores_theme_and_storage() {
        let mut store =
            ThemeStore::load(MemoryStorage::with_value(THEME_STORAGE_KEY, "light"), true);
        let original = store.get();
        let original_class = original.root_class();

        store.toggle().unwrap();
        store.toggle().unwrap();

        assert_eq!(store.get(), original);
        assert_eq!(store.get().root_class(), original_class);
        assert_eq!(
            store.storage().get(THEME_STORAGE_KEY),
            Ok(Some("light".to_string()))
        );
    }

    #[test]
    fn test_subscribers_are_notified() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = ThemeStore::load(MemoryStorage::new(), false);

        let sink = seen.clone();
        let id = store.subscribe(move |theme| sink.borrow_mut().push(theme));

        store.toggle().unwrap();
        store.set(Theme::Dark).unwrap();
        assert_eq!(*seen.borrow(), vec![Theme::Dark, Theme::Dark]);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.toggle().unwrap();
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_write_failure_degrades_to_memory() {
        let mut store = ThemeStore::load(ReadOnlyStorage, false);
        assert_eq!(store.get(), Theme::Dark);
        assert!(store.is_persistent());

        let result = store.toggle();
        assert!(matches!(result, Err(StorageError::Write { .. })));
        assert_eq!(store.get(), Theme::Light);
        assert!(!store.is_persistent());

        // Later writes are skipped rather than failing again
        assert_eq!(store.toggle(), Ok(Theme::Dark));
        assert_eq!(store.get(), Theme::Dark);
    }

    #[test]
    fn test_subscribers_notified_even_when_write_fails() {
        let seen = Rc::new(RefCell::new(None));
        let mut store = ThemeStore::load(ReadOnlyStorage, false);
        let sink = seen.clone();
        store.subscribe(move |theme| *sink.borrow_mut() = Some(theme));

        let _ = store.set(Theme::Light);
        assert_eq!(*seen.borrow(), Some(Theme::Light));
    }

    #[test]
    fn test_read_failure_falls_back_to_system_preference() {
        let store = ThemeStore::load(UnreadableStorage, true);
        assert_eq!(store.get(), Theme::Dark);
        let store = ThemeStore::load(UnreadableStorage, false);
        assert_eq!(store.get(), Theme::Light);
    }
}
