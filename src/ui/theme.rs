//! Theme context
//!
//! Provides:
//! - BrowserStorage, a `window.localStorage` backend for preferences
//! - ThemeContext, the reactive face of the theme store
//! - System theme detection via prefers-color-scheme
//!
//! The server always renders the light theme. In the browser the stored
//! preference is applied right after hydration, so both renders match.

use leptos::prelude::*;

use crate::core::theme::Theme;

#[cfg(not(feature = "ssr"))]
use crate::core::{
    storage::{PreferenceStorage, StorageError},
    theme::{DARK_CLASS, ThemeStore},
};
#[cfg(not(feature = "ssr"))]
use crate::ui::notifications::{NotificationManager, use_notifications};
#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// Preference storage over `window.localStorage`.
///
/// When the browser refuses access (private mode, disabled storage) every
/// call fails with [`StorageError::Unavailable`].
#[cfg(not(feature = "ssr"))]
pub struct BrowserStorage {
    inner: Result<web_sys::Storage, StorageError>,
}

#[cfg(not(feature = "ssr"))]
impl BrowserStorage {
    pub fn local() -> Self {
        let inner = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))
            .and_then(|window| {
                window
                    .local_storage()
                    .map_err(|err| StorageError::Unavailable(js_reason(&err)))?
                    .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
            });

        if let Err(err) = &inner {
            leptos::logging::warn!("{err}");
        }
        Self { inner }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.inner.as_ref().map_err(Clone::clone)
    }
}

#[cfg(not(feature = "ssr"))]
impl PreferenceStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|err| StorageError::Read {
                key: key.to_string(),
                reason: js_reason(&err),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                reason: js_reason(&err),
            })
    }
}

#[cfg(not(feature = "ssr"))]
fn js_reason(value: &leptos::wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Mirror of the store, updated by its subscriber
    theme: RwSignal<Theme>,
    #[cfg(not(feature = "ssr"))]
    store: StoredValue<ThemeStore<BrowserStorage>, LocalStorage>,
    #[cfg(not(feature = "ssr"))]
    notifications: NotificationManager,
}

impl ThemeContext {
    /// Current theme (tracked)
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn is_dark(&self) -> bool {
        self.theme().is_dark()
    }

    /// Flip the theme and persist it.
    ///
    /// The first failed write raises a warning toast; after that the store
    /// keeps the preference in memory and stops writing.
    pub fn toggle(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            let result = self.store.try_update_value(|store| store.toggle());
            if let Some(Err(err)) = result {
                self.notifications.warning(
                    "Theme not saved",
                    format!("Your choice applies until you leave the page ({err})."),
                );
            }
        }
    }
}

/// Detect system color scheme preference
#[cfg(not(feature = "ssr"))]
fn detect_system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Apply the dark class to the document element
#[cfg(not(feature = "ssr"))]
fn apply_root_class(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };

    let class_list = root.class_list();
    let result = match theme.root_class() {
        Some(class) => class_list.add_1(class),
        None => class_list.remove_1(DARK_CLASS),
    };
    if let Err(err) = result {
        leptos::logging::warn!("could not apply theme class: {}", js_reason(&err));
    }
}

/// Provide theme context to the application.
///
/// In the browser this needs the notification manager in context.
pub fn provide_theme_context() -> ThemeContext {
    #[cfg(feature = "ssr")]
    let ctx = {
        use crate::core::{storage::MemoryStorage, theme::ThemeStore};

        let initial = ThemeStore::load(MemoryStorage::new(), false).get();
        ThemeContext {
            theme: RwSignal::new(initial),
        }
    };

    #[cfg(not(feature = "ssr"))]
    let ctx = {
        let theme = RwSignal::new(Theme::Light);
        let mut store = ThemeStore::load(BrowserStorage::local(), detect_system_prefers_dark());
        let subscription = store.subscribe(move |next| {
            let _ = theme.try_set(next);
        });
        let store = StoredValue::new_local(store);
        on_cleanup(move || {
            let _ = store.try_update_value(|store| store.unsubscribe(subscription));
        });

        // Runs once, after hydration
        Effect::new(move |_| {
            if let Some(initial) = store.try_with_value(ThemeStore::get) {
                theme.set(initial);
            }
        });
        Effect::new(move |_| apply_root_class(theme.get()));

        ThemeContext {
            theme,
            store,
            notifications: use_notifications(),
        }
    };

    provide_context(ctx);
    ctx
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    expect_context::<ThemeContext>()
}
