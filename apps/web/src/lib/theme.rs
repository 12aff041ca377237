//! Page theme as an explicit value threaded through context. Persistence is
//! delegated to an injected [`ThemeStore`] rather than read from a browser
//! global at call sites; applying a theme sets `data-theme` on the document
//! root so the stylesheet can react.

use leptos::prelude::*;
use std::sync::Arc;

const THEME_STORAGE_KEY: &str = "loftline.theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parses a persisted value; unknown strings fall back to the default.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Persistence collaborator for the theme preference.
pub trait ThemeStore {
    fn load(&self) -> Option<Theme>;
    fn save(&self, theme: Theme);
}

#[derive(Clone, Copy, Default)]
/// Persists the theme under a `localStorage` key.
pub struct LocalStorageThemeStore;

impl ThemeStore for LocalStorageThemeStore {
    fn load(&self) -> Option<Theme> {
        let storage = web_sys::window()?.local_storage().ok()??;
        let value = storage.get_item(THEME_STORAGE_KEY).ok()??;
        Some(Theme::parse(&value))
    }

    fn save(&self, theme: Theme) {
        let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten())
        else {
            return;
        };
        if storage.set_item(THEME_STORAGE_KEY, theme.as_str()).is_err() {
            log::warn!("failed to persist theme preference");
        }
    }
}

#[derive(Clone)]
/// Theme value plus its persistence collaborator, shared through context.
pub struct ThemeContext {
    theme: RwSignal<Theme>,
    store: Arc<dyn ThemeStore + Send + Sync>,
}

impl ThemeContext {
    fn new(store: Arc<dyn ThemeStore + Send + Sync>) -> Self {
        let initial = store.load().unwrap_or_default();
        Self {
            theme: RwSignal::new(initial),
            store,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
        self.store.save(next);
    }
}

/// Provides the theme context and mirrors the value onto the document root.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let context = ThemeContext::new(Arc::new(LocalStorageThemeStore));
    provide_context(context.clone());

    let theme = context.theme;
    Effect::new(move |_| apply_document_theme(theme.get()));

    view! { {children()} }
}

/// Returns the theme context or a detached fallback.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
        .unwrap_or_else(|| ThemeContext::new(Arc::new(LocalStorageThemeStore)))
}

fn apply_document_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };
    if root.set_attribute("data-theme", theme.as_str()).is_err() {
        log::warn!("failed to apply theme attribute");
    }
}

#[cfg(test)]
mod tests {
    use super::{Theme, ThemeStore};
    use std::cell::Cell;

    #[derive(Default)]
    struct MemoryThemeStore {
        value: Cell<Option<Theme>>,
    }

    impl ThemeStore for MemoryThemeStore {
        fn load(&self) -> Option<Theme> {
            self.value.get()
        }

        fn save(&self, theme: Theme) {
            self.value.set(Some(theme));
        }
    }

    #[test]
    fn parse_defaults_unknown_values_to_light() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse(" dark "), Theme::Dark);
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("solarized"), Theme::Light);
        assert_eq!(Theme::parse(""), Theme::Light);
    }

    #[test]
    fn toggled_flips_between_variants() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn store_round_trips_the_preference() {
        let store = MemoryThemeStore::default();
        assert_eq!(store.load(), None);
        store.save(Theme::Dark);
        assert_eq!(store.load(), Some(Theme::Dark));
    }
}
