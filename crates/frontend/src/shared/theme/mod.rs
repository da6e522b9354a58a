//! Theme management: a light/dark flag persisted in localStorage.
//!
//! The stored value wins; with no (or a garbled) stored value the system
//! color-scheme preference decides. Toggling applies immediately via a
//! `data-theme` attribute on `<body>`.

use leptos::prelude::*;
use web_sys::window;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Theme name as stored in localStorage and set on `data-theme`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parses a stored value. Anything unrecognized counts as absent so the
    /// caller can fall back to the system preference.
    pub fn from_stored(s: &str) -> Option<Self> {
        match s {
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
        *self == Theme::Dark
    }
}

const THEME_STORAGE_KEY: &str = "aviation-dashboard-theme";

/// System color-scheme preference, light when the query is unavailable.
fn system_preference() -> Theme {
    let prefers_dark = window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false);
    if prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

fn load_theme_from_storage() -> Theme {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .and_then(|s| Theme::from_stored(&s))
        .unwrap_or_else(system_preference)
}

fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

fn apply_theme(theme: Theme) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Set the theme, persist it, and apply it to the page at once.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme_to_storage(theme);
        apply_theme(theme);
    }

    pub fn toggle_dark_mode(&self) {
        let next = self.theme.get_untracked().toggled();
        self.set_theme(next);
    }
}

/// Provides the theme context and applies the initial theme.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial_theme = load_theme_from_storage();
    let theme = RwSignal::new(initial_theme);
    apply_theme(initial_theme);

    provide_context(ThemeContext { theme });

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Sun/moon toggle button for the navigation bar.
#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="navbar__icon-btn"
            on:click=move |_| ctx.toggle_dark_mode()
            title="Toggle dark mode"
        >
            {move || {
                if ctx.theme.get().is_dark() {
                    crate::shared::icons::icon("sun")
                } else {
                    crate::shared::icons::icon("moon")
                }
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_values_parse() {
        assert_eq!(Theme::from_stored("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_stored("light"), Some(Theme::Light));
    }

    #[test]
    fn malformed_stored_value_counts_as_absent() {
        assert_eq!(Theme::from_stored(""), None);
        assert_eq!(Theme::from_stored("Dark"), None);
        assert_eq!(Theme::from_stored("true"), None);
    }

    #[test]
    fn double_toggle_round_trips() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
    }
}
