use crate::layout::hover_menu::HoverMenu;
use crate::layout::tabs::TabId;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Single owner of navigation state: the active tab key plus the ephemeral
/// UI flags (mobile menu, hover dropdown). Provided once at the app root and
/// read everywhere via context.
#[derive(Clone, Copy)]
pub struct NavContext {
    /// Raw active-tab key. Kept as given even for unregistered values; the
    /// registry's fallback decides what actually renders.
    pub active: RwSignal<String>,
    pub menu_open: RwSignal<bool>,
    pub dropdown: RwSignal<HoverMenu>,
}

impl NavContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(TabId::default().key().to_string()),
            menu_open: RwSignal::new(false),
            dropdown: RwSignal::new(HoverMenu::new()),
        }
    }

    /// Replaces the active tab and resets every ephemeral flag: the mobile
    /// menu and any open dropdown close on navigation.
    pub fn set_active_tab(&self, key: &str) {
        self.active.set(key.to_string());
        self.menu_open.set(false);
        self.dropdown.update(|menu| menu.reset());
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    pub fn close_menu(&self) {
        self.menu_open.set(false);
    }

    /// Mirrors the active tab into the URL query so a view can be shared and
    /// restored. Reads `?active=<key>` once at startup, then keeps the URL in
    /// sync with `history.replace_state` (no reload, no history spam).
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = params.get("active") {
            self.set_active_tab(active_key);
        }

        let this = *self;
        Effect::new(move |_| {
            let active_key = this.active.get();
            let query_string =
                serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            // Untracked read: the URL is an output here, not a dependency.
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for NavContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tabs::resolve_tab;

    #[test]
    fn starts_on_default_tab() {
        let ctx = NavContext::new();
        assert_eq!(ctx.active.get_untracked(), TabId::default().key());
        assert!(!ctx.menu_open.get_untracked());
    }

    #[test]
    fn set_active_tab_reads_back() {
        let ctx = NavContext::new();
        for tab in TabId::ALL {
            ctx.set_active_tab(tab.key());
            assert_eq!(ctx.active.get_untracked(), tab.key());
        }
    }

    #[test]
    fn unregistered_key_is_stored_but_resolves_to_default() {
        let ctx = NavContext::new();
        ctx.set_active_tab("weather");
        ctx.set_active_tab("bogus");
        // The stored key is whatever was last set...
        assert_eq!(ctx.active.get_untracked(), "bogus");
        // ...while resolution falls back to the default panel.
        assert_eq!(resolve_tab(&ctx.active.get_untracked()), TabId::Operations);
    }

    #[test]
    fn navigation_closes_menu_and_dropdown() {
        use crate::layout::hover_menu::HoverState;
        use crate::layout::tabs::SectionId;

        let ctx = NavContext::new();
        ctx.toggle_menu();
        ctx.dropdown
            .update(|menu| menu.pointer_enter(SectionId::Operations));
        ctx.set_active_tab("weather");
        assert!(!ctx.menu_open.get_untracked());
        assert_eq!(ctx.dropdown.get_untracked().state(), HoverState::Closed);
    }

    #[test]
    fn toggle_menu_flips() {
        let ctx = NavContext::new();
        ctx.toggle_menu();
        assert!(ctx.menu_open.get_untracked());
        ctx.toggle_menu();
        assert!(!ctx.menu_open.get_untracked());
        ctx.toggle_menu();
        ctx.close_menu();
        assert!(!ctx.menu_open.get_untracked());
    }
}
