use crate::layout::global_context::NavContext;
use crate::layout::nav::Navbar;
use crate::layout::tabs::render_tab_content;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Single owner of navigation state, provided to the whole app via context.
    let nav = NavContext::new();
    provide_context(nav);

    // Restore the active tab from the URL and keep the URL in sync.
    nav.init_router_integration();

    view! {
        <ThemeProvider>
            <div class="app-shell">
                <Navbar />
                <main class="app-content">
                    {move || render_tab_content(&nav.active.get())}
                </main>
            </div>
        </ThemeProvider>
    }
}
