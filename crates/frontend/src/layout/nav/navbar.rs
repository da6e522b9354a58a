//! Application navigation bar: brand block, section dropdowns, dark-mode
//! toggle and the narrow-viewport menu.

use super::section_dropdown::SectionDropdown;
use crate::layout::global_context::NavContext;
use crate::layout::tabs::{SectionId, TabId};
use crate::shared::icons::icon;
use crate::shared::theme::DarkModeToggle;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<NavContext>().expect("NavContext not found");

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <div class="navbar__brand">
                    <div class="navbar__logo">
                        {icon("plane")}
                        <span class="navbar__logo-dot"></span>
                    </div>
                    <div>
                        <h1 class="navbar__title">"Smart Aviation Platform"</h1>
                        <div class="navbar__subtitle">
                            <span class="navbar__region">"Uganda"</span>
                            <span class="navbar__version">"v2.1"</span>
                        </div>
                    </div>
                </div>

                <div class="navbar__actions">
                    <DarkModeToggle />
                    <button
                        class="navbar__menu-btn"
                        on:click=move |_| ctx.toggle_menu()
                        title="Menu"
                    >
                        {move || if ctx.menu_open.get() { icon("x") } else { icon("menu") }}
                    </button>
                </div>
            </div>

            // Wide viewport: grouped sections with hover dropdowns
            <div class="navbar__sections">
                {SectionId::ALL
                    .iter()
                    .map(|section| view! { <SectionDropdown section=*section /> })
                    .collect_view()}
            </div>

            // Narrow viewport: flat slide-down list, closed by any selection
            <Show when=move || ctx.menu_open.get()>
                <div class="navbar__mobile">
                    {TabId::ALL
                        .iter()
                        .map(|tab| {
                            let tab = *tab;
                            view! {
                                <button
                                    class="navbar__mobile-item"
                                    class:navbar__mobile-item--active=move || {
                                        ctx.active.get() == tab.key()
                                    }
                                    on:click=move |_| ctx.set_active_tab(tab.key())
                                >
                                    {icon(tab.icon_name())}
                                    <span>{tab.label()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
