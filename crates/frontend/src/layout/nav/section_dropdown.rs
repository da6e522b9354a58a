//! One navigation section: a trigger plus its hover dropdown.
//!
//! Enter and leave handlers sit on the wrapper, so moving the pointer from
//! the trigger into the dropdown body never counts as leaving. The close
//! timer for this section lives here; arming a new one always clears the
//! previous handle first.

use crate::layout::global_context::NavContext;
use crate::layout::hover_menu::DROPDOWN_CLOSE_DELAY_MS;
use crate::layout::tabs::{resolve_tab, SectionId};
use crate::shared::icons::icon;
use crate::shared::timers::{clear_timeout, set_timeout};
use leptos::prelude::*;

#[component]
pub fn SectionDropdown(section: SectionId) -> impl IntoView {
    let ctx = use_context::<NavContext>().expect("NavContext not found");

    let close_timer = StoredValue::new(None::<i32>);

    let is_open = move || ctx.dropdown.get().open_section() == Some(section);
    let section_active = move || resolve_tab(&ctx.active.get()).section() == section;

    let on_enter = move |_| {
        if let Some(id) = close_timer.get_value() {
            clear_timeout(id);
            close_timer.set_value(None);
        }
        ctx.dropdown.update(|menu| menu.pointer_enter(section));
    };

    let on_leave = move |_| {
        let token = ctx.dropdown.try_update(|menu| menu.pointer_leave()).flatten();
        if let Some(token) = token {
            if let Some(id) = close_timer.get_value() {
                clear_timeout(id);
            }
            let dropdown = ctx.dropdown;
            let id = set_timeout(DROPDOWN_CLOSE_DELAY_MS, move || {
                dropdown.update(|menu| {
                    menu.close_elapsed(token);
                });
            });
            close_timer.set_value(id);
        }
    };

    view! {
        <div class="navbar__group" on:mouseenter=on_enter on:mouseleave=on_leave>
            <button
                class="navbar__group-trigger"
                class:navbar__group-trigger--active=section_active
            >
                <span>{section.label()}</span>
                {icon("chevron-down")}
            </button>

            <Show when=is_open>
                <div class="navbar__dropdown">
                    <div class="navbar__dropdown-header">
                        <span class="navbar__dropdown-title">{section.label()}</span>
                        <span class="navbar__dropdown-desc">{section.description()}</span>
                    </div>
                    {section
                        .tabs()
                        .iter()
                        .map(|tab| {
                            let tab = *tab;
                            view! {
                                <button
                                    class="navbar__dropdown-item"
                                    class:navbar__dropdown-item--active=move || {
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
                    <div class="navbar__dropdown-footer">
                        <span class="navbar__dropdown-status">{section.status_line()}</span>
                        <span class="navbar__dropdown-usage">{section.usage_hint()}</span>
                    </div>
                </div>
            </Show>
        </div>
    }
}
