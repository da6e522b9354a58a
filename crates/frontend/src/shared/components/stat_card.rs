use crate::shared::icons::icon;
use contracts::enums::StatusTone;
use leptos::prelude::*;

/// Key-metric card used at the top of every panel.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Formatted value, rendered as-is
    #[prop(into)]
    value: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Accent tone; neutral by default
    #[prop(optional, into)]
    tone: Option<StatusTone>,
) -> impl IntoView {
    let tone = tone.unwrap_or(StatusTone::Neutral);

    view! {
        <div class=format!("stat-card stat-card--{}", tone.code())>
            <div class="stat-card__text">
                <p class="stat-card__label">{label}</p>
                <p class="stat-card__value">{value}</p>
            </div>
            <div class="stat-card__icon">{icon(&icon_name)}</div>
        </div>
    }
}
