use crate::shared::icons::icon;
use contracts::enums::StatusTone;
use leptos::prelude::*;

/// CSS class for a badge with the given tone.
pub fn tone_class(tone: StatusTone) -> String {
    format!("status-badge status-badge--{}", tone.code())
}

/// Glyph shown inside a badge with the given tone.
pub fn tone_icon(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Positive => "check-circle",
        StatusTone::Info => "clock",
        StatusTone::Caution => "alert-circle",
        StatusTone::Critical => "alert-triangle",
        StatusTone::Neutral => "minus",
    }
}

/// Small pill with a glyph and a status label.
#[component]
pub fn StatusBadge(#[prop(into)] label: String, tone: StatusTone) -> impl IntoView {
    view! {
        <span class=tone_class(tone)>
            {icon(tone_icon(tone))}
            <span class="status-badge__label">{label}</span>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tone_gets_a_distinct_class() {
        let classes: Vec<_> = StatusTone::all().iter().map(|t| tone_class(*t)).collect();
        let mut unique = classes.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(classes.len(), unique.len());
    }
}
