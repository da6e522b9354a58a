//! Tab content registry - the single place mapping a tab key to its panel.
//!
//! `resolve_tab` is total: any string resolves to a panel, with unknown keys
//! falling back to the default tab. Selecting a stale or mistyped key is not
//! an error condition anywhere in the app.

use super::tab_meta::TabId;
use crate::panels::{
    AiControlCenter, AirportManagement, AdsbTracking, EmergencyResponse, FlightOperations,
    MaintenanceSystem, PassengerExperience, PredictiveAnalytics, UserManagement, WeatherSafety,
};
use leptos::logging::log;
use leptos::prelude::*;

/// Maps any key to a registered tab. Unknown keys resolve to the default.
pub fn resolve_tab(key: &str) -> TabId {
    TabId::from_key(key).unwrap_or_default()
}

/// Renders the panel for the given tab key.
pub fn render_tab_content(key: &str) -> AnyView {
    let tab = match TabId::from_key(key) {
        Some(tab) => tab,
        None => {
            log!(
                "unknown tab key '{}', showing '{}'",
                key,
                TabId::default().key()
            );
            TabId::default()
        }
    };

    match tab {
        TabId::Operations => view! { <FlightOperations /> }.into_any(),
        TabId::Maintenance => view! { <MaintenanceSystem /> }.into_any(),
        TabId::Passengers => view! { <PassengerExperience /> }.into_any(),
        TabId::Weather => view! { <WeatherSafety /> }.into_any(),
        TabId::Tracking => view! { <AdsbTracking /> }.into_any(),
        TabId::Analytics => view! { <PredictiveAnalytics /> }.into_any(),
        TabId::AiSystems => view! { <AiControlCenter /> }.into_any(),
        TabId::Airport => view! { <AirportManagement /> }.into_any(),
        TabId::Emergency => view! { <EmergencyResponse /> }.into_any(),
        TabId::Users => view! { <UserManagement /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_keys_resolve_to_themselves() {
        for tab in TabId::ALL {
            assert_eq!(resolve_tab(tab.key()), tab);
        }
    }

    #[test]
    fn unknown_keys_resolve_to_default() {
        assert_eq!(resolve_tab("bogus"), TabId::Operations);
        assert_eq!(resolve_tab(""), TabId::Operations);
        assert_eq!(resolve_tab("ai_systems"), TabId::Operations);
    }
}
