//! Tab identifiers and navigation sections - the single source of truth for
//! which panels exist and how the navigation groups them.

/// Closed set of dashboard panels. Unknown keys never construct a `TabId`;
/// resolution falls back to [`TabId::default`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabId {
    #[default]
    Operations,
    Maintenance,
    Passengers,
    Weather,
    Tracking,
    Analytics,
    AiSystems,
    Airport,
    Emergency,
    Users,
}

impl TabId {
    pub const ALL: [TabId; 10] = [
        TabId::Operations,
        TabId::Maintenance,
        TabId::Passengers,
        TabId::Weather,
        TabId::Tracking,
        TabId::Analytics,
        TabId::AiSystems,
        TabId::Airport,
        TabId::Emergency,
        TabId::Users,
    ];

    /// Stable string key, used in the URL query and the nav context.
    pub fn key(&self) -> &'static str {
        match self {
            TabId::Operations => "operations",
            TabId::Maintenance => "maintenance",
            TabId::Passengers => "passengers",
            TabId::Weather => "weather",
            TabId::Tracking => "tracking",
            TabId::Analytics => "analytics",
            TabId::AiSystems => "ai-systems",
            TabId::Airport => "airport",
            TabId::Emergency => "emergency",
            TabId::Users => "users",
        }
    }

    pub fn from_key(key: &str) -> Option<TabId> {
        match key {
            "operations" => Some(TabId::Operations),
            "maintenance" => Some(TabId::Maintenance),
            "passengers" => Some(TabId::Passengers),
            "weather" => Some(TabId::Weather),
            "tracking" => Some(TabId::Tracking),
            "analytics" => Some(TabId::Analytics),
            "ai-systems" => Some(TabId::AiSystems),
            "airport" => Some(TabId::Airport),
            "emergency" => Some(TabId::Emergency),
            "users" => Some(TabId::Users),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TabId::Operations => "Flight Operations",
            TabId::Maintenance => "Maintenance",
            TabId::Passengers => "Passengers",
            TabId::Weather => "Weather & Safety",
            TabId::Tracking => "ADS-B Tracking",
            TabId::Analytics => "Predictive Analytics",
            TabId::AiSystems => "AI Control Center",
            TabId::Airport => "Airport Management",
            TabId::Emergency => "Emergency Response",
            TabId::Users => "User Management",
        }
    }

    /// Glyph name understood by `shared::icons::icon`.
    pub fn icon_name(&self) -> &'static str {
        match self {
            TabId::Operations => "plane",
            TabId::Maintenance => "wrench",
            TabId::Passengers => "users",
            TabId::Weather => "cloud-rain",
            TabId::Tracking => "radar",
            TabId::Analytics => "trending-up",
            TabId::AiSystems => "cpu",
            TabId::Airport => "building",
            TabId::Emergency => "alert-triangle",
            TabId::Users => "user-check",
        }
    }

    /// The navigation section this tab belongs to. Total, so every tab lands
    /// in exactly one dropdown.
    pub fn section(&self) -> SectionId {
        match self {
            TabId::Operations => SectionId::Operations,
            TabId::Tracking => SectionId::Operations,
            TabId::Weather => SectionId::Operations,
            TabId::Analytics => SectionId::Intelligence,
            TabId::AiSystems => SectionId::Intelligence,
            TabId::Airport => SectionId::Infrastructure,
            TabId::Maintenance => SectionId::Infrastructure,
            TabId::Passengers => SectionId::Services,
            TabId::Emergency => SectionId::Services,
            TabId::Users => SectionId::Services,
        }
    }
}

/// Display grouping of tabs in the navigation bar. Carries the dropdown
/// metadata only; no runtime state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Operations,
    Intelligence,
    Infrastructure,
    Services,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Operations,
        SectionId::Intelligence,
        SectionId::Infrastructure,
        SectionId::Services,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Operations => "Operations",
            SectionId::Intelligence => "Intelligence",
            SectionId::Infrastructure => "Infrastructure",
            SectionId::Services => "Services",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SectionId::Operations => "Live flight activity, tracking and weather",
            SectionId::Intelligence => "Forecasting and AI-assisted automation",
            SectionId::Infrastructure => "Airport resources and fleet upkeep",
            SectionId::Services => "Passenger flow, response and staff access",
        }
    }

    /// Short status line shown in the dropdown footer.
    pub fn status_line(&self) -> &'static str {
        match self {
            SectionId::Operations => "All systems nominal",
            SectionId::Intelligence => "Models up to date",
            SectionId::Infrastructure => "1 stand in maintenance",
            SectionId::Services => "No active incidents",
        }
    }

    /// Usage figure shown next to the status line.
    pub fn usage_hint(&self) -> &'static str {
        match self {
            SectionId::Operations => "24 active flights",
            SectionId::Intelligence => "4 models live",
            SectionId::Infrastructure => "6 of 8 gates in use",
            SectionId::Services => "3,247 passengers today",
        }
    }

    pub fn tabs(&self) -> &'static [TabId] {
        match self {
            SectionId::Operations => &[TabId::Operations, TabId::Tracking, TabId::Weather],
            SectionId::Intelligence => &[TabId::Analytics, TabId::AiSystems],
            SectionId::Infrastructure => &[TabId::Airport, TabId::Maintenance],
            SectionId::Services => &[TabId::Passengers, TabId::Emergency, TabId::Users],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_round_trip() {
        for tab in TabId::ALL {
            assert_eq!(TabId::from_key(tab.key()), Some(tab));
        }
    }

    #[test]
    fn keys_are_distinct() {
        let keys: HashSet<_> = TabId::ALL.iter().map(|t| t.key()).collect();
        assert_eq!(keys.len(), TabId::ALL.len());
    }

    #[test]
    fn unknown_key_does_not_parse() {
        assert_eq!(TabId::from_key("bogus"), None);
        assert_eq!(TabId::from_key(""), None);
        assert_eq!(TabId::from_key("Operations"), None);
    }

    #[test]
    fn default_tab_is_operations() {
        assert_eq!(TabId::default(), TabId::Operations);
    }

    #[test]
    fn sections_partition_all_tabs() {
        let mut seen = HashSet::new();
        for section in SectionId::ALL {
            for tab in section.tabs() {
                assert!(seen.insert(*tab), "{:?} listed in two sections", tab);
                assert_eq!(tab.section(), section);
            }
        }
        assert_eq!(seen.len(), TabId::ALL.len());
    }

    #[test]
    fn labels_and_icons_are_nonempty() {
        for tab in TabId::ALL {
            assert!(!tab.label().is_empty());
            assert!(!tab.icon_name().is_empty());
        }
    }
}
