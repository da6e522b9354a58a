use crate::enums::StatusTone;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Availability of a response service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceState {
    Ready,
    Active,
    External,
}

impl ServiceState {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceState::Ready => "Ready",
            ServiceState::Active => "Active",
            ServiceState::External => "External",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            ServiceState::Ready => StatusTone::Positive,
            ServiceState::Active => StatusTone::Info,
            ServiceState::External => StatusTone::Neutral,
        }
    }
}

/// One emergency service contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceContact {
    pub service: String,
    pub number: String,
    pub response_time: String,
    pub state: ServiceState,
}

/// Checklist for one class of incident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcedureSheet {
    pub category: String,
    pub steps: Vec<String>,
}

/// Snapshot of overall readiness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessSummary {
    pub alert_level: String,
    pub active_incidents: u32,
    pub response_teams_ready: u32,
    pub last_drill: NaiveDate,
    pub next_drill: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_state_mapping_is_total() {
        for state in [
            ServiceState::Ready,
            ServiceState::Active,
            ServiceState::External,
        ] {
            assert!(!state.label().is_empty());
            let _ = state.tone();
        }
    }
}
