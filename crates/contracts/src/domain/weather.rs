use crate::enums::StatusTone;
use serde::{Deserialize, Serialize};

/// Operational risk assessed from station conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            RiskLevel::Low => StatusTone::Positive,
            RiskLevel::Medium => StatusTone::Caution,
            RiskLevel::High => StatusTone::Critical,
        }
    }
}

/// Lifecycle of a safety alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertState {
    Active,
    Resolved,
}

impl AlertState {
    pub fn label(&self) -> &'static str {
        match self {
            AlertState::Active => "Active",
            AlertState::Resolved => "Resolved",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            AlertState::Active => StatusTone::Critical,
            AlertState::Resolved => StatusTone::Positive,
        }
    }
}

/// Latest observation from one reporting station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationReport {
    pub location: String,
    pub temperature: String,
    pub wind: String,
    pub visibility: String,
    pub conditions: String,
    pub risk: RiskLevel,
}

/// Safety alert issued against a station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyAlert {
    pub kind: String,
    pub severity: RiskLevel,
    pub location: String,
    pub message: String,
    /// Issue time, local "HH:MM".
    pub time: String,
    pub state: AlertState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_mapping_is_total() {
        for risk in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
            assert!(!risk.label().is_empty());
            let _ = risk.tone();
        }
    }

    #[test]
    fn resolved_alert_reads_positive() {
        assert_eq!(AlertState::Resolved.tone(), StatusTone::Positive);
        assert_eq!(AlertState::Active.tone(), StatusTone::Critical);
    }
}
