use crate::enums::StatusTone;
use serde::{Deserialize, Serialize};

/// Health of one automation subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubsystemHealth {
    Active,
    Training,
    Offline,
}

impl SubsystemHealth {
    pub fn label(&self) -> &'static str {
        match self {
            SubsystemHealth::Active => "Active",
            SubsystemHealth::Training => "Training",
            SubsystemHealth::Offline => "Offline",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            SubsystemHealth::Active => StatusTone::Positive,
            SubsystemHealth::Training => StatusTone::Info,
            SubsystemHealth::Offline => StatusTone::Critical,
        }
    }
}

/// One AI subsystem on the control-center grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiSubsystem {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub health: SubsystemHealth,
    /// Model accuracy, 0..=100.
    pub accuracy: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_mapping_is_total() {
        for health in [
            SubsystemHealth::Active,
            SubsystemHealth::Training,
            SubsystemHealth::Offline,
        ] {
            assert!(!health.label().is_empty());
            let _ = health.tone();
        }
    }
}
