use crate::enums::StatusTone;
use serde::{Deserialize, Serialize};

/// Current use of a gate stand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateStatus {
    Occupied,
    Boarding,
    Available,
    Maintenance,
    Cleaning,
}

impl GateStatus {
    pub fn label(&self) -> &'static str {
        match self {
            GateStatus::Occupied => "Occupied",
            GateStatus::Boarding => "Boarding",
            GateStatus::Available => "Available",
            GateStatus::Maintenance => "Maintenance",
            GateStatus::Cleaning => "Cleaning",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            GateStatus::Occupied => StatusTone::Info,
            GateStatus::Boarding => StatusTone::Info,
            GateStatus::Available => StatusTone::Positive,
            GateStatus::Maintenance => StatusTone::Caution,
            GateStatus::Cleaning => StatusTone::Caution,
        }
    }
}

/// Staffing pressure on a ground resource pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceStatus {
    Optimal,
    Normal,
    High,
}

impl ResourceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ResourceStatus::Optimal => "Optimal",
            ResourceStatus::Normal => "Normal",
            ResourceStatus::High => "High",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            ResourceStatus::Optimal => StatusTone::Positive,
            ResourceStatus::Normal => StatusTone::Info,
            ResourceStatus::High => StatusTone::Caution,
        }
    }
}

/// One ground resource pool (crew, vehicles, fuel trucks).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundResource {
    pub name: String,
    pub available: u32,
    pub scheduled: u32,
    pub utilization: u32,
    pub status: ResourceStatus,
}

/// Assignment state of one gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateAssignment {
    pub id: String,
    /// Flight number currently at the stand, if any.
    pub aircraft: Option<String>,
    pub status: GateStatus,
    pub scheduled_departure: Option<String>,
    pub passengers: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_status_mapping_is_total() {
        for status in [
            GateStatus::Occupied,
            GateStatus::Boarding,
            GateStatus::Available,
            GateStatus::Maintenance,
            GateStatus::Cleaning,
        ] {
            assert!(!status.label().is_empty());
            let _ = status.tone();
        }
    }

    #[test]
    fn free_gate_has_no_aircraft() {
        let gate = GateAssignment {
            id: "A3".into(),
            aircraft: None,
            status: GateStatus::Available,
            scheduled_departure: None,
            passengers: 0,
        };
        assert_eq!(gate.status.tone(), StatusTone::Positive);
        assert!(gate.aircraft.is_none());
    }
}
