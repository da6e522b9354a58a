use crate::enums::StatusTone;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fleet availability state of an airframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AirframeStatus {
    Active,
    InMaintenance,
    Grounded,
}

impl AirframeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AirframeStatus::Active => "Active",
            AirframeStatus::InMaintenance => "Maintenance",
            AirframeStatus::Grounded => "Grounded",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            AirframeStatus::Active => StatusTone::Positive,
            AirframeStatus::InMaintenance => StatusTone::Caution,
            AirframeStatus::Grounded => StatusTone::Critical,
        }
    }
}

/// Reading level reported by an onboard IoT sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SensorLevel {
    Normal,
    Warning,
    Critical,
}

impl SensorLevel {
    pub fn label(&self) -> &'static str {
        match self {
            SensorLevel::Normal => "Normal",
            SensorLevel::Warning => "Warning",
            SensorLevel::Critical => "Critical",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            SensorLevel::Normal => StatusTone::Positive,
            SensorLevel::Warning => StatusTone::Caution,
            SensorLevel::Critical => StatusTone::Critical,
        }
    }
}

/// Maintenance record for one airframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airframe {
    /// Tail number, e.g. "5X-UGA".
    pub id: String,
    pub model: String,
    pub status: AirframeStatus,
    pub last_inspection: NaiveDate,
    pub next_maintenance: NaiveDate,
    pub flight_hours: u32,
    pub open_issues: u32,
}

/// Live reading from one monitored aircraft system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub name: String,
    pub value: String,
    pub threshold: String,
    pub level: SensorLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn airframe_status_mapping_is_total() {
        for status in [
            AirframeStatus::Active,
            AirframeStatus::InMaintenance,
            AirframeStatus::Grounded,
        ] {
            assert!(!status.label().is_empty());
            let _ = status.tone();
        }
    }

    #[test]
    fn sensor_warning_is_caution() {
        assert_eq!(SensorLevel::Warning.tone(), StatusTone::Caution);
        assert_eq!(SensorLevel::Critical.tone(), StatusTone::Critical);
    }
}
