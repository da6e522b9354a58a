use crate::enums::StatusTone;
use serde::{Deserialize, Serialize};

/// Crowd level in a terminal zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OccupancyLevel {
    Normal,
    Moderate,
    High,
}

impl OccupancyLevel {
    pub fn label(&self) -> &'static str {
        match self {
            OccupancyLevel::Normal => "Normal",
            OccupancyLevel::Moderate => "Moderate",
            OccupancyLevel::High => "High",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            OccupancyLevel::Normal => StatusTone::Positive,
            OccupancyLevel::Moderate => StatusTone::Caution,
            OccupancyLevel::High => StatusTone::Critical,
        }
    }
}

/// Throughput of one biometric checkpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointStats {
    pub checkpoint: String,
    pub processed: u32,
    pub average_time: String,
    pub success_rate: String,
}

/// Occupancy of one terminal zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneLoad {
    pub zone: String,
    pub occupancy: u32,
    pub capacity: u32,
    pub level: OccupancyLevel,
}

impl ZoneLoad {
    /// Occupancy as a 0..=100 percentage, saturating at capacity.
    pub fn percent(&self) -> u32 {
        if self.capacity == 0 {
            return 0;
        }
        (self.occupancy * 100 / self.capacity).min(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_saturates_at_capacity() {
        let zone = ZoneLoad {
            zone: "Security".into(),
            occupancy: 250,
            capacity: 200,
            level: OccupancyLevel::High,
        };
        assert_eq!(zone.percent(), 100);
    }

    #[test]
    fn percent_of_empty_capacity_is_zero() {
        let zone = ZoneLoad {
            zone: "Closed wing".into(),
            occupancy: 10,
            capacity: 0,
            level: OccupancyLevel::Normal,
        };
        assert_eq!(zone.percent(), 0);
    }
}
