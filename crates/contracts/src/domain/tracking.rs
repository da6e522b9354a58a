use crate::enums::StatusTone;
use serde::{Deserialize, Serialize};

/// Flight phase reported on the ADS-B feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackPhase {
    EnRoute,
    Approach,
    Climbing,
    OnGround,
}

impl TrackPhase {
    pub fn label(&self) -> &'static str {
        match self {
            TrackPhase::EnRoute => "En Route",
            TrackPhase::Approach => "Approach",
            TrackPhase::Climbing => "Climbing",
            TrackPhase::OnGround => "On Ground",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            TrackPhase::EnRoute => StatusTone::Info,
            TrackPhase::Approach => StatusTone::Caution,
            TrackPhase::Climbing => StatusTone::Info,
            TrackPhase::OnGround => StatusTone::Neutral,
        }
    }
}

/// One transponder return on the tracking map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedFlight {
    pub callsign: String,
    pub longitude: f64,
    pub latitude: f64,
    /// Track heading in degrees, 0 = north.
    pub heading: f64,
    pub altitude_ft: u32,
    pub ground_speed_kt: u32,
    pub phase: TrackPhase,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_mapping_is_total() {
        for phase in [
            TrackPhase::EnRoute,
            TrackPhase::Approach,
            TrackPhase::Climbing,
            TrackPhase::OnGround,
        ] {
            assert!(!phase.label().is_empty());
            let _ = phase.tone();
        }
    }
}
