use crate::enums::StatusTone;
use serde::{Deserialize, Serialize};

/// Operational status of a scheduled flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightStatus {
    OnTime,
    Delayed,
    Boarding,
    Departed,
    Cancelled,
}

impl FlightStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FlightStatus::OnTime => "On Time",
            FlightStatus::Delayed => "Delayed",
            FlightStatus::Boarding => "Boarding",
            FlightStatus::Departed => "Departed",
            FlightStatus::Cancelled => "Cancelled",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            FlightStatus::OnTime => StatusTone::Positive,
            FlightStatus::Delayed => StatusTone::Critical,
            FlightStatus::Boarding => StatusTone::Info,
            FlightStatus::Departed => StatusTone::Neutral,
            FlightStatus::Cancelled => StatusTone::Critical,
        }
    }

    pub fn all() -> [FlightStatus; 5] {
        [
            FlightStatus::OnTime,
            FlightStatus::Delayed,
            FlightStatus::Boarding,
            FlightStatus::Departed,
            FlightStatus::Cancelled,
        ]
    }
}

/// One row of the departures board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    /// Flight number, e.g. "UG001".
    pub id: String,
    /// "Origin → Destination".
    pub route: String,
    pub aircraft: String,
    pub status: FlightStatus,
    /// Scheduled departure, local time "HH:MM".
    pub departure: String,
    /// Scheduled arrival, local time "HH:MM".
    pub arrival: String,
    pub passengers: u32,
    pub gate: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_label_and_tone() {
        for status in FlightStatus::all() {
            assert!(!status.label().is_empty());
            // Total mapping: the call itself must not panic.
            let _ = status.tone();
        }
    }

    #[test]
    fn delayed_is_critical() {
        assert_eq!(FlightStatus::Delayed.tone(), StatusTone::Critical);
        assert_eq!(FlightStatus::OnTime.tone(), StatusTone::Positive);
    }
}
