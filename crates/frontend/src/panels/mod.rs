mod ai_systems;
mod airport;
mod analytics;
mod emergency;
mod maintenance;
mod operations;
mod passengers;
mod tracking;
mod users;
mod weather;

pub use ai_systems::AiControlCenter;
pub use airport::AirportManagement;
pub use analytics::PredictiveAnalytics;
pub use emergency::EmergencyResponse;
pub use maintenance::MaintenanceSystem;
pub use operations::FlightOperations;
pub use passengers::PassengerExperience;
pub use tracking::AdsbTracking;
pub use users::UserManagement;
pub use weather::WeatherSafety;
