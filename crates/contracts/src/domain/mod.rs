pub mod ai_systems;
pub mod airport;
pub mod analytics;
pub mod emergency;
pub mod flights;
pub mod maintenance;
pub mod passengers;
pub mod tracking;
pub mod users;
pub mod weather;
