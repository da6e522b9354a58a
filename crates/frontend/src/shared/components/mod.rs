mod stat_card;
mod status_badge;

pub use stat_card::StatCard;
pub use status_badge::{tone_class, tone_icon, StatusBadge};
