pub mod components;
pub mod icons;
pub mod map_view;
pub mod theme;
pub mod timers;
