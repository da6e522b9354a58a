pub mod global_context;
pub mod hover_menu;
pub mod nav;
pub mod tabs;
