pub mod actions;
pub mod app;
pub mod context_menu;
pub mod find_replace;
pub mod preview;
pub mod table;
pub mod toolbar;
