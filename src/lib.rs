pub mod config;
pub mod core;
pub mod gui;
pub mod logging;
pub mod persistence;

pub use config::AppConfig;
pub use gui::AgriApp;
