pub mod app;
pub mod form;
pub mod response_panel;
pub mod theme;

pub use app::AgriApp;
