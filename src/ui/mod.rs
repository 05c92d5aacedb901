//! User interface module

pub mod app;
pub mod components;
pub mod style;

pub use app::UiApp;
pub use style::TableStyle;
