pub mod app;
pub mod audio;
pub mod data;
pub mod model;
pub mod session;
pub mod theme;
pub mod ui;

pub use app::UnitApp;
